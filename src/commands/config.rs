//! Config command - show or initialise the settings file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use invisink::config::Settings;

use super::CommandExecutor;

/// Show the active settings, or write a default settings file.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    /// Write default settings to the settings file (fails if it already exists)
    #[arg(long)]
    pub init: bool,

    /// Settings file to act on (default: ~/.invisink/config.toml)
    #[arg(long)]
    pub path: Option<PathBuf>,
}

impl ConfigCommand {
    /// The settings file this command targets.
    fn target_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(p) => Ok(p.clone()),
            None => Ok(Settings::config_path()?),
        }
    }

    /// Settings to display: the file named by --path, else the loaded ones.
    fn resolve_settings(&self, loaded: &Settings) -> Result<Settings> {
        match &self.path {
            Some(path) => Settings::load_from(path)
                .with_context(|| format!("Failed to load settings from {}", path.display())),
            None => Ok(loaded.clone()),
        }
    }
}

impl CommandExecutor for ConfigCommand {
    fn execute(&self, settings: &Settings) -> Result<()> {
        let path = self.target_path()?;

        if self.init {
            if path.exists() {
                anyhow::bail!("Settings file already exists: {}", path.display());
            }
            Settings::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Settings written to: {}", path.display());
            return Ok(());
        }

        let shown = self.resolve_settings(settings)?;
        let rendered = toml::to_string_pretty(&shown).context("Failed to render settings")?;
        println!("# {}", path.display());
        print!("{}", rendered);
        Ok(())
    }
}
