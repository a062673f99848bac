//! Configuration management for ongkir
//!
//! Config stored at: ~/.config/ongkir/config.json

use ongkir_types::{City, ConfigError, OutputFormat, PackageCategory, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Origin preselected for new estimates
    #[serde(default = "default_origin")]
    pub default_origin: City,

    /// Destination preselected for new estimates
    #[serde(default = "default_destination")]
    pub default_destination: City,

    /// Package category preselected for new estimates
    #[serde(default = "default_category")]
    pub default_category: PackageCategory,

    /// Whether insurance is ticked by default
    #[serde(default)]
    pub default_insured: bool,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_origin() -> City {
    City::Jakarta
}

fn default_destination() -> City {
    City::Bandung
}

fn default_category() -> PackageCategory {
    PackageCategory::Documents
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_origin: default_origin(),
            default_destination: default_destination(),
            default_category: default_category(),
            default_insured: false,
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("ongkir");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::SaveError(format!("{}: {}", parent.display(), e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Restore every setting to its default
    pub fn reset(&mut self) {
        *self = Config::default();
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ongkir Configuration")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(f, "Origin:         {}", self.default_origin)?;
        writeln!(f, "Destination:    {}", self.default_destination)?;
        writeln!(f, "Category:       {}", self.default_category)?;
        writeln!(f, "Insured:        {}", self.default_insured)?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
