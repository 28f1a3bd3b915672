//! Configuration module

use crate::{Error, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanning settings
    #[serde(default)]
    pub scan: ScanConfig,
    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Confirmation prompt settings
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Scan configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directory checked when none is given on the command line
    pub root: Option<PathBuf>,
    /// Follow symlinks while walking
    #[serde(default)]
    pub follow_links: bool,
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory for timestamped report files (current directory when unset)
    pub output_dir: Option<PathBuf>,
}

/// Prompt configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Answer yes to every confirmation without asking
    #[serde(default)]
    pub assume_yes: bool,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or_else(|| Error::Config("Unable to determine config directory".to_string()))?;

        let app_dir = config_dir.join("arcscan");
        if !app_dir.exists() {
            fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir.join("config.toml"))
    }

    /// Get default configuration content with examples
    pub fn default_config_content() -> String {
        r#"# arcscan Configuration File

[scan]
# Directory to check when no path is passed to `arcscan check`
# root = "/home/me/Downloads"
# Follow symlinks while walking the tree
follow_links = false

[report]
# Where timestamped compression_check_results_*.json files are written
# (defaults to the current directory)
# output_dir = "/home/me/reports"

[prompt]
# Answer yes to the save and extract confirmations without asking
assume_yes = false
"#
        .to_string()
    }

    /// Load configuration from file, creating a commented default when missing
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            fs::write(&path, Self::default_config_content())?;
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Save configuration to a specific file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration or use defaults if loading fails
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
