//! Configuration management

use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_DIR: &str = ".travel";
pub const CONFIG_FILE: &str = "config.toml";

pub const MIN_CHART_WIDTH: usize = 5;
pub const MAX_CHART_WIDTH: usize = 120;

/// Presentation settings. Rates are fixed and never configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Symbol printed before cost amounts
    pub currency_symbol: String,
    /// Directory CSV exports are written to when none is given
    pub export_dir: PathBuf,
    /// Width of the terminal bar charts, in characters
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_symbol: "₹".to_string(),
            export_dir: PathBuf::from("."),
            chart_width: 30,
        }
    }
}

impl Config {
    /// Load config from .travel/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TrackerError::NotTrackerDirectory(path.to_path_buf())
            } else {
                TrackerError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| TrackerError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .travel/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        info!(path = %config_path.display(), "saved configuration");

        Ok(())
    }

    /// Reject values the renderer cannot use
    pub fn validate(&self) -> Result<()> {
        if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&self.chart_width) {
            return Err(TrackerError::Config(format!(
                "chart_width must be between {} and {}, got {}",
                MIN_CHART_WIDTH, MAX_CHART_WIDTH, self.chart_width
            )));
        }
        Ok(())
    }

    /// Resolve the export directory against the directory the config lives in
    pub fn export_dir_in(&self, root: &Path) -> PathBuf {
        if self.export_dir.is_absolute() {
            self.export_dir.clone()
        } else {
            root.join(&self.export_dir)
        }
    }
}
