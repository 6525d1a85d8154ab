//! Config management use case

use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use std::path::PathBuf;

const VALID_KEYS: &str = "currency_symbol, export_dir, chart_width";

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "currency_symbol" => Ok(config.currency_symbol),
            "export_dir" => Ok(config.export_dir.display().to_string()),
            "chart_width" => Ok(config.chart_width.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "currency_symbol" => {
                config.currency_symbol = value.to_string();
            }
            "export_dir" => {
                if value.trim().is_empty() {
                    return Err(TrackerError::Config(
                        "export_dir cannot be empty".to_string(),
                    ));
                }
                config.export_dir = PathBuf::from(value);
            }
            "chart_width" => {
                config.chart_width = value.parse().map_err(|_| {
                    TrackerError::Config(format!(
                        "chart_width must be a whole number, got '{}'",
                        value
                    ))
                })?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> TrackerError {
    TrackerError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::default()).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert_eq!(service.get("currency_symbol").unwrap(), "₹");
        assert_eq!(service.get("chart_width").unwrap(), "30");
        assert_eq!(service.get("export_dir").unwrap(), ".");
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("currency_symbol", "$").unwrap();
        service.set("chart_width", "50").unwrap();
        service.set("export_dir", "exports").unwrap();

        let config = service.list().unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.chart_width, 50);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }

    #[test]
    fn test_invalid_values_not_saved() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(service.set("chart_width", "wide").is_err());
        assert!(service.set("chart_width", "500").is_err());
        assert!(service.set("export_dir", " ").is_err());
        assert_eq!(service.get("chart_width").unwrap(), "30");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.get("cost_rate").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'cost_rate'"));
        assert!(service.set("cost_rate", "80").is_err());
    }
}
