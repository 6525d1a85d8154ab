//! Settings repository backed by a `.travel` directory

use crate::error::{Result, TrackerError};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for tracker settings
pub trait SettingsRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .travel/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .travel/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .travel directory exists
    fn is_initialized(&self) -> bool;

    /// Create .travel directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of SettingsRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the settings root.
    /// First checks TRAVEL_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("TRAVEL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TrackerError::Config(format!(
                    "TRAVEL_ROOT is set to '{}' but no .travel directory found. \
                    Run 'travel init' in that directory or unset TRAVEL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing `.travel` is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(TrackerError::NotTrackerDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }
}

impl SettingsRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(TrackerError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }
}

/// Settings for the current directory: the discovered config, or defaults
/// when there is no `.travel` directory or it holds no config.toml.
pub fn load_settings() -> Result<(PathBuf, Config)> {
    match FileSystemRepository::discover() {
        Ok(repo) => match repo.load_config() {
            Ok(config) => Ok((repo.root, config)),
            Err(TrackerError::NotTrackerDirectory(_)) => Ok((repo.root, Config::default())),
            Err(e) => Err(e),
        },
        Err(TrackerError::NotTrackerDirectory(_)) => {
            Ok((std::env::current_dir()?, Config::default()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".travel").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        let err = repo.initialize().unwrap_err();
        assert!(err.to_string().contains("already initialized"));
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root(), temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::discover_from(temp.path()) {
            Err(TrackerError::NotTrackerDirectory(path)) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotTrackerDirectory, got {:?}", other),
        }
    }

    #[test]
    fn test_config_round_trip_through_repository() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let config = Config {
            chart_width: 12,
            ..Config::default()
        };
        repo.save_config(&config).unwrap();
        assert_eq!(repo.load_config().unwrap(), config);
    }
}
