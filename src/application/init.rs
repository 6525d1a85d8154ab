//! Initialize settings use case

use crate::error::{Result, TrackerError};
use crate::infrastructure::{Config, FileSystemRepository, SettingsRepository};
use std::fs;
use std::path::Path;

/// Create `.travel/config.toml` with default settings at `path`.
/// An existing `.travel` directory without a config file is completed.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    if !repo.is_initialized() {
        repo.initialize()?;
    } else {
        match repo.load_config() {
            Err(TrackerError::NotTrackerDirectory(_)) => {}
            Ok(_) => {
                return Err(TrackerError::Config(format!(
                    "Directory already initialized: {}",
                    path.display()
                )))
            }
            Err(e) => return Err(e),
        }
    }
    repo.save_config(&Config::default())?;

    println!("Initialized travel tracker settings at {}", path.display());

    Ok(())
}
