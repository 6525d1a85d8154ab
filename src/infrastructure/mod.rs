//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod export;
pub mod repository;

pub use config::Config;
pub use export::{export_file_name, export_to_dir, write_csv};
pub use repository::{load_settings, FileSystemRepository, SettingsRepository};
