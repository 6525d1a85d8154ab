//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod track;

pub use manage_config::ConfigService;
pub use track::TrackerService;
