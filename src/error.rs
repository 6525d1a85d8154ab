//! Error types for the travel tracker

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the travel tracker
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Not a travel tracker directory: {0}")]
    NotTrackerDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Setup has not been completed")]
    NotSetUp,

    #[error("Setup is already complete")]
    AlreadySetUp,

    #[error("Unknown day: {0}")]
    UnknownDay(String),

    #[error("Invalid command: {0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TrackerError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::NotTrackerDirectory(_)
            | TrackerError::NotSetUp
            | TrackerError::AlreadySetUp => 2,
            TrackerError::Validation(_) | TrackerError::UnknownDay(_) => 3,
            TrackerError::Command(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrackerError::NotTrackerDirectory(path) => {
                format!(
                    "Not a travel tracker directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'travel init' in this directory to create a configuration\n\
                    • Set TRAVEL_ROOT environment variable to an initialized directory",
                    path.display()
                )
            }
            TrackerError::NotSetUp => "Setup has not been completed\n\n\
                Suggestions:\n\
                • Run: setup --name \"Your Name\" --vehicle \"Honda City\" --city Pune\n\
                • Age is optional and defaults to 25"
                .to_string(),
            TrackerError::AlreadySetUp => "Setup is already complete\n\n\
                Suggestions:\n\
                • Use 'profile' to see the current user\n\
                • Use 'reset' to discard the profile and all travel data"
                .to_string(),
            TrackerError::UnknownDay(day) => {
                format!(
                    "Unknown day: '{}'\n\n\
                    Valid days:\n\
                    • monday, tuesday, ..., sunday\n\
                    • mon, tue, ..., sun\n\
                    • today",
                    day
                )
            }
            TrackerError::Command(_) => {
                format!("{}\n\nType 'help' to see the available commands.", self)
            }
            TrackerError::Validation(msg) => {
                if msg.contains("distance") {
                    format!(
                        "{}\n\n\
                        Example: day monday yes --to \"City Mall\" --km 12.5",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TrackerError::NotSetUp.exit_code(), 2);
        assert_eq!(TrackerError::AlreadySetUp.exit_code(), 2);
        assert_eq!(TrackerError::Validation("x".to_string()).exit_code(), 3);
        assert_eq!(TrackerError::UnknownDay("x".to_string()).exit_code(), 3);
        assert_eq!(TrackerError::Command("x".to_string()).exit_code(), 4);
        assert_eq!(TrackerError::Config("x".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_not_tracker_directory_suggestion() {
        let err = TrackerError::NotTrackerDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("travel init"));
        assert!(msg.contains("TRAVEL_ROOT"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_not_set_up_suggestion() {
        let msg = TrackerError::NotSetUp.display_with_suggestions();
        assert!(msg.contains("setup --name"));
        assert!(msg.contains("defaults to 25"));
    }

    #[test]
    fn test_unknown_day_lists_valid_days() {
        let msg = TrackerError::UnknownDay("someday".to_string()).display_with_suggestions();
        assert!(msg.contains("'someday'"));
        assert!(msg.contains("monday"));
        assert!(msg.contains("today"));
    }

    #[test]
    fn test_distance_validation_has_example() {
        let err = TrackerError::Validation("distance must be greater than 0".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--km 12.5"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TrackerError::Config("bad key".to_string());
        assert_eq!(
            err.display_with_suggestions(),
            "Configuration error: bad key"
        );
    }
}
