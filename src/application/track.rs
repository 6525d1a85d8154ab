//! Weekly tracking use case

use crate::domain::{Day, DayAnswer, MetricsView, Session, UserProfile};
use crate::error::Result;
use crate::infrastructure::{export_to_dir, Config};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Service driving one tracking session with the loaded settings
pub struct TrackerService {
    session: Session,
    config: Config,
    root: PathBuf,
}

impl TrackerService {
    /// Create a service with a fresh session. `root` anchors relative
    /// export directories.
    pub fn new(config: Config, root: PathBuf) -> Self {
        TrackerService {
            session: Session::new(),
            config,
            root,
        }
    }

    pub fn setup(&mut self, name: &str, age: u32, vehicle: &str, city: &str) -> Result<&UserProfile> {
        self.session.setup(name, age, vehicle, city)
    }

    /// Save one day's answer and return the refreshed metrics
    pub fn save_day(
        &mut self,
        day: Day,
        answer: DayAnswer,
        destination: Option<&str>,
        distance: Option<f64>,
    ) -> Result<MetricsView> {
        self.session.save_day(
            day,
            answer,
            destination.unwrap_or_default(),
            distance.unwrap_or_default(),
        )
    }

    pub fn reset(&mut self) -> MetricsView {
        self.session.reset()
    }

    /// Export to `dir`, or to the configured export directory, stamped
    /// with today's local date.
    pub fn export(&self, dir: Option<&Path>) -> Result<PathBuf> {
        let target = match dir {
            Some(dir) => dir.to_path_buf(),
            None => self.config.export_dir_in(&self.root),
        };
        export_to_dir(&self.session, &target, Local::now().date_naive())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_inputs_for_traveled_day_fail_validation() {
        let mut service = TrackerService::new(Config::default(), PathBuf::from("."));
        service.setup("Asha", 25, "Swift", "Pune").unwrap();

        assert!(service
            .save_day(Day::Monday, DayAnswer::Traveled, None, Some(4.0))
            .is_err());
        assert!(service
            .save_day(Day::Monday, DayAnswer::Traveled, Some("Mall"), None)
            .is_err());
        let view = service
            .save_day(Day::Monday, DayAnswer::NotTraveled, None, None)
            .unwrap();
        assert_eq!(view.answered_days, 1);
    }

    #[test]
    fn test_export_uses_configured_dir() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            export_dir: PathBuf::from("out"),
            ..Config::default()
        };
        let mut service = TrackerService::new(config, temp.path().to_path_buf());
        service.setup("Asha", 25, "Swift", "Pune").unwrap();
        service
            .save_day(Day::Monday, DayAnswer::Traveled, Some("Mall"), Some(10.0))
            .unwrap();

        let path = service.export(None).unwrap();
        assert!(path.starts_with(temp.path().join("out")));
        assert!(path.exists());

        let explicit = temp.path().join("elsewhere");
        let path = service.export(Some(&explicit)).unwrap();
        assert!(path.starts_with(&explicit));
    }
}
