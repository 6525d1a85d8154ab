//! Session aggregate: profile, travel records and setup state

use crate::domain::{Day, DayAnswer, MetricsAggregator, MetricsView, RecordStore, UserProfile};
use crate::error::{Result, TrackerError};
use tracing::debug;

/// Everything one user is tracking.
///
/// A session starts in the pre-setup state. `setup` installs the profile,
/// `reset` discards the profile and every record and returns to the
/// pre-setup state. Sessions are plain owned values; nothing is shared
/// between them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    profile: Option<UserProfile>,
    store: RecordStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate setup input and start tracking
    pub fn setup(&mut self, name: &str, age: u32, vehicle: &str, city: &str) -> Result<&UserProfile> {
        if self.profile.is_some() {
            return Err(TrackerError::AlreadySetUp);
        }

        let profile = UserProfile::new(name, age, vehicle, city)?;
        debug!(name = profile.name(), city = profile.city(), "setup complete");
        let profile: &UserProfile = self.profile.insert(profile);
        Ok(profile)
    }

    pub fn is_setup_complete(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Profile of a set-up session, or `NotSetUp`
    pub fn require_profile(&self) -> Result<&UserProfile> {
        self.profile.as_ref().ok_or(TrackerError::NotSetUp)
    }

    /// Save the answer for `day` and return the refreshed metrics
    pub fn save_day(
        &mut self,
        day: Day,
        answer: DayAnswer,
        destination: &str,
        distance: f64,
    ) -> Result<MetricsView> {
        self.require_profile()?;

        let traveled = match answer {
            DayAnswer::Traveled => true,
            DayAnswer::NotTraveled => false,
            DayAnswer::Unset => {
                return Err(TrackerError::Validation(format!(
                    "choose whether you traveled on {}",
                    day
                )))
            }
        };

        self.store.upsert(day, traveled, destination, distance)?;
        Ok(self.metrics().view())
    }

    /// Discard the profile and every record
    pub fn reset(&mut self) -> MetricsView {
        debug!(had_profile = self.profile.is_some(), "session reset");
        self.profile = None;
        self.store.reset();
        self.metrics().view()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn metrics(&self) -> MetricsAggregator<'_> {
        MetricsAggregator::new(&self.store)
    }
}
