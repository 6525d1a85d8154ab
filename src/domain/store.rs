//! In-memory store of per-day travel records

use crate::domain::{Day, DayAnswer, TravelRecord};
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Holds at most one record per day.
///
/// Keyed by `Day`, so iteration is always in canonical weekday order
/// regardless of the order answers were saved in.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<Day, TravelRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the answer for `day`, replacing any previous record.
    ///
    /// The store is left untouched when validation fails.
    pub fn upsert(
        &mut self,
        day: Day,
        traveled: bool,
        destination: &str,
        distance: f64,
    ) -> Result<TravelRecord> {
        let record = TravelRecord::from_input(day, traveled, destination, distance)?;
        let replaced = self.records.insert(day, record.clone()).is_some();
        debug!(
            day = %day,
            traveled,
            distance = record.distance(),
            replaced,
            "saved travel record"
        );
        Ok(record)
    }

    pub fn get(&self, day: Day) -> Option<&TravelRecord> {
        self.records.get(&day)
    }

    /// Every record in canonical weekday order
    pub fn all(&self) -> Vec<TravelRecord> {
        self.records.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TravelRecord> {
        self.records.values()
    }

    /// The selector state for `day`
    pub fn answer(&self, day: Day) -> DayAnswer {
        match self.records.get(&day) {
            None => DayAnswer::Unset,
            Some(record) if record.is_traveled() => DayAnswer::Traveled,
            Some(_) => DayAnswer::NotTraveled,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn reset(&mut self) {
        debug!(cleared = self.records.len(), "reset travel records");
        self.records.clear();
    }
}
