//! Per-day travel record and its derived cost and emission

use crate::domain::Day;
use crate::error::{Result, TrackerError};
use serde::Serialize;

/// Currency units charged per kilometre
pub const COST_RATE: f64 = 75.0;

/// Grams of CO2-equivalent emitted per kilometre
pub const EMISSION_RATE: f64 = 125.0;

/// One day's travel answer.
///
/// Fields are private: a record either has `traveled == false` with every
/// other value zeroed, or `traveled == true` with a non-empty destination,
/// a positive distance and cost/emission derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelRecord {
    day: Day,
    traveled: bool,
    destination: String,
    distance: f64,
    cost: f64,
    emission: f64,
}

impl TravelRecord {
    /// Record that no travel happened on `day`
    pub fn not_traveled(day: Day) -> Self {
        TravelRecord {
            day,
            traveled: false,
            destination: String::new(),
            distance: 0.0,
            cost: 0.0,
            emission: 0.0,
        }
    }

    /// Record a trip of `distance` km to `destination` on `day`
    pub fn traveled(day: Day, destination: &str, distance: f64) -> Result<Self> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TrackerError::Validation(format!(
                "destination is required for {}",
                day
            )));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(TrackerError::Validation(format!(
                "distance must be greater than 0 km for {}, got {}",
                day, distance
            )));
        }

        let cost = distance * COST_RATE;
        let emission = distance * EMISSION_RATE;
        if !cost.is_finite() || !emission.is_finite() {
            return Err(TrackerError::Validation(format!(
                "distance of {} km for {} is too large",
                distance, day
            )));
        }

        Ok(TravelRecord {
            day,
            traveled: true,
            destination: destination.to_string(),
            distance,
            cost,
            emission,
        })
    }

    /// Build a record from raw form input, ignoring destination and
    /// distance when `traveled` is false.
    pub fn from_input(day: Day, traveled: bool, destination: &str, distance: f64) -> Result<Self> {
        if traveled {
            Self::traveled(day, destination, distance)
        } else {
            Ok(Self::not_traveled(day))
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn is_traveled(&self) -> bool {
        self.traveled
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn emission(&self) -> f64 {
        self.emission
    }
}
