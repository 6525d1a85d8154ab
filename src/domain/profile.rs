//! User profile captured at setup

use crate::error::{Result, TrackerError};
use serde::Serialize;

pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;
pub const DEFAULT_AGE: u32 = 25;

/// The person whose commute is being tracked
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    name: String,
    age: u32,
    vehicle: String,
    city: String,
}

impl UserProfile {
    /// Validate setup input and build a profile.
    ///
    /// Text fields are trimmed; each must be non-empty afterwards.
    pub fn new(name: &str, age: u32, vehicle: &str, city: &str) -> Result<Self> {
        let name = required("name", name)?;
        let vehicle = required("vehicle", vehicle)?;
        let city = required("city", city)?;

        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(TrackerError::Validation(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, age
            )));
        }

        Ok(UserProfile {
            name,
            age,
            vehicle,
            city,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn vehicle(&self) -> &str {
        &self.vehicle
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
