//! Day-of-week keys and the per-day answer selector

use crate::error::{Result, TrackerError};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week a travel record belongs to.
///
/// Variant order is the canonical weekday order (Monday first), so the
/// derived `Ord` sorts records the way they are displayed and aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in canonical order
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Day of the week for a calendar date
    pub fn of_date(date: NaiveDate) -> Self {
        Day::from(date.weekday())
    }

    /// Parse a day name, also accepting `today` resolved against `base_date`
    pub fn parse_relative(input: &str, base_date: NaiveDate) -> Result<Self> {
        if input.trim().eq_ignore_ascii_case("today") {
            return Ok(Day::of_date(base_date));
        }
        Day::from_str(input)
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
            Weekday::Sun => Day::Sunday,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            _ => Err(TrackerError::UnknownDay(s.to_string())),
        }
    }
}

/// Answer to "did you travel on this day?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayAnswer {
    /// No answer recorded yet
    #[default]
    Unset,
    Traveled,
    NotTraveled,
}

impl DayAnswer {
    pub fn label(&self) -> &'static str {
        match self {
            DayAnswer::Unset => "Select",
            DayAnswer::Traveled => "Yes",
            DayAnswer::NotTraveled => "No",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let mut days = vec![Day::Sunday, Day::Wednesday, Day::Monday, Day::Friday];
        days.sort();
        assert_eq!(
            days,
            vec![Day::Monday, Day::Wednesday, Day::Friday, Day::Sunday]
        );
        assert!(Day::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_from_str_full_and_short_names() {
        assert_eq!(Day::from_str("Monday").unwrap(), Day::Monday);
        assert_eq!(Day::from_str("SUNDAY").unwrap(), Day::Sunday);
        assert_eq!(Day::from_str("thu").unwrap(), Day::Thursday);
        assert_eq!(Day::from_str("  Sat ").unwrap(), Day::Saturday);
    }

    #[test]
    fn test_from_str_invalid() {
        match Day::from_str("funday") {
            Err(TrackerError::UnknownDay(s)) => assert_eq!(s, "funday"),
            other => panic!("Expected UnknownDay, got {:?}", other),
        }
        assert!(Day::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for day in Day::ALL {
            assert_eq!(Day::from_str(&day.to_string()).unwrap(), day);
        }
    }

    #[test]
    fn test_today_resolves_from_date() {
        // January 17, 2025 was a Friday
        let base = NaiveDate::from_ymd_opt(2025, 1, 17).unwrap();
        assert_eq!(Day::parse_relative("today", base).unwrap(), Day::Friday);
        assert_eq!(Day::parse_relative("Today", base).unwrap(), Day::Friday);
        assert_eq!(Day::parse_relative("mon", base).unwrap(), Day::Monday);
    }

    #[test]
    fn test_answer_labels() {
        assert_eq!(DayAnswer::default(), DayAnswer::Unset);
        assert_eq!(DayAnswer::Unset.label(), "Select");
        assert_eq!(DayAnswer::Traveled.label(), "Yes");
        assert_eq!(DayAnswer::NotTraveled.label(), "No");
    }
}
