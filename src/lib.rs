//! travel-tracker - weekly commute tracker
//!
//! Records, per day of the week, whether the user traveled, where and how
//! far, and derives travel cost and carbon emissions from the distance.
//! Totals, extremes, charts and a CSV export are computed from an
//! in-memory session.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrackerError;
