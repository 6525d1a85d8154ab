//! Domain layer - Business logic and domain models

pub mod day;
pub mod metrics;
pub mod profile;
pub mod record;
pub mod session;
pub mod store;

pub use day::{Day, DayAnswer};
pub use metrics::{Extremes, MetricsAggregator, MetricsView, SummaryRow, Totals};
pub use profile::UserProfile;
pub use record::{TravelRecord, COST_RATE, EMISSION_RATE};
pub use session::Session;
pub use store::RecordStore;
