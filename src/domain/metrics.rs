//! Aggregate metrics over the record store

use crate::domain::{Day, RecordStore, TravelRecord};
use serde::Serialize;

/// Sums over the traveled days
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub total_distance: f64,
    pub total_cost: f64,
    pub total_emission: f64,
}

/// Highest and lowest daily emission among traveled days.
///
/// Both are 0 when nothing was traveled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Extremes {
    pub max_emission: f64,
    pub min_emission: f64,
}

/// One line of the detailed summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub day: Day,
    pub destination: String,
    pub distance: f64,
    pub cost: f64,
    pub emission: f64,
}

impl From<&TravelRecord> for SummaryRow {
    fn from(record: &TravelRecord) -> Self {
        SummaryRow {
            day: record.day(),
            destination: record.destination().to_string(),
            distance: record.distance(),
            cost: record.cost(),
            emission: record.emission(),
        }
    }
}

/// Owned snapshot of every metric, returned after each session mutation
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricsView {
    pub answered_days: usize,
    pub day_count: usize,
    pub totals: Totals,
    pub extremes: Extremes,
    pub rows: Vec<SummaryRow>,
}

impl MetricsView {
    /// True when at least one day has an answer
    pub fn has_answers(&self) -> bool {
        self.answered_days > 0
    }
}

/// Read-only view computing metrics from the current store contents
#[derive(Debug, Clone, Copy)]
pub struct MetricsAggregator<'a> {
    store: &'a RecordStore,
}

impl<'a> MetricsAggregator<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        MetricsAggregator { store }
    }

    fn traveled(&self) -> impl Iterator<Item = &'a TravelRecord> {
        let store: &'a RecordStore = self.store;
        store.iter().filter(|record| record.is_traveled())
    }

    /// Traveled records in canonical weekday order
    pub fn traveled_subset(&self) -> Vec<TravelRecord> {
        self.traveled().cloned().collect()
    }

    pub fn totals(&self) -> Totals {
        self.traveled().fold(Totals::default(), |acc, record| Totals {
            total_distance: acc.total_distance + record.distance(),
            total_cost: acc.total_cost + record.cost(),
            total_emission: acc.total_emission + record.emission(),
        })
    }

    pub fn extremes(&self) -> Extremes {
        let mut emissions = self.traveled().map(|record| record.emission());
        let Some(first) = emissions.next() else {
            return Extremes::default();
        };

        let (max_emission, min_emission) =
            emissions.fold((first, first), |(max, min), e| (max.max(e), min.min(e)));
        Extremes {
            max_emission,
            min_emission,
        }
    }

    pub fn day_count(&self) -> usize {
        self.traveled().count()
    }

    pub fn summary_rows(&self) -> Vec<SummaryRow> {
        self.traveled().map(SummaryRow::from).collect()
    }

    /// Each traveled day's share of the total cost, in `0.0..=1.0`.
    ///
    /// Empty when the total cost is zero.
    pub fn cost_shares(&self) -> Vec<(Day, f64)> {
        let total = self.totals().total_cost;
        if total <= 0.0 {
            return Vec::new();
        }
        self.traveled()
            .map(|record| (record.day(), record.cost() / total))
            .collect()
    }

    pub fn view(&self) -> MetricsView {
        MetricsView {
            answered_days: self.store.len(),
            day_count: self.day_count(),
            totals: self.totals(),
            extremes: self.extremes(),
            rows: self.summary_rows(),
        }
    }
}
