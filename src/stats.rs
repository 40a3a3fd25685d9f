//! Stats module for character frequency
//!
//! Counts how often each character shows up as a member of some group
//! (its "heat") and keeps the summary totals shown in the header.

mod aggregator;
mod types;

pub use aggregator::StatsAggregator;
pub use types::{CharStats, FrequencyTable, SummaryStats};
