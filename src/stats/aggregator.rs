use crate::groups::GroupRecord;
use crate::stats::types::{CharStats, FrequencyTable, SummaryStats};

pub struct StatsAggregator;

impl StatsAggregator {
    /// Count member occurrences over all records in a single pass.
    ///
    /// Every head gets a zero entry so it is rankable even when no other
    /// group lists it. `total_relations` counts increments as they happen
    /// rather than summing the table afterwards.
    pub fn aggregate(records: &[GroupRecord]) -> CharStats {
        let mut frequency = FrequencyTable::new();
        let mut total_relations = 0;

        for record in records {
            frequency.seed(record.key);

            for &ch in record.similars.iter().chain(record.radicals.iter()) {
                frequency.increment(ch);
                total_relations += 1;
            }
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Aggregated {} groups into {} characters, {} relations",
            records.len(),
            frequency.len(),
            total_relations
        );

        CharStats {
            frequency,
            summary: SummaryStats {
                total_groups: records.len(),
                total_relations,
            },
        }
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
