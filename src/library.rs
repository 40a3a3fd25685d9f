//! The parsed character table and its statistics
//!
//! A [`Library`] is built once and never changes afterwards. Queries borrow
//! it through [`Library::query`].

use crate::config::Config;
use crate::dataset::RAW_GROUPS;
use crate::error::ChaoyinError;
use crate::groups::{GroupParseError, GroupParser, GroupRecord, IngestPolicy, find_duplicate_keys};
use crate::query::QueryEngine;
use crate::stats::{CharStats, FrequencyTable, StatsAggregator, SummaryStats};

#[derive(Debug, Clone)]
pub struct Library {
    records: Vec<GroupRecord>,
    stats: CharStats,
}

impl Library {
    /// Build from the compiled-in table, skipping any malformed entry
    pub fn builtin() -> Self {
        let records = GroupParser::parse_all(RAW_GROUPS, IngestPolicy::Lenient).unwrap_or_default();
        Self::from_records(records)
    }

    /// Build from the compiled-in table with the configured ingest policy
    pub fn from_config(config: &Config) -> Result<Self, ChaoyinError> {
        Ok(Self::from_entries(RAW_GROUPS, config.dataset.policy)?)
    }

    pub fn from_entries<S: AsRef<str>>(
        entries: &[S],
        policy: IngestPolicy,
    ) -> Result<Self, GroupParseError> {
        let records = GroupParser::parse_all(entries, policy)?;
        Ok(Self::from_records(records))
    }

    /// Aggregate already-parsed records.
    ///
    /// Duplicate keys are kept and logged; forward lookups use the first.
    pub fn from_records(records: Vec<GroupRecord>) -> Self {
        for key in find_duplicate_keys(&records) {
            log::warn!("Group key {:?} appears more than once; the first entry wins", key);
        }

        let stats = StatsAggregator::aggregate(&records);
        Self { records, stats }
    }

    pub fn records(&self) -> &[GroupRecord] {
        &self.records
    }

    pub fn summary(&self) -> SummaryStats {
        self.stats.summary
    }

    pub fn frequency(&self) -> &FrequencyTable {
        &self.stats.frequency
    }

    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.records, &self.stats.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::RelationMode;

    #[test]
    fn test_builtin_summary() {
        let library = Library::builtin();
        assert_eq!(library.summary().total_groups, RAW_GROUPS.len());
        assert_eq!(library.summary().total_relations, library.frequency().total());
    }

    #[test]
    fn test_from_entries_lenient() {
        let library = Library::from_entries(&["abc", "木(本)(林)"], IngestPolicy::Lenient).unwrap();
        assert_eq!(library.records().len(), 1);
        assert_eq!(library.summary().total_relations, 2);
    }

    #[test]
    fn test_from_entries_strict_error() {
        let result = Library::from_entries(&["木(本)(林)", "abc"], IngestPolicy::Strict);
        assert!(matches!(result, Err(GroupParseError::MissingGroup { .. })));
    }

    #[test]
    fn test_from_config_builds_builtin_table() {
        let library = Library::from_config(&Config::default()).unwrap();
        assert_eq!(library.records().len(), RAW_GROUPS.len());
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let library = Library::from_entries(&["a(b)", "a(c)"], IngestPolicy::Strict).unwrap();
        assert_eq!(library.records().len(), 2);
        assert_eq!(library.query().lookup_forward('a', RelationMode::Similar), &['b']);
    }

    #[test]
    fn test_query_borrows_library() {
        let library = Library::builtin();
        let engine = library.query();
        assert_eq!(engine.lookup_forward('木', RelationMode::Radical), &['林', '森']);
    }
}
