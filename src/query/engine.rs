use serde::Serialize;

use crate::groups::{GroupRecord, RelationMode};
use crate::query::pagination::{page_count, paginate};
use crate::query::random::RandomSource;
use crate::stats::FrequencyTable;

/// All `(character, count)` pairs, highest count first.
///
/// Equal counts are ordered by ascending code point. The sort is stable and
/// the table iterates in code point order, which gives that tie-break.
pub fn rank_by_frequency(table: &FrequencyTable) -> Vec<(char, usize)> {
    let mut ranked: Vec<(char, usize)> = table.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// One page of the frequency ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyPage {
    pub page_index: usize,
    pub page_count: usize,
    pub entries: Vec<(char, usize)>,
}

impl FrequencyPage {
    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index.saturating_add(1) < self.page_count
    }
}

/// Result of a search for one character under one relation mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<'a> {
    pub active: char,
    pub mode: RelationMode,
    /// Members of the group headed by `active`
    pub forward: &'a [char],
    /// Groups listing `active` as a member
    pub reverse: Vec<&'a GroupRecord>,
}

impl SearchOutcome<'_> {
    pub fn has_results(&self) -> bool {
        !self.forward.is_empty() || !self.reverse.is_empty()
    }
}

/// Read-only view over parsed records and their frequency table
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    records: &'a [GroupRecord],
    frequency: &'a FrequencyTable,
}

impl<'a> QueryEngine<'a> {
    pub fn new(records: &'a [GroupRecord], frequency: &'a FrequencyTable) -> Self {
        Self { records, frequency }
    }

    /// Members of the group headed by `ch`.
    ///
    /// If several records share the key, the first one in dataset order is
    /// used. Unknown characters give an empty slice.
    pub fn lookup_forward(&self, ch: char, mode: RelationMode) -> &'a [char] {
        self.records
            .iter()
            .find(|record| record.key == ch)
            .map(|record| record.members(mode))
            .unwrap_or(&[])
    }

    /// Groups whose `mode` relation lists `ch`, in dataset order
    pub fn lookup_reverse(&self, ch: char, mode: RelationMode) -> Vec<&'a GroupRecord> {
        self.records
            .iter()
            .filter(|record| record.lists(ch, mode))
            .collect()
    }

    /// Groups that contribute to the heat of `ch` through either relation
    pub fn heat_sources(&self, ch: char) -> Vec<&'a GroupRecord> {
        self.records
            .iter()
            .filter(|record| record.lists_anywhere(ch))
            .collect()
    }

    pub fn heat(&self, ch: char) -> usize {
        self.frequency.count(ch)
    }

    pub fn rank_by_frequency(&self) -> Vec<(char, usize)> {
        rank_by_frequency(self.frequency)
    }

    /// Page `page_index` of the ranking with navigation bounds
    pub fn frequency_page(&self, page_index: usize, page_size: usize) -> FrequencyPage {
        let ranked = self.rank_by_frequency();
        FrequencyPage {
            page_index,
            page_count: page_count(ranked.len(), page_size),
            entries: paginate(&ranked, page_index, page_size).to_vec(),
        }
    }

    /// Pick a character from the frequency table, or `None` if it is empty
    pub fn random_character(&self, source: &mut dyn RandomSource) -> Option<char> {
        let len = self.frequency.len();
        if len == 0 {
            return None;
        }
        let index = source.pick_index(len) % len;
        self.frequency.chars().nth(index)
    }

    /// Look up the first character of `term` under `mode`.
    ///
    /// Leading and trailing whitespace is ignored. Blank input has no active
    /// character and returns `None`.
    pub fn search(&self, term: &str, mode: RelationMode) -> Option<SearchOutcome<'a>> {
        let active = term.trim().chars().next()?;
        Some(SearchOutcome {
            active,
            mode,
            forward: self.lookup_forward(active, mode),
            reverse: self.lookup_reverse(active, mode),
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
