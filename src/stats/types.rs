//! Type definitions for character statistics

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::Serialize;

/// Member-occurrence count per character
///
/// Ordered by code point, so iteration order is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `ch`; characters never seen count as zero
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.counts.contains_key(&ch)
    }

    /// Make sure `ch` has an entry without changing an existing count
    pub fn seed(&mut self, ch: char) {
        self.counts.entry(ch).or_insert(0);
    }

    pub fn increment(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Characters in code point order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    /// Sum of every count in the table
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl FromIterator<(char, usize)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (char, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a char, &'a usize);
    type IntoIter = btree_map::Iter<'a, char, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// Header totals for the whole table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total_groups: usize,
    pub total_relations: usize,
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} groups, {} relations",
            self.total_groups, self.total_relations
        )
    }
}

/// Everything the aggregator derives from the records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharStats {
    pub frequency: FrequencyTable,
    pub summary: SummaryStats,
}
