use std::collections::HashSet;
use std::str::Chars;

use serde::Deserialize;
use thiserror::Error;

use crate::groups::types::GroupRecord;

/// Why an entry does not match `CHAR(GROUP)` or `CHAR(GROUP)(GROUP)`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupParseError {
    #[error("entry is empty")]
    Empty,

    #[error("{entry:?}: head character cannot be a line break")]
    InvalidHead { entry: String },

    #[error("{entry:?}: expected '(' after the head character")]
    MissingGroup { entry: String },

    #[error("{entry:?}: group is missing its closing ')'")]
    UnclosedGroup { entry: String },

    #[error("{entry:?}: unexpected input after the last group")]
    TrailingInput { entry: String },
}

/// What to do with entries that fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngestPolicy {
    /// Drop the entry and log a warning
    #[default]
    Lenient,
    /// Stop at the first bad entry
    Strict,
}

pub struct GroupParser;

impl GroupParser {
    /// Parse a single encoded entry.
    ///
    /// Whitespace is significant: `" 木(本)"` has a space as its head and
    /// fails on the missing `(`.
    pub fn parse_entry(entry: &str) -> Result<GroupRecord, GroupParseError> {
        let mut chars = entry.chars();

        let key = chars.next().ok_or(GroupParseError::Empty)?;
        if matches!(key, '\n' | '\r' | '\u{2028}' | '\u{2029}') {
            return Err(GroupParseError::InvalidHead {
                entry: entry.to_string(),
            });
        }

        let similars = match chars.next() {
            Some('(') => Self::read_group(&mut chars, entry)?,
            _ => {
                return Err(GroupParseError::MissingGroup {
                    entry: entry.to_string(),
                });
            }
        };

        let radicals = match chars.next() {
            None => Vec::new(),
            Some('(') => Self::read_group(&mut chars, entry)?,
            Some(_) => {
                return Err(GroupParseError::TrailingInput {
                    entry: entry.to_string(),
                });
            }
        };

        if chars.next().is_some() {
            return Err(GroupParseError::TrailingInput {
                entry: entry.to_string(),
            });
        }

        Ok(GroupRecord::new(key, similars, radicals))
    }

    /// Read group members up to and including the closing `)`.
    fn read_group(chars: &mut Chars<'_>, entry: &str) -> Result<Vec<char>, GroupParseError> {
        let mut members = Vec::new();
        for ch in chars.by_ref() {
            if ch == ')' {
                return Ok(members);
            }
            members.push(ch);
        }
        Err(GroupParseError::UnclosedGroup {
            entry: entry.to_string(),
        })
    }

    /// Parse every entry, keeping input order.
    ///
    /// Under [`IngestPolicy::Lenient`] bad entries are skipped with a
    /// warning and this never returns `Err`.
    pub fn parse_all<S: AsRef<str>>(
        entries: &[S],
        policy: IngestPolicy,
    ) -> Result<Vec<GroupRecord>, GroupParseError> {
        let mut records = Vec::with_capacity(entries.len());

        for entry in entries {
            match Self::parse_entry(entry.as_ref()) {
                Ok(record) => records.push(record),
                Err(e) => match policy {
                    IngestPolicy::Lenient => log::warn!("Skipping group entry: {}", e),
                    IngestPolicy::Strict => return Err(e),
                },
            }
        }

        #[cfg(debug_assertions)]
        log::debug!("Parsed {} of {} group entries", records.len(), entries.len());

        Ok(records)
    }
}

/// Keys that head more than one record, in first-seen order
pub fn find_duplicate_keys(records: &[GroupRecord]) -> Vec<char> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for record in records {
        if !seen.insert(record.key) && reported.insert(record.key) {
            duplicates.push(record.key);
        }
    }

    duplicates
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
