//! Character groups module
//!
//! A group is one row of the character table: a head character plus the
//! characters that look like it and the characters built on it. Rows are
//! stored as compact strings such as `木(本术未末)(林森)` and parsed here.

mod parser;
mod types;

pub use parser::{GroupParseError, GroupParser, IngestPolicy, find_duplicate_keys};
pub use types::{GroupRecord, RelationMode};
