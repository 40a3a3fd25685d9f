//! chaoyin library - Chinese character relation index
//!
//! Parses a compact table of character groups (look-alike characters and
//! radical families), counts how often each character appears as a member,
//! and answers lookup, reverse-lookup and ranking queries over the result.

pub mod browse;
pub mod config;
pub mod dataset;
pub mod error;
pub mod groups;
pub mod library;
pub mod query;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::ChaoyinError;
pub use groups::{GroupRecord, RelationMode};
pub use library::Library;
pub use query::QueryEngine;
