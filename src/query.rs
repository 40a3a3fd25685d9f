//! Query module
//!
//! Read-only lookups over a built [`Library`](crate::Library): forward and
//! reverse relation lookups, frequency ranking with pagination, and random
//! picks through an injected [`RandomSource`].

mod engine;
mod pagination;
mod random;

pub use engine::{FrequencyPage, QueryEngine, SearchOutcome, rank_by_frequency};
pub use pagination::{page_count, paginate};
pub use random::{RandomSource, RngSource, ThreadRandom};
