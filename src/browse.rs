//! Browse module
//!
//! Holds what the user is currently looking at: the search term, the
//! active character, the relation mode and the page of the frequency
//! ranking. The UI layer owns one `BrowseState` and passes it to queries.

mod browse_state;

pub use browse_state::BrowseState;
