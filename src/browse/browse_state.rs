use crate::groups::RelationMode;
use crate::library::Library;
use crate::query::{FrequencyPage, RandomSource, SearchOutcome, page_count};

/// Manages the state of the browsing view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    /// Trimmed search input
    search_term: String,
    /// First character of the search term, if any
    active_char: Option<char>,
    mode: RelationMode,
    /// Current page of the frequency ranking (0-indexed)
    hot_page: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self::new(RelationMode::default())
    }
}

impl BrowseState {
    pub fn new(mode: RelationMode) -> Self {
        Self {
            search_term: String::new(),
            active_char: None,
            mode,
            hot_page: 0,
        }
    }

    /// Rebuild state from navigation parameters such as `?q=木&mode=radical`.
    ///
    /// An absent or unrecognised mode falls back to `default_mode`.
    pub fn restore(query: Option<&str>, mode: Option<&str>, default_mode: RelationMode) -> Self {
        let mode = mode
            .and_then(|m| m.parse::<RelationMode>().ok())
            .unwrap_or(default_mode);
        let mut state = Self::new(mode);
        if let Some(query) = query {
            state.submit_search(query);
        }
        state
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn active_char(&self) -> Option<char> {
        self.active_char
    }

    pub fn mode(&self) -> RelationMode {
        self.mode
    }

    pub fn hot_page(&self) -> usize {
        self.hot_page
    }

    /// Whether a character is selected (search view rather than dashboard)
    pub fn is_searching(&self) -> bool {
        self.active_char.is_some()
    }

    /// Store a new search; blank input clears the active character
    pub fn submit_search(&mut self, term: &str) {
        let term = term.trim();
        self.search_term = term.to_string();
        self.active_char = term.chars().next();
    }

    pub fn reset(&mut self) {
        self.submit_search("");
    }

    pub fn set_mode(&mut self, mode: RelationMode) {
        self.mode = mode;
    }

    /// Move the ranking page by `delta` if the target page exists.
    ///
    /// Returns `true` when the page changed.
    pub fn change_hot_page(&mut self, delta: isize, total_items: usize, page_size: usize) -> bool {
        let pages = page_count(total_items, page_size);
        match self.hot_page.checked_add_signed(delta) {
            Some(page) if page < pages && page != self.hot_page => {
                self.hot_page = page;
                true
            }
            _ => false,
        }
    }

    /// Select a random character from the library and search for it.
    ///
    /// Leaves the state untouched when the library has no characters.
    pub fn pick_random(&mut self, library: &Library, source: &mut dyn RandomSource) -> Option<char> {
        let ch = library.query().random_character(source)?;
        self.submit_search(&ch.to_string());
        Some(ch)
    }

    /// Search results for the active character, or `None` on the dashboard
    pub fn current_search<'a>(&self, library: &'a Library) -> Option<SearchOutcome<'a>> {
        library.query().search(&self.search_term, self.mode)
    }

    /// The ranking page the dashboard shows
    pub fn current_page(&self, library: &Library, page_size: usize) -> FrequencyPage {
        library.query().frequency_page(self.hot_page, page_size)
    }
}

#[cfg(test)]
#[path = "browse_state_tests.rs"]
mod browse_state_tests;
