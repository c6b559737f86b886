//! Default implementation for `AppState`.

use lru::LruCache;
use ratatui::widgets::ListState;

use super::AppState;
use super::constants::{DEFAULT_MAX_DESCRIPTION_WORDS, recent_capacity};
use crate::state::types::Focus;

impl Default for AppState {
    /// What: Construct the empty session state used at startup.
    ///
    /// Inputs:
    /// - None.
    ///
    /// Output:
    /// - `AppState` with no committed term, page 1, no results, no error, not loading.
    ///
    /// Details:
    /// - Query ids start at 1 so that id 0 never matches a real request.
    /// - Presentation preferences take their built-in defaults; `app::runtime::init`
    ///   overrides them from settings.
    fn default() -> Self {
        Self {
            input: String::new(),
            search_caret: 0,
            focus: Focus::Search,

            search_term: String::new(),
            current_page: 1,

            repositories: Vec::new(),
            total_count: 0,
            incomplete_results: false,
            loading: false,
            error: String::new(),

            latest_query_id: 0,
            next_query_id: 1,

            selected: 0,
            list_state: ListState::default(),

            recent: LruCache::new(recent_capacity()),
            history_cursor: None,

            max_description_words: DEFAULT_MAX_DESCRIPTION_WORDS,
            show_keybinds_footer: true,
            spinner_frame: 0,

            search_rect: None,
            results_rect: None,
            card_heights: Vec::new(),
            pagination_rects: Vec::new(),
        }
    }
}
