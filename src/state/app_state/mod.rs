//! Central `AppState` container.

use lru::LruCache;
use ratatui::widgets::ListState;

use crate::state::types::{Focus, PageButton, Repository};

mod constants;
mod default_impl;
mod methods;


pub use constants::{
    API_RESULT_CAP, DEFAULT_MAX_DESCRIPTION_WORDS, ITEMS_PER_PAGE, RECENT_CAPACITY,
    recent_capacity,
};

/// Screen rectangle as `(x, y, width, height)`, recorded during rendering for
/// mouse hit-testing.
pub type Rect4 = (u16, u16, u16, u16);

/// Session state shared by the event, networking, and UI layers.
///
/// Owned exclusively by the event loop. Created empty at startup and dropped
/// on exit; nothing here is written to disk.
#[derive(Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppState {
    // Search input
    /// Live text of the search box (not yet committed).
    pub input: String,
    /// Caret position inside `input`, counted in characters.
    pub search_caret: usize,
    /// Which pane receives keyboard input.
    pub focus: Focus,

    // Committed query
    /// Term driving fetch and display; empty until the first search.
    pub search_term: String,
    /// 1-based page of the committed term currently shown or requested.
    pub current_page: u32,

    // Latest response
    /// Hits for the current page.
    pub repositories: Vec<Repository>,
    /// Total matches reported by the last successful response.
    pub total_count: u64,
    /// Whether the last successful response was flagged incomplete by the API.
    pub incomplete_results: bool,
    /// `true` while the latest request is in flight.
    pub loading: bool,
    /// Failure message of the latest request; empty means no error.
    pub error: String,

    // Search coordination
    /// Identifier of the latest query; only its outcome is applied.
    pub latest_query_id: u64,
    /// Next query identifier to allocate.
    pub next_query_id: u64,

    // Results navigation
    /// Index into `repositories` that is currently highlighted.
    pub selected: usize,
    /// List selection state for the results list.
    pub list_state: ListState,

    // Recent searches (in-memory only)
    /// Previously committed terms stored as an LRU cache (keyed case-insensitively).
    pub recent: LruCache<String, String>,
    /// Position while cycling through `recent` with Up/Down; `None` when not browsing.
    pub history_cursor: Option<usize>,

    // Presentation preferences
    /// Word limit applied to card descriptions.
    pub max_description_words: usize,
    /// Whether the keybinding hint line is rendered.
    pub show_keybinds_footer: bool,
    /// Animation frame counter for the loading spinner.
    pub spinner_frame: usize,

    // Hit-test geometry (written by the renderer)
    /// Rect of the search input box.
    pub search_rect: Option<Rect4>,
    /// Inner rect of the results list.
    pub results_rect: Option<Rect4>,
    /// Rendered line height of each card, indexed like `repositories`.
    pub card_heights: Vec<u16>,
    /// Rects of the pagination buttons in render order.
    pub pagination_rects: Vec<(PageButton, Rect4)>,
}
