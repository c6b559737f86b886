//! State transitions on `AppState` that do not involve channels.

use super::AppState;
use super::constants::{ITEMS_PER_PAGE, recent_capacity};
use crate::sources::FetchError;
use crate::state::types::{BodyView, Repository, SearchResponse};

impl AppState {
    /// What: Number of pages implied by `total_count`.
    ///
    /// Output:
    /// - `ceil(total_count / ITEMS_PER_PAGE)`, saturating at `u32::MAX`.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_count.div_ceil(u64::from(ITEMS_PER_PAGE));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// What: Decide which body branch to render.
    ///
    /// Output:
    /// - The single [`BodyView`] matching the current state.
    ///
    /// Details:
    /// - Loading wins over error, error wins over the empty-result message.
    /// - "No results" requires a committed term so the initial screen stays idle.
    #[must_use]
    pub fn body_view(&self) -> BodyView {
        if self.loading {
            BodyView::Loading
        } else if !self.error.is_empty() {
            BodyView::Error
        } else if !self.repositories.is_empty() {
            BodyView::Results
        } else if self.search_term.is_empty() {
            BodyView::Idle
        } else {
            BodyView::NoResults
        }
    }

    /// Repository under the selection cursor, if any.
    #[must_use]
    pub fn selected_repository(&self) -> Option<&Repository> {
        self.repositories.get(self.selected)
    }

    /// What: Drop the current page of results and its total.
    ///
    /// Details:
    /// - Also resets the selection so the list never points past its end.
    pub fn reset_results(&mut self) {
        self.repositories.clear();
        self.total_count = 0;
        self.incomplete_results = false;
        self.card_heights.clear();
        self.selected = 0;
        self.list_state.select(None);
    }

    /// What: Apply a successful response for the latest query.
    ///
    /// Inputs:
    /// - `response`: Parsed envelope.
    ///
    /// Details:
    /// - Clears `loading`, leaves `error` empty, selects the first card.
    pub fn apply_response(&mut self, response: SearchResponse) {
        self.loading = false;
        self.error.clear();
        self.repositories = response.items;
        self.total_count = response.total_count;
        self.incomplete_results = response.incomplete_results;
        self.card_heights.clear();
        self.selected = 0;
        self.list_state.select(if self.repositories.is_empty() {
            None
        } else {
            Some(0)
        });
    }

    /// What: Apply a failed outcome for the latest query.
    ///
    /// Inputs:
    /// - `err`: Failure reported by the fetch adapter.
    ///
    /// Details:
    /// - Results and total are reset; the error's display text becomes the banner.
    pub fn apply_failure(&mut self, err: &FetchError) {
        self.loading = false;
        self.reset_results();
        self.error = err.to_string();
    }

    /// What: Move the results cursor by `delta`, clamped to the list bounds.
    ///
    /// Inputs:
    /// - `delta`: Signed step; negative moves up.
    pub fn move_selection(&mut self, delta: isize) {
        if self.repositories.is_empty() {
            return;
        }
        let last = self.repositories.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(self.selected));
    }

    /// What: Record a committed term in the in-memory recent list.
    ///
    /// Inputs:
    /// - `term`: Term as committed.
    ///
    /// Details:
    /// - Keyed case-insensitively on the trimmed text so "Rust" and "rust " collapse.
    pub fn remember_term(&mut self, term: &str) {
        let value = term.trim().to_string();
        if value.is_empty() {
            return;
        }
        self.recent.resize(recent_capacity());
        self.recent.put(value.to_lowercase(), value);
        self.history_cursor = None;
    }

    /// Recent committed terms, most recent first.
    #[must_use]
    pub fn recent_terms(&self) -> Vec<String> {
        self.recent.iter().map(|(_, v)| v.clone()).collect()
    }
}
