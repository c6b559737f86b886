//! Pagination window arithmetic for the page-button bar.

use std::ops::RangeInclusive;

use crate::state::PageButton;

/// Maximum number of numbered page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// What: Compute the numbered pages to show around `current`.
///
/// Inputs:
/// - `current`: 1-based current page.
/// - `total_pages`: Number of pages (0 when there are no results).
///
/// Output:
/// - Inclusive range of page numbers; empty when `total_pages` is 0.
///
/// Details:
/// - Starts two pages before `current`, clamped to 1, and spans up to
///   [`MAX_VISIBLE_PAGES`]. Near the upper bound the start is pulled back so the
///   window keeps its full width whenever `total_pages >= MAX_VISIBLE_PAGES`.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> RangeInclusive<u32> {
    if total_pages == 0 {
        return 1..=0;
    }
    let half = MAX_VISIBLE_PAGES / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = total_pages.min(start.saturating_add(MAX_VISIBLE_PAGES - 1));
    if end.saturating_sub(start) < MAX_VISIBLE_PAGES - 1 {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    start..=end
}

/// Everything the renderer needs to draw the pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationView {
    /// Buttons in display order: Previous, numbered pages, Next.
    pub buttons: Vec<PageButton>,
    /// Page rendered as active.
    pub current: u32,
    /// Whether Previous is clickable.
    pub prev_enabled: bool,
    /// Whether Next is clickable.
    pub next_enabled: bool,
}

impl PaginationView {
    /// Numbered pages only, in order.
    #[must_use]
    pub fn pages(&self) -> Vec<u32> {
        self.buttons
            .iter()
            .filter_map(|b| match b {
                PageButton::Page(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    /// Whether `button` would do anything when activated.
    #[must_use]
    pub fn is_enabled(&self, button: PageButton) -> bool {
        match button {
            PageButton::Previous => self.prev_enabled,
            PageButton::Next => self.next_enabled,
            PageButton::Page(n) => n != self.current,
        }
    }
}

/// What: Build the pagination bar for the given position.
///
/// Inputs:
/// - `current`: 1-based current page.
/// - `total_pages`: Number of pages.
///
/// Output:
/// - `None` when there is at most one page (the bar is hidden); otherwise the bar.
#[must_use]
pub fn pagination_view(current: u32, total_pages: u32) -> Option<PaginationView> {
    if total_pages <= 1 {
        return None;
    }
    let mut buttons = vec![PageButton::Previous];
    buttons.extend(page_window(current, total_pages).map(PageButton::Page));
    buttons.push(PageButton::Next);
    Some(PaginationView {
        buttons,
        current,
        prev_enabled: current > 1,
        next_enabled: current < total_pages,
    })
}
