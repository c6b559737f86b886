use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic::{change_page, next_page, pagination_view, previous_page};
use crate::state::app_state::Rect4;
use crate::state::{AppState, Focus, PageButton, QueryInput};

/// Whether `(mx, my)` falls inside `rect`.
const fn is_point_in_rect(mx: u16, my: u16, rect: Rect4) -> bool {
    let (x, y, w, h) = rect;
    mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
}

/// What: Handle a mouse event using the geometry recorded by the last render.
///
/// Inputs:
/// - `me`: Mouse event.
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the search worker, used for page changes.
///
/// Output:
/// - `true` if the event was consumed.
///
/// Details:
/// - Left click on a pagination button changes page (disabled buttons do nothing).
/// - Left click in the search box focuses it; on a card selects it and focuses results.
/// - Wheel over the results list moves the selection.
pub fn handle_mouse(
    me: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    let (mx, my) = (me.column, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(button) = app
                .pagination_rects
                .iter()
                .find(|(_, r)| is_point_in_rect(mx, my, *r))
                .map(|(b, _)| *b)
            {
                press_page_button(app, button, query_tx);
                return true;
            }
            if app.search_rect.is_some_and(|r| is_point_in_rect(mx, my, r)) {
                app.focus = Focus::Search;
                return true;
            }
            if let Some(idx) = card_at(app, mx, my) {
                app.selected = idx;
                app.list_state.select(Some(idx));
                app.focus = Focus::Results;
                return true;
            }
            false
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
            if !app.results_rect.is_some_and(|r| is_point_in_rect(mx, my, r)) {
                return false;
            }
            let delta = if matches!(me.kind, MouseEventKind::ScrollDown) {
                1
            } else {
                -1
            };
            app.move_selection(delta);
            true
        }
        _ => false,
    }
}

/// Activate a pagination button if it is enabled for the current position.
fn press_page_button(
    app: &mut AppState,
    button: PageButton,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) {
    let enabled = pagination_view(app.current_page, app.total_pages())
        .is_some_and(|view| view.is_enabled(button));
    if !enabled {
        return;
    }
    match button {
        PageButton::Previous => {
            previous_page(app, query_tx);
        }
        PageButton::Next => {
            next_page(app, query_tx);
        }
        PageButton::Page(n) => {
            change_page(app, n, query_tx);
        }
    }
}

/// What: Map a click position to the index of the card under it.
///
/// Details:
/// - Walks the recorded card heights starting at the list's scroll offset.
fn card_at(app: &AppState, mx: u16, my: u16) -> Option<usize> {
    let rect = app.results_rect?;
    if !is_point_in_rect(mx, my, rect) {
        return None;
    }
    let mut top = rect.1;
    for (idx, h) in app
        .card_heights
        .iter()
        .enumerate()
        .skip(app.list_state.offset())
    {
        let bottom = top.saturating_add(*h);
        if my >= top && my < bottom {
            return (idx < app.repositories.len()).then_some(idx);
        }
        top = bottom;
    }
    None
}
