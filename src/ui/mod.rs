//! Rendering for gitseek's single screen.
//!
//! Top to bottom: header, search box, summary line, body (one of idle, loading,
//! error, no results, or result cards), pagination bar, keybinding footer.
//! Rendering records the hit-test rectangles that the mouse handler reads back.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::logic::pagination_view;
use crate::state::{AppState, BodyView};
use crate::theme::theme;

mod body;
mod cards;
mod footer;
mod header;
mod pagination;
mod search_box;

pub use header::summary_text;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state; hit-test rects are refreshed as a side effect
///
/// Details:
/// - The pagination row is only reserved when the card list is shown with more than one page.
/// - Rects for widgets that are not drawn this frame are cleared so stale clicks do nothing.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let view = app.body_view();
    let pager = if view == BodyView::Results {
        pagination_view(app.current_page, app.total_pages())
    } else {
        None
    };
    let pager_h = u16::from(pager.is_some());
    let footer_h: u16 = u16::from(app.show_keybinds_footer);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(pager_h),
            Constraint::Length(footer_h),
        ])
        .split(area);

    header::render_header(f, chunks[0]);
    search_box::render_search_box(f, app, chunks[1]);
    header::render_summary(f, app, chunks[2]);

    app.results_rect = None;
    match view {
        BodyView::Results => cards::render_cards(f, app, chunks[3]),
        other => {
            app.card_heights.clear();
            body::render_status_body(f, app, other, chunks[3]);
        }
    }

    app.pagination_rects.clear();
    if let Some(pager) = pager {
        pagination::render_pagination(f, app, &pager, chunks[4]);
    }
    if app.show_keybinds_footer {
        footer::render_footer(f, app, chunks[5]);
    }
}
