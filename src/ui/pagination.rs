use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::logic::PaginationView;
use crate::state::{AppState, PageButton};
use crate::theme::theme;

/// Columns between adjacent buttons.
const GAP: u16 = 1;

/// Visible label for a pagination button.
fn label(button: PageButton) -> String {
    match button {
        PageButton::Previous => "‹ Previous".to_string(),
        PageButton::Next => "Next ›".to_string(),
        PageButton::Page(n) => format!(" {n} "),
    }
}

/// What: Render the pagination bar centered in `area` and record button rects.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state; `pagination_rects` is refilled
/// - `pager`: Buttons and enabled flags for the current position
/// - `area`: One-row target rectangle
///
/// Details:
/// - The current page is highlighted; disabled Previous/Next are dimmed and are
///   still recorded so the mouse handler can ignore them by consulting the view.
pub fn render_pagination(f: &mut Frame, app: &mut AppState, pager: &PaginationView, area: Rect) {
    let th = theme();
    let labels: Vec<(PageButton, String)> =
        pager.buttons.iter().map(|b| (*b, label(*b))).collect();
    let widths: Vec<u16> = labels
        .iter()
        .map(|(_, l)| u16::try_from(l.width()).unwrap_or(u16::MAX))
        .collect();
    let gaps = GAP.saturating_mul(u16::try_from(widths.len().saturating_sub(1)).unwrap_or(0));
    let total = widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w));
    let start = area.x + area.width.saturating_sub(total) / 2;

    let mut spans = Vec::new();
    let mut x = start;
    for ((button, text), w) in labels.into_iter().zip(widths) {
        let style = match button {
            PageButton::Page(n) if n == pager.current => Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD),
            _ if pager.is_enabled(button) => Style::default().fg(th.text).bg(th.surface1),
            _ => Style::default().fg(th.surface2),
        };
        if !spans.is_empty() {
            spans.push(Span::raw(" ".repeat(usize::from(GAP))));
        }
        spans.push(Span::styled(text, style));
        app.pagination_rects.push((button, (x, area.y, w, 1)));
        x = x.saturating_add(w).saturating_add(GAP);
    }
    let bar = Rect {
        x: start,
        y: area.y,
        width: total.min(area.width),
        height: 1,
    };
    f.render_widget(Paragraph::new(Line::from(spans)), bar);
}
