use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Render the keybinding hints for the focused pane.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Search => &[
            ("Enter", "search"),
            ("↑/↓", "recent"),
            ("Tab", "results"),
            ("Esc", "clear"),
            ("Ctrl+C", "quit"),
        ],
        Focus::Results => &[
            ("j/k", "move"),
            ("h/l", "page"),
            ("Enter", "open"),
            ("u", "owner"),
            ("/", "search"),
            ("q", "quit"),
        ],
    };
    let mut spans = Vec::new();
    for (key, action) in hints {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            *key,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(th.overlay1),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
