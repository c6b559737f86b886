use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Prompt drawn before the input text.
const PROMPT: &str = "> ";

/// What: Render the search input with its action label and place the cursor.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (input, caret, focus, loading); `search_rect` is recorded
/// - `area`: Target rectangle
///
/// Details:
/// - The label on the right reads "Searching..." while a request is in flight.
/// - Long input scrolls so the caret stays visible.
pub fn render_search_box(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    app.search_rect = Some((area.x, area.y, area.width, area.height));
    let focused = app.focus == Focus::Search;

    let label = if app.loading {
        Span::styled(
            " Searching... ",
            Style::default().fg(th.overlay1).add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(
            " Search [Enter] ",
            Style::default().fg(th.green).add_modifier(Modifier::BOLD),
        )
    };
    let border = if focused { th.mauve } else { th.surface1 };
    let block = Block::default()
        .title(Span::styled(
            if focused { "Search (focused)" } else { "Search" },
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .title_top(Line::from(label).right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));

    let inner_w = usize::from(area.width.saturating_sub(2));
    let before_caret: String = app.input.chars().take(app.search_caret).collect();
    let caret_col = PROMPT.width() + before_caret.width();
    let scroll = caret_col.saturating_sub(inner_w.saturating_sub(1));

    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let paragraph = Paragraph::new(line)
        .block(block)
        .scroll((0, u16::try_from(scroll).unwrap_or(u16::MAX)));
    f.render_widget(paragraph, area);

    if focused {
        let visible = u16::try_from(caret_col - scroll).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(visible);
        let right = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(Position::new(x.min(right), area.y + 1));
    }
}
