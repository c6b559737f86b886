use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, BodyView};
use crate::theme::theme;

/// Braille spinner frames advanced by the tick worker.
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What: Render every body branch other than the card list.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (spinner frame, error text)
/// - `view`: Branch to draw; `BodyView::Results` draws nothing here
/// - `area`: Target rectangle
pub fn render_status_body(f: &mut Frame, app: &AppState, view: BodyView, area: Rect) {
    let th = theme();
    let (lines, border) = match view {
        BodyView::Idle => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Type a search term and press Enter",
                    Style::default().fg(th.subtext0),
                )),
                Line::from(Span::styled(
                    "Results are sorted by stars, most starred first",
                    Style::default().fg(th.overlay1),
                )),
            ],
            th.surface1,
        ),
        BodyView::Loading => {
            let frame = SPINNER[app.spinner_frame % SPINNER.len()];
            (
                vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("{frame} Loading repositories..."),
                        Style::default().fg(th.sapphire),
                    )),
                ],
                th.surface1,
            )
        }
        BodyView::Error => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    app.error.clone(),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Press Enter to try again",
                    Style::default().fg(th.overlay1),
                )),
            ],
            th.red,
        ),
        BodyView::NoResults => (
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No repositories found for your search.",
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Try different keywords or check your spelling.",
                    Style::default().fg(th.subtext0),
                )),
            ],
            th.surface1,
        ),
        BodyView::Results => return,
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
