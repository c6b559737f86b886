use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::logic::{format_count, format_date, truncate_description};
use crate::state::{AppState, Focus, Repository};
use crate::theme::{Theme, theme};
use crate::util::{truncate_to_width, wrap_words};

/// Width reserved for the highlight symbol in front of every line.
const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// What: Build the lines of one summary card.
///
/// Inputs:
/// - `repo`: Repository to summarize
/// - `th`: Active palette
/// - `width`: Usable text width in columns
/// - `max_words`: Description word limit
///
/// Output:
/// - Owner/name line, wrapped description (when present), language and update date,
///   counts, and a trailing blank separator.
fn card_lines(repo: &Repository, th: &Theme, width: usize, max_words: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let title = format!("{} / {}", repo.owner.login, repo.name);
    let title = truncate_to_width(&title, width);
    let (owner, name) = title
        .split_once(" / ")
        .map_or((String::new(), title.clone()), |(o, n)| {
            (format!("{o} / "), n.to_string())
        });
    lines.push(Line::from(vec![
        Span::styled(owner, Style::default().fg(th.subtext0)),
        Span::styled(
            name,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ),
    ]));

    if let Some(desc) = repo.description.as_deref().filter(|d| !d.trim().is_empty()) {
        for l in wrap_words(&truncate_description(desc, max_words), width) {
            lines.push(Line::from(Span::styled(l, Style::default().fg(th.text))));
        }
    }

    let mut meta = Vec::new();
    if let Some(lang) = repo.language.as_deref() {
        meta.push(Span::styled(
            format!("● {lang}"),
            Style::default().fg(th.yellow),
        ));
        meta.push(Span::raw("   "));
    }
    meta.push(Span::styled(
        format!("Updated {}", format_date(&repo.updated_at)),
        Style::default().fg(th.overlay2),
    ));
    lines.push(Line::from(meta));

    lines.push(Line::from(vec![
        Span::styled(
            format!("★ {}", format_count(repo.stargazers_count)),
            Style::default().fg(th.yellow),
        ),
        Span::raw("   "),
        Span::styled(
            format!("⑂ {}", format_count(repo.forks_count)),
            Style::default().fg(th.green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("◉ {}", format_count(repo.watchers_count)),
            Style::default().fg(th.lavender),
        ),
    ]));
    lines.push(Line::from(""));
    lines
}

/// What: Render the card list for the current page.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (repositories, selection); records
///   `results_rect` and `card_heights` for mouse hit-testing
/// - `area`: Target rectangle
///
/// Details:
/// - Cards are multi-line list items; the list widget scrolls to keep the
///   selected card visible and its offset is read back by the mouse handler.
pub fn render_cards(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .title(Span::styled(
            format!("Page {} of {}", app.current_page, app.total_pages().max(1)),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 }));
    let inner = block.inner(area);
    app.results_rect = Some((inner.x, inner.y, inner.width, inner.height));

    let width = usize::from(inner.width).saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let cards: Vec<Vec<Line<'static>>> = app
        .repositories
        .iter()
        .map(|r| card_lines(r, &th, width, app.max_description_words))
        .collect();
    app.card_heights = cards
        .iter()
        .map(|c| u16::try_from(c.len()).unwrap_or(u16::MAX))
        .collect();

    let items: Vec<ListItem> = cards.into_iter().map(ListItem::new).collect();
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .highlight_style(if focused {
            Style::default().bg(th.surface1)
        } else {
            Style::default()
        })
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    if app.list_state.selected().is_none() && !app.repositories.is_empty() {
        app.list_state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut app.list_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Cards omit missing description and language, and count lines correctly.
    fn card_lines_optional_fields() {
        let th = Theme::default();
        let repo = Repository {
            name: "tiny".into(),
            updated_at: "not a date".into(),
            ..Repository::default()
        };
        let lines = card_lines(&repo, &th, 60, 50);
        assert_eq!(lines.len(), 4);
        let meta: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(meta, "Updated not a date");

        let described = Repository {
            description: Some("one two three four five six".into()),
            language: Some("Rust".into()),
            ..repo
        };
        let lines = card_lines(&described, &th, 60, 3);
        let desc: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(desc, "one two three...");
        let meta: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(meta.starts_with("● Rust"));
    }
}
