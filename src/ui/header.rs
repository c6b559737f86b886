use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::logic::format_count;
use crate::state::AppState;
use crate::state::app_state::API_RESULT_CAP;
use crate::theme::theme;

/// Render the two-line title block.
pub fn render_header(f: &mut Frame, area: Rect) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            "GitHub Repository Search",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Discover amazing repositories on GitHub",
            Style::default().fg(th.subtext0),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// What: Text of the summary line above the results.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - `None` before the first search, after a failure, and while a freshly committed
///   term has no total yet.
/// - Otherwise the match count for the committed term, noting the API's result cap
///   when the total exceeds it. A page change keeps the line visible.
#[must_use]
pub fn summary_text(app: &AppState) -> Option<String> {
    if app.search_term.is_empty() || !app.error.is_empty() {
        return None;
    }
    if app.loading && app.total_count == 0 {
        return None;
    }
    if app.total_count == 0 {
        return Some(format!("No repositories found for \"{}\"", app.search_term));
    }
    let cap_note = if app.total_count > API_RESULT_CAP {
        format!(" (showing first {API_RESULT_CAP})")
    } else {
        String::new()
    };
    Some(format!(
        "Found {} repositories for \"{}\"{cap_note}",
        format_count(app.total_count),
        app.search_term
    ))
}

/// Render the summary line; also flags results the API marked incomplete.
pub fn render_summary(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(text) = summary_text(app) else {
        return;
    };
    let th = theme();
    let mut spans = vec![Span::styled(text, Style::default().fg(th.subtext1))];
    if app.incomplete_results {
        spans.push(Span::styled(
            "  (incomplete)",
            Style::default().fg(th.yellow),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Summary wording for counts below, above and at zero.
    fn summary_wording() {
        let mut app = AppState::default();
        assert_eq!(summary_text(&app), None);

        app.search_term = "rust".into();
        app.total_count = 95;
        assert_eq!(
            summary_text(&app).as_deref(),
            Some("Found 95 repositories for \"rust\"")
        );

        app.total_count = 2_500_000;
        assert_eq!(
            summary_text(&app).as_deref(),
            Some("Found 2.5M repositories for \"rust\" (showing first 1000)")
        );

        app.total_count = 0;
        assert_eq!(
            summary_text(&app).as_deref(),
            Some("No repositories found for \"rust\"")
        );

        app.loading = true;
        assert_eq!(summary_text(&app), None);

        app.total_count = 95;
        assert_eq!(
            summary_text(&app).as_deref(),
            Some("Found 95 repositories for \"rust\"")
        );
    }
}
