use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic::commit_search;
use crate::state::{AppState, Focus, QueryInput};
use crate::util::{byte_index_for_char, char_count};

/// What: Handle a key press while the search box has focus.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses).
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - Always `false`; the search box never quits the application.
///
/// Details:
/// - `Enter` commits even while a request is in flight; the newer request wins and
///   the older outcome is discarded on arrival. Blank input is ignored by `commit_search`.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Enter => {
            let raw = app.input.clone();
            commit_search(app, &raw, query_tx);
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            insert_char(app, ch);
        }
        KeyCode::Backspace => {
            if app.search_caret > 0 {
                app.search_caret -= 1;
                remove_char_at_caret(app);
            }
        }
        KeyCode::Delete => remove_char_at_caret(app),
        KeyCode::Left => app.search_caret = app.search_caret.saturating_sub(1),
        KeyCode::Right => {
            app.search_caret = (app.search_caret + 1).min(char_count(&app.input));
        }
        KeyCode::Home => app.search_caret = 0,
        KeyCode::End => app.search_caret = char_count(&app.input),
        KeyCode::Up => recall_recent(app, true),
        KeyCode::Down if app.history_cursor.is_none() => focus_results(app),
        KeyCode::Down => recall_recent(app, false),
        KeyCode::Tab | KeyCode::BackTab => focus_results(app),
        KeyCode::Esc => {
            app.input.clear();
            app.search_caret = 0;
            app.history_cursor = None;
        }
        _ => {}
    }
    false
}

/// Hand focus to the results list when it has something to select.
fn focus_results(app: &mut AppState) {
    if !app.repositories.is_empty() {
        app.focus = Focus::Results;
    }
}

/// Insert `ch` at the caret and advance it.
fn insert_char(app: &mut AppState, ch: char) {
    let at = byte_index_for_char(&app.input, app.search_caret);
    app.input.insert(at, ch);
    app.search_caret += 1;
    app.history_cursor = None;
}

/// Remove the character under the caret, if any.
fn remove_char_at_caret(app: &mut AppState) {
    if app.search_caret >= char_count(&app.input) {
        return;
    }
    let at = byte_index_for_char(&app.input, app.search_caret);
    app.input.remove(at);
    app.history_cursor = None;
}

/// What: Cycle the search box through recently committed terms.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `older`: `true` for `Up` (further back), `false` for `Down`.
///
/// Details:
/// - Stepping forward past the newest entry clears the box.
fn recall_recent(app: &mut AppState, older: bool) {
    let terms = app.recent_terms();
    if terms.is_empty() {
        return;
    }
    let next = match (app.history_cursor, older) {
        (None, true) => Some(0),
        (None, false) => return,
        (Some(i), true) => Some((i + 1).min(terms.len() - 1)),
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    };
    app.history_cursor = next;
    app.input = next.and_then(|i| terms.get(i).cloned()).unwrap_or_default();
    app.search_caret = char_count(&app.input);
}
