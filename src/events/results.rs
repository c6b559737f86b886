use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{next_page, previous_page};
use crate::state::{AppState, Focus, QueryInput};
use crate::util::open_url;

/// What: Handle a key press while the results list has focus.
///
/// Inputs:
/// - `ke`: Key event (already filtered to presses).
/// - `app`: Mutable application state.
/// - `query_tx`: Channel to the search worker, used for page changes.
///
/// Output:
/// - `true` when the user asked to quit (`q` or `Esc`).
///
/// Details:
/// - Page keys only step within `[1, total_pages]`, mirroring the disabled
///   Previous/Next buttons.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Home | KeyCode::Char('g') => app.move_selection(isize::MIN),
        KeyCode::End | KeyCode::Char('G') => app.move_selection(isize::MAX),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            previous_page(app, query_tx);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            next_page(app, query_tx);
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(repo) = app.selected_repository() {
                open_url(&repo.html_url);
            }
        }
        KeyCode::Char('u') => {
            if let Some(repo) = app.selected_repository() {
                open_url(&repo.owner.html_url);
            }
        }
        KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab => app.focus = Focus::Search,
        _ => {}
    }
    false
}
