//! Event handling layer for gitseek's TUI.
//!
//! Converts raw `crossterm` events into mutations on [`AppState`] and, when a
//! search term or page changes, dispatches a query over the provided channel.
//!
//! - Search focus: text editing, `Enter` to commit, `Up`/`Down` for recent terms
//! - Results focus: card navigation, page stepping, opening links
//! - Mouse: pagination buttons, card selection, focusing the search box
//!
//! All functions here are synchronous; network work happens in the search worker.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, Focus, QueryInput};

mod mouse;
mod results;
mod search;


pub use mouse::handle_mouse;

/// Dispatch a single input event, mutating [`AppState`] and coordinating
/// background work via `query_tx`.
///
/// Returns `true` to signal the application should exit (`Ctrl+C` anywhere,
/// `q`/`Esc` in the results pane); otherwise returns `false`.
///
/// - Only key presses (`KeyEventKind::Press`) are handled.
/// - `Ctrl+R` reloads the theme file.
/// - Remaining keys go to the focused pane.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    match ev {
        CEvent::Key(ke) => handle_key(ke, app, query_tx),
        CEvent::Mouse(me) => {
            handle_mouse(me, app, query_tx);
            false
        }
        _ => false,
    }
}

/// Route a key press to global shortcuts or the focused pane.
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') => return true,
            KeyCode::Char('r') => {
                crate::theme::reload_theme();
                return false;
            }
            _ => {}
        }
    }
    match app.focus {
        Focus::Search => search::handle_search_key(ke, app, query_tx),
        Focus::Results => results::handle_results_key(ke, app, query_tx),
    }
}
