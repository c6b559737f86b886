use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::handlers::{handle_search_outcome, handle_tick};

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.query_tx)
        }
        Some(outcome) = channels.outcome_rx.recv() => {
            handle_search_outcome(app, outcome);
            false
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering the UI between messages.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode)
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
/// - `headless`: Exit once no request is in flight instead of waiting for input
///
/// Details:
/// - Exits when an event handler returns true (quit key) or every channel has closed.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
    headless: bool,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "draw failed");
        }
        if headless && !app.loading {
            break;
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
