use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources on exit.
///
/// Inputs:
/// - `app`: Final application state (only logged)
/// - `channels`: Communication channels
///
/// Details:
/// - Signals the event reading thread to exit.
/// - In-flight requests are abandoned; their outcomes have nowhere to go once
///   the receiver is dropped.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    tracing::debug!(
        term = %app.search_term,
        page = app.current_page,
        in_flight = app.loading,
        "main loop exited"
    );
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
}
