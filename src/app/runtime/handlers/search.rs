use crate::state::{AppState, SearchOutcome};

/// What: Apply a search outcome from the worker.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Result tagged with the id of the request that produced it
///
/// Output:
/// - `true` when the outcome was applied; `false` when it was stale.
///
/// Details:
/// - Only the outcome of the latest dispatched request is applied; anything else is
///   discarded so a slow earlier response can never overwrite a newer one.
/// - Success replaces results and total and clears the error.
/// - Failure clears results and total and stores the error message.
pub fn handle_search_outcome(app: &mut AppState, outcome: SearchOutcome) -> bool {
    if outcome.id != app.latest_query_id {
        tracing::debug!(
            id = outcome.id,
            latest = app.latest_query_id,
            "discarding stale search outcome"
        );
        return false;
    }
    match outcome.result {
        Ok(response) => {
            tracing::info!(
                id = outcome.id,
                total = response.total_count,
                items = response.items.len(),
                page = app.current_page,
                "search results applied"
            );
            app.apply_response(response);
        }
        Err(err) => {
            tracing::warn!(id = outcome.id, error = %err, "search failed");
            app.apply_failure(&err);
        }
    }
    true
}
