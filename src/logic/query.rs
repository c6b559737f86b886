//! Search dispatch: committing terms, changing pages, and tagging requests with
//! monotonically increasing ids so stale responses can be ignored.

use tokio::sync::mpsc;

use crate::state::{AppState, QueryInput};

/// What: Send the committed term and current page to the search worker.
///
/// Inputs:
/// - `app`: Mutable application state; provides term/page and id counters.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - None. Marks the state as loading and records the new id as the latest.
///
/// Details:
/// - Any earlier request still in flight keeps running; its outcome is discarded
///   on arrival because its id no longer matches `latest_query_id`.
pub fn send_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.loading = true;
    app.error.clear();
    tracing::debug!(id, term = %app.search_term, page = app.current_page, "dispatching search");
    let _ = query_tx.send(QueryInput {
        id,
        term: app.search_term.clone(),
        page: app.current_page,
    });
}

/// What: Commit `raw` as the new search term and fetch its first page.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `raw`: Text as typed in the search box.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - `true` when a search was dispatched; `false` for blank input (nothing changes).
///
/// Details:
/// - The term is stored as typed, not trimmed.
/// - Page resets to 1 and previous results, total and error are cleared before the
///   new request resolves.
/// - Re-committing the current term fetches again, which is how users retry after an error.
pub fn commit_search(
    app: &mut AppState,
    raw: &str,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if raw.trim().is_empty() {
        return false;
    }
    tracing::info!(term = %raw, "search committed");
    app.search_term = raw.to_string();
    app.current_page = 1;
    app.reset_results();
    app.remember_term(raw);
    send_query(app, query_tx);
    true
}

/// What: Switch to page `page` of the committed term.
///
/// Inputs:
/// - `app`: Mutable application state.
/// - `page`: Target 1-based page.
/// - `query_tx`: Channel to the search worker.
///
/// Output:
/// - `true` when a fetch was dispatched.
///
/// Details:
/// - The target is not checked against the total page count; callers only offer
///   pages from the rendered control.
/// - Page 0, the current page, or no committed term are no-ops.
pub fn change_page(
    app: &mut AppState,
    page: u32,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
) -> bool {
    if page == 0 || page == app.current_page || app.search_term.is_empty() {
        return false;
    }
    tracing::debug!(from = app.current_page, to = page, "page change");
    app.current_page = page;
    send_query(app, query_tx);
    true
}

/// Step forward one page unless already on the last one.
pub fn next_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    if app.current_page >= app.total_pages() {
        return false;
    }
    change_page(app, app.current_page + 1, query_tx)
}

/// Step back one page unless already on the first one.
pub fn previous_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) -> bool {
    if app.current_page <= 1 {
        return false;
    }
    change_page(app, app.current_page - 1, query_tx)
}
