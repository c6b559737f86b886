use tokio::sync::mpsc;

use crate::sources::SearchClient;
use crate::state::{QueryInput, SearchOutcome};

/// What: Spawn background worker for search queries.
///
/// Inputs:
/// - `client`: HTTP client bound to the search endpoint
/// - `query_rx`: Channel receiver for search queries
/// - `outcome_tx`: Channel sender for tagged outcomes
///
/// Details:
/// - Each query is fetched on its own task so a slow request never delays a newer one.
/// - Earlier requests are not cancelled; the event loop drops their outcomes by id.
/// - The worker ends when every query sender is dropped.
pub fn spawn_search_worker(
    client: SearchClient,
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    outcome_tx: mpsc::UnboundedSender<SearchOutcome>,
) {
    tokio::spawn(async move {
        while let Some(query) = query_rx.recv().await {
            let client = client.clone();
            let tx = outcome_tx.clone();
            tokio::spawn(async move {
                let result = client.search(&query.term, query.page).await;
                if let Err(e) = &result {
                    tracing::debug!(id = query.id, error = %e, "search request failed");
                }
                let _ = tx.send(SearchOutcome {
                    id: query.id,
                    result,
                });
            });
        }
        tracing::debug!("search worker exiting");
    });
}
