//! Query flow from commit to applied outcome, including overlapping requests.

use tokio::sync::mpsc;

use gitseek::app::handle_search_outcome;
use gitseek::logic::{change_page, commit_search};
use gitseek::sources::SearchClient;
use gitseek::state::{AppState, BodyView, SearchOutcome, SearchResponse};

use crate::stub::{envelope, serve_once};

#[tokio::test]
/// What: Commit, fetch and apply a page; then page forward.
///
/// Inputs:
/// - Stub serving 95 total results for "rust".
///
/// Output:
/// - Ten cards, ten pages, and a page-2 query dispatched with a fresh id.
async fn flow_commit_fetch_apply() {
    let stub = serve_once("200 OK", &envelope(95, 10)).await;
    let client = SearchClient::new(&stub.url, "gitseek-test").expect("client");
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();

    assert!(commit_search(&mut app, "rust", &tx));
    let query = rx.try_recv().expect("query");
    assert_eq!(app.body_view(), BodyView::Loading);

    let result = client.search(&query.term, query.page).await;
    assert!(handle_search_outcome(
        &mut app,
        SearchOutcome {
            id: query.id,
            result,
        }
    ));
    assert_eq!(app.body_view(), BodyView::Results);
    assert_eq!(app.repositories.len(), 10);
    assert_eq!(app.total_pages(), 10);

    assert!(change_page(&mut app, 2, &tx));
    let next = rx.try_recv().expect("page query");
    assert_eq!(next.page, 2);
    assert!(next.id > query.id);
    assert_eq!(app.repositories.len(), 10, "page change keeps current cards until resolved");
}

#[test]
/// What: When two searches overlap, only the newer one's outcome is shown.
///
/// Inputs:
/// - Commit "a", then commit "b"; outcome for "b" arrives before the outcome for "a".
///
/// Output:
/// - State reflects "b"; the late "a" outcome is discarded.
fn flow_overlapping_searches_latest_wins() {
    let mut app = AppState::default();
    let (tx, mut rx) = mpsc::unbounded_channel();
    commit_search(&mut app, "a", &tx);
    commit_search(&mut app, "b", &tx);
    let first = rx.try_recv().expect("first");
    let second = rx.try_recv().expect("second");

    let b_response = SearchResponse {
        total_count: 7,
        ..SearchResponse::default()
    };
    assert!(handle_search_outcome(
        &mut app,
        SearchOutcome {
            id: second.id,
            result: Ok(b_response),
        }
    ));
    let a_response = SearchResponse {
        total_count: 1234,
        ..SearchResponse::default()
    };
    assert!(!handle_search_outcome(
        &mut app,
        SearchOutcome {
            id: first.id,
            result: Ok(a_response),
        }
    ));
    assert_eq!(app.search_term, "b");
    assert_eq!(app.total_count, 7);
    assert!(!app.loading);
}

#[test]
/// What: A whitespace-only commit neither fetches nor disturbs shown results.
fn flow_blank_commit_is_noop() {
    let mut app = AppState {
        search_term: "rust".into(),
        total_count: 30,
        current_page: 2,
        ..AppState::default()
    };
    let (tx, mut rx) = mpsc::unbounded_channel();
    assert!(!commit_search(&mut app, " \t ", &tx));
    assert!(rx.try_recv().is_err());
    assert_eq!(app.search_term, "rust");
    assert_eq!(app.total_count, 30);
    assert_eq!(app.current_page, 2);
}
