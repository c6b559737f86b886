//! Fetch adapter against a local stub server.

use gitseek::app::handle_search_outcome;
use gitseek::sources::{FetchError, SearchClient};
use gitseek::state::{AppState, BodyView, Repository, SearchOutcome};

use crate::stub::{envelope, serve_once};

#[tokio::test]
/// What: A 200 response is parsed and the request carries every query parameter.
///
/// Inputs:
/// - Stub returning a two-item envelope; search for "tui lib" page 2.
///
/// Output:
/// - Two repositories, total 42, and a request line with encoded `q`, sort, order, page and per_page.
async fn fetch_success_parses_envelope() {
    let stub = serve_once("200 OK", &envelope(42, 2)).await;
    let client = SearchClient::new(&stub.url, "gitseek-test").expect("client");
    let resp = client.search("tui lib", 2).await.expect("success");
    assert_eq!(resp.total_count, 42);
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].owner.login, "owner");
    assert_eq!(resp.items[0].description, None);

    let line = stub.request_line.await.expect("request observed");
    assert!(line.starts_with("GET /search/repositories?"), "{line}");
    assert!(line.contains("q=tui+lib"), "{line}");
    assert!(line.contains("sort=stars"), "{line}");
    assert!(line.contains("order=desc"), "{line}");
    assert!(line.contains("page=2"), "{line}");
    assert!(line.contains("per_page=10"), "{line}");
}

#[tokio::test]
/// What: A 403 surfaces as an HTTP error and clears the list and total once applied.
async fn fetch_forbidden_clears_results() {
    let stub = serve_once(
        "403 Forbidden",
        r#"{"message":"API rate limit exceeded"}"#,
    )
    .await;
    let client = SearchClient::new(&stub.url, "gitseek-test").expect("client");
    let err = client.search("rust", 1).await.expect_err("403");
    assert!(matches!(err, FetchError::Http { status: 403, .. }));
    assert!(err.to_string().contains("403"));

    let mut app = AppState {
        search_term: "rust".into(),
        total_count: 95,
        latest_query_id: 3,
        loading: true,
        ..AppState::default()
    };
    app.repositories = vec![Repository::default(); 10];
    handle_search_outcome(
        &mut app,
        SearchOutcome {
            id: 3,
            result: Err(err),
        },
    );
    assert!(app.error.contains("403"));
    assert!(app.repositories.is_empty());
    assert_eq!(app.total_count, 0);
    assert_eq!(app.body_view(), BodyView::Error);
}

#[tokio::test]
/// What: A success status with a foreign body is a decode error.
async fn fetch_malformed_body_is_decode_error() {
    let stub = serve_once("200 OK", r#"{"unexpected":true}"#).await;
    let client = SearchClient::new(&stub.url, "gitseek-test").expect("client");
    let err = client.search("rust", 1).await.expect_err("decode");
    assert!(matches!(err, FetchError::Decode(_)));
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
/// What: An unreachable endpoint is a transport error with a non-empty message.
async fn fetch_unreachable_is_transport_error() {
    let client =
        SearchClient::new("http://127.0.0.1:9/search/repositories", "gitseek-test").expect("client");
    let err = client.search("rust", 1).await.expect_err("transport");
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(!err.to_string().is_empty());
}
