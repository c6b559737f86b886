//! Headless runtime smoke tests.
//! - Run with `GITSEEK_TEST_HEADLESS=1` so no raw TTY setup happens.
//! - Without an initial search the loop has nothing in flight and returns at once.
//! - With one, it returns after the stub's answer has been applied.

use std::time::Duration;

use gitseek::app::{RunOptions, run};

use crate::stub::{envelope, serve_once};

/// Headless mode plus a throwaway config directory.
fn prepare_headless() {
    unsafe {
        std::env::set_var("GITSEEK_TEST_HEADLESS", "1");
    }
    let dir = std::env::temp_dir().join(format!("gitseek-smoke-{}", std::process::id()));
    gitseek::theme::set_config_dir_override(dir);
}

#[tokio::test(flavor = "multi_thread")]
/// What: `run` starts and stops cleanly with no work to do.
async fn runtime_smoke_headless_idle() {
    prepare_headless();
    let result = tokio::time::timeout(Duration::from_secs(5), run(RunOptions::default()))
        .await
        .expect("run returns without input in headless mode");
    assert!(result.is_ok(), "run failed: {result:?}");
}

#[tokio::test(flavor = "multi_thread")]
/// What: `--search` commits at startup and the runtime drains the outcome before exiting.
async fn runtime_smoke_headless_initial_search() {
    prepare_headless();
    let stub = serve_once("200 OK", &envelope(3, 3)).await;
    let options = RunOptions {
        initial_search: Some("ratatui".into()),
        api_url: Some(stub.url.clone()),
    };
    let result = tokio::time::timeout(Duration::from_secs(10), run(options))
        .await
        .expect("run returns once the search resolves");
    assert!(result.is_ok(), "run failed: {result:?}");
    let line = stub.request_line.await.expect("stub was queried");
    assert!(line.contains("q=ratatui"), "{line}");
}
