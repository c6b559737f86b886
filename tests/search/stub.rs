//! Minimal one-shot HTTP server for exercising the search client offline.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Handle to a stub that answers exactly one request.
pub struct Stub {
    /// Search endpoint URL pointing at the stub.
    pub url: String,
    /// Resolves to the request line (`GET /path?query HTTP/1.1`) once served.
    pub request_line: oneshot::Receiver<String>,
}

/// What: Bind a local listener that replies once with `status` and `body`.
///
/// Inputs:
/// - `status`: Status line tail, e.g. `"403 Forbidden"`.
/// - `body`: Response body sent as JSON.
///
/// Output:
/// - [`Stub`] with the endpoint URL and a receiver for the observed request line.
pub async fn serve_once(status: &str, body: &str) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
            match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => raw.extend_from_slice(&buf[..n]),
            }
        }
        let text = String::from_utf8_lossy(&raw);
        let line = text.lines().next().unwrap_or_default().to_string();
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        let _ = tx.send(line);
    });
    Stub {
        url: format!("http://{addr}/search/repositories"),
        request_line: rx,
    }
}

/// Search envelope with `n` items and the given total.
pub fn envelope(total: u64, n: u64) -> String {
    let items: Vec<String> = (1..=n)
        .map(|i| {
            format!(
                r#"{{"id":{i},"name":"repo{i}","full_name":"owner/repo{i}","description":null,"html_url":"https://github.com/owner/repo{i}","stargazers_count":{stars},"forks_count":3,"watchers_count":{stars},"language":"Rust","updated_at":"2024-03-05T10:00:00Z","owner":{{"login":"owner","avatar_url":"https://avatars.example/u/1","html_url":"https://github.com/owner"}}}}"#,
                stars = 1000 - i
            )
        })
        .collect();
    format!(
        r#"{{"total_count":{total},"incomplete_results":false,"items":[{}]}}"#,
        items.join(",")
    )
}
