//! Repository search over the GitHub REST API.

use std::time::Duration;

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::FetchError;
use crate::state::SearchResponse;
use crate::state::app_state::ITEMS_PER_PAGE;

/// Endpoint used when neither settings nor CLI override it.
pub const DEFAULT_API_URL: &str = "https://api.github.com/search/repositories";

/// `User-Agent` sent when settings do not override it; the API rejects requests without one.
#[must_use]
pub fn default_user_agent() -> String {
    format!("gitseek/{}", env!("CARGO_PKG_VERSION"))
}

/// Thin wrapper over a pooled `reqwest::Client` bound to one search endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    /// Shared HTTP client (connection pooling).
    http: reqwest::Client,
    /// Search endpoint without query string.
    api_url: String,
}

impl SearchClient {
    /// What: Build a client for `api_url`.
    ///
    /// Inputs:
    /// - `api_url`: Search endpoint, e.g. [`DEFAULT_API_URL`].
    /// - `user_agent`: Value of the `User-Agent` header.
    ///
    /// Output:
    /// - `Ok(SearchClient)`; `Err(FetchError::Transport)` when the URL is not absolute
    ///   or the TLS backend cannot be initialized.
    ///
    /// # Errors
    /// - Returns `Err` when `api_url` does not parse or the HTTP client fails to build.
    ///
    /// Details:
    /// - Only a connect timeout is applied; a request that has connected is never cut short.
    pub fn new(api_url: &str, user_agent: &str) -> Result<Self, FetchError> {
        Url::parse(api_url)
            .map_err(|e| FetchError::Transport(format!("invalid API URL {api_url}: {e}")))?;
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_url: api_url.to_string(),
        })
    }

    /// Search endpoint this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// What: Build the request URL for one page of results.
    ///
    /// Inputs:
    /// - `term`: Search text, sent verbatim as `q`.
    /// - `page`: 1-based page number.
    ///
    /// Output:
    /// - URL carrying `q`, `sort=stars`, `order=desc`, `page` and `per_page`.
    ///
    /// # Errors
    /// - Returns `Err(FetchError::Transport)` if the endpoint does not parse.
    pub fn search_url(&self, term: &str, page: u32) -> Result<Url, FetchError> {
        let page = page.to_string();
        let per_page = ITEMS_PER_PAGE.to_string();
        Url::parse_with_params(
            &self.api_url,
            [
                ("q", term),
                ("sort", "stars"),
                ("order", "desc"),
                ("page", page.as_str()),
                ("per_page", per_page.as_str()),
            ],
        )
        .map_err(|e| FetchError::Transport(format!("invalid API URL {}: {e}", self.api_url)))
    }

    /// What: Fetch one page of repositories sorted by stars.
    ///
    /// Inputs:
    /// - `term`: Non-empty search text.
    /// - `page`: 1-based page number.
    ///
    /// Output:
    /// - Parsed [`SearchResponse`] on a 2xx answer.
    ///
    /// # Errors
    /// - `FetchError::Http` for non-success statuses (403 when rate limited, 422 for bad queries).
    /// - `FetchError::Transport` when the request cannot be sent or the body cannot be read.
    /// - `FetchError::Decode` when the body is not the search envelope.
    pub async fn search(&self, term: &str, page: u32) -> Result<SearchResponse, FetchError> {
        let url = self.search_url(term, page)?;
        tracing::debug!(url = %url, "requesting repository search");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_search_response(&body)
    }
}

/// What: Decode a search envelope from a JSON body.
///
/// Inputs:
/// - `body`: Raw response text.
///
/// Output:
/// - Parsed [`SearchResponse`].
///
/// # Errors
/// - Returns `Err(FetchError::Decode)` with the `serde_json` message when the shape does not match.
pub fn parse_search_response(body: &str) -> Result<SearchResponse, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "id": 1,
                "name": "ratatui",
                "full_name": "ratatui/ratatui",
                "description": "Rust library for cooking up terminal user interfaces",
                "html_url": "https://github.com/ratatui/ratatui",
                "stargazers_count": 12000,
                "forks_count": 400,
                "watchers_count": 12000,
                "language": "Rust",
                "updated_at": "2024-03-05T10:00:00Z",
                "private": false,
                "owner": {
                    "login": "ratatui",
                    "id": 9,
                    "avatar_url": "https://avatars.githubusercontent.com/u/9",
                    "html_url": "https://github.com/ratatui"
                }
            },
            {
                "id": 2,
                "name": "bare",
                "full_name": "someone/bare",
                "description": null,
                "html_url": "https://github.com/someone/bare",
                "stargazers_count": 0,
                "forks_count": 0,
                "watchers_count": 0,
                "language": null,
                "updated_at": "2023-12-31T23:59:59Z",
                "owner": {
                    "login": "someone",
                    "avatar_url": "",
                    "html_url": "https://github.com/someone"
                }
            }
        ]
    }"#;

    #[test]
    /// What: The envelope parses, ignoring unknown fields and accepting null optionals.
    fn search_parse_sample_envelope() {
        let resp = parse_search_response(SAMPLE).expect("sample parses");
        assert_eq!(resp.total_count, 2);
        assert!(!resp.incomplete_results);
        assert_eq!(resp.items.len(), 2);
        assert_eq!(resp.items[0].owner.login, "ratatui");
        assert_eq!(resp.items[0].language.as_deref(), Some("Rust"));
        assert!(resp.items[1].description.is_none());
        assert!(resp.items[1].language.is_none());
    }

    #[test]
    /// What: A body that is not the envelope yields a decode error, not a panic.
    fn search_parse_rejects_error_body() {
        let err = parse_search_response(r#"{"message":"API rate limit exceeded"}"#)
            .expect_err("missing fields");
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    /// What: The request URL carries every fixed parameter and encodes the term.
    fn search_url_has_fixed_parameters() {
        let client = SearchClient::new(DEFAULT_API_URL, "gitseek-test").expect("client");
        let url = client.search_url("machine learning", 3).expect("url");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "machine learning".to_string()),
                ("sort".to_string(), "stars".to_string()),
                ("order".to_string(), "desc".to_string()),
                ("page".to_string(), "3".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );
        assert_eq!(url.path(), "/search/repositories");
    }

    #[test]
    /// What: A relative endpoint is rejected when building the client.
    fn search_client_rejects_relative_url() {
        let err = SearchClient::new("search/repositories", "ua").expect_err("relative url");
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
