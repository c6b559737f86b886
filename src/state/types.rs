//! Core value types used by gitseek state.

use serde::Deserialize;

use crate::sources::FetchError;

/// Owner block embedded in every repository search hit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    /// Account login (user or organization).
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Profile page URL.
    pub html_url: String,
}

/// Repository summary as returned by the search API.
///
/// Immutable snapshot; fields the card does not render are simply not
/// deserialized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Repository {
    /// Unique numeric identifier.
    pub id: u64,
    /// Short repository name (e.g., "ratatui").
    pub name: String,
    /// Owner-qualified name (e.g., "ratatui/ratatui").
    pub full_name: String,
    /// Free-form description, absent for many repositories.
    #[serde(default)]
    pub description: Option<String>,
    /// Canonical web URL.
    pub html_url: String,
    /// Star count.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Primary language, when detected.
    #[serde(default)]
    pub language: Option<String>,
    /// Last update timestamp in ISO-8601 form.
    pub updated_at: String,
    /// Owning account.
    pub owner: Owner,
}

/// Envelope wrapping one page of search hits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    /// Total number of matches known to the API; may exceed `items.len()`.
    pub total_count: u64,
    /// Whether the API timed out before collecting every match.
    #[serde(default)]
    pub incomplete_results: bool,
    /// Hits for the requested page, most-starred first.
    pub items: Vec<Repository>,
}

/// Search request sent to the background search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Committed search term, exactly as typed.
    pub term: String,
    /// 1-based page number.
    pub page: u32,
}

/// Outcome corresponding to a prior [`QueryInput`].
#[derive(Debug)]
pub struct SearchOutcome {
    /// Echoed identifier from the originating query.
    pub id: u64,
    /// Parsed page or the failure that prevented it.
    pub result: Result<SearchResponse, FetchError>,
}

/// Which part of the screen receives keyboard input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the search input.
    #[default]
    Search,
    /// Arrow keys move through result cards and pages.
    Results,
}

/// Mutually exclusive body states, derived from [`crate::state::AppState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyView {
    /// Nothing has been searched yet.
    Idle,
    /// A request for the latest query is in flight.
    Loading,
    /// The latest request failed.
    Error,
    /// The latest request succeeded with zero hits.
    NoResults,
    /// Result cards (and pagination when there are several pages).
    Results,
}

/// Clickable element of the pagination control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageButton {
    /// Step back one page.
    Previous,
    /// Jump to the given 1-based page.
    Page(u32),
    /// Step forward one page.
    Next,
}
