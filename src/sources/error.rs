//! Failure taxonomy for search requests.

use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Why a search request produced no results.
///
/// The `Display` text is what the error banner shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Error: {status} {status_text}")]
    Http {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase for `status` (may be empty).
        status_text: String,
    },
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("{}", or_generic(.0))]
    Transport(String),
    /// The response body was not the expected search envelope.
    #[error("{}", or_generic(.0))]
    Decode(String),
}

/// Substitute the generic message for an empty one.
fn or_generic(msg: &str) -> &str {
    if msg.trim().is_empty() {
        GENERIC_ERROR_MESSAGE
    } else {
        msg
    }
}
