//! Network data retrieval: the repository search endpoint and its error type.

mod error;
mod search;

pub use error::FetchError;
pub use search::{
    DEFAULT_API_URL, SearchClient, default_user_agent, parse_search_response,
};
