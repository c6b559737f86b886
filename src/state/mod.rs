//! Modularized state module.
//!
//! `app_state` holds the single mutable [`AppState`] owned by the event loop;
//! `types` holds the value types exchanged with the search worker.

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    BodyView, Focus, Owner, PageButton, QueryInput, Repository, SearchOutcome, SearchResponse,
};
