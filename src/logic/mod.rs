//! Core non-UI logic split into modular submodules.

pub mod format;
pub mod pagination;
pub mod query;

pub use format::{format_count, format_date, truncate_description};
pub use pagination::{MAX_VISIBLE_PAGES, PaginationView, page_window, pagination_view};
pub use query::{change_page, commit_search, next_page, previous_page, send_query};
