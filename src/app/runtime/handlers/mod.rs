mod search;
mod tick;

pub use search::handle_search_outcome;
pub use tick::handle_tick;
