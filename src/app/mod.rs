//! gitseek application module.
//!
//! Terminal setup lives in `terminal`; the event loop, its channels and the
//! background workers live in `runtime`.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{RunOptions, run};

// Re-exported for integration tests that drive outcomes without a terminal.
pub use runtime::handle_search_outcome;
