//! Constants for `AppState`.

use std::num::NonZeroUsize;

/// Maximum number of recent searches to retain (most-recent-first).
pub const RECENT_CAPACITY: usize = 20;

/// Results requested per page (`per_page` query parameter).
pub const ITEMS_PER_PAGE: u32 = 10;

/// Number of results the search API will page through before refusing.
///
/// Only used for the advisory note in the summary line.
pub const API_RESULT_CAP: u64 = 1000;

/// Default word limit for card descriptions.
pub const DEFAULT_MAX_DESCRIPTION_WORDS: usize = 50;

/// What: Provide the non-zero capacity used by the LRU recent cache.
///
/// Inputs: None.
///
/// Output:
/// - Non-zero capacity for the recent LRU cache.
///
/// Details:
/// - Uses a const unchecked constructor because the capacity constant is guaranteed
///   to be greater than zero.
#[must_use]
pub const fn recent_capacity() -> NonZeroUsize {
    // SAFETY: `RECENT_CAPACITY` is a non-zero constant.
    unsafe { NonZeroUsize::new_unchecked(RECENT_CAPACITY) }
}
