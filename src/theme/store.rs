use std::fs;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

use super::parsing::parse_theme;
use super::paths::theme_path;
use super::types::Theme;

/// Global theme store with live-reload capability.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// What: Load a palette from `path`, falling back to the default palette.
///
/// Inputs:
/// - `path`: Path to a `theme.conf`.
///
/// Output:
/// - Default palette with any valid overrides from the file applied.
pub fn load_theme_from(path: &Path) -> Theme {
    let Ok(content) = fs::read_to_string(path) else {
        return Theme::default();
    };
    let (theme, diagnostics) = parse_theme(&content);
    for d in diagnostics {
        tracing::warn!(path = %path.display(), "{d}");
    }
    tracing::info!(path = %path.display(), "loaded theme configuration");
    theme
}

/// Return the application's theme palette, loading `<config_dir>/theme.conf` on first use.
///
/// Format: key = value, one per line; values are colors as "#RRGGBB" or "R,G,B".
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_theme_from(&theme_path())));
    lock.read().map_or_else(|poisoned| *poisoned.into_inner(), |t| *t)
}

/// What: Re-read `theme.conf` and replace the active palette.
///
/// Output:
/// - `true` when the store was updated.
pub fn reload_theme() -> bool {
    let fresh = load_theme_from(&theme_path());
    let lock = THEME_STORE.get_or_init(|| RwLock::new(fresh));
    match lock.write() {
        Ok(mut guard) => {
            *guard = fresh;
            true
        }
        Err(_) => false,
    }
}
