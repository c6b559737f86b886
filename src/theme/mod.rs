//! Theme and settings for gitseek.
//!
//! Both live as `key = value` files in the config directory; missing files or
//! bad entries fall back to built-in defaults.

/// Value parsing for colors and settings.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme store and caching.
mod store;
/// Theme and settings type definitions.
mod types;

pub use paths::{config_dir, logs_dir, set_config_dir_override, settings_path, theme_path};
pub use settings::{load_settings_from, settings};
pub use store::{load_theme_from, reload_theme, theme};
pub use types::{Settings, Theme};
