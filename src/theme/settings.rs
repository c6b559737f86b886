use std::fs;
use std::path::Path;

use super::parsing::parse_settings;
use super::paths::settings_path;
use super::types::Settings;

/// What: Load settings from an explicit file.
///
/// Inputs:
/// - `path`: Path to a `settings.conf`.
///
/// Output:
/// - Parsed settings; `Settings::default()` when the file is missing or unreadable.
///
/// Details:
/// - Every diagnostic is logged as a warning with the file path.
pub fn load_settings_from(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
            return Settings::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings");
            return Settings::default();
        }
    };
    let (settings, diagnostics) = parse_settings(&content);
    for d in diagnostics {
        tracing::warn!(path = %path.display(), "{d}");
    }
    tracing::info!(path = %path.display(), "loaded settings");
    settings
}

/// Load user settings from `<config_dir>/settings.conf`.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    load_settings_from(&settings_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: A missing file yields defaults.
    fn settings_missing_file_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings_from(&dir.path().join("settings.conf"));
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: Values in an existing file are applied.
    fn settings_file_is_applied() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.conf");
        fs::write(
            &path,
            "# gitseek settings\nmax_description_words = 12\nshow_keybinds_footer = false\n",
        )
        .expect("write settings");
        let s = load_settings_from(&path);
        assert_eq!(s.max_description_words, 12);
        assert!(!s.show_keybinds_footer);
        assert_eq!(s.api_url, Settings::default().api_url);
    }
}
