use crate::state::AppState;
use crate::theme::Settings;

/// What: Copy presentation preferences from settings into the session state.
///
/// Inputs:
/// - `app`: Application state to update
/// - `prefs`: Parsed `settings.conf`
pub fn apply_settings_to_app_state(app: &mut AppState, prefs: &Settings) {
    app.show_keybinds_footer = prefs.show_keybinds_footer;
    app.max_description_words = prefs.max_description_words;
}

/// What: Pick the search endpoint for this run.
///
/// Inputs:
/// - `cli_override`: Value of `--api-url`, if given
/// - `prefs`: Parsed `settings.conf`
///
/// Output:
/// - The command-line value when present and non-blank, else the settings value.
pub fn resolve_api_url(cli_override: Option<&str>, prefs: &Settings) -> String {
    match cli_override.map(str::trim) {
        Some(url) if !url.is_empty() => {
            tracing::info!(api_url = %url, "using API URL from command line");
            url.to_string()
        }
        _ => prefs.api_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Settings flow into the presentation fields of `AppState`.
    fn init_applies_settings() {
        let mut app = AppState::default();
        let prefs = Settings {
            show_keybinds_footer: false,
            max_description_words: 7,
            ..Settings::default()
        };
        apply_settings_to_app_state(&mut app, &prefs);
        assert!(!app.show_keybinds_footer);
        assert_eq!(app.max_description_words, 7);
    }

    #[test]
    /// What: `--api-url` wins over settings unless it is blank.
    fn init_api_url_precedence() {
        let prefs = Settings {
            api_url: "https://ghe.example.com/api/v3/search/repositories".into(),
            ..Settings::default()
        };
        assert_eq!(
            resolve_api_url(Some("http://127.0.0.1:9/search"), &prefs),
            "http://127.0.0.1:9/search"
        );
        assert_eq!(resolve_api_url(Some("  "), &prefs), prefs.api_url);
        assert_eq!(resolve_api_url(None, &prefs), prefs.api_url);
    }
}
