//! Parsing of theme colors and setting values.

use ratatui::style::Color;

use super::types::{Settings, Theme};
use crate::util::config::config_entries;

/// What: Parse a color from `#RRGGBB`, `RRGGBB` or `R,G,B`.
///
/// Inputs:
/// - `s`: Raw value (inline comments already stripped).
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` for anything else.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').collect();
    if let [r, g, b] = parts.as_slice() {
        let r = r.trim().parse::<u8>().ok()?;
        let g = g.trim().parse::<u8>().ok()?;
        let b = b.trim().parse::<u8>().ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// What: Parse a boolean setting.
///
/// Output:
/// - `Some(true)` for `true/yes/on/1`, `Some(false)` for `false/no/off/0`, else `None`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Mutable slot in [`Theme`] addressed by a config key.
fn theme_slot<'a>(theme: &'a mut Theme, key: &str) -> Option<&'a mut Color> {
    let slot = match key {
        "background_base" | "base" => &mut theme.base,
        "background_mantle" | "mantle" => &mut theme.mantle,
        "background_crust" | "crust" => &mut theme.crust,
        "surface_level1" | "surface1" => &mut theme.surface1,
        "surface_level2" | "surface2" => &mut theme.surface2,
        "overlay_primary" | "overlay1" => &mut theme.overlay1,
        "overlay_secondary" | "overlay2" => &mut theme.overlay2,
        "text_primary" | "text" => &mut theme.text,
        "text_secondary" | "subtext0" => &mut theme.subtext0,
        "text_tertiary" | "subtext1" => &mut theme.subtext1,
        "accent_interactive" | "sapphire" => &mut theme.sapphire,
        "accent_heading" | "mauve" => &mut theme.mauve,
        "accent_emphasis" | "lavender" => &mut theme.lavender,
        "semantic_success" | "green" => &mut theme.green,
        "semantic_warning" | "yellow" => &mut theme.yellow,
        "semantic_error" | "red" => &mut theme.red,
        _ => return None,
    };
    Some(slot)
}

/// What: Apply `theme.conf` overrides on top of the default palette.
///
/// Inputs:
/// - `content`: File text.
///
/// Output:
/// - `(theme, diagnostics)`; each diagnostic names the line and the problem.
///
/// Details:
/// - Unknown keys and unparsable colors are reported and otherwise ignored, so a
///   partially broken file still yields a usable palette.
pub(crate) fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut theme = Theme::default();
    let mut diagnostics = Vec::new();
    for (line, key, value) in config_entries(content) {
        let Some(slot) = theme_slot(&mut theme, &key) else {
            diagnostics.push(format!("line {line}: unknown theme key '{key}'"));
            continue;
        };
        match parse_color_value(&value) {
            Some(color) => *slot = color,
            None => diagnostics.push(format!("line {line}: invalid color '{value}' for '{key}'")),
        }
    }
    (theme, diagnostics)
}

/// What: Parse `settings.conf`.
///
/// Inputs:
/// - `content`: File text.
///
/// Output:
/// - `(settings, diagnostics)` with defaults for keys that are absent or invalid.
pub(crate) fn parse_settings(content: &str) -> (Settings, Vec<String>) {
    let mut out = Settings::default();
    let mut diagnostics = Vec::new();
    for (line, key, value) in config_entries(content) {
        match key.as_str() {
            "api_url" => {
                if value.starts_with("http://") || value.starts_with("https://") {
                    out.api_url = value;
                } else {
                    diagnostics.push(format!("line {line}: api_url must be an http(s) URL"));
                }
            }
            "user_agent" => {
                if value.is_empty() {
                    diagnostics.push(format!("line {line}: user_agent must not be empty"));
                } else {
                    out.user_agent = value;
                }
            }
            "show_keybinds_footer" => match parse_bool(&value) {
                Some(v) => out.show_keybinds_footer = v,
                None => diagnostics.push(format!("line {line}: expected true/false for '{key}'")),
            },
            "max_description_words" => match value.parse::<usize>() {
                Ok(v) if v > 0 => out.max_description_words = v,
                _ => diagnostics.push(format!("line {line}: expected a positive number for '{key}'")),
            },
            _ => diagnostics.push(format!("line {line}: unknown setting '{key}'")),
        }
    }
    (out, diagnostics)
}
