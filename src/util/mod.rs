//! Small helpers shared across gitseek modules (text measurement, browser launch,
//! config parsing).

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub mod config;

/// What: Count characters (not bytes) in `s`.
#[must_use]
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// What: Convert a character index into a byte index within `s`.
///
/// Inputs:
/// - `s`: Text.
/// - `ci`: Character index; values past the end map to `s.len()`.
///
/// Output:
/// - Byte offset suitable for `String::insert`/`remove`.
#[must_use]
pub fn byte_index_for_char(s: &str, ci: usize) -> usize {
    s.char_indices().nth(ci).map_or(s.len(), |(b, _)| b)
}

/// What: Cut `s` to at most `max_width` terminal columns, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `max_width`: Available columns.
///
/// Output:
/// - `s` unchanged if it fits; otherwise a prefix plus `…` occupying at most `max_width`.
#[must_use]
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Greedy word wrap by display width.
///
/// Inputs:
/// - `text`: Text to wrap; runs of whitespace collapse to one space.
/// - `width`: Target line width in columns (at least 1 is assumed).
///
/// Output:
/// - Lines no wider than `width`, except single words longer than `width`,
///   which are hard-cut with [`truncate_to_width`].
#[must_use]
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let word = if word.width() > width {
            truncate_to_width(word, width)
        } else {
            word.to_string()
        };
        let needed = if line.is_empty() {
            word.width()
        } else {
            line.width() + 1 + word.width()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// What: Open a URL in the default browser.
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`; elsewhere `xdg-open`, falling back to `open` (macOS).
/// - Spawns the command in a background thread and only logs failures.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        tracing::info!(url = %url, "opening in browser");
        std::thread::spawn(move || {
            let quiet = |cmd: &mut std::process::Command| {
                cmd.stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
            };
            #[cfg(target_os = "windows")]
            let spawned = quiet(std::process::Command::new("cmd").args(["/c", "start", "", &url]));
            #[cfg(not(target_os = "windows"))]
            let spawned = quiet(std::process::Command::new("xdg-open").arg(&url))
                .or_else(|_| quiet(std::process::Command::new("open").arg(&url)));
            if let Err(e) = spawned {
                tracing::warn!(url = %url, error = %e, "failed to launch browser");
            }
        });
    }
}
