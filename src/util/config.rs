//! `key = value` configuration file parsing shared by settings and theme loading.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Remove a trailing ` # comment` from a value.
///
/// Inputs:
/// - `value`: Raw value text after `=`.
///
/// Output:
/// - Trimmed value without the comment.
///
/// Details:
/// - Leading whitespace is dropped first; a `#` then only starts a comment when
///   preceded by whitespace, so `#RRGGBB` colors and URLs with fragments survive.
#[must_use]
pub fn strip_inline_comment(value: &str) -> &str {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let cut = bytes
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(i, &b)| b == b'#' && bytes[i - 1].is_ascii_whitespace())
        .map_or(value.len(), |(i, _)| i);
    value[..cut].trim()
}

/// What: Normalize a key so `Show-Keybinds.Footer` and `show_keybinds_footer` match.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Iterate the `key = value` entries of a config file.
///
/// Inputs:
/// - `content`: Whole file text.
///
/// Output:
/// - `(line_number, normalized_key, value)` for each entry, 1-based line numbers.
///
/// Details:
/// - Splits on the first `=`; lines without one and comment lines are skipped.
pub fn config_entries(content: &str) -> impl Iterator<Item = (usize, String, String)> + '_ {
    content.lines().enumerate().filter_map(|(idx, line)| {
        if skip_comment_or_empty(line) {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((
            idx + 1,
            normalize_key(key),
            strip_inline_comment(value).to_string(),
        ))
    })
}
