//! Display formatting for counts, descriptions and dates on result cards.

use chrono::{DateTime, NaiveDate};

/// What: Abbreviate a count for compact display.
///
/// Inputs:
/// - `n`: Non-negative count (stars, forks, watchers, total matches).
///
/// Output:
/// - `"1.5M"` for millions, `"2.3k"` for thousands, the plain integer below 1000.
///
/// Details:
/// - One decimal place, rounded; the thresholds are inclusive, so `999_999`
///   stays in thousands and renders as `"1000.0k"`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// What: Limit a description to `max_words` words.
///
/// Inputs:
/// - `text`: Description as received from the API.
/// - `max_words`: Word budget.
///
/// Output:
/// - `text` unchanged when it has at most `max_words` words; otherwise the first
///   `max_words` words joined by single spaces followed by `"..."`.
#[must_use]
pub fn truncate_description(text: &str, max_words: usize) -> String {
    let mut words = text.split_whitespace();
    let head: Vec<&str> = words.by_ref().take(max_words).collect();
    if words.next().is_none() {
        return text.to_string();
    }
    format!("{}...", head.join(" "))
}

/// What: Render an API timestamp as `"Mon D, YYYY"`.
///
/// Inputs:
/// - `iso`: RFC 3339 timestamp (e.g. `2024-03-05T10:00:00Z`) or a bare `YYYY-MM-DD` date.
///
/// Output:
/// - `"Mar 5, 2024"`; the input unchanged when it cannot be parsed.
///
/// Details:
/// - The calendar date is taken in the timestamp's own offset (UTC for the API).
#[must_use]
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"));
    match date {
        Ok(d) => d.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Count abbreviation around both thresholds.
    ///
    /// Inputs:
    /// - 42, 999, 1000, 2300, 999 999, 1 000 000, 1 500 000.
    ///
    /// Output:
    /// - Plain integers below 1000, one-decimal `k` below a million, `M` above.
    fn format_count_thresholds() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1.0k");
        assert_eq!(format_count(2_300), "2.3k");
        assert_eq!(format_count(999_999), "1000.0k");
        assert_eq!(format_count(1_000_000), "1.0M");
        assert_eq!(format_count(1_500_000), "1.5M");
    }

    #[test]
    /// What: Short descriptions pass through untouched, including their spacing.
    fn truncate_description_short_is_unchanged() {
        assert_eq!(truncate_description("a b c", 50), "a b c");
        assert_eq!(truncate_description("a  b\tc", 3), "a  b\tc");
        assert_eq!(truncate_description("", 50), "");
    }

    #[test]
    /// What: Long descriptions keep the first `max_words` words plus an ellipsis.
    ///
    /// Inputs:
    /// - 60 one-character words, limit 50.
    ///
    /// Output:
    /// - The first 50 words joined by single spaces followed by `"..."`.
    fn truncate_description_long_is_cut() {
        let words: Vec<String> = (0..60).map(|i| ((b'a' + (i % 26)) as char).to_string()).collect();
        let text = words.join(" ");
        let expected = format!("{}...", words[..50].join(" "));
        assert_eq!(truncate_description(&text, 50), expected);
    }

    #[test]
    /// What: Exactly `max_words` words is not truncated.
    fn truncate_description_exact_limit() {
        assert_eq!(truncate_description("one two three", 3), "one two three");
        assert_eq!(truncate_description("one two three four", 3), "one two three...");
    }

    #[test]
    /// What: Timestamps render as abbreviated month, unpadded day, and year.
    fn format_date_renders_month_day_year() {
        assert_eq!(format_date("2024-03-05T10:00:00Z"), "Mar 5, 2024");
        assert_eq!(format_date("2023-12-31T23:59:59Z"), "Dec 31, 2023");
        assert_eq!(format_date("2021-07-14"), "Jul 14, 2021");
    }

    #[test]
    /// What: Garbage timestamps are shown as received.
    fn format_date_falls_back_to_input() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
