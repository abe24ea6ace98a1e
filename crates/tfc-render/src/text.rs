//! Display-width aware text helpers.
//!
//! Every function here measures strings the way a terminal renders them:
//! wide characters (CJK, most emoji) count as two columns and ANSI escape
//! sequences count as zero. Escape sequences are kept in the output of
//! [`truncate`] and [`pad_right`]; only printable characters are removed.

use chrono::{DateTime, Duration, Utc};
use console::{measure_text_width, pad_str, truncate_str, Alignment};

/// Marker appended to truncated content.
pub const ELLIPSIS: &str = "...";

/// Smallest target width that still gets an [`ELLIPSIS`]: two characters of
/// content plus the marker itself. Narrower targets are hard-cut.
pub const MIN_WIDTH_FOR_ELLIPSIS: usize = ELLIPSIS.len() + 2;

/// Returns the number of terminal columns `s` occupies.
///
/// ```rust
/// use tfc_render::text::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Shortens `s` so it occupies at most `max_width` columns.
///
/// Strings that already fit are returned unchanged. Otherwise the end of the
/// string is cut and [`ELLIPSIS`] appended, provided the target is at least
/// [`MIN_WIDTH_FOR_ELLIPSIS`] wide. Escape sequences after the cut (colour
/// resets, hyperlink terminators) are kept so styling does not leak into
/// whatever follows. When a wide character straddles the cut
/// the result would be one column short; a trailing space keeps it exactly
/// `max_width` wide so columns stay aligned.
///
/// ```rust
/// use tfc_render::text::truncate;
///
/// assert_eq!(truncate("1234567890", 9), "123456...");
/// assert_eq!(truncate("1234567890", 4), "1234");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    let tail = if max_width >= MIN_WIDTH_FOR_ELLIPSIS {
        ELLIPSIS
    } else {
        ""
    };

    let mut result = truncate_str(s, max_width, tail).into_owned();
    if display_width(&result) < max_width {
        result.push(' ');
    }
    result
}

/// Pads `s` on the right with spaces up to `width` columns.
///
/// Strings already at least `width` wide are returned unchanged.
///
/// ```rust
/// use tfc_render::text::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// assert_eq!(pad_right("hello", 3), "hello");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Returns `"<num> <thing>"`, pluralising `thing` with an `s` unless `num == 1`.
pub fn pluralize(num: i64, thing: &str) -> String {
    if num == 1 {
        format!("{} {}", num, thing)
    } else {
        format!("{} {}s", num, thing)
    }
}

/// Describes how long before `now` the instant `then` happened, e.g.
/// `"about 3 hours ago"`.
///
/// Anything under a minute (including instants in the future) reads
/// `"less than a minute ago"`. Months are 30 days and years 365 days.
pub fn relative_time_ago(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let ago = now.signed_duration_since(then);

    if ago < Duration::minutes(1) {
        return "less than a minute ago".to_string();
    }
    if ago < Duration::hours(1) {
        return about_ago(ago.num_minutes(), "minute");
    }
    if ago < Duration::hours(24) {
        return about_ago(ago.num_hours(), "hour");
    }
    if ago < Duration::days(30) {
        return about_ago(ago.num_hours() / 24, "day");
    }
    if ago < Duration::days(365) {
        return about_ago(ago.num_hours() / 24 / 30, "month");
    }

    about_ago(ago.num_hours() / 24 / 365, "year")
}

fn about_ago(amount: i64, unit: &str) -> String {
    format!("about {} ago", pluralize(amount, unit))
}

/// Prefixes every line of `s` (empty ones included) with `amount` spaces.
pub fn indent(amount: usize, s: &str) -> String {
    let prefix = " ".repeat(amount);
    s.split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Constrains `value` to `min..=max`.
///
/// Unlike [`Ord::clamp`] this never panics: when `min > max`, values below
/// `min` become `min` and everything else becomes `max`.
pub fn clamp(value: usize, min: usize, max: usize) -> usize {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Truncates `s` to `width` after clamping `width` into `min..=max`.
pub fn truncate_bounded(s: &str, width: usize, min: usize, max: usize) -> String {
    truncate(s, clamp(width, min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn display_width_counts_columns() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width("café"), 4);
        assert_eq!(display_width("日本語"), 6);
    }

    #[test]
    fn display_width_ignores_ansi() {
        assert_eq!(display_width("\x1b[1;32mbold green\x1b[0m"), 10);
        assert_eq!(display_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
    }

    #[test]
    fn truncate_keeps_fitting_strings() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 80), "hello");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn truncate_appends_ellipsis_when_wide_enough() {
        assert_eq!(truncate("1234567890", 9), "123456...");
        assert_eq!(truncate("hello world", 5), "he...");
    }

    #[test]
    fn truncate_hard_cuts_below_ellipsis_width() {
        assert_eq!(truncate("hello world", 4), "hell");
        assert_eq!(truncate("hello world", 1), "h");
        assert_eq!(truncate("hello world", 0), "");
    }

    #[test]
    fn truncate_pads_when_wide_char_straddles_cut() {
        // "日本" leaves one column unused before the ellipsis
        let result = truncate("日本語テスト", 8);
        assert_eq!(result, "日本... ");
        assert_eq!(display_width(&result), 8);

        let result = truncate("日本語", 3);
        assert_eq!(result, "日 ");
    }

    #[test]
    fn truncate_keeps_colour_reset() {
        let styled = "\x1b[31mhello world\x1b[0m";
        let result = truncate(styled, 8);
        assert_eq!(result, "\x1b[31mhello...\x1b[0m");
        assert_eq!(display_width(&result), 8);
    }

    #[test]
    fn truncate_keeps_colour_reset_without_ellipsis() {
        let styled = "\x1b[1;32mbold green\x1b[0m";
        let result = truncate(styled, 3);
        assert!(result.starts_with("\x1b[1;32mbol"));
        assert!(result.ends_with("\x1b[0m"));
        assert_eq!(display_width(&result), 3);
    }

    #[test]
    fn truncate_keeps_hyperlink_intact() {
        let link = "\x1b]8;;https://app.terraform.io\x07workspace-one\x1b]8;;\x07";
        assert_eq!(display_width(link), 13);

        let result = truncate(link, 8);
        assert_eq!(display_width(&result), 8);
        assert!(result.starts_with("\x1b]8;;https://app.terraform.io\x07works"));
        assert!(result.ends_with("\x1b]8;;\x07"));
        assert_eq!(console::strip_ansi_codes(&result), "works...");
    }

    #[test]
    fn pad_right_fills_to_width() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("日本", 6), "日本  ");
        assert_eq!(pad_right("abc", 0), "abc");
    }

    #[test]
    fn pluralize_singular_and_plural() {
        assert_eq!(pluralize(1, "day"), "1 day");
        assert_eq!(pluralize(0, "day"), "0 days");
        assert_eq!(pluralize(3, "hour"), "3 hours");
    }

    #[test]
    fn relative_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let cases = [
            (Duration::seconds(30), "less than a minute ago"),
            (Duration::minutes(1), "about 1 minute ago"),
            (Duration::minutes(59), "about 59 minutes ago"),
            (Duration::hours(5), "about 5 hours ago"),
            (Duration::days(1), "about 1 day ago"),
            (Duration::days(29), "about 29 days ago"),
            (Duration::days(45), "about 1 month ago"),
            (Duration::days(364), "about 12 months ago"),
            (Duration::days(800), "about 2 years ago"),
        ];

        for (ago, expected) in cases {
            assert_eq!(relative_time_ago(now, now - ago), expected, "{:?}", ago);
        }
    }

    #[test]
    fn relative_time_ago_future_is_recent() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(
            relative_time_ago(now, now + Duration::hours(2)),
            "less than a minute ago"
        );
    }

    #[test]
    fn indent_prefixes_every_line() {
        assert_eq!(indent(2, "a\nb"), "  a\n  b");
        assert_eq!(indent(2, "a\n"), "  a\n  ");
        assert_eq!(indent(0, "a"), "a");
    }

    #[test]
    fn clamp_bounds_value() {
        assert_eq!(clamp(5, 1, 10), 5);
        assert_eq!(clamp(0, 1, 10), 1);
        assert_eq!(clamp(11, 1, 10), 10);
        assert_eq!(clamp(5, 8, 2), 8);
    }

    #[test]
    fn truncate_bounded_clamps_target() {
        assert_eq!(truncate_bounded("hello world", 3, 8, 20), "hello...");
        assert_eq!(truncate_bounded("hello world", 40, 1, 6), "hel...");
    }
}
