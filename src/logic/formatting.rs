//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Datelike, Timelike, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43200;

/// Format the distance between a timestamp and now in words
///
/// Wording and thresholds follow date-fns `formatDistanceToNow` with
/// `includeSeconds` and `addSuffix`: past timestamps read "... ago",
/// future ones "in ...".
///
/// # Examples
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use filedeck::logic::formatting::format_distance;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(format_distance(now - Duration::seconds(3), now), "less than 5 seconds ago");
/// assert_eq!(format_distance(now - Duration::minutes(10), now), "10 minutes ago");
/// assert_eq!(format_distance(now - Duration::days(3), now), "3 days ago");
/// assert_eq!(format_distance(now + Duration::hours(5), now), "in about 5 hours");
/// ```
pub fn format_distance(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later) = if then <= now { (then, now) } else { (now, then) };
    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    let distance = if minutes < 2 {
        if seconds < 5 {
            "less than 5 seconds".to_string()
        } else if seconds < 10 {
            "less than 10 seconds".to_string()
        } else if seconds < 20 {
            "less than 20 seconds".to_string()
        } else if seconds < 40 {
            "half a minute".to_string()
        } else if seconds < 60 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        }
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural(round_div(minutes, 60), "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural(round_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_MONTH * 2 {
        format!("about {}", plural(round_div(minutes, MINUTES_IN_MONTH), "month"))
    } else {
        let months = month_difference(earlier, later);
        if months < 12 {
            plural(round_div(minutes, MINUTES_IN_MONTH), "month")
        } else {
            let years = months / 12;
            let remainder = months % 12;
            if remainder < 3 {
                format!("about {}", plural(years, "year"))
            } else if remainder < 9 {
                format!("over {}", plural(years, "year"))
            } else {
                format!("almost {}", plural(years + 1, "year"))
            }
        }
    };

    if then > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

/// Whole calendar months between two timestamps (`earlier <= later`)
fn month_difference(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = (later.year() - earlier.year()) as i64 * 12
        + later.month() as i64
        - earlier.month() as i64;

    // Last month is not complete yet
    let later_pos = (later.day(), later.num_seconds_from_midnight());
    let earlier_pos = (earlier.day(), earlier.num_seconds_from_midnight());
    if later_pos < earlier_pos {
        months -= 1;
    }

    months.max(0)
}

/// Round-half-up integer division for non-negative values
fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Format a timestamp as "YYYY-MM-DD HH:MM" (UTC)
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use filedeck::logic::formatting::format_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2025, 10, 26, 20, 58, 21).unwrap();
/// assert_eq!(format_timestamp(ts), "2025-10-26 20:58");
/// ```
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Truncate text to a display width, marking the cut with "…"
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ago(d: Duration) -> String {
        format_distance(now() - d, now())
    }

    #[test]
    fn test_seconds_buckets() {
        assert_eq!(ago(Duration::zero()), "less than 5 seconds ago");
        assert_eq!(ago(Duration::seconds(7)), "less than 10 seconds ago");
        assert_eq!(ago(Duration::seconds(15)), "less than 20 seconds ago");
        assert_eq!(ago(Duration::seconds(30)), "half a minute ago");
        assert_eq!(ago(Duration::seconds(45)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(75)), "1 minute ago");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(ago(Duration::seconds(90)), "2 minutes ago");
        assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
        assert_eq!(ago(Duration::minutes(45)), "about 1 hour ago");
        assert_eq!(ago(Duration::minutes(90)), "about 2 hours ago");
        assert_eq!(ago(Duration::hours(23)), "about 23 hours ago");
    }

    #[test]
    fn test_days_and_months() {
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(2)), "2 days ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
        assert_eq!(ago(Duration::days(31)), "about 1 month ago");
        assert_eq!(ago(Duration::days(50)), "about 2 months ago");
        assert_eq!(ago(Duration::days(100)), "3 months ago");
    }

    #[test]
    fn test_years() {
        let n = now();
        let t = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        assert_eq!(format_distance(t(2023, 6, 1), n), "about 1 year ago");
        assert_eq!(format_distance(t(2023, 1, 1), n), "over 1 year ago");
        assert_eq!(format_distance(t(2022, 8, 1), n), "almost 2 years ago");
        assert_eq!(format_distance(t(2020, 6, 15), n), "about 4 years ago");
    }

    #[test]
    fn test_future_prefix() {
        assert_eq!(format_distance(now() + Duration::days(2), now()), "in 2 days");
        assert_eq!(
            format_distance(now() + Duration::seconds(2), now()),
            "in less than 5 seconds"
        );
    }

    #[test]
    fn test_month_difference_incomplete_month() {
        let a = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 3, 19, 0, 0, 0).unwrap();
        assert_eq!(month_difference(a, b), 1);
        let c = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
        assert_eq!(month_difference(a, c), 2);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Budget.xlsx", 20), "Budget.xlsx");
        assert_eq!(truncate_to_width("Budget.xlsx", 7), "Budget…");
        assert_eq!(truncate_to_width("Budget.xlsx", 0), "");
        assert_eq!(truncate_to_width("Budget.xlsx", 1), "…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide
        assert_eq!(truncate_to_width("文件管理器", 6), "文件…");
    }
}
