//! # Display Formatting
//!
//! Currency and timestamp formatting shared by the feed, messaging, and
//! simulator surfaces. All helpers take explicit "now" values in ms since
//! epoch so rendering stays deterministic under test.

use chrono::{DateTime, Datelike, Utc};

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;

/// Format a currency amount in en-US USD style: `$1,234.56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    if negative {
        format!("-${grouped}.{cents}")
    } else {
        format!("${grouped}.{cents}")
    }
}

/// Format a post timestamp: coarse relative text under 24 hours, a short
/// month-day date beyond that.
#[must_use]
pub fn post_timestamp(now_ms: u64, ts_ms: u64) -> String {
    let elapsed = now_ms.saturating_sub(ts_ms);
    if elapsed < MINUTE_MS {
        return "Just now".to_string();
    }
    if elapsed < HOUR_MS {
        let minutes = elapsed / MINUTE_MS;
        return plural(minutes, "minute");
    }
    if elapsed < DAY_MS {
        let hours = elapsed / HOUR_MS;
        return plural(hours, "hour");
    }
    short_date(ts_ms)
}

/// Format a message timestamp: clock time today, "Yesterday" yesterday, a
/// short month-day date otherwise.
#[must_use]
pub fn message_timestamp(now_ms: u64, ts_ms: u64) -> String {
    let (Some(now), Some(ts)) = (to_utc(now_ms), to_utc(ts_ms)) else {
        return String::new();
    };
    let today = now.date_naive();
    let day = ts.date_naive();
    if day == today {
        return ts.format("%-l:%M %p").to_string().trim_start().to_string();
    }
    if Some(day) == today.pred_opt() {
        return "Yesterday".to_string();
    }
    short_date(ts_ms)
}

/// Short month-day date: `Mar 4`.
#[must_use]
pub fn short_date(ts_ms: u64) -> String {
    match to_utc(ts_ms) {
        Some(ts) => format!("{} {}", month_abbrev(ts.month()), ts.day()),
        None => String::new(),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn to_utc(ts_ms: u64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(i64::try_from(ts_ms).ok()?)
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // 2024-03-04 15:30:00 UTC
    const NOW_MS: u64 = 1_709_566_200_000;

    #[test]
    fn test_currency_basic() {
        assert_eq!(format_currency(49.99), "$49.99");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1500.0), "$1,500.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-450.0), "-$450.00");
    }

    #[test]
    fn test_post_timestamp_relative() {
        assert_eq!(post_timestamp(NOW_MS, NOW_MS), "Just now");
        assert_eq!(post_timestamp(NOW_MS, NOW_MS - 30 * 1000), "Just now");
        assert_eq!(post_timestamp(NOW_MS, NOW_MS - MINUTE_MS), "1 minute ago");
        assert_eq!(
            post_timestamp(NOW_MS, NOW_MS - 5 * MINUTE_MS),
            "5 minutes ago"
        );
        assert_eq!(post_timestamp(NOW_MS, NOW_MS - HOUR_MS), "1 hour ago");
        assert_eq!(post_timestamp(NOW_MS, NOW_MS - 10 * HOUR_MS), "10 hours ago");
    }

    #[test]
    fn test_post_timestamp_old_posts_use_date() {
        // 25 hours back lands on March 3rd
        assert_eq!(post_timestamp(NOW_MS, NOW_MS - 25 * HOUR_MS), "Mar 3");
    }

    #[test]
    fn test_post_timestamp_future_clamps() {
        assert_eq!(post_timestamp(NOW_MS, NOW_MS + HOUR_MS), "Just now");
    }

    #[test]
    fn test_message_timestamp_today() {
        // 15:30 UTC minus two hours is 1:30 PM the same day
        assert_eq!(
            message_timestamp(NOW_MS, NOW_MS - 2 * HOUR_MS),
            "1:30 PM"
        );
    }

    #[test]
    fn test_message_timestamp_yesterday() {
        assert_eq!(message_timestamp(NOW_MS, NOW_MS - DAY_MS), "Yesterday");
    }

    #[test]
    fn test_message_timestamp_older() {
        assert_eq!(message_timestamp(NOW_MS, NOW_MS - 3 * DAY_MS), "Mar 1");
        assert_eq!(message_timestamp(NOW_MS, NOW_MS - 5 * DAY_MS), "Feb 28");
    }

    proptest! {
        #[test]
        fn prop_currency_round_trips(amount in 0.0f64..1_000_000_000.0) {
            let formatted = format_currency(amount);
            prop_assert!(formatted.starts_with('$'));
            let bare: String = formatted
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            let parsed: f64 = bare.parse().unwrap();
            // Within half a cent of the input
            prop_assert!((parsed - amount).abs() < 0.005 + f64::EPSILON * amount);
        }

        #[test]
        fn prop_currency_groups_of_three(amount in 0.0f64..1_000_000_000.0) {
            let formatted = format_currency(amount);
            let whole = &formatted[1..formatted.len() - 3];
            for group in whole.split(',').skip(1) {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
