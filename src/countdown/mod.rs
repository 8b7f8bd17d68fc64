// Auction countdown formatting

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

mod ticker;

pub use ticker::{TICK_PERIOD, Ticker};

/// Label shown once a countdown has ended or is disabled
pub const TERMINAL_LABEL: &str = "종료";

const SECS_PER_DAY: u64 = 86_400;
const SECS_PER_HOUR: u64 = 3_600;
const SECS_PER_MINUTE: u64 = 60;

/// Whole-second decomposition of the time remaining until a target instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Decompose a millisecond count, flooring to whole seconds.
    /// Negative input clamps to zero.
    pub fn from_millis(ms: i64) -> Self {
        let total = (ms.max(0) as u64) / 1000;
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// Time remaining from `now` until `end`, never negative
    pub fn between(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis(end.signed_duration_since(now).num_milliseconds())
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECS_PER_DAY
            + self.hours * SECS_PER_HOUR
            + self.minutes * SECS_PER_MINUTE
            + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}일 {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Format the time remaining until `end` for display.
///
/// Returns [`TERMINAL_LABEL`] when the countdown is disabled, has no end, or
/// has no time left. Otherwise `"{days}일 {hh}:{mm}:{ss}"` with the remaining
/// time floored to whole seconds.
pub fn format_time_left(end: Option<DateTime<Utc>>, now: DateTime<Utc>, disabled: bool) -> String {
    if disabled {
        return TERMINAL_LABEL.to_string();
    }
    let Some(end) = end else {
        return TERMINAL_LABEL.to_string();
    };

    let remaining_ms = end.signed_duration_since(now).num_milliseconds().max(0);
    if remaining_ms == 0 {
        return TERMINAL_LABEL.to_string();
    }
    TimeLeft::from_millis(remaining_ms).to_string()
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_instant(s: &str) -> crate::error::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s.trim())?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_disabled_returns_terminal_label() {
        let end = Some(now() + Duration::days(3));
        assert_eq!(format_time_left(end, now(), true), TERMINAL_LABEL);
        assert_eq!(format_time_left(None, now(), true), TERMINAL_LABEL);
    }

    #[test]
    fn test_missing_end_returns_terminal_label() {
        assert_eq!(format_time_left(None, now(), false), TERMINAL_LABEL);
    }

    #[test]
    fn test_zero_remaining_returns_terminal_label() {
        assert_eq!(format_time_left(Some(now()), now(), false), TERMINAL_LABEL);
    }

    #[test]
    fn test_sub_second_remaining_still_counts() {
        let end = now() + Duration::milliseconds(999);
        assert_eq!(format_time_left(Some(end), now(), false), "0일 00:00:00");
    }

    #[test]
    fn test_past_end_clamps_to_terminal_label() {
        let end = now() - Duration::hours(5);
        assert_eq!(format_time_left(Some(end), now(), false), TERMINAL_LABEL);
        assert_eq!(TimeLeft::between(end, now()), TimeLeft::default());
    }

    #[test]
    fn test_one_day_one_minute_one_second() {
        let end = now() + Duration::milliseconds(86_461_000);
        assert_eq!(format_time_left(Some(end), now(), false), "1일 00:01:01");
    }

    #[test]
    fn test_one_of_each_unit() {
        let end = now() + Duration::milliseconds(90_061_000);
        assert_eq!(format_time_left(Some(end), now(), false), "1일 01:01:01");
    }

    #[test]
    fn test_days_are_not_padded() {
        let end = now() + Duration::days(12) + Duration::seconds(5);
        assert_eq!(format_time_left(Some(end), now(), false), "12일 00:00:05");
    }

    #[test]
    fn test_fractional_seconds_are_floored() {
        let end = now() + Duration::milliseconds(61_999);
        assert_eq!(format_time_left(Some(end), now(), false), "0일 00:01:01");
    }

    #[test]
    fn test_idempotent() {
        let end = Some(now() + Duration::minutes(42));
        let first = format_time_left(end, now(), false);
        let second = format_time_left(end, now(), false);
        assert_eq!(first, second);
        assert_eq!(first, "0일 00:42:00");
    }

    #[test]
    fn test_time_left_decomposition() {
        let left = TimeLeft::from_millis(2 * 86_400_000 + 3 * 3_600_000 + 4 * 60_000 + 5_500);
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(left.total_seconds(), 2 * 86_400 + 3 * 3_600 + 4 * 60 + 5);
        assert!(TimeLeft::from_millis(-1).is_zero());
    }

    #[test]
    fn test_parse_instant() {
        let parsed = parse_instant("2025-03-01T21:00:00+09:00").unwrap();
        assert_eq!(parsed, now());
        assert!(parse_instant("tomorrow").is_err());
    }
}
