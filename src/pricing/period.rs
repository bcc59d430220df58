//! Period calculation - derive the billing period from a start/end pair

use crate::pricing::types::{
    PeriodIssue, RentalPeriod, HOURLY_RENTAL_MAX_HOURS, MS_PER_DAY, MS_PER_HOUR,
};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use tracing::debug;

/// Naive layouts accepted after RFC 3339 has been tried
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Calculate the billing period between two wall-clock timestamps
/// Pure function - no side effects
pub fn calculate_period(start: NaiveDateTime, end: NaiveDateTime) -> RentalPeriod {
    let elapsed_ms = (end - start).num_milliseconds();
    classify(start.date(), end.date(), elapsed_ms)
}

/// Calculate the billing period between two instants
///
/// Elapsed time comes from the instants, the calendar comparison from each
/// side's own wall-clock date.
pub fn calculate_period_between(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> RentalPeriod {
    let elapsed_ms = (end - start).num_milliseconds();
    classify(
        start.naive_local().date(),
        end.naive_local().date(),
        elapsed_ms,
    )
}

/// Same-day booking given as one date plus separate clock times
pub fn calculate_same_day_period(
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> RentalPeriod {
    calculate_period(date.and_time(start_time), date.and_time(end_time))
}

/// Calculate the billing period from raw form/record values
///
/// Absent or blank values yield the missing-input sentinel; anything that
/// does not parse yields the invalid-range sentinel.
pub fn calculate_period_from_input(start: Option<&str>, end: Option<&str>) -> RentalPeriod {
    let (start, end) = match (non_blank(start), non_blank(end)) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            debug!("Rental dates missing (start: {:?}, end: {:?})", start, end);
            return RentalPeriod::invalid(PeriodIssue::MissingInput);
        }
    };

    match (parse_timestamp(start), parse_timestamp(end)) {
        (Some(start), Some(end)) => calculate_period_between(start, end),
        _ => {
            debug!("Unparseable rental dates (start: {}, end: {})", start, end);
            RentalPeriod::invalid(PeriodIssue::InvalidRange)
        }
    }
}

/// Parse an ISO-8601 style timestamp
///
/// Values without an offset are read as wall-clock time; date-only values
/// mean midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed);
    }

    let wall_clock = FixedOffset::east_opt(0)?;

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;

    wall_clock.from_local_datetime(&naive).single()
}

fn classify(start_date: NaiveDate, end_date: NaiveDate, elapsed_ms: i64) -> RentalPeriod {
    if start_date == end_date {
        let hours = ceil_div(elapsed_ms, MS_PER_HOUR);
        if hours <= 0 {
            return RentalPeriod::invalid(PeriodIssue::InvalidRange);
        }

        let hours = to_count(hours);
        if hours > HOURLY_RENTAL_MAX_HOURS {
            RentalPeriod::full_day(hours)
        } else {
            RentalPeriod::hourly(hours)
        }
    } else {
        // Reversed multi-day ranges land here too
        let days = ceil_div(elapsed_ms, MS_PER_DAY);
        if days <= 0 {
            return RentalPeriod::invalid(PeriodIssue::InvalidRange);
        }

        RentalPeriod::multi_day(to_count(days))
    }
}

/// Ceiling division for a positive divisor
fn ceil_div(value: i64, divisor: i64) -> i64 {
    let quotient = value.div_euclid(divisor);
    if value.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

fn to_count(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").unwrap()
    }

    #[test]
    fn test_two_hour_same_day_is_hourly() {
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-01T11:00"));

        assert_eq!(period.days, 0);
        assert_eq!(period.hours, 2);
        assert!(period.is_hourly_rental);
        assert!(period.display_text.contains('2'));
        assert!(period.display_text.contains("hourly"));
    }

    #[test]
    fn test_partial_hour_rounds_up() {
        // 61 minutes counts as 2 hours
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-01T10:01"));

        assert_eq!(period.hours, 2);
        assert!(period.is_hourly_rental);
    }

    #[test]
    fn test_exactly_three_hours_stays_hourly() {
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-01T12:00"));

        assert_eq!(period, RentalPeriod::hourly(3));
    }

    #[test]
    fn test_over_threshold_becomes_full_day() {
        // 4.5h rounds up to 5
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-01T13:30"));

        assert_eq!(period.days, 1);
        assert_eq!(period.hours, 5);
        assert!(!period.is_hourly_rental);
        assert!(period.display_text.contains("5 hours"));
        assert!(period.display_text.contains("1 day"));
    }

    #[test]
    fn test_just_over_three_hours_is_full_day() {
        let start = at("2024-01-01T09:00");
        let end = start + chrono::Duration::milliseconds(3 * MS_PER_HOUR + 1);

        let period = calculate_period(start, end);

        assert_eq!(period, RentalPeriod::full_day(4));
    }

    #[test]
    fn test_same_instant_is_invalid() {
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-01T09:00"));

        assert!(period.is_zero());
        assert_eq!(period.issue, Some(PeriodIssue::InvalidRange));
    }

    #[test]
    fn test_same_day_reversed_is_invalid() {
        let period = calculate_period(at("2024-01-01T11:00"), at("2024-01-01T09:00"));

        assert!(period.is_zero());
        assert!(!period.is_hourly_rental);
        assert_eq!(period.display_text, "Invalid rental time range");
    }

    #[test]
    fn test_multi_day_whole_days() {
        let period = calculate_period_from_input(Some("2024-01-01"), Some("2024-01-03"));

        assert_eq!(period.days, 2);
        assert_eq!(period.hours, 0);
        assert!(!period.is_hourly_rental);
        assert_eq!(period.display_text, "2 days");
    }

    #[test]
    fn test_multi_day_partial_day_rounds_up() {
        let period = calculate_period(at("2024-01-01T09:00"), at("2024-01-03T09:01"));

        assert_eq!(period.days, 3);
    }

    #[test]
    fn test_overnight_short_span_is_one_day() {
        // Different calendar days, so the hourly branch never applies
        let period = calculate_period(at("2024-01-01T23:00"), at("2024-01-02T01:00"));

        assert_eq!(period, RentalPeriod::multi_day(1));
        assert_eq!(period.display_text, "1 day");
    }

    #[test]
    fn test_multi_day_reversed_is_invalid() {
        let period = calculate_period_from_input(Some("2024-01-05"), Some("2024-01-01"));

        assert!(period.is_zero());
        assert_eq!(period.issue, Some(PeriodIssue::InvalidRange));
    }

    #[test]
    fn test_missing_start() {
        let period = calculate_period_from_input(Some(""), Some("2024-01-01T10:00"));

        assert!(period.is_zero());
        assert_eq!(period.issue, Some(PeriodIssue::MissingInput));
        assert_eq!(period.display_text, "Missing rental dates");
    }

    #[test]
    fn test_missing_end() {
        let period = calculate_period_from_input(Some("2024-01-01T10:00"), None);

        assert_eq!(period.issue, Some(PeriodIssue::MissingInput));
    }

    #[test]
    fn test_unparseable_is_invalid_range() {
        let period = calculate_period_from_input(Some("yesterday"), Some("2024-01-01T10:00"));

        assert!(period.is_zero());
        assert_eq!(period.issue, Some(PeriodIssue::InvalidRange));
    }

    #[test]
    fn test_same_day_clock_times() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let period = calculate_same_day_period(
            date,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
        );

        assert_eq!(period, RentalPeriod::hourly(2));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-01-01T09:00:00+07:00").is_some());
        assert!(parse_timestamp("2024-01-01T09:00:00.250Z").is_some());
        assert!(parse_timestamp("2024-01-01T09:00:00").is_some());
        assert!(parse_timestamp("2024-01-01T09:00").is_some());
        assert!(parse_timestamp("2024-01-01 09:00").is_some());
        assert!(parse_timestamp(" 2024-01-01 ").is_some());
        assert!(parse_timestamp("01/01/2024").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_offset_uses_local_calendar_date() {
        // Calendar dates come from each value's own offset
        let period = calculate_period_from_input(
            Some("2024-01-01T23:00:00Z"),
            Some("2024-01-02T01:00:00Z"),
        );
        assert_eq!(period, RentalPeriod::multi_day(1));

        let period = calculate_period_from_input(
            Some("2024-01-02T06:00:00+07:00"),
            Some("2024-01-02T08:00:00+07:00"),
        );
        assert_eq!(period, RentalPeriod::hourly(2));
    }

    #[test]
    fn test_idempotent() {
        let first = calculate_period_from_input(Some("2024-01-01T09:00"), Some("2024-01-04T10:00"));
        let second = calculate_period_from_input(Some("2024-01-01T09:00"), Some("2024-01-04T10:00"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_in_end_time() {
        let start = at("2024-01-01T06:00");
        let mut previous = calculate_period(start, start + chrono::Duration::minutes(15));

        // Sweep past the same-day cutover and into the multi-day branch
        for step in 2..=400 {
            let end = start + chrono::Duration::minutes(15 * step);
            let current = calculate_period(start, end);

            assert!(current.days >= previous.days, "days shrank at step {}", step);
            if end.date() == start.date() {
                assert!(current.hours >= previous.hours, "hours shrank at step {}", step);
            }
            previous = current;
        }
    }
}
