use chrono::Datelike;
use fichador::utils::date::{all_days_of_month, month_bounds, parse_weekday, weekday_index};

#[test]
fn month_walk_covers_every_day() {
    let days = all_days_of_month(2026, 6);
    assert_eq!(days.len(), 30);
    assert_eq!(days.first().map(ToString::to_string).as_deref(), Some("2026-06-01"));
    assert_eq!(days.last().map(ToString::to_string).as_deref(), Some("2026-06-30"));
}

#[test]
fn leap_february_has_twenty_nine_days() {
    assert_eq!(all_days_of_month(2028, 2).len(), 29);
    assert_eq!(all_days_of_month(2026, 2).len(), 28);
}

#[test]
fn month_walk_is_total_at_the_calendar_edge() {
    // December of chrono's last representable year must not panic.
    let days = all_days_of_month(chrono::NaiveDate::MAX.year(), 12);
    assert!(!days.is_empty());
    assert!(days.len() <= 31);
}

#[test]
fn month_bounds_span_first_to_last_instant() {
    let (from, to) = month_bounds(2026, 6).unwrap();
    assert_eq!(from.to_string(), "2026-06-01 00:00:00");
    assert_eq!(to.to_string(), "2026-06-30 23:59:59");
}

#[test]
fn month_bounds_reject_invalid_months() {
    assert!(month_bounds(2026, 13).is_err());
    assert!(month_bounds(2026, 0).is_err());
}

#[test]
fn weekdays_parse_by_index_and_name() {
    assert_eq!(parse_weekday("0").unwrap(), 0);
    assert_eq!(parse_weekday("mon").unwrap(), 0);
    assert_eq!(parse_weekday("Sunday").unwrap(), 6);
    assert!(parse_weekday("7").is_err());
    assert!(parse_weekday("noday").is_err());
}

#[test]
fn weekday_index_starts_on_monday() {
    // 2026-06-01 is a Monday.
    assert_eq!(weekday_index("2026-06-01".parse().unwrap()), 0);
    assert_eq!(weekday_index("2026-06-07".parse().unwrap()), 6);
}
