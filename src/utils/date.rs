use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now_naive() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_date_required(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Weekday index with Monday = 0 .. Sunday = 6.
pub fn weekday_index(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_monday()
}

/// Parse a weekday given as 0..6 or an English short/long name.
pub fn parse_weekday(s: &str) -> AppResult<u32> {
    if let Ok(n) = s.parse::<u32>() {
        if n <= 6 {
            return Ok(n);
        }
        return Err(AppError::InvalidWeekday(s.to_string()));
    }

    let idx = match s.to_lowercase().as_str() {
        "mon" | "monday" => 0,
        "tue" | "tuesday" => 1,
        "wed" | "wednesday" => 2,
        "thu" | "thursday" => 3,
        "fri" | "friday" => 4,
        "sat" | "saturday" => 5,
        "sun" | "sunday" => 6,
        _ => return Err(AppError::InvalidWeekday(s.to_string())),
    };
    Ok(idx)
}

pub fn weekday_name(idx: u32) -> &'static str {
    match idx {
        0 => "monday",
        1 => "tuesday",
        2 => "wednesday",
        3 => "thursday",
        4 => "friday",
        5 => "saturday",
        _ => "sunday",
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        // Runs out at the calendar's last representable day.
        let Some(next) = d.succ_opt() else { break };
        d = next;
    }

    out
}

/// First and last instant of a month, for punch range queries.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let days = all_days_of_month(year, month);
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return Err(AppError::InvalidDate(format!("{year}-{month:02}")));
    };

    let from = first.and_time(NaiveTime::MIN);
    let to = last.and_hms_opt(23, 59, 59).unwrap();
    Ok((from, to))
}
