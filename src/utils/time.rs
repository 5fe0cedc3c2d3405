//! Time utilities: parsing HH:MM, timestamps, slot durations.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_required(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse a full timestamp, with or without seconds.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let ts = parse_datetime(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(ts))
    } else {
        Ok(None)
    }
}

/// Duration of a schedule slot in seconds.
/// An exit earlier than the entry means the slot crosses midnight, so a
/// day is added.
pub fn slot_duration_secs(entry: NaiveTime, exit: NaiveTime) -> i64 {
    let delta = (exit - entry).num_seconds();
    if delta < 0 { delta + 86_400 } else { delta }
}

pub fn fmt_datetime(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
