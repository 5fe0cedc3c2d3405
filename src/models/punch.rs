use super::punch_kind::PunchKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Immutable, append-only clock event. The punch log is the sole source of
/// truth for presence state: there is no stored "currently clocked in" flag,
/// state is always derived by scanning the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Punch {
    pub id: i64,
    pub employee_id: i64,   // ⇔ punch.employee_id
    pub at: NaiveDateTime,  // ⇔ punch.at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub kind: PunchKind,    // ⇔ punch.kind ('ENTRY' | 'EXIT')
    pub lat: f64,
    pub lon: f64,
}

impl Punch {
    /// Constructor for punches about to be inserted (id assigned by SQLite).
    pub fn new(employee_id: i64, at: NaiveDateTime, kind: PunchKind, lat: f64, lon: f64) -> Self {
        Self {
            id: 0,
            employee_id,
            at,
            kind,
            lat,
            lon,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn at_str(&self) -> String {
        self.at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
