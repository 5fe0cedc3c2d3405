use chrono::NaiveDate;
use serde::Serialize;

/// Theoretical vs. worked seconds for one employee-month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBalance {
    pub year: i32,
    pub month: u32,
    pub theoretical_secs: i64,
    pub worked_secs: i64,
    pub balance_secs: i64,
    /// Days whose punches did not alternate ENTRY/EXIT cleanly. They still
    /// contribute their fully-paired seconds, but the total is suspect.
    pub incomplete_days: Vec<NaiveDate>,
    pub reliable: bool,
}

impl MonthlyBalance {
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            theoretical_secs: 0,
            worked_secs: 0,
            balance_secs: 0,
            incomplete_days: Vec::new(),
            reliable: true,
        }
    }
}
