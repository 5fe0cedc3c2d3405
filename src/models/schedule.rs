use crate::utils::time::slot_duration_secs;
use chrono::NaiveTime;
use serde::Serialize;

/// Named weekly template owned by a company.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
}

/// Entry/exit times for one weekday of a schedule. More than one slot per
/// weekday is tolerated; consumers sum them.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlot {
    pub schedule_id: i64,
    pub weekday: u32, // 0 = Monday .. 6 = Sunday
    pub entry: NaiveTime,
    pub exit: NaiveTime,
}

impl TimeSlot {
    pub fn crosses_midnight(&self) -> bool {
        self.exit < self.entry
    }

    pub fn duration_secs(&self) -> i64 {
        slot_duration_secs(self.entry, self.exit)
    }
}
