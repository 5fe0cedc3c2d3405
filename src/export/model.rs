use crate::models::session::WorkSession;
use serde::Serialize;

/// Flat session row shared by the CSV and JSON writers.
#[derive(Debug, Serialize)]
pub struct SessionRow {
    pub employee_id: i64,
    pub status: &'static str,
    pub entry: Option<String>,
    pub exit: Option<String>,
    pub duration_secs: i64,
}

impl From<&WorkSession> for SessionRow {
    fn from(s: &WorkSession) -> Self {
        Self {
            employee_id: s.employee_id,
            status: s.status.as_str(),
            entry: s.entry.as_ref().map(|p| p.at_str()),
            exit: s.exit.as_ref().map(|p| p.at_str()),
            duration_secs: s.duration_secs,
        }
    }
}
