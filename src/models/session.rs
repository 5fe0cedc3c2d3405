use super::punch::Punch;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Classification of a reconstructed session. Derived on demand from the
/// punch log, never persisted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum SessionStatus {
    /// Entry and exit matched, duration within limits.
    Closed,
    /// Open entry still inside the zombie cutoff.
    Active,
    /// Closed but suspiciously long.
    WarningLong,
    /// Entry without exit (superseded by another entry, or stale).
    ErrorZombie,
    /// Exit without any matching entry.
    ErrorOrphan,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Closed => "closed",
            SessionStatus::Active => "active",
            SessionStatus::WarningLong => "warning-long",
            SessionStatus::ErrorZombie => "error-zombie",
            SessionStatus::ErrorOrphan => "error-orphan",
        }
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(self, SessionStatus::ErrorZombie | SessionStatus::ErrorOrphan)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkSession {
    pub employee_id: i64,
    pub entry: Option<Punch>,
    pub exit: Option<Punch>,
    /// Closed sessions: exit − entry. Active sessions: now − entry.
    /// Zombie/orphan sessions: 0 (no meaningful span).
    pub duration_secs: i64,
    pub status: SessionStatus,
}

impl WorkSession {
    /// Timestamp used for display ordering: the entry's, or the exit's for
    /// orphan sessions.
    pub fn ref_time(&self) -> NaiveDateTime {
        match (&self.entry, &self.exit) {
            (Some(e), _) => e.at,
            (None, Some(x)) => x.at,
            // unreachable by construction, but total
            (None, None) => NaiveDateTime::default(),
        }
    }
}
