//! Session reconstruction: turn a raw, possibly malformed punch log into
//! classified work sessions. Never fails on bad data: double entries,
//! double exits and missing halves all degrade to tagged anomaly sessions.

use crate::core::policy::Policy;
use crate::models::punch::Punch;
use crate::models::session::{SessionStatus, WorkSession};
use chrono::NaiveDateTime;
use std::collections::HashMap;

fn closed_session(entry: Punch, exit: Punch, policy: &Policy) -> WorkSession {
    let duration = exit.at - entry.at;
    let status = if duration > policy.long_shift() {
        SessionStatus::WarningLong
    } else {
        SessionStatus::Closed
    };

    WorkSession {
        employee_id: entry.employee_id,
        duration_secs: duration.num_seconds(),
        entry: Some(entry),
        exit: Some(exit),
        status,
    }
}

fn zombie_session(entry: Punch) -> WorkSession {
    WorkSession {
        employee_id: entry.employee_id,
        duration_secs: 0,
        entry: Some(entry),
        exit: None,
        status: SessionStatus::ErrorZombie,
    }
}

fn orphan_session(exit: Punch) -> WorkSession {
    WorkSession {
        employee_id: exit.employee_id,
        duration_secs: 0,
        entry: None,
        exit: Some(exit),
        status: SessionStatus::ErrorOrphan,
    }
}

/// Reconstruct sessions from punches of one or more employees.
///
/// One pending-entry slot is kept per employee id. Output is sorted most
/// recent first by the session reference timestamp (the entry's, or the
/// exit's for orphans).
pub fn reconstruct(punches: &[Punch], now: NaiveDateTime, policy: &Policy) -> Vec<WorkSession> {
    // Classification depends on the order, and callers may hand punches
    // unsorted.
    let mut sorted = punches.to_vec();
    sorted.sort_by_key(|p| (p.at, p.id));

    let mut sessions: Vec<WorkSession> = Vec::new();
    let mut pending: HashMap<i64, Punch> = HashMap::new();

    for punch in sorted {
        let emp = punch.employee_id;

        if punch.kind.is_entry() {
            // A second ENTRY supersedes the open one: the previous shift
            // lost its exit.
            if let Some(prev) = pending.insert(emp, punch) {
                sessions.push(zombie_session(prev));
            }
        } else if let Some(entry) = pending.remove(&emp) {
            sessions.push(closed_session(entry, punch, policy));
        } else {
            sessions.push(orphan_session(punch));
        }
    }

    // Still-open entries: in progress, or stale beyond the zombie cutoff.
    for (_, entry) in pending {
        let open_for = now - entry.at;

        if open_for < policy.zombie_cutoff() {
            sessions.push(WorkSession {
                employee_id: entry.employee_id,
                duration_secs: open_for.num_seconds().max(0),
                entry: Some(entry),
                exit: None,
                status: SessionStatus::Active,
            });
        } else {
            sessions.push(zombie_session(entry));
        }
    }

    sessions.sort_by_key(|s| std::cmp::Reverse(s.ref_time()));
    sessions
}
