//! Batch absence sweep: evaluate the reminder for every employee and push a
//! notification where one is due. Read-only except for the audit log; send
//! failures never abort the run.

use crate::core::notify::PushSender;
use crate::core::policy::Policy;
use crate::core::reminder;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::list_employees;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use chrono::NaiveDateTime;

#[derive(Debug, Default, Clone, Copy)]
pub struct SweepStats {
    pub evaluated: usize,
    pub due: usize,
    pub sent: usize,
}

pub fn run(
    pool: &mut DbPool,
    now: NaiveDateTime,
    policy: &Policy,
    sender: &dyn PushSender,
) -> AppResult<SweepStats> {
    let mut stats = SweepStats::default();

    for employee in list_employees(&pool.conn)? {
        // Employees without a schedule never get reminders.
        if employee.schedule_id.is_none() {
            continue;
        }

        stats.evaluated += 1;

        let verdict = reminder::evaluate(&pool.conn, &employee, now, policy)?;
        if !verdict.should_notify {
            continue;
        }
        stats.due += 1;

        let Some(token) = employee.push_token.as_deref() else {
            info(format!("{}: reminder due but no push token", employee.name));
            continue;
        };

        let title = verdict.title.as_deref().unwrap_or("Falta de fichaje");
        let body = verdict.message.as_deref().unwrap_or_default();

        match sender.send(token, title, body) {
            Ok(()) => stats.sent += 1,
            Err(e) => warning(format!("push to {} failed: {e}", employee.name)),
        }
    }

    ttlog(
        &pool.conn,
        "sweep",
        "",
        &format!(
            "evaluated={} due={} sent={} at {}",
            stats.evaluated,
            stats.due,
            stats.sent,
            now.format("%Y-%m-%d %H:%M:%S")
        ),
    )?;

    Ok(stats)
}
