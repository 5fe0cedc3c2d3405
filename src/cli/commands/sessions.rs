use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions;
use crate::db::pool::DbPool;
use crate::db::queries::{punches_between, punches_between_all};
use crate::errors::{AppError, AppResult};
use crate::models::session::WorkSession;
use crate::utils::date::{now_naive, parse_date_required, today};
use crate::utils::formatting::format_secs;
use crate::utils::time::fmt_datetime;
use chrono::{Days, NaiveTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Sessions {
        employee,
        all,
        from,
        to,
    } = cmd
    else {
        return Ok(());
    };

    if employee.is_none() && !*all {
        return Err(AppError::Validation(
            "Give an employee id or use --all.".into(),
        ));
    }

    let from_day = match from {
        Some(s) => parse_date_required(s)?,
        None => today().checked_sub_days(Days::new(30)).unwrap_or(today()),
    };
    let to_day = match to {
        Some(s) => parse_date_required(s)?,
        None => today(),
    };

    let range_from = from_day.and_time(NaiveTime::MIN);
    let range_to = to_day
        .and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| to_day.and_time(NaiveTime::MIN));

    let pool = DbPool::new(&cfg.database)?;

    let punches = match employee {
        Some(id) => punches_between(&pool.conn, *id, range_from, range_to)?,
        None => punches_between_all(&pool.conn, range_from, range_to)?,
    };

    let reconstructed = sessions::reconstruct(&punches, now_naive(), &cfg.policy);
    if reconstructed.is_empty() {
        println!("No sessions between {} and {}.", from_day, to_day);
        return Ok(());
    }

    print_table(&reconstructed);
    Ok(())
}

fn print_table(sessions: &[WorkSession]) {
    println!(
        "{:<5} {:<13} {:<20} {:<20} {}",
        "emp", "status", "entry", "exit", "duration"
    );

    for s in sessions {
        let entry = s.entry.as_ref().map(|p| fmt_datetime(p.at));
        let exit = s.exit.as_ref().map(|p| fmt_datetime(p.at));
        let duration = if s.status.is_anomaly() {
            "-".to_string()
        } else {
            format_secs(s.duration_secs)
        };

        println!(
            "{:<5} {:<13} {:<20} {:<20} {}",
            s.employee_id,
            s.status.as_str(),
            entry.unwrap_or_else(|| "-".into()),
            exit.unwrap_or_else(|| "-".into()),
            duration
        );
    }
}
