use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sessions;
use crate::db::pool::DbPool;
use crate::db::queries::punches_between;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json};
use crate::ui::messages::success;
use crate::utils::date::{now_naive, parse_date_required, today};
use crate::utils::path::expand_tilde;
use chrono::{Days, NaiveTime};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        employee,
        from,
        to,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let target = expand_tilde(file);
    if target.exists() && !*force {
        return Err(AppError::Validation(format!(
            "File '{}' already exists, use --force to overwrite.",
            target.display()
        )));
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
    let punches = punches_between(&pool.conn, *employee, range_from, range_to)?;
    let reconstructed = sessions::reconstruct(&punches, now_naive(), &cfg.policy);

    match format {
        ExportFormat::Csv => csv::write_csv(&target, &reconstructed)?,
        ExportFormat::Json => json::write_json(&target, &reconstructed)?,
    }

    success(format!(
        "Exported {} sessions to '{}'.",
        reconstructed.len(),
        target.display()
    ));

    Ok(())
}
