use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::now_naive;
use crate::utils::time::parse_optional_datetime;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Punch {
        employee,
        lat,
        lon,
        nfc,
        at,
    } = &cli.command
    else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    let now = parse_optional_datetime(at.as_ref())?.unwrap_or_else(now_naive);

    let punch = PunchLogic::record(
        &mut pool,
        *employee,
        *lat,
        *lon,
        nfc.as_deref(),
        now,
        &cfg.policy,
    )?;

    success(format!(
        "Recorded {} for employee {} at {}.",
        punch.kind.to_db_str(),
        employee,
        punch.at_str()
    ));

    Ok(())
}
