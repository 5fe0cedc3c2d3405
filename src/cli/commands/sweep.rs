use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::ConsoleSender;
use crate::core::sweep;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::now_naive;
use crate::utils::time::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Sweep { at } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    let now = parse_optional_datetime(at.as_ref())?.unwrap_or_else(now_naive);
    let stats = sweep::run(&mut pool, now, &cfg.policy, &ConsoleSender)?;

    success(format!(
        "Sweep done: {} evaluated, {} due, {} sent.",
        stats.evaluated, stats.due, stats.sent
    ));

    Ok(())
}
