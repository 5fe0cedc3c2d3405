use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reminder;
use crate::db::pool::DbPool;
use crate::db::queries::get_employee;
use crate::errors::AppResult;
use crate::ui::messages::push;
use crate::utils::date::now_naive;
use crate::utils::time::parse_optional_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Remind { employee, at } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let emp = get_employee(&pool.conn, *employee)?;

    let now = parse_optional_datetime(at.as_ref())?.unwrap_or_else(now_naive);
    let verdict = reminder::evaluate(&pool.conn, &emp, now, &cfg.policy)?;

    println!("{}", verdict.code.as_str());

    if verdict.should_notify {
        push(
            verdict.title.as_deref().unwrap_or(""),
            verdict.message.as_deref().unwrap_or(""),
        );
    }

    Ok(())
}
