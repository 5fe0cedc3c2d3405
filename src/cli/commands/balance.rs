use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::balance::monthly_balance;
use crate::db::pool::DbPool;
use crate::db::queries::get_employee;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, warning};
use crate::utils::date::today;
use crate::utils::formatting::{format_secs, secs_to_hours};
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Balance {
        employee,
        month,
        year,
    } = cmd
    else {
        return Ok(());
    };

    let now = today();
    let month = month.unwrap_or(now.month());
    let year = year.unwrap_or(now.year());
    if !(1..=12).contains(&month) {
        return Err(AppError::Validation(format!("Invalid month: {month}")));
    }

    let pool = DbPool::new(&cfg.database)?;
    let emp = get_employee(&pool.conn, *employee)?;

    let balance = monthly_balance(&pool.conn, &emp, month, year)?;

    header(format!("{} {:04}-{:02}", emp.name, year, month));
    println!(
        "Theoretical: {:>10}  ({:.2} h)",
        format_secs(balance.theoretical_secs),
        secs_to_hours(balance.theoretical_secs)
    );
    println!(
        "Worked:      {:>10}  ({:.2} h)",
        format_secs(balance.worked_secs),
        secs_to_hours(balance.worked_secs)
    );
    println!(
        "Balance:     {:>10}  ({:.2} h)",
        format_secs(balance.balance_secs),
        secs_to_hours(balance.balance_secs)
    );

    if !balance.reliable {
        let days: Vec<String> = balance
            .incomplete_days
            .iter()
            .map(|d| d.to_string())
            .collect();
        warning(format!(
            "Balance is unreliable, incomplete days: {}",
            days.join(", ")
        ));
    }

    Ok(())
}
