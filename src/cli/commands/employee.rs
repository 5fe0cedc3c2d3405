use crate::cli::parser::{Commands, EmployeeAction};
use crate::config::Config;
use crate::core::nfc;
use crate::db::pool::DbPool;
use crate::db::queries::{get_employee, insert_employee, list_employees, update_employee};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Employee { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        EmployeeAction::Add {
            name,
            company,
            schedule,
            nfc: tag,
            token,
        } => {
            let employee = Employee {
                id: 0,
                name: name.clone(),
                company_id: *company,
                schedule_id: *schedule,
                // Registered tags are stored normalized to avoid duplicates
                // that differ only in formatting.
                nfc_tag: tag.as_deref().map(nfc::normalize).filter(|t| !t.is_empty()),
                push_token: token.clone(),
            };
            let id = insert_employee(&pool.conn, &employee)?;
            success(format!("Employee '{}' created with id {}.", name, id));
        }

        EmployeeAction::Set {
            id,
            schedule,
            nfc: tag,
            token,
        } => {
            let mut employee = get_employee(&pool.conn, *id)?;

            if let Some(s) = schedule {
                employee.schedule_id = Some(*s);
            }
            if let Some(t) = tag {
                let normalized = nfc::normalize(t);
                employee.nfc_tag = if normalized.is_empty() {
                    None
                } else {
                    Some(normalized)
                };
            }
            if let Some(t) = token {
                employee.push_token = Some(t.clone());
            }

            update_employee(&pool.conn, &employee)?;
            success(format!("Employee {} updated.", id));
        }

        EmployeeAction::List => {
            for e in list_employees(&pool.conn)? {
                let sched = e
                    .schedule_id
                    .map(|s| format!("schedule {}", s))
                    .unwrap_or_else(|| "no schedule".to_string());
                let tagged = if e.nfc_tag.is_some() { "nfc" } else { "-" };
                let token = if e.push_token.is_some() { "push" } else { "-" };
                println!(
                    "{:>4}  {:<24} company {}  {:<12} {:<4} {}",
                    e.id, e.name, e.company_id, sched, tagged, token
                );
            }
        }
    }

    Ok(())
}
