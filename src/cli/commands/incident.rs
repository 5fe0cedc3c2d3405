use crate::cli::parser::{Commands, IncidentAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_incident, list_incidents, resolve_incident};
use crate::errors::{AppError, AppResult};
use crate::models::incident::{Incident, IncidentKind, IncidentStatus};
use crate::ui::messages::success;
use crate::utils::date::parse_date_required;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Incident { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        IncidentAction::Add {
            employee,
            kind,
            from,
            to,
            note,
        } => {
            let kind = IncidentKind::from_db_str(kind)
                .ok_or_else(|| AppError::Validation(format!("Invalid incident kind: {kind}")))?;

            let start_date = parse_date_required(from)?;
            let end_date = parse_date_required(to)?;
            if end_date < start_date {
                return Err(AppError::Validation(
                    "Incident end date precedes start date.".into(),
                ));
            }

            let incident = Incident {
                id: 0,
                employee_id: *employee,
                kind,
                start_date,
                end_date,
                status: IncidentStatus::Pendiente,
                note: note.clone(),
                admin_note: None,
                created_at: chrono::Local::now().to_rfc3339(),
            };
            let id = insert_incident(&pool.conn, &incident)?;
            ttlog(
                &pool.conn,
                "incident",
                &id.to_string(),
                &format!("{} {} → {}", kind.to_db_str(), from, to),
            )?;
            success(format!("Incident {} filed (PENDIENTE).", id));
        }

        IncidentAction::Resolve {
            id,
            approve,
            reject,
            note,
        } => {
            let status = match (*approve, *reject) {
                (true, _) => IncidentStatus::Aprobada,
                (_, true) => IncidentStatus::Rechazada,
                _ => {
                    return Err(AppError::Validation(
                        "Specify --approve or --reject.".into(),
                    ));
                }
            };

            resolve_incident(&pool.conn, *id, status, note.as_deref())?;
            ttlog(
                &pool.conn,
                "incident",
                &id.to_string(),
                &format!("resolved {}", status.to_db_str()),
            )?;
            success(format!("Incident {} marked {}.", id, status.to_db_str()));
        }

        IncidentAction::List { employee } => {
            for inc in list_incidents(&pool.conn, *employee)? {
                println!(
                    "{:>4}  emp {:<4} {:<16} {} → {}  {:<10} {}",
                    inc.id,
                    inc.employee_id,
                    inc.kind.to_db_str(),
                    inc.start_date,
                    inc.end_date,
                    inc.status.to_db_str(),
                    inc.note.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
