//! Punch recording: geofence + identity gates, ENTRY/EXIT inference from the
//! last persisted punch, debounce, and forgotten-shift handling.

use crate::core::policy::Policy;
use crate::core::{geofence, nfc};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{get_company, get_employee, insert_incident, insert_punch, last_punch};
use crate::errors::{AppError, AppResult};
use crate::models::incident::{Incident, IncidentKind, IncidentStatus};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use chrono::NaiveDateTime;

/// Outcome of the punch type state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum PunchDecision {
    /// No open shift: record an ENTRY.
    Entry,
    /// Open shift within normal bounds: record an EXIT.
    Exit,
    /// Open shift older than the zombie cutoff: file an OLVIDO incident for
    /// the stale entry and start a fresh shift with a new ENTRY.
    EntryAfterForgotten { stale_entry: Punch },
}

/// Decide the type of a new punch from the employee's last persisted one.
pub fn decide_kind(
    last: Option<&Punch>,
    now: NaiveDateTime,
    policy: &Policy,
) -> AppResult<PunchDecision> {
    let Some(prev) = last else {
        return Ok(PunchDecision::Entry);
    };

    let elapsed = now - prev.at;

    // Debounce applies to any punch, whatever its type.
    if elapsed < policy.debounce() {
        return Err(AppError::TooSoon);
    }

    if prev.kind.is_exit() {
        return Ok(PunchDecision::Entry);
    }

    if elapsed > policy.zombie_cutoff() {
        return Ok(PunchDecision::EntryAfterForgotten {
            stale_entry: prev.clone(),
        });
    }

    Ok(PunchDecision::Exit)
}

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

impl PunchLogic {
    /// Record a gated clock event for an employee.
    ///
    /// The new punch and any auto-generated OLVIDO incident are committed in
    /// one transaction. Gate failures write nothing.
    pub fn record(
        pool: &mut DbPool,
        employee_id: i64,
        lat: f64,
        lon: f64,
        scanned_tag: Option<&str>,
        now: NaiveDateTime,
        policy: &Policy,
    ) -> AppResult<Punch> {
        let employee = get_employee(&pool.conn, employee_id)?;
        let company = get_company(&pool.conn, employee.company_id)?;

        // Gates: reject before any state change.
        geofence::validate(&company, lat, lon, policy)?;
        nfc::validate_identity(&employee, &company, scanned_tag)?;

        let last = last_punch(&pool.conn, employee_id)?;
        let decision = decide_kind(last.as_ref(), now, policy)?;

        let kind = match decision {
            PunchDecision::Entry | PunchDecision::EntryAfterForgotten { .. } => PunchKind::Entry,
            PunchDecision::Exit => PunchKind::Exit,
        };

        let mut punch = Punch::new(employee_id, now, kind, lat, lon);

        let tx = pool.conn.transaction()?;

        if let PunchDecision::EntryAfterForgotten { stale_entry } = &decision {
            let open_hours = (now - stale_entry.at).num_hours();
            let incident = Incident {
                id: 0,
                employee_id,
                kind: IncidentKind::Olvido,
                start_date: stale_entry.date(),
                end_date: stale_entry.date(),
                status: IncidentStatus::Pendiente,
                note: Some(format!(
                    "Autogenerada: se detectó un turno abierto de {open_hours} horas."
                )),
                admin_note: Some("Detectado por el sistema al fichar de nuevo.".to_string()),
                created_at: chrono::Local::now().to_rfc3339(),
            };
            insert_incident(&tx, &incident)?;
        }

        punch.id = insert_punch(&tx, &punch)?;
        ttlog(
            &tx,
            "punch",
            &employee_id.to_string(),
            &format!("{} at {}", punch.kind.to_db_str(), punch.at_str()),
        )?;

        tx.commit()?;

        Ok(punch)
    }
}
