//! Reminder evaluation: given today's schedule slots and the employee's
//! punch state, decide whether a "missing entry" or "missing exit" reminder
//! is due. Pure/read-only, safe to call inline at login and from the batch
//! sweep.

use crate::core::policy::Policy;
use crate::db::queries::{has_entry_on, last_punch, slots_for_weekday};
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::reminder::{ReminderCode, ReminderVerdict};
use crate::models::schedule::TimeSlot;
use chrono::{Days, NaiveDate, NaiveDateTime};
use rusqlite::Connection;

use crate::utils::date::weekday_index;

/// Entry deadline: earliest slot entry plus the grace window.
fn entry_deadline(slots: &[TimeSlot], day: NaiveDate, policy: &Policy) -> Option<NaiveDateTime> {
    let earliest = slots.iter().map(|s| s.entry).min()?;
    Some(day.and_time(earliest) + policy.grace())
}

/// Exit deadline: latest slot exit (pushed a day forward when the slot
/// crosses midnight) plus the grace window.
fn exit_deadline(slots: &[TimeSlot], day: NaiveDate, policy: &Policy) -> Option<NaiveDateTime> {
    let latest = slots
        .iter()
        .map(|s| {
            let dt = day.and_time(s.exit);
            if s.crosses_midnight() {
                dt.checked_add_days(Days::new(1)).unwrap_or(dt)
            } else {
                dt
            }
        })
        .max()?;
    Some(latest + policy.grace())
}

fn slots_today(
    conn: &Connection,
    employee: &Employee,
    today: NaiveDate,
) -> AppResult<Vec<TimeSlot>> {
    let Some(schedule_id) = employee.schedule_id else {
        return Ok(Vec::new());
    };
    slots_for_weekday(conn, schedule_id, weekday_index(today))
}

pub fn evaluate(
    conn: &Connection,
    employee: &Employee,
    now: NaiveDateTime,
    policy: &Policy,
) -> AppResult<ReminderVerdict> {
    let today = now.date();
    let name = employee.name.as_str();

    // Presence state from the last punch overall, not just today's.
    let last = last_punch(conn, employee.id)?;
    let open_entry_date = match &last {
        Some(p) if p.kind.is_entry() => Some(p.date()),
        _ => None,
    };

    let slots = slots_today(conn, employee, today)?;

    // A) Inside: prioritize detecting a missing exit, including stale shifts
    //    left open on previous days.
    if let Some(entry_date) = open_entry_date {
        if entry_date < today {
            return Ok(ReminderVerdict::notify(
                ReminderCode::FaltaSalida,
                "¡Te dejaste el fichaje abierto!",
                format!(
                    "Hola {name}, constas como 'Dentro' desde el día {}. Por favor, ficha la salida.",
                    entry_date.format("%d/%m")
                ),
            ));
        }

        if slots.is_empty() {
            return Ok(ReminderVerdict::notify(
                ReminderCode::FaltaSalida,
                "Fichaje abierto detectado",
                format!("Hola {name}, figuras como 'Dentro' hoy, pero no tienes horario asignado."),
            ));
        }

        if let Some(deadline) = exit_deadline(&slots, today, policy)
            && now >= deadline
        {
            return Ok(ReminderVerdict::notify(
                ReminderCode::FaltaSalida,
                "¡Te has olvidado de salir!",
                format!("Hola {name}, tu turno terminó y sigues fichado."),
            ));
        }

        return Ok(ReminderVerdict::silent(ReminderCode::Trabajando));
    }

    // B) Outside: day off, too early, already done, or a missing entry.
    if slots.is_empty() {
        return Ok(ReminderVerdict::silent(ReminderCode::HoyLibra));
    }

    if let Some(deadline) = entry_deadline(&slots, today, policy)
        && now >= deadline
    {
        if has_entry_on(conn, employee.id, today)? {
            return Ok(ReminderVerdict::silent(ReminderCode::JornadaFinalizada));
        }

        return Ok(ReminderVerdict::notify(
            ReminderCode::FaltaEntrada,
            "¡Aviso de Fichaje!",
            format!("Hola {name}, tu turno ha empezado y no consta tu entrada."),
        ));
    }

    Ok(ReminderVerdict::silent(ReminderCode::AunNoToca))
}
