//! Monthly balance: theoretical seconds from the weekly schedule minus
//! approved absences, against worked seconds paired from the punch log.

use crate::db::queries::{approved_absences_overlapping, punches_between, slots_for_weekday};
use crate::errors::AppResult;
use crate::models::balance::MonthlyBalance;
use crate::models::employee::Employee;
use crate::models::punch::Punch;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::collections::BTreeMap;

use crate::utils::date::{all_days_of_month, month_bounds, weekday_index};

/// Pair one day's punches by strict ENTRY/EXIT alternation.
///
/// Returns the fully-paired seconds and whether the day was clean. A day is
/// incomplete on a double ENTRY, an EXIT before any ENTRY, a zero/negative
/// pair, or a dangling ENTRY at day end; paired seconds still count.
fn pair_day(punches: &[Punch]) -> (i64, bool) {
    let mut worked = 0i64;
    let mut clean = true;
    let mut open: Option<&Punch> = None;

    for p in punches {
        if p.kind.is_entry() {
            if open.is_some() {
                clean = false;
            }
            open = Some(p);
        } else {
            match open.take() {
                Some(entry) => {
                    let secs = (p.at - entry.at).num_seconds();
                    if secs > 0 {
                        worked += secs;
                    } else {
                        clean = false;
                    }
                }
                None => clean = false,
            }
        }
    }

    if open.is_some() {
        clean = false;
    }

    (worked, clean)
}

/// Theoretical seconds for each weekday (Monday = 0) of a schedule.
fn weekday_theoretical(conn: &Connection, schedule_id: i64) -> AppResult<[i64; 7]> {
    let mut table = [0i64; 7];

    for (wd, slot_secs) in table.iter_mut().enumerate() {
        let slots = slots_for_weekday(conn, schedule_id, wd as u32)?;
        *slot_secs = slots.iter().map(|s| s.duration_secs()).sum();
    }

    Ok(table)
}

pub fn monthly_balance(
    conn: &Connection,
    employee: &Employee,
    month: u32,
    year: i32,
) -> AppResult<MonthlyBalance> {
    // No schedule assigned: nothing theoretical, nothing to flag.
    let Some(schedule_id) = employee.schedule_id else {
        return Ok(MonthlyBalance::empty(year, month));
    };

    let (from, to) = month_bounds(year, month)?;
    let days = all_days_of_month(year, month);

    // 1) Theoretical seconds, skipping approved absence days.
    let per_weekday = weekday_theoretical(conn, schedule_id)?;
    let absences =
        approved_absences_overlapping(conn, employee.id, from.date(), to.date())?;

    let mut theoretical = 0i64;
    for day in &days {
        if absences.iter().any(|a| a.covers(*day)) {
            continue;
        }
        theoretical += per_weekday[weekday_index(*day) as usize];
    }

    // 2) Worked seconds, grouped by calendar day.
    let punches = punches_between(conn, employee.id, from, to)?;

    let mut by_day: BTreeMap<NaiveDate, Vec<Punch>> = BTreeMap::new();
    for p in punches {
        by_day.entry(p.date()).or_default().push(p);
    }

    let mut worked = 0i64;
    let mut incomplete_days: Vec<NaiveDate> = Vec::new();

    for (day, day_punches) in &by_day {
        let (day_secs, clean) = pair_day(day_punches);
        worked += day_secs;
        if !clean {
            incomplete_days.push(*day);
        }
    }

    let reliable = incomplete_days.is_empty();
    Ok(MonthlyBalance {
        year,
        month,
        theoretical_secs: theoretical,
        worked_secs: worked,
        balance_secs: worked - theoretical,
        incomplete_days,
        reliable,
    })
}

/// Balance over an arbitrary datetime range (admin board filter). Same
/// pairing rules as the monthly report.
pub fn range_worked_secs(
    conn: &Connection,
    employee: &Employee,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<i64> {
    let punches = punches_between(conn, employee.id, from, to)?;

    let mut by_day: BTreeMap<NaiveDate, Vec<Punch>> = BTreeMap::new();
    for p in punches {
        by_day.entry(p.date()).or_default().push(p);
    }

    Ok(by_day.values().map(|ps| pair_day(ps).0).sum())
}
