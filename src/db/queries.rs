use crate::errors::{AppError, AppResult};
use crate::models::company::Company;
use crate::models::employee::Employee;
use crate::models::incident::{Incident, IncidentKind, IncidentStatus};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::models::schedule::{Schedule, TimeSlot};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_at(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .map_err(|_| conversion_err(AppError::InvalidTime(s.to_string())))
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(s.to_string())))
}

fn fmt_at(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

// ---------------------------------------------------------------------------
// Company
// ---------------------------------------------------------------------------

pub fn map_company(row: &Row) -> Result<Company> {
    Ok(Company {
        id: row.get("id")?,
        name: row.get("name")?,
        lat: row.get("lat")?,
        lon: row.get("lon")?,
        radius_m: row.get("radius_m")?,
        office_tag: row.get("office_tag")?,
    })
}

pub fn insert_company(conn: &Connection, c: &Company) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO company (name, lat, lon, radius_m, office_tag)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![c.name, c.lat, c.lon, c.radius_m, c.office_tag],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_company(conn: &Connection, c: &Company) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE company
         SET name = ?1, lat = ?2, lon = ?3, radius_m = ?4, office_tag = ?5
         WHERE id = ?6",
        params![c.name, c.lat, c.lon, c.radius_m, c.office_tag, c.id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound("company", c.id));
    }
    Ok(())
}

pub fn get_company(conn: &Connection, id: i64) -> AppResult<Company> {
    let mut stmt = conn.prepare_cached("SELECT * FROM company WHERE id = ?1")?;
    stmt.query_row([id], map_company)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound("company", id),
            other => other.into(),
        })
}

pub fn list_companies(conn: &Connection) -> AppResult<Vec<Company>> {
    let mut stmt = conn.prepare("SELECT * FROM company ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_company)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

pub fn map_employee(row: &Row) -> Result<Employee> {
    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        company_id: row.get("company_id")?,
        schedule_id: row.get("schedule_id")?,
        nfc_tag: row.get("nfc_tag")?,
        push_token: row.get("push_token")?,
    })
}

pub fn insert_employee(conn: &Connection, e: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employee (name, company_id, schedule_id, nfc_tag, push_token)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![e.name, e.company_id, e.schedule_id, e.nfc_tag, e.push_token],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_employee(conn: &Connection, e: &Employee) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE employee
         SET name = ?1, company_id = ?2, schedule_id = ?3, nfc_tag = ?4, push_token = ?5
         WHERE id = ?6",
        params![e.name, e.company_id, e.schedule_id, e.nfc_tag, e.push_token, e.id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound("employee", e.id));
    }
    Ok(())
}

pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Employee> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employee WHERE id = ?1")?;
    stmt.query_row([id], map_employee)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound("employee", id),
            other => other.into(),
        })
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employee ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_employee)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Schedule / time slots
// ---------------------------------------------------------------------------

pub fn insert_schedule(conn: &Connection, s: &Schedule) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO schedule (company_id, name) VALUES (?1, ?2)",
        params![s.company_id, s.name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_schedule(conn: &Connection, id: i64) -> AppResult<Schedule> {
    let mut stmt = conn.prepare_cached("SELECT * FROM schedule WHERE id = ?1")?;
    stmt.query_row([id], |row| {
        Ok(Schedule {
            id: row.get("id")?,
            company_id: row.get("company_id")?,
            name: row.get("name")?,
        })
    })
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => AppError::NotFound("schedule", id),
        other => other.into(),
    })
}

pub fn map_slot(row: &Row) -> Result<TimeSlot> {
    let entry_str: String = row.get("entry")?;
    let exit_str: String = row.get("exit")?;

    let entry = NaiveTime::parse_from_str(&entry_str, "%H:%M")
        .map_err(|_| conversion_err(AppError::InvalidTime(entry_str.clone())))?;
    let exit = NaiveTime::parse_from_str(&exit_str, "%H:%M")
        .map_err(|_| conversion_err(AppError::InvalidTime(exit_str.clone())))?;

    Ok(TimeSlot {
        schedule_id: row.get("schedule_id")?,
        weekday: row.get("weekday")?,
        entry,
        exit,
    })
}

pub fn insert_time_slot(conn: &Connection, slot: &TimeSlot) -> AppResult<()> {
    conn.execute(
        "INSERT INTO time_slot (schedule_id, weekday, entry, exit)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            slot.schedule_id,
            slot.weekday,
            slot.entry.format("%H:%M").to_string(),
            slot.exit.format("%H:%M").to_string(),
        ],
    )?;
    Ok(())
}

pub fn slots_for_weekday(
    conn: &Connection,
    schedule_id: i64,
    weekday: u32,
) -> AppResult<Vec<TimeSlot>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM time_slot
         WHERE schedule_id = ?1 AND weekday = ?2
         ORDER BY entry ASC",
    )?;
    let rows = stmt.query_map(params![schedule_id, weekday], map_slot)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn slots_for_schedule(conn: &Connection, schedule_id: i64) -> AppResult<Vec<TimeSlot>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM time_slot
         WHERE schedule_id = ?1
         ORDER BY weekday ASC, entry ASC",
    )?;
    let rows = stmt.query_map([schedule_id], map_slot)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Incidents
// ---------------------------------------------------------------------------

pub fn map_incident(row: &Row) -> Result<Incident> {
    let kind_str: String = row.get("kind")?;
    let kind = IncidentKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_err(AppError::Validation(format!("Invalid incident kind: {kind_str}")))
    })?;

    let status_str: String = row.get("status")?;
    let status = IncidentStatus::from_db_str(&status_str).ok_or_else(|| {
        conversion_err(AppError::Validation(format!(
            "Invalid incident status: {status_str}"
        )))
    })?;

    let start_str: String = row.get("start_date")?;
    let end_str: String = row.get("end_date")?;

    Ok(Incident {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        kind,
        start_date: parse_day(&start_str)?,
        end_date: parse_day(&end_str)?,
        status,
        note: row.get("note")?,
        admin_note: row.get("admin_note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_incident(conn: &Connection, inc: &Incident) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO incident (employee_id, kind, start_date, end_date, status, note, admin_note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            inc.employee_id,
            inc.kind.to_db_str(),
            inc.start_date.format("%Y-%m-%d").to_string(),
            inc.end_date.format("%Y-%m-%d").to_string(),
            inc.status.to_db_str(),
            inc.note,
            inc.admin_note,
            inc.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn resolve_incident(
    conn: &Connection,
    id: i64,
    status: IncidentStatus,
    admin_note: Option<&str>,
) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE incident SET status = ?1, admin_note = COALESCE(?2, admin_note) WHERE id = ?3",
        params![status.to_db_str(), admin_note, id],
    )?;
    if n == 0 {
        return Err(AppError::NotFound("incident", id));
    }
    Ok(())
}

pub fn list_incidents(conn: &Connection, employee_id: Option<i64>) -> AppResult<Vec<Incident>> {
    let mut out = Vec::new();

    if let Some(emp) = employee_id {
        let mut stmt = conn.prepare(
            "SELECT * FROM incident WHERE employee_id = ?1 ORDER BY start_date DESC",
        )?;
        let rows = stmt.query_map([emp], map_incident)?;
        for r in rows {
            out.push(r?);
        }
    } else {
        let mut stmt = conn.prepare("SELECT * FROM incident ORDER BY start_date DESC")?;
        let rows = stmt.query_map([], map_incident)?;
        for r in rows {
            out.push(r?);
        }
    }

    Ok(out)
}

/// Approved absence-kind incidents touching [from, to].
pub fn approved_absences_overlapping(
    conn: &Connection,
    employee_id: i64,
    from: NaiveDate,
    to: NaiveDate,
) -> AppResult<Vec<Incident>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM incident
         WHERE employee_id = ?1
           AND status = 'APROBADA'
           AND start_date <= ?2
           AND end_date >= ?3
         ORDER BY start_date ASC",
    )?;
    let rows = stmt.query_map(
        params![
            employee_id,
            to.format("%Y-%m-%d").to_string(),
            from.format("%Y-%m-%d").to_string(),
        ],
        map_incident,
    )?;

    let mut out = Vec::new();
    for r in rows {
        let inc = r?;
        if inc.kind.is_absence() {
            out.push(inc);
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Punches
// ---------------------------------------------------------------------------

pub fn map_punch(row: &Row) -> Result<Punch> {
    let at_str: String = row.get("at")?;
    let kind_str: String = row.get("kind")?;

    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        conversion_err(AppError::Validation(format!("Invalid punch kind: {kind_str}")))
    })?;

    Ok(Punch {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        at: parse_at(&at_str)?,
        kind,
        lat: row.get("lat")?,
        lon: row.get("lon")?,
    })
}

pub fn insert_punch(conn: &Connection, p: &Punch) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punch (employee_id, at, kind, lat, lon)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![p.employee_id, fmt_at(p.at), p.kind.to_db_str(), p.lat, p.lon],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent punch of an employee, regardless of date. The single source
/// of truth for the IN/OUT state machine.
pub fn last_punch(conn: &Connection, employee_id: i64) -> AppResult<Option<Punch>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punch
         WHERE employee_id = ?1
         ORDER BY at DESC, id DESC
         LIMIT 1",
    )?;

    let mut rows = stmt.query_map([employee_id], map_punch)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn punches_between(
    conn: &Connection,
    employee_id: i64,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punch
         WHERE employee_id = ?1 AND at >= ?2 AND at <= ?3
         ORDER BY at ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![employee_id, fmt_at(from), fmt_at(to)], map_punch)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Punches of every employee in a range, for the admin session board.
pub fn punches_between_all(
    conn: &Connection,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punch
         WHERE at >= ?1 AND at <= ?2
         ORDER BY at ASC, id ASC",
    )?;
    let rows = stmt.query_map(params![fmt_at(from), fmt_at(to)], map_punch)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// True when an ENTRY punch exists on the given calendar day.
pub fn has_entry_on(conn: &Connection, employee_id: i64, day: NaiveDate) -> AppResult<bool> {
    let day_str = day.format("%Y-%m-%d").to_string();
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM punch
         WHERE employee_id = ?1
           AND kind = 'ENTRY'
           AND at >= ?2 || ' 00:00:00'
           AND at <= ?2 || ' 23:59:59'
         LIMIT 1",
    )?;
    let exists = stmt.exists(params![employee_id, day_str])?;
    Ok(exists)
}
