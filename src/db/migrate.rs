use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the full attendance schema.
fn create_base_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS company (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            lat        REAL,
            lon        REAL,
            radius_m   INTEGER NOT NULL DEFAULT 100,
            office_tag TEXT
        );

        CREATE TABLE IF NOT EXISTS schedule (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            company_id INTEGER NOT NULL REFERENCES company(id),
            name       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS time_slot (
            schedule_id INTEGER NOT NULL REFERENCES schedule(id),
            weekday     INTEGER NOT NULL CHECK(weekday BETWEEN 0 AND 6),
            entry       TEXT NOT NULL,
            exit        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS employee (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            company_id  INTEGER NOT NULL REFERENCES company(id),
            schedule_id INTEGER REFERENCES schedule(id),
            nfc_tag     TEXT,
            push_token  TEXT
        );

        CREATE TABLE IF NOT EXISTS incident (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL REFERENCES employee(id),
            kind        TEXT NOT NULL CHECK(kind IN
                ('VACACIONES','BAJA','ASUNTOS_PROPIOS','OLVIDO','HORAS_EXTRA')),
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            status      TEXT NOT NULL DEFAULT 'PENDIENTE' CHECK(status IN
                ('PENDIENTE','APROBADA','RECHAZADA')),
            note        TEXT,
            admin_note  TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS punch (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_id INTEGER NOT NULL REFERENCES employee(id),
            at          TEXT NOT NULL,
            kind        TEXT NOT NULL CHECK(kind IN ('ENTRY','EXIT')),
            lat         REAL NOT NULL,
            lon         REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_punch_employee_at ON punch(employee_id, at);
        CREATE INDEX IF NOT EXISTS idx_incident_employee ON incident(employee_id, status);
        CREATE INDEX IF NOT EXISTS idx_slot_schedule_weekday ON time_slot(schedule_id, weekday);
        "#,
    )?;
    Ok(())
}

/// Older databases predate the push_token column on employee.
fn migrate_add_push_token(conn: &Connection) -> Result<()> {
    let version = "20260110_0002_add_push_token";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let mut stmt = conn.prepare("PRAGMA table_info('employee')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut has_token = false;
    for c in cols {
        if c? == "push_token" {
            has_token = true;
            break;
        }
    }

    if !has_token {
        conn.execute("ALTER TABLE employee ADD COLUMN push_token TEXT;", [])?;
        success("Migration: added 'push_token' to employee table");
    }

    mark_applied(conn, version, "Added push_token to employee")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (also the migration ledger)
    ensure_log_table(conn)?;

    // 2) Base schema
    let fresh = !table_exists(conn, "punch")?;
    create_base_schema(conn)?;

    if fresh {
        mark_applied(
            conn,
            "20251201_0001_initial_schema",
            "Created attendance schema",
        )?;
        success("Created attendance schema (company, schedule, employee, incident, punch).");
    }

    // 3) Incremental migrations
    migrate_add_push_token(conn)?;

    Ok(())
}
