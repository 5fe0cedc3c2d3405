mod common;

use common::{fic, setup_test_db};
use predicates::prelude::*;

/// Build the full dataset through the CLI only: company, schedule with a
/// Monday slot, one employee, two punches closing a 7 h session.
fn seed_via_cli(db: &str) {
    fic()
        .args(["--db", db, "--test", "init"])
        .assert()
        .success();

    fic()
        .args(["--db", db, "company", "add", "Acme"])
        .assert()
        .success();

    fic()
        .args(["--db", db, "schedule", "add", "Base", "--company", "1"])
        .assert()
        .success();

    fic()
        .args([
            "--db", db, "schedule", "slot", "1", "--weekday", "mon", "--entry", "08:00", "--exit",
            "15:00",
        ])
        .assert()
        .success();

    fic()
        .args([
            "--db",
            db,
            "employee",
            "add",
            "Alice",
            "--company",
            "1",
            "--schedule",
            "1",
        ])
        .assert()
        .success();

    fic()
        .args([
            "--db",
            db,
            "punch",
            "1",
            "--lat",
            "0",
            "--lon",
            "0",
            "--at",
            "2026-06-01 08:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ENTRY"));

    fic()
        .args([
            "--db",
            db,
            "punch",
            "1",
            "--lat",
            "0",
            "--lon",
            "0",
            "--at",
            "2026-06-01 15:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT"));
}

#[test]
fn full_cli_round_trip() {
    let db = setup_test_db("cli_round_trip");
    seed_via_cli(&db);

    fic()
        .args([
            "--db",
            &db,
            "sessions",
            "1",
            "--from",
            "2026-06-01",
            "--to",
            "2026-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("closed"))
        .stdout(predicate::str::contains("7h 00m"));

    fic()
        .args(["--db", &db, "balance", "1", "--month", "6", "--year", "2026"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theoretical"))
        .stdout(predicate::str::contains("Worked"));

    fic()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("punch"));
}

#[test]
fn init_with_relative_db_migrates_the_configured_file() {
    let name = "cli_rel_init_fichador.sqlite";
    let resolved = fichador::config::Config::config_dir().join(name);
    std::fs::remove_file(&resolved).ok();
    std::fs::remove_file(name).ok();

    fic()
        .args(["--db", name, "--test", "init"])
        .assert()
        .success();

    // A bare --db name lands in the config dir; the schema must end up
    // there, not in a cwd-relative file of the same name.
    let conn = rusqlite::Connection::open(&resolved).expect("open resolved db");
    let tables: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='punch'",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    assert_eq!(tables, 1);
    assert!(!std::path::Path::new(name).exists());

    drop(conn);
    std::fs::remove_file(&resolved).ok();
}

#[test]
fn cli_rejects_rapid_double_punch() {
    let db = setup_test_db("cli_debounce");
    seed_via_cli(&db);

    fic()
        .args([
            "--db",
            &db,
            "punch",
            "1",
            "--lat",
            "0",
            "--lon",
            "0",
            "--at",
            "2026-06-01 15:00:30",
        ])
        .assert()
        .failure();
}

#[test]
fn cli_remind_reports_missing_entry() {
    let db = setup_test_db("cli_remind");
    seed_via_cli(&db);

    // Monday a week later, past the grace window, no punches that day.
    fic()
        .args(["--db", &db, "remind", "1", "--at", "2026-06-08 08:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FALTA_ENTRADA"));
}

#[test]
fn cli_sweep_reports_counts() {
    let db = setup_test_db("cli_sweep");
    seed_via_cli(&db);

    fic()
        .args(["--db", &db, "sweep", "--at", "2026-06-08 08:20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 evaluated, 1 due"));
}

#[test]
fn cli_incident_lifecycle() {
    let db = setup_test_db("cli_incident");
    seed_via_cli(&db);

    fic()
        .args([
            "--db",
            &db,
            "incident",
            "add",
            "1",
            "--kind",
            "VACACIONES",
            "--from",
            "2026-06-08",
            "--to",
            "2026-06-12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PENDIENTE"));

    fic()
        .args(["--db", &db, "incident", "resolve", "1", "--approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("APROBADA"));

    fic()
        .args(["--db", &db, "incident", "list", "--employee", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("VACACIONES"))
        .stdout(predicate::str::contains("APROBADA"));
}

#[test]
fn cli_rejects_unknown_incident_kind() {
    let db = setup_test_db("cli_bad_incident");
    seed_via_cli(&db);

    fic()
        .args([
            "--db",
            &db,
            "incident",
            "add",
            "1",
            "--kind",
            "SIESTA",
            "--from",
            "2026-06-08",
            "--to",
            "2026-06-08",
        ])
        .assert()
        .failure();
}

#[test]
fn cli_sessions_requires_employee_or_all() {
    let db = setup_test_db("cli_sessions_args");
    seed_via_cli(&db);

    fic()
        .args(["--db", &db, "sessions"])
        .assert()
        .failure();

    fic()
        .args([
            "--db",
            &db,
            "sessions",
            "--all",
            "--from",
            "2026-06-01",
            "--to",
            "2026-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("closed"));
}
