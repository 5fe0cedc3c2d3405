mod common;

use common::{add_punch, fic, open_seeded, setup_test_db, temp_out};
use fichador::models::punch_kind::PunchKind;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

fn seed(db: &str) {
    let (conn, emp_id) = open_seeded(db);
    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);
    add_punch(&conn, emp_id, "2026-06-02 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-02 16:00:00", PunchKind::Exit);
}

#[test]
fn export_json_writes_session_rows() {
    let db = setup_test_db("export_json");
    seed(&db);
    let out = temp_out("export_json", "json");

    fic()
        .args([
            "--db",
            &db,
            "export",
            "1",
            "--format",
            "json",
            "--file",
            &out,
            "--from",
            "2026-06-01",
            "--to",
            "2026-06-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of sessions");

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["status"] == "closed"));
    // Most recent first.
    assert_eq!(rows[0]["entry"], "2026-06-02 08:00:00");
    assert_eq!(rows[0]["duration_secs"], 8 * 3600);
}

#[test]
fn export_csv_writes_header_and_rows() {
    let db = setup_test_db("export_csv");
    seed(&db);
    let out = temp_out("export_csv", "csv");

    fic()
        .args([
            "--db",
            &db,
            "export",
            "1",
            "--format",
            "csv",
            "--file",
            &out,
            "--from",
            "2026-06-01",
            "--to",
            "2026-06-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("employee_id,status,entry,exit,duration_secs")
    );
    assert_eq!(lines.count(), 2);
    assert!(content.contains("closed"));
}

#[test]
fn export_range_filters_sessions() {
    let db = setup_test_db("export_range");
    seed(&db);
    let out = temp_out("export_range", "json");

    fic()
        .args([
            "--db",
            &db,
            "export",
            "1",
            "--format",
            "json",
            "--file",
            &out,
            "--from",
            "2026-06-02",
            "--to",
            "2026-06-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().expect("array").len(), 1);
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let db = setup_test_db("export_force");
    seed(&db);
    let out = temp_out("export_force", "json");
    fs::write(&out, "occupied").expect("pre-existing file");

    fic()
        .args([
            "--db", &db, "export", "1", "--format", "json", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fic()
        .args([
            "--db", &db, "export", "1", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.starts_with('['));
}
