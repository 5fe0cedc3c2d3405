#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDateTime, NaiveTime};
use fichador::db::initialize::init_db;
use fichador::db::queries;
use fichador::models::company::Company;
use fichador::models::employee::Employee;
use fichador::models::punch::Punch;
use fichador::models::punch_kind::PunchKind;
use fichador::models::schedule::{Schedule, TimeSlot};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fic() -> Command {
    cargo_bin_cmd!("fichador")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fichador.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .expect("valid timestamp literal")
}

pub fn hm(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time literal")
}

/// Open a fresh DB and seed the baseline dataset used by most tests:
/// one company without geofence, a Mon-Fri 08:00-15:00 schedule and one
/// employee on it. Returns the connection and the employee id.
pub fn open_seeded(db_path: &str) -> (Connection, i64) {
    let conn = Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");

    let company_id = queries::insert_company(
        &conn,
        &Company {
            id: 0,
            name: "Acme".into(),
            lat: None,
            lon: None,
            radius_m: 100,
            office_tag: None,
        },
    )
    .expect("insert company");

    let schedule_id = queries::insert_schedule(
        &conn,
        &Schedule {
            id: 0,
            company_id,
            name: "Base".into(),
        },
    )
    .expect("insert schedule");

    for weekday in 0..5 {
        queries::insert_time_slot(
            &conn,
            &TimeSlot {
                schedule_id,
                weekday,
                entry: hm("08:00"),
                exit: hm("15:00"),
            },
        )
        .expect("insert slot");
    }

    let employee_id = queries::insert_employee(
        &conn,
        &Employee {
            id: 0,
            name: "Alice".into(),
            company_id,
            schedule_id: Some(schedule_id),
            nfc_tag: None,
            push_token: None,
        },
    )
    .expect("insert employee");

    (conn, employee_id)
}

pub fn add_punch(conn: &Connection, employee_id: i64, at: &str, kind: PunchKind) {
    queries::insert_punch(conn, &Punch::new(employee_id, ts(at), kind, 0.0, 0.0))
        .expect("insert punch");
}
