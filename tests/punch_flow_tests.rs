mod common;

use common::{open_seeded, setup_test_db, ts};
use fichador::core::policy::Policy;
use fichador::core::punch::PunchLogic;
use fichador::db::pool::DbPool;
use fichador::db::queries::{get_company, last_punch, list_incidents, update_company};
use fichador::errors::AppError;
use fichador::models::incident::{IncidentKind, IncidentStatus};
use fichador::models::punch_kind::PunchKind;

fn pool(db: &str) -> DbPool {
    DbPool::new(db).expect("open pool")
}

#[test]
fn punches_alternate_entry_exit() {
    let db = setup_test_db("flow_alternate");
    let (conn, emp_id) = open_seeded(&db);
    drop(conn);
    let mut pool = pool(&db);
    let policy = Policy::default();

    let p1 = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap();
    assert_eq!(p1.kind, PunchKind::Entry);

    let p2 = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 15:00:00"),
        &policy,
    )
    .unwrap();
    assert_eq!(p2.kind, PunchKind::Exit);
}

#[test]
fn debounced_punch_persists_nothing() {
    let db = setup_test_db("flow_debounce");
    let (conn, emp_id) = open_seeded(&db);
    drop(conn);
    let mut pool = pool(&db);
    let policy = Policy::default();

    PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap();

    let err = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 08:00:30"),
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::TooSoon));

    // The rejected tap must leave the log untouched.
    let last = last_punch(&pool.conn, emp_id).unwrap().unwrap();
    assert_eq!(last.at, ts("2026-06-01 08:00:00"));
}

#[test]
fn forgotten_shift_files_a_pending_incident() {
    let db = setup_test_db("flow_forgotten");
    let (conn, emp_id) = open_seeded(&db);
    drop(conn);
    let mut pool = pool(&db);
    let policy = Policy::default();

    PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap();

    // Next morning, 25 h later: the open shift was forgotten.
    let p = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-02 09:00:00"),
        &policy,
    )
    .unwrap();
    assert_eq!(p.kind, PunchKind::Entry);

    let incidents = list_incidents(&pool.conn, Some(emp_id)).unwrap();
    assert_eq!(incidents.len(), 1);
    assert_eq!(incidents[0].kind, IncidentKind::Olvido);
    assert_eq!(incidents[0].status, IncidentStatus::Pendiente);
    assert_eq!(incidents[0].start_date, ts("2026-06-01 08:00:00").date());
}

#[test]
fn out_of_range_punch_is_rejected() {
    let db = setup_test_db("flow_geofence");
    let (conn, emp_id) = open_seeded(&db);

    let mut company = get_company(&conn, 1).unwrap();
    company.lat = Some(40.0);
    company.lon = Some(-3.0);
    update_company(&conn, &company).unwrap();
    drop(conn);

    let mut pool = pool(&db);
    let policy = Policy::default();

    // A kilometer away from the office.
    let err = PunchLogic::record(
        &mut pool,
        emp_id,
        40.009,
        -3.0,
        None,
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::OutOfRange { .. }));
    assert!(last_punch(&pool.conn, emp_id).unwrap().is_none());
}

#[test]
fn office_mode_punch_requires_the_office_tag() {
    let db = setup_test_db("flow_office_tag");
    let (conn, emp_id) = open_seeded(&db);

    let mut company = get_company(&conn, 1).unwrap();
    company.office_tag = Some("04A1B2C3".into());
    update_company(&conn, &company).unwrap();
    drop(conn);

    let mut pool = pool(&db);
    let policy = Policy::default();

    let err = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        None,
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap_err();
    assert!(matches!(err, AppError::MissingIdentity));

    // Tolerant match: separators and case do not matter.
    let p = PunchLogic::record(
        &mut pool,
        emp_id,
        0.0,
        0.0,
        Some("04:a1:b2:c3"),
        ts("2026-06-01 08:00:00"),
        &policy,
    )
    .unwrap();
    assert_eq!(p.kind, PunchKind::Entry);
}
