mod common;

use common::{add_punch, open_seeded, setup_test_db, ts};
use fichador::core::balance::{monthly_balance, range_worked_secs};
use fichador::db::queries::{get_employee, insert_employee, insert_incident};
use fichador::models::employee::Employee;
use fichador::models::incident::{Incident, IncidentKind, IncidentStatus};
use fichador::models::punch_kind::PunchKind;

// The seeded schedule is Mon-Fri 08:00-15:00 (7 h). June 2026 starts on a
// Monday and has 22 weekdays, so a full month is 22 * 25200 seconds.
const DAY_SECS: i64 = 7 * 3600;
const JUNE_THEORETICAL: i64 = 22 * DAY_SECS;

fn vacation(employee_id: i64, from: &str, to: &str, status: IncidentStatus) -> Incident {
    Incident {
        id: 0,
        employee_id,
        kind: IncidentKind::Vacaciones,
        start_date: from.parse().expect("date"),
        end_date: to.parse().expect("date"),
        status,
        note: None,
        admin_note: None,
        created_at: "2026-05-20T10:00:00+02:00".into(),
    }
}

#[test]
fn employee_without_schedule_gets_an_empty_balance() {
    let db = setup_test_db("balance_no_schedule");
    let (conn, _) = open_seeded(&db);

    let id = insert_employee(
        &conn,
        &Employee {
            id: 0,
            name: "Bob".into(),
            company_id: 1,
            schedule_id: None,
            nfc_tag: None,
            push_token: None,
        },
    )
    .unwrap();
    let emp = get_employee(&conn, id).unwrap();

    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();
    assert_eq!(b.theoretical_secs, 0);
    assert_eq!(b.worked_secs, 0);
    assert_eq!(b.balance_secs, 0);
    assert!(b.reliable);
}

#[test]
fn clean_month_sums_paired_days() {
    let db = setup_test_db("balance_clean");
    let (conn, emp_id) = open_seeded(&db);

    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);
    add_punch(&conn, emp_id, "2026-06-02 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-02 15:30:00", PunchKind::Exit);

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    assert_eq!(b.theoretical_secs, JUNE_THEORETICAL);
    assert_eq!(b.worked_secs, DAY_SECS + DAY_SECS + 1800);
    assert_eq!(b.balance_secs, b.worked_secs - JUNE_THEORETICAL);
    assert!(b.reliable);
    assert!(b.incomplete_days.is_empty());
}

#[test]
fn approved_absence_reduces_theoretical_hours() {
    let db = setup_test_db("balance_absence");
    let (conn, emp_id) = open_seeded(&db);

    insert_incident(
        &conn,
        &vacation(emp_id, "2026-06-01", "2026-06-05", IncidentStatus::Aprobada),
    )
    .unwrap();

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    // One full vacation week off: 22 - 5 = 17 scheduled days.
    assert_eq!(b.theoretical_secs, 17 * DAY_SECS);
}

#[test]
fn pending_absence_does_not_count() {
    let db = setup_test_db("balance_pending");
    let (conn, emp_id) = open_seeded(&db);

    insert_incident(
        &conn,
        &vacation(emp_id, "2026-06-01", "2026-06-05", IncidentStatus::Pendiente),
    )
    .unwrap();

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    assert_eq!(b.theoretical_secs, JUNE_THEORETICAL);
}

#[test]
fn dangling_entry_flags_the_day() {
    let db = setup_test_db("balance_dangling");
    let (conn, emp_id) = open_seeded(&db);

    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);
    // Forgotten exit.
    add_punch(&conn, emp_id, "2026-06-02 08:00:00", PunchKind::Entry);

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    // The paired day still counts, the broken one is flagged.
    assert_eq!(b.worked_secs, DAY_SECS);
    assert!(!b.reliable);
    assert_eq!(b.incomplete_days, vec!["2026-06-02".parse().unwrap()]);
}

#[test]
fn exit_before_entry_flags_the_day() {
    let db = setup_test_db("balance_orphan_exit");
    let (conn, emp_id) = open_seeded(&db);

    add_punch(&conn, emp_id, "2026-06-01 07:00:00", PunchKind::Exit);
    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    assert_eq!(b.worked_secs, DAY_SECS);
    assert!(!b.reliable);
}

#[test]
fn double_entry_flags_but_pairs_the_rest() {
    let db = setup_test_db("balance_double_entry");
    let (conn, emp_id) = open_seeded(&db);

    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 09:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);

    let emp = get_employee(&conn, emp_id).unwrap();
    let b = monthly_balance(&conn, &emp, 6, 2026).unwrap();

    // The second entry wins the pairing: 09:00 to 15:00.
    assert_eq!(b.worked_secs, 6 * 3600);
    assert!(!b.reliable);
}

#[test]
fn range_worked_ignores_calendar_months() {
    let db = setup_test_db("balance_range");
    let (conn, emp_id) = open_seeded(&db);

    add_punch(&conn, emp_id, "2026-05-29 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-05-29 15:00:00", PunchKind::Exit);
    add_punch(&conn, emp_id, "2026-06-01 08:00:00", PunchKind::Entry);
    add_punch(&conn, emp_id, "2026-06-01 15:00:00", PunchKind::Exit);

    let emp = get_employee(&conn, emp_id).unwrap();
    let worked = range_worked_secs(
        &conn,
        &emp,
        ts("2026-05-29 00:00:00"),
        ts("2026-06-30 23:59:59"),
    )
    .unwrap();

    assert_eq!(worked, 2 * DAY_SECS);
}
