// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_account, test_persistence};
use crate::PersistenceError;

#[test]
fn check_in_then_check_out() {
    let mut persistence = test_persistence();
    let (_, employee_id) = create_test_account(&mut persistence, "jdoe", None, "employee");

    let attendance_id = persistence
        .insert_check_in(employee_id, "2025-06-02", "09:00:00", "present", "", None)
        .expect("check-in should succeed");

    let record = persistence
        .get_attendance_for_date(employee_id, "2025-06-02")
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.attendance_id, attendance_id);
    assert_eq!(record.check_in_time.as_deref(), Some("09:00:00"));
    assert!(record.check_out_time.is_none());
    assert!(record.working_hours.is_none());

    persistence
        .set_check_out(attendance_id, "17:30:00", 8.5)
        .expect("check-out should succeed");

    let record = persistence
        .get_attendance_for_date(employee_id, "2025-06-02")
        .expect("query should succeed")
        .expect("record should exist");
    assert_eq!(record.check_out_time.as_deref(), Some("17:30:00"));
    assert_eq!(record.working_hours, Some(8.5));
}

#[test]
fn duplicate_check_in_same_day_is_rejected() {
    let mut persistence = test_persistence();
    let (_, employee_id) = create_test_account(&mut persistence, "jdoe", None, "employee");

    persistence
        .insert_check_in(employee_id, "2025-06-02", "09:00:00", "present", "", None)
        .expect("first check-in should succeed");

    let result =
        persistence.insert_check_in(employee_id, "2025-06-02", "09:30:00", "present", "", None);
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn check_out_on_missing_record_fails() {
    let mut persistence = test_persistence();
    let result = persistence.set_check_out(9999, "17:00:00", 8.0);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn listing_is_most_recent_first() {
    let mut persistence = test_persistence();
    let (_, employee_id) = create_test_account(&mut persistence, "jdoe", None, "employee");

    for date in ["2025-06-02", "2025-06-03", "2025-06-04"] {
        persistence
            .insert_check_in(employee_id, date, "09:00:00", "present", "", None)
            .expect("check-in should succeed");
    }

    let records = persistence
        .list_attendance_for_employee(employee_id, None)
        .expect("listing should succeed");
    let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["2025-06-04", "2025-06-03", "2025-06-02"]);

    let limited = persistence
        .list_attendance_for_employee(employee_id, Some(2))
        .expect("listing should succeed");
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].date, "2025-06-04");
}

#[test]
fn stats_count_only_present_days() {
    let mut persistence = test_persistence();
    let (_, employee_id) = create_test_account(&mut persistence, "jdoe", None, "employee");

    persistence
        .insert_check_in(employee_id, "2025-06-02", "09:00:00", "present", "", None)
        .expect("check-in should succeed");
    persistence
        .insert_check_in(employee_id, "2025-06-03", "10:30:00", "late", "", None)
        .expect("check-in should succeed");
    persistence
        .insert_check_in(employee_id, "2025-06-04", "09:00:00", "present", "", None)
        .expect("check-in should succeed");

    let stats = persistence
        .attendance_stats(employee_id)
        .expect("stats should succeed");
    assert_eq!(stats.total_days, 3);
    assert_eq!(stats.present_days, 2);
}

#[test]
fn listing_and_stats_are_scoped_per_employee() {
    let mut persistence = test_persistence();
    let (_, first) = create_test_account(&mut persistence, "adam", None, "employee");
    let (_, second) = create_test_account(&mut persistence, "zoe", None, "employee");

    persistence
        .insert_check_in(first, "2025-06-02", "09:15:00", "late", "traffic", None)
        .expect("check-in should succeed");
    persistence
        .insert_check_in(first, "2025-06-03", "09:00:00", "present", "", None)
        .expect("check-in should succeed");
    persistence
        .insert_check_in(second, "2025-06-02", "09:00:00", "present", "", None)
        .expect("check-in should succeed");

    let records = persistence
        .list_attendance_for_employee(second, None)
        .expect("listing should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].notes, "");

    let stats = persistence
        .attendance_stats(first)
        .expect("stats should succeed");
    assert_eq!(stats.total_days, 2);
    assert_eq!(stats.present_days, 1);
}
