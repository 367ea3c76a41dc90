// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_account, test_persistence};

#[test]
fn directory_lists_all_employees_with_account_details() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "zoe", Some("zoe@example.com"), "employee");
    create_test_account(&mut persistence, "adam", Some("adam@example.com"), "hr");

    let entries = persistence.list_employees().expect("listing should succeed");
    assert_eq!(entries.len(), 2);
    // Ordered by employee code.
    assert_eq!(entries[0].username, "adam");
    assert_eq!(entries[0].role, "hr");
    assert_eq!(entries[1].username, "zoe");
    assert!(entries[1].department_name.is_none());
}

#[test]
fn directory_entry_carries_department_name() {
    let mut persistence = test_persistence();
    let (user_id, employee_id) =
        create_test_account(&mut persistence, "jdoe", None, "employee");
    let _department_id = persistence
        .create_department("Engineering", "Builds things", Some(user_id))
        .expect("department creation should succeed");

    // The new account has no department until one is assigned.
    let entry = persistence
        .get_directory_entry(employee_id)
        .expect("query should succeed")
        .expect("entry should exist");
    assert!(entry.department_name.is_none());
    assert_eq!(entry.employee.employee_code, "jdoe");
}

#[test]
fn missing_directory_entry_is_none() {
    let mut persistence = test_persistence();
    let entry = persistence
        .get_directory_entry(9999)
        .expect("query should succeed");
    assert!(entry.is_none());
}

#[test]
fn department_listing_and_counts() {
    let mut persistence = test_persistence();
    persistence
        .create_department("Sales", "", None)
        .expect("department creation should succeed");
    persistence
        .create_department("Engineering", "Builds things", None)
        .expect("department creation should succeed");

    let departments = persistence
        .list_departments()
        .expect("listing should succeed");
    assert_eq!(departments.len(), 2);
    // Ordered by name.
    assert_eq!(departments[0].name, "Engineering");
    assert_eq!(departments[1].name, "Sales");

    assert_eq!(
        persistence
            .count_departments()
            .expect("count should succeed"),
        2
    );
}

#[test]
fn recent_hires_are_newest_first() {
    let mut persistence = test_persistence();
    persistence
        .create_account("early", None, "pw12345678", "employee", "2024-01-08")
        .expect("account creation should succeed");
    persistence
        .create_account("middle", None, "pw12345678", "employee", "2024-06-03")
        .expect("account creation should succeed");
    persistence
        .create_account("latest", None, "pw12345678", "employee", "2025-03-10")
        .expect("account creation should succeed");

    let hires = persistence.recent_hires(2).expect("query should succeed");
    assert_eq!(hires.len(), 2);
    assert_eq!(hires[0].username, "latest");
    assert_eq!(hires[1].username, "middle");

    assert_eq!(
        persistence.count_employees().expect("count should succeed"),
        3
    );
}
