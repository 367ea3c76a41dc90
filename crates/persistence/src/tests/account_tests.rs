// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_account, test_persistence};
use crate::{PersistenceError, verify_password};

#[test]
fn create_account_creates_user_and_employee() {
    let mut persistence = test_persistence();
    let (user_id, employee_id) =
        create_test_account(&mut persistence, "jdoe", Some("jdoe@example.com"), "employee");

    let user = persistence
        .get_user_by_id(user_id)
        .expect("query should succeed")
        .expect("user should exist");
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.email.as_deref(), Some("jdoe@example.com"));
    assert_eq!(user.role, "employee");
    assert!(user.is_active);

    let employee = persistence
        .get_employee_by_user_id(user_id)
        .expect("query should succeed")
        .expect("employee should exist");
    assert_eq!(employee.employee_id, employee_id);
    assert_eq!(employee.employee_code, "jdoe");
    assert_eq!(employee.position, "Employee");
    assert!(employee.salary.abs() < f64::EPSILON);
    assert!(employee.department_id.is_none());
}

#[test]
fn password_is_stored_hashed() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "jdoe", None, "employee");

    let user = persistence
        .get_user_by_username("jdoe")
        .expect("query should succeed")
        .expect("user should exist");
    assert_ne!(user.password_hash, "correct horse battery");
    assert!(
        verify_password("correct horse battery", &user.password_hash)
            .expect("verification should not error")
    );
    assert!(
        !verify_password("wrong password", &user.password_hash)
            .expect("verification should not error")
    );
}

#[test]
fn duplicate_username_is_rejected() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "jdoe", Some("jdoe@example.com"), "employee");

    let result = persistence.create_account(
        "jdoe",
        Some("other@example.com"),
        "another password",
        "employee",
        "2025-02-03",
    );
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn duplicate_email_is_rejected() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "jdoe", Some("jdoe@example.com"), "employee");

    let result = persistence.create_account(
        "other",
        Some("jdoe@example.com"),
        "another password",
        "employee",
        "2025-02-03",
    );
    assert!(matches!(result, Err(PersistenceError::UniqueViolation(_))));
}

#[test]
fn failed_account_creation_leaves_no_partial_rows() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "jdoe", None, "employee");

    // Same username: the user insert fails and the transaction rolls back.
    let result =
        persistence.create_account("jdoe", None, "another password", "employee", "2025-02-03");
    assert!(result.is_err());

    assert_eq!(
        persistence
            .count_employees()
            .expect("count should succeed"),
        1
    );
}

#[test]
fn email_lookup_finds_user() {
    let mut persistence = test_persistence();
    create_test_account(&mut persistence, "jdoe", Some("jdoe@example.com"), "hr");

    let user = persistence
        .get_user_by_email("jdoe@example.com")
        .expect("query should succeed")
        .expect("user should exist");
    assert_eq!(user.username, "jdoe");
    assert_eq!(user.role, "hr");

    let missing = persistence
        .get_user_by_email("nobody@example.com")
        .expect("query should succeed");
    assert!(missing.is_none());
}

#[test]
fn session_lifecycle() {
    let mut persistence = test_persistence();
    let (user_id, _) = create_test_account(&mut persistence, "jdoe", None, "employee");

    let session_id = persistence
        .create_session("token-abc", user_id, "2099-01-01 00:00:00")
        .expect("session creation should succeed");
    assert!(session_id > 0);

    let session = persistence
        .get_session_by_token("token-abc")
        .expect("query should succeed")
        .expect("session should exist");
    assert_eq!(session.user_id, user_id);

    persistence
        .delete_session("token-abc")
        .expect("delete should succeed");
    assert!(
        persistence
            .get_session_by_token("token-abc")
            .expect("query should succeed")
            .is_none()
    );
}

#[test]
fn expired_sessions_are_swept() {
    let mut persistence = test_persistence();
    let (user_id, _) = create_test_account(&mut persistence, "jdoe", None, "employee");

    // Expiry timestamps share CURRENT_TIMESTAMP's `YYYY-MM-DD HH:MM:SS`
    // shape, so the sweep's lexicographic comparison is exact even for
    // same-day expiries.
    persistence
        .create_session("stale", user_id, "2000-01-01 00:00:00")
        .expect("session creation should succeed");
    persistence
        .create_session("stale-today", user_id, "2000-01-01 23:59:59")
        .expect("session creation should succeed");
    persistence
        .create_session("fresh", user_id, "2099-01-01 00:00:00")
        .expect("session creation should succeed");

    let swept = persistence
        .delete_expired_sessions()
        .expect("sweep should succeed");
    assert_eq!(swept, 2);
    assert!(
        persistence
            .get_session_by_token("fresh")
            .expect("query should succeed")
            .is_some()
    );
}

#[test]
fn update_profile_touches_user_and_employee() {
    let mut persistence = test_persistence();
    let (user_id, employee_id) = create_test_account(&mut persistence, "jdoe", None, "employee");
    let department_id = persistence
        .create_department("Engineering", "", None)
        .expect("department creation should succeed");

    persistence
        .update_profile(
            user_id,
            Some("new@example.com"),
            "Engineer",
            Some(department_id),
            "555-0100",
            "1 Main St",
        )
        .expect("profile update should succeed");

    let user = persistence
        .get_user_by_id(user_id)
        .expect("query should succeed")
        .expect("user should exist");
    assert_eq!(user.email.as_deref(), Some("new@example.com"));
    assert_eq!(user.phone, "555-0100");

    let employee = persistence
        .get_employee_by_user_id(user_id)
        .expect("query should succeed")
        .expect("employee should exist");
    assert_eq!(employee.employee_id, employee_id);
    assert_eq!(employee.position, "Engineer");
    assert_eq!(employee.department_id, Some(department_id));
    assert_eq!(employee.phone, "555-0100");
    assert_eq!(employee.address, "1 Main St");
}

#[test]
fn update_profile_clears_department_when_absent() {
    let mut persistence = test_persistence();
    let (user_id, _) = create_test_account(&mut persistence, "jdoe", None, "employee");
    let department_id = persistence
        .create_department("Engineering", "", None)
        .expect("department creation should succeed");

    persistence
        .update_profile(user_id, None, "Engineer", Some(department_id), "", "")
        .expect("profile update should succeed");
    persistence
        .update_profile(user_id, None, "Engineer", None, "", "")
        .expect("profile update should succeed");

    let employee = persistence
        .get_employee_by_user_id(user_id)
        .expect("query should succeed")
        .expect("employee should exist");
    assert_eq!(employee.department_id, None);
}

#[test]
fn update_profile_rejects_unknown_department() {
    let mut persistence = test_persistence();
    let (user_id, _) = create_test_account(&mut persistence, "jdoe", None, "employee");

    let result = persistence.update_profile(user_id, None, "Engineer", Some(9999), "", "");
    assert!(matches!(
        result,
        Err(PersistenceError::ForeignKeyViolation(_))
    ));
}

#[test]
fn update_profile_for_missing_user_fails() {
    let mut persistence = test_persistence();
    let result = persistence.update_profile(9999, None, "Employee", None, "", "");
    assert!(matches!(result, Err(PersistenceError::UserNotFound(_))));
}
