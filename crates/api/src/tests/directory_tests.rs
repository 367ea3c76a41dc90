// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::CreateDepartmentRequest;
use crate::tests::{seed_user, test_persistence};

#[test]
fn directory_listing_requires_an_elevated_role() {
    let mut persistence = test_persistence();
    let user = seed_user(&mut persistence, "jdoe", "employee");

    let result = handlers::list_employees(&mut persistence, &user);
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn directory_lists_employees_by_code() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");
    seed_user(&mut persistence, "zoe", "employee");
    seed_user(&mut persistence, "alice", "employee");

    let response =
        handlers::list_employees(&mut persistence, &hr).expect("listing should succeed");

    assert_eq!(response.total, 3);
    assert_eq!(response.employees[0].employee_code, "alice");
    assert_eq!(response.employees[1].employee_code, "hboss");
    assert_eq!(response.employees[2].employee_code, "zoe");
}

#[test]
fn employee_detail_is_open_to_any_authenticated_account() {
    let mut persistence = test_persistence();
    let alice = seed_user(&mut persistence, "alice", "employee");
    let bob = seed_user(&mut persistence, "bob", "employee");

    // A regular employee may look up a colleague's detail record.
    let response = handlers::get_employee(&mut persistence, &alice, bob.employee_id)
        .expect("detail should be readable");
    assert_eq!(response.employee.username, "bob");
}

#[test]
fn missing_employee_detail_is_not_found() {
    let mut persistence = test_persistence();
    let user = seed_user(&mut persistence, "jdoe", "employee");

    let result = handlers::get_employee(&mut persistence, &user, 9999);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn creating_departments_requires_an_elevated_role() {
    let mut persistence = test_persistence();
    let user = seed_user(&mut persistence, "jdoe", "employee");

    let result = handlers::create_department(
        &mut persistence,
        &user,
        &CreateDepartmentRequest {
            name: String::from("Engineering"),
            description: String::new(),
            manager_id: None,
        },
    );
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn blank_department_names_are_rejected() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");

    let result = handlers::create_department(
        &mut persistence,
        &hr,
        &CreateDepartmentRequest {
            name: String::from("   "),
            description: String::new(),
            manager_id: None,
        },
    );

    match result {
        Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
        other => panic!("expected invalid name, got {other:?}"),
    }
}

#[test]
fn department_listing_is_open_to_any_authenticated_account() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");
    let user = seed_user(&mut persistence, "jdoe", "employee");

    handlers::create_department(
        &mut persistence,
        &hr,
        &CreateDepartmentRequest {
            name: String::from("Engineering"),
            description: String::from("Builds the product"),
            manager_id: Some(hr.user_id),
        },
    )
    .expect("creation should succeed");
    handlers::create_department(
        &mut persistence,
        &hr,
        &CreateDepartmentRequest {
            name: String::from("Design"),
            description: String::new(),
            manager_id: None,
        },
    )
    .expect("creation should succeed");

    let response =
        handlers::list_departments(&mut persistence, &user).expect("listing should succeed");
    assert_eq!(response.total, 2);
    // Alphabetical by name.
    assert_eq!(response.departments[0].name, "Design");
    assert_eq!(response.departments[1].name, "Engineering");
}
