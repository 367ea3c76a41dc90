// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::str::FromStr;

use crate::{AttendanceStatus, EmployeeCode, LeaveStatus, LeaveType, Rating, Role};

#[test]
fn role_round_trips_through_strings() {
    for role in [Role::Employee, Role::Hr, Role::Admin] {
        let parsed: Role = Role::from_str(role.as_str()).expect("role should parse");
        assert_eq!(parsed, role);
    }
}

#[test]
fn unknown_role_is_rejected() {
    assert!(Role::from_str("superuser").is_err());
}

#[test]
fn hr_and_admin_are_elevated() {
    assert!(!Role::Employee.is_elevated());
    assert!(Role::Hr.is_elevated());
    assert!(Role::Admin.is_elevated());
}

#[test]
fn leave_type_round_trips_through_strings() {
    for leave_type in [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Maternity,
    ] {
        let parsed: LeaveType =
            LeaveType::from_str(leave_type.as_str()).expect("leave type should parse");
        assert_eq!(parsed, leave_type);
    }
}

#[test]
fn unknown_leave_type_is_rejected() {
    assert!(LeaveType::from_str("sabbatical").is_err());
}

#[test]
fn leave_status_round_trips_through_strings() {
    for status in [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ] {
        let parsed: LeaveStatus =
            LeaveStatus::from_str(status.as_str()).expect("status should parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn attendance_status_round_trips_through_strings() {
    for status in [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
        AttendanceStatus::HalfDay,
    ] {
        let parsed: AttendanceStatus =
            AttendanceStatus::from_str(status.as_str()).expect("status should parse");
        assert_eq!(parsed, status);
    }
}

#[test]
fn half_day_uses_snake_case() {
    assert_eq!(AttendanceStatus::HalfDay.as_str(), "half_day");
}

#[test]
fn employee_code_trims_whitespace() {
    let code: EmployeeCode = EmployeeCode::new("  EMP001  ").expect("code should be valid");
    assert_eq!(code.value(), "EMP001");
}

#[test]
fn empty_employee_code_is_rejected() {
    assert!(EmployeeCode::new("").is_err());
    assert!(EmployeeCode::new("   ").is_err());
}

#[test]
fn rating_bounds() {
    assert!(Rating::new(0).is_err());
    assert!(Rating::new(1).is_ok());
    assert!(Rating::new(5).is_ok());
    assert!(Rating::new(6).is_err());
    assert_eq!(Rating::new(4).expect("valid rating").value(), 4);
}
