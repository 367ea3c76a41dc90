// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Serializable representation of a user account row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// Serializable representation of a session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub user_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// Serializable representation of a department row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentData {
    pub department_id: i64,
    pub name: String,
    pub description: String,
    pub manager_id: Option<i64>,
}

/// Serializable representation of an employee row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeData {
    pub employee_id: i64,
    pub user_id: i64,
    pub employee_code: String,
    pub department_id: Option<i64>,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
    pub address: String,
    pub phone: String,
}

/// An employee row joined with its account and department names.
///
/// Used by the directory listing so callers never need a second lookup
/// to render a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDirectoryEntry {
    pub employee: EmployeeData,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
    pub department_name: Option<String>,
}

/// Serializable representation of an attendance row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceData {
    pub attendance_id: i64,
    pub employee_id: i64,
    pub date: String,
    pub status: String,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub working_hours: Option<f64>,
    pub notes: String,
    pub recorded_by: Option<i64>,
}

/// Aggregate attendance counters for one employee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttendanceStats {
    pub total_days: i64,
    pub present_days: i64,
}

/// Serializable representation of a leave request row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestData {
    pub leave_request_id: i64,
    pub employee_id: i64,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<i64>,
    pub created_at: String,
}

/// A leave request joined with the requesting employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestDetail {
    pub request: LeaveRequestData,
    pub employee_code: String,
    pub username: String,
}

/// Per-status counters for a leave request listing.
///
/// The counters are computed over the same scope as the listing itself,
/// so a filtered view always shows counts consistent with its rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LeaveStatusCounts {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

/// Serializable representation of a performance review row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReviewData {
    pub review_id: i64,
    pub employee_id: i64,
    pub reviewer_id: i64,
    pub review_date: String,
    pub rating: i32,
    pub comments: String,
    pub goals: String,
}

/// A performance review joined with the reviewed employee and the reviewer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDetail {
    pub review: PerformanceReviewData,
    pub employee_code: String,
    pub reviewer_username: String,
}
