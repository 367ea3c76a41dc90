// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API boundary.
//!
//! These are the wire shapes. Handlers translate between them and the
//! domain/persistence types; nothing else crosses the boundary.

use serde::{Deserialize, Serialize};
use staffline_persistence::{AttendanceData, DepartmentData, EmployeeDirectoryEntry};

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    /// The desired username. Doubles as the initial employee code.
    pub username: String,
    /// Optional email address.
    pub email: Option<String>,
    /// The password.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
    /// The requested role (`employee`, `hr`, or `admin`).
    pub role: String,
}

/// Response to a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    pub user_id: i64,
    pub employee_id: i64,
    pub username: String,
    pub message: String,
}

/// Request to log in.
///
/// The identifier matches either an email address or a username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub session_token: String,
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// Response to a logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// One employee as presented by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInfo {
    pub employee_id: i64,
    pub user_id: i64,
    pub employee_code: String,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
    pub address: String,
    pub phone: String,
}

impl From<EmployeeDirectoryEntry> for EmployeeInfo {
    fn from(entry: EmployeeDirectoryEntry) -> Self {
        Self {
            employee_id: entry.employee.employee_id,
            user_id: entry.employee.user_id,
            employee_code: entry.employee.employee_code,
            username: entry.username,
            email: entry.email,
            role: entry.role,
            department: entry.department_name,
            position: entry.employee.position,
            salary: entry.employee.salary,
            hire_date: entry.employee.hire_date,
            address: entry.employee.address,
            phone: entry.employee.phone,
        }
    }
}

/// Response listing the employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEmployeesResponse {
    pub employees: Vec<EmployeeInfo>,
    pub total: usize,
}

/// Response with one employee's detail record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetailResponse {
    pub employee: EmployeeInfo,
}

/// Response with the caller's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile: EmployeeInfo,
}

/// Request to update the caller's own profile.
///
/// The department assignment is self-service: passing `None` clears it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub position: String,
    pub department_id: Option<i64>,
    pub phone: String,
    pub address: String,
}

/// One department as presented by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub department_id: i64,
    pub name: String,
    pub description: String,
    pub manager_id: Option<i64>,
}

impl From<DepartmentData> for DepartmentInfo {
    fn from(data: DepartmentData) -> Self {
        Self {
            department_id: data.department_id,
            name: data.name,
            description: data.description,
            manager_id: data.manager_id,
        }
    }
}

/// Response listing departments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDepartmentsResponse {
    pub departments: Vec<DepartmentInfo>,
    pub total: usize,
}

/// Request to create a department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
    pub description: String,
    pub manager_id: Option<i64>,
}

/// Response to a department creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartmentResponse {
    pub department_id: i64,
    pub name: String,
    pub message: String,
}

/// Request to check in for the current day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    /// Free-form notes attached to the day's record.
    pub notes: Option<String>,
}

/// One attendance record as presented by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordInfo {
    pub attendance_id: i64,
    pub date: String,
    pub status: String,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub working_hours: Option<f64>,
    pub notes: String,
}

impl From<AttendanceData> for AttendanceRecordInfo {
    fn from(data: AttendanceData) -> Self {
        Self {
            attendance_id: data.attendance_id,
            date: data.date,
            status: data.status,
            check_in_time: data.check_in_time,
            check_out_time: data.check_out_time,
            working_hours: data.working_hours,
            notes: data.notes,
        }
    }
}

/// Response to a check-in or check-out.
///
/// A repeated action on the same day succeeds without mutating anything
/// and carries a warning instead of an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceActionResponse {
    pub record: AttendanceRecordInfo,
    pub warning: Option<String>,
    pub message: String,
}

/// Response describing the caller's attendance state for a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusResponse {
    pub date: String,
    /// One of `no_record`, `checked_in`, `checked_out`.
    pub phase: String,
    pub record: Option<AttendanceRecordInfo>,
}

/// Attendance counts for one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAttendanceInfo {
    pub year: i32,
    pub month: u8,
    pub present_count: u32,
    pub total_count: u32,
}

/// Response with the caller's attendance history and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyAttendanceResponse {
    pub records: Vec<AttendanceRecordInfo>,
    pub total_days: i64,
    pub present_days: i64,
    /// Percentage of days present, one decimal, `0.0` when no records.
    pub attendance_rate: f64,
    /// The six most recent months that have any records.
    pub monthly: Vec<MonthlyAttendanceInfo>,
}

/// One employee's attendance summary in the cross-employee overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeAttendanceSummary {
    pub employee_id: i64,
    pub employee_code: String,
    pub username: String,
    pub total_days: i64,
    pub present_days: i64,
    pub attendance_rate: f64,
    /// The 31 most recent records, newest first.
    pub recent_records: Vec<AttendanceRecordInfo>,
}

/// Response summarizing attendance across all employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceOverviewResponse {
    pub employees: Vec<EmployeeAttendanceSummary>,
    pub total: usize,
}

/// Request to submit a leave request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveRequest {
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

/// Response to a leave submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLeaveResponse {
    pub leave_request_id: i64,
    pub status: String,
    pub message: String,
}

/// One leave request as presented by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestInfo {
    pub leave_request_id: i64,
    pub employee_code: String,
    pub username: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub status: String,
    pub approved_by: Option<i64>,
    pub created_at: String,
}

/// Response listing leave requests with scope-consistent counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLeaveRequestsResponse {
    pub requests: Vec<LeaveRequestInfo>,
    /// The status filter that produced this listing.
    pub filter: String,
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

/// Request to decide a pending leave request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideLeaveRequest {
    /// Either `approve` or `reject`.
    pub decision: String,
}

/// Response to a leave decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideLeaveResponse {
    pub leave_request_id: i64,
    pub status: String,
    pub message: String,
}

/// Request to create a performance review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub employee_id: i64,
    pub review_date: String,
    pub rating: i32,
    pub comments: String,
    pub goals: String,
}

/// Response to a review creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewResponse {
    pub review_id: i64,
    pub message: String,
}

/// One performance review as presented by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewInfo {
    pub review_id: i64,
    pub employee_code: String,
    pub reviewer_username: String,
    pub review_date: String,
    pub rating: i32,
    pub comments: String,
    pub goals: String,
}

/// Response listing performance reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListReviewsResponse {
    pub reviews: Vec<ReviewInfo>,
    pub total: usize,
}

/// Organization-wide counters shown to elevated roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrDashboard {
    pub total_employees: i64,
    pub total_departments: i64,
    pub pending_leave_requests: i64,
    pub recent_hires: Vec<EmployeeInfo>,
    /// The three most recently submitted leave requests, any employee.
    pub recent_leave_requests: Vec<LeaveRequestInfo>,
}

/// Self-service counters shown to regular employees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDashboard {
    pub total_days: i64,
    pub present_days: i64,
    pub attendance_rate: f64,
    pub pending_leave_requests: i64,
    /// The caller's five most recent records, newest first.
    pub recent_attendance: Vec<AttendanceRecordInfo>,
    /// The caller's three most recently submitted leave requests.
    pub recent_leave_requests: Vec<LeaveRequestInfo>,
}

/// Role-dependent dashboard. The employee section is always set; the
/// HR section only for elevated roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub role: String,
    pub hr: Option<HrDashboard>,
    pub employee: Option<EmployeeDashboard>,
}
