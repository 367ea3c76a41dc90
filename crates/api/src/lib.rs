// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the Staffline HR system.
//!
//! This crate translates requests into domain operations, enforces
//! authentication and authorization, and converts domain and persistence
//! errors into the API error contract. HTTP concerns (routing, status
//! codes, extraction) live in the server crate; nothing here depends on
//! a web framework.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedUser, AuthenticationService};
pub use error::{ApiError, AuthError, translate_domain_error};
pub use handlers::{
    attendance_overview, attendance_status, check_in, check_out, create_department, create_review,
    dashboard, decide_leave, get_employee, get_profile, list_departments, list_employees,
    list_leave_requests, list_reviews, login, logout, my_attendance, signup, submit_leave,
    update_profile,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use policy::{Action, authorize};
pub use request_response::{
    AttendanceActionResponse, AttendanceOverviewResponse, AttendanceRecordInfo,
    AttendanceStatusResponse, CheckInRequest, CreateDepartmentRequest, CreateDepartmentResponse,
    CreateReviewRequest, CreateReviewResponse, DashboardResponse, DecideLeaveRequest,
    DecideLeaveResponse, DepartmentInfo, EmployeeAttendanceSummary, EmployeeDashboard,
    EmployeeDetailResponse, EmployeeInfo,
    HrDashboard, LeaveRequestInfo, ListDepartmentsResponse, ListEmployeesResponse,
    ListLeaveRequestsResponse, ListReviewsResponse, LoginRequest, LoginResponse, LogoutResponse,
    MonthlyAttendanceInfo, MyAttendanceResponse, ProfileResponse, ReviewInfo, SignupRequest,
    SignupResponse, SubmitLeaveRequest, SubmitLeaveResponse, UpdateProfileRequest,
};
