// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers receive the current date (and time of day where relevant)
//! from the caller instead of reading the clock themselves, which keeps
//! every date-sensitive rule testable with fixed inputs.

use std::str::FromStr;
use time::{Date, PrimitiveDateTime, Time};
use tracing::info;

use staffline_domain::{
    AttendancePhase, AttendanceStatus, DomainError, LeaveDecision, LeaveStatus, LeaveType, Rating,
    Role, attendance_rate, format_date, format_time, monthly_breakdown, parse_date, parse_time,
    validate_leave_dates, working_hours_between,
};
use staffline_persistence::{
    AttendanceData, EmployeeDirectoryEntry, LeaveRequestDetail, Persistence, PersistenceError,
};

use crate::auth::{AuthenticatedUser, AuthenticationService};
use crate::error::{ApiError, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::policy::{Action, authorize};
use crate::request_response::{
    AttendanceActionResponse, AttendanceOverviewResponse, AttendanceRecordInfo,
    AttendanceStatusResponse, CheckInRequest, CreateDepartmentRequest, CreateDepartmentResponse,
    CreateReviewRequest, CreateReviewResponse, DashboardResponse, DecideLeaveRequest,
    DecideLeaveResponse, DepartmentInfo, EmployeeAttendanceSummary, EmployeeDashboard,
    EmployeeDetailResponse, EmployeeInfo, HrDashboard, LeaveRequestInfo, ListDepartmentsResponse,
    ListEmployeesResponse, ListLeaveRequestsResponse, ListReviewsResponse, LoginRequest,
    LoginResponse, LogoutResponse, MonthlyAttendanceInfo, MyAttendanceResponse, ProfileResponse,
    ReviewInfo, SignupRequest, SignupResponse, SubmitLeaveRequest, SubmitLeaveResponse,
    UpdateProfileRequest,
};

/// Maps unexpected persistence failures to the internal error variant.
fn internal(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

/// Loads one directory entry or reports the employee as missing.
fn fetch_employee(
    persistence: &mut Persistence,
    employee_id: i64,
) -> Result<EmployeeInfo, ApiError> {
    let entry: EmployeeDirectoryEntry = persistence
        .get_directory_entry(employee_id)
        .map_err(internal)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Employee"),
            message: format!("Employee {employee_id} does not exist"),
        })?;
    Ok(entry.into())
}

/// Flattens a stored leave request with its join columns into the wire
/// shape.
fn leave_info(detail: LeaveRequestDetail) -> LeaveRequestInfo {
    LeaveRequestInfo {
        leave_request_id: detail.request.leave_request_id,
        employee_code: detail.employee_code,
        username: detail.username,
        leave_type: detail.request.leave_type,
        start_date: detail.request.start_date,
        end_date: detail.request.end_date,
        reason: detail.request.reason,
        status: detail.request.status,
        approved_by: detail.request.approved_by,
        created_at: detail.request.created_at,
    }
}

/// Creates a new account with an employee profile.
///
/// The account takes the requested role, the username as its employee
/// code, and `today` as its hire date. The user and employee rows are
/// written in one transaction.
///
/// # Errors
///
/// Returns an error if the username is empty, the role is unknown, the
/// password violates the policy, or the username/email is already
/// taken.
pub fn signup(
    persistence: &mut Persistence,
    request: &SignupRequest,
    today: Date,
) -> Result<SignupResponse, ApiError> {
    let username: &str = request.username.trim();
    if username.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: String::from("Username must not be empty"),
        });
    }

    let role: Role = Role::from_str(request.role.trim()).map_err(translate_domain_error)?;

    let email: Option<&str> = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    PasswordPolicy::default().validate(
        &request.password,
        &request.password_confirmation,
        username,
    )?;

    let hire_date: String = format_date(today).map_err(translate_domain_error)?;

    let (user_id, employee_id) = persistence
        .create_account(username, email, &request.password, role.as_str(), &hire_date)
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::DomainRuleViolation {
                rule: String::from("unique_account"),
                message: String::from("Username or email is already in use"),
            },
            other => internal(other),
        })?;

    info!(user_id, employee_id, "Account created via signup");

    Ok(SignupResponse {
        user_id,
        employee_id,
        username: username.to_string(),
        message: String::from("Account created"),
    })
}

/// Authenticates an account by email or username and opens a session.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the account is
/// inactive.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, user) =
        AuthenticationService::login(persistence, &request.identifier, &request.password)?;

    info!(user_id = user.user_id, "Login succeeded");

    Ok(LoginResponse {
        session_token,
        user_id: user.user_id,
        username: user.username,
        role: user.role.as_str().to_string(),
    })
}

/// Ends the session identified by the token.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<LogoutResponse, ApiError> {
    AuthenticationService::logout(persistence, session_token)?;

    Ok(LogoutResponse {
        message: String::from("Logged out"),
    })
}

/// Builds the role-dependent dashboard.
///
/// Every caller sees their own attendance and leave counters; elevated
/// roles additionally see organization-wide counters, recent hires, and
/// the most recent leave requests across all employees.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn dashboard(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<DashboardResponse, ApiError> {
    let hr: Option<HrDashboard> = if user.role.is_elevated() {
        let total_employees: i64 = persistence.count_employees().map_err(internal)?;
        let total_departments: i64 = persistence.count_departments().map_err(internal)?;
        let pending_leave_requests: i64 = persistence.count_pending_leave().map_err(internal)?;
        let recent_hires: Vec<EmployeeInfo> = persistence
            .recent_hires(5)
            .map_err(internal)?
            .into_iter()
            .map(Into::into)
            .collect();
        let mut recent_leave_requests: Vec<LeaveRequestInfo> = persistence
            .list_leave_requests(None, None)
            .map_err(internal)?
            .into_iter()
            .map(leave_info)
            .collect();
        recent_leave_requests.truncate(3);

        Some(HrDashboard {
            total_employees,
            total_departments,
            pending_leave_requests,
            recent_hires,
            recent_leave_requests,
        })
    } else {
        None
    };

    let stats = persistence
        .attendance_stats(user.employee_id)
        .map_err(internal)?;
    let counts = persistence
        .leave_status_counts(Some(user.employee_id))
        .map_err(internal)?;
    let recent_attendance: Vec<AttendanceRecordInfo> = persistence
        .list_attendance_for_employee(user.employee_id, Some(5))
        .map_err(internal)?
        .into_iter()
        .map(Into::into)
        .collect();
    let mut recent_leave_requests: Vec<LeaveRequestInfo> = persistence
        .list_leave_requests(Some(user.employee_id), None)
        .map_err(internal)?
        .into_iter()
        .map(leave_info)
        .collect();
    recent_leave_requests.truncate(3);

    let rate: f64 = attendance_rate(
        u64::try_from(stats.present_days).unwrap_or(0),
        u64::try_from(stats.total_days).unwrap_or(0),
    );

    Ok(DashboardResponse {
        role: user.role.as_str().to_string(),
        hr,
        employee: Some(EmployeeDashboard {
            total_days: stats.total_days,
            present_days: stats.present_days,
            attendance_rate: rate,
            pending_leave_requests: counts.pending,
            recent_attendance,
            recent_leave_requests,
        }),
    })
}

/// Returns the caller's own profile.
///
/// # Errors
///
/// Returns an error if the profile is missing or a query fails.
pub fn get_profile(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<ProfileResponse, ApiError> {
    let profile: EmployeeInfo = fetch_employee(persistence, user.employee_id)?;
    Ok(ProfileResponse { profile })
}

/// Updates the caller's own email, position, department assignment,
/// phone, and address.
///
/// Account and employee rows are written in one transaction.
///
/// # Errors
///
/// Returns an error if the email is already taken, the department does
/// not exist, or the write fails.
pub fn update_profile(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: &UpdateProfileRequest,
) -> Result<ProfileResponse, ApiError> {
    let email: Option<&str> = request
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty());

    persistence
        .update_profile(
            user.user_id,
            email,
            &request.position,
            request.department_id,
            &request.phone,
            &request.address,
        )
        .map_err(|e| match e {
            PersistenceError::UniqueViolation(_) => ApiError::DomainRuleViolation {
                rule: String::from("unique_account"),
                message: String::from("Email is already in use"),
            },
            PersistenceError::ForeignKeyViolation(_) => ApiError::ResourceNotFound {
                resource_type: String::from("Department"),
                message: String::from("Department does not exist"),
            },
            PersistenceError::UserNotFound(msg) => ApiError::ResourceNotFound {
                resource_type: String::from("User"),
                message: msg,
            },
            other => internal(other),
        })?;

    info!(user_id = user.user_id, "Profile updated");

    let profile: EmployeeInfo = fetch_employee(persistence, user.employee_id)?;
    Ok(ProfileResponse { profile })
}

/// Lists the employee directory. Restricted to elevated roles.
///
/// # Errors
///
/// Returns an error if the caller lacks an elevated role or the query
/// fails.
pub fn list_employees(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<ListEmployeesResponse, ApiError> {
    authorize(user, Action::ViewEmployeeDirectory)?;

    let employees: Vec<EmployeeInfo> = persistence
        .list_employees()
        .map_err(internal)?
        .into_iter()
        .map(Into::into)
        .collect();
    let total: usize = employees.len();

    Ok(ListEmployeesResponse { employees, total })
}

/// Returns one employee's detail record.
///
/// Open to every authenticated account, which is deliberately broader
/// than the directory listing.
///
/// # Errors
///
/// Returns an error if the employee does not exist or the query fails.
pub fn get_employee(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    employee_id: i64,
) -> Result<EmployeeDetailResponse, ApiError> {
    authorize(user, Action::ViewEmployeeDetail)?;

    let employee: EmployeeInfo = fetch_employee(persistence, employee_id)?;
    Ok(EmployeeDetailResponse { employee })
}

/// Lists all departments. Open to every authenticated account.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_departments(
    persistence: &mut Persistence,
    _user: &AuthenticatedUser,
) -> Result<ListDepartmentsResponse, ApiError> {
    let departments: Vec<DepartmentInfo> = persistence
        .list_departments()
        .map_err(internal)?
        .into_iter()
        .map(Into::into)
        .collect();
    let total: usize = departments.len();

    Ok(ListDepartmentsResponse { departments, total })
}

/// Creates a department. Restricted to elevated roles.
///
/// # Errors
///
/// Returns an error if the caller lacks an elevated role, the name is
/// empty, or the insert fails.
pub fn create_department(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: &CreateDepartmentRequest,
) -> Result<CreateDepartmentResponse, ApiError> {
    authorize(user, Action::CreateDepartment)?;

    let name: &str = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("name"),
            message: String::from("Department name must not be empty"),
        });
    }

    let department_id: i64 = persistence
        .create_department(name, &request.description, request.manager_id)
        .map_err(internal)?;

    Ok(CreateDepartmentResponse {
        department_id,
        name: name.to_string(),
        message: String::from("Department created"),
    })
}

/// Records a check-in for the caller on `today`.
///
/// A repeated check-in on the same day is not an error: the existing
/// record is returned untouched together with a warning.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn check_in(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: &CheckInRequest,
    today: Date,
    now: Time,
) -> Result<AttendanceActionResponse, ApiError> {
    let date: String = format_date(today).map_err(translate_domain_error)?;

    if let Some(existing) = persistence
        .get_attendance_for_date(user.employee_id, &date)
        .map_err(internal)?
    {
        return Ok(AttendanceActionResponse {
            record: existing.into(),
            warning: Some(String::from("Already checked in today")),
            message: String::from("Attendance unchanged"),
        });
    }

    let check_in_time: String = format_time(now).map_err(translate_domain_error)?;
    let notes: &str = request.notes.as_deref().unwrap_or("");

    persistence
        .insert_check_in(
            user.employee_id,
            &date,
            &check_in_time,
            AttendanceStatus::Present.as_str(),
            notes,
            Some(user.user_id),
        )
        .map_err(internal)?;

    let record: AttendanceData = persistence
        .get_attendance_for_date(user.employee_id, &date)
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Check-in record missing after insert"),
        })?;

    Ok(AttendanceActionResponse {
        record: record.into(),
        warning: None,
        message: format!("Checked in at {check_in_time}"),
    })
}

/// Records a check-out for the caller on `today`.
///
/// Working hours are computed once here, from the stored check-in time
/// to `now`, and persisted with the record. A repeated check-out is not
/// an error: the completed record is returned with a warning. A
/// check-out without a prior check-in is a rule violation.
///
/// # Errors
///
/// Returns an error if no check-in exists for `today` or the write
/// fails.
pub fn check_out(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    today: Date,
    now: Time,
) -> Result<AttendanceActionResponse, ApiError> {
    let date: String = format_date(today).map_err(translate_domain_error)?;

    let record: AttendanceData = persistence
        .get_attendance_for_date(user.employee_id, &date)
        .map_err(internal)?
        .ok_or_else(|| {
            translate_domain_error(DomainError::CheckOutWithoutCheckIn { date: today })
        })?;

    if record.check_out_time.is_some() {
        return Ok(AttendanceActionResponse {
            record: record.into(),
            warning: Some(String::from("Already checked out today")),
            message: String::from("Attendance unchanged"),
        });
    }

    let check_in_raw: &str = record.check_in_time.as_deref().ok_or_else(|| {
        translate_domain_error(DomainError::CheckOutWithoutCheckIn { date: today })
    })?;
    let check_in: Time = parse_time(check_in_raw).map_err(translate_domain_error)?;

    let working_hours: f64 = working_hours_between(
        PrimitiveDateTime::new(today, check_in),
        PrimitiveDateTime::new(today, now),
    );
    let check_out_time: String = format_time(now).map_err(translate_domain_error)?;

    persistence
        .set_check_out(record.attendance_id, &check_out_time, working_hours)
        .map_err(internal)?;

    let updated: AttendanceData = persistence
        .get_attendance_for_date(user.employee_id, &date)
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Attendance record missing after check-out"),
        })?;

    Ok(AttendanceActionResponse {
        record: updated.into(),
        warning: None,
        message: format!("Checked out at {check_out_time} ({working_hours} hours)"),
    })
}

/// Reports the caller's attendance phase for `today`.
///
/// # Errors
///
/// Returns an error if the query fails or stored times are malformed.
pub fn attendance_status(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    today: Date,
) -> Result<AttendanceStatusResponse, ApiError> {
    let date: String = format_date(today).map_err(translate_domain_error)?;

    let record: Option<AttendanceData> = persistence
        .get_attendance_for_date(user.employee_id, &date)
        .map_err(internal)?;

    let (check_in, check_out) = match &record {
        None => (None, None),
        Some(r) => {
            let check_in: Option<Time> = r
                .check_in_time
                .as_deref()
                .map(parse_time)
                .transpose()
                .map_err(translate_domain_error)?;
            let check_out: Option<Time> = r
                .check_out_time
                .as_deref()
                .map(parse_time)
                .transpose()
                .map_err(translate_domain_error)?;
            (check_in, check_out)
        }
    };

    let phase: &str = match AttendancePhase::from_times(check_in, check_out) {
        AttendancePhase::NoRecord => "no_record",
        AttendancePhase::CheckedIn => "checked_in",
        AttendancePhase::CheckedOut => "checked_out",
    };

    Ok(AttendanceStatusResponse {
        date,
        phase: phase.to_string(),
        record: record.map(Into::into),
    })
}

/// Returns the caller's attendance history with derived statistics.
///
/// The listing holds at most the 30 most recent records; the counters,
/// rate, and monthly breakdown always cover the full history.
///
/// # Errors
///
/// Returns an error if a query fails or stored rows are malformed.
pub fn my_attendance(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<MyAttendanceResponse, ApiError> {
    let rows: Vec<AttendanceData> = persistence
        .list_attendance_for_employee(user.employee_id, None)
        .map_err(internal)?;

    let mut parsed: Vec<(Date, AttendanceStatus)> = Vec::with_capacity(rows.len());
    for row in &rows {
        let date: Date = parse_date(&row.date).map_err(translate_domain_error)?;
        let status: AttendanceStatus =
            AttendanceStatus::from_str(&row.status).map_err(translate_domain_error)?;
        parsed.push((date, status));
    }

    let monthly: Vec<MonthlyAttendanceInfo> = monthly_breakdown(&parsed)
        .into_iter()
        .map(|m| MonthlyAttendanceInfo {
            year: m.year,
            month: m.month,
            present_count: m.present_count,
            total_count: m.total_count,
        })
        .collect();

    let stats = persistence
        .attendance_stats(user.employee_id)
        .map_err(internal)?;
    let rate: f64 = attendance_rate(
        u64::try_from(stats.present_days).unwrap_or(0),
        u64::try_from(stats.total_days).unwrap_or(0),
    );

    // Statistics cover the full history; the listing shows the most
    // recent 30 records.
    let mut records: Vec<AttendanceRecordInfo> = rows.into_iter().map(Into::into).collect();
    records.truncate(30);

    Ok(MyAttendanceResponse {
        records,
        total_days: stats.total_days,
        present_days: stats.present_days,
        attendance_rate: rate,
        monthly,
    })
}

/// Summarizes attendance per employee across the whole organization.
/// Restricted to elevated roles.
///
/// Each summary carries the employee's full-history totals and rate
/// plus their 31 most recent records.
///
/// # Errors
///
/// Returns an error if the caller lacks an elevated role or a query
/// fails.
pub fn attendance_overview(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<AttendanceOverviewResponse, ApiError> {
    authorize(user, Action::ViewAttendanceOverview)?;

    let entries: Vec<EmployeeDirectoryEntry> = persistence.list_employees().map_err(internal)?;

    let mut employees: Vec<EmployeeAttendanceSummary> = Vec::with_capacity(entries.len());
    for entry in entries {
        let employee_id: i64 = entry.employee.employee_id;
        let stats = persistence.attendance_stats(employee_id).map_err(internal)?;
        let recent_records: Vec<AttendanceRecordInfo> = persistence
            .list_attendance_for_employee(employee_id, Some(31))
            .map_err(internal)?
            .into_iter()
            .map(Into::into)
            .collect();
        let rate: f64 = attendance_rate(
            u64::try_from(stats.present_days).unwrap_or(0),
            u64::try_from(stats.total_days).unwrap_or(0),
        );

        employees.push(EmployeeAttendanceSummary {
            employee_id,
            employee_code: entry.employee.employee_code,
            username: entry.username,
            total_days: stats.total_days,
            present_days: stats.present_days,
            attendance_rate: rate,
            recent_records,
        });
    }

    let total: usize = employees.len();
    Ok(AttendanceOverviewResponse { employees, total })
}

/// Submits a leave request for the caller.
///
/// Validation runs in order: the leave type must be known, both dates
/// must parse, the start date must not be before `today`, and the end
/// date must not precede the start date. New requests always start
/// pending. Nothing prevents ranges that overlap the caller's existing
/// requests.
///
/// # Errors
///
/// Returns an error if validation fails or the insert fails.
pub fn submit_leave(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: &SubmitLeaveRequest,
    today: Date,
) -> Result<SubmitLeaveResponse, ApiError> {
    let leave_type: LeaveType =
        LeaveType::from_str(&request.leave_type).map_err(translate_domain_error)?;

    let (start_date, end_date) =
        validate_leave_dates(&request.start_date, &request.end_date, today)
            .map_err(translate_domain_error)?;

    let start: String = format_date(start_date).map_err(translate_domain_error)?;
    let end: String = format_date(end_date).map_err(translate_domain_error)?;

    let leave_request_id: i64 = persistence
        .create_leave_request(
            user.employee_id,
            leave_type.as_str(),
            &start,
            &end,
            &request.reason,
        )
        .map_err(internal)?;

    Ok(SubmitLeaveResponse {
        leave_request_id,
        status: LeaveStatus::Pending.as_str().to_string(),
        message: String::from("Leave request submitted"),
    })
}

/// Approves or rejects a leave request. Restricted to elevated roles.
///
/// Re-deciding a request that is already approved or rejected is
/// permitted and simply overwrites the status.
///
/// # Errors
///
/// Returns an error if the caller lacks an elevated role, the decision
/// string is unknown, or the request does not exist.
pub fn decide_leave(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    leave_request_id: i64,
    request: &DecideLeaveRequest,
) -> Result<DecideLeaveResponse, ApiError> {
    authorize(user, Action::DecideLeave)?;

    let decision: LeaveDecision =
        LeaveDecision::parse(&request.decision).map_err(translate_domain_error)?;
    let status: LeaveStatus = decision.resulting_status();

    persistence
        .get_leave_request(leave_request_id)
        .map_err(internal)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Leave request"),
            message: format!("Leave request {leave_request_id} does not exist"),
        })?;

    persistence
        .set_leave_status(leave_request_id, status.as_str(), user.user_id)
        .map_err(internal)?;

    info!(leave_request_id, status = status.as_str(), "Leave request decided");

    Ok(DecideLeaveResponse {
        leave_request_id,
        status: status.as_str().to_string(),
        message: format!("Leave request {status}"),
    })
}

/// Lists leave requests with scope-consistent status counters.
///
/// Elevated roles see every employee's requests; regular employees see
/// only their own. The optional filter narrows to one status; `all` (or
/// no filter) lists everything. The counters always cover the same
/// scope as the listing.
///
/// # Errors
///
/// Returns an error if the filter names an unknown status or a query
/// fails.
pub fn list_leave_requests(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    status_filter: Option<&str>,
) -> Result<ListLeaveRequestsResponse, ApiError> {
    let scope: Option<i64> = if authorize(user, Action::ViewAllLeaveRequests).is_ok() {
        None
    } else {
        Some(user.employee_id)
    };

    let (status, filter_name) = match status_filter {
        None | Some("all") => (None, String::from("all")),
        Some(raw) => {
            let status: LeaveStatus =
                LeaveStatus::from_str(raw).map_err(translate_domain_error)?;
            (Some(status), status.as_str().to_string())
        }
    };

    let requests: Vec<LeaveRequestInfo> = persistence
        .list_leave_requests(scope, status.map(|s| s.as_str()))
        .map_err(internal)?
        .into_iter()
        .map(leave_info)
        .collect();

    let counts = persistence.leave_status_counts(scope).map_err(internal)?;

    Ok(ListLeaveRequestsResponse {
        requests,
        filter: filter_name,
        total: counts.total,
        pending: counts.pending,
        approved: counts.approved,
        rejected: counts.rejected,
    })
}

/// Lists performance reviews.
///
/// Elevated roles see all reviews (optionally narrowed to one
/// employee); regular employees always see only their own.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn list_reviews(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    employee_filter: Option<i64>,
) -> Result<ListReviewsResponse, ApiError> {
    let scope: Option<i64> = if authorize(user, Action::ViewAllReviews).is_ok() {
        employee_filter
    } else {
        Some(user.employee_id)
    };

    let reviews: Vec<ReviewInfo> = persistence
        .list_reviews(scope)
        .map_err(internal)?
        .into_iter()
        .map(|detail| ReviewInfo {
            review_id: detail.review.review_id,
            employee_code: detail.employee_code,
            reviewer_username: detail.reviewer_username,
            review_date: detail.review.review_date,
            rating: detail.review.rating,
            comments: detail.review.comments,
            goals: detail.review.goals,
        })
        .collect();
    let total: usize = reviews.len();

    Ok(ListReviewsResponse { reviews, total })
}

/// Creates a performance review. Restricted to elevated roles.
///
/// # Errors
///
/// Returns an error if the caller lacks an elevated role, the rating or
/// date is invalid, or the reviewed employee does not exist.
pub fn create_review(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: &CreateReviewRequest,
) -> Result<CreateReviewResponse, ApiError> {
    authorize(user, Action::CreateReview)?;

    let rating: Rating = Rating::new(request.rating).map_err(translate_domain_error)?;
    let review_date: Date = parse_date(&request.review_date).map_err(translate_domain_error)?;
    let review_date: String = format_date(review_date).map_err(translate_domain_error)?;

    // The reviewed employee must exist.
    fetch_employee(persistence, request.employee_id)?;

    let review_id: i64 = persistence
        .create_review(
            request.employee_id,
            user.user_id,
            &review_date,
            rating.value(),
            &request.comments,
            &request.goals,
        )
        .map_err(internal)?;

    Ok(CreateReviewResponse {
        review_id,
        message: String::from("Review created"),
    })
}
