// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Centralized authorization policy.
//!
//! Every role-gated operation names an [`Action`] and asks
//! [`authorize`] for a decision. Handlers never test roles directly, so
//! the whole access matrix is readable (and changeable) in one place.

use crate::auth::AuthenticatedUser;
use crate::error::AuthError;

/// A role-gated operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List every employee in the directory.
    ViewEmployeeDirectory,
    /// View one employee's detail record.
    ///
    /// Deliberately open to every authenticated account, which is
    /// broader than the directory listing.
    ViewEmployeeDetail,
    /// Create a department.
    CreateDepartment,
    /// View the attendance records of all employees for a date.
    ViewAttendanceOverview,
    /// Approve or reject a leave request.
    DecideLeave,
    /// View leave requests across all employees.
    ViewAllLeaveRequests,
    /// Create a performance review.
    CreateReview,
    /// View performance reviews across all employees.
    ViewAllReviews,
}

impl Action {
    /// The action name used in authorization failure messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ViewEmployeeDirectory => "view_employee_directory",
            Self::ViewEmployeeDetail => "view_employee_detail",
            Self::CreateDepartment => "create_department",
            Self::ViewAttendanceOverview => "view_attendance_overview",
            Self::DecideLeave => "decide_leave",
            Self::ViewAllLeaveRequests => "view_all_leave_requests",
            Self::CreateReview => "create_review",
            Self::ViewAllReviews => "view_all_reviews",
        }
    }

    /// Whether the action requires an elevated (HR or admin) role.
    #[must_use]
    pub const fn requires_elevated(self) -> bool {
        !matches!(self, Self::ViewEmployeeDetail)
    }
}

/// Checks whether a user may perform an action.
///
/// # Errors
///
/// Returns an error if the action requires an elevated role and the
/// user does not have one.
pub fn authorize(user: &AuthenticatedUser, action: Action) -> Result<(), AuthError> {
    if action.requires_elevated() && !user.role.is_elevated() {
        return Err(AuthError::Unauthorized {
            action: String::from(action.name()),
            required_role: String::from("hr"),
        });
    }
    Ok(())
}
