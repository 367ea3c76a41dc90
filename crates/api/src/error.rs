// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use staffline_domain::DomainError;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the user does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Malformed input maps to `InvalidInput`; violations of
/// business rules on well-formed input map to `DomainRuleViolation`.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidRole(value) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("Unknown role: {value}"),
        },
        DomainError::InvalidLeaveType(value) => ApiError::InvalidInput {
            field: String::from("leave_type"),
            message: format!("Unknown leave type: {value}"),
        },
        DomainError::InvalidLeaveStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown leave status: {value}"),
        },
        DomainError::InvalidAttendanceStatus(value) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unknown attendance status: {value}"),
        },
        DomainError::InvalidEmployeeCode(msg) => ApiError::InvalidInput {
            field: String::from("employee_code"),
            message: msg.to_string(),
        },
        DomainError::InvalidRating { rating } => ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Invalid rating: {rating}. Must be between 1 and 5"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::StartDateInPast { start_date, today } => ApiError::DomainRuleViolation {
            rule: String::from("leave_start_not_in_past"),
            message: format!("Start date {start_date} is before today ({today})"),
        },
        DomainError::EndDateBeforeStart {
            start_date,
            end_date,
        } => ApiError::DomainRuleViolation {
            rule: String::from("leave_end_not_before_start"),
            message: format!("End date {end_date} is before start date {start_date}"),
        },
        DomainError::CheckOutWithoutCheckIn { date } => ApiError::DomainRuleViolation {
            rule: String::from("check_out_requires_check_in"),
            message: format!("No check-in recorded for {date}"),
        },
        DomainError::LeaveRequestAlreadyDecided { status } => ApiError::DomainRuleViolation {
            rule: String::from("leave_request_already_decided"),
            message: format!("Leave request is already {status}"),
        },
    }
}
