// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Represents the role assigned to an account.
///
/// Roles determine visibility and approval rights. `Hr` and `Admin`
/// have cross-employee visibility; `Employee` sees only their own data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular employee: self-service access only.
    #[default]
    Employee,
    /// HR staff: cross-employee visibility and approval rights.
    Hr,
    /// Administrator: same elevated rights as HR.
    Admin,
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Self::Employee),
            "hr" => Ok(Self::Hr),
            "admin" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Hr => "hr",
            Self::Admin => "admin",
        }
    }

    /// Returns whether this role carries elevated (HR/staff) rights.
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::Hr | Self::Admin)
    }
}

/// The category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    /// Annual leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal leave.
    Personal,
    /// Maternity leave.
    Maternity,
}

impl FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "annual" => Ok(Self::Annual),
            "sick" => Ok(Self::Sick),
            "personal" => Ok(Self::Personal),
            "maternity" => Ok(Self::Maternity),
            _ => Err(DomainError::InvalidLeaveType(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LeaveType {
    /// Converts this leave type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Personal => "personal",
            Self::Maternity => "maternity",
        }
    }
}

/// The workflow state of a leave request.
///
/// The only defined transitions are `Pending → Approved` and
/// `Pending → Rejected`. Both `Approved` and `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting an HR decision.
    #[default]
    Pending,
    /// Approved by HR. Terminal.
    Approved,
    /// Rejected by HR. Terminal.
    Rejected,
}

impl FromStr for LeaveStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidLeaveStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl LeaveStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns whether this status is terminal (no further transition defined).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// The attendance classification for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Present for the day.
    #[default]
    Present,
    /// Absent for the day.
    Absent,
    /// Arrived late.
    Late,
    /// Worked a half day.
    HalfDay,
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            "half_day" => Ok(Self::HalfDay),
            _ => Err(DomainError::InvalidAttendanceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AttendanceStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::HalfDay => "half_day",
        }
    }
}

/// Represents an employee's badge code (e.g., "EMP001").
///
/// The code is globally unique and doubles as the login username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeCode {
    /// The code value (non-empty, surrounding whitespace trimmed).
    value: String,
}

impl EmployeeCode {
    /// Creates a new `EmployeeCode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidEmployeeCode(
                "Employee ID must not be empty",
            ));
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for EmployeeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A performance review rating.
///
/// Ratings are integers from 1 through 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// The rating value (1-5).
    value: i32,
}

impl Rating {
    /// Creates a new `Rating`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rating is not between 1 and 5 inclusive.
    pub const fn new(value: i32) -> Result<Self, DomainError> {
        if value >= 1 && value <= 5 {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidRating { rating: value })
        }
    }

    /// Returns the rating value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }
}
