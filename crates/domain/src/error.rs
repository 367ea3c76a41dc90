// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role string is not one of employee, hr, admin.
    InvalidRole(String),
    /// Leave type string is not recognized.
    InvalidLeaveType(String),
    /// Leave status string is not recognized.
    InvalidLeaveStatus(String),
    /// Attendance status string is not recognized.
    InvalidAttendanceStatus(String),
    /// Employee code is empty or invalid.
    InvalidEmployeeCode(&'static str),
    /// Performance review rating is out of range.
    InvalidRating {
        /// The invalid rating value.
        rating: i32,
    },
    /// Failed to parse a date or time from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Leave start date is before the submission date.
    StartDateInPast {
        /// The requested start date.
        start_date: Date,
        /// The submission date.
        today: Date,
    },
    /// Leave end date is before the start date.
    EndDateBeforeStart {
        /// The requested start date.
        start_date: Date,
        /// The requested end date.
        end_date: Date,
    },
    /// Check-out attempted with no check-in recorded for the day.
    CheckOutWithoutCheckIn {
        /// The attendance date.
        date: Date,
    },
    /// A leave decision was attempted on a record in a terminal state.
    ///
    /// Not raised by the workflow itself (re-deciding terminal requests
    /// is deliberately permitted); available for callers that opt in.
    LeaveRequestAlreadyDecided {
        /// The current terminal status.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidLeaveType(msg) => write!(f, "Invalid leave type: {msg}"),
            Self::InvalidLeaveStatus(msg) => write!(f, "Invalid leave status: {msg}"),
            Self::InvalidAttendanceStatus(msg) => {
                write!(f, "Invalid attendance status: {msg}")
            }
            Self::InvalidEmployeeCode(msg) => write!(f, "Invalid employee ID: {msg}"),
            Self::InvalidRating { rating } => {
                write!(f, "Invalid rating: {rating}. Must be between 1 and 5")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::StartDateInPast { start_date, today } => {
                write!(
                    f,
                    "Start date cannot be in the past: {start_date} is before {today}"
                )
            }
            Self::EndDateBeforeStart {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date cannot be before start date: {end_date} is before {start_date}"
                )
            }
            Self::CheckOutWithoutCheckIn { date } => {
                write!(f, "No check-in recorded for {date}; check in first")
            }
            Self::LeaveRequestAlreadyDecided { status } => {
                write!(f, "Leave request is already {status}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
