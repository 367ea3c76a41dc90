// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave request submission validation and decision transitions.

use time::Date;

use crate::dates::parse_date;
use crate::error::DomainError;
use crate::types::LeaveStatus;

/// An HR decision on a pending leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    /// Approve the request.
    Approve,
    /// Reject the request.
    Reject,
}

impl LeaveDecision {
    /// Parses a decision from its wire representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is neither `approve` nor `reject`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            _ => Err(DomainError::InvalidLeaveStatus(format!(
                "Unknown decision: {s}"
            ))),
        }
    }

    /// The terminal status this decision produces.
    #[must_use]
    pub const fn resulting_status(&self) -> LeaveStatus {
        match self {
            Self::Approve => LeaveStatus::Approved,
            Self::Reject => LeaveStatus::Rejected,
        }
    }
}

/// Validates a leave request date range against the submission date.
///
/// Checks run in order: both strings must parse as calendar dates, the
/// start date must not be in the past, and the end date must not precede
/// the start date. Note that nothing here prevents ranges that overlap an
/// employee's existing requests.
///
/// # Arguments
///
/// * `start_raw` - The requested start date (`YYYY-MM-DD`)
/// * `end_raw` - The requested end date (`YYYY-MM-DD`)
/// * `today` - The submission date
///
/// # Errors
///
/// Returns an error if a date fails to parse, the start date is before
/// `today`, or the end date is before the start date.
pub fn validate_leave_dates(
    start_raw: &str,
    end_raw: &str,
    today: Date,
) -> Result<(Date, Date), DomainError> {
    let start_date: Date = parse_date(start_raw)?;
    let end_date: Date = parse_date(end_raw)?;

    if start_date < today {
        return Err(DomainError::StartDateInPast { start_date, today });
    }

    if end_date < start_date {
        return Err(DomainError::EndDateBeforeStart {
            start_date,
            end_date,
        });
    }

    Ok((start_date, end_date))
}
