// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance state machine and derived statistics.
//!
//! Each (employee, date) pair moves through at most three states:
//! `NoRecord → CheckedIn → CheckedOut`. Working hours are computed once,
//! at check-out, and stored; they are never recomputed on read.

use time::{Date, PrimitiveDateTime, Time};

use crate::types::AttendanceStatus;

/// The per-day attendance state for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendancePhase {
    /// No attendance record exists for the day.
    NoRecord,
    /// Checked in; check-out still possible.
    CheckedIn,
    /// Checked in and out; the record is complete.
    CheckedOut,
}

impl AttendancePhase {
    /// Derives the phase from the stored check-in/check-out times.
    #[must_use]
    pub const fn from_times(check_in: Option<Time>, check_out: Option<Time>) -> Self {
        match (check_in, check_out) {
            (None, _) => Self::NoRecord,
            (Some(_), None) => Self::CheckedIn,
            (Some(_), Some(_)) => Self::CheckedOut,
        }
    }

    /// Returns whether a check-out is currently possible.
    #[must_use]
    pub const fn can_check_out(&self) -> bool {
        matches!(self, Self::CheckedIn)
    }
}

/// Attendance counts for one month, most recent first in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyAttendance {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u8,
    /// Records with status `present` in this month.
    pub present_count: u32,
    /// All records in this month.
    pub total_count: u32,
}

/// Computes worked hours between a check-in and a check-out instant.
///
/// The result is elapsed seconds divided by 3600, rounded to two
/// decimals. The check-in instant is the record's date combined with its
/// stored check-in time; the check-out instant is the moment the
/// check-out is performed.
#[must_use]
pub fn working_hours_between(check_in: PrimitiveDateTime, check_out: PrimitiveDateTime) -> f64 {
    let hours: f64 = (check_out - check_in).as_seconds_f64() / 3600.0;
    round_two(hours)
}

/// Computes an attendance rate percentage, rounded to one decimal.
///
/// Returns exactly `0.0` when there are no records, rather than
/// a division error.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn attendance_rate(present_days: u64, total_days: u64) -> f64 {
    if total_days == 0 {
        return 0.0;
    }
    let rate: f64 = present_days as f64 / total_days as f64 * 100.0;
    round_one(rate)
}

/// Groups attendance records by (year, month) and counts present vs total.
///
/// Groups are ordered year descending, then month descending, and limited
/// to the six most recent months that have any records.
#[must_use]
pub fn monthly_breakdown(records: &[(Date, AttendanceStatus)]) -> Vec<MonthlyAttendance> {
    let mut groups: Vec<MonthlyAttendance> = Vec::new();

    for (date, status) in records {
        let year: i32 = date.year();
        let month: u8 = u8::from(date.month());

        let entry: &mut MonthlyAttendance = match groups
            .iter_mut()
            .find(|g| g.year == year && g.month == month)
        {
            Some(existing) => existing,
            None => {
                groups.push(MonthlyAttendance {
                    year,
                    month,
                    present_count: 0,
                    total_count: 0,
                });
                // Just pushed, so the vec is non-empty.
                #[allow(clippy::unwrap_used)]
                groups.last_mut().unwrap()
            }
        };

        entry.total_count += 1;
        if *status == AttendanceStatus::Present {
            entry.present_count += 1;
        }
    }

    groups.sort_by(|a, b| b.year.cmp(&a.year).then(b.month.cmp(&a.month)));
    groups.truncate(6);
    groups
}

/// Rounds to two decimal places.
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to one decimal place.
fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
