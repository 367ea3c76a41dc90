// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod attendance;
mod dates;
mod error;
mod leave;
mod types;

#[cfg(test)]
mod tests;

pub use attendance::{
    AttendancePhase, MonthlyAttendance, attendance_rate, monthly_breakdown, working_hours_between,
};
pub use dates::{
    format_date, format_datetime, format_time, parse_date, parse_datetime, parse_time,
};
pub use error::DomainError;
pub use leave::{LeaveDecision, validate_leave_dates};
pub use types::{AttendanceStatus, EmployeeCode, LeaveStatus, LeaveType, Rating, Role};
