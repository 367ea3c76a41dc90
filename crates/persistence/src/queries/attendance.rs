// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{AttendanceData, AttendanceStats};
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;

/// Diesel Queryable struct for attendance rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = attendance)]
struct AttendanceRow {
    attendance_id: i64,
    employee_id: i64,
    date: String,
    status: String,
    check_in_time: Option<String>,
    check_out_time: Option<String>,
    working_hours: Option<f64>,
    notes: String,
    recorded_by: Option<i64>,
}

impl From<AttendanceRow> for AttendanceData {
    fn from(row: AttendanceRow) -> Self {
        Self {
            attendance_id: row.attendance_id,
            employee_id: row.employee_id,
            date: row.date,
            status: row.status,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            working_hours: row.working_hours,
            notes: row.notes,
            recorded_by: row.recorded_by,
        }
    }
}

/// Retrieves the attendance record for an employee on a specific date.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no record exists for that date.
pub fn get_attendance_for_date(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
) -> Result<Option<AttendanceData>, PersistenceError> {
    debug!(employee_id, date, "Looking up attendance record");

    let result: Result<AttendanceRow, diesel::result::Error> = attendance::table
        .filter(attendance::employee_id.eq(employee_id))
        .filter(attendance::date.eq(date))
        .select(AttendanceRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists attendance records for an employee, most recent date first.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_attendance_for_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
    limit: Option<i64>,
) -> Result<Vec<AttendanceData>, PersistenceError> {
    debug!(employee_id, "Listing attendance records");

    let mut query = attendance::table
        .filter(attendance::employee_id.eq(employee_id))
        .select(AttendanceRow::as_select())
        .order_by(attendance::date.desc())
        .into_boxed();

    if let Some(limit) = limit {
        query = query.limit(limit);
    }

    let rows: Vec<AttendanceRow> = query.load(conn)?;

    Ok(rows.into_iter().map(Into::into).collect())
}

/// Computes total and present-day counters for an employee.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn attendance_stats(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<AttendanceStats, PersistenceError> {
    use diesel::dsl::count;

    debug!(employee_id, "Computing attendance stats");

    let total_days: i64 = attendance::table
        .filter(attendance::employee_id.eq(employee_id))
        .select(count(attendance::attendance_id))
        .first(conn)?;

    let present_days: i64 = attendance::table
        .filter(attendance::employee_id.eq(employee_id))
        .filter(attendance::status.eq("present"))
        .select(count(attendance::attendance_id))
        .first(conn)?;

    Ok(AttendanceStats {
        total_days,
        present_days,
    })
}
