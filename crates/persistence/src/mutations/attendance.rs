// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::attendance;
use crate::error::PersistenceError;

/// Records a check-in for an employee on a given date.
///
/// The `(employee_id, date)` pair is unique: a second check-in on the
/// same day fails with a uniqueness violation.
///
/// # Errors
///
/// Returns an error if a record for this employee and date already
/// exists, or if the insert fails.
pub fn insert_check_in(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: &str,
    check_in_time: &str,
    status: &str,
    notes: &str,
    recorded_by: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!(employee_id, date, "Recording check-in");

    diesel::insert_into(attendance::table)
        .values((
            attendance::employee_id.eq(employee_id),
            attendance::date.eq(date),
            attendance::status.eq(status),
            attendance::check_in_time.eq(check_in_time),
            attendance::notes.eq(notes),
            attendance::recorded_by.eq(recorded_by),
        ))
        .execute(conn)?;

    let attendance_id: i64 = get_last_insert_rowid(conn)?;

    info!(attendance_id, "Check-in recorded");
    Ok(attendance_id)
}

/// Records the check-out time and computed working hours on an existing
/// attendance record.
///
/// # Errors
///
/// Returns an error if the record does not exist or the update fails.
pub fn set_check_out(
    conn: &mut SqliteConnection,
    attendance_id: i64,
    check_out_time: &str,
    working_hours: f64,
) -> Result<(), PersistenceError> {
    info!(attendance_id, "Recording check-out");

    let rows_affected: usize = diesel::update(attendance::table)
        .filter(attendance::attendance_id.eq(attendance_id))
        .set((
            attendance::check_out_time.eq(check_out_time),
            attendance::working_hours.eq(working_hours),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Attendance record {attendance_id} not found"
        )));
    }

    Ok(())
}
