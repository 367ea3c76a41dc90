// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave request mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::leave_requests;
use crate::error::PersistenceError;

/// Inserts a new leave request in the pending state.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_leave_request(
    conn: &mut SqliteConnection,
    employee_id: i64,
    leave_type: &str,
    start_date: &str,
    end_date: &str,
    reason: &str,
) -> Result<i64, PersistenceError> {
    info!(employee_id, leave_type, "Submitting leave request");

    diesel::insert_into(leave_requests::table)
        .values((
            leave_requests::employee_id.eq(employee_id),
            leave_requests::leave_type.eq(leave_type),
            leave_requests::start_date.eq(start_date),
            leave_requests::end_date.eq(end_date),
            leave_requests::reason.eq(reason),
        ))
        .execute(conn)?;

    let leave_request_id: i64 = get_last_insert_rowid(conn)?;

    info!(leave_request_id, "Leave request submitted");
    Ok(leave_request_id)
}

/// Sets the status of a leave request and records who decided it.
///
/// # Errors
///
/// Returns an error if the leave request does not exist or the update
/// fails.
pub fn set_leave_status(
    conn: &mut SqliteConnection,
    leave_request_id: i64,
    status: &str,
    approved_by: i64,
) -> Result<(), PersistenceError> {
    info!(leave_request_id, status, "Deciding leave request");

    let rows_affected: usize = diesel::update(leave_requests::table)
        .filter(leave_requests::leave_request_id.eq(leave_request_id))
        .set((
            leave_requests::status.eq(status),
            leave_requests::approved_by.eq(approved_by),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::LeaveRequestNotFound(leave_request_id));
    }

    Ok(())
}
