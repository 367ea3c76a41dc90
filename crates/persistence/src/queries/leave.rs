// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave request queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{LeaveRequestData, LeaveRequestDetail, LeaveStatusCounts};
use crate::diesel_schema::{employees, leave_requests, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for leave request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = leave_requests)]
struct LeaveRequestRow {
    leave_request_id: i64,
    employee_id: i64,
    leave_type: String,
    start_date: String,
    end_date: String,
    reason: String,
    status: String,
    approved_by: Option<i64>,
    created_at: String,
}

impl From<LeaveRequestRow> for LeaveRequestData {
    fn from(row: LeaveRequestRow) -> Self {
        Self {
            leave_request_id: row.leave_request_id,
            employee_id: row.employee_id,
            leave_type: row.leave_type,
            start_date: row.start_date,
            end_date: row.end_date,
            reason: row.reason,
            status: row.status,
            approved_by: row.approved_by,
            created_at: row.created_at,
        }
    }
}

/// Retrieves a leave request by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the leave request is not found.
pub fn get_leave_request(
    conn: &mut SqliteConnection,
    leave_request_id: i64,
) -> Result<Option<LeaveRequestData>, PersistenceError> {
    debug!("Looking up leave request by ID: {}", leave_request_id);

    let result: Result<LeaveRequestRow, diesel::result::Error> = leave_requests::table
        .filter(leave_requests::leave_request_id.eq(leave_request_id))
        .select(LeaveRequestRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists leave requests, newest first, joined with the requesting
/// employee.
///
/// The scope narrows to one employee when `employee_id` is given, and to
/// one status when `status` is given.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_leave_requests(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    status: Option<&str>,
) -> Result<Vec<LeaveRequestDetail>, PersistenceError> {
    debug!(?employee_id, ?status, "Listing leave requests");

    let mut query = leave_requests::table
        .inner_join(employees::table.inner_join(users::table))
        .select((
            LeaveRequestRow::as_select(),
            employees::employee_code,
            users::username,
        ))
        .order_by(leave_requests::created_at.desc())
        .then_order_by(leave_requests::leave_request_id.desc())
        .into_boxed();

    if let Some(employee_id) = employee_id {
        query = query.filter(leave_requests::employee_id.eq(employee_id));
    }
    if let Some(status) = status {
        query = query.filter(leave_requests::status.eq(status.to_string()));
    }

    let rows: Vec<(LeaveRequestRow, String, String)> = query.load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(request, employee_code, username)| LeaveRequestDetail {
            request: request.into(),
            employee_code,
            username,
        })
        .collect())
}

fn count_leave_requests(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
    status: Option<&str>,
) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let mut query = leave_requests::table
        .select(count(leave_requests::leave_request_id))
        .into_boxed();

    if let Some(employee_id) = employee_id {
        query = query.filter(leave_requests::employee_id.eq(employee_id));
    }
    if let Some(status) = status {
        query = query.filter(leave_requests::status.eq(status.to_string()));
    }

    Ok(query.first(conn)?)
}

/// Computes per-status counters over the given employee scope.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn leave_status_counts(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
) -> Result<LeaveStatusCounts, PersistenceError> {
    debug!(?employee_id, "Computing leave status counts");

    Ok(LeaveStatusCounts {
        total: count_leave_requests(conn, employee_id, None)?,
        pending: count_leave_requests(conn, employee_id, Some("pending"))?,
        approved: count_leave_requests(conn, employee_id, Some("approved"))?,
        rejected: count_leave_requests(conn, employee_id, Some("rejected"))?,
    })
}

/// Counts all pending leave requests.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_pending_leave(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    count_leave_requests(conn, None, Some("pending"))
}
