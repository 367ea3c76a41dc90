// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{employees, sessions, users};
use crate::error::PersistenceError;

/// Creates a user account together with its employee profile.
///
/// Both inserts run in one transaction: an account without an employee
/// profile (or vice versa) must never become visible. The new employee
/// starts with the username as its employee code, the position
/// "Employee", a salary of zero, and no department assignment.
///
/// Returns the new `(user_id, employee_id)` pair.
///
/// # Errors
///
/// Returns an error if the username or email is already taken, or if the
/// password cannot be hashed.
pub fn create_account(
    conn: &mut SqliteConnection,
    username: &str,
    email: Option<&str>,
    password: &str,
    role: &str,
    hire_date: &str,
) -> Result<(i64, i64), PersistenceError> {
    info!("Creating account for username: {}", username);

    // Hash the password using bcrypt
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::insert_into(users::table)
            .values((
                users::username.eq(username),
                users::email.eq(email),
                users::password_hash.eq(&password_hash),
                users::role.eq(role),
            ))
            .execute(conn)?;

        let user_id: i64 = get_last_insert_rowid(conn)?;

        diesel::insert_into(employees::table)
            .values((
                employees::user_id.eq(user_id),
                employees::employee_code.eq(username),
                employees::position.eq("Employee"),
                employees::salary.eq(0.0),
                employees::hire_date.eq(hire_date),
            ))
            .execute(conn)?;

        let employee_id: i64 = get_last_insert_rowid(conn)?;

        info!(user_id, employee_id, "Account created");
        Ok((user_id, employee_id))
    })
}

/// Updates the last login timestamp for a user.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for user ID: {}", user_id);

    diesel::update(users::table)
        .filter(users::user_id.eq(user_id))
        .set(users::last_login_at.eq(diesel::dsl::sql::<
            diesel::sql_types::Nullable<diesel::sql_types::Text>,
        >("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Creates a new session for a user.
///
/// # Errors
///
/// Returns an error if the session cannot be created.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    user_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    debug!(
        "Creating session for user ID: {} with expiration: {}",
        user_id, expires_at
    );

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::user_id.eq(user_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;

    debug!(session_id, user_id, "Session created");
    Ok(session_id)
}

/// Updates the last activity timestamp for a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    debug!("Updating last_activity_at for session ID: {}", session_id);

    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(
            sessions::last_activity_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    Ok(())
}

/// Deletes a session by token.
///
/// This is used for logout operations.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    debug!("Deleting session by token");

    diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    Ok(())
}

/// Deletes all expired sessions.
///
/// Runs opportunistically on login so stale sessions do not accumulate.
///
/// # Errors
///
/// Returns an error if the database delete fails.
pub fn delete_expired_sessions(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    debug!("Deleting expired sessions");

    let rows_affected: usize = diesel::delete(sessions::table)
        .filter(
            sessions::expires_at.lt(diesel::dsl::sql::<diesel::sql_types::Text>(
                "CURRENT_TIMESTAMP",
            )),
        )
        .execute(conn)?;

    info!("Deleted {} expired sessions", rows_affected);
    Ok(rows_affected)
}
