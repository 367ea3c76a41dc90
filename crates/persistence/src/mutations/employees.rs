// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee profile mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::{employees, users};
use crate::error::PersistenceError;

/// Updates the editable profile fields for a user.
///
/// The email and phone live on the account row while the position,
/// department assignment, and address live on the employee row, so both
/// updates run in one transaction. Passing `None` for the department
/// clears the assignment.
///
/// # Errors
///
/// Returns an error if the user does not exist, the email is already
/// taken by another account, the department does not exist, or the
/// database update fails.
pub fn update_profile(
    conn: &mut SqliteConnection,
    user_id: i64,
    email: Option<&str>,
    position: &str,
    department_id: Option<i64>,
    phone: &str,
    address: &str,
) -> Result<(), PersistenceError> {
    info!("Updating profile for user ID: {}", user_id);

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let rows_affected: usize = diesel::update(users::table)
            .filter(users::user_id.eq(user_id))
            .set((users::email.eq(email), users::phone.eq(phone)))
            .execute(conn)?;

        if rows_affected == 0 {
            return Err(PersistenceError::UserNotFound(format!(
                "User with ID {user_id} not found"
            )));
        }

        diesel::update(employees::table)
            .filter(employees::user_id.eq(user_id))
            .set((
                employees::position.eq(position),
                employees::department_id.eq(department_id),
                employees::phone.eq(phone),
                employees::address.eq(address),
            ))
            .execute(conn)?;

        Ok(())
    })
}
