// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Creates a new department.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_department(
    conn: &mut SqliteConnection,
    name: &str,
    description: &str,
    manager_id: Option<i64>,
) -> Result<i64, PersistenceError> {
    info!("Creating department: {}", name);

    diesel::insert_into(departments::table)
        .values((
            departments::name.eq(name),
            departments::description.eq(description),
            departments::manager_id.eq(manager_id),
        ))
        .execute(conn)?;

    let department_id: i64 = get_last_insert_rowid(conn)?;

    info!(department_id, "Department created");
    Ok(department_id)
}
