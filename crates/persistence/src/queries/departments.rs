// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::DepartmentData;
use crate::diesel_schema::departments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for department rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = departments)]
struct DepartmentRow {
    department_id: i64,
    name: String,
    description: String,
    manager_id: Option<i64>,
}

/// Lists all departments ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_departments(
    conn: &mut SqliteConnection,
) -> Result<Vec<DepartmentData>, PersistenceError> {
    debug!("Listing all departments");

    let rows: Vec<DepartmentRow> = departments::table
        .select(DepartmentRow::as_select())
        .order_by(departments::name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| DepartmentData {
            department_id: row.department_id,
            name: row.name,
            description: row.description,
            manager_id: row.manager_id,
        })
        .collect())
}

/// Counts the total number of departments.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_departments(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = departments::table
        .select(count(departments::department_id))
        .first(conn)?;

    Ok(count)
}
