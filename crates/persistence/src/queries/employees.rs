// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employee directory queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{EmployeeData, EmployeeDirectoryEntry};
use crate::diesel_schema::{departments, employees, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for employee rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employees)]
struct EmployeeRow {
    employee_id: i64,
    user_id: i64,
    employee_code: String,
    department_id: Option<i64>,
    position: String,
    salary: f64,
    hire_date: String,
    address: String,
    phone: String,
}

impl From<EmployeeRow> for EmployeeData {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            user_id: row.user_id,
            employee_code: row.employee_code,
            department_id: row.department_id,
            position: row.position,
            salary: row.salary,
            hire_date: row.hire_date,
            address: row.address,
            phone: row.phone,
        }
    }
}

type DirectoryTuple = (EmployeeRow, String, Option<String>, String, Option<String>);

fn into_directory_entry(row: DirectoryTuple) -> EmployeeDirectoryEntry {
    let (employee, username, email, role, department_name) = row;
    EmployeeDirectoryEntry {
        employee: employee.into(),
        username,
        email,
        role,
        department_name,
    }
}

/// Retrieves an employee by its owning user ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_employee_by_user_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<EmployeeData>, PersistenceError> {
    debug!("Looking up employee by user ID: {}", user_id);

    let result: Result<EmployeeRow, diesel::result::Error> = employees::table
        .filter(employees::user_id.eq(user_id))
        .select(EmployeeRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row.into())),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a single directory entry by employee ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the employee is not found.
pub fn get_directory_entry(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<EmployeeDirectoryEntry>, PersistenceError> {
    debug!("Looking up directory entry for employee ID: {}", employee_id);

    let result: Result<DirectoryTuple, diesel::result::Error> = employees::table
        .inner_join(users::table)
        .left_join(departments::table)
        .filter(employees::employee_id.eq(employee_id))
        .select((
            EmployeeRow::as_select(),
            users::username,
            users::email,
            users::role,
            departments::name.nullable(),
        ))
        .first(conn);

    match result {
        Ok(row) => Ok(Some(into_directory_entry(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Lists all employees with their account and department names, ordered
/// by employee code.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_employees(
    conn: &mut SqliteConnection,
) -> Result<Vec<EmployeeDirectoryEntry>, PersistenceError> {
    debug!("Listing all employees");

    let rows: Vec<DirectoryTuple> = employees::table
        .inner_join(users::table)
        .left_join(departments::table)
        .select((
            EmployeeRow::as_select(),
            users::username,
            users::email,
            users::role,
            departments::name.nullable(),
        ))
        .order_by(employees::employee_code.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(into_directory_entry).collect())
}

/// Lists the most recently hired employees.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn recent_hires(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<EmployeeDirectoryEntry>, PersistenceError> {
    debug!("Listing {} most recent hires", limit);

    let rows: Vec<DirectoryTuple> = employees::table
        .inner_join(users::table)
        .left_join(departments::table)
        .select((
            EmployeeRow::as_select(),
            users::username,
            users::email,
            users::role,
            departments::name.nullable(),
        ))
        .order_by(employees::hire_date.desc())
        .then_order_by(employees::employee_id.desc())
        .limit(limit)
        .load(conn)?;

    Ok(rows.into_iter().map(into_directory_entry).collect())
}

/// Counts the total number of employees.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_employees(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = employees::table
        .select(count(employees::employee_id))
        .first(conn)?;

    Ok(count)
}
