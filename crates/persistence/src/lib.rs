// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Staffline HR system.
//!
//! This crate provides `SQLite` persistence for accounts, sessions,
//! the employee directory, attendance records, leave requests, and
//! performance reviews. It is built on Diesel with embedded migrations.
//!
//! ## Layout
//!
//! - `backend/` — connection initialization, migrations, PRAGMA handling
//! - `queries/` — read-path operations in Diesel DSL
//! - `mutations/` — write-path operations; multi-table writes are
//!   transactional
//!
//! ## Testing Philosophy
//!
//! Tests run against unique shared in-memory databases so they are fast,
//! deterministic, and fully isolated from each other.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique
/// sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    AttendanceData, AttendanceStats, DepartmentData, EmployeeData,
    EmployeeDirectoryEntry, LeaveRequestData, LeaveRequestDetail, LeaveStatusCounts,
    PerformanceReviewData, ReviewDetail, SessionData, UserData,
};
pub use error::PersistenceError;
pub use queries::users::verify_password;

/// Persistence adapter over a single `SQLite` connection.
///
/// All reads and writes go through this adapter; callers never touch the
/// connection or the schema directly.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based
    /// collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests are isolated.
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // WAL gives better read concurrency for file databases
        backend::sqlite::enable_wal_mode(&mut conn)?;

        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    // --- Accounts and sessions ---

    /// Creates a user account together with its employee profile.
    ///
    /// Returns the new `(user_id, employee_id)` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the username or email is already taken, or if
    /// the write fails.
    pub fn create_account(
        &mut self,
        username: &str,
        email: Option<&str>,
        password: &str,
        role: &str,
        hire_date: &str,
    ) -> Result<(i64, i64), PersistenceError> {
        mutations::users::create_account(&mut self.conn, username, email, password, role, hire_date)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_username(&mut self.conn, username)
    }

    /// Retrieves a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_email(&mut self.conn, email)
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// Updates the last login timestamp for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_last_login(&mut self.conn, user_id)
    }

    /// Creates a new session for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be created.
    pub fn create_session(
        &mut self,
        session_token: &str,
        user_id: i64,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_session(&mut self.conn, session_token, user_id, expires_at)
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::users::get_session_by_token(&mut self.conn, session_token)
    }

    /// Updates the last activity timestamp for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::users::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::users::delete_session(&mut self.conn, session_token)
    }

    /// Deletes all expired sessions, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        mutations::users::delete_expired_sessions(&mut self.conn)
    }

    // --- Employee directory ---

    /// Updates the editable profile fields for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the write fails.
    pub fn update_profile(
        &mut self,
        user_id: i64,
        email: Option<&str>,
        position: &str,
        department_id: Option<i64>,
        phone: &str,
        address: &str,
    ) -> Result<(), PersistenceError> {
        mutations::employees::update_profile(
            &mut self.conn,
            user_id,
            email,
            position,
            department_id,
            phone,
            address,
        )
    }

    /// Retrieves an employee by its owning user ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_employee_by_user_id(
        &mut self,
        user_id: i64,
    ) -> Result<Option<EmployeeData>, PersistenceError> {
        queries::employees::get_employee_by_user_id(&mut self.conn, user_id)
    }

    /// Retrieves a single directory entry by employee ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_directory_entry(
        &mut self,
        employee_id: i64,
    ) -> Result<Option<EmployeeDirectoryEntry>, PersistenceError> {
        queries::employees::get_directory_entry(&mut self.conn, employee_id)
    }

    /// Lists all employees with account and department names.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_employees(&mut self) -> Result<Vec<EmployeeDirectoryEntry>, PersistenceError> {
        queries::employees::list_employees(&mut self.conn)
    }

    /// Lists the most recently hired employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn recent_hires(
        &mut self,
        limit: i64,
    ) -> Result<Vec<EmployeeDirectoryEntry>, PersistenceError> {
        queries::employees::recent_hires(&mut self.conn, limit)
    }

    /// Counts the total number of employees.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_employees(&mut self) -> Result<i64, PersistenceError> {
        queries::employees::count_employees(&mut self.conn)
    }

    // --- Departments ---

    /// Creates a new department.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_department(
        &mut self,
        name: &str,
        description: &str,
        manager_id: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::departments::create_department(&mut self.conn, name, description, manager_id)
    }

    /// Lists all departments ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_departments(&mut self) -> Result<Vec<DepartmentData>, PersistenceError> {
        queries::departments::list_departments(&mut self.conn)
    }

    /// Counts the total number of departments.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_departments(&mut self) -> Result<i64, PersistenceError> {
        queries::departments::count_departments(&mut self.conn)
    }

    // --- Attendance ---

    /// Records a check-in for an employee on a given date.
    ///
    /// # Errors
    ///
    /// Returns an error if a record for this employee and date already
    /// exists, or if the insert fails.
    pub fn insert_check_in(
        &mut self,
        employee_id: i64,
        date: &str,
        check_in_time: &str,
        status: &str,
        notes: &str,
        recorded_by: Option<i64>,
    ) -> Result<i64, PersistenceError> {
        mutations::attendance::insert_check_in(
            &mut self.conn,
            employee_id,
            date,
            check_in_time,
            status,
            notes,
            recorded_by,
        )
    }

    /// Records the check-out time and working hours on an attendance
    /// record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the update fails.
    pub fn set_check_out(
        &mut self,
        attendance_id: i64,
        check_out_time: &str,
        working_hours: f64,
    ) -> Result<(), PersistenceError> {
        mutations::attendance::set_check_out(
            &mut self.conn,
            attendance_id,
            check_out_time,
            working_hours,
        )
    }

    /// Retrieves the attendance record for an employee on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_attendance_for_date(
        &mut self,
        employee_id: i64,
        date: &str,
    ) -> Result<Option<AttendanceData>, PersistenceError> {
        queries::attendance::get_attendance_for_date(&mut self.conn, employee_id, date)
    }

    /// Lists attendance records for an employee, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_attendance_for_employee(
        &mut self,
        employee_id: i64,
        limit: Option<i64>,
    ) -> Result<Vec<AttendanceData>, PersistenceError> {
        queries::attendance::list_attendance_for_employee(&mut self.conn, employee_id, limit)
    }

    /// Computes total and present-day counters for an employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn attendance_stats(
        &mut self,
        employee_id: i64,
    ) -> Result<AttendanceStats, PersistenceError> {
        queries::attendance::attendance_stats(&mut self.conn, employee_id)
    }

    // --- Leave requests ---

    /// Inserts a new leave request in the pending state.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_leave_request(
        &mut self,
        employee_id: i64,
        leave_type: &str,
        start_date: &str,
        end_date: &str,
        reason: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::leave::insert_leave_request(
            &mut self.conn,
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason,
        )
    }

    /// Retrieves a leave request by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_leave_request(
        &mut self,
        leave_request_id: i64,
    ) -> Result<Option<LeaveRequestData>, PersistenceError> {
        queries::leave::get_leave_request(&mut self.conn, leave_request_id)
    }

    /// Sets the status of a leave request and records who decided it.
    ///
    /// # Errors
    ///
    /// Returns an error if the leave request does not exist or the
    /// update fails.
    pub fn set_leave_status(
        &mut self,
        leave_request_id: i64,
        status: &str,
        approved_by: i64,
    ) -> Result<(), PersistenceError> {
        mutations::leave::set_leave_status(&mut self.conn, leave_request_id, status, approved_by)
    }

    /// Lists leave requests, optionally scoped to one employee and one
    /// status.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_leave_requests(
        &mut self,
        employee_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Vec<LeaveRequestDetail>, PersistenceError> {
        queries::leave::list_leave_requests(&mut self.conn, employee_id, status)
    }

    /// Computes per-status counters over the given employee scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn leave_status_counts(
        &mut self,
        employee_id: Option<i64>,
    ) -> Result<LeaveStatusCounts, PersistenceError> {
        queries::leave::leave_status_counts(&mut self.conn, employee_id)
    }

    /// Counts all pending leave requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_pending_leave(&mut self) -> Result<i64, PersistenceError> {
        queries::leave::count_pending_leave(&mut self.conn)
    }

    // --- Performance reviews ---

    /// Inserts a new performance review.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_review(
        &mut self,
        employee_id: i64,
        reviewer_id: i64,
        review_date: &str,
        rating: i32,
        comments: &str,
        goals: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::reviews::insert_review(
            &mut self.conn,
            employee_id,
            reviewer_id,
            review_date,
            rating,
            comments,
            goals,
        )
    }

    /// Lists performance reviews, optionally scoped to one employee.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reviews(
        &mut self,
        employee_id: Option<i64>,
    ) -> Result<Vec<ReviewDetail>, PersistenceError> {
        queries::reviews::list_reviews(&mut self.conn, employee_id)
    }
}
