// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod account_tests;
mod attendance_tests;
mod directory_tests;

use crate::Persistence;

/// Creates a fresh in-memory persistence instance for a test.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// Creates an account and returns its `(user_id, employee_id)` pair.
pub fn create_test_account(
    persistence: &mut Persistence,
    username: &str,
    email: Option<&str>,
    role: &str,
) -> (i64, i64) {
    persistence
        .create_account(username, email, "correct horse battery", role, "2025-01-06")
        .expect("account creation should succeed")
}
