// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod auth_tests;
mod directory_tests;
mod review_tests;

use std::str::FromStr;

use staffline_domain::Role;
use staffline_persistence::Persistence;

use crate::auth::AuthenticatedUser;
use crate::request_response::SignupRequest;

/// Creates a fresh in-memory persistence instance for a test.
pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database should initialize")
}

/// Seeds an account with the given role and returns it as an
/// authenticated user, as if a session had just been validated.
pub fn seed_user(persistence: &mut Persistence, username: &str, role: &str) -> AuthenticatedUser {
    seed_user_with_email(persistence, username, None, role)
}

/// Same as [`seed_user`] but with an email address on the account.
pub fn seed_user_with_email(
    persistence: &mut Persistence,
    username: &str,
    email: Option<&str>,
    role: &str,
) -> AuthenticatedUser {
    let (user_id, employee_id) = persistence
        .create_account(username, email, "correct horse battery", role, "2025-01-06")
        .expect("account creation should succeed");
    AuthenticatedUser::new(
        user_id,
        employee_id,
        username.to_string(),
        Role::from_str(role).expect("known role"),
    )
}

/// Builds a well-formed signup request for a username.
pub fn signup_request(username: &str) -> SignupRequest {
    SignupRequest {
        username: username.to_string(),
        email: None,
        password: String::from("sturdy passphrase 7"),
        password_confirmation: String::from("sturdy passphrase 7"),
        role: String::from("employee"),
    }
}
