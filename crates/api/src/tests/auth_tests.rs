// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::auth::AuthenticationService;
use crate::error::{ApiError, AuthError};
use crate::handlers;
use crate::request_response::LoginRequest;
use crate::tests::{seed_user_with_email, test_persistence};

fn login_request(identifier: &str, password: &str) -> LoginRequest {
    LoginRequest {
        identifier: identifier.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn login_accepts_username_or_email() {
    let mut persistence = test_persistence();
    seed_user_with_email(&mut persistence, "jdoe", Some("jdoe@example.com"), "employee");

    let by_username = handlers::login(
        &mut persistence,
        &login_request("jdoe", "correct horse battery"),
    )
    .expect("login by username should succeed");
    let by_email = handlers::login(
        &mut persistence,
        &login_request("jdoe@example.com", "correct horse battery"),
    )
    .expect("login by email should succeed");

    assert_eq!(by_username.user_id, by_email.user_id);
    assert_eq!(by_username.username, "jdoe");
    // Each login opens its own session.
    assert_ne!(by_username.session_token, by_email.session_token);
}

#[test]
fn login_failure_does_not_reveal_which_check_missed() {
    let mut persistence = test_persistence();
    seed_user_with_email(&mut persistence, "jdoe", None, "employee");

    let wrong_password = handlers::login(&mut persistence, &login_request("jdoe", "nope nope"))
        .expect_err("wrong password should fail");
    let unknown_account =
        handlers::login(&mut persistence, &login_request("ghost", "correct horse battery"))
            .expect_err("unknown identifier should fail");

    assert_eq!(wrong_password, unknown_account);
    assert!(matches!(
        wrong_password,
        ApiError::AuthenticationFailed { .. }
    ));
}

#[test]
fn validated_session_resolves_role_and_profile() {
    let mut persistence = test_persistence();
    let seeded = seed_user_with_email(&mut persistence, "hboss", None, "hr");

    let login = handlers::login(
        &mut persistence,
        &login_request("hboss", "correct horse battery"),
    )
    .expect("login should succeed");

    let user = AuthenticationService::validate_session(&mut persistence, &login.session_token)
        .expect("session should validate");
    assert_eq!(user.user_id, seeded.user_id);
    assert_eq!(user.employee_id, seeded.employee_id);
    assert!(user.role.is_elevated());
}

#[test]
fn logout_invalidates_the_session() {
    let mut persistence = test_persistence();
    seed_user_with_email(&mut persistence, "jdoe", None, "employee");

    let login = handlers::login(
        &mut persistence,
        &login_request("jdoe", "correct horse battery"),
    )
    .expect("login should succeed");

    handlers::logout(&mut persistence, &login.session_token).expect("logout should succeed");

    let result = AuthenticationService::validate_session(&mut persistence, &login.session_token);
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn expired_session_is_rejected() {
    let mut persistence = test_persistence();
    let seeded = seed_user_with_email(&mut persistence, "jdoe", None, "employee");

    // Expiry timestamps are stored as `YYYY-MM-DD HH:MM:SS`.
    persistence
        .create_session("bygone", seeded.user_id, "2000-01-01 08:00:00")
        .expect("session creation should succeed");

    let result = AuthenticationService::validate_session(&mut persistence, "bygone");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn unknown_token_is_rejected() {
    let mut persistence = test_persistence();

    let result = AuthenticationService::validate_session(&mut persistence, "no-such-token");
    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}
