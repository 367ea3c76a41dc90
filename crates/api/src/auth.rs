// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session-based authentication.

use std::str::FromStr;
use time::{Duration, OffsetDateTime, PrimitiveDateTime};
use staffline_domain::{Role, format_datetime, parse_datetime};
use staffline_persistence::{Persistence, SessionData, UserData, verify_password};

use crate::error::AuthError;

/// An authenticated account with its resolved role and employee profile.
///
/// This is what a validated session resolves to; handlers receive it on
/// every authenticated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The account ID.
    pub user_id: i64,
    /// The employee profile ID owned by this account.
    pub employee_id: i64,
    /// The login username.
    pub username: String,
    /// The role assigned to this account.
    pub role: Role,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    #[must_use]
    pub const fn new(user_id: i64, employee_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            employee_id,
            username,
            role,
        }
    }
}

/// Authentication service for session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (two weeks).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::weeks(2);

    /// Authenticates an account and creates a session.
    ///
    /// The identifier is a single credential field: it is first matched
    /// against email addresses and then against usernames, so either one
    /// logs in through the same path. The failure message never reveals
    /// which lookup missed.
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `authenticated_user`)
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is unknown, the password is
    /// wrong, or the account is inactive.
    pub fn login(
        persistence: &mut Persistence,
        identifier: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedUser), AuthError> {
        // Opportunistic cleanup so stale sessions do not accumulate.
        persistence
            .delete_expired_sessions()
            .map_err(Self::map_persistence_error)?;

        let user: UserData = Self::find_by_identifier(persistence, identifier)?.ok_or_else(|| {
            AuthError::AuthenticationFailed {
                reason: String::from("Invalid credentials"),
            }
        })?;

        if !user.is_active {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is inactive"),
            });
        }

        let password_matches: bool = verify_password(password, &user.password_hash)
            .map_err(Self::map_persistence_error)?;
        if !password_matches {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Invalid credentials"),
            });
        }

        let authenticated_user: AuthenticatedUser = Self::resolve_user(persistence, &user)?;

        let session_token: String = Self::generate_session_token();

        // Stored in the same `YYYY-MM-DD HH:MM:SS` UTC shape SQLite's
        // CURRENT_TIMESTAMP produces, so the expiry sweep can compare
        // the two lexicographically.
        let expires_at: OffsetDateTime =
            OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION;
        let expires_at_str: String =
            format_datetime(PrimitiveDateTime::new(expires_at.date(), expires_at.time()))
                .map_err(|e| AuthError::AuthenticationFailed {
                    reason: format!("Failed to format expiration time: {e}"),
                })?;

        persistence
            .create_session(&session_token, user.user_id, &expires_at_str)
            .map_err(Self::map_persistence_error)?;

        persistence
            .update_last_login(user.user_id)
            .map_err(Self::map_persistence_error)?;

        Ok((session_token, authenticated_user))
    }

    /// Validates a session token and returns the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is invalid or expired, or the
    /// account is inactive.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<AuthenticatedUser, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime = parse_datetime(&session.expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to parse session expiration: {e}"),
            })?
            .assume_utc();

        if OffsetDateTime::now_utc() > expires_at {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let user: UserData = persistence
            .get_user_by_id(session.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        if !user.is_active {
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Account is inactive"),
            });
        }

        let authenticated_user: AuthenticatedUser = Self::resolve_user(persistence, &user)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        Ok(authenticated_user)
    }

    /// Logs out by deleting the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(Self::map_persistence_error)?;

        Ok(())
    }

    /// Finds an account by email first, then by username.
    fn find_by_identifier(
        persistence: &mut Persistence,
        identifier: &str,
    ) -> Result<Option<UserData>, AuthError> {
        if let Some(user) = persistence
            .get_user_by_email(identifier)
            .map_err(Self::map_persistence_error)?
        {
            return Ok(Some(user));
        }

        persistence
            .get_user_by_username(identifier)
            .map_err(Self::map_persistence_error)
    }

    /// Resolves role and employee profile for a user row.
    fn resolve_user(
        persistence: &mut Persistence,
        user: &UserData,
    ) -> Result<AuthenticatedUser, AuthError> {
        let role: Role =
            Role::from_str(&user.role).map_err(|e| AuthError::AuthenticationFailed {
                reason: e.to_string(),
            })?;

        let employee = persistence
            .get_employee_by_user_id(user.user_id)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account has no employee profile"),
            })?;

        Ok(AuthenticatedUser::new(
            user.user_id,
            employee.employee_id,
            user.username.clone(),
            role,
        ))
    }

    /// Generates a random session token.
    fn generate_session_token() -> String {
        format!(
            "{:032x}{:016x}",
            rand::random::<u128>(),
            rand::random::<u64>()
        )
    }

    /// Maps persistence errors to authentication errors.
    fn map_persistence_error(err: staffline_persistence::PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
