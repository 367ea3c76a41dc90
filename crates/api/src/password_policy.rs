// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Password policy validation.
//!
//! This module enforces password requirements for account signup.

use thiserror::Error;

/// Password policy errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password is too short.
    #[error("Password must be at least {min_length} characters long")]
    TooShort { min_length: usize },

    /// Password consists only of digits.
    #[error("Password must not be entirely numeric")]
    EntirelyNumeric,

    /// Password matches the username.
    #[error("Password must not match the username")]
    MatchesUsername,

    /// Password and confirmation do not match.
    #[error("Password and confirmation do not match")]
    ConfirmationMismatch,
}

/// Password policy configuration.
pub struct PasswordPolicy {
    /// Minimum password length.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    /// Validates a password against the policy.
    ///
    /// # Arguments
    ///
    /// * `password` - The password to validate
    /// * `confirmation` - The password confirmation
    /// * `username` - The account username (password must not match)
    ///
    /// # Errors
    ///
    /// Returns a `PasswordPolicyError` if the password does not meet
    /// policy requirements.
    pub fn validate(
        &self,
        password: &str,
        confirmation: &str,
        username: &str,
    ) -> Result<(), PasswordPolicyError> {
        // Check confirmation match
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        // Check minimum length
        if password.len() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min_length: self.min_length,
            });
        }

        // Check the password is not purely numeric
        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            return Err(PasswordPolicyError::EntirelyNumeric);
        }

        // Check the password does not match the username (case-insensitive)
        if password.to_lowercase() == username.to_lowercase() {
            return Err(PasswordPolicyError::MatchesUsername);
        }

        Ok(())
    }
}
