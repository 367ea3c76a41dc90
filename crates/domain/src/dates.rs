// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date and time parsing helpers.
//!
//! The wire format and the database both use ISO 8601 text:
//! `YYYY-MM-DD` for dates and `HH:MM:SS` for times of day.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime, Time};

use crate::error::DomainError;

/// ISO 8601 calendar date format (`YYYY-MM-DD`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Time-of-day format (`HH:MM:SS`).
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]:[second]");

/// Timestamp format (`YYYY-MM-DD HH:MM:SS`), the same shape SQLite's
/// `CURRENT_TIMESTAMP` produces, so stored timestamps compare
/// lexicographically against it.
const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Parses an ISO 8601 date string (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as an ISO 8601 string (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns an error if the date cannot be formatted (should not occur
/// for valid dates).
pub fn format_date(value: Date) -> Result<String, DomainError> {
    value.format(DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: format!("{value:?}"),
        error: e.to_string(),
    })
}

/// Parses a time-of-day string (`HH:MM:SS`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// time of day.
pub fn parse_time(value: &str) -> Result<Time, DomainError> {
    Time::parse(value, TIME_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a time of day as `HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if the time cannot be formatted (should not occur
/// for valid times).
pub fn format_time(value: Time) -> Result<String, DomainError> {
    value.format(TIME_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: format!("{value:?}"),
        error: e.to_string(),
    })
}

/// Parses a timestamp string (`YYYY-MM-DD HH:MM:SS`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid
/// timestamp.
pub fn parse_datetime(value: &str) -> Result<PrimitiveDateTime, DomainError> {
    PrimitiveDateTime::parse(value, DATETIME_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted (should not
/// occur for valid timestamps).
pub fn format_datetime(value: PrimitiveDateTime) -> Result<String, DomainError> {
    value
        .format(DATETIME_FORMAT)
        .map_err(|e| DomainError::DateParseError {
            date_string: format!("{value:?}"),
            error: e.to_string(),
        })
}
