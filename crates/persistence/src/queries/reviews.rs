// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Performance review queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{PerformanceReviewData, ReviewDetail};
use crate::diesel_schema::{employees, performance_reviews, users};
use crate::error::PersistenceError;

/// Diesel Queryable struct for performance review rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = performance_reviews)]
struct ReviewRow {
    review_id: i64,
    employee_id: i64,
    reviewer_id: i64,
    review_date: String,
    rating: i32,
    comments: String,
    goals: String,
}

impl From<ReviewRow> for PerformanceReviewData {
    fn from(row: ReviewRow) -> Self {
        Self {
            review_id: row.review_id,
            employee_id: row.employee_id,
            reviewer_id: row.reviewer_id,
            review_date: row.review_date,
            rating: row.rating,
            comments: row.comments,
            goals: row.goals,
        }
    }
}

/// Lists performance reviews, newest review date first, joined with the
/// reviewed employee and the reviewer's account.
///
/// The scope narrows to one employee when `employee_id` is given.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_reviews(
    conn: &mut SqliteConnection,
    employee_id: Option<i64>,
) -> Result<Vec<ReviewDetail>, PersistenceError> {
    debug!(?employee_id, "Listing performance reviews");

    let mut query = performance_reviews::table
        .inner_join(employees::table)
        .inner_join(users::table)
        .select((
            ReviewRow::as_select(),
            employees::employee_code,
            users::username,
        ))
        .order_by(performance_reviews::review_date.desc())
        .then_order_by(performance_reviews::review_id.desc())
        .into_boxed();

    if let Some(employee_id) = employee_id {
        query = query.filter(performance_reviews::employee_id.eq(employee_id));
    }

    let rows: Vec<(ReviewRow, String, String)> = query.load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(review, employee_code, reviewer_username)| ReviewDetail {
            review: review.into(),
            employee_code,
            reviewer_username,
        })
        .collect())
}
