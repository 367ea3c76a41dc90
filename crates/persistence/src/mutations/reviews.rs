// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Performance review mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::performance_reviews;
use crate::error::PersistenceError;

/// Inserts a new performance review.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the rating is
/// outside the 1-5 range enforced by the schema.
pub fn insert_review(
    conn: &mut SqliteConnection,
    employee_id: i64,
    reviewer_id: i64,
    review_date: &str,
    rating: i32,
    comments: &str,
    goals: &str,
) -> Result<i64, PersistenceError> {
    info!(employee_id, reviewer_id, rating, "Creating performance review");

    diesel::insert_into(performance_reviews::table)
        .values((
            performance_reviews::employee_id.eq(employee_id),
            performance_reviews::reviewer_id.eq(reviewer_id),
            performance_reviews::review_date.eq(review_date),
            performance_reviews::rating.eq(rating),
            performance_reviews::comments.eq(comments),
            performance_reviews::goals.eq(goals),
        ))
        .execute(conn)?;

    let review_id: i64 = get_last_insert_rowid(conn)?;

    info!(review_id, "Performance review created");
    Ok(review_id)
}
