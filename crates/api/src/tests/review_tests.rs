// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::CreateReviewRequest;
use crate::tests::{seed_user, test_persistence};

fn review_for(employee_id: i64, rating: i32) -> CreateReviewRequest {
    CreateReviewRequest {
        employee_id,
        review_date: String::from("2025-06-01"),
        rating,
        comments: String::from("Consistent delivery through the quarter"),
        goals: String::from("Lead the onboarding revamp"),
    }
}

#[test]
fn creating_a_review_requires_an_elevated_role() {
    let mut persistence = test_persistence();
    let user = seed_user(&mut persistence, "jdoe", "employee");

    let result = handlers::create_review(&mut persistence, &user, &review_for(user.employee_id, 4));
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn ratings_outside_one_to_five_are_rejected() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");
    let user = seed_user(&mut persistence, "jdoe", "employee");

    for rating in [0, 6] {
        let result =
            handlers::create_review(&mut persistence, &hr, &review_for(user.employee_id, rating));
        match result {
            Err(ApiError::InvalidInput { field, .. }) => assert_eq!(field, "rating"),
            other => panic!("expected invalid rating, got {other:?}"),
        }
    }
}

#[test]
fn reviewing_a_missing_employee_is_not_found() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");

    let result = handlers::create_review(&mut persistence, &hr, &review_for(9999, 4));
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn malformed_review_dates_are_rejected() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");
    let user = seed_user(&mut persistence, "jdoe", "employee");

    let mut request: CreateReviewRequest = review_for(user.employee_id, 4);
    request.review_date = String::from("June 1st");

    let result = handlers::create_review(&mut persistence, &hr, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn review_visibility_follows_role() {
    let mut persistence = test_persistence();
    let hr = seed_user(&mut persistence, "hboss", "hr");
    let alice = seed_user(&mut persistence, "alice", "employee");
    let bob = seed_user(&mut persistence, "bob", "employee");

    handlers::create_review(&mut persistence, &hr, &review_for(alice.employee_id, 5))
        .expect("review creation should succeed");
    handlers::create_review(&mut persistence, &hr, &review_for(bob.employee_id, 3))
        .expect("review creation should succeed");

    // Alice sees only her own review.
    let alice_view = handlers::list_reviews(&mut persistence, &alice, None)
        .expect("listing should succeed");
    assert_eq!(alice_view.total, 1);
    assert_eq!(alice_view.reviews[0].employee_code, "alice");
    assert_eq!(alice_view.reviews[0].rating, 5);
    assert_eq!(alice_view.reviews[0].reviewer_username, "hboss");

    // Alice cannot widen her scope with a filter.
    let alice_filtered =
        handlers::list_reviews(&mut persistence, &alice, Some(bob.employee_id))
            .expect("listing should succeed");
    assert_eq!(alice_filtered.total, 1);
    assert_eq!(alice_filtered.reviews[0].employee_code, "alice");

    // HR sees everything, or one employee when filtered.
    let hr_view =
        handlers::list_reviews(&mut persistence, &hr, None).expect("listing should succeed");
    assert_eq!(hr_view.total, 2);

    let hr_filtered = handlers::list_reviews(&mut persistence, &hr, Some(bob.employee_id))
        .expect("listing should succeed");
    assert_eq!(hr_filtered.total, 1);
    assert_eq!(hr_filtered.reviews[0].employee_code, "bob");
}
