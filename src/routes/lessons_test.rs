use axum::extract::{Path, State};
use axum::http::header::LOCATION;

use super::*;
use crate::routes::auth::AuthUser;
use crate::services::auth::{User, UserRole};
use crate::state::test_helpers::test_app_state;

fn auth() -> AuthUser {
    AuthUser {
        user: User {
            id: "student1".to_owned(),
            name: "Ahmed Student".to_owned(),
            email: "student@example.com".to_owned(),
            role: UserRole::Student,
        },
        token: "test-token".to_owned(),
    }
}

#[tokio::test]
async fn first_lesson_has_no_previous() {
    let state = test_app_state();
    let response = get_lesson(State(state), auth(), Path("lesson1-1".to_owned())).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_lesson_redirects_to_listing() {
    let state = test_app_state();
    let response = get_lesson(State(state), auth(), Path("lesson9-9".to_owned())).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).and_then(|v| v.to_str().ok()), Some("/api/courses"));
}

#[tokio::test]
async fn complete_is_accepted_but_not_persisted() {
    let state = test_app_state();
    let response = complete_lesson(State(state.clone()), auth(), Path("lesson1-4".to_owned())).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    // The catalog is static; the lesson stays incomplete.
    let lesson = state.catalog.lesson("lesson1-4").unwrap();
    assert!(!lesson.completed);
}

#[tokio::test]
async fn complete_unknown_lesson_redirects() {
    let state = test_app_state();
    let response = complete_lesson(State(state), auth(), Path("lesson9-9".to_owned())).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}
