//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! All endpoints live under `/api` and share one `AppState`. Everything
//! except login, signup, and the health check requires a valid session
//! cookie, enforced by the `AuthUser` extractor on each handler. Unmatched
//! paths fall through to axum's default 404.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod lessons;
pub mod quiz;
pub mod tutor;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/dashboard", get(dashboard::dashboard))
        .route("/api/courses", get(courses::list_courses))
        .route("/api/courses/{id}", get(courses::get_course))
        .route("/api/courses/{id}/progress", get(courses::get_progress))
        .route("/api/courses/{id}/enroll", post(courses::enroll))
        .route("/api/lessons/{id}", get(lessons::get_lesson))
        .route("/api/lessons/{id}/complete", post(lessons::complete_lesson))
        .route("/api/tutor/conversations", post(tutor::start_conversation))
        .route("/api/tutor/conversations/{id}", get(tutor::get_conversation))
        .route("/api/tutor/conversations/{id}/messages", post(tutor::send_message))
        .route("/api/quiz/{course_id}", post(quiz::start_run))
        .route("/api/quiz/runs/{id}", get(quiz::get_run))
        .route("/api/quiz/runs/{id}/answer", post(quiz::answer))
        .route("/api/quiz/runs/{id}/reset", post(quiz::reset))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
