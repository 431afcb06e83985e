//! Lesson routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::Serialize;

use crate::catalog::Lesson;
use crate::routes::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct LessonDetail {
    #[serde(flatten)]
    pub lesson: Lesson,
    /// 1-based position within the course curriculum.
    pub position: usize,
    pub total: usize,
    pub previous_lesson_id: Option<&'static str>,
}

/// `GET /api/lessons/{id}` — lesson content plus curriculum position.
///
/// An unknown id redirects to the course listing instead of erroring.
pub async fn get_lesson(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<String>) -> Response {
    let Some(lesson) = state.catalog.lesson(&id) else {
        return Redirect::temporary("/api/courses").into_response();
    };

    let siblings = state.catalog.course_lessons(lesson.course_id);
    let index = siblings.iter().position(|l| l.id == lesson.id).unwrap_or(0);
    let previous_lesson_id = index.checked_sub(1).map(|i| siblings[i].id);

    Json(LessonDetail {
        lesson: lesson.clone(),
        position: index + 1,
        total: siblings.len(),
        previous_lesson_id,
    })
    .into_response()
}

/// `POST /api/lessons/{id}/complete` — acknowledged but not persisted.
pub async fn complete_lesson(State(state): State<AppState>, auth: AuthUser, Path(id): Path<String>) -> Response {
    let Some(lesson) = state.catalog.lesson(&id) else {
        return Redirect::temporary("/api/courses").into_response();
    };

    // No backing persistence; the demo only records the intent in the log.
    tracing::info!(user_id = %auth.user.id, lesson_id = %id, "mark-complete requested (not persisted)");
    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "ok": true,
            "persisted": false,
            "next_lesson_id": lesson.next_lesson_id,
        })),
    )
        .into_response()
}

#[cfg(test)]
#[path = "lessons_test.rs"]
mod tests;
