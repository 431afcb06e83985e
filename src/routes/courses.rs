//! Course catalog routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use serde::{Deserialize, Serialize};

use crate::catalog::{Course, CourseFilter, Lesson, level_name};
use crate::routes::auth::AuthUser;
use crate::services::progress;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CourseQuery {
    /// Free-text search over title and description.
    pub q: Option<String>,
    pub level: Option<u8>,
    pub subject: Option<String>,
}

#[derive(Serialize)]
pub struct CourseSummary {
    #[serde(flatten)]
    course: Course,
    level_name: &'static str,
}

/// `GET /api/courses` — list courses, optionally filtered.
pub async fn list_courses(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<CourseQuery>,
) -> Json<Vec<CourseSummary>> {
    let filter = CourseFilter { search: query.q, level: query.level, subject: query.subject };
    let courses = state
        .catalog
        .filter_courses(&filter)
        .into_iter()
        .map(|course| CourseSummary { course: course.clone(), level_name: level_name(course.level) })
        .collect();
    Json(courses)
}

#[derive(Serialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    pub level_name: &'static str,
    pub lessons: Vec<Lesson>,
    pub progress: u32,
    pub enrolled_in: bool,
}

/// `GET /api/courses/{id}` — course detail with curriculum and progress.
///
/// An unknown id redirects to the course listing instead of erroring.
pub async fn get_course(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<String>) -> Response {
    let Some(course) = state.catalog.course(&id) else {
        return Redirect::temporary("/api/courses").into_response();
    };

    let lessons = state.catalog.course_lessons(&id);
    let pct = progress::progress_percent(&lessons);
    Json(CourseDetail {
        course: course.clone(),
        level_name: level_name(course.level),
        lessons: lessons.into_iter().cloned().collect(),
        progress: pct,
        enrolled_in: pct > 0,
    })
    .into_response()
}

#[derive(Serialize)]
pub struct CourseProgress {
    pub course_id: String,
    pub progress: u32,
    pub enrolled_in: bool,
}

/// `GET /api/courses/{id}/progress` — derived completion percentage.
pub async fn get_progress(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<String>) -> Response {
    if state.catalog.course(&id).is_none() {
        return Redirect::temporary("/api/courses").into_response();
    }

    let lessons = state.catalog.course_lessons(&id);
    let pct = progress::progress_percent(&lessons);
    Json(CourseProgress { course_id: id, progress: pct, enrolled_in: progress::is_enrolled(&lessons) })
        .into_response()
}

/// `POST /api/courses/{id}/enroll` — acknowledged but not persisted.
pub async fn enroll(State(state): State<AppState>, auth: AuthUser, Path(id): Path<String>) -> Response {
    if state.catalog.course(&id).is_none() {
        return Redirect::temporary("/api/courses").into_response();
    }

    // No backing persistence; the demo only records the intent in the log.
    tracing::info!(user_id = %auth.user.id, course_id = %id, "enroll requested (not persisted)");
    (StatusCode::ACCEPTED, Json(serde_json::json!({ "ok": true, "persisted": false }))).into_response()
}

#[cfg(test)]
#[path = "courses_test.rs"]
mod tests;
