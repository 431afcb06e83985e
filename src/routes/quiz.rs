//! Quiz routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::quiz::{self, Question, QuizRun, QuizState};
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuizRunView {
    #[serde(flatten)]
    pub run: QuizRun,
    /// The current question, absent once the run is completed. The correct
    /// answer is not exposed on the wire.
    pub current_question: Option<QuestionView>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct QuestionView {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

fn run_view(run: QuizRun, questions: &'static [Question]) -> QuizRunView {
    let current_question = match run.state {
        QuizState::Answering { question, .. } => questions
            .get(question)
            .map(|q| QuestionView { prompt: q.prompt, options: q.options }),
        QuizState::Completed { .. } => None,
    };
    QuizRunView { run, current_question, total_questions: questions.len() }
}

/// `POST /api/quiz/{course_id}` — start a new run for a course quiz.
pub async fn start_run(State(state): State<AppState>, auth: AuthUser, Path(course_id): Path<String>) -> Response {
    let Some(questions) = quiz::questions_for_course(&course_id) else {
        let err = quiz::QuizError::NoQuizForCourse(course_id);
        return (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": err.to_string() }))).into_response();
    };

    let run = QuizRun::new(&course_id);
    let id = run.id;
    state.quiz_runs.write().await.insert(id, run.clone());

    tracing::info!(user_id = %auth.user.id, %course_id, run_id = %id, "quiz run started");
    (StatusCode::CREATED, Json(run_view(run, questions))).into_response()
}

/// `GET /api/quiz/runs/{id}` — current state of a run.
pub async fn get_run(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<Uuid>) -> Response {
    let runs = state.quiz_runs.read().await;
    let Some(run) = runs.get(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(questions) = quiz::questions_for_course(&run.course_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    Json(run_view(run.clone(), questions)).into_response()
}

#[derive(Deserialize)]
pub struct AnswerBody {
    pub selection: String,
}

#[derive(Serialize)]
pub struct AnswerResponse {
    pub correct: bool,
    #[serde(flatten)]
    pub view: QuizRunView,
}

/// `POST /api/quiz/runs/{id}/answer` — score one selection and advance.
pub async fn answer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<AnswerBody>,
) -> Response {
    let mut runs = state.quiz_runs.write().await;
    let Some(run) = runs.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(questions) = quiz::questions_for_course(&run.course_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match run.answer(questions, &body.selection) {
        Ok(correct) => Json(AnswerResponse { correct, view: run_view(run.clone(), questions) }).into_response(),
        Err(e) => (StatusCode::CONFLICT, Json(serde_json::json!({ "error": e.to_string() }))).into_response(),
    }
}

/// `POST /api/quiz/runs/{id}/reset` — "Try Again".
pub async fn reset(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<Uuid>) -> Response {
    let mut runs = state.quiz_runs.write().await;
    let Some(run) = runs.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let Some(questions) = quiz::questions_for_course(&run.course_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    run.reset();
    Json(run_view(run.clone(), questions)).into_response()
}

#[cfg(test)]
#[path = "quiz_test.rs"]
mod tests;
