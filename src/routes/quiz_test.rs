use axum::extract::{Path, State};

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

async fn seeded_run(state: &AppState) -> Uuid {
    let run = QuizRun::new("course1");
    let id = run.id;
    state.quiz_runs.write().await.insert(id, run);
    id
}

#[tokio::test]
async fn start_creates_a_stored_run() {
    let state = test_app_state();
    let response = start_run(State(state.clone()), auth(), Path("course1".to_owned())).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(state.quiz_runs.read().await.len(), 1);
}

#[tokio::test]
async fn start_for_quizless_course_is_not_found() {
    let state = test_app_state();
    let response = start_run(State(state.clone()), auth(), Path("course2".to_owned())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(state.quiz_runs.read().await.is_empty());
}

#[tokio::test]
async fn get_unknown_run_is_not_found() {
    let state = test_app_state();
    let response = get_run(State(state), auth(), Path(Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn answering_advances_the_stored_run() {
    let state = test_app_state();
    let id = seeded_run(&state).await;

    let body = AnswerBody { selection: "114".to_owned() };
    let response = answer(State(state.clone()), auth(), Path(id), Json(body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let runs = state.quiz_runs.read().await;
    assert_eq!(runs[&id].state, QuizState::Answering { question: 1, score: 1 });
}

#[tokio::test]
async fn answering_a_completed_run_conflicts() {
    let state = test_app_state();
    let id = seeded_run(&state).await;
    {
        let mut runs = state.quiz_runs.write().await;
        runs.get_mut(&id).unwrap().state = QuizState::Completed { score: 3 };
    }

    let body = AnswerBody { selection: "114".to_owned() };
    let response = answer(State(state.clone()), auth(), Path(id), Json(body)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The completed state is untouched.
    let runs = state.quiz_runs.read().await;
    assert_eq!(runs[&id].state, QuizState::Completed { score: 3 });
}

#[tokio::test]
async fn reset_returns_the_run_to_the_first_question() {
    let state = test_app_state();
    let id = seeded_run(&state).await;
    {
        let mut runs = state.quiz_runs.write().await;
        runs.get_mut(&id).unwrap().state = QuizState::Completed { score: 5 };
    }

    let response = reset(State(state.clone()), auth(), Path(id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let runs = state.quiz_runs.read().await;
    assert_eq!(runs[&id].state, QuizState::Answering { question: 0, score: 0 });
}

#[test]
fn view_hides_the_correct_answer() {
    let questions = crate::services::quiz::questions_for_course("course1").unwrap();
    let view = run_view(QuizRun::new("course1"), questions);

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["total_questions"], 5);
    assert_eq!(json["current_question"]["prompt"], "How many surahs are in the Quran?");
    assert!(json["current_question"].get("correct_answer").is_none());
}
