//! Tutor conversation routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::services::tutor::{Conversation, Utterance};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct StartConversationBody {
    pub lesson_title: String,
}

/// `POST /api/tutor/conversations` — open a conversation for a lesson.
pub async fn start_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<StartConversationBody>,
) -> (StatusCode, Json<Conversation>) {
    let conversation = Conversation::start(&body.lesson_title);
    let id = conversation.id;
    state
        .conversations
        .write()
        .await
        .insert(id, conversation.clone());

    tracing::info!(user_id = %auth.user.id, conversation_id = %id, "tutor conversation started");
    (StatusCode::CREATED, Json(conversation))
}

/// `GET /api/tutor/conversations/{id}` — full utterance log.
pub async fn get_conversation(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<Uuid>) -> Response {
    let conversations = state.conversations.read().await;
    match conversations.get(&id) {
        Some(conversation) => Json(conversation.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[derive(Deserialize)]
pub struct SendMessageBody {
    pub content: String,
}

#[derive(Serialize)]
pub struct SendMessageResponse {
    pub user: Utterance,
    pub assistant: Utterance,
}

/// `POST /api/tutor/conversations/{id}/messages` — send one utterance.
///
/// Empty or whitespace-only input is rejected before the selector runs. The
/// user/assistant pair is appended under one write lock, so a fetched log
/// never shows an unanswered user utterance.
pub async fn send_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(body): Json<SendMessageBody>,
) -> Response {
    if body.content.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": "message must not be empty" })))
            .into_response();
    }

    let mut conversations = state.conversations.write().await;
    let Some(conversation) = conversations.get_mut(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let (user, assistant) = conversation.send(&body.content, &mut rand::rng());
    Json(SendMessageResponse { user, assistant }).into_response()
}

#[cfg(test)]
#[path = "tutor_test.rs"]
mod tests;
