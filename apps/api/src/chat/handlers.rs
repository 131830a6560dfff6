//! Axum route handlers for the Chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::chat::models::{ChatRequest, ChatTurn};
use crate::chat::relay::relay_turn;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/chat
///
/// Relays one message to the resume assistant and returns both chat turns,
/// segmented for rendering, plus the canvas content to auto-open if any.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatTurn>, AppError> {
    let Json(request) = payload?;
    let turn = relay_turn(state.chat.as_ref(), &request.message).await?;
    Ok(Json(turn))
}
