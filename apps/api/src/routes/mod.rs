pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::canvas::handlers as canvas;
use crate::chat::handlers as chat;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Canvas API
        .route("/api/v1/canvas/segments", post(canvas::handle_segments))
        .route("/api/v1/canvas/render", post(canvas::handle_render))
        .route("/api/v1/canvas/export", post(canvas::handle_export))
        .route("/api/v1/canvas/layout/:size", get(canvas::handle_layout))
        // Chat API
        .route("/api/v1/chat", post(chat::handle_chat))
        .fallback(not_found)
        .with_state(state)
}
