use std::sync::Arc;

use crate::chat::ChatBackend;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Resume assistant backend. Default: HttpChatBackend pointed at CHAT_BACKEND_URL.
    pub chat: Arc<dyn ChatBackend>,
}
