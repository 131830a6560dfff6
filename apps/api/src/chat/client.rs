//! Chat backend client: the only place this service talks to the resume assistant.
//!
//! The backend owns LLM orchestration and conversation storage. This side only
//! sends a user message and receives the assistant's reply text.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Anything that can answer a chat message. The HTTP client is the production
/// implementation; tests substitute an in-memory one.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, ChatError>;
}

#[derive(Debug, Serialize)]
struct ChatPayload<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct HttpChatBackend {
    client: Client,
    chat_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ChatError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            chat_url: chat_endpoint(base_url),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

/// `POST /chat/` relative to the configured base URL.
fn chat_endpoint(base_url: &str) -> String {
    format!("{}/chat/", base_url.trim_end_matches('/'))
}

/// Statuses that mean the backend turned the request away without handling it.
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS | StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE
    )
}

/// Builds a `Backend` error, preferring the `detail` field of a JSON error body.
fn backend_error(status: StatusCode, body: String) -> ChatError {
    let message = serde_json::from_str::<BackendErrorBody>(&body)
        .map(|e| e.detail)
        .unwrap_or(body);
    ChatError::Backend {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    /// The backend stores every turn, so a message is only resent when it never
    /// reached the backend (connect failure) or was refused (429, 502, 503).
    /// Timeouts and other error statuses fail on the first attempt.
    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let payload = ChatPayload { message };
        let mut last_error: Option<ChatError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // 500ms, 1s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "Chat backend attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&self.chat_url).json(&payload).send().await {
                Ok(r) => r,
                Err(e) if e.is_connect() => {
                    last_error = Some(ChatError::Http(e));
                    continue;
                }
                Err(e) => return Err(ChatError::Http(e)),
            };

            let status = response.status();

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                warn!("Chat backend returned {}: {}", status, body);
                let error = backend_error(status, body);
                if is_retryable_status(status) {
                    last_error = Some(error);
                    continue;
                }
                return Err(error);
            }

            let reply: ChatReply = response.json().await?;
            debug!("Chat backend replied with {} bytes", reply.response.len());
            return Ok(reply.response);
        }

        Err(last_error.unwrap_or(ChatError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}
