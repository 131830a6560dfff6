use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::canvas::{extract_segments, CanvasLayout, Segment};

/// Shown in place of a reply when the chat backend cannot be reached.
pub const BACKEND_FAILURE_TEXT: &str = "Error processing your request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One rendered turn in the chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    /// True for the placeholder reply shown when the backend failed.
    #[serde(default)]
    pub error: bool,
    pub sent_at: DateTime<Utc>,
    pub segments: Vec<Segment>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            segments: extract_segments(&text),
            text,
            sender,
            error: false,
            sent_at: Utc::now(),
        }
    }

    pub fn backend_failure() -> Self {
        Self {
            error: true,
            ..Self::new(Sender::Bot, BACKEND_FAILURE_TEXT)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// The user's message, the assistant's reply, and what the canvas should show.
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub user: ChatMessage,
    pub reply: ChatMessage,
    /// First non-empty fenced block of the reply, auto-opened in the canvas.
    pub canvas: Option<String>,
    /// Layout to apply when `canvas` is set; auto-open resets to normal size.
    pub canvas_layout: Option<CanvasLayout>,
}
