use tracing::{error, info};

use crate::canvas::{canvas_content, CanvasLayout, CanvasSize};
use crate::chat::client::ChatBackend;
use crate::chat::models::{ChatMessage, ChatTurn, Sender};
use crate::errors::AppError;

/// Sends one user message to the backend and shapes the reply for the UI.
///
/// A backend failure does not fail the turn: the reply becomes the standard
/// error message with `error` set, so the conversation keeps flowing.
pub async fn relay_turn(backend: &dyn ChatBackend, message: &str) -> Result<ChatTurn, AppError> {
    if message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let user = ChatMessage::new(Sender::User, message);

    let reply = match backend.send(message).await {
        Ok(text) => ChatMessage::new(Sender::Bot, text),
        Err(e) => {
            error!("Chat backend failed: {e}");
            ChatMessage::backend_failure()
        }
    };

    let canvas = canvas_content(&reply.text).map(str::to_string);
    if canvas.is_some() {
        info!("Reply carries resume content, opening canvas");
    }
    let canvas_layout = canvas
        .as_ref()
        .map(|_| CanvasLayout::from(CanvasSize::Normal));

    Ok(ChatTurn {
        user,
        reply,
        canvas,
        canvas_layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::client::ChatError;
    use crate::chat::models::BACKEND_FAILURE_TEXT;
    use async_trait::async_trait;

    struct CannedBackend(String);

    #[async_trait]
    impl ChatBackend for CannedBackend {
        async fn send(&self, _message: &str) -> Result<String, ChatError> {
            Ok(self.0.clone())
        }
    }

    struct DownBackend;

    #[async_trait]
    impl ChatBackend for DownBackend {
        async fn send(&self, _message: &str) -> Result<String, ChatError> {
            Err(ChatError::Unavailable { retries: 3 })
        }
    }

    #[tokio::test]
    async fn test_reply_with_resume_opens_canvas() {
        let backend = CannedBackend("Here it is:\n```\n# Jane Doe\n```".to_string());
        let turn = relay_turn(&backend, "make my resume").await.unwrap();

        assert_eq!(turn.user.sender, Sender::User);
        assert_eq!(turn.reply.sender, Sender::Bot);
        assert!(!turn.reply.error);
        assert_eq!(turn.reply.segments.len(), 3);
        assert_eq!(turn.canvas.as_deref(), Some("\n# Jane Doe\n"));
        assert_eq!(
            turn.canvas_layout.map(|l| l.size),
            Some(CanvasSize::Normal)
        );
    }

    #[tokio::test]
    async fn test_plain_reply_leaves_canvas_closed() {
        let backend = CannedBackend("What is your current role?".to_string());
        let turn = relay_turn(&backend, "hi").await.unwrap();
        assert!(turn.canvas.is_none());
        assert!(turn.canvas_layout.is_none());
        assert_eq!(turn.reply.segments.len(), 1);
    }

    #[tokio::test]
    async fn test_backend_failure_becomes_error_reply() {
        let turn = relay_turn(&DownBackend, "hello").await.unwrap();
        assert!(turn.reply.error);
        assert_eq!(turn.reply.text, BACKEND_FAILURE_TEXT);
        assert!(turn.canvas.is_none());
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let backend = CannedBackend(String::new());
        let result = relay_turn(&backend, "   \n").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
