// Chat relay: forwards user messages to the external resume assistant backend
// and segments its replies for the chat log and canvas.
// All backend calls go through client.rs.

pub mod client;
pub mod handlers;
pub mod models;
pub mod relay;

pub use client::{ChatBackend, HttpChatBackend};
