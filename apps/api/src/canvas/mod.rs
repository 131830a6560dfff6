// Resume canvas: everything the side panel needs from a chat reply.
// Implements: fence extraction, markdown → HTML rendering, layout sizing, export.
// The transformations are pure and synchronous; only handlers.rs touches HTTP.

pub mod export;
pub mod handlers;
pub mod inline;
pub mod layout;
pub mod renderer;
pub mod segments;
pub mod table;
pub mod template;

// Re-export the public API consumed by other modules (chat relay, handlers).
pub use layout::{CanvasLayout, CanvasSize};
pub use segments::{canvas_content, extract_segments, Segment};
