//! Axum route handlers for the Canvas API.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::export::{prepare_export, ExportDocument};
use crate::canvas::layout::{CanvasLayout, CanvasSize, ViewMode};
use crate::canvas::renderer::render_resume_html;
use crate::canvas::segments::{extract_segments, Segment};
use crate::errors::AppError;

/// The rendered body is not sanitized; scripts are blocked at the document level.
const RENDER_CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src data:";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SegmentsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SegmentsResponse {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
pub struct CanvasRequest {
    pub markdown: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    #[serde(default)]
    pub toggle: bool,
    #[serde(default)]
    pub view: ViewMode,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/canvas/segments
pub async fn handle_segments(
    payload: Result<Json<SegmentsRequest>, JsonRejection>,
) -> Result<Json<SegmentsResponse>, AppError> {
    let Json(request) = payload?;
    let segments = extract_segments(&request.text);
    debug!(
        "Extracted {} segments ({} code)",
        segments.len(),
        segments.iter().filter(|s| s.is_code()).count()
    );
    Ok(Json(SegmentsResponse { segments }))
}

/// POST /api/v1/canvas/render
///
/// Returns the preview document as `text/html`. Any markdown renders; an empty
/// buffer yields an empty document.
pub async fn handle_render(
    payload: Result<Json<CanvasRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let html = render_resume_html(&request.markdown);
    debug!(
        "Rendered preview: {} bytes markdown -> {} bytes html",
        request.markdown.len(),
        html.len()
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CONTENT_SECURITY_POLICY, RENDER_CSP),
        ],
        html,
    ))
}

/// POST /api/v1/canvas/export
///
/// Returns the export document and rasterizer settings for the PDF download.
pub async fn handle_export(
    payload: Result<Json<CanvasRequest>, JsonRejection>,
) -> Result<Json<ExportDocument>, AppError> {
    let Json(request) = payload?;
    let document = prepare_export(&request.markdown)?;
    debug!("Prepared export '{}'", document.filename);
    Ok(Json(document))
}

/// GET /api/v1/canvas/layout/:size
///
/// `?toggle=true` returns the layout for the next size in the resize cycle.
pub async fn handle_layout(
    size: Result<Path<CanvasSize>, PathRejection>,
    query: Result<Query<LayoutQuery>, QueryRejection>,
) -> Result<Json<CanvasLayout>, AppError> {
    let Path(size) = size.map_err(|e| AppError::NotFound(format!("Canvas size: {}", e.body_text())))?;
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let size = if query.toggle { size.toggled() } else { size };
    Ok(Json(CanvasLayout::new(size, query.view)))
}
