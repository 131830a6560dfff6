//! PDF export descriptor.
//!
//! Rasterization happens client-side. The service hands the exporter the same
//! document the preview shows plus the page settings to rasterize it with.

use serde::{Deserialize, Serialize};

use crate::canvas::renderer::render_resume_html;
use crate::errors::AppError;

pub const DEFAULT_FILENAME: &str = "resume.pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: String,
    /// 0.0 – 1.0
    pub quality: f32,
}

/// html2canvas settings: how the DOM is captured before paging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// Device-pixel multiplier used when rasterizing the DOM.
    pub scale: u8,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub logging: bool,
    #[serde(rename = "letterRendering")]
    pub letter_rendering: bool,
}

/// jsPDF settings for the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOptions {
    pub unit: String,
    pub format: String,
    pub orientation: String,
    pub compress: bool,
}

/// Settings for the client-side HTML → PDF rasterizer, in html2pdf's option
/// schema so the exporter can pass them through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// `[top, right, bottom, left]` in page units.
    pub margin: [u16; 4],
    pub filename: String,
    pub image: ImageOptions,
    #[serde(rename = "html2canvas")]
    pub capture: CaptureOptions,
    #[serde(rename = "jsPDF")]
    pub page: PageOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            margin: [10, 10, 10, 10],
            filename: DEFAULT_FILENAME.to_string(),
            image: ImageOptions {
                format: "jpeg".to_string(),
                quality: 1.0,
            },
            capture: CaptureOptions {
                scale: 2,
                use_cors: true,
                logging: false,
                letter_rendering: true,
            },
            page: PageOptions {
                unit: "mm".to_string(),
                format: "letter".to_string(),
                orientation: "portrait".to_string(),
                compress: true,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportDocument {
    pub filename: String,
    pub html: String,
    pub options: ExportOptions,
}

/// Renders the canvas buffer for export.
///
/// A blank canvas has nothing to export and is rejected; any other content is
/// rendered exactly as the preview renders it.
pub fn prepare_export(markdown: &str) -> Result<ExportDocument, AppError> {
    if markdown.trim().is_empty() {
        return Err(AppError::Validation(
            "canvas is empty, nothing to export".to_string(),
        ));
    }

    let options = ExportOptions::default();
    Ok(ExportDocument {
        filename: options.filename.clone(),
        html: render_resume_html(markdown),
        options,
    })
}
