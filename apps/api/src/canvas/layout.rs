//! Canvas panel sizing. The canvas and the chat log share the viewport width.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasSize {
    #[default]
    Normal,
    Expanded,
    #[serde(alias = "collapsed")]
    Compact,
}

impl CanvasSize {
    /// Percentage of the viewport given to the canvas panel.
    pub fn canvas_width_pct(self) -> u8 {
        match self {
            CanvasSize::Expanded => 60,
            CanvasSize::Compact => 30,
            CanvasSize::Normal => 45,
        }
    }

    /// Percentage left for the chat log.
    pub fn chat_width_pct(self) -> u8 {
        100 - self.canvas_width_pct()
    }

    /// Next size in the resize cycle: normal → expanded → compact → normal.
    pub fn toggled(self) -> Self {
        match self {
            CanvasSize::Normal => CanvasSize::Expanded,
            CanvasSize::Expanded => CanvasSize::Compact,
            CanvasSize::Compact => CanvasSize::Normal,
        }
    }
}

/// Whether the canvas shows the raw markdown or the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Markdown,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasLayout {
    pub size: CanvasSize,
    pub view_mode: ViewMode,
    pub canvas_width_pct: u8,
    pub chat_width_pct: u8,
}

impl CanvasLayout {
    pub fn new(size: CanvasSize, view_mode: ViewMode) -> Self {
        Self {
            size,
            view_mode,
            canvas_width_pct: size.canvas_width_pct(),
            chat_width_pct: size.chat_width_pct(),
        }
    }
}

impl From<CanvasSize> for CanvasLayout {
    fn from(size: CanvasSize) -> Self {
        Self::new(size, ViewMode::default())
    }
}
