//! Error types for plot rendering.

use thiserror::Error;

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a plot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The canvas has no drawable area.
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvasSize { width: f64, height: f64 },
}

impl RenderError {
    /// Create an InvalidCanvasSize error.
    pub fn invalid_canvas_size(width: f64, height: f64) -> Self {
        Self::InvalidCanvasSize { width, height }
    }
}
