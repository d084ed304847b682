//! Coordinate transforms between data and screen space.

use crate::geom::{Point, ScreenPoint, ScreenSize};
use crate::view::Viewport;

/// Transform from data coordinates into canvas coordinates.
///
/// Holds the bounds and uniform scale produced by
/// [`fit_viewport`](crate::view::fit_viewport) for a single render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    scale: f64,
    size: ScreenSize,
}

impl Transform {
    /// Create a transform for the given viewport, scale and canvas size.
    ///
    /// Returns `None` unless the scale is finite and positive.
    pub fn new(viewport: Viewport, scale: f64, size: ScreenSize) -> Option<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(Self {
            viewport,
            scale,
            size,
        })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pixels per data unit, shared by both axes.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Canvas size the transform was fitted to.
    pub fn size(&self) -> ScreenSize {
        self.size
    }

    /// Map a data point into screen space.
    ///
    /// Y is inverted: data grows upward, the canvas grows downward.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        let dx = point.x - self.viewport.x.min;
        let dy = self.viewport.y.max - point.y;
        ScreenPoint::new((dx * self.scale) as f32, (dy * self.scale) as f32)
    }

    /// Map raw coordinates into screen space.
    pub fn xy_to_screen(&self, x: f64, y: f64) -> ScreenPoint {
        self.data_to_screen(Point::new(x, y))
    }
}
