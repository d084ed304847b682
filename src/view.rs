//! Data ranges and the viewport calculator.

use crate::geom::{Point, ScreenSize};
use crate::transform::Transform;

/// Smallest span a collapsed range is widened to.
pub const MIN_SPAN: f64 = 1e-9;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether the value lies inside the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Grow both ends of the range by `amount`.
    pub fn widened(&self, amount: f64) -> Self {
        Self {
            min: self.min - amount,
            max: self.max + amount,
        }
    }

    /// Ensure the range has at least the given span.
    ///
    /// The widened range stays centered on the original midpoint.
    pub fn with_min_span(&self, min_span: f64) -> Self {
        let span = self.span();
        if span >= min_span {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let half = min_span * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Widen a collapsed range so it has a representable, non-zero span.
    fn non_degenerate(&self) -> Self {
        if self.span() > 0.0 {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let min_span = MIN_SPAN.max(center.abs() * MIN_SPAN);
        tracing::debug!(center, min_span, "clamping degenerate data range");
        self.with_min_span(min_span)
    }
}

/// Visible data ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Raw bounds of an ordered sample sequence.
    ///
    /// X comes from the first and last samples, Y from a scan of every
    /// sample. Returns `None` for an empty slice.
    pub fn from_samples(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let last = points.last()?;
        let x = Range::new(first.x, last.x);
        let mut y = Range::new(first.y, first.y);
        for point in &points[1..] {
            y.expand_to_include(point.y);
        }
        Some(Self::new(x, y))
    }
}

/// Compute the visible bounds and uniform scale for a set of samples.
///
/// The scale is the smaller of the per-axis scales so the plot is never
/// distorted; the other axis is widened symmetrically until it fills its
/// canvas dimension as well. Returns `None` for an empty slice or an
/// unusable canvas size.
pub fn fit_viewport(points: &[Point], size: ScreenSize) -> Option<Transform> {
    if !size.is_valid() {
        return None;
    }
    let raw = Viewport::from_samples(points)?;
    let mut x = raw.x.non_degenerate();
    let mut y = raw.y.non_degenerate();

    let scale_x = size.width / x.span();
    let scale_y = size.height / y.span();
    let scale = scale_x.min(scale_y);

    if scale == scale_x {
        y = y.widened((size.height / scale - y.span()) * 0.5);
    }
    if scale == scale_y {
        x = x.widened((size.width / scale - x.span()) * 0.5);
    }

    Transform::new(Viewport::new(x, y), scale, size)
}
