use std::ops::{Deref, DerefMut};

use super::{Color, StrokeStyle, TextBounds, TextStyle};
use crate::geom::{Affine, ScreenPoint};

/// Pen, color, font and transform currently selected on a canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanvasState {
    /// Active pen.
    pub stroke: StrokeStyle,
    /// Active stroke, fill and text color.
    pub color: Color,
    /// Active font.
    pub font: TextStyle,
    /// User-space to canvas transform.
    pub transform: Affine,
}

/// A 2-D drawing surface.
///
/// Drawing calls use whatever pen, color and font are currently selected.
/// Geometry is given in user space and mapped through the current transform.
pub trait Canvas {
    /// Snapshot the current state.
    fn state(&self) -> CanvasState;

    /// Replace the current state.
    fn restore(&mut self, state: CanvasState);

    /// Select a pen.
    fn set_stroke(&mut self, stroke: StrokeStyle);

    /// Select a color for strokes, fills and text.
    fn set_color(&mut self, color: Color);

    /// Select a font.
    fn set_font(&mut self, font: TextStyle);

    /// Concatenate `affine` onto the current transform.
    ///
    /// The new transform is applied to user coordinates before the existing
    /// one.
    fn transform(&mut self, affine: Affine);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, start: ScreenPoint, end: ScreenPoint);

    /// Stroke the outline of a path.
    fn stroke_path(&mut self, path: &Path);

    /// Fill the interior of a path.
    fn fill_path(&mut self, path: &Path);

    /// Draw text with its baseline starting at `position`.
    fn draw_text(&mut self, text: &str, position: ScreenPoint);

    /// Bounds of `text` in the current font.
    fn text_bounds(&self, text: &str) -> TextBounds;

    /// Save the current state until the returned guard is dropped.
    fn save(&mut self) -> StateGuard<'_, Self>
    where
        Self: Sized,
    {
        StateGuard::new(self)
    }
}

/// Restores a canvas to a saved state when dropped.
///
/// Dereferences to the canvas so drawing continues through the guard.
pub struct StateGuard<'a, C: Canvas> {
    canvas: &'a mut C,
    saved: Option<CanvasState>,
}

impl<'a, C: Canvas> StateGuard<'a, C> {
    /// Snapshot the canvas state.
    pub fn new(canvas: &'a mut C) -> Self {
        let saved = Some(canvas.state());
        Self { canvas, saved }
    }
}

impl<C: Canvas> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        if let Some(state) = self.saved.take() {
            self.canvas.restore(state);
        }
    }
}

/// Path construction element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    /// Start a new sub-path.
    MoveTo(ScreenPoint),
    /// Straight line from the current point.
    LineTo(ScreenPoint),
    /// Close the current sub-path.
    Close,
}

/// A flattened sub-path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    /// Vertices in order.
    pub points: Vec<ScreenPoint>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Vertices including the closing vertex, if any.
    pub fn outline(&self) -> Vec<ScreenPoint> {
        let mut points = self.points.clone();
        if self.closed {
            if let Some(first) = self.points.first() {
                points.push(*first);
            }
        }
        points
    }
}

/// A path made of straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    elements: Vec<PathElement>,
    start: Option<ScreenPoint>,
    current: Option<ScreenPoint>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sub-path at `point`.
    pub fn move_to(&mut self, point: ScreenPoint) -> &mut Self {
        self.elements.push(PathElement::MoveTo(point));
        self.start = Some(point);
        self.current = Some(point);
        self
    }

    /// Draw a line to `point`. Starts a sub-path if there is none.
    pub fn line_to(&mut self, point: ScreenPoint) -> &mut Self {
        if self.current.is_none() {
            return self.move_to(point);
        }
        self.elements.push(PathElement::LineTo(point));
        self.current = Some(point);
        self
    }

    /// Draw a line relative to the current point.
    pub fn line_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        let origin = self.current.unwrap_or(ScreenPoint::new(0.0, 0.0));
        self.line_to(origin.offset(dx, dy))
    }

    /// Close the current sub-path.
    pub fn close(&mut self) -> &mut Self {
        if let Some(start) = self.start {
            self.elements.push(PathElement::Close);
            self.current = Some(start);
        }
        self
    }

    /// Current point, if any.
    pub fn current_point(&self) -> Option<ScreenPoint> {
        self.current
    }

    /// Access the path elements.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    /// Check whether the path has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Flatten into sub-paths, mapping each vertex through `map`.
    pub fn subpaths(&self, map: impl Fn(ScreenPoint) -> ScreenPoint) -> Vec<Polyline> {
        let mut out = Vec::new();
        let mut current = Polyline::default();
        for element in &self.elements {
            match *element {
                PathElement::MoveTo(point) => {
                    if !current.points.is_empty() {
                        out.push(std::mem::take(&mut current));
                    }
                    current.points.push(map(point));
                }
                PathElement::LineTo(point) => current.points.push(map(point)),
                PathElement::Close => {
                    if !current.points.is_empty() {
                        current.closed = true;
                        let start = current.points[0];
                        out.push(std::mem::take(&mut current));
                        current.points.push(start);
                    }
                }
            }
        }
        if current.points.len() > 1 || (out.is_empty() && !current.points.is_empty()) {
            out.push(current);
        }
        out
    }
}
