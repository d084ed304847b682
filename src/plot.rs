//! Plot model: samples, display flags and theme.

use crate::error::Result;
use crate::frame::render_frame;
use crate::geom::{Point, ScreenSize};
use crate::render::Canvas;
use crate::style::Theme;
use crate::transform::Transform;

/// Independent toggles controlling what a render pass draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    /// Draw the coordinate axes.
    pub show_axis: bool,
    /// Rotate the plot a quarter turn counterclockwise.
    pub rotate: bool,
    /// Draw a marker on every sample.
    pub show_markers: bool,
    /// Draw the graduated grid.
    pub show_grid: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            show_axis: true,
            rotate: false,
            show_markers: true,
            show_grid: false,
        }
    }
}

/// A function plot owned by the host.
///
/// Holds the sample sequence, display flags and theme. The plot never
/// schedules redraws itself; hosts re-run [`Plot::render`] after any change.
#[derive(Debug, Clone, Default)]
pub struct Plot {
    theme: Theme,
    flags: DisplayFlags,
    points: Vec<Point>,
}

impl Plot {
    /// Create an empty plot with default flags and theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the display flags.
    pub fn with_flags(mut self, flags: DisplayFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set the samples.
    pub fn with_points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.show_graphics(points);
        self
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the display flags.
    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Access the samples.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replace the samples with a newly loaded sequence.
    ///
    /// Samples are expected in ascending X order.
    pub fn show_graphics(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points = points.into_iter().collect();
        tracing::debug!(samples = self.points.len(), "plot data replaced");
    }

    /// Drop all samples.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Replace all display flags at once.
    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.flags = flags;
    }

    /// Toggle the coordinate axes.
    pub fn set_show_axis(&mut self, show_axis: bool) {
        self.flags.show_axis = show_axis;
    }

    /// Toggle the quarter-turn rotation.
    pub fn set_rotate(&mut self, rotate: bool) {
        self.flags.rotate = rotate;
    }

    /// Toggle point markers.
    pub fn set_show_markers(&mut self, show_markers: bool) {
        self.flags.show_markers = show_markers;
    }

    /// Toggle the grid.
    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.flags.show_grid = show_grid;
    }

    /// Render the plot onto a canvas of the given size.
    ///
    /// See [`render_frame`].
    pub fn render<C: Canvas>(&self, canvas: &mut C, size: ScreenSize) -> Result<Option<Transform>> {
        render_frame(canvas, &self.points, self.flags, &self.theme, size)
    }
}
