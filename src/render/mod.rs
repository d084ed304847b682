//! Drawing capability, style descriptors and render command lists.
//!
//! The plot pipeline draws through the [`Canvas`] trait. [`RecordingCanvas`]
//! implements it by appending backend-agnostic [`RenderCommand`]s to a
//! [`RenderList`], which render backends (such as the GPUI backend) replay.

mod canvas;
mod dash;
mod recording;

pub use canvas::{Canvas, CanvasState, Path, PathElement, Polyline, StateGuard};
pub use dash::dash_polyline;
pub use recording::{ApproxTextMeasurer, RecordingCanvas, TextMeasurer};

use crate::geom::ScreenPoint;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(0.5, 0.5, 0.5, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Shape drawn at the open ends of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// End flush with the path.
    #[default]
    Butt,
    /// Extend by half the stroke width.
    Square,
    /// Half-circle end.
    Round,
}

/// Shape drawn where stroke segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Sharp corner, bevelled past the miter limit.
    #[default]
    Miter,
    /// Flat corner.
    Bevel,
    /// Rounded corner.
    Round,
}

/// Pen used for strokes.
///
/// The width is expressed in logical pixels. An empty dash pattern draws a
/// solid line; otherwise entries alternate between drawn and skipped lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in pixels.
    pub width: f32,
    /// End cap.
    pub cap: LineCap,
    /// Segment join.
    pub join: LineJoin,
    /// Miter limit for [`LineJoin::Miter`].
    pub miter_limit: f32,
    /// Dash pattern in pixels.
    pub dash: Vec<f32>,
    /// Offset into the dash pattern at the start of the path.
    pub dash_phase: f32,
}

impl StrokeStyle {
    /// Solid stroke with butt caps and miter joins.
    pub fn solid(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Set the end cap.
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    /// Set the join and miter limit.
    pub fn with_join(mut self, join: LineJoin, miter_limit: f32) -> Self {
        self.join = join;
        self.miter_limit = miter_limit;
        self
    }

    /// Set the dash pattern and phase.
    pub fn with_dash(mut self, dash: impl Into<Vec<f32>>, phase: f32) -> Self {
        self.dash = dash.into();
        self.dash_phase = phase;
        self
    }

    /// Check whether the stroke is dashed.
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: Vec::new(),
            dash_phase: 0.0,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font family name.
    pub family: String,
    /// Font size in pixels.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
}

impl TextStyle {
    /// Create a regular-weight text style.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Normal,
        }
    }

    /// Switch to bold weight.
    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new("Dialog", 12.0)
    }
}

/// Logical bounds of a rendered string relative to its baseline origin.
///
/// `y` is the negative ascent, so `baseline - y` is the top of the text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    /// Left offset from the origin.
    pub x: f32,
    /// Top offset from the baseline (negative).
    pub y: f32,
    /// Advance width.
    pub width: f32,
    /// Line height.
    pub height: f32,
}

/// Render command list.
///
/// Geometry is in canvas pixels with the canvas transform already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Stroke a single segment.
    Line {
        /// Segment start.
        start: ScreenPoint,
        /// Segment end.
        end: ScreenPoint,
        /// Pen.
        stroke: StrokeStyle,
        /// Stroke color.
        color: Color,
    },
    /// Stroke the outline of a path.
    StrokePath {
        /// Sub-paths of the path.
        subpaths: Vec<Polyline>,
        /// Pen.
        stroke: StrokeStyle,
        /// Stroke color.
        color: Color,
    },
    /// Fill the interior of a path.
    FillPath {
        /// Sub-paths of the path.
        subpaths: Vec<Polyline>,
        /// Fill color.
        color: Color,
    },
    /// Draw text with its baseline starting at `position`.
    Text {
        /// Baseline origin.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Font.
        style: TextStyle,
        /// Text color.
        color: Color,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
