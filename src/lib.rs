//! gpui_fnplot draws function plots for GPUI applications.
//! Samples are fitted to the canvas with a single uniform scale, then drawn
//! with optional axes, a graduated grid and point markers.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod frame;
pub mod geom;
pub mod gpui_backend;
pub mod marker;
pub mod plot;
pub mod render;
pub mod style;
pub mod transform;
pub mod view;

pub use axis::{AxisFormatter, AxisTicks, Tick, TickKind, grid_step, grid_ticks};
pub use error::{RenderError, Result};
pub use frame::{render_frame, rotation_transform};
pub use geom::{Affine, Point, ScreenPoint, ScreenSize};
pub use gpui_backend::{GpuiPlotView, PlotHandle, PlotViewConfig};
pub use marker::{MarkerClass, classify};
pub use plot::{DisplayFlags, Plot};
pub use render::{
    ApproxTextMeasurer, Canvas, CanvasState, Color, FontWeight, LineCap, LineJoin, Path,
    Polyline, RecordingCanvas, RenderCommand, RenderList, StateGuard, StrokeStyle, TextBounds,
    TextMeasurer, TextStyle, dash_polyline,
};
pub use style::Theme;
pub use transform::Transform;
pub use view::{Range, Viewport, fit_viewport};
