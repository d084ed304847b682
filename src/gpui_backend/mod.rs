//! GPUI integration for gpui_fnplot.
//!
//! This module provides a GPUI view that renders a [`Plot`](crate::plot::Plot)
//! by recording a render pass into a command list during prepaint and
//! replaying it onto the window during paint.

mod config;
mod paint;
mod text;
mod view;

pub use config::PlotViewConfig;
pub use view::{GpuiPlotView, PlotHandle};
