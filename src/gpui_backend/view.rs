use std::sync::{Arc, PoisonError, RwLock};

use gpui::prelude::*;
use gpui::{Bounds, Pixels, Window, canvas, div};

use crate::geom::{Point, ScreenSize};
use crate::plot::{DisplayFlags, Plot};
use crate::render::{RecordingCanvas, RenderList};

use super::config::PlotViewConfig;
use super::paint::{paint_list, to_hsla};
use super::text::GpuiTextMeasurer;

/// A GPUI view that renders a [`Plot`].
///
/// Every setter schedules a redraw; the plot itself is re-rendered from
/// scratch on each frame, so resizing the window simply refits the viewport.
#[derive(Clone)]
pub struct GpuiPlotView {
    plot: Arc<RwLock<Plot>>,
    config: PlotViewConfig,
}

impl GpuiPlotView {
    /// Create a new GPUI plot view for the given plot.
    ///
    /// Uses the default [`PlotViewConfig`].
    pub fn new(plot: Plot) -> Self {
        Self::with_config(plot, PlotViewConfig::default())
    }

    /// Create a new GPUI plot view with a custom configuration.
    pub fn with_config(plot: Plot, config: PlotViewConfig) -> Self {
        Self {
            plot: Arc::new(RwLock::new(plot)),
            config,
        }
    }

    /// Get a handle for mutating the underlying plot.
    ///
    /// Changes made through the handle show up on the next frame; call
    /// `cx.notify()` on the view to request one.
    pub fn plot_handle(&self) -> PlotHandle {
        PlotHandle {
            plot: Arc::clone(&self.plot),
        }
    }

    /// Replace the plotted samples.
    pub fn show_graphics(
        &mut self,
        points: impl IntoIterator<Item = Point>,
        cx: &mut Context<Self>,
    ) {
        self.plot_handle().write(|plot| plot.show_graphics(points));
        cx.notify();
    }

    /// Replace all display flags.
    pub fn set_flags(&mut self, flags: DisplayFlags, cx: &mut Context<Self>) {
        self.update_flags(cx, |plot| plot.set_flags(flags));
    }

    /// Toggle the coordinate axes.
    pub fn set_show_axis(&mut self, show_axis: bool, cx: &mut Context<Self>) {
        self.update_flags(cx, |plot| plot.set_show_axis(show_axis));
    }

    /// Toggle the quarter-turn rotation.
    pub fn set_rotate(&mut self, rotate: bool, cx: &mut Context<Self>) {
        self.update_flags(cx, |plot| plot.set_rotate(rotate));
    }

    /// Toggle point markers.
    pub fn set_show_markers(&mut self, show_markers: bool, cx: &mut Context<Self>) {
        self.update_flags(cx, |plot| plot.set_show_markers(show_markers));
    }

    /// Toggle the grid.
    pub fn set_show_grid(&mut self, show_grid: bool, cx: &mut Context<Self>) {
        self.update_flags(cx, |plot| plot.set_show_grid(show_grid));
    }

    fn update_flags(&mut self, cx: &mut Context<Self>, update: impl FnOnce(&mut Plot)) {
        let changed = self.plot_handle().write(|plot| {
            let before = plot.flags();
            update(plot);
            plot.flags() != before
        });
        if changed {
            cx.notify();
        }
    }
}

impl Render for GpuiPlotView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let config = self.config.clone();
        let background = self.plot_handle().read(|plot| plot.theme().background);

        div()
            .size_full()
            .when(config.fill_background, |this| this.bg(to_hsla(background)))
            .child(
                canvas(
                    move |bounds, window, _| build_frame(&plot, &config, bounds, window),
                    move |bounds, list, window, cx| {
                        paint_list(&list, bounds, window, cx);
                    },
                )
                .size_full(),
            )
    }
}

/// A handle for mutating a [`Plot`] held inside a `GpuiPlotView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct PlotHandle {
    plot: Arc<RwLock<Plot>>,
}

impl PlotHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Plot) -> R) -> R {
        let plot = self.plot.read().unwrap_or_else(PoisonError::into_inner);
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Plot) -> R) -> R {
        let mut plot = self.plot.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut plot)
    }
}

fn build_frame(
    plot: &RwLock<Plot>,
    config: &PlotViewConfig,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> RenderList {
    let width = f32::from(bounds.size.width);
    let height = f32::from(bounds.size.height);
    if width <= config.min_canvas_px || height <= config.min_canvas_px {
        return RenderList::new();
    }

    let plot = plot.read().unwrap_or_else(PoisonError::into_inner);
    let mut canvas = RecordingCanvas::new(GpuiTextMeasurer::new(window));
    if let Err(err) = plot.render(&mut canvas, ScreenSize::new(width as f64, height as f64)) {
        tracing::warn!(%err, "plot frame skipped");
    }
    canvas.into_list()
}
