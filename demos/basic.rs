use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_fnplot::{DisplayFlags, GpuiPlotView, Plot, PlotViewConfig, Point};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let samples = (0..=60).map(|i| {
                let x = -3.0 + i as f64 * 0.1;
                Point::new(x, 2.0 * x.sin())
            });

            let plot = Plot::new()
                .with_flags(DisplayFlags {
                    show_grid: true,
                    ..DisplayFlags::default()
                })
                .with_points(samples);

            let view = GpuiPlotView::with_config(plot, PlotViewConfig::default());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
