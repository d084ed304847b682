use gpui_fnplot::{
    ApproxTextMeasurer, DisplayFlags, Plot, Point, RecordingCanvas, RenderCommand, RenderError,
    ScreenSize, Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Layer {
    Axis,
    Grid,
    Curve,
    Marker,
}

fn layer_of(command: &RenderCommand, theme: &Theme) -> Layer {
    match command {
        RenderCommand::Line { stroke, color, .. } | RenderCommand::StrokePath { stroke, color, .. } => {
            if *stroke == theme.marker_stroke {
                Layer::Marker
            } else if *stroke == theme.curve_stroke && *color == theme.curve {
                Layer::Curve
            } else if *stroke == theme.axis_stroke && *color == theme.axis {
                Layer::Axis
            } else if *color == theme.grid {
                Layer::Grid
            } else {
                panic!("unexpected stroke command: {command:?}");
            }
        }
        RenderCommand::FillPath { color, .. } => {
            assert_eq!(*color, theme.axis, "only arrowheads are filled");
            Layer::Axis
        }
        RenderCommand::Text { style, .. } => {
            if *style == theme.axis_font {
                Layer::Axis
            } else if *style == theme.grid_font {
                Layer::Grid
            } else {
                panic!("unexpected text command: {command:?}");
            }
        }
    }
}

fn all_layers() -> DisplayFlags {
    DisplayFlags {
        show_axis: true,
        rotate: false,
        show_markers: true,
        show_grid: true,
    }
}

#[test]
fn layers_are_drawn_in_fixed_order() {
    let plot = Plot::new()
        .with_flags(all_layers())
        .with_points([Point::new(-1.0, -1.0), Point::new(1.0, 1.0)]);
    let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);

    let transform = plot
        .render(&mut canvas, ScreenSize::new(500.0, 500.0))
        .expect("valid canvas")
        .expect("samples present");
    assert_eq!(transform.scale(), 250.0);

    let theme = plot.theme();
    let layers: Vec<Layer> = canvas
        .list()
        .commands()
        .iter()
        .map(|command| layer_of(command, theme))
        .collect();

    assert!(layers.windows(2).all(|pair| pair[0] <= pair[1]));
    for layer in [Layer::Axis, Layer::Grid, Layer::Curve, Layer::Marker] {
        assert!(layers.contains(&layer), "missing {layer:?}");
    }
    // One cross of six strokes per sample.
    assert_eq!(layers.iter().filter(|l| **l == Layer::Marker).count(), 12);
}

#[test]
fn empty_plot_records_nothing() {
    let plot = Plot::new().with_flags(all_layers());
    let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);

    let result = plot.render(&mut canvas, ScreenSize::new(400.0, 300.0));

    assert_eq!(result, Ok(None));
    assert!(canvas.list().is_empty());
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let plot = Plot::new().with_points([Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);

    let result = plot.render(&mut canvas, ScreenSize::new(0.0, 300.0));

    assert!(matches!(result, Err(RenderError::InvalidCanvasSize { .. })));
    assert!(canvas.list().is_empty());
}

#[test]
fn rotated_pass_still_fills_canvas() {
    let plot = Plot::new()
        .with_flags(DisplayFlags {
            rotate: true,
            ..DisplayFlags::default()
        })
        .with_points([Point::new(0.0, 0.0), Point::new(2.0, 1.0)]);
    let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);

    plot.render(&mut canvas, ScreenSize::new(400.0, 200.0))
        .expect("valid canvas");

    let curve = canvas
        .list()
        .commands()
        .iter()
        .find_map(|command| match command {
            RenderCommand::StrokePath {
                subpaths, color, ..
            } if *color == plot.theme().curve => Some(subpaths.clone()),
            _ => None,
        })
        .expect("curve recorded");
    let points = &curve[0].points;
    let first = points[0];
    let last = points[points.len() - 1];
    // Data origin (bottom-left) lands on the bottom-right corner after a quarter turn.
    assert!((first.x - 400.0).abs() < 1e-3 && (first.y - 200.0).abs() < 1e-3);
    // The far corner (top-right) lands on the top-left corner.
    assert!(last.x.abs() < 1e-3 && last.y.abs() < 1e-3);
}
