//! Render pass: viewport fit, rotation, axes, grid, curve and markers.
//!
//! Layers are drawn in a fixed order so later ones overwrite earlier ones:
//! axes, grid, curve, markers.

use std::f64::consts::FRAC_PI_2;

use crate::axis::{Tick, TickKind, grid_ticks};
use crate::error::{RenderError, Result};
use crate::geom::{Affine, Point, ScreenPoint, ScreenSize};
use crate::marker::classify;
use crate::plot::DisplayFlags;
use crate::render::{Canvas, Path, StrokeStyle};
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::fit_viewport;

/// Half-length of a marker arm in pixels.
pub const MARKER_ARM: f32 = 5.0;
/// Half-length of the cap stroke at each marker arm end in pixels.
pub const MARKER_CAP: f32 = 2.0;

const ARROW_LENGTH: f32 = 20.0;
const ARROW_HALF_WIDTH: f32 = 5.0;
const AXIS_LABEL_GAP: f32 = 10.0;
/// Short grid ticks span 1/50 of the perpendicular data range.
const MINOR_TICK_DIVISOR: f64 = 50.0;
const X_LABEL_OFFSET: f32 = 20.0;
const LABEL_MARGIN: f32 = 5.0;

/// Run one render pass.
///
/// Returns the transform used for the pass, or `None` when there is nothing
/// to draw. The canvas state is restored before returning.
pub fn render_frame<C: Canvas>(
    canvas: &mut C,
    points: &[Point],
    flags: DisplayFlags,
    theme: &Theme,
    size: ScreenSize,
) -> Result<Option<Transform>> {
    if !size.is_valid() {
        return Err(RenderError::invalid_canvas_size(size.width, size.height));
    }
    let Some(transform) = fit_viewport(points, size) else {
        tracing::trace!("no samples to render");
        return Ok(None);
    };
    tracing::trace!(
        samples = points.len(),
        scale = transform.scale(),
        ?flags,
        "render pass"
    );

    let mut guard = canvas.save();
    if flags.rotate {
        guard.transform(rotation_transform(size));
    }
    if flags.show_axis {
        draw_axes(&mut *guard, &transform, theme);
    }
    if flags.show_grid {
        draw_grid(&mut *guard, &transform, theme);
    }
    draw_curve(&mut *guard, points, &transform, theme);
    if flags.show_markers {
        draw_markers(&mut *guard, points, &transform, theme);
    }
    Ok(Some(transform))
}

/// Quarter turn counterclockwise about the canvas center.
///
/// The non-uniform scale stretches the rotated content so it still fills the
/// canvas; on a square canvas it is the identity.
pub fn rotation_transform(size: ScreenSize) -> Affine {
    let (cx, cy) = size.center();
    Affine::translate(cx, cy)
        * Affine::rotate(-FRAC_PI_2)
        * Affine::scale(size.height / size.width, size.width / size.height)
        * Affine::translate(-cx, -cy)
}

fn draw_axes<C: Canvas>(canvas: &mut C, transform: &Transform, theme: &Theme) {
    canvas.set_stroke(theme.axis_stroke.clone());
    canvas.set_color(theme.axis);
    canvas.set_font(theme.axis_font.clone());
    let viewport = transform.viewport();

    if viewport.x.contains(0.0) {
        let tip = transform.xy_to_screen(0.0, viewport.y.max);
        canvas.stroke_line(tip, transform.xy_to_screen(0.0, viewport.y.min));

        let mut arrow = Path::new();
        arrow
            .move_to(tip)
            .line_by(ARROW_HALF_WIDTH, ARROW_LENGTH)
            .line_by(-2.0 * ARROW_HALF_WIDTH, 0.0)
            .close();
        canvas.stroke_path(&arrow);
        canvas.fill_path(&arrow);

        let bounds = canvas.text_bounds("y");
        canvas.draw_text(
            "y",
            ScreenPoint::new(tip.x + AXIS_LABEL_GAP, tip.y - bounds.y),
        );
    }

    if viewport.y.contains(0.0) {
        let tip = transform.xy_to_screen(viewport.x.max, 0.0);
        canvas.stroke_line(transform.xy_to_screen(viewport.x.min, 0.0), tip);

        let mut arrow = Path::new();
        arrow
            .move_to(tip)
            .line_by(-ARROW_LENGTH, -ARROW_HALF_WIDTH)
            .line_by(0.0, 2.0 * ARROW_HALF_WIDTH)
            .close();
        canvas.stroke_path(&arrow);
        canvas.fill_path(&arrow);

        let bounds = canvas.text_bounds("x");
        canvas.draw_text(
            "x",
            ScreenPoint::new(tip.x - bounds.width - AXIS_LABEL_GAP, tip.y + bounds.y),
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GridDirection {
    /// Lines of constant X.
    Vertical,
    /// Lines of constant Y.
    Horizontal,
}

fn draw_grid<C: Canvas>(canvas: &mut C, transform: &Transform, theme: &Theme) {
    let mut guard = canvas.save();
    guard.set_color(theme.grid);
    guard.set_font(theme.grid_font.clone());
    let viewport = transform.viewport();

    if let Some(ticks) = grid_ticks(viewport.x) {
        draw_grid_lines(&mut *guard, transform, theme, GridDirection::Vertical, &ticks.ticks);
    }
    if let Some(ticks) = grid_ticks(viewport.y) {
        draw_grid_lines(&mut *guard, transform, theme, GridDirection::Horizontal, &ticks.ticks);
    }
}

fn draw_grid_lines<C: Canvas>(
    canvas: &mut C,
    transform: &Transform,
    theme: &Theme,
    direction: GridDirection,
    ticks: &[Tick],
) {
    for tick in ticks {
        let (start, end) = grid_segment(transform, direction, *tick);
        canvas.set_stroke(grid_stroke(theme, tick.kind).clone());
        canvas.stroke_line(start, end);
        if tick.kind == TickKind::Major {
            let label = theme.grid_formatter.format(tick.value);
            let position = match direction {
                GridDirection::Vertical => ScreenPoint::new(
                    start.x - X_LABEL_OFFSET,
                    transform.size().height as f32 - LABEL_MARGIN,
                ),
                GridDirection::Horizontal => ScreenPoint::new(LABEL_MARGIN, start.y + LABEL_MARGIN),
            };
            canvas.draw_text(&label, position);
        }
    }
}

fn grid_segment(
    transform: &Transform,
    direction: GridDirection,
    tick: Tick,
) -> (ScreenPoint, ScreenPoint) {
    let viewport = transform.viewport();
    match direction {
        GridDirection::Vertical => {
            let end = match tick.kind {
                TickKind::Minor => viewport.y.min + viewport.y.span() / MINOR_TICK_DIVISOR,
                TickKind::Major | TickKind::Mid => viewport.y.max,
            };
            (
                transform.xy_to_screen(tick.value, viewport.y.min),
                transform.xy_to_screen(tick.value, end),
            )
        }
        GridDirection::Horizontal => {
            let end = match tick.kind {
                TickKind::Minor => viewport.x.min + viewport.x.span() / MINOR_TICK_DIVISOR,
                TickKind::Major | TickKind::Mid => viewport.x.max,
            };
            (
                transform.xy_to_screen(viewport.x.min, tick.value),
                transform.xy_to_screen(end, tick.value),
            )
        }
    }
}

fn grid_stroke(theme: &Theme, kind: TickKind) -> &StrokeStyle {
    match kind {
        TickKind::Major => &theme.grid_major_stroke,
        TickKind::Mid => &theme.grid_mid_stroke,
        TickKind::Minor => &theme.grid_minor_stroke,
    }
}

fn draw_curve<C: Canvas>(canvas: &mut C, points: &[Point], transform: &Transform, theme: &Theme) {
    canvas.set_stroke(theme.curve_stroke.clone());
    canvas.set_color(theme.curve);
    let mut path = Path::new();
    for (index, point) in points.iter().enumerate() {
        let screen = transform.data_to_screen(*point);
        if index == 0 {
            path.move_to(screen);
        } else {
            path.line_to(screen);
        }
    }
    canvas.stroke_path(&path);
}

fn draw_markers<C: Canvas>(
    canvas: &mut C,
    points: &[Point],
    transform: &Transform,
    theme: &Theme,
) {
    canvas.set_stroke(theme.marker_stroke.clone());
    for point in points {
        canvas.set_color(theme.marker_color(classify(point.y)));
        draw_cross(canvas, transform.data_to_screen(*point));
    }
}

fn draw_cross<C: Canvas>(canvas: &mut C, center: ScreenPoint) {
    let ScreenPoint { x, y } = center;
    canvas.stroke_line(
        ScreenPoint::new(x - MARKER_ARM, y),
        ScreenPoint::new(x + MARKER_ARM, y),
    );
    canvas.stroke_line(
        ScreenPoint::new(x, y - MARKER_ARM),
        ScreenPoint::new(x, y + MARKER_ARM),
    );
    for dy in [MARKER_ARM, -MARKER_ARM] {
        canvas.stroke_line(
            ScreenPoint::new(x - MARKER_CAP, y + dy),
            ScreenPoint::new(x + MARKER_CAP, y + dy),
        );
    }
    for dx in [-MARKER_ARM, MARKER_ARM] {
        canvas.stroke_line(
            ScreenPoint::new(x + dx, y - MARKER_CAP),
            ScreenPoint::new(x + dx, y + MARKER_CAP),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ApproxTextMeasurer, Color, RecordingCanvas, RenderCommand, RenderList};

    const ALL: DisplayFlags = DisplayFlags {
        show_axis: true,
        rotate: false,
        show_markers: true,
        show_grid: true,
    };

    fn record(points: &[Point], flags: DisplayFlags, size: ScreenSize) -> RenderList {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        render_frame(&mut canvas, points, flags, &Theme::default(), size).unwrap();
        canvas.into_list()
    }

    fn marker_lines(list: &RenderList, theme: &Theme) -> Vec<(ScreenPoint, ScreenPoint)> {
        list.commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Line {
                    start, end, stroke, ..
                } if *stroke == theme.marker_stroke => Some((*start, *end)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_samples_draw_nothing() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        let result = render_frame(
            &mut canvas,
            &[],
            ALL,
            &Theme::default(),
            ScreenSize::new(100.0, 100.0),
        );
        assert_eq!(result, Ok(None));
        assert!(canvas.list().is_empty());
    }

    #[test]
    fn invalid_canvas_is_an_error() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let result = render_frame(
            &mut canvas,
            &points,
            ALL,
            &Theme::default(),
            ScreenSize::new(0.0, 10.0),
        );
        assert_eq!(result, Err(RenderError::invalid_canvas_size(0.0, 10.0)));
        assert!(canvas.list().is_empty());
    }

    #[test]
    fn canvas_state_is_restored() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        canvas.set_color(Color::new(0.2, 0.4, 0.6, 1.0));
        let before = canvas.state();
        let points = [Point::new(-1.0, -1.0), Point::new(1.0, 1.0)];
        let flags = DisplayFlags {
            rotate: true,
            ..ALL
        };
        render_frame(
            &mut canvas,
            &points,
            flags,
            &Theme::default(),
            ScreenSize::new(300.0, 200.0),
        )
        .unwrap();
        assert_eq!(canvas.state(), before);
    }

    #[test]
    fn curve_is_a_single_path_through_every_sample() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.0),
        ];
        let flags = DisplayFlags {
            show_axis: false,
            rotate: false,
            show_markers: false,
            show_grid: false,
        };
        let list = record(&points, flags, ScreenSize::new(200.0, 200.0));
        assert_eq!(list.len(), 1);
        match &list.commands()[0] {
            RenderCommand::StrokePath {
                subpaths,
                stroke,
                color,
            } => {
                assert_eq!(subpaths.len(), 1);
                assert_eq!(subpaths[0].points.len(), 3);
                assert!(!subpaths[0].closed);
                assert_eq!(*stroke, Theme::default().curve_stroke);
                assert_eq!(*color, Color::RED);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn y_axis_arrow_and_label_follow_tip() {
        let points = [Point::new(-1.0, -1.0), Point::new(1.0, 1.0)];
        let flags = DisplayFlags {
            show_axis: true,
            rotate: false,
            show_markers: false,
            show_grid: false,
        };
        let list = record(&points, flags, ScreenSize::new(200.0, 200.0));
        let fills: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::FillPath { subpaths, .. } => Some(subpaths.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 2);
        assert_eq!(
            fills[0][0].points,
            vec![
                ScreenPoint::new(100.0, 0.0),
                ScreenPoint::new(105.0, 20.0),
                ScreenPoint::new(95.0, 20.0),
            ]
        );
        assert_eq!(
            fills[1][0].points,
            vec![
                ScreenPoint::new(200.0, 100.0),
                ScreenPoint::new(180.0, 95.0),
                ScreenPoint::new(180.0, 105.0),
            ]
        );

        let labels: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
                _ => None,
            })
            .collect();
        let ascent = 36.0 * 0.8;
        assert_eq!(labels[0].0, "y");
        assert!((labels[0].1.x - 110.0).abs() < 1e-3);
        assert!((labels[0].1.y - ascent).abs() < 1e-3);
        assert_eq!(labels[1].0, "x");
        assert!((labels[1].1.y - (100.0 - ascent)).abs() < 1e-3);
    }

    #[test]
    fn axes_hidden_when_origin_out_of_view() {
        let points = [Point::new(10.0, 10.0), Point::new(12.0, 12.0)];
        let flags = DisplayFlags {
            show_axis: true,
            rotate: false,
            show_markers: false,
            show_grid: false,
        };
        let list = record(&points, flags, ScreenSize::new(100.0, 100.0));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn grid_labels_use_two_decimals() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 100.0)];
        let flags = DisplayFlags {
            show_axis: false,
            rotate: false,
            show_markers: false,
            show_grid: true,
        };
        let list = record(&points, flags, ScreenSize::new(500.0, 500.0));
        let labels: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, position, .. } => Some((text.clone(), *position)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 22);
        assert_eq!(labels[0].0, "0.00");
        assert_eq!(labels[0].1, ScreenPoint::new(-20.0, 495.0));
        assert_eq!(labels[10].0, "100.00");
        assert_eq!(labels[11].0, "0.00");
        assert_eq!(labels[11].1, ScreenPoint::new(5.0, 505.0));
    }

    #[test]
    fn minor_ticks_are_short() {
        let points = [Point::new(0.0, 0.0), Point::new(100.0, 100.0)];
        let flags = DisplayFlags {
            show_axis: false,
            rotate: false,
            show_markers: false,
            show_grid: true,
        };
        let theme = Theme::default();
        let list = record(&points, flags, ScreenSize::new(500.0, 500.0));
        let minor = list
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Line {
                    start, end, stroke, ..
                } if *stroke == theme.grid_minor_stroke => Some((*start, *end)),
                _ => None,
            })
            .unwrap();
        assert!((minor.0.distance(minor.1) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn marker_color_follows_digit_parity() {
        let points = [Point::new(0.0, 2.0), Point::new(1.0, 21.0)];
        let flags = DisplayFlags {
            show_axis: false,
            rotate: false,
            show_markers: true,
            show_grid: false,
        };
        let list = record(&points, flags, ScreenSize::new(100.0, 100.0));
        let colors: Vec<Color> = list
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Line { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 12);
        assert!(colors[..6].iter().all(|color| *color == Color::BLUE));
        assert!(colors[6..].iter().all(|color| *color == Color::BLACK));
    }

    #[test]
    fn rotation_on_square_canvas_keeps_marker_size() {
        let theme = Theme::default();
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let flags = DisplayFlags {
            show_axis: false,
            rotate: true,
            show_markers: true,
            show_grid: false,
        };
        let list = record(&points, flags, ScreenSize::new(300.0, 300.0));
        let lines = marker_lines(&list, &theme);
        assert_eq!(lines.len(), 12);
        let lengths: Vec<f32> = lines[..6]
            .iter()
            .map(|(start, end)| start.distance(*end))
            .collect();
        let expected = [10.0, 10.0, 4.0, 4.0, 4.0, 4.0];
        for (length, expected) in lengths.iter().zip(expected) {
            assert!((length - expected).abs() < 1e-3, "{length} != {expected}");
        }
        let (start, end) = lines[0];
        assert!((start.x - end.x).abs() < 1e-3);
    }

    #[test]
    fn rotation_maps_canvas_onto_itself() {
        let size = ScreenSize::new(400.0, 200.0);
        let transform = rotation_transform(size);
        let corners = [
            (ScreenPoint::new(0.0, 0.0), ScreenPoint::new(0.0, 200.0)),
            (ScreenPoint::new(400.0, 0.0), ScreenPoint::new(0.0, 0.0)),
            (ScreenPoint::new(400.0, 200.0), ScreenPoint::new(400.0, 0.0)),
            (ScreenPoint::new(0.0, 200.0), ScreenPoint::new(400.0, 200.0)),
        ];
        for (input, expected) in corners {
            let mapped = transform.apply(input);
            assert!(mapped.distance(expected) < 1e-3, "{input:?} -> {mapped:?}");
        }
        assert!(rotation_transform(ScreenSize::new(10.0, 10.0))
            .apply(ScreenPoint::new(10.0, 0.0))
            .distance(ScreenPoint::new(0.0, 0.0))
            < 1e-4);
    }
}
