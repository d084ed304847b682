use gpui::{App, Bounds, ContentMask, PathBuilder, Pixels, TextRun, Window, point, px};

use crate::geom::ScreenPoint;
use crate::render::{Color, Polyline, RenderCommand, RenderList, StrokeStyle, TextStyle, dash_polyline};

use super::text::text_font;

pub(crate) fn paint_list(
    list: &RenderList,
    bounds: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let origin = bounds.origin;
    let mask = ContentMask { bounds };
    window.with_content_mask(Some(mask), |window| {
        for command in list.commands() {
            match command {
                RenderCommand::Line {
                    start,
                    end,
                    stroke,
                    color,
                } => {
                    paint_stroke(window, origin, &[*start, *end], stroke, *color);
                }
                RenderCommand::StrokePath {
                    subpaths,
                    stroke,
                    color,
                } => {
                    for subpath in subpaths {
                        paint_stroke(window, origin, &subpath.outline(), stroke, *color);
                    }
                }
                RenderCommand::FillPath { subpaths, color } => {
                    paint_fill(window, origin, subpaths, *color);
                }
                RenderCommand::Text {
                    position,
                    text,
                    style,
                    color,
                } => {
                    paint_text(window, cx, origin, *position, text, style, *color);
                }
            }
        }
    });
}

fn paint_stroke(
    window: &mut Window,
    origin: gpui::Point<Pixels>,
    points: &[ScreenPoint],
    stroke: &StrokeStyle,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let pieces = if stroke.is_dashed() {
        dash_polyline(points, &stroke.dash, stroke.dash_phase)
    } else {
        vec![points.to_vec()]
    };

    let width = stroke.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    let mut empty = true;
    for piece in pieces.iter().filter(|piece| piece.len() > 1) {
        builder.move_to(to_pixels(origin, piece[0]));
        for pt in &piece[1..] {
            builder.line_to(to_pixels(origin, *pt));
        }
        empty = false;
    }
    if empty {
        return;
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn paint_fill(
    window: &mut Window,
    origin: gpui::Point<Pixels>,
    subpaths: &[Polyline],
    color: Color,
) {
    let mut builder = PathBuilder::fill();
    let mut empty = true;
    for subpath in subpaths.iter().filter(|subpath| subpath.points.len() > 2) {
        builder.move_to(to_pixels(origin, subpath.points[0]));
        for pt in &subpath.points[1..] {
            builder.line_to(to_pixels(origin, *pt));
        }
        builder.close();
        empty = false;
    }
    if empty {
        return;
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: gpui::Point<Pixels>,
    baseline: ScreenPoint,
    text: &str,
    style: &TextStyle,
    color: Color,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: text_font(style),
        color: to_hsla(color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(style.size), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let top = point(
        origin.x + px(baseline.x),
        origin.y + px(baseline.y) - shaped.ascent,
    );
    let _ = shaped.paint(top, line_height, window, cx);
}

fn to_pixels(origin: gpui::Point<Pixels>, pt: ScreenPoint) -> gpui::Point<Pixels> {
    point(origin.x + px(pt.x), origin.y + px(pt.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
