use super::{
    Canvas, CanvasState, Color, FontWeight, Path, Polyline, RenderCommand, RenderList,
    StrokeStyle, TextBounds, TextStyle,
};
use crate::geom::{Affine, ScreenPoint};

/// Font metrics provider.
pub trait TextMeasurer {
    /// Bounds of `text` rendered in `style`, relative to its baseline origin.
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds;
}

/// Metric estimate from the font size alone.
///
/// Useful for headless rendering where no text system is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds {
        let advance = match style.weight {
            FontWeight::Normal => 0.55,
            FontWeight::Bold => 0.6,
        };
        let ascent = style.size * 0.8;
        TextBounds {
            x: 0.0,
            y: -ascent,
            width: text.chars().count() as f32 * style.size * advance,
            height: style.size * 1.15,
        }
    }
}

/// A [`Canvas`] that records draw calls into a [`RenderList`].
///
/// Geometry is mapped through the current transform at record time, and every
/// command carries the pen, color and font that were selected when it was
/// issued. Text is positioned through the transform but stays upright.
#[derive(Debug, Clone)]
pub struct RecordingCanvas<M> {
    list: RenderList,
    state: CanvasState,
    measurer: M,
}

impl<M: TextMeasurer> RecordingCanvas<M> {
    /// Create an empty recording with default canvas state.
    pub fn new(measurer: M) -> Self {
        Self {
            list: RenderList::new(),
            state: CanvasState::default(),
            measurer,
        }
    }

    /// Access the recorded commands.
    pub fn list(&self) -> &RenderList {
        &self.list
    }

    /// Finish recording.
    pub fn into_list(self) -> RenderList {
        self.list
    }

    fn map(&self, point: ScreenPoint) -> ScreenPoint {
        self.state.transform.apply(point)
    }

    fn subpaths(&self, path: &Path) -> Vec<Polyline> {
        let transform = self.state.transform;
        path.subpaths(|point| transform.apply(point))
    }
}

impl<M: TextMeasurer> Canvas for RecordingCanvas<M> {
    fn state(&self) -> CanvasState {
        self.state.clone()
    }

    fn restore(&mut self, state: CanvasState) {
        self.state = state;
    }

    fn set_stroke(&mut self, stroke: StrokeStyle) {
        self.state.stroke = stroke;
    }

    fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn set_font(&mut self, font: TextStyle) {
        self.state.font = font;
    }

    fn transform(&mut self, affine: Affine) {
        self.state.transform = self.state.transform * affine;
    }

    fn stroke_line(&mut self, start: ScreenPoint, end: ScreenPoint) {
        self.list.push(RenderCommand::Line {
            start: self.map(start),
            end: self.map(end),
            stroke: self.state.stroke.clone(),
            color: self.state.color,
        });
    }

    fn stroke_path(&mut self, path: &Path) {
        if path.is_empty() {
            return;
        }
        self.list.push(RenderCommand::StrokePath {
            subpaths: self.subpaths(path),
            stroke: self.state.stroke.clone(),
            color: self.state.color,
        });
    }

    fn fill_path(&mut self, path: &Path) {
        if path.is_empty() {
            return;
        }
        self.list.push(RenderCommand::FillPath {
            subpaths: self.subpaths(path),
            color: self.state.color,
        });
    }

    fn draw_text(&mut self, text: &str, position: ScreenPoint) {
        self.list.push(RenderCommand::Text {
            position: self.map(position),
            text: text.to_string(),
            style: self.state.font.clone(),
            color: self.state.color,
        });
    }

    fn text_bounds(&self, text: &str) -> TextBounds {
        self.measurer.measure(text, &self.state.font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_state() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        let before = canvas.state();
        {
            let mut guard = canvas.save();
            guard.set_color(Color::RED);
            guard.set_stroke(StrokeStyle::solid(4.0));
            guard.transform(Affine::translate(5.0, 5.0));
            assert_eq!(guard.state().color, Color::RED);
        }
        assert_eq!(canvas.state(), before);
    }

    #[test]
    fn commands_capture_current_pen() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        canvas.set_color(Color::BLUE);
        canvas.set_stroke(StrokeStyle::solid(2.0));
        canvas.transform(Affine::translate(1.0, 2.0));
        canvas.stroke_line(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(3.0, 0.0));
        let list = canvas.into_list();
        assert_eq!(
            list.commands(),
            &[RenderCommand::Line {
                start: ScreenPoint::new(1.0, 2.0),
                end: ScreenPoint::new(4.0, 2.0),
                stroke: StrokeStyle::solid(2.0),
                color: Color::BLUE,
            }]
        );
    }

    #[test]
    fn bounds_use_current_font() {
        let mut canvas = RecordingCanvas::new(ApproxTextMeasurer);
        canvas.set_font(TextStyle::new("Serif", 20.0));
        let bounds = canvas.text_bounds("xy");
        assert!(bounds.y < 0.0);
        assert!((bounds.width - 22.0).abs() < 1e-4);
    }
}
