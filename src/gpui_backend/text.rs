use gpui::{Font, TextRun, Window, font, px};

use crate::render::{FontWeight, TextBounds, TextMeasurer, TextStyle};

pub(crate) struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    pub(crate) fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds {
        if text.is_empty() {
            return TextBounds::default();
        }
        let run = TextRun {
            len: text.len(),
            font: text_font(style),
            color: gpui::black(),
            background_color: None,
            underline: None,
            strikethrough: None,
        };
        let shaped =
            self.window
                .text_system()
                .shape_line(text.to_string().into(), px(style.size), &[run], None);
        let ascent = f32::from(shaped.ascent);
        TextBounds {
            x: 0.0,
            y: -ascent,
            width: f32::from(shaped.width),
            height: f32::from(shaped.ascent + shaped.descent),
        }
    }
}

pub(crate) fn text_font(style: &TextStyle) -> Font {
    let mut run_font = font(style.family.clone());
    if style.weight == FontWeight::Bold {
        run_font.weight = gpui::FontWeight::BOLD;
    }
    run_font
}
