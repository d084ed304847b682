//! Pens, fonts and colors used by the plot renderer.

use crate::axis::AxisFormatter;
use crate::marker::MarkerClass;
use crate::render::{Color, LineCap, LineJoin, StrokeStyle, TextStyle};

/// Dash pattern of the function curve, in pixels.
pub const CURVE_DASH: [f32; 10] = [21.0, 10.0, 3.0, 10.0, 12.0, 10.0, 3.0, 10.0, 21.0, 10.0];

/// Visual theme for plots.
///
/// Built once and reused across render passes.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background.
    pub background: Color,
    /// Pen for the function curve.
    pub curve_stroke: StrokeStyle,
    /// Color of the function curve.
    pub curve: Color,
    /// Pen for axis lines and arrowheads.
    pub axis_stroke: StrokeStyle,
    /// Color of axis lines, arrowheads and labels.
    pub axis: Color,
    /// Font for the "x" and "y" axis labels.
    pub axis_font: TextStyle,
    /// Pen for point markers.
    pub marker_stroke: StrokeStyle,
    /// Marker color for samples whose integer part has only even digits.
    pub marker_even: Color,
    /// Marker color for all other samples.
    pub marker_mixed: Color,
    /// Color of grid lines, ticks and labels.
    pub grid: Color,
    /// Pen for major grid lines.
    pub grid_major_stroke: StrokeStyle,
    /// Pen for the full-length line in the middle of a grid cell.
    pub grid_mid_stroke: StrokeStyle,
    /// Pen for short sub-division ticks.
    pub grid_minor_stroke: StrokeStyle,
    /// Font for grid labels.
    pub grid_font: TextStyle,
    /// Formatter for grid labels.
    pub grid_formatter: AxisFormatter,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marker color for a marker class.
    pub fn marker_color(&self, class: MarkerClass) -> Color {
        match class {
            MarkerClass::EvenDigits => self.marker_even,
            MarkerClass::Mixed => self.marker_mixed,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            curve_stroke: StrokeStyle::solid(4.0)
                .with_cap(LineCap::Square)
                .with_join(LineJoin::Miter, 22.0)
                .with_dash(CURVE_DASH, 0.0),
            curve: Color::RED,
            axis_stroke: StrokeStyle::solid(3.0)
                .with_cap(LineCap::Butt)
                .with_join(LineJoin::Miter, 10.0),
            axis: Color::BLACK,
            axis_font: TextStyle::new("Serif", 36.0).bold(),
            marker_stroke: StrokeStyle::solid(2.0)
                .with_cap(LineCap::Butt)
                .with_join(LineJoin::Miter, 10.0),
            marker_even: Color::BLUE,
            marker_mixed: Color::BLACK,
            grid: Color::GRAY,
            grid_major_stroke: StrokeStyle::solid(1.0),
            grid_mid_stroke: StrokeStyle::solid(0.5),
            grid_minor_stroke: StrokeStyle::solid(0.3),
            grid_font: TextStyle::new("Dialog", 10.0),
            grid_formatter: AxisFormatter::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::FontWeight;

    #[test]
    fn curve_is_thicker_than_markers() {
        let theme = Theme::default();
        assert!(theme.curve_stroke.is_dashed());
        assert!(!theme.marker_stroke.is_dashed());
        assert!(theme.marker_stroke.width < theme.curve_stroke.width);
        assert_eq!(theme.curve_stroke.cap, LineCap::Square);
    }

    #[test]
    fn axis_labels_are_bold_serif() {
        let theme = Theme::default();
        assert_eq!(theme.axis_font.family, "Serif");
        assert_eq!(theme.axis_font.weight, FontWeight::Bold);
    }

    #[test]
    fn marker_colors_follow_class() {
        let theme = Theme::default();
        assert_eq!(theme.marker_color(MarkerClass::EvenDigits), Color::BLUE);
        assert_eq!(theme.marker_color(MarkerClass::Mixed), Color::BLACK);
    }
}
