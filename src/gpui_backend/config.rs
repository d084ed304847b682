/// Configuration for the GPUI plot view.
#[derive(Debug, Clone)]
pub struct PlotViewConfig {
    /// Frames narrower or shorter than this many pixels are skipped.
    pub min_canvas_px: f32,
    /// Fill the view with the theme background before drawing.
    pub fill_background: bool,
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            min_canvas_px: 1.0,
            fill_background: true,
        }
    }
}
