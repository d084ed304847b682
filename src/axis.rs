//! Grid step selection, grid tick layout, and label formatting.

use std::sync::Arc;

use crate::view::Range;

/// Number of grid cells the step selector aims for across a range.
pub const GRID_DIVISIONS: f64 = 10.0;

/// Candidate multipliers for a grid step, in selection order.
pub const NICE_STEPS: [f64; 7] = [0.1, 0.2, 0.5, 1.0, 20.0, 50.0, 100.0];

/// Number of sub-divisions inside one grid cell.
pub const SUBDIVISIONS: usize = 10;

/// Sub-division drawn as a full-length line.
pub const MID_SUBDIVISION: usize = 5;

/// Upper bound on major grid lines per axis.
pub const MAX_GRID_LINES: usize = 1000;

/// Pick a readable grid spacing for a data range.
///
/// The rough step `range / 10` is normalised by its power of ten and snapped
/// to the nearest entry of [`NICE_STEPS`]; the first candidate wins a tie.
/// Returns `None` when the range is not finite and positive.
pub fn grid_step(range: f64) -> Option<f64> {
    if !range.is_finite() || range <= 0.0 {
        return None;
    }
    let rough = range / GRID_DIVISIONS;
    let magnitude = 10_f64.powf(rough.log10().floor());
    let normalized = rough / magnitude;

    let mut best = NICE_STEPS[0];
    let mut best_diff = (normalized - best).abs();
    for candidate in NICE_STEPS {
        let diff = (normalized - candidate).abs();
        if diff < best_diff {
            best_diff = diff;
            best = candidate;
        }
    }
    Some(best * magnitude)
}

/// Kind of grid tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    /// Labelled line on a step boundary.
    Major,
    /// Full-length line in the middle of a cell.
    Mid,
    /// Short tick inside a cell.
    Minor,
}

/// A grid tick in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Position along the axis.
    pub value: f64,
    /// Tick kind.
    pub kind: TickKind,
}

/// Grid ticks for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    /// Spacing between major lines.
    pub step: f64,
    /// Ticks in drawing order: each major line followed by its sub-divisions.
    pub ticks: Vec<Tick>,
}

impl AxisTicks {
    /// Iterate over major ticks only.
    pub fn majors(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter().filter(|tick| tick.kind == TickKind::Major)
    }
}

/// Lay out grid ticks for a visible range.
///
/// Major lines start at the step multiple at or below `range.min` and run up
/// to `range.max`. A cell gets its sub-divisions only when the next major
/// line is still inside the range.
pub fn grid_ticks(range: Range) -> Option<AxisTicks> {
    let step = grid_step(range.span())?;
    let start = (range.min / step).floor() * step;
    let sub_step = step / SUBDIVISIONS as f64;
    let mut ticks = Vec::new();

    for index in 0..MAX_GRID_LINES {
        let value = start + index as f64 * step;
        if value > range.max {
            return Some(AxisTicks { step, ticks });
        }
        ticks.push(Tick {
            value,
            kind: TickKind::Major,
        });
        if value + step <= range.max {
            for sub in 1..SUBDIVISIONS {
                let kind = if sub == MID_SUBDIVISION {
                    TickKind::Mid
                } else {
                    TickKind::Minor
                };
                ticks.push(Tick {
                    value: value + sub as f64 * sub_step,
                    kind,
                });
            }
        }
    }

    tracing::warn!(
        min = range.min,
        max = range.max,
        step,
        "grid line limit reached"
    );
    Some(AxisTicks { step, ticks })
}

/// Formatter for grid labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Fixed two-decimal formatter.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format!("{value:.2}"),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}
