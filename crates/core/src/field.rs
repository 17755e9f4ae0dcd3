//! The grid field: per-cell opacity and animation timing, generated
//! deterministically from a [`GridConfig`].
//!
//! Fields are regenerated whole on every configuration change and never
//! mutated in place. Cell identity across regenerations exists only through
//! the cell index.

use crate::config::GridConfig;
use crate::prng::CounterRng;
use serde::{Deserialize, Serialize};

/// Offset spacing between the three per-cell draw streams. Keeps opacity,
/// duration, and delay draws uncorrelated without three separate seeds.
const DURATION_DRAW_OFFSET: u64 = 10_000;
const DELAY_DRAW_OFFSET: u64 = 20_000;

/// Upper bound for the animation delay in seconds, independent of the
/// configured duration range.
pub const MAX_DELAY_SECONDS: f64 = 2.0;

/// One cell of the overlay grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Row-major index: `row * cols + col`.
    pub index: usize,
    /// Fill opacity in the configured range (quantized if requested).
    pub opacity: f64,
    /// Animation duration in seconds, in the configured range.
    pub duration: f64,
    /// Animation delay in seconds, in [0, 2).
    pub delay: f64,
}

/// An ordered, row-major sequence of grid cells with its geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridField {
    rows: usize,
    cols: usize,
    cells: Vec<GridCell>,
}

impl GridField {
    /// Row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only access to the cells in row-major order.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The cell at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }
}

/// Snaps `value` to one of `levels` evenly spaced values spanning
/// `[min, max]` inclusive of both endpoints. Fewer than two levels means
/// continuous (no snapping).
fn quantize(value: f64, min: f64, max: f64, levels: usize) -> f64 {
    if levels < 2 {
        return value;
    }
    let extent = max - min;
    if extent == 0.0 {
        return min;
    }
    let step = extent / (levels - 1) as f64;
    let k = ((value - min) / step).round();
    min + k * step
}

/// Generates the grid field for `config`. Pure and deterministic: identical
/// configs (including seed) always yield identical sequences.
///
/// Each cell takes three independent draws from the counter-based PRNG at
/// offsets `i`, `i + 10_000`, and `i + 20_000` for opacity, duration, and
/// delay respectively.
pub fn generate(config: &GridConfig) -> GridField {
    let rows = config.rows();
    let cols = config.columns;
    let rng = CounterRng::new(config.seed);

    let cells = (0..rows * cols)
        .map(|index| {
            let i = index as u64;
            let opacity = quantize(
                config.opacity.lerp(rng.draw(i)),
                config.opacity.min,
                config.opacity.max,
                config.quantize_levels,
            );
            GridCell {
                index,
                opacity,
                duration: config.duration.lerp(rng.draw(i + DURATION_DRAW_OFFSET)),
                delay: rng.draw(i + DELAY_DRAW_OFFSET) * MAX_DELAY_SECONDS,
            }
        })
        .collect();

    GridField { rows, cols, cells }
}
