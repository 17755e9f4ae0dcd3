//! Grid configuration: the validated, serializable input to the field
//! generator.
//!
//! A [`GridConfig`] captures everything the generator consumes — column
//! count, image aspect ratio, opacity and duration ranges, quantization
//! level count, and PRNG seed. Two identical configs always generate
//! identical fields.

use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Default column count for a fresh editor session.
const DEFAULT_COLUMNS: usize = 12;
/// Default opacity range — faint cells over a photograph.
const DEFAULT_OPACITY: Span = Span { min: 0.05, max: 0.45 };
/// Default number of discrete opacity levels.
const DEFAULT_QUANTIZE_LEVELS: usize = 5;
/// Default animation duration range in seconds.
const DEFAULT_DURATION: Span = Span { min: 2.0, max: 6.0 };
/// Default PRNG seed.
const DEFAULT_SEED: u64 = 42;

/// Smallest column count the editor controls allow. The core accepts any
/// non-zero value; this bound belongs to the input surface.
pub const MIN_EDITOR_COLUMNS: usize = 5;

/// A closed numeric range `[min, max]`.
///
/// Serializes as a two-element array, so configs read
/// `"opacity": [0.05, 0.45]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Maps `t` in [0, 1] onto [min, max].
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    /// Width of the range (`max - min`).
    pub fn extent(&self) -> f64 {
        self.max - self.min
    }

    /// Validates that both ends are finite and `min <= max`.
    ///
    /// `name` labels the range in the error message.
    pub fn validate(&self, name: &str) -> Result<(), GridError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(GridError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl From<[f64; 2]> for Span {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<Span> for [f64; 2] {
    fn from(span: Span) -> Self {
        [span.min, span.max]
    }
}

/// Pixel dimensions of the backing image.
///
/// The core never touches pixel data; the image contributes only its
/// aspect ratio (which drives the row derivation) and, at bundling time,
/// its raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Validates that both dimensions are non-zero.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions);
        }
        Ok(())
    }
}

/// Everything the field generator consumes.
///
/// Row count is derived, not stored: `rows = max(1, round(columns /
/// aspect_ratio))`, which keeps cells approximately square for any image
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of grid columns. Must be at least 1.
    pub columns: usize,
    /// Width/height ratio of the backing image. Must be finite and positive.
    pub aspect_ratio: f64,
    /// Per-cell opacity range; both ends in [0, 1].
    pub opacity: Span,
    /// Number of discrete opacity levels. 0 or 1 means continuous.
    pub quantize_levels: usize,
    /// Per-cell animation duration range in seconds; min must be positive.
    pub duration: Span,
    /// PRNG seed for the deterministic field layout.
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            aspect_ratio: 1.0,
            opacity: DEFAULT_OPACITY,
            quantize_levels: DEFAULT_QUANTIZE_LEVELS,
            duration: DEFAULT_DURATION,
            seed: DEFAULT_SEED,
        }
    }
}

impl GridConfig {
    /// Derived row count: `round(columns / aspect_ratio)`, floored to 1.
    pub fn rows(&self) -> usize {
        let raw = (self.columns as f64 / self.aspect_ratio).round();
        (raw as usize).max(1)
    }

    /// Total cell count (`rows * columns`).
    pub fn cell_count(&self) -> usize {
        self.rows() * self.columns
    }

    /// Validates the configuration.
    ///
    /// Checks: non-zero columns, finite positive aspect ratio, opacity
    /// range within [0, 1], duration range positive. `quantize_levels`
    /// and `seed` accept any value.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 {
            return Err(GridError::InvalidDimensions);
        }
        if !self.aspect_ratio.is_finite() || self.aspect_ratio <= 0.0 {
            return Err(GridError::InvalidAspectRatio(self.aspect_ratio));
        }
        self.opacity.validate("opacity")?;
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(GridError::InvalidRange {
                name: "opacity".to_string(),
                min: self.opacity.min,
                max: self.opacity.max,
            });
        }
        self.duration.validate("duration")?;
        if self.duration.min <= 0.0 {
            return Err(GridError::InvalidRange {
                name: "duration".to_string(),
                min: self.duration.min,
                max: self.duration.max,
            });
        }
        Ok(())
    }
}
