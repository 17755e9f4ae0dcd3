//! Visual styling for the overlay: fill color, dot lattice, inset stroke,
//! blend mode, and the global animation flag.
//!
//! Style values affect rendering and export only — changing them never
//! regenerates the underlying field.

use crate::color::Srgb;
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Default dot marker radius in pixels.
const DEFAULT_DOT_RADIUS: f64 = 1.5;
/// Default inset stroke width in pixels.
const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// All recognized blend mode names, in declaration order.
const BLEND_MODE_NAMES: &[&str] = &["normal", "multiply", "screen", "overlay", "soft_light"];

/// Blend mode applied when compositing the overlay onto the image.
///
/// Each variant maps to a CSS `mix-blend-mode` keyword, which is how both
/// the SVG export and the generated component express it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    SoftLight,
}

impl BlendMode {
    /// The CSS `mix-blend-mode` keyword for this mode.
    pub fn as_css(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::SoftLight => "soft-light",
        }
    }

    /// Parses a blend mode from its config name (snake_case, as serialized).
    ///
    /// Returns `GridError::UnknownBlendMode` for unrecognized names.
    pub fn from_name(name: &str) -> Result<Self, GridError> {
        match name {
            "normal" => Ok(BlendMode::Normal),
            "multiply" => Ok(BlendMode::Multiply),
            "screen" => Ok(BlendMode::Screen),
            "overlay" => Ok(BlendMode::Overlay),
            "soft_light" => Ok(BlendMode::SoftLight),
            _ => Err(GridError::UnknownBlendMode(name.to_string())),
        }
    }

    /// Returns a slice of all recognized mode names.
    pub fn list_names() -> &'static [&'static str] {
        BLEND_MODE_NAMES
    }
}

/// Dot markers drawn at every grid vertex, including the outer border.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotOverlay {
    pub enabled: bool,
    pub color: Srgb,
    /// Marker radius in pixels.
    pub radius: f64,
}

impl Default for DotOverlay {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Srgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            radius: DEFAULT_DOT_RADIUS,
        }
    }
}

/// Optional per-cell inset stroke.
///
/// The stroke opacity tracks each cell's fill opacity, scaled by
/// `opacity_scale`, so strokes fade with their cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetStroke {
    pub color: Srgb,
    /// Stroke width in pixels.
    pub width: f64,
    /// Multiplier applied to the cell opacity, in [0, 1].
    pub opacity_scale: f64,
}

impl Default for InsetStroke {
    fn default() -> Self {
        Self {
            color: Srgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            width: DEFAULT_STROKE_WIDTH,
            opacity_scale: 0.5,
        }
    }
}

/// The full styling surface for the overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Cell fill color.
    pub fill: Srgb,
    /// Vertex dot markers.
    pub dots: DotOverlay,
    /// Optional per-cell inset stroke.
    pub stroke: Option<InsetStroke>,
    /// How the overlay composites onto the image.
    pub blend_mode: BlendMode,
    /// Whether cells pulse. Off renders every cell at its computed opacity.
    pub animate: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            fill: Srgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            dots: DotOverlay::default(),
            stroke: None,
            blend_mode: BlendMode::Normal,
            animate: true,
        }
    }
}

impl StyleConfig {
    /// Returns a new style with the given fill color.
    pub fn with_fill(mut self, fill: Srgb) -> Self {
        self.fill = fill;
        self
    }

    /// Returns a new style with the given blend mode.
    pub fn with_blend_mode(mut self, mode: BlendMode) -> Self {
        self.blend_mode = mode;
        self
    }

    /// Returns a new style with the animation flag set.
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Validates dot radius, stroke width, and stroke opacity scale.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.dots.enabled && !(self.dots.radius.is_finite() && self.dots.radius > 0.0) {
            return Err(GridError::InvalidRange {
                name: "dot radius".to_string(),
                min: self.dots.radius,
                max: self.dots.radius,
            });
        }
        if let Some(stroke) = &self.stroke {
            if !(stroke.width.is_finite() && stroke.width > 0.0) {
                return Err(GridError::InvalidRange {
                    name: "stroke width".to_string(),
                    min: stroke.width,
                    max: stroke.width,
                });
            }
            if !(0.0..=1.0).contains(&stroke.opacity_scale) {
                return Err(GridError::InvalidRange {
                    name: "stroke opacity scale".to_string(),
                    min: stroke.opacity_scale,
                    max: stroke.opacity_scale,
                });
            }
        }
        Ok(())
    }
}
