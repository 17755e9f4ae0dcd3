//! Reproducible specification for one overlay.
//!
//! A [`Recipe`] captures everything needed to recreate an overlay exactly:
//! image dimensions, grid configuration, style, and mask. Two identical
//! recipes fed to the same exporter produce byte-identical SVG and bundle
//! output (the generated component intentionally re-rolls its field at its
//! own runtime).

use crate::config::{GridConfig, ImageInfo};
use crate::error::GridError;
use crate::mask::MaskSet;
use crate::style::StyleConfig;
use serde::{Deserialize, Serialize};

/// Reproducible specification for an overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub image: ImageInfo,
    pub grid: GridConfig,
    pub style: StyleConfig,
    #[serde(default)]
    pub mask: MaskSet,
}

impl Recipe {
    /// Creates a recipe for the given image with default grid and style.
    ///
    /// The grid aspect ratio is taken from the image.
    pub fn new(image: ImageInfo) -> Self {
        Self {
            image,
            grid: GridConfig {
                aspect_ratio: image.aspect_ratio(),
                ..GridConfig::default()
            },
            style: StyleConfig::default(),
            mask: MaskSet::new(),
        }
    }

    /// Validates every part and checks the mask against the grid's cell
    /// domain.
    pub fn validate(&self) -> Result<(), GridError> {
        self.image.validate()?;
        self.grid.validate()?;
        self.style.validate()?;
        self.mask.validate_domain(self.grid.cell_count())
    }
}
