#![deny(unsafe_code)]
//! Core types for the gridveil overlay generator.
//!
//! Provides the `GridConfig`/`StyleConfig` configuration pair, the
//! counter-based `CounterRng` PRNG, the pure `generate` field generator,
//! `MaskSet`, the headless `EditorState` controller, and `Recipe`, the
//! reproducible overlay specification.

pub mod color;
pub mod config;
pub mod editor;
pub mod error;
pub mod field;
pub mod mask;
pub mod prng;
pub mod recipe;
pub mod style;

pub use color::Srgb;
pub use config::{GridConfig, ImageInfo, Span};
pub use editor::{CellState, EditorState, MASKED_DIM_OPACITY};
pub use error::GridError;
pub use field::{generate, GridCell, GridField, MAX_DELAY_SECONDS};
pub use mask::MaskSet;
pub use recipe::Recipe;
pub use style::{BlendMode, DotOverlay, InsetStroke, StyleConfig};
