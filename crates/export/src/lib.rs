#![deny(unsafe_code)]
//! Export serializers for gridveil.
//!
//! Three re-projections of one generated field: a static SVG document, the
//! source text of a standalone animated component, and a ZIP bundle of the
//! component plus an integration guide plus the image bytes. All three
//! consume the same `(field, config, style, mask)` tuple and mutate
//! nothing.
//!
//! The `bundle` feature (default on) gates the `zip` dependency; the SVG
//! and component serializers are plain string assembly and always
//! available.

pub mod component;
pub mod guide;
pub mod svg;

#[cfg(feature = "bundle")]
pub mod bundle;

pub use component::{render_component, COMPONENT_FILE_NAME, IMAGE_ASSET_PATH};
pub use guide::{render_guide, GUIDE_FILE_NAME, IMAGE_FILE_NAME};
pub use svg::{render_svg, SVG_FILE_NAME};

#[cfg(feature = "bundle")]
pub use bundle::{write_bundle, BundleReport, BUNDLE_FILE_NAME};
