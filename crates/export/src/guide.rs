//! Integration guide generation.
//!
//! The bundle ships a plain-text document that walks an implementer (human
//! or automated) through wiring the generated component into a React
//! project: file placement, the one external dependency, layering
//! requirements, and a worked usage example.

use gridveil_core::{BlendMode, GridConfig, ImageInfo, MaskSet, StyleConfig};

use crate::component::{COMPONENT_FILE_NAME, IMAGE_ASSET_PATH};

/// Fixed file name of the instruction document.
pub const GUIDE_FILE_NAME: &str = "INSTRUCTIONS.md";

/// Entry name the bundle stores the image bytes under.
pub const IMAGE_FILE_NAME: &str = "grid-image.png";

/// Renders the integration guide for the current configuration.
pub fn render_guide(
    grid: &GridConfig,
    style: &StyleConfig,
    mask: &MaskSet,
    image: ImageInfo,
) -> String {
    let mut out = String::with_capacity(2048);

    out.push_str("# Grid overlay integration\n\n");
    out.push_str("This bundle contains three files:\n\n");
    out.push_str(&format!(
        "- `{COMPONENT_FILE_NAME}` — the overlay component\n\
         - `{GUIDE_FILE_NAME}` — this document\n\
         - `{IMAGE_FILE_NAME}` — the backing image ({}x{} px)\n\n",
        image.width, image.height,
    ));

    out.push_str("## Install the dependency\n\n");
    out.push_str("The component animates each cell with framer-motion:\n\n");
    out.push_str("    npm install framer-motion\n\n");

    out.push_str("## Place the files\n\n");
    out.push_str(&format!(
        "1. Copy `{COMPONENT_FILE_NAME}` into your component tree, e.g.\n\
         \x20  `src/components/{COMPONENT_FILE_NAME}`.\n\
         2. Copy `{IMAGE_FILE_NAME}` into your static assets so it is served\n\
         \x20  at `{IMAGE_ASSET_PATH}` (for Vite or Create React App that is the\n\
         \x20  `public/` directory).\n\n",
    ));

    out.push_str("## Layering\n\n");
    out.push_str(
        "The overlay fills its nearest positioned ancestor and must sit\n\
         above the image: give the shared container `position: relative`,\n\
         render the image first and the overlay second (or raise the\n\
         overlay with an explicit z-index). The overlay sets\n\
         `pointer-events: none`, so clicks fall through to the page.\n\n",
    );

    out.push_str("## Usage\n\n");
    out.push_str(&format!(
        "    import GridOverlay from \"./components/GridOverlay\";\n\n\
         \x20   <div style={{{{ position: \"relative\" }}}}>\n\
         \x20     <img src=\"{IMAGE_ASSET_PATH}\" alt=\"\" style={{{{ display: \"block\", width: \"100%\" }}}} />\n\
         \x20     <GridOverlay />\n\
         \x20   </div>\n\n",
    ));

    out.push_str("## What it renders\n\n");
    out.push_str(&format!(
        "- a {} x {} grid of `{}` cells",
        grid.columns,
        grid.rows(),
        style.fill.to_hex(),
    ));
    if style.blend_mode != BlendMode::Normal {
        out.push_str(&format!(
            " blended with `mix-blend-mode: {}`",
            style.blend_mode.as_css()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "- cell opacity {} to {}{}, re-rolled on every mount\n",
        grid.opacity.min,
        grid.opacity.max,
        if grid.quantize_levels >= 2 {
            format!(" over {} discrete levels", grid.quantize_levels)
        } else {
            String::new()
        },
    ));
    if style.animate {
        out.push_str(&format!(
            "- pulse duration {} to {} s with up to 2 s of per-cell delay\n",
            grid.duration.min, grid.duration.max,
        ));
    } else {
        out.push_str("- animation disabled: cells hold their opacity\n");
    }
    if !mask.is_empty() {
        out.push_str(&format!(
            "- {} masked cell(s) kept as empty placeholders\n",
            mask.len()
        ));
    }
    if style.dots.enabled {
        out.push_str(&format!(
            "- a dot marker at every grid vertex ({} colored, radius {} px)\n",
            style.dots.color.to_hex(),
            style.dots.radius,
        ));
    }
    if let Some(stroke) = &style.stroke {
        out.push_str(&format!(
            "- an inset cell stroke ({}, {} px)\n",
            stroke.color.to_hex(),
            stroke.width,
        ));
    }

    out
}
