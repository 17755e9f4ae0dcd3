//! Standalone component source generation.
//!
//! Emits the literal source text of a self-rendering React component that
//! reproduces the overlay without the editor present. The current grid and
//! style values are hard-coded as top-level constants; the field itself is
//! re-rolled at the component's own mount time with unseeded randomness, so
//! every embedding gets a fresh layout shaped by the same ranges. Masked
//! cells render as empty placeholders to preserve the grid flow.
//!
//! The emitted artifact's external contract: React plus framer-motion, and
//! one image asset served at [`IMAGE_ASSET_PATH`].

use gridveil_core::{GridConfig, MaskSet, StyleConfig};

/// Fixed file name of the emitted component.
pub const COMPONENT_FILE_NAME: &str = "GridOverlay.jsx";

/// URL the emitted component expects the backing image at.
pub const IMAGE_ASSET_PATH: &str = "/grid-image.png";

/// Formats an f64 as a JavaScript number literal (shortest round-trip).
fn js_num(v: f64) -> String {
    format!("{v}")
}

/// Formats the mask as a JavaScript `new Set([...])` literal.
fn js_mask(mask: &MaskSet) -> String {
    let indices: Vec<String> = mask.iter().map(|i| i.to_string()).collect();
    format!("new Set([{}])", indices.join(", "))
}

/// Renders the standalone component source for the current configuration.
///
/// The grid's edited seed is deliberately not propagated: the component
/// draws from `Math.random()` at mount. Re-export from the same recipe for
/// exact reproduction instead.
pub fn render_component(grid: &GridConfig, style: &StyleConfig, mask: &MaskSet) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("import React, { useMemo } from \"react\";\n");
    out.push_str("import { motion } from \"framer-motion\";\n\n");
    out.push_str("// Animated grid overlay generated by gridveil.\n");
    out.push_str("// Render inside a `position: relative` container that also holds the\n");
    out.push_str(&format!(
        "// backing image (served from {IMAGE_ASSET_PATH}).\n\n"
    ));

    out.push_str(&format!("const COLUMNS = {};\n", grid.columns));
    out.push_str(&format!("const ROWS = {};\n", grid.rows()));
    out.push_str(&format!("const OPACITY_MIN = {};\n", js_num(grid.opacity.min)));
    out.push_str(&format!("const OPACITY_MAX = {};\n", js_num(grid.opacity.max)));
    out.push_str(&format!("const OPACITY_LEVELS = {};\n", grid.quantize_levels));
    out.push_str(&format!("const DURATION_MIN = {};\n", js_num(grid.duration.min)));
    out.push_str(&format!("const DURATION_MAX = {};\n", js_num(grid.duration.max)));
    out.push_str(&format!(
        "const MAX_DELAY = {};\n",
        js_num(gridveil_core::MAX_DELAY_SECONDS)
    ));
    out.push_str(&format!("const BLEND_MODE = \"{}\";\n", style.blend_mode.as_css()));
    out.push_str(&format!("const ANIMATE = {};\n", style.animate));
    out.push_str(&format!("const MASKED_CELLS = {};\n", js_mask(mask)));
    if style.dots.enabled {
        out.push_str(&format!(
            "const DOT_RADIUS = {};\n",
            js_num(style.dots.radius)
        ));
        out.push_str(&format!(
            "const DOT_COLOR = \"{}\";\n",
            style.dots.color.to_hex()
        ));
    }
    out.push('\n');

    out.push_str("const CELL_STYLE = {\n");
    out.push_str(&format!(
        "  backgroundColor: \"{}\",\n",
        style.fill.to_hex()
    ));
    if let Some(stroke) = &style.stroke {
        // The element's own opacity already carries the cell opacity, so
        // the shadow alpha only needs the configured scale.
        let (r, g, b) = stroke.color.channels8();
        out.push_str(&format!(
            "  boxShadow: \"inset 0 0 0 {}px rgba({r}, {g}, {b}, {})\",\n",
            js_num(stroke.width),
            js_num(stroke.opacity_scale),
        ));
    }
    out.push_str("};\n\n");

    out.push_str(
        r#"// Each mount rolls a fresh field shaped by the ranges above.
function buildCells() {
  const cells = [];
  for (let i = 0; i < ROWS * COLUMNS; i += 1) {
    let opacity = OPACITY_MIN + Math.random() * (OPACITY_MAX - OPACITY_MIN);
    if (OPACITY_LEVELS > 1) {
      const step = (OPACITY_MAX - OPACITY_MIN) / (OPACITY_LEVELS - 1);
      opacity = OPACITY_MIN + Math.round((opacity - OPACITY_MIN) / step) * step;
    }
    cells.push({
      opacity,
      duration: DURATION_MIN + Math.random() * (DURATION_MAX - DURATION_MIN),
      delay: Math.random() * MAX_DELAY,
    });
  }
  return cells;
}

export default function GridOverlay() {
  const cells = useMemo(buildCells, []);
  return (
    <div
      style={{
        position: "absolute",
        inset: 0,
        display: "grid",
        gridTemplateColumns: `repeat(${COLUMNS}, 1fr)`,
        gridTemplateRows: `repeat(${ROWS}, 1fr)`,
        mixBlendMode: BLEND_MODE,
        pointerEvents: "none",
      }}
    >
      {cells.map((cell, i) => {
        if (MASKED_CELLS.has(i)) {
          return <div key={i} />;
        }
        if (!ANIMATE) {
          return <div key={i} style={{ ...CELL_STYLE, opacity: cell.opacity }} />;
        }
        return (
          <motion.div
            key={i}
            style={CELL_STYLE}
            initial={{ opacity: 0 }}
            animate={{ opacity: [0, cell.opacity, 0] }}
            transition={{
              duration: cell.duration,
              delay: cell.delay,
              repeat: Infinity,
              ease: "easeInOut",
            }}
          />
        );
      })}
"#,
    );

    if style.dots.enabled {
        out.push_str(
            r#"      <div style={{ position: "absolute", inset: 0 }}>
        {Array.from({ length: (ROWS + 1) * (COLUMNS + 1) }, (_, i) => {
          const row = Math.floor(i / (COLUMNS + 1));
          const col = i % (COLUMNS + 1);
          return (
            <div
              key={i}
              style={{
                position: "absolute",
                left: `${(col / COLUMNS) * 100}%`,
                top: `${(row / ROWS) * 100}%`,
                width: DOT_RADIUS * 2,
                height: DOT_RADIUS * 2,
                marginLeft: -DOT_RADIUS,
                marginTop: -DOT_RADIUS,
                borderRadius: "50%",
                backgroundColor: DOT_COLOR,
              }}
            />
          );
        })}
      </div>
"#,
        );
    }

    out.push_str("    </div>\n  );\n}\n");
    out
}
