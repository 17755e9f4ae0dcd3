//! SVG document serializer.
//!
//! Emits a self-contained SVG sized to the backing image's pixel
//! dimensions: one percent-positioned rectangle per unmasked cell, plus an
//! optional lattice of dot markers at every grid vertex. Masked cells
//! contribute no markup at all.

use gridveil_core::{BlendMode, GridField, ImageInfo, MaskSet, StyleConfig};

/// Fixed download name for the SVG export.
pub const SVG_FILE_NAME: &str = "grid-overlay.svg";

/// Renders the overlay as an SVG document string.
///
/// The root `viewBox` matches the image's pixel dimensions; cell geometry
/// is expressed as percentages of the grid so the document scales with any
/// rendering size. Cell `fill-opacity` is formatted to exactly 3 decimal
/// places.
pub fn render_svg(
    field: &GridField,
    style: &StyleConfig,
    mask: &MaskSet,
    image: ImageInfo,
) -> String {
    let rows = field.rows();
    let cols = field.cols();
    let cell_w = 100.0 / cols as f64;
    let cell_h = 100.0 / rows as f64;

    let mut out = String::with_capacity(128 + field.len() * 120);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = image.width,
        h = image.height,
    ));

    let blend = match style.blend_mode {
        BlendMode::Normal => String::new(),
        mode => format!(" style=\"mix-blend-mode: {}\"", mode.as_css()),
    };
    out.push_str(&format!("  <g{blend}>\n"));

    let fill = style.fill.to_hex();
    for cell in field.cells() {
        if mask.is_masked(cell.index) {
            continue;
        }
        let row = cell.index / cols;
        let col = cell.index % cols;
        out.push_str(&format!(
            "    <rect x=\"{x:.4}%\" y=\"{y:.4}%\" width=\"{cw:.4}%\" height=\"{ch:.4}%\" fill=\"{fill}\" fill-opacity=\"{op:.3}\"",
            x = col as f64 * cell_w,
            y = row as f64 * cell_h,
            cw = cell_w,
            ch = cell_h,
            op = cell.opacity,
        ));
        if let Some(stroke) = &style.stroke {
            out.push_str(&format!(
                " stroke=\"{}\" stroke-width=\"{}\" stroke-opacity=\"{:.3}\"",
                stroke.color.to_hex(),
                stroke.width,
                cell.opacity * stroke.opacity_scale,
            ));
        }
        out.push_str("/>\n");
    }
    out.push_str("  </g>\n");

    if style.dots.enabled {
        // The lattice covers every grid vertex including the outer border,
        // independent of the mask.
        out.push_str(&format!("  <g fill=\"{}\">\n", style.dots.color.to_hex()));
        for row in 0..=rows {
            for col in 0..=cols {
                out.push_str(&format!(
                    "    <circle cx=\"{cx:.4}%\" cy=\"{cy:.4}%\" r=\"{r}\"/>\n",
                    cx = col as f64 * cell_w,
                    cy = row as f64 * cell_h,
                    r = style.dots.radius,
                ));
            }
        }
        out.push_str("  </g>\n");
    }

    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridveil_core::{generate, GridConfig, Span, Srgb};

    fn config() -> GridConfig {
        GridConfig {
            columns: 10,
            aspect_ratio: 800.0 / 600.0,
            opacity: Span::new(0.2, 0.9),
            quantize_levels: 3,
            duration: Span::new(2.0, 6.0),
            seed: 0,
        }
    }

    fn image() -> ImageInfo {
        ImageInfo::new(800, 600)
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn emits_one_rect_per_unmasked_cell() {
        let field = generate(&config());
        let mask: MaskSet = [0, 7, 42].into_iter().collect();
        let svg = render_svg(&field, &StyleConfig::default(), &mask, image());
        assert_eq!(count(&svg, "<rect"), field.len() - 3);
    }

    #[test]
    fn masked_cells_are_entirely_absent() {
        let field = generate(&config());
        let mask: MaskSet = [0].into_iter().collect();
        let svg = render_svg(&field, &StyleConfig::default(), &mask, image());
        // Cell 0 sits at x=0%, y=0%; no rect may start there.
        assert!(!svg.contains("x=\"0.0000%\" y=\"0.0000%\""));
    }

    #[test]
    fn view_box_matches_image_pixel_dimensions() {
        let field = generate(&config());
        let svg = render_svg(&field, &StyleConfig::default(), &MaskSet::new(), image());
        assert!(svg.contains("viewBox=\"0 0 800 600\""));
        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("height=\"600\""));
    }

    #[test]
    fn fill_opacity_is_three_decimals() {
        let field = generate(&config());
        let svg = render_svg(&field, &StyleConfig::default(), &MaskSet::new(), image());
        // With opacity range [0.2, 0.9] and 3 levels, only these appear.
        let on_levels = count(&svg, "fill-opacity=\"0.200\"")
            + count(&svg, "fill-opacity=\"0.550\"")
            + count(&svg, "fill-opacity=\"0.900\"");
        assert_eq!(on_levels, field.len());
    }

    #[test]
    fn dot_lattice_covers_every_vertex_regardless_of_mask() {
        let field = generate(&config());
        let mut style = StyleConfig::default();
        style.dots.enabled = true;
        let mask: MaskSet = (0..20).collect();
        let svg = render_svg(&field, &style, &mask, image());
        let expected = (field.rows() + 1) * (field.cols() + 1);
        assert_eq!(count(&svg, "<circle"), expected);
    }

    #[test]
    fn dots_disabled_emits_no_circles() {
        let field = generate(&config());
        let svg = render_svg(&field, &StyleConfig::default(), &MaskSet::new(), image());
        assert_eq!(count(&svg, "<circle"), 0);
    }

    #[test]
    fn blend_mode_attaches_to_cell_group() {
        let field = generate(&config());
        let style = StyleConfig::default().with_blend_mode(BlendMode::Multiply);
        let svg = render_svg(&field, &style, &MaskSet::new(), image());
        assert!(svg.contains("<g style=\"mix-blend-mode: multiply\">"));
    }

    #[test]
    fn normal_blend_mode_emits_no_style_attribute() {
        let field = generate(&config());
        let svg = render_svg(&field, &StyleConfig::default(), &MaskSet::new(), image());
        assert!(!svg.contains("mix-blend-mode"));
    }

    #[test]
    fn stroke_attributes_follow_cell_opacity() {
        let field = generate(&config());
        let mut style = StyleConfig::default();
        style.stroke = Some(gridveil_core::InsetStroke {
            color: Srgb::from_hex("#102030").unwrap(),
            width: 2.0,
            opacity_scale: 0.5,
        });
        let svg = render_svg(&field, &style, &MaskSet::new(), image());
        assert_eq!(count(&svg, "stroke=\"#102030\""), field.len());
        assert_eq!(count(&svg, "stroke-width=\"2\""), field.len());
        // 0.2 * 0.5 = 0.1 must appear for min-level cells.
        assert!(svg.contains("stroke-opacity=\"0.100\""));
    }

    #[test]
    fn output_is_deterministic() {
        let field = generate(&config());
        let mask: MaskSet = [3].into_iter().collect();
        let a = render_svg(&field, &StyleConfig::default(), &mask, image());
        let b = render_svg(&field, &StyleConfig::default(), &mask, image());
        assert_eq!(a, b);
    }

    #[test]
    fn document_is_well_formed_at_the_bracket_level() {
        let field = generate(&config());
        let mut style = StyleConfig::default();
        style.dots.enabled = true;
        let svg = render_svg(&field, &style, &MaskSet::new(), image());
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(count(&svg, "<g"), count(&svg, "</g>"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // rect count == rows*cols - |mask| for any mask inside the domain.
            #[test]
            fn rect_count_tracks_mask_size(
                seed: u64,
                masked in proptest::collection::btree_set(0_usize..80, 0..30),
            ) {
                let mut cfg = config();
                cfg.seed = seed;
                let field = generate(&cfg);
                let mask: MaskSet = masked.iter().copied().collect();
                let svg = render_svg(&field, &StyleConfig::default(), &mask, image());
                prop_assert_eq!(count(&svg, "<rect"), field.len() - masked.len());
            }
        }
    }
}
