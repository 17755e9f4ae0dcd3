#![deny(unsafe_code)]
//! CLI binary for the gridveil overlay generator.
//!
//! Subcommands:
//! - `svg <image>` — write the static SVG overlay document
//! - `component <image>` — emit the standalone component source
//! - `bundle <image>` — write the ZIP bundle (component + guide + image)
//! - `inspect <image>` — print the derived geometry and field summary
//! - `recipe <image>` — emit the resolved configuration as recipe JSON

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use gridveil_core::config::MIN_EDITOR_COLUMNS;
use gridveil_core::{generate, BlendMode, ImageInfo, MaskSet, Recipe, Srgb};
use gridveil_export::{render_component, render_guide, render_svg, write_bundle};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gridveil", about = "Animated grid overlay generator and exporter")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Configuration flags shared by every subcommand.
///
/// A `--recipe` file supplies the starting values; individual flags
/// override it. Without a recipe, the defaults match a fresh editor
/// session.
#[derive(Args)]
struct OverlayArgs {
    /// Backing image; its pixel dimensions drive the grid geometry.
    image: PathBuf,

    /// Recipe JSON file to start from; flags below override its values.
    #[arg(long)]
    recipe: Option<PathBuf>,

    /// Number of grid columns (minimum 5).
    #[arg(long)]
    columns: Option<usize>,

    /// Lower bound of the cell opacity range.
    #[arg(long)]
    opacity_min: Option<f64>,

    /// Upper bound of the cell opacity range.
    #[arg(long)]
    opacity_max: Option<f64>,

    /// Number of discrete opacity levels (0 or 1 = continuous).
    #[arg(long)]
    levels: Option<usize>,

    /// Shortest cell pulse duration in seconds.
    #[arg(long)]
    duration_min: Option<f64>,

    /// Longest cell pulse duration in seconds.
    #[arg(long)]
    duration_max: Option<f64>,

    /// PRNG seed for the field layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Cell fill color as a hex string (e.g. "#ffffff").
    #[arg(long)]
    fill: Option<String>,

    /// Draw dot markers at every grid vertex.
    #[arg(long)]
    dots: bool,

    /// Dot marker color.
    #[arg(long)]
    dot_color: Option<String>,

    /// Dot marker radius in pixels.
    #[arg(long)]
    dot_radius: Option<f64>,

    /// Inset stroke color (any stroke flag enables the stroke).
    #[arg(long)]
    stroke_color: Option<String>,

    /// Inset stroke width in pixels.
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Multiplier applied to the cell opacity for the stroke, in [0, 1].
    #[arg(long)]
    stroke_opacity_scale: Option<f64>,

    /// Blend mode (normal, multiply, screen, overlay, soft_light).
    #[arg(long)]
    blend: Option<String>,

    /// Disable the cell pulse animation.
    #[arg(long = "static")]
    static_cells: bool,

    /// Comma-separated cell indices to mask (e.g. "3,17,42").
    #[arg(long)]
    mask: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the static SVG overlay document.
    Svg {
        #[command(flatten)]
        overlay: OverlayArgs,

        /// Output file path.
        #[arg(short, long, default_value = gridveil_export::SVG_FILE_NAME)]
        output: PathBuf,
    },
    /// Emit the standalone component source (stdout by default).
    Component {
        #[command(flatten)]
        overlay: OverlayArgs,

        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Copy the source to the system clipboard instead of printing it.
        #[arg(long)]
        clipboard: bool,
    },
    /// Write the ZIP bundle (component + instructions + image).
    Bundle {
        #[command(flatten)]
        overlay: OverlayArgs,

        /// Output file path.
        #[arg(short, long, default_value = gridveil_export::BUNDLE_FILE_NAME)]
        output: PathBuf,
    },
    /// Print the derived geometry and a field summary.
    Inspect {
        #[command(flatten)]
        overlay: OverlayArgs,
    },
    /// Emit the resolved configuration as a recipe JSON document.
    Recipe {
        #[command(flatten)]
        overlay: OverlayArgs,

        /// Output file path (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Parses a comma-separated mask index list like `"3,17,42"`.
fn parse_mask(list: &str) -> Result<MaskSet, CliError> {
    list.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|e| CliError::Input(format!("invalid mask index '{part}': {e}")))
        })
        .collect()
}

/// Resolves the shared flags into a validated recipe.
///
/// Probes the image for its pixel dimensions (no full decode), loads the
/// recipe file if given, applies flag overrides, and validates the result.
/// A recipe recorded for a different image keeps its configuration but
/// drops its mask, the same way the editor clears the mask on image
/// change.
fn resolve(args: &OverlayArgs) -> Result<Recipe, CliError> {
    let (width, height) = image::image_dimensions(&args.image).map_err(|e| {
        CliError::Input(format!("cannot read image {}: {e}", args.image.display()))
    })?;
    let info = ImageInfo::new(width, height);

    let mut recipe = match &args.recipe {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                CliError::Io(format!("cannot read recipe {}: {e}", path.display()))
            })?;
            let mut recipe: Recipe = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid recipe JSON: {e}")))?;
            if recipe.image != info {
                recipe.image = info;
                recipe.grid.aspect_ratio = info.aspect_ratio();
                recipe.mask.clear();
            }
            recipe
        }
        None => Recipe::new(info),
    };

    if let Some(columns) = args.columns {
        if columns < MIN_EDITOR_COLUMNS {
            return Err(CliError::Input(format!(
                "--columns must be at least {MIN_EDITOR_COLUMNS}"
            )));
        }
        recipe.grid.columns = columns;
    }
    if let Some(v) = args.opacity_min {
        recipe.grid.opacity.min = v;
    }
    if let Some(v) = args.opacity_max {
        recipe.grid.opacity.max = v;
    }
    if let Some(v) = args.levels {
        recipe.grid.quantize_levels = v;
    }
    if let Some(v) = args.duration_min {
        recipe.grid.duration.min = v;
    }
    if let Some(v) = args.duration_max {
        recipe.grid.duration.max = v;
    }
    if let Some(v) = args.seed {
        recipe.grid.seed = v;
    }

    if let Some(hex) = &args.fill {
        recipe.style.fill = Srgb::from_hex(hex)?;
    }
    if args.dots {
        recipe.style.dots.enabled = true;
    }
    if let Some(hex) = &args.dot_color {
        recipe.style.dots.color = Srgb::from_hex(hex)?;
    }
    if let Some(radius) = args.dot_radius {
        recipe.style.dots.radius = radius;
    }
    if args.stroke_color.is_some()
        || args.stroke_width.is_some()
        || args.stroke_opacity_scale.is_some()
    {
        let mut stroke = recipe.style.stroke.unwrap_or_default();
        if let Some(hex) = &args.stroke_color {
            stroke.color = Srgb::from_hex(hex)?;
        }
        if let Some(width) = args.stroke_width {
            stroke.width = width;
        }
        if let Some(scale) = args.stroke_opacity_scale {
            stroke.opacity_scale = scale;
        }
        recipe.style.stroke = Some(stroke);
    }
    if let Some(name) = &args.blend {
        recipe.style.blend_mode = BlendMode::from_name(name)?;
    }
    if args.static_cells {
        recipe.style.animate = false;
    }
    if let Some(list) = &args.mask {
        let mask = parse_mask(list)?;
        recipe.mask = mask;
    }

    recipe.validate()?;
    Ok(recipe)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Svg { overlay, output } => {
            let recipe = resolve(&overlay)?;
            let field = generate(&recipe.grid);
            let svg = render_svg(&field, &recipe.style, &recipe.mask, recipe.image);
            fs::write(&output, &svg).map_err(|e| CliError::Io(e.to_string()))?;

            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "rows": field.rows(),
                    "cols": field.cols(),
                    "masked": recipe.mask.len(),
                    "bytes": svg.len(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote {}x{} cell overlay ({} masked) -> {}",
                    field.cols(),
                    field.rows(),
                    recipe.mask.len(),
                    output.display()
                );
            }
        }
        Command::Component {
            overlay,
            output,
            clipboard,
        } => {
            let recipe = resolve(&overlay)?;
            let source = render_component(&recipe.grid, &recipe.style, &recipe.mask);

            let destination = if clipboard {
                let mut clip = arboard::Clipboard::new()
                    .map_err(|e| CliError::Io(format!("clipboard unavailable: {e}")))?;
                clip.set_text(source.clone())
                    .map_err(|e| CliError::Io(format!("clipboard write failed: {e}")))?;
                "clipboard".to_string()
            } else if let Some(path) = &output {
                fs::write(path, &source).map_err(|e| CliError::Io(e.to_string()))?;
                path.display().to_string()
            } else {
                "stdout".to_string()
            };

            if cli.json {
                let mut info = serde_json::json!({
                    "destination": destination,
                    "bytes": source.len(),
                });
                if destination == "stdout" {
                    info["source"] = serde_json::Value::String(source);
                }
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if destination == "stdout" {
                print!("{source}");
            } else {
                eprintln!("component source ({} bytes) -> {destination}", source.len());
            }
        }
        Command::Bundle { overlay, output } => {
            let recipe = resolve(&overlay)?;
            let source = render_component(&recipe.grid, &recipe.style, &recipe.mask);
            let guide = render_guide(&recipe.grid, &recipe.style, &recipe.mask, recipe.image);

            // The image was readable moments ago for the dimension probe,
            // but re-reading the bytes can still fail; that failure is
            // non-fatal and the bundle ships without the image.
            let mut warning = None;
            let image_bytes = match fs::read(&overlay.image) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    warning = Some(format!(
                        "could not read image bytes ({e}); bundling without the image"
                    ));
                    None
                }
            };
            if let Some(msg) = &warning {
                if !cli.json {
                    eprintln!("warning: {msg}");
                }
            }

            let file = fs::File::create(&output).map_err(|e| CliError::Io(e.to_string()))?;
            let report = write_bundle(file, &source, &guide, image_bytes.as_deref())?;

            if cli.json {
                let info = serde_json::json!({
                    "output": output.display().to_string(),
                    "entries": report.entries,
                    "image_included": report.image_included,
                    "warning": warning,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "wrote bundle ({} entries{}) -> {}",
                    report.entries.len(),
                    if report.image_included {
                        ""
                    } else {
                        ", image omitted"
                    },
                    output.display()
                );
            }
        }
        Command::Inspect { overlay } => {
            let recipe = resolve(&overlay)?;
            let field = generate(&recipe.grid);

            if cli.json {
                let info = serde_json::json!({
                    "image": recipe.image,
                    "rows": field.rows(),
                    "cols": field.cols(),
                    "cells": field.len(),
                    "masked": recipe.mask.len(),
                    "seed": recipe.grid.seed,
                    "quantize_levels": recipe.grid.quantize_levels,
                    "field": field,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!(
                    "image:    {}x{} px (aspect {:.4})",
                    recipe.image.width,
                    recipe.image.height,
                    recipe.image.aspect_ratio()
                );
                println!(
                    "grid:     {} cols x {} rows = {} cells ({} masked)",
                    field.cols(),
                    field.rows(),
                    field.len(),
                    recipe.mask.len()
                );
                println!(
                    "opacity:  [{}, {}], {} level(s)",
                    recipe.grid.opacity.min, recipe.grid.opacity.max, recipe.grid.quantize_levels
                );
                println!(
                    "duration: [{}, {}] s, seed {}",
                    recipe.grid.duration.min, recipe.grid.duration.max, recipe.grid.seed
                );
            }
        }
        Command::Recipe { overlay, output } => {
            let recipe = resolve(&overlay)?;
            let text = serde_json::to_string_pretty(&recipe)?;
            match &output {
                Some(path) => {
                    fs::write(path, &text).map_err(|e| CliError::Io(e.to_string()))?;
                    if !cli.json {
                        eprintln!("recipe -> {}", path.display());
                    }
                }
                None => println!("{text}"),
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
