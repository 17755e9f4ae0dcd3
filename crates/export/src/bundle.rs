//! ZIP bundle assembly.
//!
//! This module is feature-gated behind `bundle` (default on) so the
//! serializer crate can be used without pulling in the `zip` dependency.
//! A bundle carries exactly three fixed entry names: the component source,
//! the integration guide, and the raw image bytes. The image entry is the
//! only optional one — a caller that failed to read the image still gets a
//! usable two-entry archive.

use std::io::{Seek, Write};

use gridveil_core::GridError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::component::COMPONENT_FILE_NAME;
use crate::guide::{GUIDE_FILE_NAME, IMAGE_FILE_NAME};

/// Fixed download name for the bundle export.
pub const BUNDLE_FILE_NAME: &str = "grid-overlay-bundle.zip";

/// What actually went into a written bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    /// Entry names in archive order.
    pub entries: Vec<String>,
    /// Whether the image bytes made it in.
    pub image_included: bool,
}

fn archive_err(e: zip::result::ZipError) -> GridError {
    GridError::Archive(e.to_string())
}

fn io_err(e: std::io::Error) -> GridError {
    GridError::Io(e.to_string())
}

/// Writes the three-entry bundle archive.
///
/// `image_bytes` is `None` when the image could not be read; the archive
/// is still produced with the component and guide entries, and the report
/// records the omission so the caller can warn.
pub fn write_bundle<W: Write + Seek>(
    writer: W,
    component_src: &str,
    guide_text: &str,
    image_bytes: Option<&[u8]>,
) -> Result<BundleReport, GridError> {
    let mut archive = ZipWriter::new(writer);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::with_capacity(3);

    archive
        .start_file(COMPONENT_FILE_NAME, deflated)
        .map_err(archive_err)?;
    archive.write_all(component_src.as_bytes()).map_err(io_err)?;
    entries.push(COMPONENT_FILE_NAME.to_string());

    archive
        .start_file(GUIDE_FILE_NAME, deflated)
        .map_err(archive_err)?;
    archive.write_all(guide_text.as_bytes()).map_err(io_err)?;
    entries.push(GUIDE_FILE_NAME.to_string());

    let image_included = match image_bytes {
        Some(bytes) => {
            // Image formats are already compressed; store them as-is.
            let stored =
                SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
            archive
                .start_file(IMAGE_FILE_NAME, stored)
                .map_err(archive_err)?;
            archive.write_all(bytes).map_err(io_err)?;
            entries.push(IMAGE_FILE_NAME.to_string());
            true
        }
        None => false,
    };

    archive.finish().map_err(archive_err)?;
    Ok(BundleReport {
        entries,
        image_included,
    })
}
