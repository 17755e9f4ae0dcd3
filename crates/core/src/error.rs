//! Error types for the gridveil core.

use thiserror::Error;

/// Errors produced by grid, style, and export operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// Width, height, or column count was zero.
    #[error("invalid dimensions: width, height, and columns must be non-zero")]
    InvalidDimensions,

    /// The image aspect ratio was zero, negative, or not finite.
    #[error("invalid aspect ratio: {0} (must be finite and positive)")]
    InvalidAspectRatio(f64),

    /// A configured numeric range was out of bounds or inverted.
    #[error("invalid {name} range: [{min}, {max}]")]
    InvalidRange { name: String, min: f64, max: f64 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A mask index referred to a cell outside the current grid.
    #[error("cell index {index} out of bounds for grid of {cells} cells")]
    CellOutOfBounds { index: usize, cells: usize },

    /// A blend mode name was not recognized.
    #[error("unknown blend mode: {0}")]
    UnknownBlendMode(String),

    /// Archive assembly failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// An I/O operation failed.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_includes_name_and_bounds() {
        let err = GridError::InvalidRange {
            name: "opacity".into(),
            min: 0.9,
            max: 0.2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("opacity"), "missing range name in: {msg}");
        assert!(msg.contains("0.9"), "missing min in: {msg}");
        assert!(msg.contains("0.2"), "missing max in: {msg}");
    }

    #[test]
    fn cell_out_of_bounds_includes_index_and_domain() {
        let err = GridError::CellOutOfBounds {
            index: 120,
            cells: 96,
        };
        let msg = format!("{err}");
        assert!(msg.contains("120"), "missing index in: {msg}");
        assert!(msg.contains("96"), "missing cell count in: {msg}");
    }

    #[test]
    fn invalid_color_includes_message() {
        let err = GridError::InvalidColor("bad hex".into());
        let msg = format!("{err}");
        assert!(msg.contains("bad hex"), "missing message in: {msg}");
    }

    #[test]
    fn unknown_blend_mode_includes_name() {
        let err = GridError::UnknownBlendMode("dissolve".into());
        assert!(format!("{err}").contains("dissolve"));
    }

    #[test]
    fn invalid_aspect_ratio_includes_value() {
        let err = GridError::InvalidAspectRatio(-1.5);
        assert!(format!("{err}").contains("-1.5"));
    }

    #[test]
    fn grid_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridError>();
    }

    #[test]
    fn grid_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<GridError>();
    }
}
