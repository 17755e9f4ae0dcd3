//! sRGB color type with hex parsing and formatting.
//!
//! Colors travel through configuration files, SVG attributes, and generated
//! component source as `"#rrggbb"` strings, so the serde representation is
//! the hex string rather than a struct.

use crate::error::GridError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `GridError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, GridError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return Err(GridError::InvalidColor(format!(
                "expected 6 hex digits, got {}",
                hex.len()
            )));
        }
        let r = u8::from_str_radix(&hex[0..2], 16)
            .map_err(|e| GridError::InvalidColor(format!("invalid red component: {e}")))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .map_err(|e| GridError::InvalidColor(format!("invalid green component: {e}")))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .map_err(|e| GridError::InvalidColor(format!("invalid blue component: {e}")))?;
        Ok(Srgb {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0-255) with rounding.
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.channels8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Returns the 8-bit channel values, clamped and rounded.
    ///
    /// Used by serializers that need numeric channels (CSS `rgba(...)`).
    pub fn channels8(self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_with_and_without_prefix() {
        let a = Srgb::from_hex("#ff8000").unwrap();
        let b = Srgb::from_hex("ff8000").unwrap();
        assert_eq!(a, b);
        assert!((a.r - 1.0).abs() < 1e-9);
        assert!((a.g - 128.0 / 255.0).abs() < 1e-9);
        assert!((a.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let lower = Srgb::from_hex("#aabbcc").unwrap();
        let upper = Srgb::from_hex("#AABBCC").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Srgb::from_hex("#fff").is_err());
        assert!(Srgb::from_hex("#ff00aabb").is_err());
        assert!(Srgb::from_hex("").is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Srgb::from_hex("#gg0000").is_err());
        assert!(Srgb::from_hex("#00zz00").is_err());
    }

    #[test]
    fn hex_round_trip_preserves_value() {
        for hex in ["#000000", "#ffffff", "#4a90d9", "#123456"] {
            let color = Srgb::from_hex(hex).unwrap();
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn to_hex_clamps_out_of_range_components() {
        let color = Srgb {
            r: 1.5,
            g: -0.2,
            b: 0.5,
        };
        assert_eq!(color.to_hex(), "#ff0080");
    }

    #[test]
    fn channels8_quantizes_with_rounding() {
        let color = Srgb::from_hex("#4a90d9").unwrap();
        assert_eq!(color.channels8(), (0x4a, 0x90, 0xd9));
    }

    #[test]
    fn serde_round_trip_as_hex_string() {
        let color = Srgb::from_hex("#8040c0").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#8040c0\"");
        let restored: Srgb = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, color);
    }

    #[test]
    fn deserialize_rejects_invalid_hex() {
        let result: Result<Srgb, _> = serde_json::from_str("\"#nothex\"");
        assert!(result.is_err());
    }
}
