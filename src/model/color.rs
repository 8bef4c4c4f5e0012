//! Hex color values as used by color tables and swatches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorParseError;

/// A validated `#RGB` or `#RRGGBB` color.
///
/// The text is kept as written so that a color supplied by the user is shown
/// back unchanged; comparisons are on that text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a hex color.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Build a `#rrggbb` color from bytes.
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    /// The color text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RGB bytes, expanding the short form.
    pub fn to_rgb(&self) -> [u8; 3] {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if digits.len() == 3 {
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                out[i] = v * 16 + v;
            }
            out
        } else {
            [
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ]
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(HexColor::parse("#F00").unwrap().as_str(), "#F00");
        assert_eq!(HexColor::parse("#a1b2c3").unwrap().to_rgb(), [0xa1, 0xb2, 0xc3]);
        assert_eq!(HexColor::parse("#F00").unwrap().to_rgb(), [255, 0, 0]);
    }

    #[test]
    fn test_parse_invalid() {
        for bad in ["F00", "#F0", "#GGGGGG", "#12345", "", "#"] {
            assert!(HexColor::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_from_rgb() {
        assert_eq!(HexColor::from_rgb([0, 128, 255]).as_str(), "#0080ff");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let ok: HexColor = serde_json::from_str("\"#333\"").unwrap();
        assert_eq!(ok.as_str(), "#333");
        assert!(serde_json::from_str::<HexColor>("\"red\"").is_err());
    }
}
