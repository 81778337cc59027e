//! Linear RGB color with hex string conversion

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Errors raised while parsing a hex color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Wrong number of hex digits
    #[error("Invalid color length in '{0}': expected #rgb or #rrggbb")]
    InvalidLength(String),
    
    /// Non hexadecimal character
    #[error("Invalid hex digit in color '{0}'")]
    InvalidDigit(String),
}

/// RGB color with components in the 0-1 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Pure black
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    
    /// Pure white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Create a color from RGB components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub fn from_u32(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(ColorParseError::InvalidLength(input.to_string())),
        };

        u32::from_str_radix(&expanded, 16)
            .map(Self::from_u32)
            .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
    }

    /// Format as lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_long_form() {
        let color = Color::from_hex("#ff8000").unwrap();
        assert_relative_eq!(color.r, 1.0);
        assert_relative_eq!(color.g, 128.0 / 255.0);
        assert_relative_eq!(color.b, 0.0);
    }

    #[test]
    fn test_parse_short_form_without_hash() {
        let color = Color::from_hex("f00").unwrap();
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(Color::from_hex("#12345"), Err(ColorParseError::InvalidLength(_))));
        assert!(matches!(Color::from_hex("#zzzzzz"), Err(ColorParseError::InvalidDigit(_))));
        assert!(matches!(Color::from_hex(""), Err(ColorParseError::InvalidLength(_))));
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::from_hex("#C0FFEE").unwrap().to_hex(), "#c0ffee");
        assert_eq!(Color::BLACK.to_string(), "#000000");
    }

    #[test]
    fn test_deserialize_from_ron_string() {
        let color: Color = ron::from_str("\"#0000ff\"").unwrap();
        assert_eq!(color, Color::rgb(0.0, 0.0, 1.0));

        let bad: Result<Color, _> = ron::from_str("\"blue\"");
        assert!(bad.is_err());
    }
}
