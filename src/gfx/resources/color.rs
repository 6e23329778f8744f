use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have 3 or 6 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

/// Display-referred (sRGB) RGB color, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses `#RRGGBB` or the `#RGB` shorthand, case-insensitive
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(hex.to_string()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit(hex.to_string()))
        };

        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::from_rgb8(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(ColorParseError::InvalidLength(hex.to_string())),
        }
    }

    /// Converts to linear RGB for shading
    pub fn to_linear(self) -> [f32; 3] {
        fn decode(c: f32) -> f32 {
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        [decode(self.r), decode(self.g), decode(self.b)]
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        write!(f, "#{:02x}{:02x}{:02x}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Ok(Color::RED));
        let blue: Color = "#356DA0".parse().unwrap();
        assert_eq!(blue, Color::from_rgb8(0x35, 0x6d, 0xa0));
    }

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(Color::from_hex("#fff"), Ok(Color::WHITE));
        assert_eq!(Color::from_hex("#f00"), Ok(Color::RED));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Color::from_hex("FF0000"),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            Color::from_hex("#FF00"),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            Color::from_hex("#GG0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Color::from_hex("#é0000"),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_display_round_trips_hex() {
        assert_eq!(Color::from_rgb8(0xb4, 0x91, 0x50).to_string(), "#b49150");
    }

    #[test]
    fn test_linear_conversion_endpoints() {
        assert_eq!(Color::WHITE.to_linear(), [1.0, 1.0, 1.0]);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).to_linear(), [0.0, 0.0, 0.0]);
        let mid = Color::rgb(0.5, 0.5, 0.5).to_linear()[0];
        assert!((mid - 0.214).abs() < 1e-3);
    }
}
