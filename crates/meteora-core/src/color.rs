//! RGB colours with hex parsing and alpha blending.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a hex colour string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour {input:?}: expected #rrggbb")]
pub struct ParseRgbError {
    input: String,
}

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Composite this colour over `background` with the given opacity.
    ///
    /// Terminals have no per-cell transparency, so a canvas `globalAlpha`
    /// is emulated by mixing against the known page background.
    pub fn blend(self, background: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8
        };
        Rgb::new(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError {
            input: s.to_string(),
        };
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!("#6eceb2".parse(), Ok(Rgb::new(0x6e, 0xce, 0xb2)));
        assert_eq!("272361".parse(), Ok(Rgb::new(0x27, 0x23, 0x61)));
        assert_eq!("#FFFFFF".parse(), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
        assert!("#ééé".parse::<Rgb>().is_err());
        assert!("".parse::<Rgb>().is_err());
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0x6e, 0xce, 0xb2).to_string(), "#6eceb2");
    }

    #[test]
    fn blend_interpolates_channels() {
        let white = Rgb::new(255, 255, 255);
        let black = Rgb::new(0, 0, 0);
        assert_eq!(white.blend(black, 1.0), white);
        assert_eq!(white.blend(black, 0.0), black);
        assert_eq!(white.blend(black, 0.3), Rgb::new(77, 77, 77));
    }

    #[test]
    fn serde_uses_hex_strings() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            colour: Rgb,
        }
        let parsed: Wrapper = toml::from_str("colour = \"#272361\"").unwrap();
        assert_eq!(parsed.colour, Rgb::new(0x27, 0x23, 0x61));
        let written = toml::to_string(&parsed).unwrap();
        assert!(written.contains("\"#272361\""));
    }
}
