//! Color algebra for pane styling.
//!
//! Colors are plain 24-bit RGB values that parse from and format to `#rrggbb`.
//! The derivations here (`lighten`, `darken`, `failurize`) are pure channel
//! arithmetic; callers never see an error from them.

pub mod palette;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use palette::{color_value, Brightness, ColorId, ColorSet, Palette};

/// Reserved hue every failure tint is blended toward.
pub const FAILURE_HUE: Color = Color::rgb(0xff, 0x00, 0x00);

/// Share of `FAILURE_HUE` mixed in by `failurize`.
pub const FAILURE_RATIO: f64 = 0.15;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Errors produced when parsing a color from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Color '{0}' must start with '#'")]
    MissingHash(String),

    #[error("Color '{0}' must have 3 or 6 hex digits")]
    BadLength(String),

    #[error("Color '{0}' contains a non-hex digit")]
    BadDigit(String),
}

impl Color {
    /// Create a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        Self::rgb(f(self.r), f(self.g), f(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(s.to_string()));
        }

        // Shorthand `#abc` doubles every digit.
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorParseError::BadLength(s.to_string())),
        };

        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ColorParseError::BadDigit(s.to_string()))?;
        Ok(Self::from_u32(value))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Clamp a percentage to `[0, 100]` and turn it into a ratio.
fn ratio(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0) / 100.0
}

fn mix_channel(from: u8, to: u8, ratio: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * ratio).round().clamp(0.0, 255.0) as u8
}

/// Shift `color` toward white by `percent` of the remaining distance.
///
/// Percentages outside `[0, 100]` saturate.
pub fn lighten(color: Color, percent: f64) -> Color {
    let ratio = ratio(percent);
    color.map_channels(|c| mix_channel(c, 0xff, ratio))
}

/// Shift `color` toward black by `percent` of the remaining distance.
///
/// Percentages outside `[0, 100]` saturate.
pub fn darken(color: Color, percent: f64) -> Color {
    let ratio = ratio(percent);
    color.map_channels(|c| mix_channel(c, 0x00, ratio))
}

/// Linear blend from `from` to `to`; `ratio` is clamped to `[0, 1]`.
pub fn blend(from: Color, to: Color, ratio: f64) -> Color {
    let ratio = if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    };
    Color::rgb(
        mix_channel(from.r, to.r, ratio),
        mix_channel(from.g, to.g, ratio),
        mix_channel(from.b, to.b, ratio),
    )
}

/// The failure-tinted variant of a color.
///
/// Used wherever a failed or interrupted job recolors an otherwise neutral
/// surface.
pub fn failurize(color: Color) -> Color {
    blend(color, FAILURE_HUE, FAILURE_RATIO)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [Color; 4] = [
        Color::rgb(0x2b, 0x30, 0x3b),
        Color::rgb(0xc0, 0xc5, 0xce),
        Color::rgb(0x00, 0x00, 0x00),
        Color::rgb(0xff, 0xff, 0xff),
    ];

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#2b303b".parse::<Color>().unwrap(), Color::rgb(43, 48, 59));
        assert_eq!("#ABC".parse::<Color>().unwrap(), Color::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(
            "2b303b".parse::<Color>(),
            Err(ColorParseError::MissingHash("2b303b".to_string()))
        );
        assert_eq!(
            "#2b30".parse::<Color>(),
            Err(ColorParseError::BadLength("#2b30".to_string()))
        );
        assert_eq!(
            "#zz303b".parse::<Color>(),
            Err(ColorParseError::BadDigit("#zz303b".to_string()))
        );
    }

    #[test]
    fn formats_lowercase_hex() {
        assert_eq!(Color::rgb(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
    }

    #[test]
    fn zero_percent_is_identity() {
        for color in SAMPLES {
            assert_eq!(lighten(color, 0.0), color);
            assert_eq!(darken(color, 0.0), color);
        }
    }

    #[test]
    fn full_percent_reaches_boundary() {
        for color in SAMPLES {
            assert_eq!(lighten(color, 100.0), Color::rgb(0xff, 0xff, 0xff));
            assert_eq!(darken(color, 100.0), Color::rgb(0, 0, 0));
        }
    }

    #[test]
    fn out_of_range_percent_saturates() {
        let color = SAMPLES[0];
        assert_eq!(lighten(color, 250.0), Color::rgb(0xff, 0xff, 0xff));
        assert_eq!(darken(color, 250.0), Color::rgb(0, 0, 0));
        assert_eq!(lighten(color, -20.0), color);
        assert_eq!(darken(color, -20.0), color);
    }

    #[test]
    fn lighten_moves_by_remaining_distance() {
        // 0x2b + (0xff - 0x2b) * 0.05 = 53.6
        let lighter = lighten(Color::rgb(0x2b, 0x30, 0x3b), 5.0);
        assert_eq!(lighter, Color::rgb(54, 58, 69));
    }

    #[test]
    fn darken_scales_toward_black() {
        assert_eq!(darken(Color::rgb(200, 100, 50), 50.0), Color::rgb(100, 50, 25));
    }

    #[test]
    fn failurize_is_deterministic() {
        let color = SAMPLES[0];
        assert_eq!(failurize(color), failurize(color));
        assert_eq!(failurize(color), Color::rgb(75, 41, 50));
    }

    #[test]
    fn failurize_is_not_idempotent() {
        let once = failurize(SAMPLES[0]);
        let twice = failurize(once);
        assert_ne!(once, twice);
        assert!(twice.r > once.r);
    }

    #[test]
    fn blend_clamps_ratio() {
        let from = Color::rgb(0, 0, 0);
        let to = Color::rgb(200, 100, 0);
        assert_eq!(blend(from, to, 2.0), to);
        assert_eq!(blend(from, to, -1.0), from);
        assert_eq!(blend(from, to, 0.5), Color::rgb(100, 50, 0));
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");
        let back: Color = serde_json::from_str("\"#a1b2c3\"").unwrap();
        assert_eq!(back, Color::rgb(0xa1, 0xb2, 0xc3));
    }
}
