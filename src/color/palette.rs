//! The closed palette of semantic color identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::Color;
use crate::error::ParseStateError;

/// Semantic color identifier carried by character attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorId {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ColorId {
    /// Every identifier, in ANSI order.
    pub const ALL: [ColorId; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Lowercase name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorId {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseStateError::new("color", s))
    }
}

/// Which variant of a hue to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    #[default]
    Normal,
    Bright,
}

/// One value per identifier.
///
/// `ColorSet` holds a concrete color for every identifier;
/// `ColorSet<Option<Color>>` holds sparse overrides read from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSet<T = Color> {
    pub black: T,
    pub red: T,
    pub green: T,
    pub yellow: T,
    pub blue: T,
    pub magenta: T,
    pub cyan: T,
    pub white: T,
}

impl<T> ColorSet<T> {
    /// Slot for an identifier.
    pub fn slot(&self, id: ColorId) -> &T {
        match id {
            ColorId::Black => &self.black,
            ColorId::Red => &self.red,
            ColorId::Green => &self.green,
            ColorId::Yellow => &self.yellow,
            ColorId::Blue => &self.blue,
            ColorId::Magenta => &self.magenta,
            ColorId::Cyan => &self.cyan,
            ColorId::White => &self.white,
        }
    }

    /// Mutable slot for an identifier.
    pub fn slot_mut(&mut self, id: ColorId) -> &mut T {
        match id {
            ColorId::Black => &mut self.black,
            ColorId::Red => &mut self.red,
            ColorId::Green => &mut self.green,
            ColorId::Yellow => &mut self.yellow,
            ColorId::Blue => &mut self.blue,
            ColorId::Magenta => &mut self.magenta,
            ColorId::Cyan => &mut self.cyan,
            ColorId::White => &mut self.white,
        }
    }

    /// Look up the value for an identifier.
    pub fn get(&self, id: ColorId) -> T
    where
        T: Copy,
    {
        *self.slot(id)
    }
}

impl ColorSet<Option<Color>> {
    /// Copy every present override into `set`.
    pub fn apply_to(&self, set: &mut ColorSet) {
        for id in ColorId::ALL {
            if let Some(color) = self.get(id) {
                *set.slot_mut(id) = color;
            }
        }
    }
}

impl ColorSet {
    /// Base16 "ocean" normal colors.
    pub const fn ocean() -> Self {
        Self {
            black: Color::from_u32(0x2b303b),
            red: Color::from_u32(0xbf616a),
            green: Color::from_u32(0xa3be8c),
            yellow: Color::from_u32(0xebcb8b),
            blue: Color::from_u32(0x8fa1b3),
            magenta: Color::from_u32(0xb48ead),
            cyan: Color::from_u32(0x96b5b4),
            white: Color::from_u32(0xc0c5ce),
        }
    }

    /// Bright counterparts of `ocean`.
    pub const fn ocean_bright() -> Self {
        Self {
            black: Color::from_u32(0x65737e),
            red: Color::from_u32(0xe0787f),
            green: Color::from_u32(0xb9d39c),
            yellow: Color::from_u32(0xf3d9a5),
            blue: Color::from_u32(0xa8bccf),
            magenta: Color::from_u32(0xc9a6c3),
            cyan: Color::from_u32(0xafcfce),
            white: Color::from_u32(0xeff1f5),
        }
    }
}

/// Normal and bright colors for every identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub normal: ColorSet,
    pub bright: ColorSet,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            normal: ColorSet::ocean(),
            bright: ColorSet::ocean_bright(),
        }
    }
}

impl Palette {
    /// Resolve an identifier to a concrete color.
    pub fn resolve(&self, id: ColorId, brightness: Brightness) -> Color {
        match brightness {
            Brightness::Normal => self.normal.get(id),
            Brightness::Bright => self.bright.get(id),
        }
    }
}

/// Resolve a semantic color identifier against `palette`.
pub fn color_value(palette: &Palette, id: ColorId, brightness: Brightness) -> Color {
    palette.resolve(id, brightness)
}
