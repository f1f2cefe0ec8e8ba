//! Theme colors for pane styling.
//!
//! Centralizes the base palette and every color derived from it. A theme is
//! built once and never changes afterwards; the stylesheet reads it by
//! reference.

use crate::color::{lighten, Color, ColorSet, Palette};

/// Highlight behind the selected autocompletion suggestion.
const SUGGESTION_HIGHLIGHT: Color = Color::from_u32(0x383e4a);

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Base palette plus derived surface colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Normal and bright colors for every identifier
    pub palette: Palette,
    /// Application and output background
    pub background: Color,
    /// Info panels, status line, hovered tabs
    pub panel: Color,
    /// Prompt strip behind the command line
    pub prompt_background: Color,
    /// Decoration arrow left of the prompt
    pub arrow: Color,
    /// Selected autocompletion suggestion
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl Theme {
    /// Derive every surface color from `palette`.
    pub fn new(palette: Palette) -> Self {
        let background = palette.normal.black;
        let prompt_background = lighten(background, 5.0);
        Self {
            palette,
            background,
            panel: lighten(background, 4.0),
            prompt_background,
            arrow: lighten(prompt_background, 10.0),
            highlight: SUGGESTION_HIGHLIGHT,
        }
    }

    /// Normal colors.
    pub fn colors(&self) -> &ColorSet {
        &self.palette.normal
    }

    /// Named derived colors, in display order.
    pub fn surfaces(&self) -> [(&'static str, Color); 5] {
        [
            ("background", self.background),
            ("panel", self.panel),
            ("prompt_background", self.prompt_background),
            ("arrow", self.arrow),
            ("highlight", self.highlight),
        ]
    }
}

/// A two-cell true-color swatch for terminal output.
pub fn ansi_swatch(color: Color) -> String {
    format!(
        "\x1b[48;2;{};{};{}m  {}",
        color.r, color.g, color.b, ANSI_RESET
    )
}
