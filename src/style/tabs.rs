//! Title bar tabs.

use super::descriptor::{style, StyleDescriptor};
use super::metrics::{FONT_SIZE, TAB_WIDTH, TITLE_BAR_HEIGHT};
use super::property::Keyword;
use super::sheet::Stylesheet;
use super::theme::Theme;
use super::value::StyleValue;
use crate::state::TabHoverState;

/// Color of a tab's close glyph.
///
/// Hovering the glyph itself shows the alert color, hovering elsewhere on the
/// tab shows the neutral bright color, and an unhovered tab hides the glyph.
pub fn close_glyph_color(theme: &Theme, hover: TabHoverState) -> StyleValue {
    match hover {
        TabHoverState::Close => theme.colors().red.into(),
        TabHoverState::Tab => theme.colors().white.into(),
        TabHoverState::Nothing => Keyword::Transparent.into(),
    }
}

impl Stylesheet {
    /// Tab strip, doubling as the window drag region.
    pub fn tabs(&self) -> StyleDescriptor {
        style! {
            Height: TITLE_BAR_HEIGHT,
            Display: Keyword::Flex,
            JustifyContent: Keyword::Center,
            WebkitAppRegion: Keyword::Drag,
            WebkitMarginBefore: 0,
            WebkitMarginAfter: 0,
            WebkitPaddingStart: 0,
            WebkitUserSelect: Keyword::None,
        }
    }

    pub fn tab(&self, is_hovered: bool, is_active: bool) -> StyleDescriptor {
        let background = if is_hovered {
            self.theme().panel
        } else {
            self.colors().black
        };
        let opacity = if is_hovered || is_active { 1.0 } else { 0.3 };
        style! {
            BackgroundColor: background,
            Opacity: opacity,
            Position: Keyword::Relative,
            Height: TITLE_BAR_HEIGHT,
            Width: TAB_WIDTH,
            Display: Keyword::InlineBlock,
            TextAlign: Keyword::Center,
            PaddingTop: 2,
        }
    }

    /// Close glyph in the tab's top-left corner.
    pub fn tab_close(&self, hover: TabHoverState) -> StyleDescriptor {
        let margin = TITLE_BAR_HEIGHT - FONT_SIZE;
        self.icon().with(style! {
            Color: close_glyph_color(self.theme(), hover),
            Position: Keyword::Absolute,
            Left: margin,
            Top: margin / 2.0,
        })
    }
}
