//! The stylesheet and the style fragments shared between elements.

use super::descriptor::{style, StyleDescriptor};
use super::metrics::{
    ACTIONS_WIDTH, DECORATION_WIDTH, FONT_SIZE, ICON_FONT_FAMILY, INFO_PANEL_HEIGHT,
};
use super::theme::Theme;
use crate::color::ColorSet;
use crate::grid::{Grid, GridArea, GridTemplate, SizeUnit};

/// Area names of the prompt grid.
pub mod area {
    pub const DECORATION: &str = "decoration";
    pub const PROMPT: &str = "prompt";
    pub const ACTIONS: &str = "actions";
}

/// Element styles for one theme.
///
/// Built once at startup. Every method is a pure function of its arguments
/// and the frozen theme, so a stylesheet can be shared across threads.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    theme: Theme,
    prompt_grid: Grid,
    prompt_template: GridTemplate,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Stylesheet {
    pub fn new(theme: Theme) -> Self {
        let prompt_grid = prompt_grid();
        let prompt_template = prompt_grid.compile();
        Self {
            theme,
            prompt_grid,
            prompt_template,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The decoration / prompt / actions grid.
    pub fn prompt_grid(&self) -> &Grid {
        &self.prompt_grid
    }

    /// Templates compiled from [`Self::prompt_grid`] at construction.
    pub fn prompt_template(&self) -> &GridTemplate {
        &self.prompt_template
    }

    pub(super) fn colors(&self) -> &ColorSet {
        self.theme.colors()
    }

    /// Icon font.
    pub(super) fn icon(&self) -> StyleDescriptor {
        style! { FontFamily: ICON_FONT_FAMILY }
    }

    /// Base of the status line and the autocompletion description.
    pub(super) fn info_panel(&self) -> StyleDescriptor {
        style! {
            PaddingTop: 8,
            PaddingRight: 0,
            PaddingBottom: 6,
            PaddingLeft: 0.6 * FONT_SIZE,
            MinHeight: INFO_PANEL_HEIGHT,
            LineHeight: 1.3,
            BackgroundColor: self.theme.panel,
        }
    }
}

fn prompt_grid() -> Grid {
    Grid::new(
        "prompt",
        vec![
            (
                area::DECORATION,
                GridArea::new(area::DECORATION, SizeUnit::Fixed(DECORATION_WIDTH)),
            ),
            (
                area::PROMPT,
                GridArea::new(area::PROMPT, SizeUnit::Flexible(1.0)),
            ),
            (
                area::ACTIONS,
                GridArea::new(area::ACTIONS, SizeUnit::Fixed(ACTIONS_WIDTH)),
            ),
        ],
    )
}
