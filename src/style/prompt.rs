//! Prompt strip: wrapper grid, decoration arrow, command line and actions.

use super::descriptor::{style, StyleDescriptor};
use super::metrics::{
    ARROW_Z_INDEX, DECORATION_WIDTH, FONT_SIZE, OUTPUT_CUT_Z_INDEX, PROGRESS_BAR_STRIPES_SIZE,
    PROMPT_HEIGHT, PROMPT_HORIZONTAL_PADDING, PROMPT_VERTICAL_PADDING, PROMPT_WRAPPER_HEIGHT,
    TITLE_BAR_HEIGHT,
};
use super::property::Keyword;
use super::sheet::{area, Stylesheet};
use crate::color::{failurize, lighten};
use crate::state::Status;

impl Stylesheet {
    /// Container laid out on the prompt grid.
    pub fn prompt_wrapper(&self, status: Status, is_sticky: bool) -> StyleDescriptor {
        let template = self.prompt_template();
        style! {
            Top: 0,
            PaddingTop: PROMPT_VERTICAL_PADDING,
            // Anchors the autocompletion box.
            Position: Keyword::Relative,
            Display: Keyword::Grid,
            GridTemplateAreas: template.areas.as_str(),
            GridTemplateRows: Keyword::Auto,
            GridTemplateColumns: template.columns.as_str(),
            BackgroundColor: self.theme().prompt_background,
            MinHeight: PROMPT_WRAPPER_HEIGHT,
            ZIndex: OUTPUT_CUT_Z_INDEX + 1,
        }
        .with_if(
            is_sticky,
            style! {
                BoxShadow: "0 5px 8px -3px rgba(0, 0, 0, 0.3)",
                Width: "100%",
                Position: Keyword::Fixed,
                Top: TITLE_BAR_HEIGHT,
            },
        )
        .with_if(
            status.is_failed(),
            style! { BackgroundColor: failurize(self.theme().prompt_background) },
        )
    }

    /// Decoration cell holding the arrow.
    pub fn arrow(&self, status: Status) -> StyleDescriptor {
        style! {
            GridArea: area::DECORATION,
            Position: Keyword::Relative,
            Width: DECORATION_WIDTH,
            Height: PROMPT_HEIGHT - PROMPT_VERTICAL_PADDING,
            Margin: "0 auto",
            Overflow: Keyword::Hidden,
            ZIndex: ARROW_Z_INDEX,
        }
        .with_if(
            status == Status::InProgress,
            style! { Cursor: Keyword::Progress },
        )
    }

    /// The rotated square that draws the arrow; animates while running.
    pub fn arrow_inner(&self, status: Status) -> StyleDescriptor {
        let theme = self.theme();
        let base = style! {
            Content: "\"\"",
            Position: Keyword::Absolute,
            Width: "200%",
            Height: "200%",
            Top: -11,
            Right: -8,
            BackgroundColor: theme.arrow,
            TransformOrigin: "54% 0",
            Transform: "rotate(45deg)",
            ZIndex: ARROW_Z_INDEX - 1,
            // Animated by the progress stripes.
            BackgroundSize: 0,
        };

        let stripes = lighten(self.colors().black, 3.0);
        base.with_if(
            status == Status::InProgress,
            style! {
                Transition: "background 0.1s step-end 0.3s",
                Animation: "progress-bar-stripes 0.5s linear infinite",
                BackgroundImage: format!(
                    "linear-gradient(45deg, {stripes} 25%, transparent 25%, transparent 50%, \
                     {stripes} 50%, {stripes} 75%, transparent 75%, transparent)"
                ),
                BackgroundSize: format!(
                    "{PROGRESS_BAR_STRIPES_SIZE}px {PROGRESS_BAR_STRIPES_SIZE}px"
                ),
            },
        )
        .with_if(
            status.is_failed(),
            style! { BackgroundColor: failurize(theme.arrow) },
        )
    }

    /// Info glyph over the decoration; an interrupted job shows it as an icon.
    pub fn prompt_info(&self, status: Status) -> StyleDescriptor {
        style! {
            Cursor: Keyword::Help,
            ZIndex: 2,
            GridArea: area::DECORATION,
        }
        .with_if(
            status == Status::Interrupted,
            self.icon().with(style! {
                Position: Keyword::Relative,
                Left: 6,
                Top: 1,
                Color: self.colors().black,
            }),
        )
    }

    pub fn actions(&self) -> StyleDescriptor {
        style! {
            GridArea: area::ACTIONS,
            MarginRight: 15,
            TextAlign: Keyword::Right,
        }
    }

    /// A clickable icon in the actions area.
    pub fn action(&self) -> StyleDescriptor {
        style! {
            TextAlign: Keyword::Center,
            Width: FONT_SIZE,
            Display: Keyword::InlineBlock,
            Margin: "0 3px",
            Cursor: Keyword::Pointer,
        }
        .with(self.icon())
    }

    pub fn decoration_toggle(&self, is_enabled: bool) -> StyleDescriptor {
        let color = if is_enabled {
            self.colors().green
        } else {
            self.colors().white
        };
        self.action().with(style! { Color: color })
    }

    fn prompt_inline_element(&self) -> StyleDescriptor {
        style! {
            PaddingTop: 0,
            PaddingRight: PROMPT_HORIZONTAL_PADDING,
            PaddingBottom: 3,
            PaddingLeft: PROMPT_HORIZONTAL_PADDING,
            GridArea: area::PROMPT,
            FontSize: FONT_SIZE,
            WebkitFontFeatureSettings: r#""liga", "dlig""#,
            WhiteSpace: Keyword::PreWrap,
            WebkitAppearance: Keyword::None,
            Outline: Keyword::None,
        }
    }

    /// Ghost text previewing the selected completion.
    pub fn autocompleted_preview(&self) -> StyleDescriptor {
        self.prompt_inline_element().with(style! {
            Color: lighten(self.theme().prompt_background, 15.0),
        })
    }

    /// The editable command line.
    pub fn prompt(&self) -> StyleDescriptor {
        self.prompt_inline_element().with(style! {
            Color: self.colors().white,
            ZIndex: 2,
        })
    }

    /// Keeps the row height while the prompt is sticky.
    pub fn prompt_placeholder(&self) -> StyleDescriptor {
        style! { Height: PROMPT_WRAPPER_HEIGHT }
    }

    pub fn command_sign(&self) -> StyleDescriptor {
        style! {
            FontSize: FONT_SIZE + 3.0,
            VerticalAlign: Keyword::Middle,
        }
    }
}
