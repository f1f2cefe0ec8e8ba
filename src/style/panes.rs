//! Application frame, job rows, output area and the output-cut banner.

use super::descriptor::{style, StyleDescriptor};
use super::metrics::{
    ALTERNATE_ROW_HEIGHT, FONT_FAMILY, FONT_SIZE, INFO_PANEL_HEIGHT, OUTPUT_CUT_HEIGHT,
    OUTPUT_CUT_Z_INDEX, OUTPUT_PADDING, ROW_HEIGHT, TITLE_BAR_HEIGHT,
};
use super::property::Keyword;
use super::sheet::Stylesheet;
use crate::color::{darken, failurize, lighten, Color};
use crate::state::{ScreenBufferType, Status};

/// Darkening applied to the panel stripe of the jagged border.
///
/// Hovering the banner only changes the label color; the border stays put.
const OUTPUT_CUT_BORDER_DARKEN: f64 = 0.0;

/// Zoom that collapses a finished full-screen program's output.
const COLLAPSED_ZOOM: f64 = 0.1;

fn jagged_border(color: Color, panel: Color, darken_percent: f64) -> StyleDescriptor {
    let panel = darken(panel, darken_percent);
    style! {
        Background: format!(
            "-webkit-linear-gradient({panel} 0%, transparent 0%) 0 100% repeat-x, \
             -webkit-linear-gradient(135deg, {color} 33.33%, transparent 33.33%) 0 0 / 15px 50px, \
             -webkit-linear-gradient(45deg, {color} 33.33%, {panel} 33.33%) 0 0 / 15px 50px"
        ),
    }
}

impl Stylesheet {
    pub fn application(&self) -> StyleDescriptor {
        style! {
            BackgroundColor: self.theme().background,
            Color: self.colors().white,
            FontFamily: FONT_FAMILY,
            FontSize: FONT_SIZE,
        }
    }

    /// Jobs of an inactive session ignore the pointer.
    pub fn jobs(&self, is_session_active: bool) -> StyleDescriptor {
        StyleDescriptor::new().with_if(
            !is_session_active,
            style! { PointerEvents: Keyword::None },
        )
    }

    /// A job row.
    ///
    /// Only the alternate screen changes row sizing: finished jobs get a fixed
    /// height, a running job loses its margin.
    pub fn row(&self, status: Status, screen_buffer: ScreenBufferType) -> StyleDescriptor {
        let alternate = screen_buffer == ScreenBufferType::Alternate;
        style! {
            Padding: format!("0 {OUTPUT_PADDING}px"),
            MinHeight: ROW_HEIGHT,
        }
        .with_if(
            alternate && status.is_finished(),
            style! { Height: ALTERNATE_ROW_HEIGHT },
        )
        .with_if(
            alternate && status == Status::InProgress,
            style! { Margin: 0 },
        )
    }

    /// The output area of a job.
    ///
    /// On the alternate screen a finished job collapses and a running job
    /// becomes a full-viewport overlay. On the standard screen a failed job
    /// tints the background instead.
    pub fn output(&self, screen_buffer: ScreenBufferType, status: Status) -> StyleDescriptor {
        let horizontal_padding = match screen_buffer {
            ScreenBufferType::Alternate => 0.0,
            ScreenBufferType::Standard => OUTPUT_PADDING,
        };
        let base = style! {
            PaddingTop: OUTPUT_PADDING,
            PaddingBottom: OUTPUT_PADDING,
            PaddingLeft: horizontal_padding,
            PaddingRight: horizontal_padding,
            WhiteSpace: Keyword::PreWrap,
            BackgroundColor: self.theme().background,
        };

        match screen_buffer {
            ScreenBufferType::Alternate => base
                .with_if(status.is_finished(), style! { Zoom: COLLAPSED_ZOOM })
                .with_if(
                    status == Status::InProgress,
                    style! {
                        Position: Keyword::Fixed,
                        Top: TITLE_BAR_HEIGHT,
                        Bottom: INFO_PANEL_HEIGHT,
                        Left: 0,
                        Right: 0,
                        ZIndex: 4,
                        Margin: 0,
                        Padding: "5px 0 0 0",
                    },
                ),
            ScreenBufferType::Standard => base.with_if(
                status.is_failed(),
                style! { BackgroundColor: failurize(self.theme().background) },
            ),
        }
    }

    /// A session pane; inactive sessions are dimmed and outlined.
    pub fn session(&self, is_active: bool) -> StyleDescriptor {
        let base = style! {
            Height: "100%",
            Width: "100%",
            Flex: 1,
            OverflowX: Keyword::Scroll,
        };
        if is_active {
            base.with(style! { Outline: Keyword::None })
        } else {
            base.with(style! {
                Opacity: 0.4,
                BoxShadow: format!("0 0 0 1px {}", self.colors().white),
                Margin: "0 0 1px 1px",
            })
        }
    }

    /// Content of the active tab, between the title bar and the status line.
    pub fn active_tab_content(&self) -> StyleDescriptor {
        style! {
            Display: Keyword::Flex,
            FlexWrap: Keyword::Nowrap,
            FlexDirection: Keyword::Column,
            Position: Keyword::Absolute,
            Width: "100%",
            Top: TITLE_BAR_HEIGHT,
            BackgroundColor: self.theme().background,
            Bottom: INFO_PANEL_HEIGHT,
        }
    }

    /// Banner shown where long output was truncated.
    pub fn output_cut(&self, status: Status, is_hovered: bool) -> StyleDescriptor {
        let theme = self.theme();
        let (surface, panel) = if status.is_failed() {
            (failurize(theme.background), failurize(theme.panel))
        } else {
            (theme.background, theme.panel)
        };
        let label_lighten = if is_hovered { 35.0 } else { 30.0 };

        jagged_border(surface, panel, OUTPUT_CUT_BORDER_DARKEN).with(style! {
            Position: Keyword::Relative,
            Top: -OUTPUT_PADDING,
            Left: -OUTPUT_PADDING,
            Width: "102%",
            Height: OUTPUT_CUT_HEIGHT,
            TextAlign: Keyword::Center,
            PaddingTop: (OUTPUT_CUT_HEIGHT - FONT_SIZE) / 3.0,
            Color: lighten(theme.background, label_lighten),
            Cursor: Keyword::Pointer,
            ZIndex: OUTPUT_CUT_Z_INDEX,
        })
    }

    pub fn output_cut_icon(&self) -> StyleDescriptor {
        style! { MarginRight: 10 }.with(self.icon())
    }
}
