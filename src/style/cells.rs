//! Character cell styling.
//!
//! A group of cells shares one set of SGR attributes. Colors are resolved
//! first, then the attribute patches run in a fixed order: inverse,
//! underline, bold, cursor. The cursor runs last so it always wins.

use super::descriptor::{style, StyleDescriptor};
use super::metrics::ROW_HEIGHT;
use super::property::{Keyword, Property};
use super::sheet::Stylesheet;
use crate::color::{color_value, failurize, Brightness};
use crate::state::{Attributes, Status, Weight};

/// Swap the already resolved foreground and background.
fn inverse(style: &mut StyleDescriptor) {
    style.swap(Property::Color, Property::BackgroundColor);
}

fn underline() -> StyleDescriptor {
    style! { TextDecoration: Keyword::Underline }
}

fn bold() -> StyleDescriptor {
    style! { FontWeight: Keyword::Bold }
}

impl Stylesheet {
    /// Style of a run of cells sharing `attributes`.
    pub fn char_group(&self, attributes: &Attributes, status: Status) -> StyleDescriptor {
        let palette = &self.theme().palette;
        let foreground = color_value(palette, attributes.color, attributes.brightness);
        let background = if status.is_failed() {
            failurize(self.theme().background)
        } else {
            color_value(palette, attributes.background_color, Brightness::Normal)
        };

        style! {
            Display: Keyword::InlineBlock,
            // Keeps empty rows visible.
            Height: ROW_HEIGHT,
            Color: foreground,
            BackgroundColor: background,
        }
        .with_if(attributes.inverse, inverse)
        .with_if(attributes.underline, underline())
        .with_if(attributes.weight == Weight::Bold, bold())
        .with_if(
            attributes.cursor,
            style! {
                BackgroundColor: self.colors().white,
                Color: self.colors().black,
            },
        )
    }
}
