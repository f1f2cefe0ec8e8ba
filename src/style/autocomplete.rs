//! Autocompletion box and its suggestions.

use tracing::trace;

use super::descriptor::{style, StyleDescriptor};
use super::metrics::{
    DECORATION_WIDTH, DEFAULT_SHADOW, LETTER_WIDTH, PROMPT_HORIZONTAL_PADDING,
    PROMPT_WRAPPER_HEIGHT, SUGGESTIONS_LIMIT, SUGGESTION_SIZE,
};
use super::property::Keyword;
use super::sheet::Stylesheet;
use crate::viewport::Viewport;

/// Whether a full box anchored at `offset_top` would overflow the viewport
/// and must open above its anchor instead.
pub fn displays_above(offset_top: f64, viewport_height: f64) -> bool {
    offset_top + SUGGESTIONS_LIMIT as f64 * SUGGESTION_SIZE > viewport_height
}

impl Stylesheet {
    /// The floating suggestion box.
    ///
    /// Reads the viewport height once per call. The box opens below the
    /// prompt unless a full list would overflow the viewport, and follows the
    /// caret horizontally.
    pub fn autocomplete_box(
        &self,
        viewport: &dyn Viewport,
        offset_top: f64,
        caret_position: usize,
        has_description: bool,
    ) -> StyleDescriptor {
        let viewport_height = viewport.inner_height();
        let above = displays_above(offset_top, viewport_height);
        trace!(offset_top, viewport_height, above, "placing autocompletion box");

        let placement = if above {
            let description = if has_description {
                SUGGESTION_SIZE
            } else {
                0.0
            };
            style! {
                Top: Keyword::Auto,
                Bottom: SUGGESTION_SIZE + description,
            }
        } else {
            style! {
                Top: PROMPT_WRAPPER_HEIGHT,
                Bottom: Keyword::Auto,
            }
        };

        style! {
            Position: Keyword::Absolute,
            Left: DECORATION_WIDTH + PROMPT_HORIZONTAL_PADDING + caret_position as f64 * LETTER_WIDTH,
            MinWidth: 300,
            BoxShadow: DEFAULT_SHADOW,
            BackgroundColor: self.colors().black,
            ZIndex: 3,
        }
        .with(placement)
    }

    /// Short description floated to the right of a suggestion.
    pub fn autocomplete_synopsis(&self) -> StyleDescriptor {
        style! {
            Float: Keyword::Right,
            Opacity: 0.5,
            FontSize: "0.8em",
            MarginTop: "0.65em",
            MarginRight: 5,
        }
    }

    pub fn autocomplete_value(&self) -> StyleDescriptor {
        style! { PaddingRight: 30 }
    }

    pub fn autocomplete_item(&self, is_highlighted: bool) -> StyleDescriptor {
        style! {
            ListStyleType: Keyword::None,
            Padding: 2,
            Cursor: Keyword::Pointer,
        }
        .with_if(
            is_highlighted,
            style! { BackgroundColor: self.theme().highlight },
        )
    }

    pub fn suggestions_list(&self) -> StyleDescriptor {
        style! {
            MaxHeight: 300,
            Overflow: Keyword::Auto,
            Padding: 0,
            Margin: 0,
        }
    }

    /// Panel under the box describing the highlighted suggestion.
    pub fn autocompletion_description(&self) -> StyleDescriptor {
        style! {
            Display: Keyword::Block,
            BoxShadow: "0 4px 8px 1px rgba(0, 0, 0, 0.3)",
            Position: Keyword::Absolute,
            Left: 0,
            Right: 0,
            FontSize: "0.8em",
        }
        .with(self.info_panel())
    }

    /// Square glyph marking the suggestion kind.
    pub fn suggestion_icon(&self) -> StyleDescriptor {
        self.icon().with(style! {
            Display: Keyword::InlineBlock,
            Width: SUGGESTION_SIZE,
            Height: SUGGESTION_SIZE,
            LineHeight: "2em",
            VerticalAlign: Keyword::Middle,
            TextAlign: Keyword::Center,
            FontStyle: Keyword::Normal,
            Opacity: 0.5,
            MarginRight: 10,
            BackgroundColor: "rgba(0, 0, 0, 0.15)",
        })
    }
}
