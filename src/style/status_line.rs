//! Status line at the bottom of the window.

use super::descriptor::{style, StyleDescriptor};
use super::property::Keyword;
use super::sheet::Stylesheet;
use crate::state::VcsStatus;

impl Stylesheet {
    pub fn status_line(&self) -> StyleDescriptor {
        self.info_panel().with(style! {
            Position: Keyword::Fixed,
            Bottom: 0,
            Width: "100%",
            ZIndex: 3,
        })
    }

    pub fn present_directory(&self) -> StyleDescriptor {
        style! { Display: Keyword::InlineBlock }
    }

    pub fn vcs_data(&self) -> StyleDescriptor {
        style! {
            Display: Keyword::InlineBlock,
            Float: Keyword::Right,
            MarginRight: 10,
        }
    }

    pub fn status_line_icon(&self) -> StyleDescriptor {
        self.icon().with(style! { MarginRight: 5 })
    }

    /// Branch indicator; a dirty working tree is highlighted.
    pub fn vcs_status(&self, status: VcsStatus) -> StyleDescriptor {
        let color = match status {
            VcsStatus::Dirty => self.colors().blue,
            VcsStatus::Clean => self.colors().white,
        };
        style! {
            Color: color,
            Display: Keyword::InlineBlock,
        }
    }
}
