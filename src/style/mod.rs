//! State-to-style mapping.
//!
//! A [`Stylesheet`] owns a frozen [`Theme`] and the compiled prompt grid, and
//! exposes one pure function per UI element. Each function returns a fresh
//! [`StyleDescriptor`] built from a literal base and an ordered chain of
//! conditional patches.
//!
//! # Module Structure
//!
//! - [`property`] - Property names and keyword values
//! - [`value`] - Style values and their CSS form
//! - [`descriptor`] - Descriptors and patch composition
//! - [`metrics`] - Shared layout dimensions
//! - [`theme`] - Base and derived colors
//! - `sheet` and the element modules - the element styles

mod autocomplete;
mod cells;
pub mod descriptor;
pub mod metrics;
mod panes;
mod prompt;
pub mod property;
mod sheet;
mod status_line;
mod tabs;
pub mod theme;
pub mod value;

pub use autocomplete::displays_above;
pub use descriptor::{Patch, StyleDescriptor};
pub use property::{Keyword, Property};
pub use sheet::{area, Stylesheet};
pub use tabs::close_glyph_color;
pub use theme::Theme;
pub use value::StyleValue;
