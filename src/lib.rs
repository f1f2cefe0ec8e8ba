//! panestyle - state-to-style derivation for terminal emulator panes.
//!
//! Computes flat style descriptors for tabs, the prompt, output areas, the
//! autocompletion box and the status line as pure functions of UI state.
//!
//! - [`color`] - color algebra and the semantic palette
//! - [`grid`] - named-area grid encoding
//! - [`style`] - descriptors, the theme and the per-element stylesheet
//! - [`state`] - job status, screen buffer, hover and cell attributes
//! - [`viewport`] - injected viewport height
//! - [`config`] - palette overrides from TOML
//! - [`error`] - parse errors for named values

pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod state;
pub mod style;
pub mod viewport;

pub use config::Config;
pub use style::{StyleDescriptor, Stylesheet, Theme};
