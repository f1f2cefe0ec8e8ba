//! Discrete UI state consumed by the stylesheet.
//!
//! These values are produced by the component tree and read here without
//! modification. Every enum is closed; a textual value outside its domain is
//! rejected when parsed rather than mapped to a fallback.

use std::fmt;
use std::str::FromStr;

use crate::color::{Brightness, ColorId};

pub use crate::error::ParseStateError;

/// Implements `name`, `Display` and `FromStr` from an explicit name table.
macro_rules! named_states {
    ($ty:ident, $kind:literal, [$($variant:ident => $name:literal),+ $(,)?]) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Name used on the command line.
            pub fn name(&self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ParseStateError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseStateError::new($kind, s))
            }
        }
    };
}

/// Lifecycle of the job a pane belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    NotStarted,
    InProgress,
    Success,
    Failure,
    Interrupted,
}

named_states!(Status, "status", [
    NotStarted => "not-started",
    InProgress => "in-progress",
    Success => "success",
    Failure => "failure",
    Interrupted => "interrupted",
]);

impl Status {
    /// The job has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        match self {
            Self::Success | Self::Failure | Self::Interrupted => true,
            Self::NotStarted | Self::InProgress => false,
        }
    }

    /// The job ended without succeeding; drives every failure tint.
    pub fn is_failed(&self) -> bool {
        match self {
            Self::Failure | Self::Interrupted => true,
            Self::NotStarted | Self::InProgress | Self::Success => false,
        }
    }
}

/// Which screen buffer the running program is drawing into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenBufferType {
    #[default]
    Standard,
    Alternate,
}

named_states!(ScreenBufferType, "screen buffer", [
    Standard => "standard",
    Alternate => "alternate",
]);

/// Where the pointer rests relative to a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabHoverState {
    #[default]
    Nothing,
    Tab,
    Close,
}

named_states!(TabHoverState, "tab hover state", [
    Nothing => "nothing",
    Tab => "tab",
    Close => "close",
]);

/// Working tree state shown in the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VcsStatus {
    #[default]
    Clean,
    Dirty,
}

named_states!(VcsStatus, "vcs status", [
    Clean => "clean",
    Dirty => "dirty",
]);

/// Font weight of a character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Weight {
    #[default]
    Normal,
    Bold,
}

/// SGR attributes of a group of character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes {
    pub color: ColorId,
    pub background_color: ColorId,
    pub brightness: Brightness,
    pub weight: Weight,
    pub underline: bool,
    pub inverse: bool,
    pub cursor: bool,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            color: ColorId::White,
            background_color: ColorId::Black,
            brightness: Brightness::Normal,
            weight: Weight::Normal,
            underline: false,
            inverse: false,
            cursor: false,
        }
    }
}
