//! Subcommand handlers

pub mod grid;
pub mod palette;
pub mod show;
