//! panestyle CLI
//!
//! Inspect the styles the stylesheet derives for a given UI state.

mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use panestyle::Config;

#[derive(Parser)]
#[command(name = "panestyle", version, about = "Inspect terminal pane styles")]
struct Cli {
    /// Config file (default: <config dir>/panestyle/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the style of one element for the given state
    Show(commands::show::ShowArgs),
    /// Print the palette and the derived theme colors
    Palette,
    /// Print the compiled prompt grid templates
    Grid,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let sheet = config.stylesheet();

    match cli.command {
        Commands::Show(args) => commands::show::handle(&sheet, &args),
        Commands::Palette => commands::palette::handle(&sheet),
        Commands::Grid => commands::grid::handle(&sheet),
    }
}
