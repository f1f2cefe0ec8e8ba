//! `palette` subcommand: list the palette and derived theme colors

use anyhow::Result;

use panestyle::color::{Color, ColorId};
use panestyle::style::theme::ansi_swatch;
use panestyle::{Stylesheet, Theme};

/// Swatches are skipped when `NO_COLOR` is set.
fn swatch(color: Color, colored: bool) -> String {
    if colored {
        format!("{} ", ansi_swatch(color))
    } else {
        String::new()
    }
}

/// One line per color identifier, normal then bright, followed by the
/// derived surfaces.
pub fn lines(theme: &Theme, colored: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(ColorId::ALL.len() + 6);
    for id in ColorId::ALL {
        let normal = theme.palette.normal.get(id);
        let bright = theme.palette.bright.get(id);
        lines.push(format!(
            "{:<18} {}{}  {}{}",
            id.name(),
            swatch(normal, colored),
            normal,
            swatch(bright, colored),
            bright
        ));
    }
    lines.push(String::new());
    for (name, color) in theme.surfaces() {
        lines.push(format!("{:<18} {}{}", name, swatch(color, colored), color));
    }
    lines
}

#[cfg(not(tarpaulin_include))]
pub fn handle(sheet: &Stylesheet) -> Result<()> {
    let colored = std::env::var_os("NO_COLOR").is_none();
    for line in lines(sheet.theme(), colored) {
        println!("{line}");
    }
    Ok(())
}
