//! `grid` subcommand: show the prompt grid and its compiled templates

use anyhow::Result;

use panestyle::grid::Grid;
use panestyle::Stylesheet;

pub fn lines(grid: &Grid, sheet: &Stylesheet) -> Vec<String> {
    let mut lines = vec![format!("grid: {}", grid.name())];
    for area in grid.areas() {
        lines.push(format!("  {:<12} {}", area.name, area.size));
    }
    let template = sheet.prompt_template();
    lines.push(format!("grid-template-areas: {}", template.areas));
    lines.push(format!("grid-template-columns: {}", template.columns));
    lines
}

#[cfg(not(tarpaulin_include))]
pub fn handle(sheet: &Stylesheet) -> Result<()> {
    for line in lines(sheet.prompt_grid(), sheet) {
        println!("{line}");
    }
    Ok(())
}
