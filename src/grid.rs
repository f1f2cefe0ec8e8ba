//! Named-area grid encoding.
//!
//! A [`Grid`] is an ordered list of named areas, each with a fixed or
//! flexible width. It compiles into the two layout directives the renderer
//! needs: the area template and the column template. Both come out of one
//! traversal so their order can never drift apart.

use std::fmt;

/// Width of a grid column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeUnit {
    /// Pixels.
    Fixed(f64),
    /// Share of the remaining space.
    Flexible(f64),
}

impl SizeUnit {
    /// Textual layout-size form: `"30px"` or `"1fr"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(px) => write!(f, "{px}px"),
            Self::Flexible(fr) => write!(f, "{fr}fr"),
        }
    }
}

/// A named column of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridArea {
    pub name: &'static str,
    pub size: SizeUnit,
}

impl GridArea {
    pub const fn new(name: &'static str, size: SizeUnit) -> Self {
        Self { name, size }
    }
}

/// Both compiled layout directives of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    /// e.g. `'decoration prompt actions'`
    pub areas: String,
    /// e.g. `30px 1fr 150px`
    pub columns: String,
}

/// An immutable, ordered set of named areas.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    name: &'static str,
    areas: Vec<(&'static str, GridArea)>,
}

impl Grid {
    /// Build a grid from `(key, area)` pairs in column order.
    ///
    /// # Panics
    /// If `areas` is empty, or if two entries share a key or an area name.
    pub fn new(name: &'static str, areas: Vec<(&'static str, GridArea)>) -> Self {
        assert!(!areas.is_empty(), "grid '{name}' declares no areas");
        for (i, (key, area)) in areas.iter().enumerate() {
            for (other_key, other) in &areas[..i] {
                assert!(key != other_key, "grid '{name}' repeats key '{key}'");
                assert!(
                    area.name != other.name,
                    "grid '{name}' repeats area name '{}'",
                    area.name
                );
            }
        }
        Self { name, areas }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Areas in declaration order.
    pub fn areas(&self) -> impl Iterator<Item = &GridArea> {
        self.areas.iter().map(|(_, area)| area)
    }

    /// Look up an area by key.
    pub fn area(&self, key: &str) -> Option<&GridArea> {
        self.areas
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, area)| area)
    }

    /// Compile both templates in a single pass over the areas.
    pub fn compile(&self) -> GridTemplate {
        let mut names = Vec::with_capacity(self.areas.len());
        let mut sizes = Vec::with_capacity(self.areas.len());
        for area in self.areas() {
            names.push(area.name.to_string());
            sizes.push(area.size.render());
        }
        GridTemplate {
            areas: format!("'{}'", names.join(" ")),
            columns: sizes.join(" "),
        }
    }
}

/// Single-row area template, e.g. `'decoration prompt actions'`.
pub fn compile_area_template(grid: &Grid) -> String {
    grid.compile().areas
}

/// Column-size template, e.g. `30px 1fr 150px`.
pub fn compile_column_template(grid: &Grid) -> String {
    grid.compile().columns
}
