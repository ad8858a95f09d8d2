use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{age::Age, grid::Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RenderStyle {
    /// Nested arrays that parse back into a grid.
    #[default]
    Array,

    /// One `[age]` per cell, blank for empty cells.
    Human,
}

/// Displays a grid as nested arrays of ages, one row per line.
pub struct AgeArray<'a>(pub &'a Grid);

impl fmt::Display for AgeArray<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Joined by hand so the output stays valid JSON with one row per line.
        let rows = self
            .0
            .rows()
            .map(|row| format!("   [{}]", row.iter().map(|age| age.value()).join(",")))
            .join(",\n");

        write!(f, "[\n{rows}\n]")
    }
}

/// Displays a grid as bracketed cells, one row per line.
pub struct Bracketed<'a>(pub &'a Grid);

impl fmt::Display for Bracketed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .0
            .rows()
            .map(|row| row.iter().map(|age| format!("[{}]", age_symbol(*age))).join(""))
            .join("\n");

        f.write_str(&rows)
    }
}

pub fn age_symbol(age: Age) -> char {
    match age {
        Age::Empty => ' ',
        Age::Newborn => '1',
        Age::Adult => '2',
        Age::Senior => '3',
    }
}

impl Grid {
    pub fn render(&self, style: RenderStyle) -> String {
        match style {
            RenderStyle::Array => AgeArray(self).to_string(),
            RenderStyle::Human => Bracketed(self).to_string(),
        }
    }
}
