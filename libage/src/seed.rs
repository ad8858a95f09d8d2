use std::str::FromStr;

use anyhow::{Context, bail};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{age::Age, grid::Grid, pos::Position};

/// One `[i, j, age]` entry of a coordinate seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, Age)", into = "(usize, usize, Age)")]
pub struct SeedCell {
    pub pos: Position,
    pub age: Age,
}

impl From<(usize, usize, Age)> for SeedCell {
    fn from((i, j, age): (usize, usize, Age)) -> Self {
        Self {
            pos: Position { i, j },
            age,
        }
    }
}

impl From<SeedCell> for (usize, usize, Age) {
    fn from(value: SeedCell) -> Self {
        (value.pos.i, value.pos.j, value.age)
    }
}

impl Grid {
    /// Sets the age of every seeded cell. Panics when a seed lies outside the grid.
    pub fn seed_cells<'a, I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = &'a SeedCell>,
    {
        self.seed(cells.into_iter().map(|cell| (cell.pos, cell.age)));
    }

    /// Builds a grid from rows of ages, top row first. The rows must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Vec<Age>>) -> anyhow::Result<Self> {
        let Some(first_row) = rows.first() else {
            bail!("Grid has no rows");
        };

        let width = first_row.len();
        let height = rows.len();

        if let Some((j, row)) = rows.iter().find_position(|row| row.len() != width) {
            bail!(
                "Grid is not rectangular: row {j} has {} cells, expected {width}",
                row.len()
            );
        }

        let ages = rows.into_iter().flatten().collect_vec();

        Ok(Self::with_ages(width, height, ages))
    }
}

/// Parses the nested-array text form, e.g. `[[0,0,2],[0,1,3]]`.
impl FromStr for Grid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<Age>> = serde_json::from_str(s).context("Couldn't parse grid")?;
        Grid::from_rows(rows)
    }
}

pub fn parse_seed_cells(s: &str) -> anyhow::Result<Vec<SeedCell>> {
    serde_json::from_str(s).context("Couldn't parse seed cells")
}
