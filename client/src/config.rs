use std::{fs, path::Path};

use anyhow::{Context, bail, ensure};
use libage::{age::Age, evolution::Sweep, grid::Grid, render::RenderStyle, seed::SeedCell};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub width: usize,
    pub height: usize,

    /// The last generation to print. Generation 1 is the seeded grid.
    pub generations: usize,

    pub seed: SeedSource,

    #[serde(default)]
    pub render: RenderStyle,

    #[serde(default)]
    pub sweep: Sweep,

    /// Read commands from stdin after printing the generations.
    #[serde(default)]
    pub interactive: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeedSource {
    /// `[i, j, age]` triples on an otherwise empty grid.
    Cells { cells: Vec<SeedCell> },

    /// A full grid of ages, top row first. Its size overrides `width` and `height`.
    Grid { rows: Vec<Vec<Age>> },

    Random { occupied: usize },
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")
    }

    pub fn build_grid(&self) -> anyhow::Result<Grid> {
        let grid = match &self.seed {
            SeedSource::Cells { cells } => {
                let mut grid = Grid::new(self.width, self.height);

                if let Some(outside) = cells.iter().find(|cell| grid.get(cell.pos).is_none()) {
                    bail!(
                        "Seed cell {} is outside the {}x{} grid",
                        outside.pos,
                        self.width,
                        self.height
                    );
                }

                grid.seed_cells(cells);
                grid
            }

            SeedSource::Grid { rows } => Grid::from_rows(rows.clone())?,

            SeedSource::Random { occupied } => {
                ensure!(
                    *occupied <= self.width * self.height,
                    "Can't place {occupied} cells on a {}x{} grid",
                    self.width,
                    self.height
                );

                Grid::new_random(self.width, self.height, *occupied)
            }
        };

        Ok(grid)
    }
}

impl Default for Config {
    /// A 5x5 grid with a small cluster, printed for two generations.
    fn default() -> Self {
        let cells = [
            (2, 0, Age::Newborn),
            (2, 1, Age::Newborn),
            (3, 1, Age::Newborn),
            (1, 2, Age::Adult),
            (2, 2, Age::Adult),
            (3, 2, Age::Newborn),
            (3, 3, Age::Newborn),
        ]
        .into_iter()
        .map(SeedCell::from)
        .collect();

        Self {
            width: 5,
            height: 5,
            generations: 2,
            seed: SeedSource::Cells { cells },
            render: RenderStyle::Array,
            sweep: Sweep::Sequential,
            interactive: false,
        }
    }
}
