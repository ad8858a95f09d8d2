use rayon::iter::{IndexedParallelIterator, IntoParallelRefMutIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use strum::EnumString;

use crate::{age::Age, grid::Grid, rule};

/// How the read pass of a generation walks the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Sweep {
    #[default]
    Sequential,

    /// Computes next ages on the rayon pool. The commit still happens once, after every read.
    Parallel,
}

impl Grid {
    /// Advances the grid by one generation.
    pub fn evolve(&mut self) {
        self.evolve_with(Sweep::Sequential);
    }

    pub fn evolve_with(&mut self, sweep: Sweep) {
        let mut next_ages = self.take_next_ages();
        next_ages.resize(self.len(), Age::Empty);

        match sweep {
            Sweep::Sequential => {
                fill_next_ages(self, &mut next_ages, 0..self.len());
            }
            Sweep::Parallel => {
                let grid = &*self;
                next_ages
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(index, next_age)| *next_age = next_age_at(grid, index));
            }
        }

        self.commit(next_ages);
    }
}

/// Read pass: writes the next age of every cell listed in `order` into `next_ages`.
/// Only the grid's current ages are read, so any visiting order gives the same buffer.
pub(crate) fn fill_next_ages<I>(grid: &Grid, next_ages: &mut [Age], order: I)
where
    I: IntoIterator<Item = usize>,
{
    for index in order {
        next_ages[index] = next_age_at(grid, index);
    }
}

fn next_age_at(grid: &Grid, index: usize) -> Age {
    let ages = grid.ages();
    let neighbor_ages = grid
        .neighborhood(index)
        .indices()
        .iter()
        .map(|&neighbor_index| ages[neighbor_index]);

    rule::next_age(ages[index], neighbor_ages)
}
