use age::Age;
use evolution::Sweep;
use grid::Grid;

pub mod age;
pub mod evolution;
pub mod grid;
pub mod pos;
pub mod render;
pub mod rule;
pub mod seed;

/// A grid together with the generation it is at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub grid: Grid,
    pub sweep: Sweep,
    generation: usize,
}

impl Game {
    pub fn new(grid: Grid, sweep: Sweep) -> Self {
        Self {
            grid,
            sweep,
            generation: 1,
        }
    }

    /// Generations are counted from 1, the state the grid was seeded with.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn tick(&mut self) {
        self.grid.evolve_with(self.sweep);
        self.generation += 1;

        let [empty, newborn, adult, senior] = self.grid.population();
        log::debug!(
            "generation {}: {newborn} newborn, {adult} adult, {senior} senior, {empty} empty",
            self.generation
        );
    }

    pub fn tick_n(&mut self, times: usize) {
        for _ in 0..times {
            self.tick();
        }
    }

    /// Replaces the grid and starts counting generations again.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.generation = 1;
    }

    pub fn is_extinct(&self) -> bool {
        self.grid.ages().iter().all(|age| *age == Age::Empty)
    }
}
