use std::ops::{Index, IndexMut};

use itertools::Itertools;
use strum::IntoEnumIterator;

use super::{age::Age, pos::Position};

const NEIGHBOR_RELATIVE_POSITIONS: [[isize; 2]; 8] = [
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// The in-bounds neighbors of one cell, stored as indices into the owning grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighborhood {
    indices: [usize; 8],
    len: u8,
}

impl Neighborhood {
    fn push(&mut self, index: usize) {
        self.indices[self.len as usize] = index;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices[..self.len as usize]
    }
}

/// A fixed-size grid of aging cells.
///
/// Ages live in one flat row-major buffer; `next_ages` is the scratch buffer the
/// evolution engine fills before committing a generation.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    ages: Vec<Age>,
    next_ages: Vec<Age>,
    neighborhoods: Vec<Neighborhood>,
}

impl Grid {
    /// A grid of empty cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_factory(width, height, |_| Age::default())
    }

    /// A grid whose initial ages come from `factory`, called once per cell in row-major order.
    pub fn with_factory<F>(width: usize, height: usize, mut factory: F) -> Self
    where
        F: FnMut(Position) -> Age,
    {
        let ages = (0..height)
            .cartesian_product(0..width)
            .map(|(j, i)| factory(Position { i, j }))
            .collect();

        Self::with_ages(width, height, ages)
    }

    pub fn with_ages(width: usize, height: usize, ages: Vec<Age>) -> Self {
        assert_eq!(
            ages.len(),
            width * height,
            "{width}x{height} grid needs {} ages",
            width * height
        );

        let mut grid = Self {
            width,
            height,
            next_ages: vec![Age::Empty; ages.len()],
            ages,
            neighborhoods: Vec::new(),
        };
        grid.assign_neighbors();

        grid
    }

    pub fn new_random(width: usize, height: usize, occupied_cells: usize) -> Self {
        let mut grid = Self::new(width, height);
        let mut available_indices = (0..grid.ages.len()).collect_vec();

        let living_ages = Age::iter().filter(|age| age.is_occupied()).collect_vec();

        for _ in 0..occupied_cells {
            if available_indices.is_empty() {
                panic!("Grid size too small for requested occupied cell count");
            }

            let chosen_index =
                available_indices.swap_remove(rand::random_range(0..available_indices.len()));

            grid.ages[chosen_index] = living_ages[rand::random_range(0..living_ages.len())];
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    pub fn ages(&self) -> &[Age] {
        &self.ages
    }

    pub fn get<P>(&self, pos: P) -> Option<Age>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.ages.get(index).copied()
    }

    pub fn get_mut<P>(&mut self, pos: P) -> Option<&mut Age>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.ages.get_mut(index)
    }

    /// The cell at `pos`. Panics when `pos` is outside the grid.
    pub fn cell<P>(&self, pos: P) -> Cell<'_>
    where
        P: Into<Position>,
    {
        let index = self.index_of(pos.into());
        Cell { grid: self, index }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell<'_>> {
        (0..self.ages.len()).map(move |index| Cell { grid: self, index })
    }

    pub fn for_each_cell<F>(&self, action: F)
    where
        F: FnMut(Cell<'_>),
    {
        self.cells().for_each(action);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Age]> {
        let width = self.width;
        (0..self.height).map(move |j| &self.ages[j * width..(j + 1) * width])
    }

    /// Sets each listed cell's age. Panics on coordinates outside the grid.
    pub fn seed<I, P>(&mut self, seeds: I)
    where
        I: IntoIterator<Item = (P, Age)>,
        P: Into<Position>,
    {
        for (pos, age) in seeds {
            self[pos.into()] = age;
        }
    }

    pub fn clear(&mut self) {
        self.ages.fill(Age::Empty);
    }

    /// Per-age cell counts, indexed by age value.
    pub fn population(&self) -> [usize; 4] {
        self.ages.iter().fold([0; 4], |mut counts, age| {
            counts[age.value() as usize] += 1;
            counts
        })
    }

    pub fn neighborhood(&self, index: usize) -> &Neighborhood {
        &self.neighborhoods[index]
    }

    pub(crate) fn take_next_ages(&mut self) -> Vec<Age> {
        std::mem::take(&mut self.next_ages)
    }

    /// Makes `next_ages` the current generation and keeps the old buffer as scratch.
    pub(crate) fn commit(&mut self, mut next_ages: Vec<Age>) {
        assert_eq!(next_ages.len(), self.ages.len());

        std::mem::swap(&mut self.ages, &mut next_ages);
        self.next_ages = next_ages;
    }

    /// Neighbors don't change over time, so this runs once as part of construction.
    fn assign_neighbors(&mut self) {
        self.neighborhoods = (0..self.ages.len())
            .map(|index| {
                let pos = self.index_to_pos(index);

                let mut neighborhood = Neighborhood::default();
                NEIGHBOR_RELATIVE_POSITIONS
                    .iter()
                    .filter_map(|offset| self.pos_to_index(pos.offset(*offset)?))
                    .for_each(|neighbor_index| neighborhood.push(neighbor_index));

                neighborhood
            })
            .collect();

        log::trace!("assigned neighbors for {}x{} grid", self.width, self.height);
    }

    fn index_of(&self, pos: Position) -> usize {
        self.pos_to_index(pos)
            .unwrap_or_else(|| panic!("{pos} is outside the {}x{} grid", self.width, self.height))
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { i, j } = pos.into();

        if i >= self.width {
            return None;
        }

        if j >= self.height {
            return None;
        }

        Some(i + (j * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let j = index / self.width;
        let i = index % self.width;
        Position { i, j }
    }
}

/// Two grids are equal when they have the same dimensions and the same age at every coordinate.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.ages == other.ages
    }
}

impl Eq for Grid {}

impl Index<Position> for Grid {
    type Output = Age;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.ages[self.index_of(pos)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let index = self.index_of(pos);
        &mut self.ages[index]
    }
}

/// A borrowed view of one cell of a [`Grid`].
#[derive(Debug, Clone, Copy)]
pub struct Cell<'a> {
    grid: &'a Grid,
    index: usize,
}

impl<'a> Cell<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pos(&self) -> Position {
        self.grid.index_to_pos(self.index)
    }

    pub fn age(&self) -> Age {
        self.grid.ages[self.index]
    }

    pub fn neighbors(&self) -> impl Iterator<Item = Cell<'a>> + use<'a> {
        let grid = self.grid;

        grid.neighborhoods[self.index]
            .indices()
            .iter()
            .map(move |&index| Cell { grid, index })
    }

    pub fn neighbor_ages(&self) -> impl Iterator<Item = Age> + use<'a> {
        let grid = self.grid;

        grid.neighborhoods[self.index]
            .indices()
            .iter()
            .map(move |&index| grid.ages[index])
    }
}
