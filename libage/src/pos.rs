use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate. `i` moves left-to-right (column), `j` moves top-to-bottom (row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }

    /// Applies a signed offset, returning `None` when the result would be negative.
    pub fn offset(self, [di, dj]: [isize; 2]) -> Option<Self> {
        Some(Self {
            i: self.i.checked_add_signed(di)?,
            j: self.j.checked_add_signed(dj)?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            i: value[0],
            j: value[1],
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((i, j): (usize, usize)) -> Self {
        Self { i, j }
    }
}

impl From<Position> for [usize; 2] {
    fn from(value: Position) -> Self {
        [value.i, value.j]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}
