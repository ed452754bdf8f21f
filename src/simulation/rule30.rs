//! Wolfram Rule 30 elementary automaton.
//!
//! Row 0 is the seed; every later row is derived from the row above it.
//! Missing neighbors at either edge read as 0.

use std::fmt;

use rand::Rng;

use crate::config::{RULE30_ALIVE_PROBABILITY, RULE30_COLS, RULE30_ROWS};
use crate::simulation::cell::Cell;
use crate::simulation::grid::Grid;

/// Next state for each `(left, center, right)` neighborhood, indexed by
/// `left << 2 | center << 1 | right`.
///
/// ```text
/// 111 -> 0   110 -> 0   101 -> 0   100 -> 1
/// 011 -> 1   010 -> 1   001 -> 1   000 -> 0
/// ```
pub const RULE30_TABLE: [Cell; 8] = [
    Cell::Dead,  // 000
    Cell::Alive, // 001
    Cell::Alive, // 010
    Cell::Alive, // 011
    Cell::Alive, // 100
    Cell::Dead,  // 101
    Cell::Dead,  // 110
    Cell::Dead,  // 111
];

/// How row 0 is populated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Single live cell at `cols / 2`
    #[default]
    Centered,
    /// Each cell alive with probability 0.5
    Random,
}

impl SeedMode {
    pub fn toggled(self) -> Self {
        match self {
            SeedMode::Centered => SeedMode::Random,
            SeedMode::Random => SeedMode::Centered,
        }
    }
}

impl fmt::Display for SeedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedMode::Centered => write!(f, "centered"),
            SeedMode::Random => write!(f, "random"),
        }
    }
}

/// Apply the lookup table to one neighborhood
#[inline]
pub fn next_cell(left: Cell, center: Cell, right: Cell) -> Cell {
    let index = (left.bit() << 2) | (center.bit() << 1) | right.bit();
    RULE30_TABLE[index as usize]
}

/// Fill `next` from `prev`, treating positions past either end as dead
fn evolve_row(prev: &[Cell], next: &mut [Cell]) {
    let last = prev.len().saturating_sub(1);
    for (j, out) in next.iter_mut().enumerate() {
        let left = if j == 0 { Cell::Dead } else { prev[j - 1] };
        let center = prev[j];
        let right = if j == last { Cell::Dead } else { prev[j + 1] };
        *out = next_cell(left, center, right);
    }
}

fn seed_row<R: Rng + ?Sized>(row: &mut [Cell], mode: SeedMode, rng: &mut R) {
    match mode {
        SeedMode::Centered => {
            let center = row.len() / 2;
            if let Some(cell) = row.get_mut(center) {
                *cell = Cell::Alive;
            }
        }
        SeedMode::Random => {
            for cell in row.iter_mut() {
                *cell = Cell::from_alive(rng.gen::<f64>() < RULE30_ALIVE_PROBABILITY);
            }
        }
    }
}

/// Build a `rows x cols` history grid from a seed row.
///
/// `rng` is only consulted for [`SeedMode::Random`].
pub fn generate_with_size<R: Rng + ?Sized>(
    mode: SeedMode,
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Grid {
    let mut grid = Grid::new(rows, cols);
    if rows == 0 || cols == 0 {
        return grid;
    }

    seed_row(grid.row_mut(0), mode, rng);

    let mut prev = grid.row_mut(0).to_vec();
    for i in 1..rows {
        let next = grid.row_mut(i);
        evolve_row(&prev, next);
        prev.copy_from_slice(next);
    }

    grid
}

/// Build the full Rule 30 history grid at the standard size
pub fn generate<R: Rng + ?Sized>(mode: SeedMode, rng: &mut R) -> Grid {
    generate_with_size(mode, RULE30_ROWS, RULE30_COLS, rng)
}

/// All-dead grid of the Rule 30 dimensions
pub fn clear() -> Grid {
    Grid::new(RULE30_ROWS, RULE30_COLS)
}
