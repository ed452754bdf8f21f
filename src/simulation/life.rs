//! Conway's Game of Life (B3/S23) on a dead-bordered grid.
//!
//! Neighbors outside the grid count as dead; there is no wraparound.

use rand::Rng;

use crate::config::{LIFE_COLS, LIFE_ROWS};
use crate::simulation::cell::Cell;
use crate::simulation::error::GridError;
use crate::simulation::grid::Grid;

/// All-dead grid of the Life dimensions
pub fn empty_grid() -> Grid {
    Grid::new(LIFE_ROWS, LIFE_COLS)
}

/// Life-sized grid with each cell independently alive with probability `p_alive`
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, p_alive: f64) -> Grid {
    Grid::random(LIFE_ROWS, LIFE_COLS, p_alive, rng)
}

/// Accept raw 0/1 rows from outside only if they match the Life dimensions
pub fn grid_from_rows(raw: &[Vec<u8>]) -> Result<Grid, GridError> {
    Grid::from_rows(raw, LIFE_ROWS, LIFE_COLS)
}

/// Copy of `grid` with the cell at `(row, col)` flipped.
///
/// Coordinates outside the grid leave the copy unchanged.
pub fn toggle_cell(grid: &Grid, row: usize, col: usize) -> Grid {
    let mut next = grid.clone();
    match grid.get(row, col) {
        Some(cell) => next.set(row, col, cell.toggled()),
        None => log::warn!(
            "Ignoring toggle at ({}, {}) outside {}x{} grid",
            row,
            col,
            grid.rows(),
            grid.cols()
        ),
    }
    next
}

/// Count live cells among the 8 surrounding positions.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for dr in -1..=1isize {
        for dc in -1..=1isize {
            // Skip the center cell
            if dr == 0 && dc == 0 {
                continue;
            }

            let r = row as isize + dr;
            let c = col as isize + dc;
            count += grid.cell_or_dead(r, c).bit();
        }
    }

    count
}

/// B3/S23 transition for a single cell
#[inline]
pub fn next_state(current: Cell, neighbors: u8) -> Cell {
    match (current, neighbors) {
        (_, n) if n < 2 || n > 3 => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (cell, _) => cell,
    }
}

/// Write the generation after `current` into `next`.
///
/// Reads only from `current`, so `next` may hold stale data from an older
/// generation. Both grids must have the same dimensions; `next` is resized
/// to match otherwise.
pub fn step_into(current: &Grid, next: &mut Grid) {
    if !current.same_shape(next) {
        *next = Grid::new(current.rows(), current.cols());
    }

    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let cell = current.get(row, col).unwrap_or_default();
            let neighbors = count_neighbors(current, row, col);
            next.set(row, col, next_state(cell, neighbors));
        }
    }
}

/// Compute the next generation into a freshly allocated grid.
pub fn step(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());
    step_into(grid, &mut next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn with_live(cells: &[(usize, usize)]) -> Grid {
        let mut grid = empty_grid();
        for &(r, c) in cells {
            grid.set(r, c, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_empty_grid_dimensions() {
        let grid = empty_grid();
        assert_eq!(grid.rows(), 50);
        assert_eq!(grid.cols(), 95);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_step_preserves_shape_and_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = random_grid(&mut rng, 0.3);
        let next = step(&grid);
        assert!(next.same_shape(&grid));
        assert!(next.to_rows().iter().flatten().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(step(&empty_grid()), empty_grid());
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = with_live(&[(20, 40)]);
        assert!(step(&grid).is_empty(), "Isolated cell should die");
    }

    #[test]
    fn test_block_is_still_life() {
        let block = with_live(&[(10, 10), (10, 11), (11, 10), (11, 11)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let block = with_live(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(step(&block), block);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = with_live(&[(5, 4), (5, 5), (5, 6)]);
        let vertical = with_live(&[(4, 5), (5, 5), (6, 5)]);

        let once = step(&horizontal);
        assert_eq!(once, vertical);
        assert_eq!(step(&once), horizontal);
    }

    #[test]
    fn test_blinker_on_edge_does_not_wrap() {
        // Vertical blinker in column 0: with wraparound the last column would light up
        let blinker = with_live(&[(9, 0), (10, 0), (11, 0)]);
        let next = step(&blinker);
        assert_eq!(next.live_count(), 2);
        assert_eq!(next.get(10, 0), Some(Cell::Alive));
        assert_eq!(next.get(10, 1), Some(Cell::Alive));
        assert_eq!(next.get(10, LIFE_COLS - 1), Some(Cell::Dead));
    }

    #[test]
    fn test_glider_translates() {
        let glider = with_live(&[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        let mut grid = glider.clone();
        for _ in 0..4 {
            grid = step(&grid);
        }
        let shifted = with_live(&[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        assert_eq!(grid, shifted);
    }

    #[test]
    fn test_count_neighbors_at_corner() {
        let grid = with_live(&[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(count_neighbors(&grid, 0, 0), 3);
        assert_eq!(count_neighbors(&grid, LIFE_ROWS - 1, LIFE_COLS - 1), 0);
    }

    #[test]
    fn test_next_state_rules() {
        for n in 0..=8u8 {
            let from_dead = next_state(Cell::Dead, n);
            let from_alive = next_state(Cell::Alive, n);
            assert_eq!(from_dead.is_alive(), n == 3, "dead with {} neighbors", n);
            assert_eq!(from_alive.is_alive(), n == 2 || n == 3, "alive with {} neighbors", n);
        }
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let blinker = with_live(&[(5, 4), (5, 5), (5, 6)]);
        let snapshot = blinker.clone();
        let _ = step(&blinker);
        assert_eq!(blinker, snapshot);
    }

    #[test]
    fn test_step_into_overwrites_stale_buffer() {
        let blinker = with_live(&[(5, 4), (5, 5), (5, 6)]);
        let mut rng = StdRng::seed_from_u64(5);
        let mut back = random_grid(&mut rng, 0.5);
        step_into(&blinker, &mut back);
        assert_eq!(back, step(&blinker));
    }

    #[test]
    fn test_step_into_resizes_mismatched_buffer() {
        let block = with_live(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut back = Grid::new(3, 3);
        step_into(&block, &mut back);
        assert_eq!(back, block);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = random_grid(&mut rng, 0.3);
        let once = toggle_cell(&grid, 7, 13);
        assert_ne!(once.get(7, 13), grid.get(7, 13));

        let differing = grid
            .cells()
            .iter()
            .zip(once.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 1, "Only the toggled cell should change");

        assert_eq!(toggle_cell(&once, 7, 13), grid);
    }

    #[test]
    fn test_grid_from_rows_checks_life_dimensions() {
        let blinker = with_live(&[(5, 4), (5, 5), (5, 6)]);
        assert_eq!(grid_from_rows(&blinker.to_rows()), Ok(blinker));

        let rule30_sized = vec![vec![0u8; 85]; 45];
        assert_eq!(
            grid_from_rows(&rule30_sized),
            Err(GridError::RowCount { expected: LIFE_ROWS, actual: 45 })
        );

        let mut narrow = vec![vec![0u8; LIFE_COLS]; LIFE_ROWS];
        narrow[LIFE_ROWS - 1].pop();
        assert_eq!(
            grid_from_rows(&narrow),
            Err(GridError::ColumnCount { row: LIFE_ROWS - 1, expected: LIFE_COLS, actual: LIFE_COLS - 1 })
        );
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let grid = with_live(&[(3, 3)]);
        assert_eq!(toggle_cell(&grid, LIFE_ROWS, 0), grid);
        assert_eq!(toggle_cell(&grid, 0, LIFE_COLS), grid);
    }
}
