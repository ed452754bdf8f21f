use std::fmt;

use rand::Rng;

use crate::config::{ALIVE_GLYPH, DEAD_GLYPH};
use crate::simulation::cell::Cell;
use crate::simulation::error::GridError;

/// Fixed-size rectangular table of binary cells, stored row-major.
///
/// Dimensions are set at construction and no method changes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where each cell is independently alive with probability `p_alive`
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, p_alive: f64, rng: &mut R) -> Self {
        let cells = (0..rows * cols)
            .map(|_| Cell::from_alive(rng.gen::<f64>() < p_alive))
            .collect();

        Self { rows, cols, cells }
    }

    /// Validate raw 0/1 rows against the expected dimensions
    pub fn from_rows(raw: &[Vec<u8>], rows: usize, cols: usize) -> Result<Self, GridError> {
        if raw.len() != rows {
            return Err(GridError::RowCount {
                expected: rows,
                actual: raw.len(),
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, values) in raw.iter().enumerate() {
            if values.len() != cols {
                return Err(GridError::ColumnCount {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|_| GridError::CellValue { row, col, value })?;
                cells.push(cell);
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Export as raw 0/1 rows for a display layer
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .filter_map(|r| self.row(r))
            .map(|row| row.iter().map(|c| c.bit()).collect())
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Row-major linear index
    #[inline]
    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index_of(row, col)])
        } else {
            None
        }
    }

    /// Cell at a signed offset position; anything outside the grid reads as dead
    #[inline]
    pub fn cell_or_dead(&self, row: isize, col: isize) -> Cell {
        if row < 0 || col < 0 {
            return Cell::Dead;
        }
        self.get(row as usize, col as usize).unwrap_or(Cell::Dead)
    }

    /// Overwrite a cell in place. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.in_bounds(row, col) {
            let idx = self.index_of(row, col);
            self.cells[idx] = cell;
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            let start = self.index_of(row, 0);
            Some(&self.cells[start..start + self.cols])
        } else {
            None
        }
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = self.index_of(row, 0);
        let cols = self.cols;
        &mut self.cells[start..start + cols]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| !c.is_alive())
    }

    /// Reset every cell to dead, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).filter_map(|r| self.row(r)) {
            let line: String = row
                .iter()
                .map(|c| if c.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
