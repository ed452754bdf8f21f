//! Error types for grid construction at the engine boundary.
//!
//! The engines themselves are total; only raw input coming from outside the
//! crate can be malformed.

/// Reasons a raw grid is rejected before it reaches an engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The raw grid has the wrong number of rows.
    #[error("invalid grid: expected {expected} rows, got {actual}")]
    RowCount {
        /// Rows required by the engine.
        expected: usize,
        /// Rows supplied.
        actual: usize,
    },

    /// A row has the wrong number of columns.
    #[error("invalid grid: row {row} has {actual} columns, expected {expected}")]
    ColumnCount {
        /// Offending row index.
        row: usize,
        /// Columns required by the engine.
        expected: usize,
        /// Columns supplied.
        actual: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("invalid grid: cell ({row}, {col}) has non-binary value {value}")]
    CellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The raw value.
        value: u8,
    },
}
