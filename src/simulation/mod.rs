pub mod cell;
pub mod error;
pub mod grid;
pub mod life;
pub mod rule30;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use rule30::SeedMode;
