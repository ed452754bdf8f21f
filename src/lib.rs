//! Game of Life and Rule 30 cellular automata.
//!
//! [`simulation`] holds the pure stepping engines; [`app`] holds the
//! display-side sessions that drive them.

pub mod app;
pub mod config;
pub mod simulation;
