//! The square ownership grid.

pub mod grid;

pub use grid::{Board, CellState};
