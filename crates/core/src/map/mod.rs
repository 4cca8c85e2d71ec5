//! Land/water grid data structures

mod cell;
mod grid;
mod neighbors;
mod position;

pub use cell::CellState;
pub use grid::Grid;
pub use neighbors::Neighbors;
pub use position::Position;
