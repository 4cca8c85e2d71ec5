//! I/O operations for reading and writing grids

mod text;

pub use text::{parse_grid, read_grid, read_grid_from_reader, write_grid};
