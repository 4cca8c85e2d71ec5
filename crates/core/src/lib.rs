//! # Skerry Core
//!
//! Core types, traits and I/O for the Skerry island counter.
//!
//! This crate provides:
//! - `Grid`: rectangular land/water cell buffer with bounds-checked access
//! - `CellState` and `Position`: the cell tag and coordinate value types
//! - `Algorithm`: trait shared by the counting and labeling algorithms
//! - Text I/O for the `<rows> <cols>` + rows-of-0/1 grid format

pub mod error;
pub mod map;
pub mod io;

pub use error::{Error, Result, ShapeError};
pub use map::{CellState, Grid, Neighbors, Position};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result, ShapeError};
    pub use crate::map::{CellState, Grid, Neighbors, Position};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in Skerry.
///
/// Algorithms transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
