//! Destructive island counting
//!
//! Scans the grid in row-major order and starts a flood fill at every land
//! cell still present. Each fill turns its whole island into water, so every
//! later land cell found by the scan seeds a new island.
//!
//! **The grid is consumed**: after [`count_components`] returns, every cell is
//! water. Clone the grid first, or use
//! [`count_components_preserving`](super::count_components_preserving), if the
//! layout is still needed.

use skerry_core::{Algorithm, CellState, Error, Grid, Position, Result};

use super::frontier::{spread, FloodOrder};
use super::preserving::count_components_preserving;

/// Parameters for island counting
#[derive(Debug, Clone, Default)]
pub struct ComponentParams {
    /// Frontier discipline used by each flood fill
    pub order: FloodOrder,
    /// Count with a visited mask and leave the input grid untouched
    pub preserve_input: bool,
}

/// Island counting algorithm
#[derive(Debug, Clone, Default)]
pub struct ComponentCount;

impl Algorithm for ComponentCount {
    type Input = Grid;
    type Output = usize;
    type Params = ComponentParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Component Count"
    }

    fn description(&self) -> &'static str {
        "Count 4-connected land components (islands) by flood fill"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        if params.preserve_input {
            Ok(count_components_preserving(&input, params.order))
        } else {
            Ok(count_components_with(&mut input, params.order))
        }
    }
}

/// Count the islands of `grid` using breadth-first flood fills.
///
/// Every cell of `grid` is water when this returns, so a second call on the
/// same grid yields 0.
pub fn count_components(grid: &mut Grid) -> usize {
    count_components_with(grid, FloodOrder::BreadthFirst)
}

/// Count the islands of `grid` with the given frontier order.
///
/// Consumes the grid exactly like [`count_components`].
pub fn count_components_with(grid: &mut Grid, order: FloodOrder) -> usize {
    let (rows, cols) = grid.shape();
    let mut count = 0;

    for row in 0..rows {
        for col in 0..cols {
            let seed = Position::new(row, col);
            // Water here is either original water or part of an island
            // already consumed earlier in this scan.
            if !grid[seed].is_land() {
                continue;
            }
            count += 1;
            consume_island(grid, seed, order);
        }
    }

    count
}

/// Turn the island containing `start` into water.
///
/// Returns the number of land cells consumed, 0 if `start` is water.
/// Fails only when `start` lies outside the grid.
pub fn flood_fill(grid: &mut Grid, start: Position, order: FloodOrder) -> Result<usize> {
    grid.get(start)?;
    Ok(consume_island(grid, start, order))
}

fn consume_island(grid: &mut Grid, start: Position, order: FloodOrder) -> usize {
    let shape = grid.shape();
    spread(start, shape, order, |pos| {
        let cell = &mut grid[pos];
        if cell.is_land() {
            *cell = CellState::Water;
            true
        } else {
            false
        }
    })
}
