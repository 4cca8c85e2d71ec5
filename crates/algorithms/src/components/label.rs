//! Island labeling
//!
//! Assigns every land cell the 1-based id of its island. Ids follow the
//! row-major order of each island's first cell, the same order in which the
//! counter discovers islands. Water is labeled 0.

use ndarray::Array2;
use skerry_core::{Algorithm, Error, Grid, Position, Result};

use super::frontier::{spread, FloodOrder};

/// Per-cell island ids plus island sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Array2<u32>,
    sizes: Vec<usize>,
}

impl ComponentLabels {
    /// Number of islands
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    /// Island id at `pos`, `None` for water or positions outside the grid
    pub fn label_at(&self, pos: Position) -> Option<u32> {
        match self.labels.get((pos.row, pos.col)) {
            Some(&0) | None => None,
            Some(&id) => Some(id),
        }
    }

    /// Cell count of island `id` (1-based)
    pub fn size_of(&self, id: u32) -> Option<usize> {
        let idx = (id as usize).checked_sub(1)?;
        self.sizes.get(idx).copied()
    }

    /// Cell counts indexed by `id - 1`
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Largest island as `(id, size)`; the lowest id wins ties
    pub fn largest(&self) -> Option<(u32, usize)> {
        self.sizes
            .iter()
            .enumerate()
            .fold(None, |best, (idx, &size)| match best {
                Some((_, best_size)) if best_size >= size => best,
                _ => Some((idx as u32 + 1, size)),
            })
    }

    /// Label raster, 0 = water
    pub fn labels(&self) -> &Array2<u32> {
        &self.labels
    }

    pub fn into_labels(self) -> Array2<u32> {
        self.labels
    }
}

/// Island labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct ComponentLabeling;

impl Algorithm for ComponentLabeling {
    type Input = Grid;
    type Output = ComponentLabels;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Component Labeling"
    }

    fn description(&self) -> &'static str {
        "Label each 4-connected land component with a 1-based id"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        label_components(&input)
    }
}

/// Label the islands of `grid` without modifying it.
///
/// Fails with [`Error::TooManyComponents`] if the grid holds more islands
/// than a `u32` id can number.
pub fn label_components(grid: &Grid) -> Result<ComponentLabels> {
    let (rows, cols) = grid.shape();
    let mut labels = Array2::<u32>::zeros((rows, cols));
    let mut sizes = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            let seed = Position::new(row, col);
            if !grid[seed].is_land() || labels[(row, col)] != 0 {
                continue;
            }

            let id = next_label(sizes.len())?;
            let size = spread(seed, (rows, cols), FloodOrder::BreadthFirst, |pos| {
                let label = &mut labels[(pos.row, pos.col)];
                if grid[pos].is_land() && *label == 0 {
                    *label = id;
                    true
                } else {
                    false
                }
            });
            sizes.push(size);
        }
    }

    Ok(ComponentLabels { labels, sizes })
}

/// Id for the island found after `found` others
fn next_label(found: usize) -> Result<u32> {
    u32::try_from(found)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or(Error::TooManyComponents { limit: u32::MAX })
}
