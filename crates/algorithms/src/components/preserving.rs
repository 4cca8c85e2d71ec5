//! Non-destructive island counting
//!
//! Same scan and flood fill as the destructive counter, but visited cells are
//! recorded in a bitset of `rows * cols` bits (indexed `row * cols + col`)
//! instead of being turned into water. The caller's grid is never modified.

use skerry_core::{Grid, Position};

use super::frontier::{spread, FloodOrder};

const WORD_BITS: usize = u64::BITS as usize;

/// One bit per grid cell
#[derive(Debug, Clone)]
pub(crate) struct VisitedMask {
    words: Vec<u64>,
}

impl VisitedMask {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
        }
    }

    /// Mark `index`; returns `true` if it was not marked before
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        let word = &mut self.words[index / WORD_BITS];
        let bit = 1u64 << (index % WORD_BITS);
        let fresh = *word & bit == 0;
        *word |= bit;
        fresh
    }

    pub(crate) fn contains(&self, index: usize) -> bool {
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }
}

/// Count the islands of `grid` without modifying it.
///
/// Returns the same value [`count_components`](super::count_components)
/// would, at the cost of one extra bit per cell.
pub fn count_components_preserving(grid: &Grid, order: FloodOrder) -> usize {
    let (rows, cols) = grid.shape();
    let mut visited = VisitedMask::new(rows * cols);
    let mut count = 0;

    for row in 0..rows {
        for col in 0..cols {
            let seed = Position::new(row, col);
            if !grid[seed].is_land() || visited.contains(row * cols + col) {
                continue;
            }
            count += 1;
            spread(seed, (rows, cols), order, |pos| {
                grid[pos].is_land() && grid.index_of(pos).is_some_and(|i| visited.insert(i))
            });
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use skerry_core::CellState;

    #[test]
    fn test_visited_mask() {
        let mut mask = VisitedMask::new(130);
        assert!(!mask.contains(129));
        assert!(mask.insert(129));
        assert!(!mask.insert(129));
        assert!(mask.contains(129));
        assert!(mask.insert(64));
        assert!(!mask.contains(63));
    }

    #[test]
    fn test_grid_survives() {
        let grid = Grid::new(
            4,
            5,
            &[
                [1, 1, 0, 0, 0],
                [1, 1, 0, 0, 0],
                [0, 0, 1, 0, 0],
                [0, 0, 0, 1, 1],
            ],
        )
        .unwrap();
        let before = grid.clone();

        assert_eq!(count_components_preserving(&grid, FloodOrder::BreadthFirst), 3);
        assert_eq!(grid, before);
        // Repeatable because nothing was consumed
        assert_eq!(count_components_preserving(&grid, FloodOrder::DepthFirst), 3);
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(
            count_components_preserving(&Grid::filled(0, 0, CellState::Land), FloodOrder::default()),
            0
        );
        assert_eq!(
            count_components_preserving(&Grid::filled(3, 3, CellState::Land), FloodOrder::default()),
            1
        );
        let diagonal = Grid::new(2, 2, &[[1, 0], [0, 1]]).unwrap();
        assert_eq!(count_components_preserving(&diagonal, FloodOrder::default()), 2);
    }
}
