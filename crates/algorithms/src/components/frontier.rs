//! Flood-fill frontier
//!
//! The frontier is the working set of positions waiting to have their
//! neighbors examined. It lives for exactly one flood fill.

use skerry_core::{Neighbors, Position};
use std::collections::VecDeque;

/// Order in which the frontier hands out positions.
///
/// Both orders consume exactly the same set of cells; only the visiting
/// sequence differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloodOrder {
    /// FIFO queue, cells visited in rings of increasing distance from the seed
    #[default]
    BreadthFirst,
    /// LIFO stack
    DepthFirst,
}

#[derive(Debug)]
pub(crate) struct Frontier {
    pending: VecDeque<Position>,
    order: FloodOrder,
}

impl Frontier {
    pub(crate) fn new(order: FloodOrder) -> Self {
        Self {
            pending: VecDeque::new(),
            order,
        }
    }

    pub(crate) fn push(&mut self, pos: Position) {
        self.pending.push_back(pos);
    }

    pub(crate) fn pop(&mut self) -> Option<Position> {
        match self.order {
            FloodOrder::BreadthFirst => self.pending.pop_front(),
            FloodOrder::DepthFirst => self.pending.pop_back(),
        }
    }
}

/// Spread from `start` over 4-connected cells accepted by `claim`.
///
/// `claim(pos)` must return `true` at most once per position: it both tests
/// that the cell belongs to the region and marks it as taken. Cells are
/// claimed when pushed, so no position enters the frontier twice.
///
/// Returns the number of cells claimed (0 if `start` itself is rejected).
pub(crate) fn spread<F>(start: Position, shape: (usize, usize), order: FloodOrder, mut claim: F) -> usize
where
    F: FnMut(Position) -> bool,
{
    if !claim(start) {
        return 0;
    }

    let (rows, cols) = shape;
    let mut frontier = Frontier::new(order);
    frontier.push(start);
    let mut claimed = 1;

    while let Some(pos) = frontier.pop() {
        for &next in &Neighbors::around(pos, rows, cols) {
            if claim(next) {
                frontier.push(next);
                claimed += 1;
            }
        }
    }

    claimed
}
