//! 4-connected neighbor enumeration

use super::Position;
use std::ops::Deref;

/// Rook (4-connected) offsets in enumeration order: up, right, down, left.
const ROOK_OFFSETS: [(isize, isize); 4] = [
    (-1, 0), // up
    (0, 1),  // right
    (1, 0),  // down
    (0, -1), // left
];

/// The in-bounds 4-connected neighbors of a cell.
///
/// Holds at most four positions inline, in up/right/down/left order with
/// out-of-grid positions left out. Dereferences to `[Position]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    buf: [Position; 4],
    len: usize,
}

impl Neighbors {
    /// Neighbors of `pos` inside a `rows` x `cols` grid
    pub fn around(pos: Position, rows: usize, cols: usize) -> Self {
        let mut neighbors = Self {
            buf: [Position::new(0, 0); 4],
            len: 0,
        };

        for &(dr, dc) in &ROOK_OFFSETS {
            if let Some(n) = pos.offset(dr, dc) {
                if n.row < rows && n.col < cols {
                    neighbors.buf[neighbors.len] = n;
                    neighbors.len += 1;
                }
            }
        }

        neighbors
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.buf[..self.len]
    }
}

impl Deref for Neighbors {
    type Target = [Position];

    fn deref(&self) -> &[Position] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Neighbors {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_order() {
        let n = Neighbors::around(Position::new(1, 1), 3, 3);
        assert_eq!(
            n.as_slice(),
            &[
                Position::new(0, 1),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_corners_are_clipped() {
        let top_left = Neighbors::around(Position::new(0, 0), 3, 3);
        assert_eq!(top_left.as_slice(), &[Position::new(0, 1), Position::new(1, 0)]);

        let bottom_right = Neighbors::around(Position::new(2, 2), 3, 3);
        assert_eq!(bottom_right.as_slice(), &[Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        assert!(Neighbors::around(Position::new(0, 0), 1, 1).is_empty());
    }
}
