//! Main Grid type

use crate::error::{Error, Result, ShapeError};
use crate::map::{CellState, Neighbors, Position};
use ndarray::Array2;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A rectangular 2D grid of land and water cells.
///
/// Cells are stored in row-major order. Every constructor validates the shape,
/// so a `Grid` is always rectangular.
///
/// # Example
///
/// ```
/// use skerry_core::{CellState, Grid, Position};
///
/// let mut grid = Grid::new(2, 3, &[[1, 0, 0], [1, 1, 0]])?;
/// assert!(grid.is_land(Position::new(1, 1))?);
///
/// grid.set(Position::new(1, 1), CellState::Water)?;
/// assert_eq!(grid.land_count(), 2);
/// # Ok::<(), skerry_core::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellState>,
}

impl Grid {
    /// Create a grid from raw rows of `0` (water) and `1` (land).
    ///
    /// Fails if the number of rows differs from `rows`, if any row does not
    /// hold exactly `cols` values, or if a value is not a recognized marker.
    pub fn new<R: AsRef<[i64]>>(
        rows: usize,
        cols: usize,
        initial_cells: &[R],
    ) -> std::result::Result<Self, ShapeError> {
        if initial_cells.len() != rows {
            return Err(ShapeError::RowCount {
                expected: rows,
                found: initial_cells.len(),
            });
        }

        // Every row is checked before allocating, so `rows * cols` below is
        // the size of data that already exists.
        for (row, values) in initial_cells.iter().enumerate() {
            let found = values.as_ref().len();
            if found != cols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        let mut states = Vec::with_capacity(rows * cols);
        for (row, values) in initial_cells.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                let state =
                    CellState::from_raw(value).ok_or(ShapeError::InvalidValue { row, col, value })?;
                states.push(state);
            }
        }

        Self::from_states(rows, cols, states)
    }

    /// Create a grid from an already classified row-major buffer
    pub fn from_states(
        rows: usize,
        cols: usize,
        states: Vec<CellState>,
    ) -> std::result::Result<Self, ShapeError> {
        check_dims(rows, cols)?;
        let found = states.len();
        let cells = Array2::from_shape_vec((rows, cols), states)
            .map_err(|_| ShapeError::BufferLength { rows, cols, found })?;
        Ok(Self { cells })
    }

    /// Create a grid where every cell has the same state
    ///
    /// # Panics
    /// If `rows` x `cols` (ignoring a zero extent) exceeds `isize::MAX` cells.
    pub fn filled(rows: usize, cols: usize, state: CellState) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), state),
        }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells (zero rows or zero columns)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Row-major linear index (`row * cols + col`), `None` outside the grid
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols() + pos.col)
    }

    // Data access

    /// Get the state at `pos`
    pub fn get(&self, pos: Position) -> Result<CellState> {
        self.cells
            .get((pos.row, pos.col))
            .copied()
            .ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Set the state at `pos`
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<()> {
        if !self.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        self.cells[(pos.row, pos.col)] = state;
        Ok(())
    }

    /// Whether the cell at `pos` is land
    pub fn is_land(&self, pos: Position) -> Result<bool> {
        Ok(self.get(pos)?.is_land())
    }

    /// In-bounds neighbors of `pos` in up, right, down, left order
    pub fn neighbors4(&self, pos: Position) -> Neighbors {
        Neighbors::around(pos, self.rows(), self.cols())
    }

    /// Every position of the grid in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (rows, cols) = self.shape();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Number of land cells
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|state| state.is_land()).count()
    }

    fn out_of_bounds(&self, pos: Position) -> Error {
        Error::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows(),
            cols: self.cols(),
        }
    }
}

/// Largest supported extent: the product of the non-zero dimensions must fit
/// in `isize`, the limit of the backing array.
fn check_dims(rows: usize, cols: usize) -> std::result::Result<(), ShapeError> {
    rows.max(1)
        .checked_mul(cols.max(1))
        .filter(|&cells| cells <= isize::MAX as usize)
        .map(|_| ())
        .ok_or(ShapeError::TooLarge { rows, cols })
}

/// Unchecked-by-`Result` access; panics outside the grid like slice indexing.
impl Index<Position> for Grid {
    type Output = CellState;

    fn index(&self, pos: Position) -> &CellState {
        &self.cells[(pos.row, pos.col)]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut CellState {
        &mut self.cells[(pos.row, pos.col)]
    }
}

/// Renders one line per row, values separated by single spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, state) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", state)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(2, 3, &[vec![1, 0, 1], vec![0, 0, 1]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.land_count(), 3);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let rows: [Vec<i64>; 3] = [vec![1, 0, 1], vec![0, 1], vec![1, 1, 1]];
        let err = Grid::new(3, 3, &rows).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = Grid::new(3, 2, &[[1, 0], [0, 1]]).unwrap_err();
        assert_eq!(err, ShapeError::RowCount { expected: 3, found: 2 });
    }

    #[test]
    fn test_invalid_value_rejected() {
        let err = Grid::new(2, 2, &[[1, 0], [-1, 1]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidValue {
                row: 1,
                col: 0,
                value: -1
            }
        );
    }

    #[test]
    fn test_oversized_cols_rejected_without_allocating() {
        let err = Grid::new(1, usize::MAX, &[[1i64]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 0,
                expected: usize::MAX,
                found: 1
            }
        );

        let wide = usize::MAX / 2 + 1;
        let err = Grid::new(2, wide, &[[1i64, 0], [0, 1]]).unwrap_err();
        assert!(matches!(err, ShapeError::RaggedRow { row: 0, found: 2, .. }));
    }

    #[test]
    fn test_oversized_empty_shape_rejected() {
        let err = Grid::from_states(usize::MAX, 0, Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ShapeError::TooLarge {
                rows: usize::MAX,
                cols: 0
            }
        );
        assert!(matches!(
            Grid::new::<Vec<i64>>(0, usize::MAX, &[]),
            Err(ShapeError::TooLarge { .. })
        ));
        assert_eq!(Grid::from_states(4, 0, Vec::new()).unwrap().shape(), (4, 0));
    }

    #[test]
    fn test_from_states_length_mismatch() {
        let err = Grid::from_states(2, 2, vec![CellState::Land; 3]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::BufferLength {
                rows: 2,
                cols: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_empty_grids() {
        let no_rows = Grid::new::<Vec<i64>>(0, 4, &[]).unwrap();
        assert!(no_rows.is_empty());
        assert_eq!(no_rows.positions().count(), 0);

        let no_cols = Grid::new(2, 0, &[Vec::<i64>::new(), Vec::new()]).unwrap();
        assert!(no_cols.is_empty());
        assert_eq!(no_cols.shape(), (2, 0));
    }

    #[test]
    fn test_get_and_set() {
        let mut grid = Grid::filled(3, 3, CellState::Water);
        let pos = Position::new(1, 2);
        grid.set(pos, CellState::Land).unwrap();
        assert_eq!(grid.get(pos).unwrap(), CellState::Land);
        assert!(grid.is_land(pos).unwrap());
        assert_eq!(grid.land_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::filled(2, 3, CellState::Land);
        let outside = Position::new(2, 0);

        assert!(matches!(
            grid.get(outside),
            Err(Error::OutOfBounds { row: 2, col: 0, rows: 2, cols: 3 })
        ));
        assert!(matches!(grid.is_land(Position::new(0, 3)), Err(Error::OutOfBounds { .. })));
        assert!(matches!(
            grid.set(outside, CellState::Water),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(grid.land_count(), 6);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::filled(2, 2, CellState::Water);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::filled(3, 4, CellState::Water);
        assert_eq!(grid.index_of(Position::new(2, 1)), Some(9));
        assert_eq!(grid.index_of(Position::new(3, 0)), None);
    }

    #[test]
    fn test_neighbors4_edge() {
        let grid = Grid::filled(3, 3, CellState::Land);
        let n = grid.neighbors4(Position::new(0, 1));
        assert_eq!(
            n.as_slice(),
            &[Position::new(0, 2), Position::new(1, 1), Position::new(0, 0)]
        );
    }

    #[test]
    fn test_display() {
        let grid = Grid::new(2, 3, &[[1, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!(grid.to_string(), "1 0 1\n0 1 0");
    }
}
