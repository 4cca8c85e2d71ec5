//! Cell state tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a single grid cell.
///
/// There is no separate "visited" state: a flood fill consumes a land cell by
/// turning it into water, and `Water` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Land,
    #[default]
    Water,
}

impl CellState {
    /// Raw input value for land cells
    pub const LAND_MARKER: i64 = 1;
    /// Raw input value for water cells
    pub const WATER_MARKER: i64 = 0;

    /// Classify a raw input value, `None` if it is neither marker.
    pub fn from_raw(value: i64) -> Option<Self> {
        match value {
            Self::LAND_MARKER => Some(CellState::Land),
            Self::WATER_MARKER => Some(CellState::Water),
            _ => None,
        }
    }

    /// Raw marker value for this state
    pub fn to_raw(self) -> i64 {
        match self {
            CellState::Land => Self::LAND_MARKER,
            CellState::Water => Self::WATER_MARKER,
        }
    }

    pub fn is_land(self) -> bool {
        self == CellState::Land
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(CellState::from_raw(1), Some(CellState::Land));
        assert_eq!(CellState::from_raw(0), Some(CellState::Water));
        assert_eq!(CellState::from_raw(2), None);
        assert_eq!(CellState::from_raw(-1), None);
    }

    #[test]
    fn test_raw_markers() {
        assert_eq!(CellState::Land.to_raw(), 1);
        assert_eq!(CellState::Water.to_raw(), 0);
        assert_eq!(CellState::default(), CellState::Water);
    }
}
