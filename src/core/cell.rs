//! Grid cells and their stable indices.
//!
//! Every tile on the board is identified by a `CellIndex` in
//! `[0, grid_size)`. Cell indices are stable for the lifetime of a board;
//! the history stack references cells by index, never by ownership of
//! board memory.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Stable index of a cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellIndex(pub u16);

impl CellIndex {
    /// Create a cell index.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw index as a usize.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for CellIndex {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// A single tile: at most one owner, plus an optional power-up flag.
///
/// An owner and a power-up flag may coexist only transiently: the flag is
/// consumed by the first claim that lands on the cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The color currently holding this tile, if any.
    pub owner: Option<Color>,

    /// Whether claiming this tile grants a double attack.
    pub power_up: bool,
}

impl Cell {
    /// An unowned, unflagged cell.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            owner: None,
            power_up: false,
        }
    }

    /// Check whether any color holds this tile.
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}
