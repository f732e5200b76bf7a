//! Board state: the cell -> owner mapping and score aggregation.
//!
//! ## Capture semantics
//!
//! `claim` sets the owner unconditionally — an owned cell may be overwritten
//! at any time. The only failure is an out-of-range index, checked before
//! any mutation.
//!
//! ## Scores
//!
//! `scores_by_color` recomputes counts by a full scan on every query. The
//! grid is small and queries are click-driven, so nothing is cached and
//! nothing can drift out of sync.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Cell, CellIndex, Color, ColorMap, GameError, GameRng};

/// Grid size of the reference classroom board.
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Number of power-up cells placed by a reset (capped at the grid size).
pub const POWER_UP_COUNT: usize = 3;

/// An ordered, fixed-size collection of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board of `size` unowned, unflagged cells.
    ///
    /// Power-ups are only placed by `reset`, which the match lifecycle
    /// invokes on start/stop/reset.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least 1 cell");

        Self {
            cells: vec![Cell::empty(); size],
        }
    }

    /// Create a board of the reference grid size.
    #[must_use]
    pub fn with_default_size() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: boards have at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn check(&self, cell: CellIndex) -> Result<usize, GameError> {
        let index = cell.index();
        if index < self.cells.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidCell {
                index,
                size: self.cells.len(),
            })
        }
    }

    /// Get a cell by index.
    pub fn cell(&self, cell: CellIndex) -> Result<&Cell, GameError> {
        let index = self.check(cell)?;
        Ok(&self.cells[index])
    }

    /// Get a cell's owner.
    pub fn owner(&self, cell: CellIndex) -> Result<Option<Color>, GameError> {
        Ok(self.cell(cell)?.owner)
    }

    /// Check a cell's power-up flag.
    pub fn has_power_up(&self, cell: CellIndex) -> Result<bool, GameError> {
        Ok(self.cell(cell)?.power_up)
    }

    /// Claim a cell for `color`, overwriting any prior owner.
    ///
    /// Returns the previous owner.
    pub fn claim(&mut self, cell: CellIndex, color: Color) -> Result<Option<Color>, GameError> {
        let index = self.check(cell)?;
        let prev = self.cells[index].owner.replace(color);
        debug!(cell = index, %color, prev = ?prev, "cell claimed");
        Ok(prev)
    }

    /// Set or clear a cell's owner. Restoration path used by undo.
    pub fn set_owner(&mut self, cell: CellIndex, owner: Option<Color>) -> Result<(), GameError> {
        let index = self.check(cell)?;
        self.cells[index].owner = owner;
        Ok(())
    }

    /// Clear a cell's power-up flag, reporting whether it was set.
    pub fn take_power_up(&mut self, cell: CellIndex) -> Result<bool, GameError> {
        let index = self.check(cell)?;
        Ok(std::mem::take(&mut self.cells[index].power_up))
    }

    /// Count owned cells per color. Full scan on every call.
    #[must_use]
    pub fn scores_by_color(&self) -> ColorMap<u32> {
        let mut counts: ColorMap<u32> = ColorMap::with_default();

        for cell in &self.cells {
            if let Some(owner) = cell.owner {
                counts[owner] += 1;
            }
        }

        counts
    }

    /// Colors holding the maximum count, provided the maximum is positive.
    ///
    /// Empty when no cells are owned: nobody leads an untouched board.
    #[must_use]
    pub fn leaders(&self) -> Vec<Color> {
        let counts = self.scores_by_color();
        let max = counts.values().copied().max().unwrap_or(0);

        if max == 0 {
            return Vec::new();
        }

        counts
            .iter()
            .filter(|&(_, &count)| count == max)
            .map(|(color, _)| color)
            .collect()
    }

    /// Indices of cells currently owned by `color`.
    #[must_use]
    pub fn owned_by(&self, color: Color) -> Vec<CellIndex> {
        self.indices_where(|cell| cell.owner == Some(color))
    }

    /// Indices of cells with no owner.
    #[must_use]
    pub fn unowned(&self) -> Vec<CellIndex> {
        self.indices_where(|cell| !cell.is_owned())
    }

    /// Indices of cells carrying a power-up flag.
    #[must_use]
    pub fn power_up_cells(&self) -> Vec<CellIndex> {
        self.indices_where(|cell| cell.power_up)
    }

    fn indices_where(&self, pred: impl Fn(&Cell) -> bool) -> Vec<CellIndex> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| pred(cell))
            .map(|(i, _)| CellIndex::new(i as u16))
            .collect()
    }

    /// Clear all owners and flags, then flag `min(3, size)` distinct
    /// uniformly random cells as power-ups.
    pub fn reset(&mut self, rng: &mut GameRng) {
        for cell in &mut self.cells {
            *cell = Cell::empty();
        }

        let placed = rng.sample_indices(self.cells.len(), POWER_UP_COUNT);
        for &index in &placed {
            self.cells[index].power_up = true;
        }

        debug!(power_ups = ?placed, "board reset");
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_default_size()
    }
}
