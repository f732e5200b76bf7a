//! Append-only log of reversible actions, with exact rollback.
//!
//! ## Entries
//!
//! Every confirmed popup choice appends a `Choose` entry, immediately
//! followed by the `Place` entry for the tile mutation it produced. Both
//! snapshot the selected color from before the choice, so a single undo
//! restores the pre-action selection exactly.
//!
//! Retaliation captures and double-attack bonus captures are never logged:
//! those mutations are deliberately not undoable.
//!
//! ## Undo
//!
//! `undo` pops entries until it has popped a `Place` (inclusive), restoring
//! the selected color from any trailing `Choose` entries on the way, then
//! reverts the placement on the board. An empty stack, or a stack with no
//! `Place` left, reports `NothingToUndo` — an informational outcome, not an
//! error.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{CellIndex, Color, GameError};

/// One reversible action.
///
/// Entries reference cells by index; the stack owns its entries outright.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A color-popup selection, independent of placement.
    Choose {
        prev_selected: Option<Color>,
        new_selected: Color,
    },

    /// A tile mutation, with the selected-color snapshot preceding it.
    Place {
        cell: CellIndex,
        prev_owner: Option<Color>,
        new_owner: Color,
        prev_selected: Option<Color>,
    },
}

/// What an undo request accomplished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The newest placement was reverted on the given cell.
    Reverted(CellIndex),
    /// The stack held no placement to revert. No-op.
    NothingToUndo,
}

/// The undo stack.
///
/// Backed by a persistent vector, so snapshotting a match mid-game is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vector<HistoryEntry>,
}

impl HistoryStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The newest entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Drop every entry.
    ///
    /// The caller resets the selected color alongside; both happen on match
    /// start, stop, and explicit board reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Revert the newest placement.
    ///
    /// Unwinds trailing `Choose` entries (restoring `selected` from each),
    /// then pops the matching `Place`: the cell's owner reverts to
    /// `prev_owner` (possibly clearing it) and `selected` reverts to the
    /// snapshot taken before that turn's choice.
    pub fn undo(
        &mut self,
        board: &mut Board,
        selected: &mut Option<Color>,
    ) -> Result<UndoOutcome, GameError> {
        while let Some(entry) = self.entries.pop_back() {
            match entry {
                HistoryEntry::Choose { prev_selected, .. } => {
                    *selected = prev_selected;
                }
                HistoryEntry::Place {
                    cell,
                    prev_owner,
                    prev_selected,
                    ..
                } => {
                    board.set_owner(cell, prev_owner)?;
                    *selected = prev_selected;
                    debug!(%cell, restored = ?prev_owner, "placement undone");
                    return Ok(UndoOutcome::Reverted(cell));
                }
            }
        }

        Ok(UndoOutcome::NothingToUndo)
    }
}
