//! Error types for board and engine operations.
//!
//! The failure model is deliberately small: an out-of-range cell index is a
//! programmer error and propagates; a cancelled color popup is a local
//! no-op; an empty undo stack is informational and not an error at all
//! (see `history::UndoOutcome`).

use thiserror::Error;

/// Errors from board and engine operations.
///
/// Index validation happens before any mutation, so a returned error means
/// the match state is unchanged.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {index} out of range for grid of {size}")]
    InvalidCell { index: usize, size: usize },
}

/// The user dismissed a color popup without choosing.
///
/// Returned by `Frontend::choose_color`; callers recover locally by leaving
/// the match state untouched.
#[derive(Clone, Copy, Debug, Default, Error, PartialEq, Eq)]
#[error("color choice cancelled")]
pub struct ChoiceCancelled;
