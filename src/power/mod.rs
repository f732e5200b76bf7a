//! Power-ups and the double-attack bonus capture.
//!
//! Claiming a flagged cell arms the claimant's registry entry; immediately
//! after any protocol claim, an armed color fires a double attack — up to
//! two random unowned cells claimed as a bonus — and is disarmed. Bonus
//! captures are raw board mutations: they never enter the undo history, and
//! a flag they land on is consumed without arming anyone (no chained
//! double attacks).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::Board;
use crate::core::{CellIndex, Color, ColorMap, GameError, GameRng};

/// Cells a double attack may capture at most.
pub const DOUBLE_ATTACK_CAPTURES: usize = 2;

/// Per-color "double attack available" flags.
///
/// All-false at match start; armed when a color claims a power-up cell;
/// disarmed immediately upon use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpRegistry {
    armed: ColorMap<bool>,
}

impl PowerUpRegistry {
    /// Create a registry with every color disarmed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a color's double attack.
    pub fn arm(&mut self, color: Color) {
        self.armed[color] = true;
    }

    /// Whether a color has a double attack available.
    #[must_use]
    pub fn is_armed(&self, color: Color) -> bool {
        self.armed[color]
    }

    /// Disarm a color.
    pub fn disarm(&mut self, color: Color) {
        self.armed[color] = false;
    }

    /// Disarm every color.
    pub fn reset(&mut self) {
        self.armed.reset();
    }
}

/// Claim up to two distinct random unowned cells for `color`.
///
/// Returns the captured cells; fewer than two (possibly zero) when the
/// board lacks unowned cells. Captures are not pushed to any history;
/// flags on captured cells are consumed silently.
pub fn double_attack(
    board: &mut Board,
    rng: &mut GameRng,
    color: Color,
) -> Result<SmallVec<[CellIndex; DOUBLE_ATTACK_CAPTURES]>, GameError> {
    let unowned = board.unowned();
    let picks = rng.sample_indices(unowned.len(), DOUBLE_ATTACK_CAPTURES);

    let mut captured = SmallVec::new();
    for pick in picks {
        let cell = unowned[pick];
        board.claim(cell, color)?;
        board.take_power_up(cell)?;
        captured.push(cell);
    }

    debug!(%color, captured = captured.len(), "double attack");
    Ok(captured)
}
