//! Rock-paper-scissors resolution for contested tiles.
//!
//! ## Resolver
//!
//! `resolve` is the pure beats-relation: rock beats scissors, paper beats
//! rock, scissors beats paper, equal moves tie.
//!
//! ## Duel protocol
//!
//! `run_duel` produces a short sequence of random move pairs for suspense —
//! the frontend renders each pair as a reveal frame — and only the final
//! pair counts. A tied final pair is resampled (both moves, independent
//! uniform draws, each resample also rendered) until a winner emerges, so a
//! duel can never end in a draw: `Winner` has no tie variant.
//!
//! Move sampling goes through the `MoveSource` seam so tests can script
//! exact sequences; the engine plugs in its `GameRng`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::GameRng;
use crate::services::Frontend;

/// Number of cosmetic reveal frames before the deciding pair.
pub const REVEAL_TICKS: usize = 6;

/// A rock-paper-scissors move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in announcement order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The standard beats-relation.
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of a single move pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    AttackerWins,
    DefenderWins,
}

/// Resolve one attacker/defender move pair.
#[must_use]
pub const fn resolve(attacker: Move, defender: Move) -> Outcome {
    if attacker.beats(defender) {
        Outcome::AttackerWins
    } else if defender.beats(attacker) {
        Outcome::DefenderWins
    } else {
        Outcome::Tie
    }
}

/// The side that won a duel. Ties are resampled away, never returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Attacker,
    Defender,
}

/// Source of random moves for a duel.
pub trait MoveSource {
    /// Draw one uniformly random move.
    fn next_move(&mut self) -> Move;
}

impl MoveSource for GameRng {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.gen_range_usize(0..Move::ALL.len())]
    }
}

/// Run a duel to a non-tie verdict.
///
/// Samples `REVEAL_TICKS` move pairs, reporting each to the frontend, then
/// resamples the final pair until it is decisive. Earlier pairs are purely
/// cosmetic.
pub fn run_duel(moves: &mut impl MoveSource, frontend: &mut impl Frontend) -> Winner {
    let mut attacker = Move::Rock;
    let mut defender = Move::Rock;

    for _ in 0..REVEAL_TICKS {
        attacker = moves.next_move();
        defender = moves.next_move();
        frontend.duel_tick(defender, attacker);
    }

    loop {
        match resolve(attacker, defender) {
            Outcome::AttackerWins => {
                debug!(%attacker, %defender, "duel decided for attacker");
                return Winner::Attacker;
            }
            Outcome::DefenderWins => {
                debug!(%attacker, %defender, "duel decided for defender");
                return Winner::Defender;
            }
            Outcome::Tie => {
                attacker = moves.next_move();
                defender = moves.next_move();
                frontend.duel_tick(defender, attacker);
            }
        }
    }
}
