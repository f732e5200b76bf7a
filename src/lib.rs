//! # tile-duel
//!
//! The game-state and conflict-resolution engine of a classroom territory
//! game: colored teams claim a grid of tiles, contested tiles are settled
//! by rock-paper-scissors duels, and every confirmed move can be undone.
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: the selected color, power-up registry, and undo
//!    history all live in `MatchEngine`, passed explicitly — never in
//!    process-wide singletons.
//!
//! 2. **UI behind seams**: popups, duel animation, notifications, sounds,
//!    and confetti are opaque services on the `Frontend` trait. The engine
//!    owns the rules; the host owns the pixels.
//!
//! 3. **Deterministic randomness**: every random draw (duel moves,
//!    power-up placement, retaliation and double-attack targets) flows
//!    through one seeded `GameRng`, so a match is replayable end to end.
//!
//! ## Modules
//!
//! - `core`: colors, cells, RNG, errors
//! - `board`: cell ownership, scores, leaders, resets
//! - `duel`: the RPS resolver and the reveal/reroll duel protocol
//! - `history`: the undo stack
//! - `power`: double-attack tracking and bonus captures
//! - `services`: frontend seams plus a scripted headless implementation
//! - `engine`: the turn controller and match lifecycle

pub mod board;
pub mod core;
pub mod duel;
pub mod engine;
pub mod history;
pub mod power;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Cell, CellIndex, ChoiceCancelled, Color, ColorMap, GameError, GameRng};

pub use crate::board::{Board, DEFAULT_GRID_SIZE, POWER_UP_COUNT};

pub use crate::duel::{resolve, run_duel, Move, MoveSource, Outcome, Winner, REVEAL_TICKS};

pub use crate::history::{HistoryEntry, HistoryStack, UndoOutcome};

pub use crate::power::{double_attack, PowerUpRegistry, DOUBLE_ATTACK_CAPTURES};

pub use crate::services::{ColorPrompt, Frontend, FrontendEvent, ScriptedFrontend, SoundKind};

pub use crate::engine::{EndSummary, MatchEngine, MatchPhase, TurnPhase};
