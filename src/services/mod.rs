//! Collaborator seams for the surrounding UI.
//!
//! The engine treats rendering, popups, sounds, and confetti as opaque
//! services behind the `Frontend` trait. Only `choose_color` feeds a result
//! back into game state; everything else is fire-and-forget cosmetics with
//! no-op defaults.
//!
//! `ScriptedFrontend` is a headless implementation with queued choices and
//! recorded events, used by the integration tests and any host that wants
//! to drive a match without a UI.

pub mod scripted;

use crate::core::{ChoiceCancelled, Color};
use crate::duel::Move;

pub use scripted::{FrontendEvent, ScriptedFrontend};

/// Why a color popup is being shown.
///
/// The `Display` impl is the user-facing prompt text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorPrompt {
    /// Claiming an unowned tile.
    ClaimTile,
    /// Capturing a tile after winning a duel.
    CaptureTile,
}

impl std::fmt::Display for ColorPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            ColorPrompt::ClaimTile => "Choose a color for this tile",
            ColorPrompt::CaptureTile => "You won! Choose a color to capture the tile",
        };
        write!(f, "{}", text)
    }
}

/// Sound effects the engine may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Win,
    Lose,
    Ding,
    End,
}

/// The surrounding UI, as seen from the engine.
///
/// `choose_color` blocks until the user picks a color or dismisses the
/// popup; the engine's turn phase shields it from re-entrant interactions
/// for the duration. The cosmetic methods default to no-ops so minimal
/// hosts implement only the popup.
pub trait Frontend {
    /// Ask the user to pick a team color.
    fn choose_color(&mut self, prompt: ColorPrompt) -> Result<Color, ChoiceCancelled>;

    /// One reveal frame of a duel animation. Cosmetic only.
    fn duel_tick(&mut self, _defender_move: Move, _attacker_move: Move) {}

    /// Show a transient message to the room.
    fn notify(&mut self, _message: &str) {}

    /// Fire confetti or similar, scaled by `intensity`.
    fn celebrate(&mut self, _intensity: u32) {}

    /// Play a sound effect.
    fn play_sound(&mut self, _sound: SoundKind) {}
}
