//! The turn controller and match lifecycle.
//!
//! ## Claim protocol
//!
//! A cell interaction is accepted only while the match is running and no
//! popup or duel is in flight. An unowned cell goes straight to a color
//! popup; an owned cell is contested through a rock-paper-scissors duel
//! first, with the popup reserved for the winner. Every confirmed choice
//! appends `Choose` + `Place` history entries before the board mutates, so
//! undo can rewind exactly.
//!
//! ## Single-flow discipline
//!
//! Popups and duels are suspension points: the turn phase moves to
//! `InPopup`/`InDuel` for their duration and any interaction arriving in
//! the meantime is ignored. One interaction is processed at a time.
//!
//! ## Lifecycle
//!
//! `Stopped -> Running` via start (full reset + countdown), `Running ->
//! Stopped` via stop (full reset, countdown displayed but not running),
//! `Running -> Ended` when the countdown reaches zero. The countdown is
//! driven externally, one `on_timer_tick` per second; the tick that ends
//! the match returns the end-of-match summary exactly once so the driver
//! knows to cancel itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::board::Board;
use crate::core::{CellIndex, Color, ColorMap, GameError, GameRng};
use crate::duel::{self, Winner};
use crate::history::{HistoryEntry, HistoryStack, UndoOutcome};
use crate::power::{self, PowerUpRegistry};
use crate::services::{ColorPrompt, Frontend, SoundKind};

/// Confetti intensity for a duel capture.
const CAPTURE_CONFETTI: u32 = 120;

/// Confetti intensity for a double attack.
const DOUBLE_ATTACK_CONFETTI: u32 = 150;

/// Where the match is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    Stopped,
    Running,
    Ended,
}

/// Where the turn controller is within one interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Match inactive; interactions ignored.
    Idle,
    /// Ready for the next cell interaction.
    AwaitingInput,
    /// A color popup is open.
    InPopup,
    /// A duel is being resolved.
    InDuel,
}

/// End-of-match verdict, with distinct wording per shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndSummary {
    /// No tiles captured at all.
    Draw,
    /// A single leading color.
    Winner(Color),
    /// Multiple colors tied for the lead.
    Tie(Vec<Color>),
}

impl EndSummary {
    /// Build a summary from the board's leaders.
    #[must_use]
    pub fn from_leaders(leaders: Vec<Color>) -> Self {
        match leaders.len() {
            0 => EndSummary::Draw,
            1 => EndSummary::Winner(leaders[0]),
            _ => EndSummary::Tie(leaders),
        }
    }
}

impl std::fmt::Display for EndSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndSummary::Draw => write!(f, "No tiles captured. Draw!"),
            EndSummary::Winner(color) => write!(f, "Winner: {}!", color),
            EndSummary::Tie(colors) => {
                let names: Vec<String> = colors.iter().map(Color::to_string).collect();
                write!(f, "Tie: {}", names.join(" & "))
            }
        }
    }
}

/// The match: board, history, power-ups, selection, lifecycle, RNG.
///
/// All formerly ambient state is explicit here; the engine has no globals.
/// Collaborators are passed per call so hosts keep ownership of their UI.
pub struct MatchEngine {
    board: Board,
    history: HistoryStack,
    power_ups: PowerUpRegistry,
    selected_color: Option<Color>,
    match_phase: MatchPhase,
    turn_phase: TurnPhase,
    duration_secs: u32,
    remaining_secs: u32,
    rng: GameRng,
}

impl MatchEngine {
    /// Create an engine over a fresh board of `grid_size` cells.
    ///
    /// The match starts `Stopped`; call `on_start_requested` to play.
    #[must_use]
    pub fn new(grid_size: usize, seed: u64) -> Self {
        Self {
            board: Board::new(grid_size),
            history: HistoryStack::new(),
            power_ups: PowerUpRegistry::new(),
            selected_color: None,
            match_phase: MatchPhase::Stopped,
            turn_phase: TurnPhase::Idle,
            duration_secs: 0,
            remaining_secs: 0,
            rng: GameRng::new(seed),
        }
    }

    /// Create an engine over the reference 20-cell grid.
    #[must_use]
    pub fn with_default_grid(seed: u64) -> Self {
        Self::new(crate::board::DEFAULT_GRID_SIZE, seed)
    }

    // === Queries ===

    /// Owned-cell counts per color (full scan).
    #[must_use]
    pub fn scores(&self) -> ColorMap<u32> {
        self.board.scores_by_color()
    }

    /// Colors currently tied for the lead; empty when nothing is owned.
    #[must_use]
    pub fn leaders(&self) -> Vec<Color> {
        self.board.leaders()
    }

    /// A cell's current owner.
    pub fn cell_owner(&self, cell: CellIndex) -> Result<Option<Color>, GameError> {
        self.board.owner(cell)
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_secs
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn match_phase(&self) -> MatchPhase {
        self.match_phase
    }

    /// Current turn phase.
    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    /// The color last chosen via a popup, if any.
    #[must_use]
    pub fn selected_color(&self) -> Option<Color> {
        self.selected_color
    }

    /// The board itself, for read-only inspection.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether a color's double attack is armed.
    #[must_use]
    pub fn is_armed(&self, color: Color) -> bool {
        self.power_ups.is_armed(color)
    }

    /// Number of history entries (placements and choices).
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // === Lifecycle ===

    /// Start a match: full reset, countdown armed, interactions enabled.
    ///
    /// Ignored while a match is already running.
    pub fn on_start_requested(&mut self, duration_secs: u32) {
        if self.match_phase == MatchPhase::Running {
            return;
        }

        self.board.reset(&mut self.rng);
        self.history.clear();
        self.selected_color = None;
        self.power_ups.reset();
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.match_phase = MatchPhase::Running;
        self.turn_phase = TurnPhase::AwaitingInput;

        info!(duration_secs, "match started");
    }

    /// Stop the match: full reset, countdown display restored, no restart.
    pub fn on_stop_requested(&mut self) {
        self.match_phase = MatchPhase::Stopped;
        self.turn_phase = TurnPhase::Idle;
        self.board.reset(&mut self.rng);
        self.history.clear();
        self.selected_color = None;
        self.power_ups.reset();
        self.remaining_secs = self.duration_secs;

        info!("match stopped");
    }

    /// Reset the board mid-match: owners cleared, power-ups re-rolled,
    /// history and selection dropped. Lifecycle and countdown untouched.
    ///
    /// Armed double attacks survive a board reset.
    pub fn on_reset_requested(&mut self, frontend: &mut impl Frontend) {
        if self.is_busy() {
            return;
        }

        self.board.reset(&mut self.rng);
        self.history.clear();
        self.selected_color = None;
        frontend.notify("Board reset");

        info!("board reset");
    }

    /// One second of countdown. Call once per second while running.
    ///
    /// Returns the end-of-match summary on the tick that reaches zero —
    /// exactly once, so the driving task can cancel itself. Ticks outside
    /// a running match are no-ops.
    pub fn on_timer_tick(&mut self, frontend: &mut impl Frontend) -> Option<EndSummary> {
        if self.match_phase != MatchPhase::Running {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        Some(self.end_match(frontend))
    }

    fn end_match(&mut self, frontend: &mut impl Frontend) -> EndSummary {
        self.match_phase = MatchPhase::Ended;
        self.turn_phase = TurnPhase::Idle;

        let summary = EndSummary::from_leaders(self.board.leaders());
        frontend.play_sound(SoundKind::End);

        info!(summary = %summary, "match ended");
        summary
    }

    // === Claim protocol ===

    fn is_busy(&self) -> bool {
        matches!(self.turn_phase, TurnPhase::InPopup | TurnPhase::InDuel)
    }

    /// Entry point for a cell interaction (a click on a tile).
    ///
    /// Ignored unless the match is running and no popup or duel is in
    /// flight. An out-of-range index is rejected before any state changes.
    pub fn on_cell_interaction(
        &mut self,
        cell: CellIndex,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        if self.match_phase != MatchPhase::Running || self.turn_phase != TurnPhase::AwaitingInput {
            debug!(%cell, phase = ?self.turn_phase, "interaction ignored");
            return Ok(());
        }

        match self.board.owner(cell)? {
            None => self.claim_fresh(cell, frontend),
            Some(defender) => self.contest(cell, defender, frontend),
        }
    }

    /// Unowned cell: choose a color, then place.
    fn claim_fresh(
        &mut self,
        cell: CellIndex,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        self.turn_phase = TurnPhase::InPopup;
        let choice = frontend.choose_color(ColorPrompt::ClaimTile);
        self.turn_phase = TurnPhase::AwaitingInput;

        let Ok(color) = choice else {
            // Cancelled: no mutation.
            return Ok(());
        };

        self.commit_claim(cell, None, color, frontend)?;
        frontend.play_sound(SoundKind::Ding);
        Ok(())
    }

    /// Owned cell: duel first; the popup is the winner's prize.
    fn contest(
        &mut self,
        cell: CellIndex,
        defender: Color,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        // Label only: names the attacker in the animation and marks whose
        // tiles are forfeit on a loss. Not the claim color.
        let attacker_label = self.selected_color.unwrap_or_default();

        self.turn_phase = TurnPhase::InDuel;
        let winner = duel::run_duel(&mut self.rng, frontend);

        match winner {
            Winner::Attacker => {
                self.turn_phase = TurnPhase::InPopup;
                let choice = frontend.choose_color(ColorPrompt::CaptureTile);
                self.turn_phase = TurnPhase::AwaitingInput;

                if let Ok(color) = choice {
                    self.commit_claim(cell, Some(defender), color, frontend)?;
                    frontend.celebrate(CAPTURE_CONFETTI);
                    frontend.play_sound(SoundKind::Win);
                }
                // Cancelled: the win is wasted, nothing changes.
            }
            Winner::Defender => {
                self.turn_phase = TurnPhase::AwaitingInput;
                frontend.play_sound(SoundKind::Lose);
                self.retaliate(attacker_label, defender, frontend)?;
            }
        }

        Ok(())
    }

    /// Record and apply a confirmed placement, then run power-up effects.
    ///
    /// History entries snapshot the selection from before this turn's
    /// choice, so one undo restores both the tile and the selection.
    fn commit_claim(
        &mut self,
        cell: CellIndex,
        prev_owner: Option<Color>,
        color: Color,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        let prev_selected = self.selected_color;

        self.history.push(HistoryEntry::Choose {
            prev_selected,
            new_selected: color,
        });
        self.history.push(HistoryEntry::Place {
            cell,
            prev_owner,
            new_owner: color,
            prev_selected,
        });

        self.board.claim(cell, color)?;
        self.selected_color = Some(color);

        self.resolve_power_up(cell, color, frontend)
    }

    /// Pickup on the claimed cell, then fire any armed double attack.
    fn resolve_power_up(
        &mut self,
        cell: CellIndex,
        color: Color,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        if self.board.take_power_up(cell)? {
            self.power_ups.arm(color);
            frontend.notify(&format!("{} found DOUBLE ATTACK!", color));
        }

        if self.power_ups.is_armed(color) {
            let captured = power::double_attack(&mut self.board, &mut self.rng, color)?;
            self.power_ups.disarm(color);

            if !captured.is_empty() {
                frontend.notify(&format!("{} used DOUBLE ATTACK!", color));
                frontend.celebrate(DOUBLE_ATTACK_CONFETTI);
            }
        }

        Ok(())
    }

    /// A lost duel costs the attacker label one random tile, if it has any.
    ///
    /// The capture bypasses history: retaliation losses are not undoable.
    fn retaliate(
        &mut self,
        attacker_label: Color,
        defender: Color,
        frontend: &mut impl Frontend,
    ) -> Result<(), GameError> {
        let owned = self.board.owned_by(attacker_label);
        let Some(&lost) = self.rng.choose(&owned) else {
            // The label holds no tiles; the loss has no effect.
            return Ok(());
        };

        self.board.claim(lost, defender)?;
        frontend.notify(&format!(
            "{} lost a tile to {}!",
            attacker_label, defender
        ));

        debug!(%lost, %attacker_label, %defender, "retaliation capture");
        Ok(())
    }

    // === Undo ===

    /// Revert the newest placement and the selection that produced it.
    ///
    /// Ignored while a popup or duel is in flight. An empty history is
    /// informational, not an error.
    pub fn on_undo_requested(
        &mut self,
        frontend: &mut impl Frontend,
    ) -> Result<UndoOutcome, GameError> {
        if self.is_busy() {
            return Ok(UndoOutcome::NothingToUndo);
        }

        let outcome = self
            .history
            .undo(&mut self.board, &mut self.selected_color)?;

        match outcome {
            UndoOutcome::Reverted(_) => frontend.notify("Last move undone"),
            UndoOutcome::NothingToUndo => frontend.notify("Nothing to undo"),
        }

        Ok(outcome)
    }
}
