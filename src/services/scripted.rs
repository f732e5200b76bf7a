//! A headless frontend with queued choices and recorded events.

use std::collections::VecDeque;

use crate::core::{ChoiceCancelled, Color};
use crate::duel::Move;

use super::{ColorPrompt, Frontend, SoundKind};

/// Everything a `ScriptedFrontend` observed, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrontendEvent {
    Prompted(ColorPrompt),
    DuelTick { defender: Move, attacker: Move },
    Notified(String),
    Celebrated(u32),
    Played(SoundKind),
}

/// Frontend that answers popups from a queue and records every call.
///
/// An exhausted choice queue cancels the popup, which makes "user walks
/// away" the default behavior rather than a panic.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrontend {
    choices: VecDeque<Result<Color, ChoiceCancelled>>,
    events: Vec<FrontendEvent>,
}

impl ScriptedFrontend {
    /// A frontend that cancels every popup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A frontend that answers popups with `colors`, in order.
    #[must_use]
    pub fn with_choices(colors: impl IntoIterator<Item = Color>) -> Self {
        Self {
            choices: colors.into_iter().map(Ok).collect(),
            events: Vec::new(),
        }
    }

    /// Queue one successful choice.
    pub fn push_choice(&mut self, color: Color) {
        self.choices.push_back(Ok(color));
    }

    /// Queue one cancellation.
    pub fn push_cancel(&mut self) {
        self.choices.push_back(Err(ChoiceCancelled));
    }

    /// Everything observed so far.
    #[must_use]
    pub fn events(&self) -> &[FrontendEvent] {
        &self.events
    }

    /// Number of duel reveal frames observed.
    #[must_use]
    pub fn duel_tick_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, FrontendEvent::DuelTick { .. }))
            .count()
    }

    /// Notification messages observed, in order.
    #[must_use]
    pub fn notifications(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                FrontendEvent::Notified(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whether a given sound was requested at least once.
    #[must_use]
    pub fn heard(&self, sound: SoundKind) -> bool {
        self.events.contains(&FrontendEvent::Played(sound))
    }

    /// Drop recorded events, keeping any queued choices.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl Frontend for ScriptedFrontend {
    fn choose_color(&mut self, prompt: ColorPrompt) -> Result<Color, ChoiceCancelled> {
        self.events.push(FrontendEvent::Prompted(prompt));
        self.choices.pop_front().unwrap_or(Err(ChoiceCancelled))
    }

    fn duel_tick(&mut self, defender_move: Move, attacker_move: Move) {
        self.events.push(FrontendEvent::DuelTick {
            defender: defender_move,
            attacker: attacker_move,
        });
    }

    fn notify(&mut self, message: &str) {
        self.events.push(FrontendEvent::Notified(message.to_string()));
    }

    fn celebrate(&mut self, intensity: u32) {
        self.events.push(FrontendEvent::Celebrated(intensity));
    }

    fn play_sound(&mut self, sound: SoundKind) {
        self.events.push(FrontendEvent::Played(sound));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choices_in_order_then_cancel() {
        let mut frontend = ScriptedFrontend::with_choices([Color::Red, Color::Blue]);

        assert_eq!(frontend.choose_color(ColorPrompt::ClaimTile), Ok(Color::Red));
        assert_eq!(frontend.choose_color(ColorPrompt::ClaimTile), Ok(Color::Blue));
        assert_eq!(
            frontend.choose_color(ColorPrompt::ClaimTile),
            Err(ChoiceCancelled)
        );
    }

    #[test]
    fn test_explicit_cancel_between_choices() {
        let mut frontend = ScriptedFrontend::new();
        frontend.push_choice(Color::Green);
        frontend.push_cancel();
        frontend.push_choice(Color::Purple);

        assert_eq!(frontend.choose_color(ColorPrompt::ClaimTile), Ok(Color::Green));
        assert_eq!(
            frontend.choose_color(ColorPrompt::CaptureTile),
            Err(ChoiceCancelled)
        );
        assert_eq!(
            frontend.choose_color(ColorPrompt::CaptureTile),
            Ok(Color::Purple)
        );
    }

    #[test]
    fn test_events_recorded_in_order() {
        let mut frontend = ScriptedFrontend::with_choices([Color::Red]);

        frontend.notify("one");
        frontend.play_sound(SoundKind::Ding);
        let _ = frontend.choose_color(ColorPrompt::ClaimTile);

        assert_eq!(
            frontend.events(),
            &[
                FrontendEvent::Notified("one".to_string()),
                FrontendEvent::Played(SoundKind::Ding),
                FrontendEvent::Prompted(ColorPrompt::ClaimTile),
            ]
        );
        assert!(frontend.heard(SoundKind::Ding));
        assert!(!frontend.heard(SoundKind::Win));
    }

    #[test]
    fn test_tick_count() {
        let mut frontend = ScriptedFrontend::new();

        frontend.duel_tick(Move::Rock, Move::Scissors);
        frontend.duel_tick(Move::Paper, Move::Paper);

        assert_eq!(frontend.duel_tick_count(), 2);
    }
}
