//! Undo integration tests: the round-trip law and its documented
//! exceptions (retaliation and bonus captures are never rewound).

use tile_duel::{
    CellIndex, Color, MatchEngine, ScriptedFrontend, SoundKind, UndoOutcome,
};

const MAX_ATTEMPTS: usize = 400;

fn unflagged_cells(engine: &MatchEngine, n: usize) -> Vec<CellIndex> {
    let flagged = engine.board().power_up_cells();
    (0..engine.board().len() as u16)
        .map(CellIndex::new)
        .filter(|cell| !flagged.contains(cell))
        .take(n)
        .collect()
}

/// Test the round-trip law for a first fresh claim.
#[test]
fn test_undo_round_trips_first_claim() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::with_choices([Color::Red]);

    engine.on_start_requested(300);
    let cell = unflagged_cells(&engine, 1)[0];

    engine.on_cell_interaction(cell, &mut frontend).unwrap();
    assert_eq!(engine.selected_color(), Some(Color::Red));

    let outcome = engine.on_undo_requested(&mut frontend).unwrap();

    assert_eq!(outcome, UndoOutcome::Reverted(cell));
    assert_eq!(engine.cell_owner(cell).unwrap(), None);
    assert_eq!(engine.selected_color(), None);
    assert!(frontend.notifications().contains(&"Last move undone"));
}

/// Test that undoing the second claim restores the first claim's selection.
#[test]
fn test_undo_restores_previous_selection() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::with_choices([Color::Red, Color::Blue]);

    engine.on_start_requested(300);
    let cells = unflagged_cells(&engine, 2);

    engine.on_cell_interaction(cells[0], &mut frontend).unwrap();
    engine.on_cell_interaction(cells[1], &mut frontend).unwrap();
    assert_eq!(engine.selected_color(), Some(Color::Blue));

    engine.on_undo_requested(&mut frontend).unwrap();

    assert_eq!(engine.cell_owner(cells[1]).unwrap(), None);
    assert_eq!(engine.cell_owner(cells[0]).unwrap(), Some(Color::Red));
    assert_eq!(engine.selected_color(), Some(Color::Red));
}

/// Test undoing a duel capture: the defender gets the tile back and the
/// selection rewinds to the pre-capture color.
#[test]
fn test_undo_round_trips_capture() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::with_choices([Color::Blue]);

    engine.on_start_requested(300);
    let cell = unflagged_cells(&engine, 1)[0];
    engine.on_cell_interaction(cell, &mut frontend).unwrap();

    let mut won = false;
    for _ in 0..MAX_ATTEMPTS {
        frontend.clear_events();
        frontend.push_choice(Color::Green);
        engine.on_cell_interaction(cell, &mut frontend).unwrap();
        if frontend.heard(SoundKind::Win) {
            won = true;
            break;
        }
    }
    assert!(won, "no duel won in {} attempts", MAX_ATTEMPTS);
    assert_eq!(engine.cell_owner(cell).unwrap(), Some(Color::Green));

    engine.on_undo_requested(&mut frontend).unwrap();

    assert_eq!(engine.cell_owner(cell).unwrap(), Some(Color::Blue));
    assert_eq!(engine.selected_color(), Some(Color::Blue));
}

/// Test that undo walks all the way back to a blank board.
#[test]
fn test_undo_walks_back_to_blank_board() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend =
        ScriptedFrontend::with_choices([Color::Red, Color::Blue, Color::Purple]);

    engine.on_start_requested(300);
    let cells = unflagged_cells(&engine, 3);
    for &cell in &cells {
        engine.on_cell_interaction(cell, &mut frontend).unwrap();
    }
    assert_eq!(engine.scores().values().sum::<u32>(), 3);

    for _ in 0..3 {
        engine.on_undo_requested(&mut frontend).unwrap();
    }

    assert_eq!(engine.scores().values().sum::<u32>(), 0);
    assert_eq!(engine.selected_color(), None);
    assert_eq!(
        engine.on_undo_requested(&mut frontend).unwrap(),
        UndoOutcome::NothingToUndo
    );
}

/// Test the empty-history signal: informational, board untouched.
#[test]
fn test_undo_empty_history() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::new();

    engine.on_start_requested(300);

    let outcome = engine.on_undo_requested(&mut frontend).unwrap();

    assert_eq!(outcome, UndoOutcome::NothingToUndo);
    assert!(frontend.notifications().contains(&"Nothing to undo"));
    assert_eq!(engine.scores().values().sum::<u32>(), 0);
}

/// Test that undo does not resurrect a tile lost to retaliation: the undo
/// reverts the logged placement, not the unlogged capture on top of it.
#[test]
fn test_undo_ignores_retaliation_capture() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::with_choices([Color::Blue, Color::Red]);

    engine.on_start_requested(300);
    let cells = unflagged_cells(&engine, 2);
    let (blue_cell, red_cell) = (cells[0], cells[1]);
    engine.on_cell_interaction(blue_cell, &mut frontend).unwrap();
    engine.on_cell_interaction(red_cell, &mut frontend).unwrap();

    // Contest until retaliation hands Red's tile to Blue.
    let mut lost = false;
    for _ in 0..MAX_ATTEMPTS {
        frontend.clear_events();
        engine.on_cell_interaction(blue_cell, &mut frontend).unwrap();
        if frontend.heard(SoundKind::Lose) {
            lost = true;
            break;
        }
    }
    assert!(lost, "no duel lost in {} attempts", MAX_ATTEMPTS);
    assert_eq!(engine.cell_owner(red_cell).unwrap(), Some(Color::Blue));

    engine.on_undo_requested(&mut frontend).unwrap();

    // The logged placement (Red's claim) is reverted to its pre-claim
    // state; the retaliation capture is simply gone, not restored.
    assert_eq!(engine.cell_owner(red_cell).unwrap(), None);
    assert_eq!(engine.selected_color(), Some(Color::Blue));
    assert_eq!(engine.cell_owner(blue_cell).unwrap(), Some(Color::Blue));
}

/// Test that undo after a power-up claim keeps the bonus captures.
#[test]
fn test_undo_keeps_bonus_captures() {
    let mut engine = MatchEngine::with_default_grid(42);
    let mut frontend = ScriptedFrontend::with_choices([Color::Green]);

    engine.on_start_requested(300);
    let flagged = engine.board().power_up_cells()[0];

    engine.on_cell_interaction(flagged, &mut frontend).unwrap();
    assert_eq!(engine.scores()[Color::Green], 3);

    engine.on_undo_requested(&mut frontend).unwrap();

    // The claimed tile reverts; the two bonus tiles stay Green.
    assert_eq!(engine.cell_owner(flagged).unwrap(), None);
    assert_eq!(engine.scores()[Color::Green], 2);
    assert_eq!(engine.selected_color(), None);
}
