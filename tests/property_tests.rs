//! Property tests for the score, reset, duel, and undo laws.

use proptest::prelude::*;

use tile_duel::{
    run_duel, Board, CellIndex, Color, GameRng, MatchEngine, ScriptedFrontend, REVEAL_TICKS,
};

fn color_strategy() -> impl Strategy<Value = Color> {
    (0..Color::COUNT).prop_map(|i| Color::ALL[i])
}

proptest! {
    /// Scores always sum to the number of owned cells, never exceeding
    /// the grid size, across arbitrary claim sequences.
    #[test]
    fn scores_sum_to_owned_cells(
        claims in prop::collection::vec((0..20u16, 0..Color::COUNT), 0..120)
    ) {
        let mut board = Board::new(20);

        for (cell, color) in claims {
            board.claim(CellIndex::new(cell), Color::ALL[color]).unwrap();
        }

        let total: u32 = board.scores_by_color().values().sum();
        prop_assert!(total <= 20);
        prop_assert_eq!(total as usize, 20 - board.unowned().len());
    }

    /// Leaders are exactly the colors at the maximum positive count.
    #[test]
    fn leaders_hold_the_maximum(
        claims in prop::collection::vec((0..20u16, 0..Color::COUNT), 1..120)
    ) {
        let mut board = Board::new(20);

        for (cell, color) in claims {
            board.claim(CellIndex::new(cell), Color::ALL[color]).unwrap();
        }

        let counts = board.scores_by_color();
        let max = counts.values().copied().max().unwrap_or(0);
        let leaders = board.leaders();

        prop_assert!(max > 0);
        for color in Color::all() {
            prop_assert_eq!(leaders.contains(&color), counts[color] == max);
        }
    }

    /// Every reset flags exactly min(3, size) distinct cells and clears
    /// all ownership first.
    #[test]
    fn reset_flags_exact_power_up_count(
        size in 1..64usize,
        seed in any::<u64>(),
        claims in prop::collection::vec((0..64u16, 0..Color::COUNT), 0..20)
    ) {
        let mut board = Board::new(size);
        let mut rng = GameRng::new(seed);

        for (cell, color) in claims {
            let cell = CellIndex::new(cell % size as u16);
            board.claim(cell, Color::ALL[color]).unwrap();
        }

        board.reset(&mut rng);

        prop_assert_eq!(board.power_up_cells().len(), size.min(3));
        prop_assert_eq!(board.unowned().len(), size);
    }

    /// A duel always terminates decisively, after at least the cosmetic
    /// reveal frames. (The return type already rules out a drawn verdict.)
    #[test]
    fn duel_terminates_past_reveals(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let mut frontend = ScriptedFrontend::new();

        let _winner = run_duel(&mut rng, &mut frontend);

        prop_assert!(frontend.duel_tick_count() >= REVEAL_TICKS);
    }

    /// Undo after a single fresh claim restores the cell and the selected
    /// color to their exact pre-action values, whatever the seed placed
    /// on the board.
    #[test]
    fn undo_round_trips_fresh_claim(
        seed in any::<u64>(),
        cell in 0..20u16,
        color in color_strategy()
    ) {
        let mut engine = MatchEngine::with_default_grid(seed);
        let mut frontend = ScriptedFrontend::with_choices([color]);

        engine.on_start_requested(300);
        let cell = CellIndex::new(cell);

        engine.on_cell_interaction(cell, &mut frontend).unwrap();
        prop_assert_eq!(engine.cell_owner(cell).unwrap(), Some(color));

        engine.on_undo_requested(&mut frontend).unwrap();

        prop_assert_eq!(engine.cell_owner(cell).unwrap(), None);
        prop_assert_eq!(engine.selected_color(), None);
    }
}
