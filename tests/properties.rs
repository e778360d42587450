//! Property tests for shapes, collision bounds, the randomizer and free play

use proptest::prelude::*;

use falltris::core::{rotate, rotated_shape, Bag, Board, GameState};
use falltris::types::{InputEvent, PieceKind, Rotation, KIND_COUNT};

proptest! {
    #[test]
    fn four_quarter_turns_restore_any_shape(kind in 0usize..KIND_COUNT, start in 0i8..4) {
        let shape = rotated_shape(PieceKind::ALL[kind], Rotation::from_index(start));
        prop_assert_eq!(rotate(&shape, 4), shape);
        prop_assert_eq!(shape.block_count(), 4);
    }

    #[test]
    fn overlaps_exactly_when_out_of_bounds_or_filled(
        filled in prop::collection::hash_set((0i8..20, 0i8..10), 0..120),
        coords in prop::collection::vec((-8i8..28, -8i8..18), 0..12),
    ) {
        let mut board = Board::new();
        for &(row, col) in &filled {
            board.set(row, col, Some(PieceKind::Z));
        }

        let expected = coords.iter().any(|&(row, col)| {
            !(0..10).contains(&col) || !(-2..20).contains(&row) || filled.contains(&(row, col))
        });
        prop_assert_eq!(board.overlaps(&coords), expected);
    }

    #[test]
    fn every_bag_is_a_permutation(seed in any::<u64>()) {
        let mut bag = Bag::new(seed);
        for _ in 0..6 {
            let run: Vec<PieceKind> = (0..KIND_COUNT).map(|_| bag.draw()).collect();
            for kind in PieceKind::ALL {
                prop_assert_eq!(run.iter().filter(|&&k| k == kind).count(), 1);
            }
        }
    }

    #[test]
    fn free_play_keeps_rules(seed in any::<u64>(), script in prop::collection::vec(0usize..=8, 0..400)) {
        let mut game = GameState::new(seed);
        let mut score = 0;

        for i in script {
            let input = InputEvent::ALL.get(i).copied();
            game.step(input);

            prop_assert!(game.score() >= score);
            score = game.score();
            prop_assert_eq!(game.level(), game.lines() / 10 + 1);

            if !game.is_lost() {
                prop_assert!(!game.active().overlaps(game.board()));
                prop_assert!(game.ghost().row >= game.active().row);
            }
        }
    }
}
