#![forbid(unsafe_code)]

//! Property/invariant tests for the five operations.
//!
//! Invariants covered:
//! - Queue length stays in [0, 5] and reserve length in [0, 3] for any choice sequence.
//! - Play and reserve keep a non-empty queue at the same length.
//! - Use shrinks a non-empty reserve by exactly one and never generates a piece.
//! - Swaps never change lengths and undo themselves when applied twice.
//! - Ids are strictly increasing in generation order and never repeat.
//! - No piece is ever held by both collections at once.

use std::collections::HashSet;

use proptest::prelude::*;
use tetris_stack::core::{GameState, Outcome};
use tetris_stack::types::{MenuChoice, QUEUE_CAPACITY, RESERVE_CAPACITY};

fn choice_strategy() -> impl Strategy<Value = Option<MenuChoice>> {
    // -1 stands in for any out-of-menu value.
    (-1i64..=5).prop_map(|code| MenuChoice::from_code(code).filter(|c| *c != MenuChoice::Exit))
}

fn assert_no_shared_pieces(game: &GameState) {
    let mut seen = HashSet::new();
    for piece in game.queue().iter().chain(game.reserve().iter()) {
        assert!(seen.insert(piece.id()), "piece {} held twice", piece);
    }
}

proptest! {
    #[test]
    fn lengths_stay_bounded(seed in any::<u32>(), choices in prop::collection::vec(choice_strategy(), 0..200)) {
        let mut game = GameState::new(seed);
        for choice in choices {
            game.apply(choice);
            prop_assert!(game.queue().len() <= QUEUE_CAPACITY);
            prop_assert!(game.reserve().len() <= RESERVE_CAPACITY);
            // Nothing in the menu can shrink the queue once it is full.
            prop_assert_eq!(game.queue().len(), QUEUE_CAPACITY);
            assert_no_shared_pieces(&game);
        }
    }

    #[test]
    fn per_operation_length_contracts(seed in any::<u32>(), choices in prop::collection::vec(choice_strategy(), 1..150)) {
        let mut game = GameState::new(seed);
        for choice in choices {
            let q = game.queue().len();
            let r = game.reserve().len();
            let next_id = game.next_id();

            let outcome = game.apply(choice);
            match outcome {
                Outcome::Played(_) => {
                    prop_assert_eq!(game.queue().len(), q);
                    prop_assert_eq!(game.reserve().len(), r);
                    prop_assert_eq!(game.next_id(), next_id + 1);
                }
                Outcome::Reserved(_) => {
                    prop_assert_eq!(game.queue().len(), q);
                    prop_assert_eq!(game.reserve().len(), r + 1);
                    prop_assert_eq!(game.next_id(), next_id + 1);
                }
                Outcome::Used(_) => {
                    prop_assert_eq!(game.reserve().len(), r - 1);
                    prop_assert_eq!(game.queue().len(), q);
                    prop_assert_eq!(game.next_id(), next_id);
                }
                _ => {
                    prop_assert_eq!(game.queue().len(), q);
                    prop_assert_eq!(game.reserve().len(), r);
                    prop_assert_eq!(game.next_id(), next_id);
                }
            }
        }
    }

    #[test]
    fn swaps_are_self_inverse(seed in any::<u32>(), setup in prop::collection::vec(choice_strategy(), 0..60), three in any::<bool>()) {
        let mut game = GameState::new(seed);
        for choice in setup {
            game.apply(choice);
        }

        let before = game.snapshot();
        let swap = if three { MenuChoice::SwapThree } else { MenuChoice::SwapOne };
        let first = game.apply(Some(swap));
        let mid = game.snapshot();
        prop_assert_eq!(mid.queue.len(), before.queue.len());
        prop_assert_eq!(mid.reserve.len(), before.reserve.len());
        prop_assert_eq!(mid.next_id, before.next_id);

        let second = game.apply(Some(swap));
        prop_assert_eq!(first.is_rejected(), second.is_rejected());
        prop_assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn ids_strictly_increase_in_generation_order(seed in any::<u32>(), choices in prop::collection::vec(choice_strategy(), 0..200)) {
        let mut game = GameState::new(seed);
        let mut generated: Vec<u32> = game.queue().iter().map(|p| p.id()).collect();

        for choice in choices {
            let next_id = game.next_id();
            game.apply(choice);
            if game.next_id() != next_id {
                // The newest piece always lands at the back of the queue.
                let back = game.queue().get(game.queue().len() - 1).unwrap();
                generated.push(back.id());
            }
        }

        for pair in generated.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert_eq!(generated.len() as u32, game.next_id());
    }
}
