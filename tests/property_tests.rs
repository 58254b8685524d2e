//! Property tests over modes, hints, seeds, and arbitrary moves.

mod common;

use common::{any_hint, assert_invariants, mode, play_out_random, player_count, started_game};
use hanabi_engine::{Card, CardColor, GameMode, GameState, Hint, Move};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn legality_matches_count(mode in mode(), color in common::color(), number in common::number()) {
        let card = Card::new(color, number);
        prop_assert_eq!(card.is_legal(mode), mode.count(card) > 0);
    }

    #[test]
    fn hint_validity_is_exclusive_or(hint in any_hint()) {
        prop_assert_eq!(hint.is_valid(), hint.color.is_some() != hint.number.is_some());
        prop_assert_eq!(hint.is_valid(), hint.is_color_hint() || hint.is_number_hint());
    }

    #[test]
    fn legal_hints_are_legal(mode in mode()) {
        for hint in Hint::legal_hints(mode) {
            prop_assert!(hint.is_legal(mode));
        }
    }

    #[test]
    fn number_hints_match_exactly(mode in mode(), color in common::color(), a in common::number(), b in common::number()) {
        let card = Card::new(color, a);
        prop_assert_eq!(Hint::number(b).matches(&card, mode), a == b);
    }

    #[test]
    fn rainbow_answers_color_hints_by_mode(mode in mode(), color in common::color(), number in common::number()) {
        prop_assume!(color != CardColor::Rainbow);
        let card = Card::new(CardColor::Rainbow, number);
        prop_assert_eq!(
            Hint::color(color).matches(&card, mode),
            mode.rainbow_matches_color_hints()
        );
    }

    #[test]
    fn seeded_start_is_deterministic(mode in mode(), players in player_count(), seed in 1u64..) {
        let a = started_game(mode, players, seed);
        let b = started_game(mode, players, seed);
        prop_assert_eq!(a.seed(), Some(seed));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rejected_moves_change_nothing(
        mode in mode(),
        players in player_count(),
        seed in 1u64..,
        actor in 0usize..6,
        index in 0usize..8,
        target in 0usize..6,
        hint in any_hint(),
        kind in 0u8..3,
    ) {
        let mut game = started_game(mode, players, seed);
        let ids: Vec<_> = game.players().iter().map(|p| p.id()).collect();
        let player = ids[actor % ids.len()];
        let target = ids[target % ids.len()];
        let mv = match kind {
            0 => Move::play(player, index),
            1 => Move::discard(player, index),
            _ => Move::hint(player, target, hint),
        };

        let before = game.clone();
        match game.apply_move(&mv) {
            Ok(_) => {
                prop_assert!(before.is_legal(&mv));
                assert_invariants(&game);
            }
            Err(_) => {
                prop_assert!(!before.is_legal(&mv));
                prop_assert_eq!(game, before);
            }
        }
    }

    #[test]
    fn random_games_keep_invariants(mode in mode(), players in player_count(), seed in 1u64.., walk in any::<u64>()) {
        let mut game = started_game(mode, players, seed);
        play_out_random(&mut game, walk);
        prop_assert!(game.finished());
        prop_assert!(game.score() <= game.max_score());
    }

    #[test]
    fn every_listed_move_is_legal(mode in mode(), players in player_count(), seed in 1u64..) {
        let game = started_game(mode, players, seed);
        for mv in game.legal_moves() {
            prop_assert!(game.is_legal(&mv), "{:?}", mv);
        }
    }
}

#[test]
fn unstarted_game_has_no_moves() {
    let game = GameState::new(GameMode::SixColor);
    assert!(game.legal_moves().is_empty());
}
