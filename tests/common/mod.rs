//! Shared helpers for integration tests: logging, game builders, and
//! proptest generators.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use tracing_subscriber::{fmt, EnvFilter};

use hanabi_engine::{Card, CardColor, CardNumber, GameMode, GameState, Hint, Move, SeededIds};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then defaults to `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// A game with `players` registered players (reproducible ids), not started.
pub fn game_with_players(mode: GameMode, players: usize) -> GameState {
    init_logging();
    let mut state = GameState::new(mode);
    let mut ids = SeededIds::new(0xC0FFEE);
    for _ in 0..players {
        state.add_player_with(&mut ids).expect("seeded ids never collide");
    }
    state
}

/// A started game.
pub fn started_game(mode: GameMode, players: usize, seed: u64) -> GameState {
    let mut state = game_with_players(mode, players);
    state.start(seed).expect("valid setup");
    state
}

/// Pick uniformly among the legal moves.
pub fn random_move(state: &GameState, rng: &mut ChaCha8Rng) -> Option<Move> {
    state.legal_moves().choose(rng).copied()
}

/// Play a card that fits a pile if there is one, otherwise discard the
/// first card, otherwise hint. Sees its own hand.
pub fn greedy_move(state: &GameState) -> Option<Move> {
    let player = state.current_player()?;
    let id = player.id();
    let playable = player
        .hand()
        .iter()
        .position(|card| match (card.color, card.number) {
            (Some(color), Some(number)) => {
                let needed = match state.pile(color) {
                    None => Some(CardNumber::One),
                    Some(top) => top.next(),
                };
                needed == Some(number)
            }
            _ => false,
        });
    if let Some(index) = playable {
        return Some(Move::play(id, index));
    }
    let moves = state.legal_moves();
    moves
        .iter()
        .find(|m| matches!(m, Move::Discard { .. }))
        .or_else(|| moves.iter().find(|m| matches!(m, Move::Hint { .. })))
        .or_else(|| moves.first())
        .copied()
}

/// Run random legal moves to the end, checking invariants after each.
/// Returns the number of moves applied.
pub fn play_out_random(state: &mut GameState, seed: u64) -> usize {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut moves = 0;
    while let Some(mv) = random_move(state, &mut rng) {
        state.apply_move(&mv).expect("legal move applies");
        assert_invariants(state);
        moves += 1;
        assert!(moves < 500, "game did not terminate");
    }
    moves
}

/// Cards implied by the piles: every number up to each pile's top.
pub fn played_cards(state: &GameState) -> Vec<Card> {
    let mut cards = Vec::new();
    for (&color, pile) in state.color_piles() {
        if let Some(top) = pile {
            for number in CardNumber::ALL.into_iter().filter(|n| *n <= *top) {
                cards.push(Card::new(color, number));
            }
        }
    }
    cards
}

/// Check the invariants that hold for every started game.
pub fn assert_invariants(state: &GameState) {
    let mode = state.mode();
    assert!(state.hints() <= hanabi_engine::MAX_HINTS);
    assert!(state.misplays() <= hanabi_engine::MAX_MISPLAYS);
    assert!(state.current_player_index() < state.player_count());

    let mut seen: FxHashMap<Card, usize> = FxHashMap::default();
    let hands = state.players().iter().flat_map(|p| p.hand().iter().copied());
    for card in state
        .stack()
        .iter()
        .copied()
        .chain(state.discarded().iter().copied())
        .chain(hands)
        .chain(played_cards(state))
    {
        assert!(card.is_legal(mode), "{card} is not legal in {mode}");
        *seen.entry(card).or_default() += 1;
    }
    for card in Card::all().filter(|c| c.is_legal(mode)) {
        assert_eq!(
            seen.get(&card).copied().unwrap_or(0),
            mode.count(card),
            "{card} count drifted in {mode}"
        );
    }
}

// === Proptest generators ===

pub fn mode() -> impl Strategy<Value = GameMode> {
    prop::sample::select(GameMode::ALL.to_vec())
}

pub fn color() -> impl Strategy<Value = CardColor> {
    prop::sample::select(CardColor::ALL.to_vec())
}

pub fn number() -> impl Strategy<Value = CardNumber> {
    prop::sample::select(CardNumber::ALL.to_vec())
}

/// Any hint shape, including invalid ones.
pub fn any_hint() -> impl Strategy<Value = Hint> {
    (prop::option::of(color()), prop::option::of(number()))
        .prop_map(|(color, number)| Hint { color, number })
}

pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=5
}
