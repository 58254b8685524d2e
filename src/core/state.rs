//! Game state: the aggregate root of a Hanabi game.
//!
//! ## Lifecycle
//!
//! 1. `GameState::new(mode)`: empty, not started
//! 2. `add_player()`: register players (pre-start only)
//! 3. `start(seed)`: build and shuffle the stack, deal hands, reset tokens
//! 4. `apply_move()`: one legal move at a time until `finished()`
//!
//! The state is fully open: every card in the stack and in every hand is
//! visible through the accessors. Hiding information from players is the
//! transport layer's job.
//!
//! ## Concurrency
//!
//! `GameState` has no interior locking. One owner drives a game at a
//! time; share it behind a mutex held across each check-then-apply.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::{hand_size, GameConfig, MAX_HINTS};
use super::player::{Hand, IdSource, Player, PlayerId, RandomIds};
use super::rng::GameRng;
use super::snapshot::GameSnapshot;
use crate::cards::{Card, CardColor, CardNumber, GameMode};
use crate::error::{GameError, Result};

/// Complete state of one Hanabi game.
///
/// Deserializing validates the snapshot and fails with `InvalidSnapshot`
/// if it breaks a game invariant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    pub(crate) config: GameConfig,

    /// Draw stack; the top card is the last element.
    pub(crate) stack: Vec<Card>,

    /// Discarded and misplayed cards, in the order they arrived.
    pub(crate) discarded: Vec<Card>,

    /// Highest number played per color; `None` until a 1 lands.
    pub(crate) color_piles: FxHashMap<CardColor, Option<CardNumber>>,

    pub(crate) hints: u8,
    pub(crate) misplays: u8,

    /// Players in registration (and turn) order.
    pub(crate) players: Vec<Player>,

    /// Final-round countdown. `None` until the stack runs out.
    pub(crate) moves_left: Option<usize>,

    pub(crate) started: bool,
    pub(crate) current_player: usize,

    /// Effective shuffle seed, recorded by `start`.
    pub(crate) seed: Option<u64>,
}

impl GameState {
    /// Create an empty, unstarted game.
    ///
    /// Accepts a `GameMode` or a full `GameConfig`.
    #[must_use]
    pub fn new(config: impl Into<GameConfig>) -> Self {
        Self {
            config: config.into(),
            stack: Vec::new(),
            discarded: Vec::new(),
            color_piles: FxHashMap::default(),
            hints: 0,
            misplays: 0,
            players: Vec::new(),
            moves_left: None,
            started: false,
            current_player: 0,
            seed: None,
        }
    }

    // === Setup ===

    /// Register a new player with a random identifier.
    pub fn add_player(&mut self) -> Result<&Player> {
        self.add_player_with(&mut RandomIds)
    }

    /// Register a new player, drawing its identifier from `ids`.
    ///
    /// Identifiers already taken by another player are redrawn, up to
    /// `GameConfig::id_attempts` draws in total.
    ///
    /// ## Errors
    ///
    /// - `AlreadyStarted` once `start` has succeeded
    /// - `IdentifierGenerationFailed` if the source fails or keeps
    ///   returning taken identifiers
    pub fn add_player_with(&mut self, ids: &mut impl IdSource) -> Result<&Player> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let taken: FxHashSet<PlayerId> = self.players.iter().map(Player::id).collect();
        let attempts = self.config.id_attempts.max(1);

        for attempt in 1..=attempts {
            let id = ids.next_id()?;
            if taken.contains(&id) {
                debug!(%id, attempt, "player id collision, retrying");
                continue;
            }

            self.players.push(Player::new(id));
            debug!(%id, players = self.players.len(), "player added");
            let index = self.players.len() - 1;
            return Ok(&self.players[index]);
        }

        Err(GameError::IdentifierGenerationFailed(format!(
            "no unused identifier after {attempts} attempts"
        )))
    }

    /// Start the game.
    ///
    /// Shuffles a fresh stack with `seed` (0 picks a random seed), deals
    /// 5 cards each to 2-3 players or 4 each to 4-5 players from the top
    /// of the stack in registration order, refills the hint tokens, and
    /// hands the first turn to the first player.
    ///
    /// All checks run before anything is touched, so a failed start
    /// leaves the game exactly as it was.
    ///
    /// ## Errors
    ///
    /// - `AlreadyStarted` on a second call
    /// - `InvalidPlayerCount` unless 2 to 5 players are registered
    pub fn start(&mut self, seed: u64) -> Result<()> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }

        let player_count = self.players.len();
        let Some(cards_per_player) = hand_size(player_count) else {
            return Err(GameError::InvalidPlayerCount(player_count));
        };

        let mode = self.config.mode;
        let mut rng = GameRng::for_start(seed);
        let mut stack = mode.new_stack();
        rng.shuffle(&mut stack);

        for player in &mut self.players {
            let hand = stack.split_off(stack.len() - cards_per_player);
            *player.hand_mut() = Hand::from_vec(hand);
        }

        self.stack = stack;
        self.discarded = Vec::with_capacity(mode.total_cards());
        self.color_piles = mode.colors().map(|color| (color, None)).collect();
        self.hints = MAX_HINTS;
        self.misplays = 0;
        self.moves_left = None;
        self.current_player = 0;
        self.seed = Some(rng.seed());
        self.started = true;

        info!(
            %mode,
            players = player_count,
            seed = rng.seed(),
            stack = self.stack.len(),
            "game started"
        );
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The seed the stack was shuffled with, once started.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The draw stack; the next card drawn is the last one.
    #[must_use]
    pub fn stack(&self) -> &[Card] {
        &self.stack
    }

    #[must_use]
    pub fn discarded(&self) -> &[Card] {
        &self.discarded
    }

    /// Per-color piles. Empty before the game starts.
    #[must_use]
    pub fn color_piles(&self) -> &FxHashMap<CardColor, Option<CardNumber>> {
        &self.color_piles
    }

    /// Highest number played on a color's pile.
    #[must_use]
    pub fn pile(&self, color: CardColor) -> Option<CardNumber> {
        self.color_piles.get(&color).copied().flatten()
    }

    /// Hint tokens available.
    #[must_use]
    pub fn hints(&self) -> u8 {
        self.hints
    }

    #[must_use]
    pub fn misplays(&self) -> u8 {
        self.misplays
    }

    /// Turns left in the final round, or `None` while the stack lasts.
    #[must_use]
    pub fn moves_left(&self) -> Option<usize> {
        self.moves_left
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by identifier.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Turn-order position of a player.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Index of the player to move.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    /// The player to move. `None` only while no player is registered.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::SeededIds;

    /// Hands out the same identifier forever.
    struct StuckIds(PlayerId);

    impl IdSource for StuckIds {
        fn next_id(&mut self) -> Result<PlayerId> {
            Ok(self.0)
        }
    }

    /// Always fails.
    struct BrokenIds;

    impl IdSource for BrokenIds {
        fn next_id(&mut self) -> Result<PlayerId> {
            Err(GameError::IdentifierGenerationFailed("entropy unavailable".into()))
        }
    }

    fn game_with_players(mode: GameMode, count: usize) -> GameState {
        let mut state = GameState::new(mode);
        let mut ids = SeededIds::new(7);
        for _ in 0..count {
            state.add_player_with(&mut ids).unwrap();
        }
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new(GameMode::Rainbow);
        assert!(!state.is_started());
        assert_eq!(state.mode(), GameMode::Rainbow);
        assert!(state.players().is_empty());
        assert!(state.stack().is_empty());
        assert!(state.current_player().is_none());
        assert_eq!(state.seed(), None);
    }

    #[test]
    fn test_add_player_unique_ids() {
        let mut state = GameState::new(GameMode::FiveColor);
        let a = state.add_player().unwrap().id();
        let b = state.add_player().unwrap().id();

        assert_ne!(a, b);
        assert_eq!(state.player_count(), 2);
        assert_eq!(state.player(a).map(Player::id), Some(a));
        assert_eq!(state.player_index(b), Some(1));
        assert!(state.player(a).unwrap().hand().is_empty());
    }

    #[test]
    fn test_add_player_retries_collisions_then_gives_up() {
        let mut state = GameState::new(GameConfig::new(GameMode::FiveColor).with_id_attempts(4));
        let mut stuck = StuckIds(PlayerId::new(uuid::Uuid::from_u128(5)));

        state.add_player_with(&mut stuck).unwrap();
        let err = state.add_player_with(&mut stuck).unwrap_err();

        assert!(matches!(err, GameError::IdentifierGenerationFailed(_)));
        assert_eq!(state.player_count(), 1);
    }

    #[test]
    fn test_add_player_propagates_source_failure() {
        let mut state = GameState::new(GameMode::FiveColor);
        let err = state.add_player_with(&mut BrokenIds).unwrap_err();
        assert_eq!(
            err,
            GameError::IdentifierGenerationFailed("entropy unavailable".into())
        );
        assert!(state.players().is_empty());
    }

    #[test]
    fn test_add_player_after_start_fails() {
        let mut state = game_with_players(GameMode::FiveColor, 2);
        state.start(1).unwrap();

        assert_eq!(state.add_player().unwrap_err(), GameError::AlreadyStarted);
        assert_eq!(state.player_count(), 2);
    }

    #[test]
    fn test_start_initializes_counters() {
        let mut state = game_with_players(GameMode::FiveColor, 3);
        state.start(42).unwrap();

        assert!(state.is_started());
        assert_eq!(state.hints(), MAX_HINTS);
        assert_eq!(state.misplays(), 0);
        assert_eq!(state.moves_left(), None);
        assert_eq!(state.current_player_index(), 0);
        assert_eq!(state.seed(), Some(42));
        assert!(state.discarded().is_empty());
        assert_eq!(state.color_piles().len(), 5);
        assert!(state.color_piles().values().all(Option::is_none));
    }

    #[test]
    fn test_start_piles_include_rainbow_when_present() {
        for (mode, piles) in [
            (GameMode::FiveColor, 5),
            (GameMode::SixColor, 6),
            (GameMode::Rainbow, 6),
            (GameMode::DarkRainbow, 6),
        ] {
            let mut state = game_with_players(mode, 2);
            state.start(3).unwrap();
            assert_eq!(state.color_piles().len(), piles, "{mode}");
        }
    }

    #[test]
    fn test_start_deals_from_top_in_registration_order() {
        let mut state = game_with_players(GameMode::FiveColor, 2);
        let mut expected = GameMode::FiveColor.new_stack();
        GameRng::new(99).shuffle(&mut expected);

        state.start(99).unwrap();

        assert_eq!(state.players()[0].hand(), &expected[45..50]);
        assert_eq!(state.players()[1].hand(), &expected[40..45]);
        assert_eq!(state.stack(), &expected[..40]);
    }

    #[test]
    fn test_start_hand_sizes() {
        for (count, size) in [(2, 5), (3, 5), (4, 4), (5, 4)] {
            let mut state = game_with_players(GameMode::SixColor, count);
            state.start(11).unwrap();

            for player in state.players() {
                assert_eq!(player.hand().len(), size);
            }
            assert_eq!(state.stack().len(), 60 - count * size);
        }
    }

    #[test]
    fn test_start_rejects_bad_player_counts() {
        for count in [0, 1, 6, 7] {
            let mut state = game_with_players(GameMode::FiveColor, count);
            let before = state.clone();

            assert_eq!(state.start(5), Err(GameError::InvalidPlayerCount(count)));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_start_twice_fails() {
        let mut state = game_with_players(GameMode::FiveColor, 2);
        state.start(5).unwrap();
        let snapshot = state.clone();

        assert_eq!(state.start(5), Err(GameError::AlreadyStarted));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_start_zero_seed_records_effective_seed() {
        let mut state = game_with_players(GameMode::FiveColor, 2);
        state.start(0).unwrap();

        let seed = state.seed().unwrap();
        assert_ne!(seed, 0);

        let mut replay = game_with_players(GameMode::FiveColor, 2);
        replay.start(seed).unwrap();
        assert_eq!(replay.stack(), state.stack());
        assert_eq!(replay.players(), state.players());
    }
}
