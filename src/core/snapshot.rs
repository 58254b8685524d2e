//! Validated deserialization of `GameState`.
//!
//! A serialized game is untrusted input. `GameState` deserializes through
//! `GameSnapshot`, which has the same fields, and the conversion rejects
//! any snapshot that a sequence of legal moves could not have produced.
//!
//! ## Checked
//!
//! - player count, unique ids, hand sizes, turn pointer
//! - hint and misplay bounds
//! - the countdown runs exactly while the stack is empty
//! - one pile per mode color
//! - every card is legal in the mode and the card multiset is the full deck

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use super::config::{hand_size, GameConfig, MAX_HINTS, MAX_MISPLAYS};
use super::player::Player;
use super::state::GameState;
use crate::cards::{Card, CardColor, CardNumber};
use crate::error::GameError;

/// Wire shape of a `GameState`, before validation.
#[derive(Deserialize)]
pub(crate) struct GameSnapshot {
    config: GameConfig,
    stack: Vec<Card>,
    discarded: Vec<Card>,
    color_piles: FxHashMap<CardColor, Option<CardNumber>>,
    hints: u8,
    misplays: u8,
    players: Vec<Player>,
    moves_left: Option<usize>,
    started: bool,
    current_player: usize,
    seed: Option<u64>,
}

fn invalid(reason: impl Into<String>) -> GameError {
    GameError::InvalidSnapshot(reason.into())
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = GameError;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let state = GameState {
            config: snapshot.config,
            stack: snapshot.stack,
            discarded: snapshot.discarded,
            color_piles: snapshot.color_piles,
            hints: snapshot.hints,
            misplays: snapshot.misplays,
            players: snapshot.players,
            moves_left: snapshot.moves_left,
            started: snapshot.started,
            current_player: snapshot.current_player,
            seed: snapshot.seed,
        };

        let ids: FxHashSet<_> = state.players.iter().map(Player::id).collect();
        if ids.len() != state.players.len() {
            return Err(invalid("duplicate player id"));
        }

        if state.started {
            state.check_started()?;
        } else {
            state.check_unstarted()?;
        }
        Ok(state)
    }
}

impl GameState {
    fn check_unstarted(&self) -> Result<(), GameError> {
        let dealt = !self.stack.is_empty()
            || !self.discarded.is_empty()
            || !self.color_piles.is_empty()
            || self.players.iter().any(|p| !p.hand().is_empty());
        if dealt {
            return Err(invalid("cards present before start"));
        }
        if self.moves_left.is_some() || self.current_player != 0 {
            return Err(invalid("turn state present before start"));
        }
        Ok(())
    }

    fn check_started(&self) -> Result<(), GameError> {
        let players = self.players.len();
        let Some(max_hand) = hand_size(players) else {
            return Err(GameError::InvalidPlayerCount(players));
        };
        if self.current_player >= players {
            return Err(invalid(format!(
                "current player {} out of range for {players} players",
                self.current_player
            )));
        }
        if self.players.iter().any(|p| p.hand().len() > max_hand) {
            return Err(invalid(format!("hand larger than {max_hand} cards")));
        }

        if self.hints > MAX_HINTS {
            return Err(invalid(format!("{} hint tokens", self.hints)));
        }
        if self.misplays > MAX_MISPLAYS {
            return Err(invalid(format!("{} misplays", self.misplays)));
        }

        match self.moves_left {
            None if self.stack.is_empty() => {
                return Err(invalid("stack is empty but no final round is running"));
            }
            Some(_) if !self.stack.is_empty() => {
                return Err(invalid("final round running with cards left to draw"));
            }
            Some(left) if left > players => {
                return Err(invalid(format!("{left} final-round moves for {players} players")));
            }
            _ => {}
        }

        self.check_piles()?;
        self.check_cards()
    }

    fn check_piles(&self) -> Result<(), GameError> {
        let mode = self.config.mode;
        let expected: FxHashSet<CardColor> = mode.colors().collect();
        let actual: FxHashSet<CardColor> = self.color_piles.keys().copied().collect();
        if expected != actual {
            return Err(invalid(format!("pile colors do not match {mode}")));
        }
        Ok(())
    }

    /// Stack, discards, hands, and piles together hold exactly one deck.
    fn check_cards(&self) -> Result<(), GameError> {
        let mode = self.config.mode;
        let played = self.color_piles.iter().flat_map(|(&color, top)| {
            CardNumber::ALL
                .into_iter()
                .filter(move |number| top.is_some_and(|high| *number <= high))
                .map(move |number| Card::new(color, number))
        });
        let held = self.players.iter().flat_map(|p| p.hand().iter().copied());

        let mut counts: FxHashMap<Card, usize> = FxHashMap::default();
        for card in self
            .stack
            .iter()
            .chain(&self.discarded)
            .copied()
            .chain(held)
            .chain(played)
        {
            if !card.is_legal(mode) {
                return Err(invalid(format!("{card} is not a card in {mode}")));
            }
            *counts.entry(card).or_default() += 1;
        }

        for card in Card::all().filter(|card| card.is_legal(mode)) {
            let found = counts.get(&card).copied().unwrap_or(0);
            if found != mode.count(card) {
                return Err(invalid(format!(
                    "{found} copies of {card}, expected {}",
                    mode.count(card)
                )));
            }
        }
        Ok(())
    }
}
