//! Move legality.
//!
//! `check_move` is a pure predicate over the state: it says whether a
//! move may be applied right now and, if not, why. Only the current
//! player may act, and only while the game is in progress.
//!
//! ## Per-move rules
//!
//! - **Play**: the index names a card in the actor's hand
//! - **Discard**: as play, and at least one hint token is spent
//! - **Hint**: a token is available, the target is another registered
//!   player, the hint is legal in the mode, and it touches at least one
//!   card in the target's hand

use crate::cards::Hint;
use crate::core::action::Move;
use crate::core::config::MAX_HINTS;
use crate::core::state::GameState;
use crate::error::MoveRejection;

use super::outcome::GameStatus;

fn check_index(index: usize, len: usize) -> Result<(), MoveRejection> {
    if index < len {
        Ok(())
    } else {
        Err(MoveRejection::IndexOutOfRange { index, len })
    }
}

impl GameState {
    /// Check a move against the current state without changing it.
    pub fn check_move(&self, mv: &Move) -> Result<(), MoveRejection> {
        match self.status() {
            GameStatus::NotStarted => return Err(MoveRejection::NotStarted),
            GameStatus::Finished(_) => return Err(MoveRejection::GameOver),
            GameStatus::InProgress => {}
        }

        let actor = mv.actor();
        let actor_index = self
            .player_index(actor)
            .ok_or(MoveRejection::UnknownPlayer(actor))?;
        if actor_index != self.current_player {
            return Err(MoveRejection::OutOfTurn(actor));
        }
        let hand_len = self.players[actor_index].hand().len();

        match *mv {
            Move::Play { index, .. } => check_index(index, hand_len),
            Move::Discard { index, .. } => {
                check_index(index, hand_len)?;
                if self.hints >= MAX_HINTS {
                    return Err(MoveRejection::HintTokensFull);
                }
                Ok(())
            }
            Move::Hint { target, hint, .. } => {
                if self.hints == 0 {
                    return Err(MoveRejection::NoHintTokens);
                }
                if target == actor {
                    return Err(MoveRejection::SelfHint);
                }
                let target_hand = self
                    .player(target)
                    .ok_or(MoveRejection::UnknownPlayer(target))?
                    .hand();
                let mode = self.config.mode;
                if !hint.is_legal(mode) {
                    return Err(MoveRejection::HintNotLegal);
                }
                if !target_hand.iter().any(|card| hint.matches(card, mode)) {
                    return Err(MoveRejection::HintMatchesNothing);
                }
                Ok(())
            }
        }
    }

    /// Is this move legal right now?
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Every legal move for the current player.
    ///
    /// Plays and discards come first in hand order, then hints grouped by
    /// target in turn order. Empty unless the game is in progress.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.status() != GameStatus::InProgress {
            return moves;
        }

        let Some(actor) = self.players.get(self.current_player) else {
            return moves;
        };
        let id = actor.id();
        for index in 0..actor.hand().len() {
            moves.push(Move::play(id, index));
            if self.hints < MAX_HINTS {
                moves.push(Move::discard(id, index));
            }
        }

        if self.hints > 0 {
            let mode = self.config.mode;
            for target in self.players.iter().filter(|p| p.id() != id) {
                for hint in Hint::legal_hints(mode) {
                    if target.hand().iter().any(|card| hint.matches(card, mode)) {
                        moves.push(Move::hint(id, target.id(), hint));
                    }
                }
            }
        }

        moves
    }
}
