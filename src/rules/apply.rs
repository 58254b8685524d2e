//! Move application: the state machine's transition function.
//!
//! `apply_move` validates first and mutates only after the move has
//! passed `check_move`, so a rejected move leaves the state untouched.
//!
//! ## Effects
//!
//! - **Play**: the card leaves the hand. If it is the next number for its
//!   color it extends the pile, otherwise it costs a misplay and goes to
//!   the discard pile. Then draw-replace.
//! - **Discard**: the card goes to the discard pile and a hint token comes
//!   back. Then draw-replace.
//! - **Hint**: spends a token. No card moves.
//!
//! Draw-replace puts the top card of the stack into the vacated slot. The
//! draw that empties the stack starts the final round: every player,
//! including the one who drew, gets one more play or discard. Each
//! following play or discard counts the round down; hints do not.
//!
//! Every move passes the turn to the next player in registration order.

use tracing::{debug, info};

use crate::cards::{Card, CardNumber, Hint};
use crate::core::action::{Move, MoveOutcome, Touched};
use crate::core::config::MAX_HINTS;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::error::Result;

impl GameState {
    /// Apply a move for the current player.
    ///
    /// ## Errors
    ///
    /// `IllegalMove` if the move fails `check_move`. The state is left
    /// exactly as it was.
    pub fn apply_move(&mut self, mv: &Move) -> Result<MoveOutcome> {
        if let Err(rejection) = self.check_move(mv) {
            debug!(?mv, %rejection, "move rejected");
            return Err(rejection.into());
        }

        let actor = self.current_player;
        let outcome = match *mv {
            Move::Play { index, .. } => self.apply_play(actor, index),
            Move::Discard { index, .. } => self.apply_discard(actor, index),
            Move::Hint { target, hint, .. } => self.apply_hint(target, hint),
        };

        self.current_player = (actor + 1) % self.players.len();

        debug!(
            player = %mv.actor(),
            ?outcome,
            hints = self.hints,
            misplays = self.misplays,
            stack = self.stack.len(),
            moves_left = ?self.moves_left,
            "move applied"
        );
        if let Some(result) = self.outcome() {
            info!(?result, score = self.score(), "game finished");
        }

        Ok(outcome)
    }

    fn apply_play(&mut self, actor: usize, index: usize) -> MoveOutcome {
        let card = self.players[actor].hand_mut().remove(index);

        let success = self.advance_pile(card);
        if !success {
            self.misplays += 1;
            self.discarded.push(card);
        }

        let drawn = self.draw_replace(actor, index);
        MoveOutcome::Played {
            card,
            success,
            drawn,
        }
    }

    fn apply_discard(&mut self, actor: usize, index: usize) -> MoveOutcome {
        let card = self.players[actor].hand_mut().remove(index);
        self.discarded.push(card);
        self.hints = (self.hints + 1).min(MAX_HINTS);

        let drawn = self.draw_replace(actor, index);
        MoveOutcome::Discarded { card, drawn }
    }

    fn apply_hint(&mut self, target: PlayerId, hint: Hint) -> MoveOutcome {
        self.hints -= 1;

        let mode = self.config.mode;
        let touched: Touched = self
            .player(target)
            .map(|player| {
                player
                    .hand()
                    .iter()
                    .enumerate()
                    .filter(|(_, card)| hint.matches(card, mode))
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default();

        MoveOutcome::Hinted {
            target,
            hint,
            touched,
        }
    }

    /// Extend the card's pile if it is the next number needed.
    fn advance_pile(&mut self, card: Card) -> bool {
        let (Some(color), Some(number)) = (card.color, card.number) else {
            return false;
        };

        let pile = self.color_piles.entry(color).or_insert(None);
        let needed = match *pile {
            None => Some(CardNumber::One),
            Some(top) => top.next(),
        };

        if needed == Some(number) {
            *pile = Some(number);
            true
        } else {
            false
        }
    }

    /// Refill the vacated hand slot and tick the final-round countdown.
    fn draw_replace(&mut self, actor: usize, index: usize) -> Option<Card> {
        let drawn = self.stack.pop();
        if let Some(card) = drawn {
            self.players[actor].hand_mut().insert(index, card);
        }

        self.moves_left = match self.moves_left {
            Some(left) => Some(left.saturating_sub(1)),
            None if self.stack.is_empty() => {
                debug!(players = self.players.len(), "stack exhausted, final round");
                Some(self.players.len())
            }
            None => None,
        };

        drawn
    }
}
