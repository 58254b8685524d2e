//! Terminal detection and scoring.
//!
//! A started game ends on the first of these, checked in order:
//!
//! 1. three misplays (`Outcome::Misplayed`)
//! 2. the final-round countdown reaching zero (`Outcome::Exhausted`)
//! 3. every color pile completed up to 5 (`Outcome::Won`)
//! 4. a final-round player left with no move at all: an empty hand and
//!    nothing to hint (`Outcome::Exhausted`)

use serde::{Deserialize, Serialize};

use crate::cards::CardNumber;
use crate::core::config::MAX_MISPLAYS;
use crate::core::state::GameState;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// Lost on the third misplay.
    Misplayed,
    /// The final round after the stack ran out is over.
    Exhausted,
    /// Every pile is complete.
    Won,
}

impl Outcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Finished(Outcome),
}

impl GameState {
    /// Current lifecycle status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if !self.started {
            return GameStatus::NotStarted;
        }
        if self.misplays >= MAX_MISPLAYS {
            return GameStatus::Finished(Outcome::Misplayed);
        }
        if self.moves_left == Some(0) {
            return GameStatus::Finished(Outcome::Exhausted);
        }
        let mode = self.config.mode;
        if mode.colors().all(|color| self.pile(color) == Some(CardNumber::Five)) {
            return GameStatus::Finished(Outcome::Won);
        }
        if self.moves_left.is_some() && self.current_player_stalled() {
            return GameStatus::Finished(Outcome::Exhausted);
        }
        GameStatus::InProgress
    }

    /// Empty hand and no hint to give. A number hint touches any card, so a
    /// token plus one card in another hand is always enough.
    fn current_player_stalled(&self) -> bool {
        let Some(player) = self.players.get(self.current_player) else {
            return false;
        };
        if !player.hand().is_empty() {
            return false;
        }
        let others_hold_cards = self
            .players
            .iter()
            .any(|other| other.id() != player.id() && !other.hand().is_empty());
        self.hints == 0 || !others_hold_cards
    }

    /// Has the game reached a terminal condition? Never true before start.
    ///
    /// Besides misplays, the countdown, and complete piles, this is also
    /// true for a stalled final round (see the module docs). That fourth
    /// case keeps every game finite, because hints do not tick the
    /// countdown.
    #[must_use]
    pub fn finished(&self) -> bool {
        matches!(self.status(), GameStatus::Finished(_))
    }

    /// The outcome, once finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::Finished(outcome) => Some(outcome),
            GameStatus::NotStarted | GameStatus::InProgress => None,
        }
    }

    /// Sum of the pile heights.
    #[must_use]
    pub fn score(&self) -> usize {
        self.color_piles
            .values()
            .map(|pile| pile.map_or(0, |n| usize::from(n.value())))
            .sum()
    }

    /// Best possible score for this game's mode.
    #[must_use]
    pub fn max_score(&self) -> usize {
        self.config.mode.colors().count() * usize::from(CardNumber::Five.value())
    }
}
