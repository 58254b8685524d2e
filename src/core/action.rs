//! Moves and their outcomes.
//!
//! A `Move` is what a player asks to do; a `MoveOutcome` is what the
//! engine reports back after applying it. Both serialize with a `kind`
//! tag so a transport layer can pass them through unchanged:
//!
//! ```json
//! {"kind":"play","player":"…","index":2}
//! {"kind":"hint","player":"…","target":"…","hint":{"color":"red"}}
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::{Card, Hint};

/// A move proposed by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Move {
    /// Play the card at `index` onto its color pile.
    Play { player: PlayerId, index: usize },

    /// Give `hint` to `target`.
    Hint {
        player: PlayerId,
        target: PlayerId,
        hint: Hint,
    },

    /// Discard the card at `index` to regain a hint token.
    Discard { player: PlayerId, index: usize },
}

impl Move {
    #[must_use]
    pub const fn play(player: PlayerId, index: usize) -> Self {
        Move::Play { player, index }
    }

    #[must_use]
    pub const fn discard(player: PlayerId, index: usize) -> Self {
        Move::Discard { player, index }
    }

    #[must_use]
    pub const fn hint(player: PlayerId, target: PlayerId, hint: Hint) -> Self {
        Move::Hint {
            player,
            target,
            hint,
        }
    }

    /// The player making this move.
    #[must_use]
    pub const fn actor(&self) -> PlayerId {
        match self {
            Move::Play { player, .. } | Move::Hint { player, .. } | Move::Discard { player, .. } => {
                *player
            }
        }
    }
}

/// Hand indices touched by a hint.
pub type Touched = SmallVec<[usize; 5]>;

/// What an applied move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MoveOutcome {
    /// A card was played. On failure it went to the discard pile.
    Played {
        card: Card,
        success: bool,
        drawn: Option<Card>,
    },

    /// A card was discarded for a hint token.
    Discarded { card: Card, drawn: Option<Card> },

    /// A hint was given; `touched` lists the matching hand indices.
    Hinted {
        target: PlayerId,
        hint: Hint,
        touched: Touched,
    },
}
