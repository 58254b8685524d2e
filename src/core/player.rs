//! Player identification and hands.
//!
//! ## PlayerId
//!
//! Opaque unique identifier (a UUID). The engine only compares ids; it
//! never interprets them.
//!
//! ## IdSource
//!
//! Supplier of fresh identifiers. `RandomIds` draws v4 UUIDs from the OS,
//! `SeededIds` builds them from a `GameRng` for reproducible tests and
//! simulations. An OS entropy failure comes back as
//! `IdentifierGenerationFailed`, never as a panic. Uniqueness among the players of one game is enforced by
//! `GameState`, not by the source.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use uuid::Uuid;

use super::rng::GameRng;
use crate::cards::Card;
use crate::error::{GameError, Result};

/// Unique player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A hand holds at most 5 cards.
pub type Hand = SmallVec<[Card; 5]>;

/// A registered player and their hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    hand: Hand,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Hand::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's cards, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Source of player identifiers.
///
/// Implementations may fail; the failure is reported to the caller as
/// `GameError::IdentifierGenerationFailed`.
pub trait IdSource {
    /// Produce the next identifier.
    fn next_id(&mut self) -> Result<PlayerId>;
}

/// Random v4 UUIDs from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Result<PlayerId> {
        id_from_rng(&mut OsRng)
    }
}

/// Build a v4 UUID from 16 bytes of `rng`, reporting a failed read.
fn id_from_rng(rng: &mut impl RngCore) -> Result<PlayerId> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes).map_err(|err| {
        GameError::IdentifierGenerationFailed(format!("random source failed: {err}"))
    })?;
    Ok(PlayerId(uuid::Builder::from_random_bytes(bytes).into_uuid()))
}

/// Reproducible v4 UUIDs derived from a seeded RNG.
#[derive(Clone, Debug)]
pub struct SeededIds {
    rng: GameRng,
}

impl SeededIds {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl IdSource for SeededIds {
    fn next_id(&mut self) -> Result<PlayerId> {
        let bytes = self.rng.gen_bytes();
        Ok(PlayerId(uuid::Builder::from_random_bytes(bytes).into_uuid()))
    }
}
