//! Error taxonomy for the engine.
//!
//! Every variant here is a recoverable failure handed back to the caller.
//! Broken internal preconditions (asking a mode how many copies of an
//! invalid card exist) are assertion panics instead and never show up as
//! a `GameError`.

use thiserror::Error;

use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::player::PlayerId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors returned by the game lifecycle and move entry points.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A pre-start operation (`add_player`, `start`) on a started game.
    #[error("game already started")]
    AlreadyStarted,

    /// A game mode name outside the four known variants.
    #[error("invalid game mode: {0:?}")]
    InvalidMode(String),

    /// `start` with fewer than 2 or more than 5 registered players.
    #[error(
        "invalid player count {0}: a game needs between {} and {} players",
        MIN_PLAYERS,
        MAX_PLAYERS
    )]
    InvalidPlayerCount(usize),

    /// The identifier source failed or kept producing taken identifiers.
    #[error("unable to generate player identifier: {0}")]
    IdentifierGenerationFailed(String),

    /// A deserialized `GameState` breaks a game invariant.
    #[error("invalid game snapshot: {0}")]
    InvalidSnapshot(String),

    /// The move failed the legality check. The state is untouched.
    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveRejection),
}

/// Reason a move was rejected by the legality check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveRejection {
    /// The game has not been started yet.
    #[error("game has not started")]
    NotStarted,

    /// The game already reached a terminal condition.
    #[error("game is finished")]
    GameOver,

    /// No registered player has this identifier.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// The acting player is not the current player.
    #[error("{0} is not the current player")]
    OutOfTurn(PlayerId),

    /// The hand index does not name a card in the actor's hand.
    #[error("hand index {index} out of range for hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// Discarding while every hint token is still available.
    #[error("hint tokens are already full")]
    HintTokensFull,

    /// Giving a hint with no hint tokens left.
    #[error("no hint tokens left")]
    NoHintTokens,

    /// The hint target is the acting player.
    #[error("a player cannot hint themselves")]
    SelfHint,

    /// The hint is malformed or not allowed in this game mode.
    #[error("hint is not legal in this game mode")]
    HintNotLegal,

    /// The hint touches no card in the target's hand.
    #[error("hint matches no card in the target hand")]
    HintMatchesNothing,
}
