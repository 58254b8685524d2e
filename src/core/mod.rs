//! Core engine types: players, state, moves, RNG, configuration.
//!
//! `GameState` is the single mutable aggregate. Everything else in this
//! module is a value type or a small seam (`IdSource`) for collaborators
//! outside the engine.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
mod snapshot;
pub mod state;

pub use action::{Move, MoveOutcome, Touched};
pub use config::{hand_size, GameConfig, MAX_HINTS, MAX_MISPLAYS, MAX_PLAYERS, MIN_PLAYERS};
pub use player::{Hand, IdSource, Player, PlayerId, RandomIds, SeededIds};
pub use rng::GameRng;
pub use state::GameState;
