//! # hanabi-engine
//!
//! A rules engine for the cooperative card game Hanabi, covering the
//! five-color base game and the six-color, rainbow, and dark-rainbow
//! variants.
//!
//! ## Design Principles
//!
//! 1. **Open State**: `GameState` sees every card. Hiding a player's own
//!    hand from them is the transport layer's concern.
//!
//! 2. **Transactional Moves**: `apply_move` validates before it mutates.
//!    A rejected move leaves the state exactly as it was.
//!
//! 3. **Closed Variants**: modes, moves, and outcomes are enums matched
//!    exhaustively, so a new variant is a compile-time decision.
//!
//! 4. **Reproducible Shuffles**: a nonzero seed fully determines the deal.
//!
//! ## Example
//!
//! ```
//! use hanabi_engine::{GameMode, GameState, Move};
//!
//! let mut game = GameState::new(GameMode::Rainbow);
//! let alice = game.add_player().unwrap().id();
//! let bob = game.add_player().unwrap().id();
//! game.start(42).unwrap();
//!
//! assert_eq!(game.current_player().unwrap().id(), alice);
//! game.apply_move(&Move::play(alice, 0)).unwrap();
//! assert_eq!(game.current_player().unwrap().id(), bob);
//! assert!(!game.finished());
//! ```
//!
//! ## Modules
//!
//! - `cards`: Card, Hint, colors, numbers, game modes, deck construction
//! - `core`: Players, moves, configuration, RNG, the `GameState` aggregate
//! - `rules`: Move legality, move application, terminal detection
//! - `error`: Error taxonomy

pub mod cards;
pub mod core;
pub mod error;
pub mod rules;

// Re-export commonly used types
pub use crate::cards::{Card, CardColor, CardNumber, GameMode, Hint};

pub use crate::core::{
    GameConfig, GameRng, GameState, IdSource, Move, MoveOutcome, Player, PlayerId, RandomIds,
    SeededIds, MAX_HINTS, MAX_MISPLAYS,
};

pub use crate::error::{GameError, MoveRejection, Result};

pub use crate::rules::{GameStatus, Outcome};
