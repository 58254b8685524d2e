//! Hanabi rules: the game state machine.
//!
//! These modules extend `GameState` with:
//! - `check_move` / `is_legal` / `legal_moves`: what may happen next
//! - `apply_move`: what a legal move does
//! - `status` / `finished` / `score`: whether and how the game ended
//!
//! States run `NotStarted -> InProgress -> Finished` and never go back.

pub mod apply;
pub mod legality;
pub mod outcome;

pub use outcome::{GameStatus, Outcome};
