//! Card primitives: colors, numbers, cards, hints, and game modes.
//!
//! ## Key Types
//!
//! - `CardColor`, `CardNumber`: card attributes
//! - `Card`: a `(color, number)` value, with the fixed 30-card enumeration
//! - `Hint`: a color-only or number-only pattern over cards
//! - `GameMode`: variant selector for deck composition and hint matching
//!
//! Everything here is an immutable value type.

pub mod attributes;
pub mod deck;
pub mod definition;
pub mod hint;
pub mod mode;

pub use attributes::{CardColor, CardNumber};
pub use definition::Card;
pub use hint::Hint;
pub use mode::GameMode;
