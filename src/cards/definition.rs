//! Card values and the fixed card enumeration.
//!
//! A `Card` is a plain `(color, number)` pair. Either attribute may be
//! unspecified (`None`), which makes the card invalid; cards built by the
//! engine itself are always valid.
//!
//! ## Enumeration Order
//!
//! `Card::all()` yields the 30 syntactically possible cards with colors
//! in the order Blue, Green, Red, White, Yellow, Rainbow and numbers
//! ascending within each color. Deck construction walks this order, so a
//! fixed seed always produces the same shuffled stack.

use serde::{Deserialize, Serialize};

use super::attributes::{CardColor, CardNumber};
use super::mode::GameMode;

/// A single Hanabi card.
///
/// Unspecified attributes are omitted when serialized.
///
/// ```
/// use hanabi_engine::cards::{Card, CardColor, CardNumber, GameMode};
///
/// let card = Card::new(CardColor::Rainbow, CardNumber::Two);
/// assert!(card.is_valid());
/// assert!(card.is_legal(GameMode::SixColor));
/// assert!(!card.is_legal(GameMode::FiveColor));
/// assert_eq!(card.to_string(), "Rainbow 2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<CardNumber>,
}

impl Card {
    /// Create a fully specified card.
    #[must_use]
    pub const fn new(color: CardColor, number: CardNumber) -> Self {
        Self {
            color: Some(color),
            number: Some(number),
        }
    }

    /// A card is valid if both color and number are specified.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.color.is_some() && self.number.is_some()
    }

    /// A card is legal in a mode if it is valid and the mode's deck
    /// contains at least one copy of it.
    #[must_use]
    pub fn is_legal(&self, mode: GameMode) -> bool {
        // validity first: count() asserts it
        self.is_valid() && mode.count(*self) != 0
    }

    /// Iterate over every syntactically possible card in enumeration order.
    ///
    /// The iterator is lazy, finite (30 items), and `Clone` so it can be
    /// restarted.
    pub fn all() -> impl Iterator<Item = Card> + Clone {
        CardColor::ALL.into_iter().flat_map(|color| {
            CardNumber::ALL
                .into_iter()
                .map(move |number| Card::new(color, number))
        })
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color {
            Some(color) => write!(f, "{color}")?,
            None => f.write_str("?")?,
        }
        match self.number {
            Some(number) => write!(f, " {number}"),
            None => f.write_str(" ?"),
        }
    }
}
