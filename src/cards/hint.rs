//! Hints: partial card patterns.
//!
//! A hint has the same shape as a `Card` but exactly one attribute is
//! specified. A color hint names a color, a number hint names a number.
//!
//! ## Matching Rules
//!
//! - Number hints match every card of that number, in every mode.
//! - In `Rainbow` and `DarkRainbow`, a color hint also matches every
//!   rainbow card, and rainbow itself cannot be hinted.
//! - In `FiveColor` and `SixColor`, a color hint matches only its own
//!   color. `SixColor` treats rainbow as an ordinary sixth color.

use serde::{Deserialize, Serialize};

use super::attributes::{CardColor, CardNumber};
use super::definition::Card;
use super::mode::GameMode;

/// A color-only or number-only hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<CardColor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<CardNumber>,
}

impl Hint {
    /// A hint on a color.
    #[must_use]
    pub const fn color(color: CardColor) -> Self {
        Self {
            color: Some(color),
            number: None,
        }
    }

    /// A hint on a number.
    #[must_use]
    pub const fn number(number: CardNumber) -> Self {
        Self {
            color: None,
            number: Some(number),
        }
    }

    /// Exactly one of color and number must be specified.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.color.is_some() != self.number.is_some()
    }

    #[must_use]
    pub const fn is_color_hint(&self) -> bool {
        self.is_valid() && self.color.is_some()
    }

    #[must_use]
    pub const fn is_number_hint(&self) -> bool {
        self.is_valid() && self.number.is_some()
    }

    /// Check whether this hint may be given in a mode.
    ///
    /// Valid hints are legal everywhere, except that a rainbow color hint
    /// is legal only in `SixColor`.
    #[must_use]
    pub fn is_legal(&self, mode: GameMode) -> bool {
        if !self.is_valid() {
            return false;
        }
        match self.color {
            Some(CardColor::Rainbow) => mode.rainbow_is_hintable(),
            _ => true,
        }
    }

    /// Check whether this hint touches a card.
    ///
    /// Assumes the hint and the card are both legal in `mode`.
    #[must_use]
    pub fn matches(&self, card: &Card, mode: GameMode) -> bool {
        if let Some(color) = self.color.filter(|_| self.is_color_hint()) {
            return card.color == Some(color)
                || (mode.rainbow_matches_color_hints() && card.color == Some(CardColor::Rainbow));
        }
        self.number.is_some() && self.number == card.number
    }

    /// Every hint that is legal in `mode`: color hints first, then number
    /// hints.
    pub fn legal_hints(mode: GameMode) -> impl Iterator<Item = Hint> {
        let colors = CardColor::ALL
            .into_iter()
            .map(Hint::color)
            .filter(move |hint| hint.is_legal(mode) && hint.color.is_some_and(|c| mode.has_color(c)));
        let numbers = CardNumber::ALL.into_iter().map(Hint::number);
        colors.chain(numbers)
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.color, self.number) {
            (None, Some(number)) => write!(f, "Number Hint on {number}"),
            (Some(color), None) => write!(f, "Color Hint on {color}"),
            _ => write!(
                f,
                "Invalid Hint on {}",
                Card {
                    color: self.color,
                    number: self.number,
                }
            ),
        }
    }
}
