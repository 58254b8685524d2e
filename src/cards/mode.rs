//! Game modes: the four rule variants.
//!
//! A mode decides which cards exist, how many copies of each, and how
//! rainbow cards react to color hints.
//!
//! | Mode          | Rainbow cards            | Color hints hit rainbow | Deck |
//! |---------------|--------------------------|-------------------------|------|
//! | `FiveColor`   | none                     | -                       | 50   |
//! | `SixColor`    | ordinary sixth color     | no (hinted directly)    | 60   |
//! | `Rainbow`     | sixth color              | yes                     | 60   |
//! | `DarkRainbow` | one copy of each number  | yes                     | 55   |
//!
//! `count()` is the single source of truth for deck composition.
//! `total_cards()` is a constant table checked against it in tests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attributes::{CardColor, CardNumber};
use super::definition::Card;
use crate::error::GameError;

/// Hanabi game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// The standard game without rainbow cards.
    #[default]
    FiveColor,
    /// Rainbow is an ordinary sixth color.
    SixColor,
    /// Rainbow is a sixth color that every color hint also touches.
    Rainbow,
    /// Like `Rainbow`, with a single copy of each rainbow card.
    DarkRainbow,
}

impl GameMode {
    /// All modes.
    pub const ALL: [GameMode; 4] = [
        GameMode::FiveColor,
        GameMode::SixColor,
        GameMode::Rainbow,
        GameMode::DarkRainbow,
    ];

    /// Canonical name, as used on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameMode::FiveColor => "five-color",
            GameMode::SixColor => "six-color",
            GameMode::Rainbow => "rainbow",
            GameMode::DarkRainbow => "dark-rainbow",
        }
    }

    /// How many copies of `card` a fresh deck of this mode holds.
    ///
    /// Returns 0 for cards that do not exist in the mode.
    ///
    /// # Panics
    ///
    /// Panics if `card` is not valid. Callers check validity first.
    #[must_use]
    pub fn count(self, card: Card) -> usize {
        let (Some(color), Some(number)) = (card.color, card.number) else {
            panic!("GameMode::count(): precondition failed: card {card} is not valid");
        };

        if color.is_rainbow() {
            match self {
                GameMode::FiveColor => return 0,
                GameMode::DarkRainbow => return 1,
                GameMode::SixColor | GameMode::Rainbow => {}
            }
        }

        match number {
            CardNumber::One => 3,
            CardNumber::Two | CardNumber::Three | CardNumber::Four => 2,
            CardNumber::Five => 1,
        }
    }

    /// Total number of cards in a fresh deck.
    #[must_use]
    pub const fn total_cards(self) -> usize {
        match self {
            GameMode::FiveColor => 50,
            GameMode::SixColor | GameMode::Rainbow => 60,
            GameMode::DarkRainbow => 55,
        }
    }

    /// Does the deck contain cards of this color?
    #[must_use]
    pub const fn has_color(self, color: CardColor) -> bool {
        !color.is_rainbow() || !matches!(self, GameMode::FiveColor)
    }

    /// Colors whose cards exist in this mode, in enumeration order.
    pub fn colors(self) -> impl Iterator<Item = CardColor> {
        CardColor::ALL.into_iter().filter(move |&c| self.has_color(c))
    }

    /// Can rainbow be named by a color hint?
    #[must_use]
    pub const fn rainbow_is_hintable(self) -> bool {
        match self {
            GameMode::SixColor => true,
            GameMode::FiveColor | GameMode::Rainbow | GameMode::DarkRainbow => false,
        }
    }

    /// Do color hints also touch rainbow cards?
    #[must_use]
    pub const fn rainbow_matches_color_hints(self) -> bool {
        match self {
            GameMode::Rainbow | GameMode::DarkRainbow => true,
            GameMode::FiveColor | GameMode::SixColor => false,
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| GameError::InvalidMode(s.to_string()))
    }
}
