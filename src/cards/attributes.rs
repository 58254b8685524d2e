//! Card attributes: color and number.
//!
//! Both attributes are closed enums. The "unspecified" value of the wire
//! format is modelled as `None` one level up, in `Card` and `Hint`, so an
//! attribute value on its own is always meaningful.
//!
//! ## Serialized Form
//!
//! - `CardColor`: lowercase name (`"blue"`, ..., `"rainbow"`)
//! - `CardNumber`: the integer 1..=5

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hint::Hint;

/// Color of a card. `Rainbow` is the wild sixth color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Blue,
    Green,
    Red,
    White,
    Yellow,
    Rainbow,
}

impl CardColor {
    /// All colors in enumeration order.
    pub const ALL: [CardColor; 6] = [
        CardColor::Blue,
        CardColor::Green,
        CardColor::Red,
        CardColor::White,
        CardColor::Yellow,
        CardColor::Rainbow,
    ];

    /// Is this the wild color?
    #[must_use]
    pub const fn is_rainbow(self) -> bool {
        matches!(self, CardColor::Rainbow)
    }

    /// A color hint on this color.
    #[must_use]
    pub const fn hint(self) -> Hint {
        Hint::color(self)
    }
}

impl std::fmt::Display for CardColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Red => "Red",
            CardColor::White => "White",
            CardColor::Yellow => "Yellow",
            CardColor::Rainbow => "Rainbow",
        };
        f.write_str(name)
    }
}

/// Number of a card, 1 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CardNumber {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl CardNumber {
    /// All numbers in ascending order.
    pub const ALL: [CardNumber; 5] = [
        CardNumber::One,
        CardNumber::Two,
        CardNumber::Three,
        CardNumber::Four,
        CardNumber::Five,
    ];

    /// Get the numeric value (1..=5).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Convert from a numeric value. Returns `None` outside 1..=5.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(CardNumber::One),
            2 => Some(CardNumber::Two),
            3 => Some(CardNumber::Three),
            4 => Some(CardNumber::Four),
            5 => Some(CardNumber::Five),
            _ => None,
        }
    }

    /// The number that follows this one on a pile, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_value(self.value() + 1)
    }

    /// A number hint on this number.
    #[must_use]
    pub const fn hint(self) -> Hint {
        Hint::number(self)
    }
}

impl std::fmt::Display for CardNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for CardNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.value())
    }
}

impl<'de> Deserialize<'de> for CardNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        CardNumber::from_value(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid card number: {value}")))
    }
}
