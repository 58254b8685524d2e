//! Game configuration and rule constants.
//!
//! A `GameConfig` fixes everything about a game that is chosen before
//! players join: the mode and how hard to try when allocating player
//! identifiers. It deserializes from the shape a transport layer would
//! send:
//!
//! ```
//! use hanabi_engine::cards::GameMode;
//! use hanabi_engine::core::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{"mode":"rainbow"}"#).unwrap();
//! assert_eq!(config.mode, GameMode::Rainbow);
//! assert_eq!(config.id_attempts, GameConfig::DEFAULT_ID_ATTEMPTS);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::GameMode;

/// Hint tokens available at the start, and the cap for refunds.
pub const MAX_HINTS: u8 = 8;

/// Misplays that end the game.
pub const MAX_MISPLAYS: u8 = 3;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 5;

/// Cards dealt to each player, or `None` outside `MIN_PLAYERS..=MAX_PLAYERS`.
#[must_use]
pub const fn hand_size(player_count: usize) -> Option<usize> {
    if player_count < MIN_PLAYERS || player_count > MAX_PLAYERS {
        None
    } else if player_count <= 3 {
        Some(5)
    } else {
        Some(4)
    }
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rule variant.
    pub mode: GameMode,

    /// Identifier draws allowed per `add_player` before giving up on
    /// collisions.
    #[serde(default = "GameConfig::default_id_attempts")]
    pub id_attempts: usize,
}

impl GameConfig {
    pub const DEFAULT_ID_ATTEMPTS: usize = 16;

    /// Create a configuration for a mode with default settings.
    #[must_use]
    pub const fn new(mode: GameMode) -> Self {
        Self {
            mode,
            id_attempts: Self::DEFAULT_ID_ATTEMPTS,
        }
    }

    /// Set the identifier retry budget. At least one attempt is always made.
    #[must_use]
    pub fn with_id_attempts(mut self, attempts: usize) -> Self {
        self.id_attempts = attempts.max(1);
        self
    }

    fn default_id_attempts() -> usize {
        Self::DEFAULT_ID_ATTEMPTS
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl From<GameMode> for GameConfig {
    fn from(mode: GameMode) -> Self {
        Self::new(mode)
    }
}
