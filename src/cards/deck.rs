//! Deck construction.
//!
//! A fresh stack is built by walking `Card::all()` and repeating each
//! legal card `count()` times. The result is unshuffled; shuffling
//! belongs to `GameState::start`.

use super::definition::Card;
use super::mode::GameMode;

impl GameMode {
    /// Build the unshuffled stack for this mode.
    ///
    /// Cards appear in enumeration order, each repeated by its count.
    ///
    /// ```
    /// use hanabi_engine::cards::GameMode;
    ///
    /// let stack = GameMode::DarkRainbow.new_stack();
    /// assert_eq!(stack.len(), 55);
    /// ```
    #[must_use]
    pub fn new_stack(self) -> Vec<Card> {
        let mut stack = Vec::with_capacity(self.total_cards());
        for card in Card::all() {
            let copies = self.count(card);
            stack.extend(std::iter::repeat(card).take(copies));
        }
        stack
    }
}
