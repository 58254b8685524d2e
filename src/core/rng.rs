//! Deterministic random number generation for deck shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same nonzero seed produces an identical shuffle
//! - **Seed 0 means "surprise me"**: a fresh nonzero seed is drawn from
//!   OS entropy, and kept so the game can still be reproduced
//! - **Identifier bytes**: seeded generation of player identifiers
//!
//! ```
//! use hanabi_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs: Vec<u32> = (0..20).collect();
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG for starting a game.
    ///
    /// A nonzero seed is used as is. Zero picks a fresh nonzero seed
    /// from OS entropy, so two games started with seed 0 shuffle
    /// differently.
    #[must_use]
    pub fn for_start(seed: u64) -> Self {
        if seed != 0 {
            return Self::new(seed);
        }
        let fresh = rand::thread_rng().gen_range(1..=u64::MAX);
        Self::new(fresh)
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Fill a 16-byte buffer, e.g. for a random UUID.
    #[must_use]
    pub fn gen_bytes(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        self.inner.fill_bytes(&mut bytes);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng1.gen_bytes(), rng2.gen_bytes());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(rng1.gen_bytes(), rng2.gen_bytes());
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_for_start_keeps_nonzero_seed() {
        assert_eq!(GameRng::for_start(7).seed(), 7);
    }

    #[test]
    fn test_for_start_zero_picks_fresh_seed() {
        let a = GameRng::for_start(0);
        let b = GameRng::for_start(0);

        assert_ne!(a.seed(), 0);
        assert_ne!(b.seed(), 0);
        // 2^-64 chance of a spurious failure
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn test_for_start_reproducible_from_recorded_seed() {
        let mut first = GameRng::for_start(0);
        let mut replay = GameRng::new(first.seed());

        let mut xs: Vec<u8> = (0..50).collect();
        let mut ys = xs.clone();
        first.shuffle(&mut xs);
        replay.shuffle(&mut ys);
        assert_eq!(xs, ys);
    }
}
