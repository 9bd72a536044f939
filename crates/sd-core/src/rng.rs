//! Random number generation
//!
//! A seeded ChaCha stream drives every draw in the generator, so a whole
//! character (or party) can be replayed exactly from one `u64` seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator random number source
///
/// Wraps a ChaCha8 stream and remembers the seed it was built from so the
/// seed can be reported alongside whatever it produced.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG from system entropy
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one die: uniform in 1..=size (0 if size is 0)
    pub fn die(&mut self, size: u32) -> u32 {
        if size == 0 {
            return 0;
        }
        self.rng.gen_range(1..=size)
    }

    /// Roll `count` dice of the given size and sum them
    pub fn dice(&mut self, count: u32, size: u32) -> u32 {
        (0..count).map(|_| self.die(size)).sum()
    }

    /// Uniform index into a collection of length `n`; callers guard n > 0
    fn index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Choose two distinct elements from a slice, as an unordered pair
    ///
    /// Every 2-element subset is equally likely. Returns `None` when the
    /// slice holds fewer than two elements.
    pub fn choose_two<'a, T>(&mut self, items: &'a [T]) -> Option<[&'a T; 2]> {
        if items.len() < 2 {
            return None;
        }
        let first = self.index(items.len());
        let mut second = self.index(items.len() - 1);
        if second >= first {
            second += 1;
        }
        Some([&items[first], &items[second]])
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
