//! Dice pools and roll modes
//!
//! A [`Dice`] value is a pool like 3d6: a count of identical dice. Pools
//! parse from the usual "NdM" notation and roll through [`GameRng`], so
//! every roll stays on the seeded stream.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::rng::GameRng;

/// Error when parsing dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The input string is empty
    #[error("empty dice notation")]
    Empty,
    /// Not of the form NdM
    #[error("invalid dice notation: {0:?}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("dice count must be at least 1")]
    ZeroCount,
    /// Die size must be at least 1
    #[error("die size must be at least 1")]
    ZeroSize,
}

/// How a roll resolves: straight, or best/worst of two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollMode {
    #[default]
    Normal,
    /// Roll twice, keep the higher result
    Advantage,
    /// Roll twice, keep the lower result
    Disadvantage,
}

/// A dice pool: `count` dice of `size` faces each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    count: u32,
    size: u32,
}

impl Dice {
    /// Create a dice pool without validation; parsing validates instead
    pub const fn new(count: u32, size: u32) -> Self {
        Self { count, size }
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Roll the pool and sum the dice
    pub fn roll(&self, rng: &mut GameRng) -> u32 {
        rng.dice(self.count, self.size)
    }

    /// Roll the pool under a roll mode
    ///
    /// Advantage and disadvantage only make sense for a single die; a
    /// multi-die pool under either mode is a caller bug.
    pub fn roll_with(&self, rng: &mut GameRng, mode: RollMode) -> u32 {
        match mode {
            RollMode::Normal => self.roll(rng),
            RollMode::Advantage => {
                assert_eq!(self.count, 1, "advantage on a multi-die pool");
                self.roll(rng).max(self.roll(rng))
            }
            RollMode::Disadvantage => {
                assert_eq!(self.count, 1, "disadvantage on a multi-die pool");
                self.roll(rng).min(self.roll(rng))
            }
        }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.size)
    }
}

impl FromStr for Dice {
    type Err = DiceParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }
        let Some((count_str, size_str)) = input.split_once(['d', 'D']) else {
            return Err(DiceParseError::InvalidFormat(input.to_string()));
        };
        let count: u32 = count_str
            .parse()
            .map_err(|_| DiceParseError::InvalidFormat(input.to_string()))?;
        let size: u32 = size_str
            .parse()
            .map_err(|_| DiceParseError::InvalidFormat(input.to_string()))?;
        if count == 0 {
            return Err(DiceParseError::ZeroCount);
        }
        if size == 0 {
            return Err(DiceParseError::ZeroSize);
        }
        Ok(Self { count, size })
    }
}
