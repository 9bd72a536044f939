//! sd-core: level-1 character generation for Shadowdark-style games
//!
//! Pure generation logic with no I/O. All randomness flows through one
//! seeded [`GameRng`], so characters and whole parties replay exactly from
//! a `u64` seed. The pipeline rolls a stat block, derives the class from
//! it, accumulates race and class features, buys equipment and hands back a
//! [`CharacterSheet`] for rendering elsewhere.

pub mod ability;
pub mod character;
pub mod classes;
pub mod context;
pub mod data;
pub mod dice;
pub mod feature;
pub mod gear;
pub mod generator;
pub mod party;
pub mod race;
mod rng;

pub use ability::{modifier, Ability, AbilityScores};
pub use character::{Character, CharacterSheet};
pub use classes::{choose_class, CharacterClass, ClassRules, Patron};
pub use context::FeatureContext;
pub use dice::{Dice, DiceParseError, RollMode};
pub use feature::{BonusKind, DamageType, Feature};
pub use gear::{Coins, Weapon};
pub use generator::{generate_sheet, roll_ability_scores, GenError, Limits};
pub use party::generate_party;
pub use race::{Race, RaceRules};
pub use rng::GameRng;
