//! Features: atomic grants emitted by rule producers
//!
//! Race and class rules never touch the character directly. They emit
//! [`Feature`] values, and the accumulator applies each one by tag. Numeric
//! bonuses stay structured (a [`BonusKind`] plus a magnitude) until
//! finalization renders each kind into a single talent sentence.

use std::fmt;

use strum::EnumIter;

use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::gear::Weapon;
use crate::rng::GameRng;

/// Produces default features for a race or class
pub type FeatureProducer = fn(&FeatureContext, &mut GameRng) -> Vec<Feature>;

/// Produces features for one talent roll
pub type RollProducer = fn(u32, &FeatureContext, &mut GameRng) -> Vec<Feature>;

/// Rejects a talent-roll set as degenerate, forcing a reroll
pub type RerollPredicate = fn(&[u32]) -> bool;

/// Damage a character can become immune to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[repr(u8)]
pub enum DamageType {
    Cold,
    Acid,
    Poison,
}

impl DamageType {
    pub const ALL: [DamageType; 3] = [DamageType::Cold, DamageType::Acid, DamageType::Poison];

    pub const fn name(&self) -> &'static str {
        match self {
            DamageType::Cold => "cold",
            DamageType::Acid => "acid",
            DamageType::Poison => "poison",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds of accumulating numeric bonus
///
/// Each kind renders as exactly one sentence no matter how many times it was
/// granted; the magnitudes add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum BonusKind {
    MeleeAttacks,
    MeleeAndRangedAttacks,
    RangedAttacks,
    BackstabDice,
    ArmorClass,
    PlateArmor,
    ClericSpellcasting,
    WizardSpellcasting,
    WitchSpellcasting,
    MaximizedHitDice,
    DemonicPossession,
    MeleeAdvantage,
    GmReroll,
    SecretXp,
    MindReading,
    FarTeleport,
    MoraleCheck,
    FamiliarTeleport,
}

impl BonusKind {
    /// Render the accumulated total as a talent sentence
    pub fn render(&self, amount: i32) -> String {
        match self {
            BonusKind::MeleeAttacks => format!("+{amount} to melee attacks"),
            BonusKind::MeleeAndRangedAttacks => format!("+{amount} to melee and ranged attacks"),
            BonusKind::RangedAttacks => format!("+{amount} to ranged attack rolls"),
            BonusKind::BackstabDice => format!("+{amount} to backstab damage dice"),
            BonusKind::ArmorClass => format!("+{amount} to AC"),
            BonusKind::PlateArmor => format!("+{amount} AC when wearing plate mail"),
            BonusKind::ClericSpellcasting => format!("+{amount} to cleric spellcasting checks"),
            BonusKind::WizardSpellcasting => format!("+{amount} to wizard spellcasting checks"),
            BonusKind::WitchSpellcasting => format!("+{amount} to witch spellcasting checks"),
            BonusKind::MaximizedHitDice => {
                format!("Maximize {amount} hit dice rolls (prior or future)")
            }
            BonusKind::DemonicPossession => format!(
                "demonic possession: 3/day, gain a {amount} half-level bonus to damage rolls for 3 rounds"
            ),
            BonusKind::MeleeAdvantage => {
                format!("{amount}/day, gain advantage on melee attacks for 3 rounds")
            }
            BonusKind::GmReroll => format!("{amount}/day, force GM to reroll"),
            BonusKind::SecretXp => format!("+{amount} xp on learning a valuable secret"),
            BonusKind::MindReading => {
                format!("{amount}/day, read the mind of a creature you touch for 3 rounds")
            }
            BonusKind::FarTeleport => {
                format!("{amount}/day, teleport to a far location you see as your move")
            }
            BonusKind::MoraleCheck => {
                format!("{amount}/day, force a close being to check morale, even if immune")
            }
            BonusKind::FamiliarTeleport => format!("{amount}/day teleport to familiar's location"),
        }
    }
}

/// One atomic grant from a race or class rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature {
    /// Numeric bonus, accumulated per kind
    Bonus(BonusKind, i32),
    /// Immunity to one damage type
    Immunity(DamageType),
    /// Gear granted outside the purchase sequence; weight 0 means worn
    Gear { item: String, weight: u32 },
    Language(String),
    Spell(String),
    /// Casting advantage on an already-known spell
    SpellMastery(String),
    /// Free-text talent sentence, rendered verbatim
    Talent(String),
    WeaponMastery(Weapon),
    WeaponProficiency(Weapon),
    /// Direct ability-score change, unclamped
    StatIncrease(Ability, i8),
}

impl Feature {
    pub fn language(name: impl Into<String>) -> Self {
        Feature::Language(name.into())
    }

    pub fn spell(name: impl Into<String>) -> Self {
        Feature::Spell(name.into())
    }

    pub fn mastery(spell: impl Into<String>) -> Self {
        Feature::SpellMastery(spell.into())
    }

    pub fn talent(text: impl Into<String>) -> Self {
        Feature::Talent(text.into())
    }

    pub fn gear(item: impl Into<String>, weight: u32) -> Self {
        Feature::Gear {
            item: item.into(),
            weight,
        }
    }
}
