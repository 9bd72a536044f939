//! Character classes and their rule tables
//!
//! Every archetype (the six warlock pacts included) owns one [`ClassRules`]
//! record: hit die, weapon preferences, race pool, a reroll predicate for
//! degenerate talent-roll sets, and two feature producers. The generator
//! only ever talks to that record; nothing dispatches on class names
//! anywhere else.

mod cleric;
mod fighter;
mod knight;
mod thief;
mod warlock;
mod witch;
pub(crate) mod wizard;

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::ability::{Ability, AbilityScores};
use crate::context::FeatureContext;
use crate::dice::Dice;
use crate::feature::{Feature, FeatureProducer, RerollPredicate, RollProducer};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

/// A warlock's patron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[repr(u8)]
pub enum Patron {
    Mugdulblub,
    Almazzat,
    Kytheros,
    ShuneTheVile,
    Titania,
    TheWillowman,
}

impl Patron {
    pub const ALL: [Patron; 6] = [
        Patron::Mugdulblub,
        Patron::Almazzat,
        Patron::Kytheros,
        Patron::ShuneTheVile,
        Patron::Titania,
        Patron::TheWillowman,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Patron::Mugdulblub => "Mugdulblub",
            Patron::Almazzat => "Almazzat",
            Patron::Kytheros => "Kytheros",
            Patron::ShuneTheVile => "Shune the Vile",
            Patron::Titania => "Titania",
            Patron::TheWillowman => "The Willowman",
        }
    }
}

impl fmt::Display for Patron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A character class; warlocks carry their patron
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Thief,
    Fighter,
    Cleric,
    Wizard,
    KnightOfStYdris,
    Warlock(Patron),
    Witch,
}

/// Fixed per-class data and behavior
pub struct ClassRules {
    pub hit_die: Dice,
    /// Weapon preferences, best first
    pub weapons: &'static [Weapon],
    /// Races this class draws from
    pub races: &'static [Race],
    /// Rejects a degenerate talent-roll set (only consulted for multi-roll
    /// sets, i.e. humans)
    pub reroll: RerollPredicate,
    pub defaults: FeatureProducer,
    pub per_roll: RollProducer,
}

impl CharacterClass {
    /// Every concrete archetype, patrons expanded
    pub const ALL: [CharacterClass; 12] = [
        CharacterClass::Thief,
        CharacterClass::Fighter,
        CharacterClass::Cleric,
        CharacterClass::Wizard,
        CharacterClass::KnightOfStYdris,
        CharacterClass::Witch,
        CharacterClass::Warlock(Patron::Mugdulblub),
        CharacterClass::Warlock(Patron::Almazzat),
        CharacterClass::Warlock(Patron::Kytheros),
        CharacterClass::Warlock(Patron::ShuneTheVile),
        CharacterClass::Warlock(Patron::Titania),
        CharacterClass::Warlock(Patron::TheWillowman),
    ];

    /// Number of distinct base archetypes (patrons collapsed)
    pub const DISTINCT_ARCHETYPES: usize = 7;

    /// Display name; all pacts read "warlock"
    pub const fn name(&self) -> &'static str {
        match self {
            CharacterClass::Thief => "thief",
            CharacterClass::Fighter => "fighter",
            CharacterClass::Cleric => "cleric",
            CharacterClass::Wizard => "wizard",
            CharacterClass::KnightOfStYdris => "knight of St. Ydris",
            CharacterClass::Warlock(_) => "warlock",
            CharacterClass::Witch => "witch",
        }
    }

    /// True when both classes are the same base archetype; warlock pacts
    /// all count as one archetype for party building
    pub fn same_archetype(&self, other: &CharacterClass) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub const fn buys_shield(&self) -> bool {
        matches!(
            self,
            CharacterClass::Fighter
                | CharacterClass::Cleric
                | CharacterClass::KnightOfStYdris
                | CharacterClass::Warlock(_)
        )
    }

    pub const fn buys_leather(&self) -> bool {
        matches!(
            self,
            CharacterClass::Thief
                | CharacterClass::Fighter
                | CharacterClass::Cleric
                | CharacterClass::KnightOfStYdris
                | CharacterClass::Warlock(_)
                | CharacterClass::Witch
        )
    }

    pub fn rules(&self) -> &'static ClassRules {
        match self {
            CharacterClass::Thief => &thief::RULES,
            CharacterClass::Fighter => &fighter::RULES,
            CharacterClass::Cleric => &cleric::RULES,
            CharacterClass::Wizard => &wizard::RULES,
            CharacterClass::KnightOfStYdris => &knight::RULES,
            CharacterClass::Warlock(patron) => warlock::rules(*patron),
            CharacterClass::Witch => &witch::RULES,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick the class for a rolled stat block; pure function of the scores
///
/// A block whose best class stat is 14 or better goes to the class keyed to
/// that stat (strength splits on charisma into knight or fighter). Anything
/// weaker takes a warlock pact.
pub fn choose_class(scores: &AbilityScores) -> CharacterClass {
    let (best, value) = scores.best_class_stat();
    if value < 14 {
        return CharacterClass::Warlock(patron_for(best, value));
    }
    match best {
        Ability::Dexterity => CharacterClass::Thief,
        Ability::Wisdom => CharacterClass::Cleric,
        Ability::Strength if scores.charisma >= 14 => CharacterClass::KnightOfStYdris,
        Ability::Strength => CharacterClass::Fighter,
        Ability::Intelligence => CharacterClass::Wizard,
        Ability::Charisma => CharacterClass::Witch,
        Ability::Constitution => unreachable!("constitution never drives class selection"),
    }
}

/// Patron for a weak stat block: the best remaining stat picks the pact,
/// and a best below 10 sinks to Mugdulblub
fn patron_for(best: Ability, value: i8) -> Patron {
    if value < 10 {
        return Patron::Mugdulblub;
    }
    match best {
        Ability::Strength => Patron::Almazzat,
        Ability::Dexterity => Patron::Titania,
        Ability::Intelligence => Patron::ShuneTheVile,
        Ability::Wisdom => Patron::Kytheros,
        _ => Patron::TheWillowman,
    }
}

/// Ability scores cap at 18 for roll-granted increases
const STAT_CAP: i8 = 18;

/// Predicate for classes that never reject a talent-roll set
pub(crate) fn never_rerolls(_rolls: &[u32]) -> bool {
    false
}

/// Grant +2 to the first listed ability still under the cap, or the
/// fallback feature when every listed ability is capped
pub(crate) fn raise_stat_or(
    ctx: &FeatureContext,
    preferred: &[Ability],
    fallback: Feature,
) -> Feature {
    for &ability in preferred {
        if ctx.score(ability) < STAT_CAP {
            return Feature::StatIncrease(ability, 2);
        }
    }
    fallback
}

/// Casting advantage on one known spell that has no mastery yet
pub(crate) fn master_known_spell(ctx: &FeatureContext, rng: &mut GameRng) -> Feature {
    let candidates = ctx.unmastered_spells();
    let spell = *rng
        .choose(&candidates)
        .expect("no unmastered spell left to master");
    Feature::mastery(spell)
}

/// Learn one spell from `table` that is not yet known
pub(crate) fn learn_new_spell(
    ctx: &FeatureContext,
    table: &'static [&'static str],
    rng: &mut GameRng,
) -> Feature {
    let candidates = ctx.unknown_spells_from(table);
    let spell = *rng
        .choose(&candidates)
        .expect("no unknown spell left to learn");
    Feature::spell(spell)
}

/// Sample `table` until `target` distinct spells are held, counting the
/// pre-granted ones; repeats are redrawn
pub(crate) fn starting_spells(
    table: &'static [&'static str],
    granted: &[&'static str],
    target: usize,
    rng: &mut GameRng,
) -> Vec<Feature> {
    let mut known: std::collections::BTreeSet<&str> = granted.iter().copied().collect();
    let mut features: Vec<Feature> = granted.iter().map(|spell| Feature::spell(*spell)).collect();
    while known.len() < target {
        let spell = *rng.choose(table).expect("spell table is empty");
        if known.insert(spell) {
            features.push(Feature::spell(spell));
        }
    }
    features
}
