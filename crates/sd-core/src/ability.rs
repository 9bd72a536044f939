//! Ability scores and modifiers

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The six abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Abilities that can drive class selection, in tie-break order.
    /// Constitution never selects a class.
    pub const CLASS_PRIORITY: [Ability; 5] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Three-letter sheet label
    pub const fn label(&self) -> &'static str {
        match self {
            Ability::Strength => "STR",
            Ability::Dexterity => "DEX",
            Ability::Constitution => "CON",
            Ability::Intelligence => "INT",
            Ability::Wisdom => "WIS",
            Ability::Charisma => "CHA",
        }
    }
}

/// Modifier for an ability score
pub const fn modifier(score: i8) -> i8 {
    match score {
        ..=3 => -4,
        4..=5 => -3,
        6..=7 => -2,
        8..=9 => -1,
        10..=11 => 0,
        12..=13 => 1,
        14..=15 => 2,
        16..=17 => 3,
        _ => 4,
    }
}

/// A full block of six ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    pub strength: i8,
    pub dexterity: i8,
    pub constitution: i8,
    pub intelligence: i8,
    pub wisdom: i8,
    pub charisma: i8,
}

impl AbilityScores {
    pub const fn new(
        strength: i8,
        dexterity: i8,
        constitution: i8,
        intelligence: i8,
        wisdom: i8,
        charisma: i8,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub const fn get(&self, ability: Ability) -> i8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Modifier of one ability
    pub const fn modifier_of(&self, ability: Ability) -> i8 {
        modifier(self.get(ability))
    }

    /// Adjust one ability by a delta; scores are not clamped
    pub fn modify(&mut self, ability: Ability, delta: i8) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot += delta;
    }

    /// True when any of the six scores meets the threshold
    pub fn any_at_least(&self, threshold: i8) -> bool {
        Ability::ALL
            .iter()
            .any(|ability| self.get(*ability) >= threshold)
    }

    /// Best class-determining ability and its score
    ///
    /// Constitution is skipped entirely; ties go to the earliest entry in
    /// [`Ability::CLASS_PRIORITY`].
    pub fn best_class_stat(&self) -> (Ability, i8) {
        let mut best = Ability::CLASS_PRIORITY[0];
        let mut value = self.get(best);
        for &ability in &Ability::CLASS_PRIORITY[1..] {
            let score = self.get(ability);
            if score > value {
                best = ability;
                value = score;
            }
        }
        (best, value)
    }
}
