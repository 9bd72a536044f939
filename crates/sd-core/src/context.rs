//! Feature accumulator
//!
//! One [`FeatureContext`] per character under construction. Producers read
//! it (current scores, known spells, held masteries) and emit features; the
//! context applies each feature by tag. Unique grants live in sorted sets so
//! draws over them replay deterministically for a given seed.

use std::collections::{BTreeMap, BTreeSet};

use crate::ability::{Ability, AbilityScores};
use crate::classes::CharacterClass;
use crate::feature::{BonusKind, DamageType, Feature};
use crate::gear::Weapon;
use crate::race::Race;

/// Mutable per-character accumulator
#[derive(Debug, Clone)]
pub struct FeatureContext {
    pub(crate) race: Race,
    pub(crate) class: CharacterClass,
    pub(crate) scores: AbilityScores,
    pub(crate) languages: BTreeSet<String>,
    pub(crate) spells: BTreeSet<String>,
    pub(crate) masteries: BTreeSet<String>,
    pub(crate) immunities: BTreeSet<DamageType>,
    pub(crate) weapon_masteries: BTreeSet<Weapon>,
    pub(crate) weapon_proficiencies: BTreeSet<Weapon>,
    pub(crate) bonuses: BTreeMap<BonusKind, i32>,
    pub(crate) talents: Vec<String>,
    pub(crate) gear: Vec<String>,
    pub(crate) weight: u32,
}

impl FeatureContext {
    pub fn new(race: Race, class: CharacterClass, scores: AbilityScores) -> Self {
        Self {
            race,
            class,
            scores,
            languages: BTreeSet::new(),
            spells: BTreeSet::new(),
            masteries: BTreeSet::new(),
            immunities: BTreeSet::new(),
            weapon_masteries: BTreeSet::new(),
            weapon_proficiencies: BTreeSet::new(),
            bonuses: BTreeMap::new(),
            talents: Vec::new(),
            gear: Vec::new(),
            weight: 0,
        }
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }

    /// Current value of one ability, after any increases so far
    pub fn score(&self, ability: Ability) -> i8 {
        self.scores.get(ability)
    }

    pub fn knows_language(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    pub fn knows_spell(&self, spell: &str) -> bool {
        self.spells.contains(spell)
    }

    pub fn has_weapon_mastery(&self, weapon: Weapon) -> bool {
        self.weapon_masteries.contains(&weapon)
    }

    pub fn has_weapon_proficiency(&self, weapon: Weapon) -> bool {
        self.weapon_proficiencies.contains(&weapon)
    }

    /// Known spells without a mastery yet, in sorted order
    pub fn unmastered_spells(&self) -> Vec<&str> {
        self.spells
            .iter()
            .filter(|spell| !self.masteries.contains(*spell))
            .map(String::as_str)
            .collect()
    }

    /// Entries of `table` not yet known as spells, preserving table order
    pub fn unknown_spells_from(&self, table: &'static [&'static str]) -> Vec<&'static str> {
        table
            .iter()
            .copied()
            .filter(|spell| !self.spells.contains(*spell))
            .collect()
    }

    /// Apply one feature, dispatching on its tag
    pub fn apply(&mut self, feature: Feature) {
        match feature {
            Feature::Bonus(kind, amount) => {
                *self.bonuses.entry(kind).or_insert(0) += amount;
            }
            Feature::Immunity(damage) => {
                self.immunities.insert(damage);
            }
            Feature::Gear { item, weight } => {
                self.gear.push(item);
                self.weight += weight;
            }
            Feature::Language(language) => {
                self.languages.insert(language);
            }
            Feature::Spell(spell) => {
                self.spells.insert(spell);
            }
            Feature::SpellMastery(spell) => {
                assert!(
                    self.spells.contains(&spell),
                    "mastery granted for unknown spell: {spell}"
                );
                self.masteries.insert(spell);
            }
            Feature::Talent(text) => self.talents.push(text),
            Feature::WeaponMastery(weapon) => {
                self.weapon_masteries.insert(weapon);
            }
            Feature::WeaponProficiency(weapon) => {
                self.weapon_proficiencies.insert(weapon);
            }
            Feature::StatIncrease(ability, delta) => self.scores.modify(ability, delta),
        }
    }

    pub fn apply_all(&mut self, features: Vec<Feature>) {
        for feature in features {
            self.apply(feature);
        }
    }

    /// Render every structured grant into its talent sentence
    ///
    /// Each nonzero bonus kind becomes exactly one sentence; masteries,
    /// immunities and weapon grants follow, each set in sorted order.
    pub fn render_grants(&mut self) {
        let bonuses = std::mem::take(&mut self.bonuses);
        for (kind, amount) in bonuses {
            if amount != 0 {
                self.talents.push(kind.render(amount));
            }
        }
        for spell in &self.masteries {
            self.talents.push(format!("advantage on casting {spell}"));
        }
        for damage in &self.immunities {
            self.talents.push(format!("immune to {damage}"));
        }
        for weapon in &self.weapon_masteries {
            self.talents.push(format!("weapon mastery: {weapon}"));
        }
        for weapon in &self.weapon_proficiencies {
            self.talents.push(format!("can use a {weapon}"));
        }
    }

    /// The final talent list must hold no duplicate sentences; a duplicate
    /// means two rules collided and the sheet would silently lie.
    pub fn assert_talents_unique(&self) {
        let unique: BTreeSet<&String> = self.talents.iter().collect();
        assert_eq!(
            unique.len(),
            self.talents.len(),
            "duplicate talent for {} {}: {:?}",
            self.race,
            self.class,
            self.talents
        );
    }
}
