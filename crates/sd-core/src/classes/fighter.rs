//! Fighter rules

use super::{never_rerolls, raise_stat_or, ClassRules};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::dice::Dice;
use crate::feature::{BonusKind, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

pub(super) static RULES: ClassRules = ClassRules {
    hit_die: Dice::new(1, 8),
    weapons: &[
        Weapon::BastardSword,
        Weapon::Longsword,
        Weapon::Spear,
        Weapon::Dagger,
        Weapon::Club,
    ],
    races: &[Race::Human, Race::HalfOrc, Race::Dwarf],
    reroll: never_rerolls,
    defaults,
    per_roll,
};

fn defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let mastery = if ctx.race() == Race::Dwarf {
        Weapon::Greataxe
    } else {
        Weapon::BastardSword
    };
    vec![
        Feature::talent("hauler: add con mod, if positive to gear slots"),
        Feature::WeaponMastery(mastery),
        Feature::talent("Grit: advantage on strength checks to overcome opposing force"),
    ]
}

fn per_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => {
            // A second 2 upgrades to the greatsword instead of duplicating
            let weapon = if ctx.has_weapon_mastery(Weapon::Longbow) {
                Weapon::Greatsword
            } else {
                Weapon::Longbow
            };
            vec![Feature::WeaponMastery(weapon)]
        }
        3..=6 | 12 => vec![Feature::Bonus(BonusKind::MeleeAndRangedAttacks, 1)],
        7..=9 => vec![raise_stat_or(
            ctx,
            &[Ability::Strength, Ability::Constitution],
            Feature::StatIncrease(Ability::Dexterity, 2),
        )],
        10..=11 => vec![Feature::Bonus(BonusKind::PlateArmor, 1)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}
