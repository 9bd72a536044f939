//! Thief rules

use super::{raise_stat_or, ClassRules};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::dice::Dice;
use crate::feature::{BonusKind, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

pub(super) static RULES: ClassRules = ClassRules {
    hit_die: Dice::new(1, 4),
    weapons: &[Weapon::Shortsword, Weapon::Dagger, Weapon::Club],
    races: &[Race::Human, Race::Goblin, Race::Halfling],
    reroll: all_snake_eyes,
    defaults,
    per_roll,
};

/// A human thief rolling 2 twice would duplicate the initiative talent
fn all_snake_eyes(rolls: &[u32]) -> bool {
    rolls.iter().all(|&roll| roll == 2)
}

fn defaults(_ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    vec![
        Feature::talent(
            "backstab: on attack against unaware target, add 1+half-level damage dice",
        ),
        Feature::talent("thievery: you always have thieves' tools, no gear slots needed"),
        Feature::talent(
            "trained in climbing, sneaking, hiding, finding/disabling traps, delicate work \
             like picking pockets and locks (advantage on relevant checks)",
        ),
    ]
}

fn per_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::talent("advantage on initiative rolls")],
        3..=5 => vec![Feature::Bonus(BonusKind::BackstabDice, 1)],
        6..=9 => vec![raise_stat_or(
            ctx,
            &[Ability::Dexterity, Ability::Charisma],
            Feature::StatIncrease(Ability::Constitution, 2),
        )],
        10..=12 => vec![Feature::Bonus(BonusKind::MeleeAndRangedAttacks, 1)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}
