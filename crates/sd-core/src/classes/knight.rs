//! Knight of St. Ydris rules
//!
//! A possessed fighter: fights like one, casts like a witch.

use super::{never_rerolls, raise_stat_or, ClassRules};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::dice::Dice;
use crate::feature::{BonusKind, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

pub(super) static RULES: ClassRules = ClassRules {
    hit_die: Dice::new(1, 6),
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

fn defaults(_ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    // The possession bonus starts at 1 so the talent always renders
    vec![
        Feature::language("diabolic"),
        Feature::Bonus(BonusKind::DemonicPossession, 1),
    ]
}

fn per_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 | 12 => vec![Feature::Bonus(BonusKind::DemonicPossession, 1)],
        3..=6 => vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)],
        7..=9 => vec![raise_stat_or(
            ctx,
            &[Ability::Strength, Ability::Constitution],
            Feature::StatIncrease(Ability::Dexterity, 2),
        )],
        10..=11 => vec![raise_stat_or(
            ctx,
            &[Ability::Charisma],
            Feature::Bonus(BonusKind::WitchSpellcasting, 1),
        )],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;
    use crate::classes::CharacterClass;

    fn ctx(strength: i8, charisma: i8) -> FeatureContext {
        FeatureContext::new(
            Race::Human,
            CharacterClass::KnightOfStYdris,
            AbilityScores::new(strength, 10, 10, 10, 10, charisma),
        )
    }

    #[test]
    fn test_possession_is_seeded_at_one() {
        let mut rng = GameRng::new(1);
        let features = defaults(&ctx(16, 14), &mut rng);
        assert!(features.contains(&Feature::Bonus(BonusKind::DemonicPossession, 1)));
        assert!(features.contains(&Feature::language("diabolic")));
    }

    #[test]
    fn test_extreme_rolls_deepen_the_possession() {
        let mut rng = GameRng::new(2);
        let context = ctx(16, 14);
        assert_eq!(
            per_roll(2, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::DemonicPossession, 1)]
        );
        assert_eq!(
            per_roll(12, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::DemonicPossession, 1)]
        );
    }

    #[test]
    fn test_roll_bands() {
        let mut rng = GameRng::new(3);
        let context = ctx(16, 14);
        assert_eq!(
            per_roll(5, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)]
        );
        assert_eq!(
            per_roll(8, &context, &mut rng),
            vec![Feature::StatIncrease(Ability::Strength, 2)]
        );
        assert_eq!(
            per_roll(10, &context, &mut rng),
            vec![Feature::StatIncrease(Ability::Charisma, 2)]
        );
        assert_eq!(
            per_roll(10, &ctx(16, 18), &mut rng),
            vec![Feature::Bonus(BonusKind::WitchSpellcasting, 1)]
        );
    }
}
