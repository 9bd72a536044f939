//! Witch rules

use super::{
    learn_new_spell, master_known_spell, never_rerolls, raise_stat_or, starting_spells, ClassRules,
};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::data;
use crate::dice::Dice;
use crate::feature::{BonusKind, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

pub(super) static RULES: ClassRules = ClassRules {
    hit_die: Dice::new(1, 4),
    weapons: &[Weapon::Dagger, Weapon::Staff],
    races: &[Race::Human, Race::Elf, Race::Goblin, Race::Halfling],
    reroll: never_rerolls,
    defaults,
    per_roll,
};

fn defaults(_ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    let mut features = vec![
        Feature::language("diabolic"),
        Feature::language("primoridal"), // sic
        Feature::language("sylvan"),
        Feature::talent(
            "familiar: you have a little buddy, it speaks common and you can cast spells \
             through it",
        ),
    ];
    features.extend(starting_spells(data::WITCH_SPELLS, &[], 3, rng));
    features
}

fn per_roll(roll: u32, ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::Bonus(BonusKind::FamiliarTeleport, 1)],
        3..=7 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Charisma],
            Feature::Bonus(BonusKind::WitchSpellcasting, 1),
        )],
        8..=9 => vec![master_known_spell(ctx, rng)],
        10..=11 => vec![learn_new_spell(ctx, data::WITCH_SPELLS, rng)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;
    use crate::classes::CharacterClass;

    fn ctx(charisma: i8) -> FeatureContext {
        FeatureContext::new(
            Race::Human,
            CharacterClass::Witch,
            AbilityScores::new(10, 10, 10, 10, 10, charisma),
        )
    }

    #[test]
    fn test_defaults_shape() {
        let mut rng = GameRng::new(1);
        let features = defaults(&ctx(15), &mut rng);
        assert!(features.contains(&Feature::language("diabolic")));
        assert!(features.contains(&Feature::language("primoridal")));
        assert!(features.contains(&Feature::language("sylvan")));
        let spells = features
            .iter()
            .filter(|feature| matches!(feature, Feature::Spell(_)))
            .count();
        assert_eq!(spells, 3);
    }

    #[test]
    fn test_roll_bands() {
        let mut rng = GameRng::new(2);
        assert_eq!(
            per_roll(2, &ctx(15), &mut rng),
            vec![Feature::Bonus(BonusKind::FamiliarTeleport, 1)]
        );
        assert_eq!(
            per_roll(5, &ctx(15), &mut rng),
            vec![Feature::StatIncrease(Ability::Charisma, 2)]
        );
        assert_eq!(
            per_roll(12, &ctx(18), &mut rng),
            vec![Feature::Bonus(BonusKind::WitchSpellcasting, 1)]
        );
    }

    #[test]
    fn test_learning_rolls_use_the_witch_list() {
        let mut rng = GameRng::new(3);
        let mut context = ctx(15);
        context.apply_all(defaults(&context, &mut rng));
        let features = per_roll(10, &context, &mut rng);
        let Feature::Spell(spell) = &features[0] else {
            panic!("expected a spell");
        };
        assert!(data::WITCH_SPELLS.contains(&spell.as_str()));
        assert!(!context.knows_spell(spell));
    }

    #[test]
    fn test_mastery_rolls_pick_known_spells() {
        let mut rng = GameRng::new(4);
        let mut context = ctx(15);
        context.apply_all(defaults(&context, &mut rng));
        let features = per_roll(8, &context, &mut rng);
        let Feature::SpellMastery(spell) = &features[0] else {
            panic!("expected a mastery");
        };
        assert!(context.knows_spell(spell));
    }
}
