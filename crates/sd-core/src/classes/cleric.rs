//! Cleric rules

use super::{master_known_spell, never_rerolls, raise_stat_or, starting_spells, ClassRules};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::data;
use crate::dice::Dice;
use crate::feature::{BonusKind, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

pub(super) static RULES: ClassRules = ClassRules {
    hit_die: Dice::new(1, 6),
    weapons: &[Weapon::Longsword, Weapon::Mace, Weapon::Club],
    races: &[Race::Human, Race::Dwarf],
    reroll: never_rerolls,
    defaults,
    per_roll,
};

/// Liturgical tongues; the draw skips any already known
const HOLY_TONGUES: &[&str] = &["primordial", "diabolic", "celestial"];

fn defaults(ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    let mut features = vec![Feature::gear("holy symbol", 0)];

    let candidates: Vec<&str> = HOLY_TONGUES
        .iter()
        .copied()
        .filter(|language| !ctx.knows_language(language))
        .collect();
    let language = *rng
        .choose(&candidates)
        .expect("every holy tongue already known");
    features.push(Feature::language(language));

    features.extend(starting_spells(
        data::CLERIC_SPELLS,
        &["turn undead"],
        3,
        rng,
    ));

    let pantheon = *rng
        .choose(&[data::LAWFUL_GODS, data::NEUTRAL_GODS])
        .expect("no pantheons defined");
    let god = *rng.choose(pantheon).expect("pantheon is empty");
    features.push(Feature::talent(format!("worshipper of {god}")));

    features
}

fn per_roll(roll: u32, ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![master_known_spell(ctx, rng)],
        3..=6 => vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)],
        7..=9 | 12 => vec![Feature::Bonus(BonusKind::ClericSpellcasting, 1)],
        10..=11 => vec![raise_stat_or(
            ctx,
            &[Ability::Wisdom],
            Feature::StatIncrease(Ability::Strength, 2),
        )],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;
    use crate::classes::CharacterClass;

    fn ctx(wisdom: i8) -> FeatureContext {
        FeatureContext::new(
            Race::Human,
            CharacterClass::Cleric,
            AbilityScores::new(10, 10, 10, 10, wisdom, 10),
        )
    }

    #[test]
    fn test_defaults_shape() {
        let mut rng = GameRng::new(1);
        let features = defaults(&ctx(15), &mut rng);

        assert!(features.contains(&Feature::gear("holy symbol", 0)));
        assert!(features.contains(&Feature::spell("turn undead")));

        let spells = features
            .iter()
            .filter(|feature| matches!(feature, Feature::Spell(_)))
            .count();
        assert_eq!(spells, 3, "turn undead plus two picks");

        let tongue = features.iter().any(|feature| {
            matches!(feature, Feature::Language(l) if HOLY_TONGUES.contains(&l.as_str()))
        });
        assert!(tongue, "cleric learns one holy tongue");

        let worship = features.iter().any(|feature| {
            matches!(feature, Feature::Talent(t) if t.starts_with("worshipper of "))
        });
        assert!(worship);
    }

    #[test]
    fn test_worship_names_a_real_god() {
        let mut rng = GameRng::new(7);
        for _ in 0..20 {
            let features = defaults(&ctx(15), &mut rng);
            let god = features
                .iter()
                .find_map(|feature| match feature {
                    Feature::Talent(t) => t.strip_prefix("worshipper of "),
                    _ => None,
                })
                .unwrap();
            assert!(
                data::LAWFUL_GODS.contains(&god) || data::NEUTRAL_GODS.contains(&god),
                "unknown god: {god}"
            );
        }
    }

    #[test]
    fn test_roll_bands() {
        let mut rng = GameRng::new(2);
        let context = ctx(15);
        assert_eq!(
            per_roll(4, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)]
        );
        assert_eq!(
            per_roll(8, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::ClericSpellcasting, 1)]
        );
        assert_eq!(
            per_roll(12, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::ClericSpellcasting, 1)]
        );
        assert_eq!(
            per_roll(10, &context, &mut rng),
            vec![Feature::StatIncrease(Ability::Wisdom, 2)]
        );
        assert_eq!(
            per_roll(10, &ctx(18), &mut rng),
            vec![Feature::StatIncrease(Ability::Strength, 2)]
        );
    }

    #[test]
    fn test_mastery_roll_picks_a_known_spell() {
        let mut rng = GameRng::new(3);
        let mut context = ctx(15);
        context.apply_all(defaults(&context, &mut rng));
        let features = per_roll(2, &context, &mut rng);
        let Feature::SpellMastery(spell) = &features[0] else {
            panic!("expected a mastery feature");
        };
        assert!(context.knows_spell(spell));
    }
}
