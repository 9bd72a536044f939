//! Warlock rules, one rule set per patron
//!
//! All pacts share the warlock chassis (d6 hit die, the same weapon
//! preferences, any race) and differ only in their roll tables. Almazzat,
//! Kytheros and Titania reject an all-10/11 roll set: both of their 10..=11
//! outcomes are fixed sentences, and a doubled sentence is not allowed.

use super::{learn_new_spell, never_rerolls, raise_stat_or, CharacterClass, ClassRules, Patron};
use crate::ability::Ability;
use crate::context::FeatureContext;
use crate::data;
use crate::dice::Dice;
use crate::feature::{BonusKind, DamageType, Feature};
use crate::gear::Weapon;
use crate::race::Race;
use crate::rng::GameRng;

const WEAPONS: &[Weapon] = &[Weapon::Longsword, Weapon::Mace, Weapon::Dagger, Weapon::Club];
const RACES: &[Race] = &[
    Race::Human,
    Race::HalfOrc,
    Race::Dwarf,
    Race::Elf,
    Race::Goblin,
    Race::Halfling,
];
const HIT_DIE: Dice = Dice::new(1, 6);

pub(super) fn rules(patron: Patron) -> &'static ClassRules {
    match patron {
        Patron::Mugdulblub => &MUGDULBLUB,
        Patron::Almazzat => &ALMAZZAT,
        Patron::Kytheros => &KYTHEROS,
        Patron::ShuneTheVile => &SHUNE,
        Patron::Titania => &TITANIA,
        Patron::TheWillowman => &WILLOWMAN,
    }
}

static MUGDULBLUB: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: never_rerolls,
    defaults: pact_defaults,
    per_roll: mugdulblub_roll,
};

static ALMAZZAT: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: all_mid_rolls,
    defaults: pact_defaults,
    per_roll: almazzat_roll,
};

static KYTHEROS: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: all_mid_rolls,
    defaults: pact_defaults,
    per_roll: kytheros_roll,
};

static SHUNE: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: never_rerolls,
    defaults: pact_defaults,
    per_roll: shune_roll,
};

static TITANIA: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: all_mid_rolls,
    defaults: pact_defaults,
    per_roll: titania_roll,
};

static WILLOWMAN: ClassRules = ClassRules {
    hit_die: HIT_DIE,
    weapons: WEAPONS,
    races: RACES,
    reroll: never_rerolls,
    defaults: pact_defaults,
    per_roll: willowman_roll,
};

/// A roll set landing entirely in 10..=11 would duplicate a fixed talent
fn all_mid_rolls(rolls: &[u32]) -> bool {
    rolls.iter().all(|&roll| matches!(roll, 10 | 11))
}

fn pact_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let CharacterClass::Warlock(patron) = ctx.class() else {
        panic!("pact defaults invoked for {}", ctx.class());
    };
    vec![Feature::talent(format!("warlock of {patron}"))]
}

fn mugdulblub_roll(roll: u32, ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::talent(
            "1/day, turn into a crawling puddle of slime for 3 rounds",
        )],
        3..=7 => vec![Feature::Bonus(BonusKind::MaximizedHitDice, 2)],
        8..=9 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Constitution],
            Feature::StatIncrease(Ability::Dexterity, 2),
        )],
        10..=11 => {
            let immunity = *rng
                .choose(&DamageType::ALL)
                .expect("damage type table is empty");
            vec![Feature::Immunity(immunity)]
        }
        _ => panic!("talent roll out of range: {roll}"),
    }
}

fn almazzat_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::Bonus(BonusKind::MeleeAdvantage, 1)],
        3..=7 => vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)],
        8..=9 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Strength],
            Feature::Bonus(BonusKind::MeleeAttacks, 1),
        )],
        10..=11 => vec![Feature::talent("advantage on initiative rolls")],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

fn kytheros_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::Bonus(BonusKind::GmReroll, 1)],
        3..=7 => vec![Feature::Bonus(BonusKind::ArmorClass, 1)],
        8..=9 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Wisdom, Ability::Dexterity],
            Feature::StatIncrease(Ability::Strength, 2),
        )],
        10..=11 => vec![Feature::talent("3/day, add WIS bonus to any roll")],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

fn shune_roll(roll: u32, ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::Bonus(BonusKind::MindReading, 1)],
        3..=7 | 12 => vec![learn_new_spell(ctx, data::WIZARD_SPELLS, rng)],
        8..=9 => vec![raise_stat_or(
            ctx,
            &[Ability::Intelligence],
            Feature::StatIncrease(Ability::Dexterity, 2),
        )],
        10..=11 => vec![Feature::Bonus(BonusKind::SecretXp, 1)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

fn titania_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::talent(
            "1/day, hypnotize a 5 HD or less creature for 3 rounds",
        )],
        3..=7 => {
            // A second grant becomes a flat ranged bonus
            if ctx.has_weapon_proficiency(Weapon::Longbow) {
                vec![Feature::Bonus(BonusKind::RangedAttacks, 1)]
            } else {
                vec![Feature::WeaponProficiency(Weapon::Longbow)]
            }
        }
        8..=9 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Dexterity],
            Feature::StatIncrease(Ability::Charisma, 2),
        )],
        10..=11 => vec![Feature::talent(
            "hostile spells that target you are hard to cast",
        )],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

fn willowman_roll(roll: u32, ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => vec![Feature::Bonus(BonusKind::FarTeleport, 1)],
        3..=7 => vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)],
        8..=9 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Strength],
            Feature::StatIncrease(Ability::Dexterity, 2),
        )],
        10..=11 => vec![Feature::Bonus(BonusKind::MoraleCheck, 1)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityScores;

    fn ctx(patron: Patron) -> FeatureContext {
        FeatureContext::new(
            Race::Human,
            CharacterClass::Warlock(patron),
            AbilityScores::new(10, 10, 10, 10, 10, 10),
        )
    }

    #[test]
    fn test_pact_talent_names_the_patron() {
        let mut rng = GameRng::new(1);
        for patron in Patron::ALL {
            let features = pact_defaults(&ctx(patron), &mut rng);
            assert_eq!(
                features,
                vec![Feature::talent(format!("warlock of {patron}"))]
            );
        }
    }

    #[test]
    fn test_mid_roll_rejection_applies_to_the_fixed_talent_pacts() {
        assert!(all_mid_rolls(&[10, 11]));
        assert!(all_mid_rolls(&[11]));
        assert!(!all_mid_rolls(&[10, 9]));

        for patron in [Patron::Almazzat, Patron::Kytheros, Patron::Titania] {
            let reroll = rules(patron).reroll;
            assert!(reroll(&[10, 10]), "{patron} must reject doubled 10s");
        }
        for patron in [Patron::Mugdulblub, Patron::ShuneTheVile, Patron::TheWillowman] {
            let reroll = rules(patron).reroll;
            assert!(!reroll(&[10, 10]), "{patron} never rerolls");
        }
    }

    #[test]
    fn test_mugdulblub_immunity_draw() {
        let mut rng = GameRng::new(2);
        let context = ctx(Patron::Mugdulblub);
        for _ in 0..10 {
            let features = mugdulblub_roll(10, &context, &mut rng);
            assert!(matches!(features[0], Feature::Immunity(_)));
        }
        assert_eq!(
            mugdulblub_roll(5, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::MaximizedHitDice, 2)]
        );
    }

    #[test]
    fn test_titania_longbow_then_ranged_bonus() {
        let mut rng = GameRng::new(3);
        let mut context = ctx(Patron::Titania);
        let first = titania_roll(5, &context, &mut rng);
        assert_eq!(first, vec![Feature::WeaponProficiency(Weapon::Longbow)]);
        context.apply_all(first);
        let second = titania_roll(5, &context, &mut rng);
        assert_eq!(second, vec![Feature::Bonus(BonusKind::RangedAttacks, 1)]);
    }

    #[test]
    fn test_shune_teaches_wizard_spells() {
        let mut rng = GameRng::new(4);
        let context = ctx(Patron::ShuneTheVile);
        for _ in 0..10 {
            let features = shune_roll(5, &context, &mut rng);
            let Feature::Spell(spell) = &features[0] else {
                panic!("expected a spell");
            };
            assert!(data::WIZARD_SPELLS.contains(&spell.as_str()));
        }
    }

    #[test]
    fn test_almazzat_capped_strength_falls_back_to_melee() {
        let mut rng = GameRng::new(5);
        let mut context = ctx(Patron::Almazzat);
        context.apply(Feature::StatIncrease(Ability::Strength, 8));
        assert_eq!(
            almazzat_roll(8, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::MeleeAttacks, 1)]
        );
    }

    #[test]
    fn test_willowman_bands() {
        let mut rng = GameRng::new(6);
        let context = ctx(Patron::TheWillowman);
        assert_eq!(
            willowman_roll(2, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::FarTeleport, 1)]
        );
        assert_eq!(
            willowman_roll(11, &context, &mut rng),
            vec![Feature::Bonus(BonusKind::MoraleCheck, 1)]
        );
    }

    #[test]
    fn test_every_pact_accepts_any_race() {
        for patron in Patron::ALL {
            assert_eq!(rules(patron).races.len(), Race::ALL.len());
        }
    }
}
