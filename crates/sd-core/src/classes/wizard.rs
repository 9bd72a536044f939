//! Wizard rules

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
    weapons: &[Weapon::Staff, Weapon::Dagger],
    races: &[Race::Human, Race::Elf],
    reroll: never_rerolls,
    defaults,
    per_roll,
};

fn defaults(_ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    starting_spells(data::WIZARD_SPELLS, &[], 3, rng)
}

fn per_roll(roll: u32, ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    match roll {
        2 => {
            let item = *rng
                .choose(data::MAGIC_ITEMS)
                .expect("magic item table is empty");
            vec![Feature::gear(item, 1)]
        }
        3..=6 | 12 => vec![raise_stat_or(
            ctx,
            &[Ability::Intelligence],
            Feature::Bonus(BonusKind::WizardSpellcasting, 1),
        )],
        7..=9 => vec![master_known_spell(ctx, rng)],
        10..=11 => vec![learn_new_spell(ctx, data::WIZARD_SPELLS, rng)],
        _ => panic!("talent roll out of range: {roll}"),
    }
}

/// Scholarly languages granted at finalization: two from the common pool
/// and two from the rare pool, each pair drawn from the languages not yet
/// known
pub(crate) fn bonus_languages(ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    let mut features = Vec::with_capacity(4);
    for pool in [data::COMMON_LANGUAGES, data::RARE_LANGUAGES] {
        let candidates: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|language| !ctx.knows_language(language))
            .collect();
        let [first, second] = rng
            .choose_two(&candidates)
            .expect("language pool exhausted");
        features.push(Feature::language(*first));
        features.push(Feature::language(*second));
    }
    features
}
