//! The generation pipeline
//!
//! One character consumes RNG draws in a fixed order, so a seed fully
//! determines the sheet:
//!
//! 1. six 3d6 stat rolls (strength through charisma), repeated until a 14
//!    shows up somewhere;
//! 2. the race draw from the class's pool;
//! 3. the talent-roll set (2d6 each, two for humans), repeated while the
//!    class's reroll predicate rejects it;
//! 4. race default features, then class default features, then the per-roll
//!    features in roll order, each producer seeing the accumulator as the
//!    earlier ones left it;
//! 5. finalization: grant rendering, the background draw, the wizard's
//!    bonus languages;
//! 6. the gold roll and purchase sequence;
//! 7. the hit-point roll;
//! 8. the name draw.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ability::{modifier, AbilityScores};
use crate::character::{Character, CharacterSheet};
use crate::classes::{choose_class, wizard, CharacterClass};
use crate::context::FeatureContext;
use crate::data;
use crate::dice::{Dice, RollMode};
use crate::feature::Feature;
use crate::gear;
use crate::race::Race;
use crate::rng::GameRng;

const STAT_DICE: Dice = Dice::new(3, 6);
const TALENT_DICE: Dice = Dice::new(2, 6);

/// Optional caps on the pipeline's retry loops
///
/// All loops terminate with probability 1; the caps exist for callers that
/// would rather fail than spin on an adversarial predicate. `None` means
/// unbounded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Limits {
    /// Attempts to roll a stat block containing a 14
    pub stat_attempts: Option<u32>,
    /// Attempts to roll an acceptable talent-roll set
    pub talent_attempts: Option<u32>,
    /// Candidate characters drawn while filling a unique party
    pub party_attempts: Option<u32>,
}

/// Generation failure: a retry loop hit its configured cap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("no stat block with a 14 after {limit} attempts")]
    StatAttemptsExhausted { limit: u32 },
    #[error("talent rolls for {class} still rejected after {limit} attempts")]
    TalentAttemptsExhausted { class: CharacterClass, limit: u32 },
    #[error("party of {size} distinct classes not filled after {limit} candidates")]
    PartyAttemptsExhausted { size: usize, limit: u32 },
}

/// Roll 3d6 six times until at least one score is 14 or better
pub fn roll_ability_scores(
    rng: &mut GameRng,
    limits: &Limits,
) -> Result<AbilityScores, GenError> {
    let mut attempts = 0u32;
    loop {
        if let Some(limit) = limits.stat_attempts {
            if attempts >= limit {
                return Err(GenError::StatAttemptsExhausted { limit });
            }
        }
        attempts += 1;
        let scores = AbilityScores::new(
            STAT_DICE.roll(rng) as i8,
            STAT_DICE.roll(rng) as i8,
            STAT_DICE.roll(rng) as i8,
            STAT_DICE.roll(rng) as i8,
            STAT_DICE.roll(rng) as i8,
            STAT_DICE.roll(rng) as i8,
        );
        if scores.any_at_least(14) {
            return Ok(scores);
        }
    }
}

/// Roll the talent-roll set, rerolling while the class rejects it
///
/// The predicate is only consulted for multi-roll sets; a single roll is
/// always accepted.
fn roll_talent_set(
    race: Race,
    class: CharacterClass,
    rng: &mut GameRng,
    limits: &Limits,
) -> Result<Vec<u32>, GenError> {
    let reroll = class.rules().reroll;
    let mut attempts = 0u32;
    loop {
        if let Some(limit) = limits.talent_attempts {
            if attempts >= limit {
                return Err(GenError::TalentAttemptsExhausted { class, limit });
            }
        }
        attempts += 1;
        let rolls: Vec<u32> = (0..race.talent_rolls())
            .map(|_| TALENT_DICE.roll(rng))
            .collect();
        if rolls.len() == 1 || !reroll(&rolls) {
            return Ok(rolls);
        }
    }
}

/// Generate one complete character sheet
pub fn generate_sheet(rng: &mut GameRng, limits: &Limits) -> Result<CharacterSheet, GenError> {
    let scores = roll_ability_scores(rng, limits)?;
    let class = choose_class(&scores);
    let rules = class.rules();
    let race = *rng.choose(rules.races).expect("class has an empty race pool");
    let rolls = roll_talent_set(race, class, rng, limits)?;

    let mut ctx = FeatureContext::new(race, class, scores);
    let features = (race.rules().defaults)(&ctx, rng);
    ctx.apply_all(features);
    let features = (rules.defaults)(&ctx, rng);
    ctx.apply_all(features);
    for &roll in &rolls {
        let features = (rules.per_roll)(roll, &ctx, rng);
        ctx.apply_all(features);
    }

    ctx.render_grants();
    let background = *rng
        .choose(data::BACKGROUNDS)
        .expect("background table is empty");
    ctx.apply(Feature::talent(background));
    if matches!(class, CharacterClass::Wizard) {
        let languages = wizard::bonus_languages(&ctx, rng);
        ctx.apply_all(languages);
    }
    ctx.assert_talents_unique();

    let FeatureContext {
        scores,
        languages,
        spells,
        talents,
        gear,
        weight,
        ..
    } = ctx;
    let (gear, _) = gear::allocate(&scores, class, race, gear, weight, rng);

    let hit_points = roll_hit_points(class, race, &scores, rng);
    let name = (*rng
        .choose(race.rules().names)
        .expect("race has an empty name pool"))
    .to_string();

    Ok(CharacterSheet {
        character: Character {
            race,
            class,
            scores,
            hit_points,
            spells,
            talents,
            languages,
            name,
        },
        gear,
    })
}

/// Hit die (dwarves roll it with advantage) plus at least 1 from
/// constitution
fn roll_hit_points(
    class: CharacterClass,
    race: Race,
    scores: &AbilityScores,
    rng: &mut GameRng,
) -> i32 {
    let mode = if race == Race::Dwarf {
        RollMode::Advantage
    } else {
        RollMode::Normal
    };
    let roll = class.rules().hit_die.roll_with(rng, mode) as i32;
    roll + i32::from(modifier(scores.constitution)).max(1)
}
