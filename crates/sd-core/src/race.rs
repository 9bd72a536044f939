//! Races and their fixed rules
//!
//! Each race carries a name pool, its native languages and a default-feature
//! producer. Humans get two talent rolls instead of one.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::classes::CharacterClass;
use crate::context::FeatureContext;
use crate::data;
use crate::feature::{Feature, FeatureProducer};
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[repr(u8)]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    HalfOrc,
    Goblin,
    Halfling,
}

/// Fixed per-race data and behavior
pub struct RaceRules {
    pub names: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub defaults: FeatureProducer,
}

impl Race {
    pub const ALL: [Race; 6] = [
        Race::Human,
        Race::Dwarf,
        Race::Elf,
        Race::HalfOrc,
        Race::Goblin,
        Race::Halfling,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Dwarf => "dwarf",
            Race::Elf => "elf",
            Race::HalfOrc => "half orc",
            Race::Goblin => "goblin",
            Race::Halfling => "halfling",
        }
    }

    /// Number of talent rolls at creation
    pub const fn talent_rolls(&self) -> usize {
        match self {
            Race::Human => 2,
            _ => 1,
        }
    }

    pub fn rules(&self) -> &'static RaceRules {
        match self {
            Race::Human => &HUMAN,
            Race::Dwarf => &DWARF,
            Race::Elf => &ELF,
            Race::HalfOrc => &HALF_ORC,
            Race::Goblin => &GOBLIN,
            Race::Halfling => &HALFLING,
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static HUMAN: RaceRules = RaceRules {
    names: &[
        "Zali", "Bram", "Clara", "Nattias", "Rina", "Denton", "Mirena", "Aran", "Morgan",
        "Giralt", "Tamra", "Oscar", "Ishana", "Rogar", "Jasmin", "Tarin", "Yuri", "Malchor",
        "Lienna", "Godfrey",
    ],
    languages: &["common"],
    defaults: human_defaults,
};

static DWARF: RaceRules = RaceRules {
    names: &[
        "Hilde", "Torbin", "Marga", "Bruno", "Karina", "Naugrim", "Brenna", "Darvin", "Elga",
        "Alric",
    ],
    languages: &["common", "dwarvish"],
    defaults: language_defaults,
};

static ELF: RaceRules = RaceRules {
    names: &[
        "Eliara", "Ryarn", "Sariel", "Tirolas", "Galira", "Varos", "Daeniel", "Axidor",
        "Hiralia", "Cyrwin",
    ],
    languages: &["common", "elvish", "sylvan"],
    defaults: elf_defaults,
};

static HALF_ORC: RaceRules = RaceRules {
    names: &["Vara", "Gralk", "Ranna", "Korv", "Zasha"],
    languages: &["common", "orchish"],
    defaults: half_orc_defaults,
};

static GOBLIN: RaceRules = RaceRules {
    names: &["Iggs", "Tark", "Nix", "Lenk", "Roke"],
    languages: &["common", "goblin"],
    defaults: goblin_defaults,
};

static HALFLING: RaceRules = RaceRules {
    names: &["Willow", "Benny", "Annie", "Tucker", "Marie"],
    languages: &["common"],
    defaults: halfling_defaults,
};

/// Language features for the context's race
fn native_languages(ctx: &FeatureContext) -> Vec<Feature> {
    ctx.race()
        .rules()
        .languages
        .iter()
        .map(|language| Feature::language(*language))
        .collect()
}

fn language_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    native_languages(ctx)
}

fn human_defaults(ctx: &FeatureContext, rng: &mut GameRng) -> Vec<Feature> {
    let mut features = native_languages(ctx);
    let extra = *rng
        .choose(data::COMMON_LANGUAGES)
        .expect("common language pool is empty");
    features.push(Feature::language(extra));
    features
}

fn elf_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let mut features = native_languages(ctx);
    let farsight = if matches!(
        ctx.class(),
        CharacterClass::Wizard | CharacterClass::Cleric
    ) {
        "farsight: +1 to spellcasting"
    } else {
        "farsight: +1 to ranged attacks"
    };
    features.push(Feature::talent(farsight));
    features
}

fn half_orc_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let mut features = native_languages(ctx);
    features.push(Feature::talent("mighty: +1 to melee attack and damage"));
    features
}

fn goblin_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let mut features = native_languages(ctx);
    features.push(Feature::talent("keen senses: can't be surprised"));
    features
}

fn halfling_defaults(ctx: &FeatureContext, _rng: &mut GameRng) -> Vec<Feature> {
    let mut features = native_languages(ctx);
    features.push(Feature::talent(
        "stealthy: 1/day can become invisible for three rounds",
    ));
    features
}
