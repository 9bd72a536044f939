//! Finished character records

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ability::AbilityScores;
use crate::classes::CharacterClass;
use crate::race::Race;

/// A finished first-level character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub race: Race,
    pub class: CharacterClass,
    pub scores: AbilityScores,
    pub hit_points: i32,
    pub spells: BTreeSet<String>,
    pub talents: Vec<String>,
    pub languages: BTreeSet<String>,
    pub name: String,
}

/// A character plus final gear: the unit handed to a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub character: Character,
    pub gear: Vec<String>,
}
