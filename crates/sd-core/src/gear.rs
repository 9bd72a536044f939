//! Weapons, money and the equipment pass
//!
//! Money is tracked in whole copper pieces (1 gold = 100 copper) so the
//! half-gold weapon prices stay exact. The allocator is a fixed greedy
//! sequence: kit, weapon, shield, leather, then the leftover gold line.

use std::fmt;
use std::ops::SubAssign;

use serde::{Deserialize, Serialize};

use crate::ability::{modifier, AbilityScores};
use crate::classes::CharacterClass;
use crate::data;
use crate::dice::Dice;
use crate::race::Race;
use crate::rng::GameRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weapon {
    Shortsword,
    Longsword,
    BastardSword,
    Greataxe,
    Greatsword,
    Longbow,
    Dagger,
    Mace,
    Club,
    Staff,
    Spear,
}

impl Weapon {
    pub const fn name(&self) -> &'static str {
        match self {
            Weapon::Shortsword => "shortsword",
            Weapon::Longsword => "longsword",
            Weapon::BastardSword => "bastard sword",
            Weapon::Greataxe => "greataxe",
            Weapon::Greatsword => "greatsword",
            Weapon::Longbow => "longbow",
            Weapon::Dagger => "dagger",
            Weapon::Mace => "mace",
            Weapon::Club => "club",
            Weapon::Staff => "staff",
            Weapon::Spear => "spear",
        }
    }

    pub const fn price(&self) -> Coins {
        match self {
            Weapon::Shortsword => Coins::gp(7),
            Weapon::Longsword => Coins::gp(9),
            Weapon::BastardSword => Coins::gp(10),
            Weapon::Greataxe => Coins::gp(10),
            Weapon::Greatsword => Coins::gp(12),
            Weapon::Longbow => Coins::gp(8),
            Weapon::Dagger => Coins::gp(1),
            Weapon::Mace => Coins::gp(5),
            Weapon::Club => Coins::cp(5),
            Weapon::Staff => Coins::sp(5),
            Weapon::Spear => Coins::sp(5),
        }
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An amount of money, stored as copper pieces
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Coins(u32);

impl Coins {
    pub const fn gp(gold: u32) -> Self {
        Self(gold * 100)
    }

    pub const fn sp(silver: u32) -> Self {
        Self(silver * 10)
    }

    pub const fn cp(copper: u32) -> Self {
        Self(copper)
    }

    pub const fn copper(&self) -> u32 {
        self.0
    }
}

impl SubAssign for Coins {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Coins {
    /// Prints in gold units: whole amounts bare, fractions exact
    /// ("45", "49.5", "49.95")
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gold = self.0 / 100;
        let rem = self.0 % 100;
        if rem == 0 {
            write!(f, "{gold}")
        } else if rem % 10 == 0 {
            write!(f, "{gold}.{}", rem / 10)
        } else {
            write!(f, "{gold}.{rem:02}")
        }
    }
}

/// Race-specific weapon substitutions, applied after the affordability pick.
/// Replacement price always equals the preferred price.
static WEAPON_SWAPS: &[(Race, Weapon, Weapon)] =
    &[(Race::Dwarf, Weapon::BastardSword, Weapon::Greataxe)];

fn swap_for_race(race: Race, weapon: Weapon) -> Weapon {
    WEAPON_SWAPS
        .iter()
        .find(|(swap_race, preferred, _)| *swap_race == race && *preferred == weapon)
        .map(|(_, _, replacement)| *replacement)
        .unwrap_or(weapon)
}

const STARTING_GOLD: Dice = Dice::new(2, 6);
const SHIELD_PRICE: Coins = Coins::gp(10);
const LEATHER_PRICE: Coins = Coins::gp(10);
const KIT_THRESHOLD: Coins = Coins::gp(7);

/// Carry capacity in gear slots
///
/// Base is `max(10, strength)`; fighters add their constitution modifier
/// when it is positive.
pub fn gear_slots(scores: &AbilityScores, class: CharacterClass) -> u32 {
    let base = scores.strength.max(10) as u32;
    let hauler = if matches!(class, CharacterClass::Fighter) {
        modifier(scores.constitution).max(0) as u32
    } else {
        0
    };
    base + hauler
}

/// Roll starting gold and run the purchase sequence
///
/// Returns the final gear list (ending with the leftover-gold line) and the
/// final carried weight.
pub fn allocate(
    scores: &AbilityScores,
    class: CharacterClass,
    race: Race,
    gear: Vec<String>,
    weight: u32,
    rng: &mut GameRng,
) -> (Vec<String>, u32) {
    let gold = Coins::gp(STARTING_GOLD.roll(rng) * 5);
    allocate_with_gold(scores, class, race, gear, weight, gold)
}

/// The purchase sequence with a known starting purse
///
/// Order is fixed: kit, weapon, shield, leather. Every step checks gold and
/// capacity as they stand at that step; nothing backtracks.
pub fn allocate_with_gold(
    scores: &AbilityScores,
    class: CharacterClass,
    race: Race,
    mut gear: Vec<String>,
    mut weight: u32,
    mut gold: Coins,
) -> (Vec<String>, u32) {
    let capacity = gear_slots(scores, class);

    // The kit is granted, not bought: gold gates it but is not spent, and
    // it never counts against capacity.
    if gold >= KIT_THRESHOLD {
        gear.extend(data::CRAWLING_KIT.iter().map(|item| (*item).to_string()));
        weight += data::CRAWLING_KIT.len() as u32;
    }

    let preferences = class.rules().weapons;
    let weapon = match preferences.iter().copied().find(|w| w.price() <= gold) {
        Some(weapon) => weapon,
        None => panic!("no affordable weapon for {class} with {gold} gold"),
    };
    if weight < capacity {
        let weapon = swap_for_race(race, weapon);
        gear.push(weapon.name().to_string());
        weight += 1;
        gold -= weapon.price();
    }

    if class.buys_shield() && gold >= SHIELD_PRICE && weight < capacity {
        gear.push("shield".to_string());
        weight += 1;
        gold -= SHIELD_PRICE;
    }

    if class.buys_leather() && gold >= LEATHER_PRICE && weight < capacity {
        gear.push("leather armor".to_string());
        weight += 1;
        gold -= LEATHER_PRICE;
    }

    gear.push(format!("{gold} gold pieces"));
    (gear, weight)
}
