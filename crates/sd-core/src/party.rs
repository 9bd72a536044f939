//! Party generation

use crate::character::CharacterSheet;
use crate::generator::{generate_sheet, GenError, Limits};
use crate::rng::GameRng;

/// Generate a party of `size` members
///
/// With `unique_classes` set, candidates repeating an already-present base
/// archetype (all warlock pacts count as one) are discarded and rerolled.
/// Requesting more unique members than there are archetypes (7) never
/// terminates unless `limits.party_attempts` caps it; that trade-off is the
/// caller's.
pub fn generate_party(
    rng: &mut GameRng,
    size: usize,
    unique_classes: bool,
    limits: &Limits,
) -> Result<Vec<CharacterSheet>, GenError> {
    let mut members: Vec<CharacterSheet> = Vec::with_capacity(size);
    let mut attempts = 0u32;
    while members.len() < size {
        if let Some(limit) = limits.party_attempts {
            if attempts >= limit {
                return Err(GenError::PartyAttemptsExhausted { size, limit });
            }
        }
        attempts += 1;
        let candidate = generate_sheet(rng, limits)?;
        if unique_classes
            && members
                .iter()
                .any(|member| member.character.class.same_archetype(&candidate.character.class))
        {
            continue;
        }
        members.push(candidate);
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_party_has_distinct_archetypes() {
        let mut rng = GameRng::new(404);
        let party = generate_party(&mut rng, 4, true, &Limits::default()).unwrap();
        assert_eq!(party.len(), 4);
        for (i, a) in party.iter().enumerate() {
            for b in &party[i + 1..] {
                assert!(
                    !a.character.class.same_archetype(&b.character.class),
                    "duplicate archetype {} in a unique party",
                    a.character.class
                );
            }
        }
    }

    #[test]
    fn test_duplicates_allowed_when_asked() {
        let mut rng = GameRng::new(405);
        // Nine members cannot all be distinct archetypes, so this only
        // terminates because the filter is off
        let party = generate_party(&mut rng, 9, false, &Limits::default()).unwrap();
        assert_eq!(party.len(), 9);
    }

    #[test]
    fn test_party_attempt_cap_errors() {
        let mut rng = GameRng::new(406);
        let limits = Limits {
            party_attempts: Some(0),
            ..Limits::default()
        };
        let result = generate_party(&mut rng, 2, true, &limits);
        assert!(matches!(
            result,
            Err(GenError::PartyAttemptsExhausted { size: 2, limit: 0 })
        ));
    }

    #[test]
    fn test_seeded_party_is_reproducible() {
        let a = generate_party(&mut GameRng::new(11), 3, true, &Limits::default()).unwrap();
        let b = generate_party(&mut GameRng::new(11), 3, true, &Limits::default()).unwrap();
        assert_eq!(a, b);
    }
}
