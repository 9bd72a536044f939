//! Markdown rendering for finished character sheets
//!
//! Pure formatting over the generator's output types. One sheet renders to
//! a stand-alone document; a party joins its sheets with a horizontal rule.

use sd_core::{Ability, Character, CharacterSheet};

/// Renders one sheet as a markdown document with a trailing newline.
pub fn render_markdown(sheet: &CharacterSheet) -> String {
    let character = &sheet.character;
    let mut sections = vec![
        format!(
            "# {}, {} {}",
            character.name, character.race, character.class
        ),
        format!("HP: {}", character.hit_points),
        stat_block(character),
        bullet_section("Languages", character.languages.iter().map(String::as_str)),
        bullet_section("Talents", character.talents.iter().map(String::as_str)),
    ];
    if !character.spells.is_empty() {
        sections.push(bullet_section(
            "Spells",
            character.spells.iter().map(String::as_str),
        ));
    }
    sections.push(bullet_section("Gear", sheet.gear.iter().map(String::as_str)));

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

/// Renders a party as sheets separated by `---` rules.
pub fn render_party(party: &[CharacterSheet]) -> String {
    let sheets: Vec<String> = party.iter().map(render_markdown).collect();
    sheets.join("\n---\n")
}

fn stat_block(character: &Character) -> String {
    let mut block = String::from("```\n");
    for ability in Ability::ALL {
        let score = character.scores.get(ability);
        let modifier = character.scores.modifier_of(ability);
        block.push_str(&format!("{}: {score:<3}{modifier:+}\n", ability.label()));
    }
    block.push_str("```");
    block
}

fn bullet_section<'a>(title: &str, entries: impl Iterator<Item = &'a str>) -> String {
    let mut sorted: Vec<&str> = entries.collect();
    sorted.sort_unstable();
    let bullets: Vec<String> = sorted.iter().map(|entry| format!("* {entry}")).collect();
    format!("## {title}\n\n{}", bullets.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use sd_core::{
        generate_sheet, AbilityScores, CharacterClass, GameRng, Limits, Race,
    };

    use super::*;

    fn sample_sheet() -> CharacterSheet {
        let character = Character {
            race: Race::Dwarf,
            class: CharacterClass::Fighter,
            scores: AbilityScores::new(14, 9, 12, 10, 11, 8),
            hit_points: 9,
            spells: BTreeSet::new(),
            talents: vec![
                "weapon mastery: greataxe".to_string(),
                "hauler: add con mod, if positive to gear slots".to_string(),
            ],
            languages: ["common", "dwarvish"]
                .into_iter()
                .map(String::from)
                .collect(),
            name: "Hilde".to_string(),
        };
        CharacterSheet {
            character,
            gear: vec![
                "greataxe".to_string(),
                "backpack".to_string(),
                "45 gold pieces".to_string(),
            ],
        }
    }

    #[test]
    fn test_title_line() {
        let document = render_markdown(&sample_sheet());
        assert!(document.starts_with("# Hilde, dwarf fighter\n"));
    }

    #[test]
    fn test_stat_lines_are_column_aligned() {
        let document = render_markdown(&sample_sheet());
        assert!(document.contains("STR: 14 +2\n"));
        assert!(document.contains("DEX: 9  -1\n"));
        assert!(document.contains("CON: 12 +1\n"));
        assert!(document.contains("CHA: 8  -1\n"));
    }

    #[test]
    fn test_stat_block_is_fenced() {
        let document = render_markdown(&sample_sheet());
        assert!(document.contains("```\nSTR:"));
        assert!(document.contains("CHA: 8  -1\n```\n"));
    }

    #[test]
    fn test_sections_sort_their_bullets() {
        let document = render_markdown(&sample_sheet());
        assert!(document.contains("## Languages\n\n* common\n* dwarvish\n"));
        assert!(document.contains(
            "## Talents\n\n* hauler: add con mod, if positive to gear slots\n\
             * weapon mastery: greataxe\n"
        ));
        assert!(document.contains("## Gear\n\n* 45 gold pieces\n* backpack\n* greataxe\n"));
    }

    #[test]
    fn test_spells_section_omitted_when_empty() {
        let document = render_markdown(&sample_sheet());
        assert!(!document.contains("## Spells"));

        let mut sheet = sample_sheet();
        sheet.character.spells.insert("magic missile".to_string());
        let document = render_markdown(&sheet);
        assert!(document.contains("## Spells\n\n* magic missile\n"));
    }

    #[test]
    fn test_document_ends_with_single_newline() {
        let document = render_markdown(&sample_sheet());
        assert!(document.ends_with('\n'));
        assert!(!document.ends_with("\n\n"));
    }

    #[test]
    fn test_party_sheets_join_with_a_rule() {
        let sheets = [sample_sheet(), sample_sheet()];
        let party = render_party(&sheets);
        assert_eq!(party.matches("\n---\n# Hilde").count(), 1);
    }

    #[test]
    fn test_generated_sheet_renders() {
        let sheet = generate_sheet(&mut GameRng::new(99), &Limits::default()).unwrap();
        let document = render_markdown(&sheet);
        assert!(document.contains("HP: "));
        assert!(document.contains("## Gear"));
        assert!(document.contains(" gold pieces"));
    }
}
