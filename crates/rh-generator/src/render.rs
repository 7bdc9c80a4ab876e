//! Chat-ready rendering of character sheets.

use rh_mechanics::{Attribute, CHART_MAX, bonuses_for};

use crate::error::GenResult;
use crate::sheet::CharacterSheet;

/// Render one attribute line: abbreviation, score, bonuses, cap note.
fn attribute_line(attribute: Attribute, score: u32) -> GenResult<String> {
    let bonuses = bonuses_for(attribute, score)?;

    let mut line = if bonuses.is_empty() {
        format!("{attribute}: {score}")
    } else {
        let parts: Vec<String> = bonuses.iter().map(|bonus| bonus.to_string()).collect();
        format!("{attribute}: {score} ({})", parts.join(", "))
    };
    if score > CHART_MAX {
        line.push_str(" (bonuses capped @30)");
    }
    Ok(line)
}

/// Render a sheet as a markdown chat message.
///
/// Every attribute appears with its score; chart bonuses follow in
/// parentheses. A bonus chart error propagates rather than producing a
/// partial sheet.
pub fn render_sheet(sheet: &CharacterSheet) -> GenResult<String> {
    let mut lines = Vec::new();

    if let Some(name) = &sheet.name {
        lines.push(format!("**{name}**"));
    }

    lines.push("**Attributes**".to_string());
    for entry in &sheet.attributes {
        lines.push(attribute_line(entry.attribute, entry.score)?);
    }

    lines.push(String::new());
    lines.push(format!(
        "**Animal Type**: {} (Habitat: {}; rolls {}/{})",
        sheet.animal.animal, sheet.animal.habitat, sheet.animal.habitat_roll, sheet.animal.animal_roll
    ));

    lines.push(String::new());
    lines.push(format!(
        "**Mutant Background**: {} (roll {})",
        sheet.background.background, sheet.background.roll
    ));
    lines.push(format!("*{}*", sheet.background.background.summary()));

    Ok(lines.join("\n"))
}
