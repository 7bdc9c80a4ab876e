use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rh_generator::{CharacterSheet, Generator};
use rh_mechanics::{CHART_MAX, bonuses_for};

pub fn run(seed: Option<u64>, count: u32, name: Option<&str>, json: bool) -> Result<(), String> {
    let mut generator = match seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::new(),
    };

    for i in 0..count {
        let sheet = generator.generate(name).map_err(|e| e.to_string())?;

        if json {
            let out = serde_json::to_string_pretty(&sheet).map_err(|e| e.to_string())?;
            println!("{out}");
        } else {
            print_sheet(&sheet)?;
        }

        if i + 1 < count {
            println!();
        }
    }

    Ok(())
}

/// Print one sheet with the attribute block as a table.
fn print_sheet(sheet: &CharacterSheet) -> Result<(), String> {
    if let Some(name) = &sheet.name {
        println!("  {}", name.bold());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Score", "Bonuses"]);

    for entry in &sheet.attributes {
        let bonuses = bonuses_for(entry.attribute, entry.score).map_err(|e| e.to_string())?;
        let mut notes: Vec<String> = bonuses.iter().map(|bonus| bonus.to_string()).collect();
        if entry.score > CHART_MAX {
            notes.push("capped @30".to_string());
        }
        table.add_row(vec![
            entry.attribute.to_string(),
            entry.score.to_string(),
            notes.join(", "),
        ]);
    }

    println!("{table}");
    println!(
        "  {} {} (Habitat: {}; rolls {}/{})",
        "Animal:".bold(),
        sheet.animal.animal,
        sheet.animal.habitat,
        sheet.animal.habitat_roll,
        sheet.animal.animal_roll
    );
    println!(
        "  {} {} (roll {})",
        "Background:".bold(),
        sheet.background.background,
        sheet.background.roll
    );
    println!("  {}", sheet.background.background.summary().italic());

    Ok(())
}
