use colored::Colorize;

use rh_generator::validate_tables;

pub fn run() -> Result<(), String> {
    let issues = validate_tables();

    if issues.is_empty() {
        println!(
            "  {} all tables cover 1-100 and the bonus chart covers 16-30",
            "OK".green().bold()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{issue}");
    }

    let errors = issues.iter().filter(|issue| issue.is_error).count();
    if errors > 0 {
        Err(format!("{errors} table error(s) found"))
    } else {
        Ok(())
    }
}
