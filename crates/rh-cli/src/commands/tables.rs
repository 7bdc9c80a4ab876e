use std::fmt::Display;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use rh_generator::animal::HABITATS;
use rh_generator::background::BACKGROUNDS;
use rh_generator::{Habitat, RangeTable};

pub fn run() -> Result<(), String> {
    print_table("Habitat (step one)", HABITATS);
    for habitat in Habitat::ALL {
        print_table(&format!("{habitat} animals"), habitat.animals());
    }
    print_table("Mutant background (step three)", BACKGROUNDS);
    Ok(())
}

/// Print a d100 table with one row per span.
fn print_table<T: Copy + Display>(title: &str, table: RangeTable<T>) {
    println!("  {}", title.bold());

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Roll", "Result"]);

    for row in table.rows {
        let span = if row.lo == row.hi {
            row.lo.to_string()
        } else {
            format!("{}-{}", row.lo, row.hi)
        };
        out.add_row(vec![span, row.value.to_string()]);
    }

    println!("{out}");
    println!();
}
