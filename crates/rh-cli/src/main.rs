//! CLI frontend for the Road Hogs character generator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "roadhogs",
    about = "Road Hogs mutant animal character generator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one or more random character sheets
    Roll {
        /// RNG seed for a reproducible sheet
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of sheets to roll
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Character name to print on the sheet
        #[arg(short, long)]
        name: Option<String>,

        /// Emit JSON instead of a formatted sheet
        #[arg(long)]
        json: bool,
    },

    /// Print the habitat, animal, and background tables
    Tables,

    /// Validate the shipped table data
    Check,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            seed,
            count,
            name,
            json,
        } => commands::roll::run(seed, count, name.as_deref(), json),
        Commands::Tables => commands::tables::run(),
        Commands::Check => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
