//! CLI frontend for the Nebenfigur NPC generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nf",
    about = "Nebenfigur — a tabletop NPC generator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll one or more random NPCs
    Roll(RollArgs),

    /// Show the catalog pools
    Tables {
        /// Section to list in full; summary of all sections when omitted
        section: Option<String>,

        /// Catalog YAML file (built-in catalog when omitted)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Validate a catalog YAML file
    Check {
        /// Catalog file to validate
        file: PathBuf,
    },
}

#[derive(Args)]
struct RollArgs {
    /// Number of NPCs to generate
    #[arg(short, long, default_value = "1")]
    number: usize,

    /// Detail level: physical/personality traits per NPC; a class is
    /// only assigned from detail 2 up
    #[arg(short, long, default_value = "2")]
    detail: usize,

    /// RNG seed for reproducible output (drawn from OS entropy when
    /// omitted; the effective seed is reported on stderr)
    #[arg(long)]
    seed: Option<u64>,

    /// Keep only races containing this substring (repeatable)
    #[arg(long = "race", value_name = "TERM")]
    races: Vec<String>,

    /// Drop races containing this substring (repeatable)
    #[arg(long = "exclude-race", value_name = "TERM")]
    exclude_races: Vec<String>,

    /// Keep only ages containing this substring (repeatable)
    #[arg(long = "age", value_name = "TERM")]
    ages: Vec<String>,

    /// Drop ages containing this substring (repeatable)
    #[arg(long = "exclude-age", value_name = "TERM")]
    exclude_ages: Vec<String>,

    /// Keep only classes containing this substring (repeatable)
    #[arg(long = "class", value_name = "TERM")]
    classes: Vec<String>,

    /// Drop classes containing this substring (repeatable)
    #[arg(long = "exclude-class", value_name = "TERM")]
    exclude_classes: Vec<String>,

    /// Generate commoners: never assign a class
    #[arg(long)]
    commoners: bool,

    /// Emit the batch as pretty-printed JSON
    #[arg(long)]
    json: bool,

    /// Catalog YAML file (built-in catalog when omitted)
    #[arg(long)]
    data: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll(args) => commands::roll::run(args),
        Commands::Tables { section, data } => {
            commands::tables::run(section.as_deref(), data.as_deref())
        }
        Commands::Check { file } => commands::check::run(&file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
