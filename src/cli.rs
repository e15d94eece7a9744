use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokedex-reports")]
#[command(version, about = "Text reports over a Pokemon game data database")]
pub struct Cli {
    /// SQLite game data database
    #[arg(short, long, env = "POKEDEX_DB", global = true)]
    pub database: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Report(ReportCommand),

    /// Check that the database has every table and column the reports read
    CheckSchema,
}

/// Subcommands that print one of the text reports
#[derive(Subcommand, Debug)]
pub enum ReportCommand {
    /// List the species a Pokemon can evolve from and into
    PossibleEvolutions {
        /// Pokemon name
        pokemon: String,
    },

    /// Summarise the Pokemon that can be encountered at a location in a game
    EncounterSummary {
        /// Location name
        location: String,

        /// Game name, without the "Pokemon" prefix
        game: String,
    },

    /// Rank the locations of a region by average Pokemon density
    PokemonDensity {
        /// Region name
        region: String,
    },

    /// Damage range of every move an attacker can use against a defender
    AttackDamage {
        /// Attacking Pokemon name
        attacker: String,

        /// Defending Pokemon name
        defender: String,

        /// Game name, without the "Pokemon" prefix
        game: String,
    },
}

impl Cli {
    /// Parse arguments, exiting with status 1 on usage errors
    pub fn parse_args() -> Self {
        Cli::try_parse().unwrap_or_else(|err| {
            if err.use_stderr() {
                err.print().ok();
                std::process::exit(1);
            }
            // --help and --version
            err.exit()
        })
    }
}
