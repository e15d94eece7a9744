use anyhow::{bail, Result};
use log::info;
use rusqlite::Connection;

use crate::cli::{Commands, ReportCommand};
use crate::config::Config;
use crate::db::Database;
use crate::error::ReportError;
use crate::normalize::clean;
use crate::reports;
use crate::schema::verify_schema;

/// Open the database, run one command and print its report.
///
/// The connection is dropped on every return path.
pub fn run(config: &Config, command: &Commands) -> Result<()> {
    let db = Database::open(&config.database)?;

    match command {
        Commands::CheckSchema => {
            let report = verify_schema(db.conn())?;
            println!("Checked {} tables in {:?}:\n", report.tables.len(), config.database);
            print!("{}", report);
            if !report.is_complete() {
                bail!("Database schema is incomplete");
            }
        }
        Commands::Report(report) => {
            let output = render(db.conn(), report)?;
            print!("{}", output);
        }
    }

    db.close()
}

/// Build the text of a report command. Arguments are cleaned first.
pub fn render(conn: &Connection, command: &ReportCommand) -> Result<String, ReportError> {
    let output = match command {
        ReportCommand::PossibleEvolutions { pokemon } => {
            info!("possible-evolutions {:?}", pokemon);
            reports::possible_evolutions(conn, &clean(pokemon))?.to_string()
        }
        ReportCommand::EncounterSummary { location, game } => {
            info!("encounter-summary {:?} {:?}", location, game);
            reports::encounter_summary(conn, &clean(location), &clean(game))?.to_string()
        }
        ReportCommand::PokemonDensity { region } => {
            info!("pokemon-density {:?}", region);
            reports::pokemon_density(conn, &clean(region))?.to_string()
        }
        ReportCommand::AttackDamage {
            attacker,
            defender,
            game,
        } => {
            info!("attack-damage {:?} {:?} {:?}", attacker, defender, game);
            reports::attack_damage(conn, &clean(attacker), &clean(defender), &clean(game))?
                .to_string()
        }
    };
    Ok(output)
}
