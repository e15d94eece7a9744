use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::LevelFilter;
use std::path::PathBuf;

const DATABASE_FILE: &str = "pokedex.db";

/// Settings resolved from the command line, environment and platform defaults
#[derive(Debug, Clone)]
pub struct Config {
    pub database: PathBuf,
    pub verbosity: u8,
}

impl Config {
    /// `database` comes from `--database` or `POKEDEX_DB` when given,
    /// otherwise the platform data directory.
    pub fn resolve(database: Option<PathBuf>, verbosity: u8) -> Result<Self> {
        let database = match database {
            Some(path) => path,
            None => default_database_path()?,
        };
        Ok(Self {
            database,
            verbosity,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        level_for(self.verbosity)
    }
}

/// `<data dir>/pokedex-reports/pokedex.db`
pub fn default_database_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "pokedex-reports")
        .context("Could not determine data directory")?;
    Ok(proj_dirs.data_dir().join(DATABASE_FILE))
}

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
