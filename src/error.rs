use thiserror::Error;

/// Errors raised while building a report.
///
/// The `Display` text of the validation variants is the exact message shown
/// to the user.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("'{0}' isn't a Pokemon that exists.")]
    UnknownPokemon(String),

    #[error("'{0}' isn't a location in the Pokemon series.")]
    UnknownLocation(String),

    #[error("'Pokemon {0}' isn't a game in the Pokemon series.")]
    UnknownGame(String),

    #[error("'{0}' isn't a region in the Pokemon series.")]
    UnknownRegion(String),

    #[error("'{location}' isn't in 'Pokemon {game}'.")]
    LocationNotInGame { location: String, game: String },

    #[error("'{pokemon}' doesn't appear in 'Pokemon {game}'.")]
    PokemonNotInGame { pokemon: String, game: String },

    #[error("In 'Pokemon {game}', '{attacker}' can't attack '{defender}'.")]
    CannotAttack {
        attacker: String,
        defender: String,
        game: String,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl ReportError {
    /// True for errors caused by the arguments rather than the database
    pub fn is_validation(&self) -> bool {
        !matches!(self, ReportError::Database(_))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
