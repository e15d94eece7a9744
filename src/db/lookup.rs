//! Existence and membership checks against the reference tables

use rusqlite::{params, Connection, OptionalExtension, Result};

/// Find a species by exact name
pub fn find_pokemon(conn: &Connection, name: &str) -> Result<Option<i64>> {
    conn.query_row("SELECT ID FROM Pokemon WHERE Name = ?1", [name], |row| {
        row.get(0)
    })
    .optional()
}

/// Find a game by exact name
pub fn find_game(conn: &Connection, name: &str) -> Result<Option<i64>> {
    conn.query_row("SELECT ID FROM Games WHERE Name = ?1", [name], |row| {
        row.get(0)
    })
    .optional()
}

/// Whether a location with this name exists in any game
pub fn location_exists(conn: &Connection, name: &str) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM Locations WHERE Name = ?1)",
        [name],
        |row| row.get(0),
    )
}

/// Find the location row with this name that appears in the given game
pub fn find_location_in_game(conn: &Connection, name: &str, game_id: i64) -> Result<Option<i64>> {
    conn.query_row(
        "SELECT ID FROM Locations WHERE Name = ?1 AND Appears_In = ?2",
        params![name, game_id],
        |row| row.get(0),
    )
    .optional()
}

/// Whether the species is listed in the game's Pokedex
pub fn in_pokedex(conn: &Connection, pokemon_id: i64, game_id: i64) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM Pokedex WHERE National_ID = ?1 AND Game = ?2)",
        params![pokemon_id, game_id],
        |row| row.get(0),
    )
}

/// The set of region names games can belong to, in name order
pub fn regions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT Region FROM Games ORDER BY Region")?;
    let regions = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<String>>>()?;
    Ok(regions)
}
