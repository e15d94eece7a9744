use anyhow::{bail, Context, Result};
use log::debug;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Read-only handle to the game data database.
///
/// The connection is released when the handle drops, so every exit path
/// (including early returns on validation errors) closes it.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            bail!(
                "Database not found at {:?} (set --database or POKEDEX_DB)",
                db_path
            );
        }

        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        conn.execute_batch("PRAGMA query_only = ON;")
            .context("Failed to configure database connection")?;

        debug!("Opened {:?} read-only", db_path);
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        debug!("Closed database");
        Ok(())
    }
}
