use log::{debug, warn};
use rusqlite::Connection;
use std::fmt;

use super::tables::ALL_TABLES;
use super::types::TableSchema;

/// Outcome of checking one expected table against the live database
#[derive(Debug, Clone, PartialEq)]
pub enum TableStatus {
    Ok,
    Missing,
    MissingColumns(Vec<&'static str>),
}

#[derive(Debug, Clone)]
pub struct TableCheck {
    pub table: &'static str,
    pub status: TableStatus,
}

/// Result of comparing the database against [`ALL_TABLES`]
#[derive(Debug, Clone)]
pub struct SchemaReport {
    pub tables: Vec<TableCheck>,
}

impl SchemaReport {
    pub fn is_complete(&self) -> bool {
        self.tables.iter().all(|t| t.status == TableStatus::Ok)
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tables.iter().map(|t| t.table.len()).max().unwrap_or(0);
        for check in &self.tables {
            match &check.status {
                TableStatus::Ok => writeln!(f, "  {:width$}  ok", check.table)?,
                TableStatus::Missing => writeln!(f, "  {:width$}  missing table", check.table)?,
                TableStatus::MissingColumns(cols) => writeln!(
                    f,
                    "  {:width$}  missing columns: {}",
                    check.table,
                    cols.join(", ")
                )?,
            }
        }
        Ok(())
    }
}

/// Check that every table and column the reports query exists.
/// Column type mismatches are logged but do not fail the check.
pub fn verify_schema(conn: &Connection) -> rusqlite::Result<SchemaReport> {
    let mut tables = Vec::with_capacity(ALL_TABLES.len());
    for schema in ALL_TABLES {
        let status = check_table(conn, schema)?;
        debug!("{}: {:?}", schema.name, status);
        tables.push(TableCheck {
            table: schema.name,
            status,
        });
    }
    Ok(SchemaReport { tables })
}

fn check_table(conn: &Connection, schema: &TableSchema) -> rusqlite::Result<TableStatus> {
    let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info(?1)")?;
    let present: Vec<(String, String)> = stmt
        .query_map([schema.name], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<_>>()?;

    if present.is_empty() {
        return Ok(TableStatus::Missing);
    }

    let mut missing = Vec::new();
    for col in schema.columns {
        match present.iter().find(|(name, _)| name.eq_ignore_ascii_case(col.name)) {
            Some((_, declared)) => {
                if !col.col_type.accepts_declared(declared) {
                    warn!(
                        "{}.{} is declared {} but read as {}",
                        schema.name,
                        col.name,
                        declared,
                        col.col_type.affinity()
                    );
                }
            }
            None => missing.push(col.name),
        }
    }

    if missing.is_empty() {
        Ok(TableStatus::Ok)
    } else {
        Ok(TableStatus::MissingColumns(missing))
    }
}
