//! Encounter summary report: the Pokemon that can be found at a location in
//! one game, with their types, rarity, levels, egg groups, abilities and
//! encounter requirements.

use log::{debug, info};
use rusqlite::types::{FromSql, FromSqlResult, ValueRef};
use rusqlite::Connection;
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use super::{join_display, OrderedSet, Requirement};
use crate::db::lookup;
use crate::error::{ReportError, Result};

/// Encounter level range, stored as a JSON object in `Encounters.Levels`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LevelRange {
    pub min: i64,
    pub max: i64,
}

impl FromSql for LevelRange {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        super::json_column(value)
    }
}

/// One row of the fanned-out encounter query.
///
/// An encounter appears once per combination of egg group, non-hidden
/// ability and requirement, so the optional fields repeat across rows.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterRow {
    pub encounter_id: i64,
    pub species: String,
    pub first_type: String,
    pub second_type: Option<String>,
    pub rarity: i64,
    pub levels: LevelRange,
    pub egg_group: Option<String>,
    pub ability: Option<String>,
    pub requirement: Option<Requirement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub species: String,
    pub first_type: String,
    pub second_type: Option<String>,
    /// Chance of this encounter as a whole percentage, 0 to 100
    pub rarity: i64,
    pub levels: LevelRange,
    pub egg_groups: BTreeSet<String>,
    pub abilities: OrderedSet<String>,
    pub requirements: OrderedSet<Requirement>,
}

impl Encounter {
    fn from_row(row: &EncounterRow) -> Self {
        Self {
            species: row.species.clone(),
            first_type: row.first_type.clone(),
            second_type: row.second_type.clone(),
            rarity: row.rarity,
            levels: row.levels,
            egg_groups: BTreeSet::new(),
            abilities: OrderedSet::new(),
            requirements: OrderedSet::new(),
        }
    }

    fn absorb(&mut self, row: EncounterRow) {
        if let Some(group) = row.egg_group {
            self.egg_groups.insert(group);
        }
        if let Some(ability) = row.ability {
            self.abilities.insert(ability);
        }
        if let Some(requirement) = row.requirement {
            self.requirements.insert(requirement);
        }
    }

    fn type_label(&self) -> String {
        match &self.second_type {
            Some(second) => format!("{}/{}", self.first_type, second),
            None => self.first_type.clone(),
        }
    }
}

/// Collapse consecutive rows of the same encounter, deduplicating abilities
/// and requirements by first occurrence.
pub fn collapse_rows<I>(rows: I) -> Vec<Encounter>
where
    I: IntoIterator<Item = EncounterRow>,
{
    let mut encounters: Vec<Encounter> = Vec::new();
    let mut current_id: Option<i64> = None;

    for row in rows {
        if current_id != Some(row.encounter_id) {
            current_id = Some(row.encounter_id);
            encounters.push(Encounter::from_row(&row));
        }
        if let Some(encounter) = encounters.last_mut() {
            encounter.absorb(row);
        }
    }

    encounters
}

/// Rarity descending, then species, max level and min level ascending
pub fn compare_encounters(a: &Encounter, b: &Encounter) -> Ordering {
    b.rarity
        .cmp(&a.rarity)
        .then_with(|| a.species.cmp(&b.species))
        .then_with(|| a.levels.max.cmp(&b.levels.max))
        .then_with(|| a.levels.min.cmp(&b.levels.min))
}

const ENCOUNTER_QUERY: &str = "
    SELECT e.ID, p.Name, t1.Name, t2.Name, e.Rarity, e.Levels,
           g.Name, a.Name, r.Assertion, er.Inverted
    FROM Encounters e
    JOIN Pokemon p ON p.ID = e.Occurs_With
    JOIN Types t1 ON t1.ID = p.First_Type
    LEFT JOIN Types t2 ON t2.ID = p.Second_Type
    LEFT JOIN In_Group ig ON ig.Pokemon = p.ID
    LEFT JOIN Egg_Groups g ON g.ID = ig.Egg_Group
    LEFT JOIN Knowable_Abilities ka ON ka.Known_By = p.ID AND ka.Hidden = 0
    LEFT JOIN Abilities a ON a.ID = ka.Knows
    LEFT JOIN Encounter_Requirements er ON er.Encounter = e.ID
    LEFT JOIN Requirements r ON r.ID = er.Requirement
    WHERE e.Occurs_At = ?1
    ORDER BY e.ID, r.ID, a.ID, g.Name";

/// Fetch the fanned-out encounter rows for one location
pub fn fetch_rows(conn: &Connection, location_id: i64) -> Result<Vec<EncounterRow>> {
    let mut stmt = conn.prepare(ENCOUNTER_QUERY)?;
    let rows = stmt
        .query_map([location_id], |row| {
            let assertion: Option<String> = row.get(8)?;
            let inverted: Option<bool> = row.get(9)?;
            Ok(EncounterRow {
                encounter_id: row.get(0)?,
                species: row.get(1)?,
                first_type: row.get(2)?,
                second_type: row.get(3)?,
                rarity: row.get(4)?,
                levels: row.get(5)?,
                egg_group: row.get(6)?,
                ability: row.get(7)?,
                requirement: assertion.map(|a| Requirement::new(a, inverted.unwrap_or(false))),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!("{} encounter rows for location {}", rows.len(), location_id);
    Ok(rows)
}

#[derive(Debug, Clone)]
pub struct EncounterReport {
    pub location: String,
    pub game: String,
    pub encounters: Vec<Encounter>,
}

impl fmt::Display for EncounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.encounters.is_empty() {
            return writeln!(
                f,
                "No Pokemon can be encountered in '{}' in 'Pokemon {}'.",
                self.location, self.game
            );
        }

        writeln!(
            f,
            "In '{}' in 'Pokemon {}' the following Pokemon can be encountered:",
            self.location, self.game
        )?;
        writeln!(f)?;

        for encounter in &self.encounters {
            writeln!(f, "    {}:", encounter.species)?;
            writeln!(f, "        Type: {}", encounter.type_label())?;
            writeln!(f, "        Rarity: {}%", encounter.rarity)?;
            writeln!(
                f,
                "        Levels: min {}, max {}",
                encounter.levels.min, encounter.levels.max
            )?;
            if !encounter.egg_groups.is_empty() {
                writeln!(
                    f,
                    "        Egg Groups: {}",
                    join_display(&encounter.egg_groups)
                )?;
            }
            if !encounter.abilities.is_empty() {
                writeln!(
                    f,
                    "        Abilities: {}",
                    join_display(encounter.abilities.iter())
                )?;
            }
            if !encounter.requirements.is_empty() {
                writeln!(
                    f,
                    "        Encounter Requirements: {}",
                    join_display(encounter.requirements.iter())
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build the encounter summary for a location in a game.
///
/// Checks run in order and stop at the first failure: the location exists
/// in some game, the game exists, and the location appears in that game.
pub fn encounter_summary(conn: &Connection, location: &str, game: &str) -> Result<EncounterReport> {
    if !lookup::location_exists(conn, location)? {
        return Err(ReportError::UnknownLocation(location.to_string()));
    }
    let game_id = lookup::find_game(conn, game)?
        .ok_or_else(|| ReportError::UnknownGame(game.to_string()))?;
    let location_id = lookup::find_location_in_game(conn, location, game_id)?.ok_or_else(|| {
        ReportError::LocationNotInGame {
            location: location.to_string(),
            game: game.to_string(),
        }
    })?;

    let mut encounters = collapse_rows(fetch_rows(conn, location_id)?);
    encounters.sort_by(compare_encounters);
    info!(
        "{} encounters in '{}' ({})",
        encounters.len(),
        location,
        game
    );

    Ok(EncounterReport {
        location: location.to_string(),
        game: game.to_string(),
        encounters,
    })
}
