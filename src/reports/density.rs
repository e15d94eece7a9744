//! Regional Pokemon density report.
//!
//! Each encounter contributes `(mass / volume) * (rarity / 100)`, with the
//! species' volume approximated as a sphere whose radius is
//! `Average_Height * 100 / 2`. Contributions are summed per location per
//! game, then the per-game sums are averaged across the games of the region
//! in which the location has at least one qualifying encounter.

use log::{debug, info};
use rusqlite::Connection;
use std::f64::consts::PI;
use std::fmt;

use crate::db::lookup;
use crate::error::{ReportError, Result};

/// Species measurements and rarity for one encounter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specimen {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub rarity: i64,
}

impl Specimen {
    /// Density contribution, or `None` when the measurements are unusable
    pub fn density(&self) -> Option<f64> {
        match (self.weight, self.height) {
            (Some(weight), Some(height)) if height > 0.0 => {
                Some(encounter_density(weight, height, self.rarity))
            }
            _ => None,
        }
    }
}

pub fn sphere_volume(height: f64) -> f64 {
    (4.0 / 3.0) * PI * (height * 100.0 / 2.0).powi(3)
}

pub fn encounter_density(weight: f64, height: f64, rarity: i64) -> f64 {
    (weight / sphere_volume(height)) * (rarity as f64 / 100.0)
}

/// One row of the density query: a location in one game, with at most one
/// encounter attached.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityRow {
    pub location: String,
    pub game_id: i64,
    pub specimen: Option<Specimen>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationDensity {
    pub location: String,
    pub density: f64,
}

/// Per-location accumulator of per-game density sums
struct LocationSamples {
    location: String,
    per_game: Vec<(i64, f64)>,
}

impl LocationSamples {
    fn add(&mut self, game_id: i64, density: f64) {
        match self.per_game.iter_mut().find(|(id, _)| *id == game_id) {
            Some((_, sum)) => *sum += density,
            None => self.per_game.push((game_id, density)),
        }
    }

    fn average(&self) -> Option<f64> {
        let samples: Vec<f64> = self.per_game.iter().map(|(_, d)| *d).collect();
        mean(&samples)
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Split locations into a ranked list (density descending, then name) and a
/// list of locations without any qualifying encounter.
///
/// Rows must be grouped by location name. The no-encounter list keeps the
/// row order.
pub fn rank_locations<I>(rows: I) -> (Vec<LocationDensity>, Vec<String>)
where
    I: IntoIterator<Item = DensityRow>,
{
    let mut locations: Vec<LocationSamples> = Vec::new();

    for row in rows {
        if locations.last().map(|l| l.location != row.location).unwrap_or(true) {
            locations.push(LocationSamples {
                location: row.location.clone(),
                per_game: Vec::new(),
            });
        }
        let density = row.specimen.as_ref().and_then(Specimen::density);
        if let (Some(current), Some(density)) = (locations.last_mut(), density) {
            current.add(row.game_id, density);
        }
    }

    let mut ranked = Vec::new();
    let mut empty = Vec::new();
    for samples in locations {
        match samples.average() {
            Some(density) => ranked.push(LocationDensity {
                location: samples.location,
                density,
            }),
            None => empty.push(samples.location),
        }
    }

    ranked.sort_by(|a, b| {
        b.density
            .total_cmp(&a.density)
            .then_with(|| a.location.cmp(&b.location))
    });

    (ranked, empty)
}

const DENSITY_QUERY: &str = "
    SELECT l.Name, g.ID, p.Average_Weight, p.Average_Height, e.Rarity
    FROM Locations l
    JOIN Games g ON g.ID = l.Appears_In
    LEFT JOIN Encounters e ON e.Occurs_At = l.ID
    LEFT JOIN Pokemon p ON p.ID = e.Occurs_With
    WHERE g.Region = ?1
    ORDER BY l.Name, g.ID, e.ID";

pub fn fetch_rows(conn: &Connection, region: &str) -> Result<Vec<DensityRow>> {
    let mut stmt = conn.prepare(DENSITY_QUERY)?;
    let rows = stmt
        .query_map([region], |row| {
            let weight: Option<f64> = row.get(2)?;
            let height: Option<f64> = row.get(3)?;
            let rarity: Option<i64> = row.get(4)?;
            Ok(DensityRow {
                location: row.get(0)?,
                game_id: row.get(1)?,
                specimen: rarity.map(|rarity| Specimen {
                    weight,
                    height,
                    rarity,
                }),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!("{} density rows for region '{}'", rows.len(), region);
    Ok(rows)
}

#[derive(Debug, Clone)]
pub struct DensityReport {
    pub region: String,
    pub ranked: Vec<LocationDensity>,
    pub no_encounters: Vec<String>,
}

impl fmt::Display for DensityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ranked.is_empty() && self.no_encounters.is_empty() {
            return writeln!(f, "There are no locations in the '{}' region.", self.region);
        }

        if !self.ranked.is_empty() {
            writeln!(
                f,
                "The average density of Pokemon within each location in the '{}' region:",
                self.region
            )?;
            writeln!(f)?;
            let width = self
                .ranked
                .iter()
                .map(|l| l.location.chars().count() + 1)
                .max()
                .unwrap_or(0);
            for entry in &self.ranked {
                writeln!(
                    f,
                    "{:<width$} {:.6}",
                    format!("{}:", entry.location),
                    entry.density
                )?;
            }
            writeln!(f)?;
        }

        if !self.no_encounters.is_empty() {
            writeln!(
                f,
                "The following locations in the '{}' region have no wild Pokemon encounters:",
                self.region
            )?;
            writeln!(f)?;
            for location in &self.no_encounters {
                writeln!(f, "{}", location)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build the density report for a region
pub fn pokemon_density(conn: &Connection, region: &str) -> Result<DensityReport> {
    let regions = lookup::regions(conn)?;
    if !regions.iter().any(|r| r == region) {
        return Err(ReportError::UnknownRegion(region.to_string()));
    }

    let (ranked, no_encounters) = rank_locations(fetch_rows(conn, region)?);
    info!(
        "'{}': {} ranked locations, {} without encounters",
        region,
        ranked.len(),
        no_encounters.len()
    );

    Ok(DensityReport {
        region: region.to_string(),
        ranked,
        no_encounters,
    })
}
