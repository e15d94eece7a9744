//! Possible evolutions report: which species a Pokemon evolves from and into,
//! with the requirements for each evolution edge.

use log::{debug, info};
use rusqlite::Connection;
use std::fmt;

use super::Requirement;
use crate::db::lookup;
use crate::error::{ReportError, Result};

/// Which side of the evolution edge the queried species is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Edges where the species is the post-evolution
    From,
    /// Edges where the species is the pre-evolution
    Into,
}

impl Direction {
    fn query(self) -> &'static str {
        match self {
            Direction::From => {
                "SELECT e.ID, other.Name, r.Assertion, er.Inverted
                 FROM Evolutions e
                 JOIN Pokemon other ON other.ID = e.Pre_Evolution
                 JOIN Evolution_Requirements er ON er.Evolution = e.ID
                 JOIN Requirements r ON r.ID = er.Requirement
                 WHERE e.Post_Evolution = ?1
                 ORDER BY other.ID, e.ID, r.ID, er.Inverted DESC"
            }
            Direction::Into => {
                "SELECT e.ID, other.Name, r.Assertion, er.Inverted
                 FROM Evolutions e
                 JOIN Pokemon other ON other.ID = e.Post_Evolution
                 JOIN Evolution_Requirements er ON er.Evolution = e.ID
                 JOIN Requirements r ON r.ID = er.Requirement
                 WHERE e.Pre_Evolution = ?1
                 ORDER BY other.ID, e.ID, r.ID, er.Inverted DESC"
            }
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Direction::From => "from",
            Direction::Into => "into",
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Direction::From => "pre",
            Direction::Into => "post",
        }
    }
}

/// One row of the evolution query, in query order
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionRow {
    pub edge_id: i64,
    pub species: String,
    pub assertion: String,
    pub inverted: bool,
}

/// All evolution edges leading to (or from) one other species.
///
/// Requirements within an edge are all needed (AND); any one edge is
/// sufficient (OR).
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionTarget {
    pub species: String,
    pub edges: Vec<Vec<Requirement>>,
}

/// Fold query-ordered rows into per-species groups of edges.
///
/// Rows must already be ordered by species then edge; a new group starts
/// whenever the species name changes and a new edge whenever the edge id
/// changes. Nothing is re-sorted here.
pub fn group_rows<I>(rows: I) -> Vec<EvolutionTarget>
where
    I: IntoIterator<Item = EvolutionRow>,
{
    let mut targets: Vec<EvolutionTarget> = Vec::new();
    let mut current_edge: Option<i64> = None;

    for row in rows {
        let requirement = Requirement::new(row.assertion, row.inverted);

        let same_edge = current_edge == Some(row.edge_id);
        current_edge = Some(row.edge_id);

        match targets.last_mut() {
            Some(target) if target.species == row.species => match target.edges.last_mut() {
                Some(edge) if same_edge => edge.push(requirement),
                _ => target.edges.push(vec![requirement]),
            },
            _ => targets.push(EvolutionTarget {
                species: row.species,
                edges: vec![vec![requirement]],
            }),
        }
    }

    targets
}

/// Fetch the evolution rows for one direction, in display order
pub fn fetch_rows(
    conn: &Connection,
    pokemon_id: i64,
    direction: Direction,
) -> Result<Vec<EvolutionRow>> {
    let mut stmt = conn.prepare(direction.query())?;
    let rows = stmt
        .query_map([pokemon_id], |row| {
            Ok(EvolutionRow {
                edge_id: row.get(0)?,
                species: row.get(1)?,
                assertion: row.get(2)?,
                inverted: row.get(3)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!("{} {}-evolution rows", rows.len(), direction.prefix());
    Ok(rows)
}

#[derive(Debug, Clone)]
pub struct EvolutionReport {
    pub pokemon: String,
    pub pre_evolutions: Vec<EvolutionTarget>,
    pub post_evolutions: Vec<EvolutionTarget>,
}

impl EvolutionReport {
    fn fmt_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        direction: Direction,
        targets: &[EvolutionTarget],
    ) -> fmt::Result {
        writeln!(f, "'{}' can evolve {}:", self.pokemon, direction.verb())?;
        if targets.is_empty() {
            writeln!(
                f,
                "'{}' doesn't have any {}-evolutions.",
                self.pokemon,
                direction.prefix()
            )?;
            return writeln!(f);
        }

        for target in targets {
            writeln!(
                f,
                "'{}' when the following requirements are satisfied:",
                target.species
            )?;
            for (i, edge) in target.edges.iter().enumerate() {
                if i > 0 {
                    writeln!(f, "OR")?;
                }
                for (j, requirement) in edge.iter().enumerate() {
                    if j > 0 {
                        writeln!(f, "    AND")?;
                    }
                    writeln!(f, "        {}", requirement)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for EvolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_section(f, Direction::From, &self.pre_evolutions)?;
        self.fmt_section(f, Direction::Into, &self.post_evolutions)
    }
}

/// Build the possible evolutions report for a species
pub fn possible_evolutions(conn: &Connection, pokemon: &str) -> Result<EvolutionReport> {
    let pokemon_id = lookup::find_pokemon(conn, pokemon)?
        .ok_or_else(|| ReportError::UnknownPokemon(pokemon.to_string()))?;

    let pre_evolutions = group_rows(fetch_rows(conn, pokemon_id, Direction::From)?);
    let post_evolutions = group_rows(fetch_rows(conn, pokemon_id, Direction::Into)?);
    info!(
        "'{}': {} pre-evolution targets, {} post-evolution targets",
        pokemon,
        pre_evolutions.len(),
        post_evolutions.len()
    );

    Ok(EvolutionReport {
        pokemon: pokemon.to_string(),
        pre_evolutions,
        post_evolutions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(edge_id: i64, species: &str, assertion: &str, inverted: bool) -> EvolutionRow {
        EvolutionRow {
            edge_id,
            species: species.to_string(),
            assertion: assertion.to_string(),
            inverted,
        }
    }

    fn req(assertion: &str, inverted: bool) -> Requirement {
        Requirement::new(assertion, inverted)
    }

    #[test]
    fn test_group_rows_splits_edges_and_species() {
        let targets = group_rows(vec![
            row(1, "Espeon", "High Friendship", false),
            row(1, "Espeon", "Night", true),
            row(2, "Espeon", "Use Sun Shard", false),
            row(3, "Umbreon", "High Friendship", false),
        ]);

        assert_eq!(
            targets,
            vec![
                EvolutionTarget {
                    species: "Espeon".into(),
                    edges: vec![
                        vec![req("High Friendship", false), req("Night", true)],
                        vec![req("Use Sun Shard", false)],
                    ],
                },
                EvolutionTarget {
                    species: "Umbreon".into(),
                    edges: vec![vec![req("High Friendship", false)]],
                },
            ]
        );
    }

    #[test]
    fn test_group_rows_trusts_query_order() {
        // A species that reappears after another is a separate block
        let targets = group_rows(vec![
            row(1, "Vaporeon", "Use Water Stone", false),
            row(2, "Jolteon", "Use Thunder Stone", false),
            row(3, "Vaporeon", "Trade", false),
        ]);
        let names: Vec<_> = targets.iter().map(|t| t.species.as_str()).collect();
        assert_eq!(names, vec!["Vaporeon", "Jolteon", "Vaporeon"]);
    }

    #[test]
    fn test_group_rows_empty() {
        assert!(group_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_render_and_or() {
        let report = EvolutionReport {
            pokemon: "Eevee".into(),
            pre_evolutions: vec![],
            post_evolutions: group_rows(vec![
                row(1, "Espeon", "High Friendship", false),
                row(1, "Espeon", "Night", true),
                row(2, "Espeon", "Use Sun Shard", false),
            ]),
        };

        assert_eq!(
            report.to_string(),
            "'Eevee' can evolve from:\n\
             'Eevee' doesn't have any pre-evolutions.\n\
             \n\
             'Eevee' can evolve into:\n\
             'Espeon' when the following requirements are satisfied:\n\
             \x20       High Friendship\n\
             \x20   AND\n\
             \x20       NOT Night\n\
             OR\n\
             \x20       Use Sun Shard\n\
             \n"
        );
    }

    #[test]
    fn test_empty_sections_keep_their_labels() {
        let report = EvolutionReport {
            pokemon: "Onix".into(),
            pre_evolutions: vec![],
            post_evolutions: vec![],
        };

        assert_eq!(
            report.to_string(),
            "'Onix' can evolve from:\n\
             'Onix' doesn't have any pre-evolutions.\n\
             \n\
             'Onix' can evolve into:\n\
             'Onix' doesn't have any post-evolutions.\n\
             \n"
        );
    }

    #[test]
    fn test_and_never_precedes_first_requirement() {
        let report = EvolutionReport {
            pokemon: "Pikachu".into(),
            pre_evolutions: group_rows(vec![row(1, "Pichu", "High Friendship", false)]),
            post_evolutions: group_rows(vec![
                row(2, "Raichu", "Use Thunder Stone", false),
                row(3, "Raichu", "Level 30", false),
                row(3, "Raichu", "In Alola", false),
            ]),
        };
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();

        for (i, line) in lines.iter().enumerate() {
            if line.trim() == "AND" || *line == "OR" {
                let prev = lines[i - 1];
                assert!(prev.starts_with("        "), "separator after {:?}", prev);
                assert!(!lines[i + 1].is_empty());
            }
        }
    }
}
