//! Attack damage report: the damage range of every move an attacker can
//! learn in a game, against a given defender.

use log::{debug, info};
use rusqlite::types::{FromSql, FromSqlResult, ValueRef};
use rusqlite::{params, Connection};
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

use crate::db::lookup;
use crate::error::{ReportError, Result};

/// Level and random-roll factor used for the lower damage bound
const MIN_LEVEL: f64 = 1.0;
const MIN_ROLL: f64 = 0.85;
/// Level and random-roll factor used for the upper damage bound
const MAX_LEVEL: f64 = 100.0;
const MAX_ROLL: f64 = 1.0;

/// Base stats, stored as a JSON object in `Pokemon.Base_Stats`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BaseStats {
    pub hit_points: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
}

impl FromSql for BaseStats {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        super::json_column(value)
    }
}

/// A damaging move the attacker can learn, with its multipliers against the
/// defender already resolved by the query
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRow {
    pub name: String,
    pub power: i64,
    pub category: String,
    /// 1.5 when the move shares a type with the attacker
    pub stab: f64,
    /// Product of the effectiveness against each defender type
    pub effectiveness: f64,
}

impl MoveRow {
    fn is_physical(&self) -> bool {
        self.category == "Physical"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveDamage {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

fn base_damage(level: f64, power: f64, attack: f64, defense: f64) -> f64 {
    (((((2.0 * level) / 5.0) + 2.0) * power * (attack / defense)) / 50.0 + 2.0).floor()
}

/// Damage bounds of one move: level 1 with the minimum roll and level 100
/// with the maximum roll
pub fn damage_range(mv: &MoveRow, attacker: &BaseStats, defender: &BaseStats) -> MoveDamage {
    let (attack, defense) = if mv.is_physical() {
        (attacker.attack, defender.defense)
    } else {
        (attacker.special_attack, defender.special_defense)
    };
    let (attack, defense, power) = (attack as f64, defense as f64, mv.power as f64);
    let multiplier = mv.stab * mv.effectiveness;

    MoveDamage {
        name: mv.name.clone(),
        min: base_damage(MIN_LEVEL, power, attack, defense) * MIN_ROLL * multiplier,
        max: base_damage(MAX_LEVEL, power, attack, defense) * MAX_ROLL * multiplier,
    }
}

/// Max damage ascending, then min damage, then move name
pub fn compare_damage(a: &MoveDamage, b: &MoveDamage) -> Ordering {
    a.max
        .total_cmp(&b.max)
        .then_with(|| a.min.total_cmp(&b.min))
        .then_with(|| a.name.cmp(&b.name))
}

/// Compute and order the damage of every move, dropping moves whose maximum
/// damage is zero
pub fn rank_moves(moves: &[MoveRow], attacker: &BaseStats, defender: &BaseStats) -> Vec<MoveDamage> {
    let mut ranked: Vec<MoveDamage> = moves
        .iter()
        .map(|mv| damage_range(mv, attacker, defender))
        .filter(|damage| damage.max != 0.0)
        .collect();
    ranked.sort_by(compare_damage);
    ranked
}

const MOVES_QUERY: &str = "
    SELECT DISTINCT m.ID, m.Name, m.Power, m.Category,
           CASE WHEN m.Of_Type IN (att.First_Type, att.Second_Type) THEN 1.5 ELSE 1.0 END,
           COALESCE(te1.Multiplier, 100) * COALESCE(te2.Multiplier, 100) / 10000.0
    FROM Learnable_Moves lm
    JOIN Moves m ON m.ID = lm.Learns
    JOIN Pokemon att ON att.ID = lm.Learnt_By
    JOIN Pokemon def ON def.ID = ?2
    LEFT JOIN Type_Effectiveness te1
        ON te1.Attacking = m.Of_Type AND te1.Defending = def.First_Type
    LEFT JOIN Type_Effectiveness te2
        ON te2.Attacking = m.Of_Type AND te2.Defending = def.Second_Type
    WHERE lm.Learnt_By = ?1
      AND lm.Learnt_In = ?3
      AND m.Power IS NOT NULL
      AND m.Power > 0
    ORDER BY m.ID";

/// Fetch the damaging moves the attacker can learn in a game
pub fn fetch_moves(
    conn: &Connection,
    attacker_id: i64,
    defender_id: i64,
    game_id: i64,
) -> Result<Vec<MoveRow>> {
    let mut stmt = conn.prepare(MOVES_QUERY)?;
    let moves = stmt
        .query_map(params![attacker_id, defender_id, game_id], |row| {
            Ok(MoveRow {
                name: row.get(1)?,
                power: row.get(2)?,
                category: row.get(3)?,
                stab: row.get(4)?,
                effectiveness: row.get(5)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    debug!("{} damaging moves for attacker {}", moves.len(), attacker_id);
    Ok(moves)
}

pub fn fetch_base_stats(conn: &Connection, pokemon_id: i64) -> Result<BaseStats> {
    let stats = conn.query_row(
        "SELECT Base_Stats FROM Pokemon WHERE ID = ?1",
        [pokemon_id],
        |row| row.get(0),
    )?;
    Ok(stats)
}

#[derive(Debug, Clone)]
pub struct DamageReport {
    pub attacker: String,
    pub defender: String,
    pub game: String,
    pub moves: Vec<MoveDamage>,
}

impl fmt::Display for DamageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "In 'Pokemon {}', When '{}' attacks '{}', '{}' can use the following moves:",
            self.game, self.attacker, self.defender, self.attacker
        )?;
        writeln!(f)?;
        for mv in &self.moves {
            writeln!(
                f,
                "    '{}' for a minimum of {:.1} damage and a maximum of {:.1} damage to '{}'.",
                mv.name, mv.min, mv.max, self.defender
            )?;
        }
        writeln!(f)
    }
}

/// Build the attack damage report.
///
/// Checks run in order and stop at the first failure: attacker exists,
/// defender exists, game exists, attacker is in the game's Pokedex, defender
/// is in the game's Pokedex.
pub fn attack_damage(
    conn: &Connection,
    attacker: &str,
    defender: &str,
    game: &str,
) -> Result<DamageReport> {
    let attacker_id = lookup::find_pokemon(conn, attacker)?
        .ok_or_else(|| ReportError::UnknownPokemon(attacker.to_string()))?;
    let defender_id = lookup::find_pokemon(conn, defender)?
        .ok_or_else(|| ReportError::UnknownPokemon(defender.to_string()))?;
    let game_id = lookup::find_game(conn, game)?
        .ok_or_else(|| ReportError::UnknownGame(game.to_string()))?;
    for (name, id) in [(attacker, attacker_id), (defender, defender_id)] {
        if !lookup::in_pokedex(conn, id, game_id)? {
            return Err(ReportError::PokemonNotInGame {
                pokemon: name.to_string(),
                game: game.to_string(),
            });
        }
    }

    let cannot_attack = || ReportError::CannotAttack {
        attacker: attacker.to_string(),
        defender: defender.to_string(),
        game: game.to_string(),
    };

    let moves = fetch_moves(conn, attacker_id, defender_id, game_id)?;
    if moves.is_empty() {
        return Err(cannot_attack());
    }

    let attacker_stats = fetch_base_stats(conn, attacker_id)?;
    let defender_stats = fetch_base_stats(conn, defender_id)?;
    let ranked = rank_moves(&moves, &attacker_stats, &defender_stats);
    if ranked.is_empty() {
        return Err(cannot_attack());
    }
    info!(
        "'{}' vs '{}' in {}: {} of {} moves usable",
        attacker,
        defender,
        game,
        ranked.len(),
        moves.len()
    );

    Ok(DamageReport {
        attacker: attacker.to_string(),
        defender: defender.to_string(),
        game: game.to_string(),
        moves: ranked,
    })
}
