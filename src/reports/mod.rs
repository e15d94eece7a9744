pub mod damage;
pub mod density;
pub mod encounters;
pub mod evolutions;

use rusqlite::types::{FromSqlError, FromSqlResult, ValueRef};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

pub use damage::{attack_damage, DamageReport};
pub use density::{pokemon_density, DensityReport};
pub use encounters::{encounter_summary, EncounterReport};
pub use evolutions::{possible_evolutions, EvolutionReport};

/// A requirement assertion attached to an evolution edge or an encounter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Requirement {
    pub assertion: String,
    pub inverted: bool,
}

impl Requirement {
    pub fn new(assertion: impl Into<String>, inverted: bool) -> Self {
        Self {
            assertion: assertion.into(),
            inverted,
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            write!(f, "NOT {}", self.assertion)
        } else {
            f.write_str(&self.assertion)
        }
    }
}

/// Insertion-ordered set: keeps the first occurrence of each value and
/// drops later duplicates.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    items: Vec<T>,
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Returns false if the value was already present
    pub fn insert(&mut self, value: T) -> bool {
        if self.seen.contains(&value) {
            return false;
        }
        self.seen.insert(value.clone());
        self.items.push(value);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Eq + Hash + Clone> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// Decode a JSON object stored in a TEXT column
pub(crate) fn json_column<T: DeserializeOwned>(value: ValueRef<'_>) -> FromSqlResult<T> {
    let text = value.as_str()?;
    serde_json::from_str(text).map_err(|e| FromSqlError::Other(Box::new(e)))
}

/// Join displayable values with ", "
pub(crate) fn join_display<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
