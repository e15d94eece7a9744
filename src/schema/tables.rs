//! Table definitions for the Pokemon game data schema the reports read from

use super::types::*;

// =============================================================================
// Reference Tables
// =============================================================================

pub static TYPES: TableSchema = TableSchema {
    name: "Types",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
    ],
};

pub static GAMES: TableSchema = TableSchema {
    name: "Games",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("Region", ColumnType::Text),
    ],
};

pub static REQUIREMENTS: TableSchema = TableSchema {
    name: "Requirements",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Assertion", ColumnType::Text),
    ],
};

pub static EGG_GROUPS: TableSchema = TableSchema {
    name: "Egg_Groups",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
    ],
};

pub static ABILITIES: TableSchema = TableSchema {
    name: "Abilities",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
    ],
};

// =============================================================================
// Species and Moves
// =============================================================================

pub static POKEMON: TableSchema = TableSchema {
    name: "Pokemon",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("First_Type", ColumnType::Integer),
        Column::new("Second_Type", ColumnType::Integer),
        Column::new("Average_Height", ColumnType::Real),
        Column::new("Average_Weight", ColumnType::Real),
        Column::new("Base_Stats", ColumnType::Json),
    ],
};

pub static MOVES: TableSchema = TableSchema {
    name: "Moves",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("Category", ColumnType::Text),
        Column::new("Of_Type", ColumnType::Integer),
        Column::new("Power", ColumnType::Integer),
    ],
};

pub static TYPE_EFFECTIVENESS: TableSchema = TableSchema {
    name: "Type_Effectiveness",
    columns: &[
        Column::new("Attacking", ColumnType::Integer),
        Column::new("Defending", ColumnType::Integer),
        Column::new("Multiplier", ColumnType::Integer),
    ],
};

// =============================================================================
// Evolutions
// =============================================================================

pub static EVOLUTIONS: TableSchema = TableSchema {
    name: "Evolutions",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Pre_Evolution", ColumnType::Integer),
        Column::new("Post_Evolution", ColumnType::Integer),
    ],
};

pub static EVOLUTION_REQUIREMENTS: TableSchema = TableSchema {
    name: "Evolution_Requirements",
    columns: &[
        Column::new("Evolution", ColumnType::Integer),
        Column::new("Requirement", ColumnType::Integer),
        Column::new("Inverted", ColumnType::Boolean),
    ],
};

// =============================================================================
// Locations and Encounters
// =============================================================================

pub static LOCATIONS: TableSchema = TableSchema {
    name: "Locations",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Name", ColumnType::Text),
        Column::new("Appears_In", ColumnType::Integer),
    ],
};

pub static ENCOUNTERS: TableSchema = TableSchema {
    name: "Encounters",
    columns: &[
        Column::new("ID", ColumnType::Integer),
        Column::new("Occurs_With", ColumnType::Integer),
        Column::new("Occurs_At", ColumnType::Integer),
        Column::new("Rarity", ColumnType::Integer),
        Column::new("Levels", ColumnType::Json),
    ],
};

pub static ENCOUNTER_REQUIREMENTS: TableSchema = TableSchema {
    name: "Encounter_Requirements",
    columns: &[
        Column::new("Encounter", ColumnType::Integer),
        Column::new("Requirement", ColumnType::Integer),
        Column::new("Inverted", ColumnType::Boolean),
    ],
};

// =============================================================================
// Junction Tables
// =============================================================================

pub static IN_GROUP: TableSchema = TableSchema {
    name: "In_Group",
    columns: &[
        Column::new("Pokemon", ColumnType::Integer),
        Column::new("Egg_Group", ColumnType::Integer),
    ],
};

pub static KNOWABLE_ABILITIES: TableSchema = TableSchema {
    name: "Knowable_Abilities",
    columns: &[
        Column::new("Known_By", ColumnType::Integer),
        Column::new("Knows", ColumnType::Integer),
        Column::new("Hidden", ColumnType::Boolean),
    ],
};

pub static LEARNABLE_MOVES: TableSchema = TableSchema {
    name: "Learnable_Moves",
    columns: &[
        Column::new("Learnt_By", ColumnType::Integer),
        Column::new("Learnt_In", ColumnType::Integer),
        Column::new("Learns", ColumnType::Integer),
    ],
};

pub static POKEDEX: TableSchema = TableSchema {
    name: "Pokedex",
    columns: &[
        Column::new("National_ID", ColumnType::Integer),
        Column::new("Game", ColumnType::Integer),
        Column::new("Regional_ID", ColumnType::Integer),
    ],
};

// =============================================================================
// Schema Registry
// =============================================================================

/// All tables the reports read from
pub static ALL_TABLES: &[&TableSchema] = &[
    &TYPES,
    &GAMES,
    &REQUIREMENTS,
    &EGG_GROUPS,
    &ABILITIES,
    &POKEMON,
    &MOVES,
    &TYPE_EFFECTIVENESS,
    &EVOLUTIONS,
    &EVOLUTION_REQUIREMENTS,
    &LOCATIONS,
    &ENCOUNTERS,
    &ENCOUNTER_REQUIREMENTS,
    &IN_GROUP,
    &KNOWABLE_ABILITIES,
    &LEARNABLE_MOVES,
    &POKEDEX,
];
