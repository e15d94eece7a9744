//! Shared fixture database for integration tests.
//!
//! A small slice of Kanto/Johto game data, plus a Sinnoh region whose
//! locations have no encounters at all.

#![allow(dead_code)]

use rusqlite::Connection;
use std::path::Path;
use tempfile::NamedTempFile;

pub const SCHEMA: &str = "
    CREATE TABLE Types (ID INTEGER PRIMARY KEY, Name TEXT NOT NULL);
    CREATE TABLE Games (ID INTEGER PRIMARY KEY, Name TEXT NOT NULL, Region TEXT NOT NULL);
    CREATE TABLE Requirements (ID INTEGER PRIMARY KEY, Assertion TEXT NOT NULL);
    CREATE TABLE Egg_Groups (ID INTEGER PRIMARY KEY, Name TEXT NOT NULL);
    CREATE TABLE Abilities (ID INTEGER PRIMARY KEY, Name TEXT NOT NULL);
    CREATE TABLE Pokemon (
        ID INTEGER PRIMARY KEY,
        Name TEXT NOT NULL UNIQUE,
        First_Type INTEGER NOT NULL REFERENCES Types(ID),
        Second_Type INTEGER REFERENCES Types(ID),
        Average_Height REAL,
        Average_Weight REAL,
        Base_Stats TEXT NOT NULL
    );
    CREATE TABLE Moves (
        ID INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Category TEXT NOT NULL,
        Of_Type INTEGER NOT NULL REFERENCES Types(ID),
        Power INTEGER
    );
    CREATE TABLE Type_Effectiveness (
        Attacking INTEGER NOT NULL REFERENCES Types(ID),
        Defending INTEGER NOT NULL REFERENCES Types(ID),
        Multiplier INTEGER NOT NULL
    );
    CREATE TABLE Evolutions (
        ID INTEGER PRIMARY KEY,
        Pre_Evolution INTEGER NOT NULL REFERENCES Pokemon(ID),
        Post_Evolution INTEGER NOT NULL REFERENCES Pokemon(ID)
    );
    CREATE TABLE Evolution_Requirements (
        Evolution INTEGER NOT NULL REFERENCES Evolutions(ID),
        Requirement INTEGER NOT NULL REFERENCES Requirements(ID),
        Inverted INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE Locations (
        ID INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Appears_In INTEGER NOT NULL REFERENCES Games(ID)
    );
    CREATE TABLE Encounters (
        ID INTEGER PRIMARY KEY,
        Occurs_With INTEGER NOT NULL REFERENCES Pokemon(ID),
        Occurs_At INTEGER NOT NULL REFERENCES Locations(ID),
        Rarity INTEGER NOT NULL,
        Levels TEXT NOT NULL
    );
    CREATE TABLE Encounter_Requirements (
        Encounter INTEGER NOT NULL REFERENCES Encounters(ID),
        Requirement INTEGER NOT NULL REFERENCES Requirements(ID),
        Inverted INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE In_Group (Pokemon INTEGER NOT NULL, Egg_Group INTEGER NOT NULL);
    CREATE TABLE Knowable_Abilities (
        Known_By INTEGER NOT NULL,
        Knows INTEGER NOT NULL,
        Hidden INTEGER NOT NULL DEFAULT 0
    );
    CREATE TABLE Learnable_Moves (
        Learnt_By INTEGER NOT NULL,
        Learnt_In INTEGER NOT NULL,
        Learns INTEGER NOT NULL
    );
    CREATE TABLE Pokedex (National_ID INTEGER NOT NULL, Game INTEGER NOT NULL, Regional_ID INTEGER);
";

pub const DATA: &str = r#"
    INSERT INTO Types VALUES
        (1, 'Normal'), (2, 'Water'), (3, 'Rock'), (4, 'Ground'), (5, 'Electric'),
        (6, 'Fire'), (7, 'Psychic'), (8, 'Dark'), (9, 'Flying'), (10, 'Grass');

    INSERT INTO Games VALUES
        (1, 'Red', 'Kanto'), (2, 'Blue', 'Kanto'), (3, 'Gold', 'Johto'), (4, 'Diamond', 'Sinnoh');

    INSERT INTO Requirements VALUES
        (1, 'Use Thunder Stone'), (2, 'Use Water Stone'), (3, 'Use Fire Stone'),
        (4, 'High Friendship'), (5, 'Day'), (6, 'Night'), (7, 'Walking in tall grass'),
        (8, 'Fishing with Old Rod'), (9, 'Level 20');

    INSERT INTO Egg_Groups VALUES
        (1, 'Field'), (2, 'Fairy'), (3, 'Water 2'), (4, 'Flying'), (5, 'Dragon');

    INSERT INTO Abilities VALUES
        (1, 'Static'), (2, 'Lightning Rod'), (3, 'Swift Swim'), (4, 'Rattled'),
        (5, 'Keen Eye'), (6, 'Tangled Feet'), (7, 'Big Pecks'), (8, 'Run Away'), (9, 'Guts');

    INSERT INTO Pokemon VALUES
        (16, 'Pidgey', 1, 9, 0.3, 1.8,
         '{"hit_points":40,"attack":45,"defense":40,"special_attack":35,"special_defense":35,"speed":56}'),
        (19, 'Rattata', 1, NULL, 0.3, 3.5,
         '{"hit_points":30,"attack":56,"defense":35,"special_attack":25,"special_defense":35,"speed":72}'),
        (25, 'Pikachu', 5, NULL, 0.4, 6.0,
         '{"hit_points":35,"attack":55,"defense":40,"special_attack":50,"special_defense":50,"speed":90}'),
        (26, 'Raichu', 5, NULL, 0.8, 30.0,
         '{"hit_points":60,"attack":90,"defense":55,"special_attack":90,"special_defense":80,"speed":110}'),
        (95, 'Onix', 3, 4, 8.8, 210.0,
         '{"hit_points":35,"attack":45,"defense":160,"special_attack":30,"special_defense":45,"speed":70}'),
        (129, 'Magikarp', 2, NULL, 0.9, 10.0,
         '{"hit_points":20,"attack":10,"defense":55,"special_attack":15,"special_defense":20,"speed":80}'),
        (133, 'Eevee', 1, NULL, 0.3, 6.5,
         '{"hit_points":55,"attack":55,"defense":50,"special_attack":45,"special_defense":65,"speed":55}'),
        (134, 'Vaporeon', 2, NULL, 1.0, 29.0,
         '{"hit_points":130,"attack":65,"defense":60,"special_attack":110,"special_defense":95,"speed":65}'),
        (135, 'Jolteon', 5, NULL, 0.8, 24.5,
         '{"hit_points":65,"attack":65,"defense":60,"special_attack":110,"special_defense":95,"speed":130}'),
        (136, 'Flareon', 6, NULL, 0.9, 25.0,
         '{"hit_points":65,"attack":130,"defense":60,"special_attack":95,"special_defense":110,"speed":65}'),
        (152, 'Chikorita', 10, NULL, 0.9, 6.4,
         '{"hit_points":45,"attack":49,"defense":65,"special_attack":49,"special_defense":65,"speed":45}'),
        (172, 'Pichu', 5, NULL, 0.3, 2.0,
         '{"hit_points":20,"attack":40,"defense":15,"special_attack":35,"special_defense":35,"speed":60}');

    INSERT INTO Moves VALUES
        (1, 'Splash', 'Status', 1, NULL),
        (2, 'Tackle', 'Physical', 1, 40),
        (3, 'Thunder Shock', 'Special', 5, 40),
        (4, 'Quick Attack', 'Physical', 1, 40),
        (5, 'Thunderbolt', 'Special', 5, 90),
        (6, 'Growl', 'Status', 1, 0);

    INSERT INTO Type_Effectiveness VALUES
        (5, 4, 0), (5, 2, 200), (5, 9, 200), (1, 3, 50), (2, 3, 200), (2, 4, 200);

    INSERT INTO Evolutions VALUES
        (1, 172, 25),
        (2, 25, 26),
        (3, 133, 134),
        (4, 133, 135),
        (5, 133, 136),
        (6, 25, 26);

    INSERT INTO Evolution_Requirements VALUES
        (1, 4, 0),
        (2, 1, 0),
        (3, 2, 0),
        (4, 1, 0),
        (5, 3, 0),
        (6, 9, 0),
        (6, 6, 1);

    INSERT INTO Locations VALUES
        (1, 'Route 1', 1),
        (2, 'Route 1', 2),
        (3, 'Viridian Forest', 1),
        (4, 'Indigo Plateau', 1),
        (5, 'Route 29', 3),
        (6, 'Indigo Plateau', 2),
        (7, 'Twinleaf Town', 4),
        (8, 'Lake Verity', 4),
        (9, 'Route 12', 1);

    INSERT INTO Encounters VALUES
        (1, 16, 1, 50, '{"min":2,"max":5}'),
        (2, 19, 1, 50, '{"min":2,"max":4}'),
        (3, 16, 2, 100, '{"min":3,"max":5}'),
        (4, 25, 3, 5, '{"min":3,"max":5}'),
        (5, 16, 3, 95, '{"min":4,"max":6}'),
        (6, 129, 9, 100, '{"min":5,"max":10}'),
        (7, 16, 5, 60, '{"min":2,"max":4}');

    INSERT INTO Encounter_Requirements VALUES
        (1, 7, 0),
        (2, 7, 0),
        (2, 5, 0),
        (3, 7, 0),
        (4, 7, 0),
        (5, 7, 0),
        (6, 8, 0),
        (6, 6, 1),
        (7, 7, 0);

    INSERT INTO In_Group VALUES
        (25, 1), (25, 2), (129, 3), (129, 5), (16, 4), (19, 1);

    INSERT INTO Knowable_Abilities VALUES
        (25, 1, 0), (25, 2, 1),
        (129, 3, 0), (129, 4, 1),
        (16, 5, 0), (16, 6, 0), (16, 7, 1),
        (19, 8, 0), (19, 9, 0);

    INSERT INTO Learnable_Moves VALUES
        (129, 1, 1),
        (129, 1, 6),
        (129, 2, 1),
        (129, 2, 2),
        (25, 1, 3),
        (25, 1, 3),
        (25, 1, 4),
        (25, 1, 5),
        (25, 3, 3);

    INSERT INTO Pokedex VALUES
        (16, 1, 16), (19, 1, 19), (25, 1, 25), (26, 1, 26), (95, 1, 95), (129, 1, 129),
        (133, 1, 133), (134, 1, 134), (135, 1, 135), (136, 1, 136),
        (16, 2, 16), (25, 2, 25), (95, 2, 95), (129, 2, 129),
        (25, 3, 22), (95, 3, 62), (152, 3, 1), (172, 3, 21);
"#;

/// Create the fixture database in a temporary file
pub fn fixture_db() -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    populate(file.path());
    file
}

fn populate(path: &Path) {
    let conn = Connection::open(path).expect("Failed to open fixture database");
    conn.execute_batch(SCHEMA).expect("Failed to create schema");
    conn.execute_batch(DATA).expect("Failed to insert fixture data");
}

/// In-memory copy of the fixture database
pub fn fixture_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
    conn.execute_batch(SCHEMA).expect("Failed to create schema");
    conn.execute_batch(DATA).expect("Failed to insert fixture data");
    conn
}
