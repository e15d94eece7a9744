/// Column data type as declared in the game data database
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnType {
    Integer,
    Real,
    Text,
    /// Stored as INTEGER 0/1
    Boolean,
    /// JSON object stored as TEXT
    Json,
}

impl ColumnType {
    /// SQLite type affinity this column is expected to carry
    pub fn affinity(&self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean => "INTEGER",
            ColumnType::Real => "REAL",
            ColumnType::Text | ColumnType::Json => "TEXT",
        }
    }

    /// Whether a declared column type (as reported by `PRAGMA table_info`)
    /// resolves to this column's affinity, following SQLite's affinity rules.
    pub fn accepts_declared(&self, declared: &str) -> bool {
        let declared = declared.to_ascii_uppercase();
        let affinity = if declared.contains("INT") {
            "INTEGER"
        } else if declared.contains("CHAR") || declared.contains("CLOB") || declared.contains("TEXT") {
            "TEXT"
        } else if declared.contains("REAL") || declared.contains("FLOA") || declared.contains("DOUB") {
            "REAL"
        } else {
            // BLOB/NUMERIC/untyped columns can hold anything we read
            return true;
        };
        affinity == self.affinity() || (affinity == "INTEGER" && *self == ColumnType::Real)
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self { name, col_type }
    }
}

/// Table schema definition
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}
