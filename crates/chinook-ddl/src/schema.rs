//! Schema representation types.
//!
//! These types describe the abstract, dialect-neutral shape of the database.
//! They are built once (usually from [`crate::reference::chinook_schema`]) and
//! only read while a strategy renders them.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};

/// Logical column types understood by every dialect.
///
/// The set is closed: every strategy maps every variant, so there is no
/// "unmapped type" case at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LogicalType {
    /// Unicode string with a maximum length.
    String {
        /// Maximum length in characters.
        max_length: u32,
    },
    /// 32-bit signed integer.
    Int32,
    /// Fixed-point decimal (money columns).
    Decimal,
    /// Date and time.
    DateTime,
}

impl LogicalType {
    /// Returns a short name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String { .. } => "string",
            Self::Int32 => "int32",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
        }
    }
}

/// Foreign key action (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ForeignKeyAction {
    /// No action (error if referenced row is deleted/updated).
    #[default]
    NoAction,
    /// Cascade the delete/update to referencing rows.
    Cascade,
}

impl ForeignKeyAction {
    /// Returns the SQL representation of this action.
    #[must_use]
    pub const fn to_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Cascade => "CASCADE",
        }
    }
}

/// Schema definition for a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Logical data type.
    pub logical_type: LogicalType,
    /// Whether the column allows NULL values.
    pub nullable: bool,
    /// Whether this column is part of the primary key.
    pub primary_key: bool,
}

impl ColumnSchema {
    /// Creates a new nullable column.
    #[must_use]
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            nullable: true,
            primary_key: false,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the column as nullable.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Marks the column as (part of) the primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false; // Primary keys are always NOT NULL
        self
    }

    /// Returns the maximum length for string columns.
    #[must_use]
    pub const fn max_length(&self) -> Option<u32> {
        match self.logical_type {
            LogicalType::String { max_length } => Some(max_length),
            _ => None,
        }
    }
}

/// Creates a string column with the given maximum length.
#[must_use]
pub fn string(name: &str, max_length: u32) -> ColumnSchema {
    ColumnSchema::new(name, LogicalType::String { max_length })
}

/// Creates a 32-bit integer column.
#[must_use]
pub fn int32(name: &str) -> ColumnSchema {
    ColumnSchema::new(name, LogicalType::Int32)
}

/// Creates a decimal column.
#[must_use]
pub fn decimal(name: &str) -> ColumnSchema {
    ColumnSchema::new(name, LogicalType::Decimal)
}

/// Creates a date/time column.
#[must_use]
pub fn datetime(name: &str) -> ColumnSchema {
    ColumnSchema::new(name, LogicalType::DateTime)
}

/// Schema definition for a foreign key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKeySchema {
    /// Column(s) in the referencing table.
    pub columns: Vec<String>,
    /// Referenced table name.
    pub references_table: String,
    /// Referenced column(s).
    pub references_columns: Vec<String>,
    /// Action on delete.
    #[serde(default)]
    pub on_delete: ForeignKeyAction,
    /// Action on update.
    #[serde(default)]
    pub on_update: ForeignKeyAction,
}

impl ForeignKeySchema {
    /// Creates a single-column foreign key with `NO ACTION` rules.
    #[must_use]
    pub fn new(column: &str, references_table: &str, references_column: &str) -> Self {
        Self {
            columns: vec![column.to_string()],
            references_table: references_table.to_string(),
            references_columns: vec![references_column.to_string()],
            on_delete: ForeignKeyAction::NoAction,
            on_update: ForeignKeyAction::NoAction,
        }
    }

    /// Sets the delete rule.
    #[must_use]
    pub fn on_delete(mut self, action: ForeignKeyAction) -> Self {
        self.on_delete = action;
        self
    }

    /// Sets the update rule.
    #[must_use]
    pub fn on_update(mut self, action: ForeignKeyAction) -> Self {
        self.on_update = action;
        self
    }

    /// Owning column names concatenated, as used in constraint names.
    #[must_use]
    pub fn column_key(&self) -> String {
        self.columns.concat()
    }
}

/// Complete schema definition for a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,
    /// Column definitions, in declaration order.
    pub columns: Vec<ColumnSchema>,
    /// Primary key column(s), in key order.
    #[serde(default)]
    pub primary_key: Vec<String>,
    /// Foreign key definitions.
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeySchema>,
}

impl TableSchema {
    /// Creates a new table schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Adds a column to the table.
    #[must_use]
    pub fn column(mut self, column: ColumnSchema) -> Self {
        if column.primary_key && !self.primary_key.contains(&column.name) {
            self.primary_key.push(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// Sets the primary key columns.
    #[must_use]
    pub fn primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = columns.iter().map(ToString::to_string).collect();
        for column in &mut self.columns {
            if self.primary_key.contains(&column.name) {
                column.primary_key = true;
                column.nullable = false;
            }
        }
        self
    }

    /// Adds a foreign key.
    #[must_use]
    pub fn foreign_key(mut self, fk: ForeignKeySchema) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    /// Gets a column by name.
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns whether the primary key spans more than one column.
    #[must_use]
    pub fn is_composite_key(&self) -> bool {
        self.primary_key.len() > 1
    }

    /// Returns the column eligible for identity/serial generation: the
    /// table's single-column integer primary key.
    #[must_use]
    pub fn identity_column(&self) -> Option<&ColumnSchema> {
        match self.primary_key.as_slice() {
            [only] => self
                .get_column(only)
                .filter(|c| c.logical_type == LogicalType::Int32),
            _ => None,
        }
    }

    /// Returns the single-column foreign key owned by `column`, if any.
    #[must_use]
    pub fn foreign_key_for(&self, column: &str) -> Option<&ForeignKeySchema> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.columns.len() == 1 && fk.columns[0] == column)
    }
}

/// The complete database schema (all tables).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database name.
    pub name: String,
    /// All tables in dependency order (referenced tables first).
    pub tables: Vec<TableSchema>,
}

impl DatabaseSchema {
    /// Creates a new empty database schema.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Adds a table to the schema.
    #[must_use]
    pub fn table(mut self, table: TableSchema) -> Self {
        self.tables.push(table);
        self
    }

    /// Gets a table by name.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Returns table names.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }

    /// Parses a schema from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] for malformed JSON or unknown types.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the structural invariants of the schema.
    ///
    /// Every problem found is reported, not only the first one.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidSchema`] (or `Multiple`) listing every problem.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        let mut seen_tables = HashSet::new();

        for table in &self.tables {
            if !seen_tables.insert(table.name.as_str()) {
                errors.push(DdlError::InvalidSchema(format!(
                    "duplicate table '{}'",
                    table.name
                )));
            }

            let mut seen_columns = HashSet::new();
            for column in &table.columns {
                if !seen_columns.insert(column.name.as_str()) {
                    errors.push(DdlError::InvalidSchema(format!(
                        "duplicate column '{}.{}'",
                        table.name, column.name
                    )));
                }
            }

            for key in &table.primary_key {
                match table.get_column(key) {
                    None => errors.push(DdlError::InvalidSchema(format!(
                        "primary key column '{}.{key}' does not exist",
                        table.name
                    ))),
                    Some(column) if !column.primary_key => {
                        errors.push(DdlError::InvalidSchema(format!(
                            "column '{}.{key}' is listed in the primary key but not flagged",
                            table.name
                        )));
                    }
                    Some(_) => {}
                }
            }

            for column in &table.columns {
                if column.primary_key && !table.primary_key.contains(&column.name) {
                    errors.push(DdlError::InvalidSchema(format!(
                        "column '{}.{}' is flagged as primary key but missing from the key list",
                        table.name, column.name
                    )));
                }
            }

            for fk in &table.foreign_keys {
                errors.extend(self.check_foreign_key(table, fk));
            }
        }

        DdlError::collect(errors).map_or(Ok(()), Err)
    }

    fn check_foreign_key(&self, table: &TableSchema, fk: &ForeignKeySchema) -> Vec<DdlError> {
        let mut errors = Vec::new();

        if fk.columns.is_empty() || fk.columns.len() != fk.references_columns.len() {
            errors.push(DdlError::InvalidSchema(format!(
                "foreign key on '{}' has {} owning column(s) but {} referenced column(s)",
                table.name,
                fk.columns.len(),
                fk.references_columns.len()
            )));
        }

        for column in &fk.columns {
            if table.get_column(column).is_none() {
                errors.push(DdlError::InvalidSchema(format!(
                    "foreign key column '{}.{column}' does not exist",
                    table.name
                )));
            }
        }

        match self.get_table(&fk.references_table) {
            None => errors.push(DdlError::InvalidSchema(format!(
                "table '{}' references unknown table '{}'",
                table.name, fk.references_table
            ))),
            Some(target) => {
                for column in &fk.references_columns {
                    if target.get_column(column).is_none() {
                        errors.push(DdlError::InvalidSchema(format!(
                            "table '{}' references unknown column '{}.{column}'",
                            table.name, target.name
                        )));
                    }
                }
            }
        }

        errors
    }
}
