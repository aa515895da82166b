//! SQLite dialect.
//!
//! SQLite cannot add constraints to an existing table, so keys are always
//! declared inside `CREATE TABLE`. With identity enabled the key column
//! becomes an `INTEGER PRIMARY KEY AUTOINCREMENT` rowid alias, which must be
//! declared on the column itself.

use crate::error::Result;
use crate::schema::{ColumnSchema, ForeignKeySchema, LogicalType, TableSchema};
use crate::settings::{DialectTraits, KeyDefinition, StrategySettings};

use super::{iso_date_value, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    database_file_extension: "sqlite",
    identity: "AUTOINCREMENT",
    ..DialectTraits::new("Sqlite")
};

/// SQLite strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqliteStrategy {
    settings: StrategySettings,
}

impl SqliteStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .foreign_keys(KeyDefinition::OnCreateTableBottom)
                .command_line("sqlite3 -init {0} {0}ite"),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for SqliteStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for SqliteStrategy {
    fn traits(&self) -> &DialectTraits {
        &TRAITS
    }

    fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut StrategySettings {
        &mut self.settings
    }

    fn format_string_value(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn format_date_value(&self, value: &str) -> Result<String> {
        iso_date_value(value)
    }

    fn get_store_type(&self, column: &ColumnSchema) -> String {
        match column.logical_type {
            LogicalType::String { max_length } => format!("NVARCHAR({max_length})"),
            LogicalType::Int32 => "INTEGER".to_string(),
            LogicalType::Decimal => "NUMERIC(10,2)".to_string(),
            LogicalType::DateTime => "DATETIME".to_string(),
        }
    }

    fn is_primary_key_inline(&self, table: &TableSchema) -> bool {
        let has_identity = table
            .identity_column()
            .is_some_and(|c| self.is_identity_column(table, c));
        has_identity
            || (self.settings.primary_key_def == KeyDefinition::OnCreateTableColumn
                && table.primary_key.len() == 1)
    }

    fn primary_key_placement(&self, table: &TableSchema) -> Option<KeyDefinition> {
        if table.primary_key.is_empty() {
            None
        } else if self.is_primary_key_inline(table) {
            Some(KeyDefinition::OnCreateTableColumn)
        } else {
            Some(KeyDefinition::OnCreateTableBottom)
        }
    }

    fn foreign_key_placement(&self, fk: &ForeignKeySchema) -> KeyDefinition {
        match self.settings.foreign_key_def {
            KeyDefinition::OnCreateTableColumn if fk.columns.len() == 1 => {
                KeyDefinition::OnCreateTableColumn
            }
            _ => KeyDefinition::OnCreateTableBottom,
        }
    }

    fn write_drop_foreign_key(&self, _table: &TableSchema, _fk: &ForeignKeySchema) -> String {
        String::new()
    }

    fn write_drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", self.table_name(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::chinook_schema;

    #[test]
    fn test_sqlite_keys_inside_create_table() {
        let schema = chinook_schema();
        let album = schema.get_table("Album").unwrap();
        let strategy = SqliteStrategy::new();

        let sql = strategy.write_create_table(album);
        assert_eq!(
            sql,
            "CREATE TABLE [Album]\n(\n    \
             [AlbumId] INTEGER NOT NULL,\n    \
             [Title] NVARCHAR(160) NOT NULL,\n    \
             [ArtistId] INTEGER NOT NULL,\n    \
             CONSTRAINT [PK_Album] PRIMARY KEY ([AlbumId]),\n    \
             CONSTRAINT [FK_AlbumArtistId] FOREIGN KEY ([ArtistId]) REFERENCES [Artist] ([ArtistId]) \
             ON DELETE NO ACTION ON UPDATE NO ACTION\n);"
        );
    }

    #[test]
    fn test_sqlite_alter_table_falls_back_to_bottom() {
        let schema = chinook_schema();
        let album = schema.get_table("Album").unwrap();
        let strategy = SqliteStrategy::with_settings(
            StrategySettings::default()
                .primary_keys(KeyDefinition::OnAlterTable)
                .foreign_keys(KeyDefinition::OnAlterTable),
        );
        assert_eq!(
            strategy.primary_key_placement(album),
            Some(KeyDefinition::OnCreateTableBottom)
        );
        assert_eq!(
            strategy.foreign_key_placement(&album.foreign_keys[0]),
            KeyDefinition::OnCreateTableBottom
        );
    }

    #[test]
    fn test_sqlite_autoincrement_is_inline() {
        let schema = chinook_schema();
        let genre = schema.get_table("Genre").unwrap();
        let strategy = SqliteStrategy::with_settings(StrategySettings::default().identity(true));

        assert!(strategy.is_primary_key_inline(genre));
        assert_eq!(
            strategy.write_create_column(genre, &genre.columns[0]),
            "[GenreId] INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT"
        );
        assert!(!strategy.write_create_table(genre).contains("CONSTRAINT"));
    }

    #[test]
    fn test_sqlite_drop_statements() {
        let schema = chinook_schema();
        let album = schema.get_table("Album").unwrap();
        let strategy = SqliteStrategy::new();
        assert_eq!(strategy.write_drop_foreign_key(album, &album.foreign_keys[0]), "");
        assert_eq!(strategy.write_drop_table("Album"), "DROP TABLE IF EXISTS [Album];");
        assert_eq!(
            strategy.command_line("Chinook_Sqlite.sql"),
            "sqlite3 -init Chinook_Sqlite.sql Chinook_Sqlite.sqlite"
        );
    }
}
