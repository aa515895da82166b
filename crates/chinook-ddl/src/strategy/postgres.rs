//! PostgreSQL dialect.
//!
//! Identifiers are folded to snake_case and left unquoted, so `InvoiceLine`
//! becomes `invoice_line` and constraint names follow PostgreSQL's own
//! `<table>_pkey` / `<table>_<column>_fkey` convention.

use heck::ToSnakeCase;

use crate::error::Result;
use crate::schema::{ColumnSchema, LogicalType, TableSchema};
use crate::settings::{DialectTraits, StrategySettings};

use super::{iso_date_value, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    identity: "SERIAL",
    ..DialectTraits::new("PostgreSql")
};

/// PostgreSQL strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgreSqlStrategy {
    settings: StrategySettings,
}

impl PostgreSqlStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .recreate_database(true)
                .command_line("psql -f {0} -q -U postgres"),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for PostgreSqlStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for PostgreSqlStrategy {
    fn traits(&self) -> &DialectTraits {
        &TRAITS
    }

    fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut StrategySettings {
        &mut self.settings
    }

    fn format_name(&self, name: &str) -> String {
        name.to_snake_case()
    }

    fn format_string_value(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn format_date_value(&self, value: &str) -> Result<String> {
        iso_date_value(value)
    }

    fn get_store_type(&self, column: &ColumnSchema) -> String {
        match column.logical_type {
            LogicalType::String { max_length } => format!("VARCHAR({max_length})"),
            LogicalType::Int32 => "INT".to_string(),
            LogicalType::Decimal => "NUMERIC(10,2)".to_string(),
            LogicalType::DateTime => "TIMESTAMP".to_string(),
        }
    }

    fn identity_store_type(&self) -> Option<&'static str> {
        Some(self.identity())
    }

    // SERIAL sequences do not see explicit key values.
    fn write_identity_reset(&self, table: &TableSchema) -> String {
        match table.identity_column() {
            Some(column) if self.is_identity_active() => {
                let name = self.table_name(&table.name);
                let key = self.format_name(&column.name);
                format!(
                    "SELECT setval(pg_get_serial_sequence('{name}', '{key}'), (SELECT MAX({key}) FROM {name}));"
                )
            }
            _ => String::new(),
        }
    }

    fn format_primary_key(&self, table: &str) -> String {
        self.format_name(&format!("{table}_pkey"))
    }

    fn format_foreign_key(&self, table: &str, column: &str) -> String {
        self.format_name(&format!("{table}_{column}_fkey"))
    }

    fn format_foreign_key_index(&self, table: &str, column: &str) -> String {
        self.format_name(&format!("{table}_{column}_idx"))
    }

    fn drop_database_sql(&self, database: &str) -> String {
        format!("DROP DATABASE IF EXISTS {};", self.format_name(database))
    }

    fn create_database_sql(&self, database: &str) -> String {
        format!("CREATE DATABASE {};", self.format_name(database))
    }

    // psql meta-command: no trailing semicolon.
    fn write_use_database(&self, database: &str) -> String {
        format!("\\c {}", self.format_name(database))
    }
}
