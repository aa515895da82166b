//! MySQL dialect.

use crate::schema::{ForeignKeySchema, TableSchema};
use crate::settings::{DialectTraits, StrategySettings};

use super::DdlStrategy;

const TRAITS: DialectTraits = DialectTraits {
    identity: "AUTO_INCREMENT",
    ..DialectTraits::new("MySql")
};

/// MySQL strategy: backtick quoting, `AUTO_INCREMENT` identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MySqlStrategy {
    settings: StrategySettings,
}

impl MySqlStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .recreate_database(true)
                .command_line("mysql -h localhost -u root --password=p4ssw0rd <{0}"),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for MySqlStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for MySqlStrategy {
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
        format!("`{name}`")
    }

    fn format_string_value(&self, value: &str) -> String {
        // Backslash is an escape character in MySQL string literals.
        format!("N'{}'", value.replace('\\', "\\\\").replace('\'', "''"))
    }

    fn write_drop_foreign_key(&self, table: &TableSchema, fk: &ForeignKeySchema) -> String {
        format!(
            "ALTER TABLE {} DROP FOREIGN KEY {};",
            self.table_name(&table.name),
            self.format_foreign_key(&table.name, &fk.column_key())
        )
    }

    fn write_drop_table(&self, table: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", self.table_name(table))
    }

    fn drop_database_sql(&self, database: &str) -> String {
        format!("DROP DATABASE IF EXISTS {};", self.format_name(database))
    }

    fn create_database_sql(&self, database: &str) -> String {
        format!("CREATE DATABASE {};", self.format_name(database))
    }

    fn write_use_database(&self, database: &str) -> String {
        format!("USE {};", self.format_name(database))
    }
}
