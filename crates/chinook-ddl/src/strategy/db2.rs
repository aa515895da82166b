//! IBM Db2 dialect.

use crate::error::Result;
use crate::schema::{ColumnSchema, LogicalType};
use crate::settings::{DialectTraits, StrategySettings};

use super::{iso_date_value, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    identity: "GENERATED BY DEFAULT AS IDENTITY",
    ..DialectTraits::new("Db2")
};

/// Db2 strategy. The database itself is recreated by the `db2` command
/// line, not by the script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Db2Strategy {
    settings: StrategySettings,
}

impl Db2Strategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .recreate_database(true)
                .command_line(
                    "db2 disconnect ALL\n\
                     db2 drop database Chinook\n\
                     db2 create database Chinook\n\
                     db2 connect to Chinook\n\
                     db2 -tf {0} -z {0}.log\n",
                ),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for Db2Strategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for Db2Strategy {
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
        format!("\"{name}\"")
    }

    fn format_date_value(&self, value: &str) -> Result<String> {
        iso_date_value(value)
    }

    fn get_store_type(&self, column: &ColumnSchema) -> String {
        match column.logical_type {
            LogicalType::String { max_length } => format!("VARCHAR({max_length})"),
            LogicalType::Int32 => "INT".to_string(),
            LogicalType::Decimal => "NUMERIC(10,2)".to_string(),
            LogicalType::DateTime => "DATE".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::chinook_schema;

    #[test]
    fn test_db2_columns() {
        let schema = chinook_schema();
        let employee = schema.get_table("Employee").unwrap();
        let strategy = Db2Strategy::with_settings(StrategySettings::default().identity(true));

        let sql = strategy.write_create_table(employee);
        assert!(sql.contains("\"EmployeeId\" INT NOT NULL GENERATED BY DEFAULT AS IDENTITY,"));
        assert!(sql.contains("\"BirthDate\" DATE,"));
        assert!(sql.contains("\"Title\" VARCHAR(30),"));
    }

    #[test]
    fn test_db2_dates() {
        let strategy = Db2Strategy::new();
        assert_eq!(
            strategy.format_date_value("1962-02-18").unwrap(),
            "'1962-02-18 00:00:00'"
        );
    }

    #[test]
    fn test_db2_command_line_repeats_script_name() {
        let strategy = Db2Strategy::new();
        let command = strategy.command_line("Chinook_Db2.sql");
        assert!(command.ends_with("db2 -tf Chinook_Db2.sql -z Chinook_Db2.sql.log\n"));
        assert!(!command.contains("{0}"));
        assert_eq!(strategy.write_create_database("Chinook"), "");
    }
}
