//! Oracle dialect.
//!
//! Oracle has no `CREATE DATABASE` in the usual sense; the "database" is a
//! user (schema) that owns the tables. The script is run through `sqlplus`
//! as SYSDBA, so it creates the user and reconnects as it.

use chrono::Datelike;

use crate::error::Result;
use crate::schema::{ColumnSchema, ForeignKeyAction, ForeignKeySchema, LogicalType};
use crate::settings::{DialectTraits, StrategySettings};

use super::{parse_date, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    is_index_enabled: false,
    ..DialectTraits::new("Oracle")
};

const PASSWORD: &str = "p4ssw0rd";

/// Oracle strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleStrategy {
    settings: StrategySettings,
}

impl OracleStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .recreate_database(true)
                .command_line(
                    "chcp 65001\nset NLS_LANG=.AL32UTF8\nsqlplus -S / as sysdba @ {0}\n",
                ),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }

    fn grants(user: &str) -> String {
        ["connect", "resource", "create session", "create table", "create view"]
            .iter()
            .map(|privilege| format!("GRANT {privilege} TO {user};"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for OracleStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for OracleStrategy {
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
        name.to_string()
    }

    fn format_string_value(&self, value: &str) -> String {
        // `&` would be taken as a substitution variable by sqlplus.
        format!(
            "'{}'",
            value
                .replace('\'', "'||chr(39)||'")
                .replace('&', "'||chr(38)||'")
        )
    }

    fn format_date_value(&self, value: &str) -> Result<String> {
        let date = parse_date(value)?;
        Ok(format!(
            "TO_DATE('{}-{}-{} 00:00:00','yyyy-mm-dd hh24:mi:ss')",
            date.year(),
            date.month(),
            date.day()
        ))
    }

    fn get_store_type(&self, column: &ColumnSchema) -> String {
        match column.logical_type {
            LogicalType::String { max_length } => format!("VARCHAR2({max_length})"),
            LogicalType::Int32 => "NUMBER".to_string(),
            LogicalType::Decimal => "NUMBER(10,2)".to_string(),
            LogicalType::DateTime => "DATE".to_string(),
        }
    }

    fn write_foreign_key_delete_action(&self, fk: &ForeignKeySchema) -> String {
        match fk.on_delete {
            ForeignKeyAction::Cascade => "ON DELETE CASCADE".to_string(),
            ForeignKeyAction::NoAction => String::new(),
        }
    }

    fn write_foreign_key_update_action(&self, _fk: &ForeignKeySchema) -> String {
        String::new()
    }

    fn drop_database_sql(&self, database: &str) -> String {
        format!("DROP USER {} CASCADE;", database.to_lowercase())
    }

    fn create_database_sql(&self, database: &str) -> String {
        let user = database.to_lowercase();
        format!(
            "CREATE USER {user}\n\
             IDENTIFIED BY {PASSWORD}\n\
             DEFAULT TABLESPACE users\n\
             TEMPORARY TABLESPACE temp\n\
             QUOTA 10M ON users;\n\n{}",
            Self::grants(&user)
        )
    }

    fn write_use_database(&self, database: &str) -> String {
        let user = database.to_lowercase();
        let connect = format!("conn {user}/{PASSWORD}");
        if self.settings.is_recreate_database_enabled {
            connect
        } else {
            // The user already exists (provisioned outside the script).
            format!("{}\n\n{connect}", Self::grants(&user))
        }
    }

    fn write_finish_commit(&self) -> &'static str {
        "commit;\nexit;"
    }
}
