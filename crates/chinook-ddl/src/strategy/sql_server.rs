//! Microsoft SQL Server dialect.

use crate::schema::TableSchema;
use crate::settings::{DialectTraits, ScriptEncoding, StrategySettings};

use super::{sql_server_identity_insert, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    identity: "IDENTITY",
    ..DialectTraits::new("SqlServer")
};

/// SQL Server strategy: bracket quoting, `dbo` schema, `GO` batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlServerStrategy {
    settings: StrategySettings,
}

impl SqlServerStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(
            StrategySettings::default()
                .recreate_database(true)
                .command_line(r"sqlcmd -E -S .\sqlexpress -i {0} -b -m 1")
                .encoding(ScriptEncoding::Utf8Bom),
        )
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for SqlServerStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for SqlServerStrategy {
    fn traits(&self) -> &DialectTraits {
        &TRAITS
    }

    fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut StrategySettings {
        &mut self.settings
    }

    fn get_fully_qualified_name(&self, schema: &str, name: &str) -> String {
        format!("{}.{}", self.format_name(schema), self.format_name(name))
    }

    fn get_clustered(&self, table: &TableSchema) -> &'static str {
        if table.is_composite_key() {
            "NONCLUSTERED"
        } else {
            "CLUSTERED"
        }
    }

    fn write_drop_table(&self, table: &str) -> String {
        let name = self.table_name(table);
        format!("IF OBJECT_ID(N'{name}', 'U') IS NOT NULL DROP TABLE {name};")
    }

    fn drop_database_sql(&self, database: &str) -> String {
        let name = self.format_name(database);
        format!(
            "IF EXISTS (SELECT name FROM master.dbo.sysdatabases WHERE name = N'{database}')\n\
             BEGIN\n\
             \tALTER DATABASE {name} SET OFFLINE WITH ROLLBACK IMMEDIATE;\n\
             \tALTER DATABASE {name} SET ONLINE;\n\
             \tDROP DATABASE {name};\n\
             END"
        )
    }

    fn create_database_sql(&self, database: &str) -> String {
        format!("CREATE DATABASE {};", self.format_name(database))
    }

    fn write_use_database(&self, database: &str) -> String {
        format!("USE {};", self.format_name(database))
    }

    fn write_execute_command(&self) -> &'static str {
        "GO"
    }

    fn write_identity_insert(&self, table: &TableSchema, enabled: bool) -> String {
        sql_server_identity_insert(self, table, enabled)
    }
}
