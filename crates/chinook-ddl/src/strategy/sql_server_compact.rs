//! SQL Server Compact Edition dialect.
//!
//! The database is a single `.sdf` file created by the client tool, so the
//! script itself has nothing to say about creating or dropping it.

use crate::schema::TableSchema;
use crate::settings::{DialectTraits, StrategySettings};

use super::{sql_server_identity_insert, DdlStrategy};

const TRAITS: DialectTraits = DialectTraits {
    script_file_extension: "sqlce",
    database_file_extension: "sdf",
    identity: "IDENTITY",
    ..DialectTraits::new("SqlServerCompact")
};

/// SQL Server Compact strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlServerCompactStrategy {
    settings: StrategySettings,
}

impl SqlServerCompactStrategy {
    /// Creates the strategy with its default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(StrategySettings::default().recreate_database(true))
    }

    /// Creates the strategy with explicit settings.
    #[must_use]
    pub const fn with_settings(settings: StrategySettings) -> Self {
        Self { settings }
    }
}

impl Default for SqlServerCompactStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DdlStrategy for SqlServerCompactStrategy {
    fn traits(&self) -> &DialectTraits {
        &TRAITS
    }

    fn settings(&self) -> &StrategySettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut StrategySettings {
        &mut self.settings
    }

    fn write_identity_insert(&self, table: &TableSchema, enabled: bool) -> String {
        sql_server_identity_insert(self, table, enabled)
    }
}
