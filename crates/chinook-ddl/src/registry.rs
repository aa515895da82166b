//! Dialect selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::strategy::{
    Db2Strategy, DdlStrategy, EffiProzStrategy, MySqlStrategy, OracleStrategy,
    PostgreSqlStrategy, SqlServerCompactStrategy, SqlServerStrategy, SqliteStrategy,
};

/// Supported target dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Microsoft SQL Server.
    SqlServer,
    /// Microsoft SQL Server Compact Edition.
    SqlServerCompact,
    /// MySQL.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// Oracle.
    Oracle,
    /// IBM Db2.
    Db2,
    /// SQLite.
    Sqlite,
    /// EffiProz.
    EffiProz,
}

impl Dialect {
    /// Every dialect, in generation order.
    pub const ALL: [Self; 8] = [
        Self::SqlServer,
        Self::SqlServerCompact,
        Self::MySql,
        Self::PostgreSql,
        Self::Oracle,
        Self::Db2,
        Self::Sqlite,
        Self::EffiProz,
    ];

    /// Registry names of every dialect, in the same order as [`Self::ALL`].
    pub const NAMES: &'static [&'static str] = &[
        "SqlServer",
        "SqlServerCompact",
        "MySql",
        "PostgreSql",
        "Oracle",
        "Db2",
        "Sqlite",
        "EffiProz",
    ];

    /// Returns the registry name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SqlServer => "SqlServer",
            Self::SqlServerCompact => "SqlServerCompact",
            Self::MySql => "MySql",
            Self::PostgreSql => "PostgreSql",
            Self::Oracle => "Oracle",
            Self::Db2 => "Db2",
            Self::Sqlite => "Sqlite",
            Self::EffiProz => "EffiProz",
        }
    }

    /// Creates the dialect's strategy with default settings.
    #[must_use]
    pub fn strategy(self) -> Box<dyn DdlStrategy> {
        match self {
            Self::SqlServer => Box::new(SqlServerStrategy::new()),
            Self::SqlServerCompact => Box::new(SqlServerCompactStrategy::new()),
            Self::MySql => Box::new(MySqlStrategy::new()),
            Self::PostgreSql => Box::new(PostgreSqlStrategy::new()),
            Self::Oracle => Box::new(OracleStrategy::new()),
            Self::Db2 => Box::new(Db2Strategy::new()),
            Self::Sqlite => Box::new(SqliteStrategy::new()),
            Self::EffiProz => Box::new(EffiProzStrategy::new()),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DdlError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let alias = match name.to_ascii_lowercase().as_str() {
            "mssql" => Some(Self::SqlServer),
            "postgres" | "postgresql" => Some(Self::PostgreSql),
            _ => None,
        };

        alias
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|d| d.as_str().eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| DdlError::UnknownDialect(s.to_string()))
    }
}

/// Returns the strategy registered under `name`.
///
/// Unknown names are an error; there is no fallback dialect.
///
/// # Errors
///
/// Returns [`DdlError::UnknownDialect`] for an unsupported name.
pub fn lookup(name: &str) -> Result<Box<dyn DdlStrategy>> {
    Ok(name.parse::<Dialect>()?.strategy())
}
