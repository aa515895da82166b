//! Dialect-aware DDL rendering for the Chinook sample database.
//!
//! `chinook-ddl` renders one dialect-neutral schema, plus its rows, into a
//! complete SQL script for each supported engine:
//! - Every engine is a [`strategy::DdlStrategy`] implementation
//! - Shared behavior lives in the trait's default methods; dialects override
//!   only what differs (quoting, type names, literals, lifecycle statements)
//! - Unknown types, malformed literals and unknown dialect names are errors,
//!   never placeholders
//!
//! # Architecture
//!
//! - **Schema** - Tables, columns and keys ([`schema`])
//! - **Data** - Literal rows to insert ([`data`])
//! - **Settings** - Fixed dialect traits and adjustable strategy settings
//! - **Strategy** - Per-dialect rendering of names, types, constraints and
//!   database lifecycle statements
//! - **Registry** - Dialect selection by name
//! - **Script** - Assembles the complete script for one strategy
//!
//! # Example
//!
//! ```rust
//! use chinook_ddl::prelude::*;
//!
//! let schema = chinook_schema();
//! let dataset = sample_dataset();
//!
//! let mut strategy = lookup("Sqlite").unwrap();
//! strategy.settings_mut().is_identity_enabled = true;
//!
//! let writer = ScriptWriter::new(strategy.as_ref());
//! let script = writer.generate(&schema, &dataset).unwrap();
//!
//! assert_eq!(writer.file_name(), "Chinook_Sqlite_AutoIncrementPKs.sql");
//! assert!(script.contains("[GenreId] INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT"));
//! ```

pub mod data;
pub mod error;
pub mod reference;
pub mod registry;
pub mod schema;
pub mod script;
pub mod settings;
pub mod strategy;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::data::{Dataset, TableData, Value};
    pub use crate::error::{DdlError, Result};
    pub use crate::reference::{chinook_schema, sample_dataset, DATABASE_NAME};
    pub use crate::registry::{lookup, Dialect};
    pub use crate::schema::{
        ColumnSchema, DatabaseSchema, ForeignKeyAction, ForeignKeySchema, LogicalType,
        TableSchema,
    };
    pub use crate::script::{ScriptWriter, CHINOOK_VERSION};
    pub use crate::settings::{
        DialectTraits, IdentityPlacement, KeyDefinition, ScriptEncoding, StrategySettings,
    };
    pub use crate::strategy::{
        Db2Strategy, DdlStrategy, EffiProzStrategy, MySqlStrategy, OracleStrategy,
        PostgreSqlStrategy, SqlServerCompactStrategy, SqlServerStrategy, SqliteStrategy,
    };
}
