//! Per-dialect configuration records.
//!
//! A strategy carries two records: [`DialectTraits`], fixed for the dialect,
//! and [`StrategySettings`], which a caller may adjust before a run.

use serde::{Deserialize, Serialize};

/// Where key constraints are declared in the generated script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyDefinition {
    /// Inline on the column definition (single-column keys only).
    OnCreateTableColumn,
    /// As a trailing constraint inside `CREATE TABLE`.
    OnCreateTableBottom,
    /// In a separate `ALTER TABLE` statement after all tables exist.
    OnAlterTable,
}

/// Where the identity keyword goes relative to `NOT NULL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityPlacement {
    /// `INT NOT NULL IDENTITY`
    AfterNullability,
    /// `INT IDENTITY NOT NULL`
    BeforeNullability,
}

/// Text encoding of the written script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScriptEncoding {
    /// UTF-8 without byte order mark.
    #[default]
    Utf8,
    /// UTF-8 with a leading byte order mark.
    Utf8Bom,
    /// UTF-16 little endian with a byte order mark.
    Utf16Le,
}

impl ScriptEncoding {
    /// Encodes a rendered script into bytes.
    #[must_use]
    pub fn encode(self, script: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => script.as_bytes().to_vec(),
            Self::Utf8Bom => {
                let mut bytes = vec![0xEF, 0xBB, 0xBF];
                bytes.extend_from_slice(script.as_bytes());
                bytes
            }
            Self::Utf16Le => {
                let mut bytes = vec![0xFF, 0xFE];
                bytes.extend(script.encode_utf16().flat_map(u16::to_le_bytes));
                bytes
            }
        }
    }
}

/// Dialect-fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectTraits {
    /// Registry name, e.g. `"SqlServer"`.
    pub name: &'static str,
    /// Extension of the generated script file.
    pub script_file_extension: &'static str,
    /// Extension of the database file, for file-based engines.
    pub database_file_extension: &'static str,
    /// Identity/auto-increment token; empty when unsupported.
    pub identity: &'static str,
    /// Whether foreign key indexes are generated.
    pub is_index_enabled: bool,
    /// Position of the identity token.
    pub identity_placement: IdentityPlacement,
}

impl DialectTraits {
    /// Defaults shared by most dialects.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            script_file_extension: "sql",
            database_file_extension: "",
            identity: "",
            is_index_enabled: true,
            identity_placement: IdentityPlacement::AfterNullability,
        }
    }
}

/// Caller-adjustable configuration of a strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySettings {
    /// Placement of primary key constraints.
    pub primary_key_def: KeyDefinition,
    /// Placement of foreign key constraints.
    pub foreign_key_def: KeyDefinition,
    /// Whether single-column integer keys are generated by the engine.
    pub is_identity_enabled: bool,
    /// Whether the script drops and re-creates the database.
    pub is_recreate_database_enabled: bool,
    /// Shell command template; `{0}` stands for the script file name.
    pub command_line_format: String,
    /// Encoding of the written script.
    pub encoding: ScriptEncoding,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            primary_key_def: KeyDefinition::OnCreateTableBottom,
            foreign_key_def: KeyDefinition::OnAlterTable,
            is_identity_enabled: false,
            is_recreate_database_enabled: false,
            command_line_format: String::new(),
            encoding: ScriptEncoding::Utf8,
        }
    }
}

impl StrategySettings {
    /// Enables re-creation of the database.
    #[must_use]
    pub const fn recreate_database(mut self, enabled: bool) -> Self {
        self.is_recreate_database_enabled = enabled;
        self
    }

    /// Enables identity columns.
    #[must_use]
    pub const fn identity(mut self, enabled: bool) -> Self {
        self.is_identity_enabled = enabled;
        self
    }

    /// Sets the command line template.
    #[must_use]
    pub fn command_line(mut self, format: impl Into<String>) -> Self {
        self.command_line_format = format.into();
        self
    }

    /// Sets the foreign key placement.
    #[must_use]
    pub const fn foreign_keys(mut self, def: KeyDefinition) -> Self {
        self.foreign_key_def = def;
        self
    }

    /// Sets the primary key placement.
    #[must_use]
    pub const fn primary_keys(mut self, def: KeyDefinition) -> Self {
        self.primary_key_def = def;
        self
    }

    /// Sets the script encoding.
    #[must_use]
    pub const fn encoding(mut self, encoding: ScriptEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
