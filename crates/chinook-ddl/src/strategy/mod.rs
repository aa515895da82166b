//! DDL rendering strategies.
//!
//! Every target database is one implementation of [`DdlStrategy`]. The trait
//! carries the shared defaults (SQL Server flavoured, as most engines accept
//! them); each dialect overrides only what differs.

mod db2;
mod effiproz;
mod mysql;
mod oracle;
mod postgres;
mod sql_server;
mod sql_server_compact;
mod sqlite;

pub use db2::Db2Strategy;
pub use effiproz::EffiProzStrategy;
pub use mysql::MySqlStrategy;
pub use oracle::OracleStrategy;
pub use postgres::PostgreSqlStrategy;
pub use sql_server::SqlServerStrategy;
pub use sql_server_compact::SqlServerCompactStrategy;
pub use sqlite::SqliteStrategy;

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::data::Value;
use crate::error::{DdlError, Result};
use crate::schema::{ColumnSchema, ForeignKeySchema, LogicalType, TableSchema};
use crate::settings::{DialectTraits, IdentityPlacement, KeyDefinition, StrategySettings};

/// Schema owning the tables on engines that qualify names.
pub const DEFAULT_SCHEMA: &str = "dbo";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %I:%M:%S %p",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a human-readable date or date-time literal.
///
/// # Errors
///
/// Returns [`DdlError::InvalidDate`] when no format matches.
pub fn parse_date(value: &str) -> Result<NaiveDateTime> {
    let text = value.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DdlError::InvalidDate(value.to_string()))
}

/// Checks that `value` is a plain decimal literal (`-12.50`, `0.99`, `3`)
/// and returns it trimmed.
///
/// # Errors
///
/// Returns [`DdlError::InvalidNumber`] for anything but a plain decimal.
pub fn parse_decimal(value: &str) -> Result<String> {
    let text = value.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let valid = !whole.is_empty()
        && all_digits(whole)
        && all_digits(fraction)
        && !(digits.contains('.') && fraction.is_empty());

    if valid {
        Ok(text.to_string())
    } else {
        Err(DdlError::InvalidNumber(value.to_string()))
    }
}

/// Renders a date as `'YYYY-MM-DD HH:MM:SS'`.
///
/// # Errors
///
/// Returns [`DdlError::InvalidDate`] when the text is not a date.
pub fn iso_date_value(value: &str) -> Result<String> {
    Ok(format!("'{}'", parse_date(value)?.format("%Y-%m-%d %H:%M:%S")))
}

/// Contract of a dialect-specific DDL renderer.
///
/// All methods are pure functions of their arguments and of the strategy's
/// configuration; rendering never mutates the strategy.
pub trait DdlStrategy: Send + Sync + fmt::Debug {
    /// Fixed configuration of the dialect.
    fn traits(&self) -> &DialectTraits;

    /// Current settings.
    fn settings(&self) -> &StrategySettings;

    /// Mutable settings, for callers configuring a run.
    fn settings_mut(&mut self) -> &mut StrategySettings;

    /// Returns the dialect name.
    fn name(&self) -> &'static str {
        self.traits().name
    }

    /// Returns the identity/auto-increment token, empty when unsupported.
    fn identity(&self) -> &'static str {
        self.traits().identity
    }

    /// Returns whether foreign key indexes are generated.
    fn is_index_enabled(&self) -> bool {
        self.traits().is_index_enabled
    }

    // ---------------------------------------------------------------------
    // Identifiers and literals
    // ---------------------------------------------------------------------

    /// Quotes an identifier (table name, column name, etc.).
    fn format_name(&self, name: &str) -> String {
        format!("[{name}]")
    }

    /// Returns a schema-qualified object name.
    fn get_fully_qualified_name(&self, _schema: &str, name: &str) -> String {
        self.format_name(name)
    }

    /// Returns the name used to reference a table in statements.
    fn table_name(&self, table: &str) -> String {
        self.get_fully_qualified_name(DEFAULT_SCHEMA, table)
    }

    /// Renders a string literal.
    fn format_string_value(&self, value: &str) -> String {
        format!("N'{}'", value.replace('\'', "''"))
    }

    /// Renders a date literal from a human-readable date.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidDate`] for unparsable text.
    fn format_date_value(&self, value: &str) -> Result<String> {
        let date = parse_date(value)?;
        Ok(format!("'{}/{}/{}'", date.year(), date.month(), date.day()))
    }

    /// Renders a decimal literal.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidNumber`] for a malformed decimal.
    fn format_decimal_value(&self, value: &str) -> Result<String> {
        parse_decimal(value)
    }

    /// Renders any cell value.
    ///
    /// # Errors
    ///
    /// Fails when a date or decimal literal is malformed.
    fn format_value(&self, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok("NULL".to_string()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Decimal(d) => self.format_decimal_value(d),
            Value::Text(s) => Ok(self.format_string_value(s)),
            Value::Date(d) => self.format_date_value(d),
        }
    }

    /// Maps a column's logical type to the native type name.
    fn get_store_type(&self, column: &ColumnSchema) -> String {
        match column.logical_type {
            LogicalType::String { max_length } => format!("NVARCHAR({max_length})"),
            LogicalType::Int32 => "INT".to_string(),
            LogicalType::Decimal => "NUMERIC(10,2)".to_string(),
            LogicalType::DateTime => "DATETIME".to_string(),
        }
    }

    /// Formats a list of names joined by `delimiter`.
    fn get_columns(&self, names: &[String], delimiter: char) -> String {
        names
            .iter()
            .map(|n| self.format_name(n))
            .collect::<Vec<_>>()
            .join(&format!("{delimiter} "))
    }

    // ---------------------------------------------------------------------
    // Constraints
    // ---------------------------------------------------------------------

    /// Returns the primary key constraint name of a table.
    fn format_primary_key(&self, table: &str) -> String {
        self.format_name(&format!("PK_{table}"))
    }

    /// Returns the foreign key constraint name for `table.column`.
    fn format_foreign_key(&self, table: &str, column: &str) -> String {
        self.format_name(&format!("FK_{table}{column}"))
    }

    /// Returns the name of the index backing a foreign key.
    fn format_foreign_key_index(&self, table: &str, column: &str) -> String {
        self.format_name(&format!("IFK_{table}{column}"))
    }

    /// Returns the clustering hint of the primary key, if the dialect has one.
    fn get_clustered(&self, _table: &TableSchema) -> &'static str {
        ""
    }

    /// Renders the delete rule of a foreign key.
    fn write_foreign_key_delete_action(&self, fk: &ForeignKeySchema) -> String {
        format!("ON DELETE {}", fk.on_delete.to_sql())
    }

    /// Renders the update rule of a foreign key.
    fn write_foreign_key_update_action(&self, fk: &ForeignKeySchema) -> String {
        format!("ON UPDATE {}", fk.on_update.to_sql())
    }

    /// Renders `REFERENCES <table> (<columns>)` followed by the rules.
    fn write_references(&self, fk: &ForeignKeySchema) -> String {
        join_non_empty(&[
            "REFERENCES".to_string(),
            self.table_name(&fk.references_table),
            format!("({})", self.get_columns(&fk.references_columns, ',')),
            self.write_foreign_key_delete_action(fk),
            self.write_foreign_key_update_action(fk),
        ])
    }

    /// Renders the `CONSTRAINT … PRIMARY KEY (…)` clause of a table.
    fn write_primary_key_constraint(&self, table: &TableSchema) -> String {
        join_non_empty(&[
            "CONSTRAINT".to_string(),
            self.format_primary_key(&table.name),
            "PRIMARY KEY".to_string(),
            self.get_clustered(table).to_string(),
            format!("({})", self.get_columns(&table.primary_key, ',')),
        ])
    }

    /// Renders the `CONSTRAINT … FOREIGN KEY (…) REFERENCES …` clause.
    fn write_foreign_key_constraint(&self, table: &TableSchema, fk: &ForeignKeySchema) -> String {
        format!(
            "CONSTRAINT {} FOREIGN KEY ({}) {}",
            self.format_foreign_key(&table.name, &fk.column_key()),
            self.get_columns(&fk.columns, ','),
            self.write_references(fk)
        )
    }

    /// Renders an `ALTER TABLE … ADD` primary key statement.
    fn write_add_primary_key(&self, table: &TableSchema) -> String {
        format!(
            "ALTER TABLE {} ADD {};",
            self.table_name(&table.name),
            self.write_primary_key_constraint(table)
        )
    }

    /// Renders an `ALTER TABLE … ADD` foreign key statement.
    fn write_add_foreign_key(&self, table: &TableSchema, fk: &ForeignKeySchema) -> String {
        format!(
            "ALTER TABLE {} ADD {};",
            self.table_name(&table.name),
            self.write_foreign_key_constraint(table, fk)
        )
    }

    /// Renders the index creation for a foreign key.
    fn write_create_foreign_key_index(
        &self,
        table: &TableSchema,
        fk: &ForeignKeySchema,
    ) -> String {
        format!(
            "CREATE INDEX {} ON {} ({});",
            self.format_foreign_key_index(&table.name, &fk.column_key()),
            self.table_name(&table.name),
            self.get_columns(&fk.columns, ',')
        )
    }

    /// Renders the removal of a foreign key constraint.
    fn write_drop_foreign_key(&self, table: &TableSchema, fk: &ForeignKeySchema) -> String {
        format!(
            "ALTER TABLE {} DROP CONSTRAINT {};",
            self.table_name(&table.name),
            self.format_foreign_key(&table.name, &fk.column_key())
        )
    }

    /// Renders the removal of a table.
    fn write_drop_table(&self, table: &str) -> String {
        format!("DROP TABLE {};", self.table_name(table))
    }

    // ---------------------------------------------------------------------
    // Columns and tables
    // ---------------------------------------------------------------------

    /// Identity is requested and the dialect has a way to express it.
    fn is_identity_active(&self) -> bool {
        self.settings().is_identity_enabled && !self.identity().is_empty()
    }

    /// Returns whether `column` is generated by the engine in this run.
    fn is_identity_column(&self, table: &TableSchema, column: &ColumnSchema) -> bool {
        self.is_identity_active()
            && table
                .identity_column()
                .is_some_and(|c| c.name == column.name)
    }

    /// Replacement type for identity columns, if the dialect spells identity
    /// as a type (`SERIAL`) rather than a keyword. Suppresses the keyword.
    fn identity_store_type(&self) -> Option<&'static str> {
        None
    }

    /// Returns whether the primary key is declared on its column.
    fn is_primary_key_inline(&self, table: &TableSchema) -> bool {
        self.settings().primary_key_def == KeyDefinition::OnCreateTableColumn
            && table.primary_key.len() == 1
    }

    /// Where the primary key of `table` is declared, `None` without a key.
    fn primary_key_placement(&self, table: &TableSchema) -> Option<KeyDefinition> {
        if table.primary_key.is_empty() {
            None
        } else if self.is_primary_key_inline(table) {
            Some(KeyDefinition::OnCreateTableColumn)
        } else if self.settings().primary_key_def == KeyDefinition::OnAlterTable {
            Some(KeyDefinition::OnAlterTable)
        } else {
            Some(KeyDefinition::OnCreateTableBottom)
        }
    }

    /// Where a foreign key is declared.
    fn foreign_key_placement(&self, fk: &ForeignKeySchema) -> KeyDefinition {
        match self.settings().foreign_key_def {
            KeyDefinition::OnCreateTableColumn if fk.columns.len() != 1 => {
                KeyDefinition::OnCreateTableBottom
            }
            def => def,
        }
    }

    /// Renders one column definition of a `CREATE TABLE`.
    fn write_create_column(&self, table: &TableSchema, column: &ColumnSchema) -> String {
        let is_identity = self.is_identity_column(table, column);
        let (store_type, identity) = match self.identity_store_type() {
            Some(serial) if is_identity => (serial.to_string(), ""),
            _ if is_identity => (self.get_store_type(column), self.identity()),
            _ => (self.get_store_type(column), ""),
        };
        let not_null = if column.nullable { "" } else { "NOT NULL" };

        let mut parts = vec![self.format_name(&column.name), store_type];
        match self.traits().identity_placement {
            IdentityPlacement::BeforeNullability => {
                parts.push(identity.to_string());
                parts.push(not_null.to_string());
            }
            IdentityPlacement::AfterNullability => {
                parts.push(not_null.to_string());
            }
        }

        if self.is_primary_key_inline(table) && table.primary_key[0] == column.name {
            parts.push("PRIMARY KEY".to_string());
            parts.push(self.get_clustered(table).to_string());
        }

        if self.traits().identity_placement == IdentityPlacement::AfterNullability {
            parts.push(identity.to_string());
        }

        if let Some(fk) = table.foreign_key_for(&column.name) {
            if self.foreign_key_placement(fk) == KeyDefinition::OnCreateTableColumn {
                parts.push(self.write_references(fk));
            }
        }

        join_non_empty(&parts)
    }

    /// Renders a complete `CREATE TABLE` statement, including the key
    /// constraints that belong inside it.
    fn write_create_table(&self, table: &TableSchema) -> String {
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|c| self.write_create_column(table, c))
            .collect();

        if self.primary_key_placement(table) == Some(KeyDefinition::OnCreateTableBottom) {
            lines.push(self.write_primary_key_constraint(table));
        }

        for fk in &table.foreign_keys {
            if self.foreign_key_placement(fk) == KeyDefinition::OnCreateTableBottom {
                lines.push(self.write_foreign_key_constraint(table, fk));
            }
        }

        format!(
            "CREATE TABLE {}\n(\n    {}\n);",
            self.table_name(&table.name),
            lines.join(",\n    ")
        )
    }

    // ---------------------------------------------------------------------
    // Database lifecycle
    // ---------------------------------------------------------------------

    /// Dialect statement dropping the database; empty if not supported.
    fn drop_database_sql(&self, _database: &str) -> String {
        String::new()
    }

    /// Dialect statement creating the database; empty if not supported.
    fn create_database_sql(&self, _database: &str) -> String {
        String::new()
    }

    /// Renders the database drop, or nothing when re-creation is disabled.
    fn write_drop_database(&self, database: &str) -> String {
        if self.settings().is_recreate_database_enabled {
            self.drop_database_sql(database)
        } else {
            String::new()
        }
    }

    /// Renders the database creation, or nothing when re-creation is disabled.
    fn write_create_database(&self, database: &str) -> String {
        if self.settings().is_recreate_database_enabled {
            self.create_database_sql(database)
        } else {
            String::new()
        }
    }

    /// Renders the switch to the target database.
    fn write_use_database(&self, _database: &str) -> String {
        String::new()
    }

    /// Returns the command invoking the engine's client on `script_file`.
    fn command_line(&self, script_file: &str) -> String {
        self.settings()
            .command_line_format
            .replace("{0}", script_file)
    }

    /// Batch separator emitted after statement groups.
    fn write_execute_command(&self) -> &'static str {
        ""
    }

    /// Trailing commit/exit sequence.
    fn write_finish_commit(&self) -> &'static str {
        ""
    }

    /// Statement toggling explicit inserts into an identity column.
    fn write_identity_insert(&self, _table: &TableSchema, _enabled: bool) -> String {
        String::new()
    }

    /// Statement moving the key generator past explicitly inserted keys.
    fn write_identity_reset(&self, _table: &TableSchema) -> String {
        String::new()
    }

    /// Renders one `INSERT` statement.
    ///
    /// # Errors
    ///
    /// Fails when any value cannot be rendered.
    fn write_insert(&self, table: &str, columns: &[String], values: &[Value]) -> Result<String> {
        let rendered = values
            .iter()
            .map(|v| self.format_value(v))
            .collect::<Result<Vec<_>>>()?;

        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({});",
            self.table_name(table),
            self.get_columns(columns, ','),
            rendered.join(", ")
        ))
    }

    /// File name of the generated script.
    fn script_file_name(&self) -> String {
        let suffix = if self.is_identity_active() {
            "_AutoIncrementPKs"
        } else {
            ""
        };
        format!(
            "Chinook_{}{suffix}.{}",
            self.name(),
            self.traits().script_file_extension
        )
    }
}

/// Joins the non-empty parts with single spaces.
pub(crate) fn join_non_empty(parts: &[String]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `SET IDENTITY_INSERT` toggle shared by the SQL Server family.
pub(crate) fn sql_server_identity_insert(
    strategy: &dyn DdlStrategy,
    table: &TableSchema,
    enabled: bool,
) -> String {
    if table
        .identity_column()
        .is_some_and(|c| strategy.is_identity_column(table, c))
    {
        let state = if enabled { "ON" } else { "OFF" };
        format!(
            "SET IDENTITY_INSERT {} {state};",
            strategy.table_name(&table.name)
        )
    } else {
        String::new()
    }
}
