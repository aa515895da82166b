//! Literal row values used to populate the generated database.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DdlError, Result};
use crate::schema::{DatabaseSchema, LogicalType};

/// A single literal cell value.
///
/// Decimals and dates are kept as text so that they are rendered exactly as
/// written; each strategy parses them when formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    /// SQL NULL.
    Null,
    /// Integer value.
    Int(i64),
    /// Decimal value, e.g. `"0.99"`.
    Decimal(String),
    /// Text value.
    Text(String),
    /// Date value in a human-readable form, e.g. `"2004-03-04"`.
    Date(String),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Short name of the value kind for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Decimal(_) => "decimal",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
        }
    }

    /// Whether the value can be stored in a column of `logical_type`.
    ///
    /// Nulls fit anywhere; integers also fit decimal columns.
    #[must_use]
    pub const fn fits(&self, logical_type: LogicalType) -> bool {
        matches!(
            (self, logical_type),
            (Self::Null, _)
                | (Self::Int(_), LogicalType::Int32 | LogicalType::Decimal)
                | (Self::Decimal(_), LogicalType::Decimal)
                | (Self::Text(_), LogicalType::String { .. })
                | (Self::Date(_), LogicalType::DateTime)
        )
    }
}

/// Rows destined for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableData {
    /// Target table name.
    pub table: String,
    /// Column names, in value order.
    pub columns: Vec<String>,
    /// Row values, one entry per column.
    pub rows: Vec<Vec<Value>>,
}

impl TableData {
    /// Creates an empty row set for `table` with the given column order.
    #[must_use]
    pub fn new(table: &str, columns: &[&str]) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }
}

/// The full set of rows for a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Row sets, one per table.
    pub tables: Vec<TableData>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table's rows.
    #[must_use]
    pub fn table(mut self, data: TableData) -> Self {
        self.tables.push(data);
        self
    }

    /// Gets the rows for a table.
    #[must_use]
    pub fn get(&self, table: &str) -> Option<&TableData> {
        self.tables.iter().find(|t| t.table == table)
    }

    /// Total number of rows across all tables.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    /// Parses a dataset from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::Serialization`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that every row set targets a known table and column, that no
    /// table has two row sets, and that every row has one value per column
    /// of a matching kind.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidDataset`] (or `Multiple`) listing every problem.
    pub fn validate(&self, schema: &DatabaseSchema) -> Result<()> {
        let mut errors = Vec::new();
        let mut seen_tables = HashSet::new();

        for data in &self.tables {
            if !seen_tables.insert(data.table.as_str()) {
                errors.push(DdlError::InvalidDataset(format!(
                    "duplicate row set for table '{}'",
                    data.table
                )));
            }

            let Some(table) = schema.get_table(&data.table) else {
                errors.push(DdlError::InvalidDataset(format!(
                    "rows target unknown table '{}'",
                    data.table
                )));
                continue;
            };

            for column in &data.columns {
                if table.get_column(column).is_none() {
                    errors.push(DdlError::InvalidDataset(format!(
                        "unknown column '{}.{column}'",
                        data.table
                    )));
                }
            }

            for (index, row) in data.rows.iter().enumerate() {
                if row.len() != data.columns.len() {
                    errors.push(DdlError::InvalidDataset(format!(
                        "row {} of '{}' has {} value(s), expected {}",
                        index + 1,
                        data.table,
                        row.len(),
                        data.columns.len()
                    )));
                }

                for (name, value) in data.columns.iter().zip(row) {
                    let Some(column) = table.get_column(name) else {
                        continue;
                    };
                    if !value.fits(column.logical_type) {
                        errors.push(DdlError::InvalidDataset(format!(
                            "row {} of '{}': {} value in {} column '{name}'",
                            index + 1,
                            data.table,
                            value.kind(),
                            column.logical_type.name()
                        )));
                    }
                }
            }
        }

        DdlError::collect(errors).map_or(Ok(()), Err)
    }
}
