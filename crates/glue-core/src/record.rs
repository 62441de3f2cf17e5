//! Input description for DML generation.

use crate::value::{SqlValue, ToSqlValue};

/// Table, column values and equality conditions for one DML statement.
///
/// Which parts are used depends on the statement: INSERT reads `values`,
/// UPDATE reads `values` and `conditions`, DELETE reads `conditions`, SELECT
/// reads `columns` and `conditions`.
///
/// ```rust
/// use glue_core::Record;
///
/// let record = Record::new("user")
///     .value("name", "Alice")
///     .filter("id", 7_i64);
///
/// assert_eq!(record.values.len(), 1);
/// assert_eq!(record.conditions.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Target table.
    pub table: String,
    /// Column assignments in order.
    pub values: Vec<(String, SqlValue)>,
    /// Equality conditions joined with `AND`.
    pub conditions: Vec<(String, SqlValue)>,
    /// Projected columns; empty selects `*`.
    pub columns: Vec<String>,
}

impl Record {
    /// Creates an empty record for `table`.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Adds a column assignment.
    #[must_use]
    pub fn value(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.values.push((column.into(), value.to_sql_value()));
        self
    }

    /// Adds an equality condition. A NULL value renders as `IS NULL`.
    #[must_use]
    pub fn filter(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.conditions.push((column.into(), value.to_sql_value()));
        self
    }

    /// Adds a projected column.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Adds several projected columns.
    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| String::from(*c)));
        self
    }
}
