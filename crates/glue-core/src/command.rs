//! SQL text and bind-argument accumulator.
//!
//! A [`Command`] collects fragments exactly in call order without checking
//! grammar. Two styles are supported: flat (`append`, `space`) for one-line
//! DDL, and formatted (`line`, `tab_line`) for multi-clause catalog queries.
//!
//! ```rust
//! use glue_core::Command;
//!
//! let cmd = Command::new("SELECT")
//!     .tab_line("A")
//!     .line("FROM")
//!     .tab_line("B");
//!
//! assert_eq!(cmd.sql(), "SELECT\n\tA\nFROM\n\tB");
//! ```

use std::fmt;

use crate::value::{SqlValue, ToSqlValue};

/// SQL text plus its ordered bind arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Command {
    sql: String,
    args: Vec<SqlValue>,
}

impl Command {
    /// Creates a command seeded with `sql`.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    /// Appends `token` with no separator.
    #[must_use]
    pub fn append(mut self, token: &str) -> Self {
        self.sql.push_str(token);
        self
    }

    /// Appends a space followed by `token`.
    #[must_use]
    pub fn space(mut self, token: &str) -> Self {
        self.sql.push(' ');
        self.sql.push_str(token);
        self
    }

    /// Appends a newline followed by `token`.
    #[must_use]
    pub fn line(mut self, token: &str) -> Self {
        self.sql.push('\n');
        self.sql.push_str(token);
        self
    }

    /// Appends `token` indented by one tab, on the current line.
    #[must_use]
    pub fn tab(self, token: &str) -> Self {
        self.tabs(token, 1)
    }

    /// Appends `token` indented by `tabs` tabs, on the current line.
    #[must_use]
    pub fn tabs(mut self, token: &str, tabs: usize) -> Self {
        push_indented(&mut self.sql, token, tabs);
        self
    }

    /// Appends a newline, one tab, then `token`.
    #[must_use]
    pub fn tab_line(self, token: &str) -> Self {
        self.tabs_line(token, 1)
    }

    /// Appends a newline, `tabs` tabs, then `token`.
    #[must_use]
    pub fn tabs_line(mut self, token: &str, tabs: usize) -> Self {
        self.sql.push('\n');
        push_indented(&mut self.sql, token, tabs);
        self
    }

    /// Appends a single bind argument.
    #[must_use]
    pub fn argument(mut self, value: impl ToSqlValue) -> Self {
        self.args.push(value.to_sql_value());
        self
    }

    /// Appends bind arguments in iteration order. Empty input is a no-op.
    #[must_use]
    pub fn arguments<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToSqlValue,
    {
        self.args
            .extend(values.into_iter().map(ToSqlValue::to_sql_value));
        self
    }

    /// Returns the SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the bind arguments in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    /// Returns true when neither text nor arguments were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty() && self.args.is_empty()
    }

    /// Splits the command into SQL text and arguments for the executor.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.args)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

fn push_indented(sql: &mut String, token: &str, tabs: usize) {
    sql.extend(std::iter::repeat('\t').take(tabs));
    sql.push_str(token);
}
