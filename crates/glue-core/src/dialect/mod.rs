//! The dialect contract.
//!
//! A [`Dialect`] turns definitions, records and identifiers into
//! [`Command`]s for one engine. The only implementation shipped here is
//! [`DefaultDialect`], which runs one shared algorithm over the grammar of a
//! [`Driver`](crate::driver::Driver). The trait stays object safe so a
//! dialect can be chosen at runtime and held as `Box<dyn Dialect>`.
//!
//! Generation never fails: operations that can have nothing valid to emit
//! return `Option<Command>`.

mod default;

pub use default::DefaultDialect;

use crate::command::Command;
use crate::definition::{Definition, Field, ForeignKey};
use crate::driver::Grammar;
use crate::record::Record;

/// Everything a caller can generate for one engine.
pub trait Dialect: Send + Sync {
    /// Dialect name, e.g. `mysql`.
    fn name(&self) -> &'static str;

    /// Identifier of the low-level client driver.
    fn driver(&self) -> &'static str;

    /// The engine grammar in use.
    fn grammar(&self) -> Grammar;

    /// Quotes an identifier for this engine.
    fn quote(&self, identifier: &str) -> String {
        self.grammar().quote(identifier)
    }

    /// Renders the bind marker for the 1-based `position`.
    fn placeholder(&self, position: usize) -> String {
        self.grammar().placeholder(position)
    }

    /// Name of the database catalog probes are bound to.
    fn database_name(&self) -> &str;

    /// Query reporting the current database name.
    fn database(&self) -> Command;

    /// Counts tables named `table` in the current database.
    fn has_table(&self, table: &str) -> Command;

    /// Counts columns named `column` on `table`.
    fn has_column(&self, table: &str, column: &str) -> Command;

    /// Lists catalog rows for every column of `table` in ordinal order.
    fn columns(&self, table: &str) -> Command;

    /// Counts index entries named `index` on `table`.
    fn has_index(&self, table: &str, index: &str) -> Command;

    /// Counts foreign-key constraints named `name` on `table`.
    fn has_foreign_key(&self, table: &str, name: &str) -> Command;

    /// `CREATE TABLE` for `definition`; `None` when it has no fields or no
    /// table name.
    fn create_table(&self, definition: &Definition) -> Option<Command>;

    /// `DROP TABLE` for `table`.
    ///
    /// This and the other single-statement DDL operations render the names
    /// they are given without validating them; an empty name yields an
    /// empty quoted identifier the engine rejects.
    fn drop_table(&self, table: &str) -> Command;

    /// Adds `field` to `table`.
    fn add_column(&self, table: &str, field: &Field) -> Command;

    /// Redefines `column` of `table` as `field`, renaming it to
    /// `field.column`.
    fn modify_column(&self, table: &str, column: &str, field: &Field) -> Command;

    /// Drops `column` from `table`.
    fn drop_column(&self, table: &str, column: &str) -> Command;

    /// Adds the foreign-key constraint `key` to `table`.
    fn add_foreign_key(&self, table: &str, key: &ForeignKey) -> Command;

    /// Drops the foreign-key constraint `name` from `table`.
    fn remove_foreign_key(&self, table: &str, name: &str) -> Command;

    /// Drops the index `name` from `table`.
    fn remove_index(&self, table: &str, name: &str) -> Command;

    /// Keyword inserting a row made only of column defaults.
    fn default_values(&self) -> &'static str {
        "DEFAULT VALUES"
    }

    /// Conventional key name: `<kind>_<table>_<col1>_<col2>...`.
    fn build_key_name(&self, kind: &str, table: &str, columns: &[&str]) -> String {
        let mut name = format!("{kind}_{table}");
        for column in columns {
            name.push('_');
            name.push_str(column);
        }
        name
    }

    /// `INSERT` of `record.values`.
    fn insert(&self, record: &Record) -> Option<Command>;

    /// `UPDATE` setting `record.values` where `record.conditions` hold;
    /// `None` without values.
    fn update(&self, record: &Record) -> Option<Command>;

    /// `DELETE` where `record.conditions` hold; `None` without conditions.
    fn delete(&self, record: &Record) -> Option<Command>;

    /// `SELECT` of `record.columns` where `record.conditions` hold.
    fn select(&self, record: &Record) -> Option<Command>;

    /// Wraps `cmd` in a row count, keeping its arguments.
    fn count(&self, cmd: &Command) -> Command;

    /// Wraps `cmd` in a row window for the 1-based `page` of `size` rows.
    /// Pages below 1 select the first page; a negative `size` is bound as 0.
    fn page(&self, cmd: &Command, page: i64, size: i64) -> Command;
}
