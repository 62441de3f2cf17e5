//! The shared generation algorithm.
//!
//! [`DefaultDialect`] implements every [`Dialect`] operation once. Engines
//! differ only in the [`Grammar`] their driver returns: identifier
//! delimiters, bind markers, the auto-increment keyword, the row-window
//! clause and derived-table aliasing.
//!
//! ```rust
//! use glue_core::driver::MySql;
//! use glue_core::{DefaultDialect, Definition, Dialect, Field, Strategy};
//!
//! let dialect = DefaultDialect::new(MySql);
//! let definition = Definition::new("user")
//!     .strategy(Strategy::AutoIncrement)
//!     .field(Field::new("id", "BIGINT").primary().not_null())
//!     .field(Field::new("name", "VARCHAR(255)"))
//!     .primary_key("id");
//!
//! let cmd = dialect.create_table(&definition).unwrap();
//! assert_eq!(
//!     cmd.sql(),
//!     "CREATE TABLE `user` (\n\
//!      \t`id` BIGINT NOT NULL AUTO_INCREMENT,\n\
//!      \t`name` VARCHAR(255) NULL,\n\
//!      \tPRIMARY KEY(`id`)\n\
//!      )"
//! );
//! ```

use tracing::debug;

use super::Dialect;
use crate::command::Command;
use crate::definition::{Definition, Field, ForeignKey, Strategy};
use crate::driver::{Driver, Grammar, Pagination};
use crate::record::Record;
use crate::value::SqlValue;

/// Alias of the derived table in `count` and `page`.
const DERIVED_ALIAS: &str = "T";

/// One generation algorithm parameterised by a driver's grammar.
#[derive(Debug, Clone)]
pub struct DefaultDialect<D> {
    driver: D,
    grammar: Grammar,
    database: String,
}

impl<D: Driver> DefaultDialect<D> {
    /// Creates a dialect for `driver` with no database name bound.
    #[must_use]
    pub fn new(driver: D) -> Self {
        let grammar = driver.grammar();
        Self {
            driver,
            grammar,
            database: String::new(),
        }
    }

    /// Binds catalog probes to `database`, usually the result of running
    /// [`Dialect::database`] once at startup.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Returns the driver.
    #[must_use]
    pub const fn inner(&self) -> &D {
        &self.driver
    }

    fn quoted_list<'a>(&self, identifiers: impl IntoIterator<Item = &'a str>) -> String {
        identifiers
            .into_iter()
            .map(|identifier| self.grammar.quote(identifier))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `NOT NULL`/`NULL`, the optional auto-increment keyword, `DEFAULT` and
    /// `COMMENT`, in that order.
    fn column_suffix(&self, cmd: Command, field: &Field, auto_increment: bool) -> Command {
        let mut cmd = if field.not_null {
            cmd.space("NOT").space("NULL")
        } else {
            cmd.space("NULL")
        };
        if auto_increment {
            cmd = cmd.space(self.grammar.auto_increment);
        }
        if let Some(ref literal) = field.default {
            cmd = cmd.space("DEFAULT").space(literal);
        }
        if !field.comment.is_empty() {
            cmd = cmd
                .space("COMMENT")
                .space(&format!("'{}'", field.comment.replace('\'', "''")));
        }
        cmd
    }

    /// Multi-line `INFORMATION_SCHEMA` query filtered by equality on each
    /// `(column, value)` pair, values bound in order.
    fn catalog_query(&self, projection: &str, view: &str, filters: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new("SELECT")
            .tab_line(projection)
            .line("FROM")
            .tab_line(&format!("INFORMATION_SCHEMA.{view}"))
            .line("WHERE");
        for (idx, (column, value)) in filters.iter().enumerate() {
            let joiner = if idx == 0 { "" } else { "AND " };
            cmd = cmd
                .tab_line(&format!(
                    "{joiner}{column} = {}",
                    self.grammar.placeholder(idx + 1)
                ))
                .argument(*value);
        }
        cmd
    }

    /// Appends `WHERE` over `conditions`, numbering markers from `first`.
    /// NULL values render as `IS NULL` and bind nothing.
    fn where_clause(&self, cmd: Command, conditions: &[(String, SqlValue)], first: usize) -> Command {
        if conditions.is_empty() {
            return cmd;
        }
        let mut position = first;
        let mut predicates = Vec::with_capacity(conditions.len());
        let mut args = Vec::with_capacity(conditions.len());
        for (column, value) in conditions {
            let column = self.grammar.quote(column);
            if value.is_null() {
                predicates.push(format!("{column} IS NULL"));
            } else {
                predicates.push(format!("{column} = {}", self.grammar.placeholder(position)));
                args.push(value);
                position += 1;
            }
        }
        cmd.space("WHERE")
            .space(&predicates.join(" AND "))
            .arguments(args)
    }

    fn derived(&self, inner: &Command) -> String {
        format!(
            "({}){}",
            inner.sql(),
            self.grammar.alias(DERIVED_ALIAS)
        )
    }
}

impl<D: Driver + Default> Default for DefaultDialect<D> {
    fn default() -> Self {
        Self::new(D::default())
    }
}

impl<D: Driver> Dialect for DefaultDialect<D> {
    fn name(&self) -> &'static str {
        self.driver.name()
    }

    fn driver(&self) -> &'static str {
        self.driver.driver()
    }

    fn grammar(&self) -> Grammar {
        self.grammar
    }

    fn database_name(&self) -> &str {
        &self.database
    }

    fn database(&self) -> Command {
        self.driver.database()
    }

    fn has_table(&self, table: &str) -> Command {
        self.catalog_query(
            "COUNT(*)",
            "TABLES",
            &[("table_schema", self.database.as_str()), ("table_name", table)],
        )
    }

    fn has_column(&self, table: &str, column: &str) -> Command {
        self.catalog_query(
            "COUNT(*)",
            "COLUMNS",
            &[
                ("table_schema", self.database.as_str()),
                ("table_name", table),
                ("column_name", column),
            ],
        )
    }

    fn columns(&self, table: &str) -> Command {
        self.catalog_query(
            "*",
            "COLUMNS",
            &[("table_schema", self.database.as_str()), ("table_name", table)],
        )
        .line("ORDER BY")
        .tab_line("ORDINAL_POSITION ASC")
    }

    fn has_index(&self, table: &str, index: &str) -> Command {
        self.catalog_query(
            "COUNT(*)",
            "STATISTICS",
            &[
                ("table_schema", self.database.as_str()),
                ("table_name", table),
                ("index_name", index),
            ],
        )
    }

    fn has_foreign_key(&self, table: &str, name: &str) -> Command {
        self.catalog_query(
            "COUNT(*)",
            "TABLE_CONSTRAINTS",
            &[
                ("CONSTRAINT_SCHEMA", self.database.as_str()),
                ("TABLE_NAME", table),
                ("CONSTRAINT_NAME", name),
            ],
        )
        .tab_line("AND CONSTRAINT_TYPE = 'FOREIGN KEY'")
    }

    fn create_table(&self, definition: &Definition) -> Option<Command> {
        if definition.is_empty() || definition.table.is_empty() {
            return None;
        }
        debug!(
            dialect = self.name(),
            table = %definition.table,
            fields = definition.fields.len(),
            "Generating CREATE TABLE"
        );

        let last = definition.fields.len() - 1;
        // One AUTO_INCREMENT column per table.
        let mut auto_increment_claimed = false;

        let mut cmd = Command::new("CREATE TABLE")
            .space(&self.grammar.quote(&definition.table))
            .space("(");

        for (idx, field) in definition.fields.iter().enumerate() {
            let auto_increment = field.is_primary
                && !auto_increment_claimed
                && matches!(definition.strategy, Strategy::AutoIncrement);
            auto_increment_claimed |= auto_increment;

            cmd = cmd
                .tab_line(&self.grammar.quote(&field.column))
                .space(&field.sql_type);
            cmd = self.column_suffix(cmd, field, auto_increment);
            if idx < last {
                cmd = cmd.append(",");
            }
        }

        if !definition.primary_keys.is_empty() {
            let keys = self.quoted_list(definition.primary_keys.iter().map(String::as_str));
            cmd = cmd.append(",").tab_line(&format!("PRIMARY KEY({keys})"));
        }

        for (name, group) in &definition.indexes {
            let Some(first) = group.first() else {
                continue;
            };
            let columns = self.quoted_list(group.iter().map(|index| index.column.as_str()));
            cmd = cmd.append(",");
            cmd = match first.index_type.prefix() {
                Some(prefix) => cmd.tab_line(&format!("{prefix} ")),
                None => cmd.tab_line(""),
            };
            cmd = cmd.append(&format!(
                "INDEX {} ({columns})",
                self.grammar.quote(name)
            ));
        }

        for (name, group) in &definition.foreign_keys {
            let Some(first) = group.first() else {
                continue;
            };
            let references = self.quoted_list(group.iter().map(|key| key.reference.as_str()));
            cmd = cmd.append(",").tab_line(&format!(
                "CONSTRAINT {name} FOREIGN KEY ({}) REFERENCES {} ({references})",
                self.grammar.quote(&first.column),
                self.grammar.quote(&first.table),
            ));
        }

        Some(cmd.line(")"))
    }

    fn drop_table(&self, table: &str) -> Command {
        Command::new("DROP TABLE").space(&self.grammar.quote(table))
    }

    fn add_column(&self, table: &str, field: &Field) -> Command {
        let cmd = Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("ADD COLUMN")
            .space(&self.grammar.quote(&field.column))
            .space(&field.sql_type);
        self.column_suffix(cmd, field, false)
    }

    fn modify_column(&self, table: &str, column: &str, field: &Field) -> Command {
        let cmd = Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("CHANGE COLUMN")
            .space(&self.grammar.quote(column))
            .space(&self.grammar.quote(&field.column))
            .space(&field.sql_type);
        self.column_suffix(cmd, field, false)
    }

    fn drop_column(&self, table: &str, column: &str) -> Command {
        Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("DROP COLUMN")
            .space(&self.grammar.quote(column))
    }

    fn add_foreign_key(&self, table: &str, key: &ForeignKey) -> Command {
        Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("ADD CONSTRAINT")
            .space(&key.name)
            .space(&format!(
                "FOREIGN KEY ({}) REFERENCES {} ({})",
                self.grammar.quote(&key.column),
                self.grammar.quote(&key.table),
                self.grammar.quote(&key.reference),
            ))
    }

    fn remove_foreign_key(&self, table: &str, name: &str) -> Command {
        Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("DROP FOREIGN KEY")
            .space(name)
    }

    fn remove_index(&self, table: &str, name: &str) -> Command {
        Command::new("ALTER TABLE")
            .space(&self.grammar.quote(table))
            .space("DROP INDEX")
            .space(&self.grammar.quote(name))
    }

    fn insert(&self, record: &Record) -> Option<Command> {
        if record.table.is_empty() {
            return None;
        }
        debug!(dialect = self.name(), table = %record.table, "Generating INSERT");

        let cmd = Command::new("INSERT INTO").space(&self.grammar.quote(&record.table));
        if record.values.is_empty() {
            return Some(cmd.space(self.default_values()));
        }

        let columns = self.quoted_list(record.values.iter().map(|(column, _)| column.as_str()));
        let markers = (1..=record.values.len())
            .map(|position| self.grammar.placeholder(position))
            .collect::<Vec<_>>()
            .join(", ");
        Some(
            cmd.space(&format!("({columns})"))
                .space("VALUES")
                .space(&format!("({markers})"))
                .arguments(record.values.iter().map(|(_, value)| value)),
        )
    }

    fn update(&self, record: &Record) -> Option<Command> {
        if record.table.is_empty() || record.values.is_empty() {
            return None;
        }
        debug!(dialect = self.name(), table = %record.table, "Generating UPDATE");

        let assignments = record
            .values
            .iter()
            .enumerate()
            .map(|(idx, (column, _))| {
                format!(
                    "{} = {}",
                    self.grammar.quote(column),
                    self.grammar.placeholder(idx + 1)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        let cmd = Command::new("UPDATE")
            .space(&self.grammar.quote(&record.table))
            .space("SET")
            .space(&assignments)
            .arguments(record.values.iter().map(|(_, value)| value));
        Some(self.where_clause(cmd, &record.conditions, record.values.len() + 1))
    }

    fn delete(&self, record: &Record) -> Option<Command> {
        if record.table.is_empty() || record.conditions.is_empty() {
            return None;
        }
        debug!(dialect = self.name(), table = %record.table, "Generating DELETE");

        let cmd = Command::new("DELETE FROM").space(&self.grammar.quote(&record.table));
        Some(self.where_clause(cmd, &record.conditions, 1))
    }

    fn select(&self, record: &Record) -> Option<Command> {
        if record.table.is_empty() {
            return None;
        }
        debug!(dialect = self.name(), table = %record.table, "Generating SELECT");

        let projection = if record.columns.is_empty() {
            String::from("*")
        } else {
            self.quoted_list(record.columns.iter().map(String::as_str))
        };
        let cmd = Command::new("SELECT")
            .space(&projection)
            .space("FROM")
            .space(&self.grammar.quote(&record.table));
        Some(self.where_clause(cmd, &record.conditions, 1))
    }

    fn count(&self, cmd: &Command) -> Command {
        Command::new("SELECT COUNT(*) FROM")
            .space(&self.derived(cmd))
            .arguments(cmd.args())
    }

    fn page(&self, cmd: &Command, page: i64, size: i64) -> Command {
        let page = page.max(1);
        let size = size.max(0);
        let offset = (page - 1).saturating_mul(size);
        let bound = cmd.args().len();
        let offset_marker = self.grammar.placeholder(bound + 1);
        let size_marker = self.grammar.placeholder(bound + 2);

        let window = match self.grammar.pagination {
            Pagination::LimitComma => format!("LIMIT {offset_marker}, {size_marker}"),
            Pagination::LimitOffset => format!("LIMIT {size_marker} OFFSET {offset_marker}"),
            Pagination::OffsetFetch { ordered } => format!(
                "{}OFFSET {offset_marker} ROWS FETCH NEXT {size_marker} ROWS ONLY",
                if ordered { "ORDER BY (SELECT NULL) " } else { "" }
            ),
        };
        debug!(dialect = self.name(), page, size, offset, "Generating page window");

        Command::new("SELECT * FROM")
            .space(&self.derived(cmd))
            .space(&window)
            .arguments(cmd.args())
            .arguments([offset, size])
    }
}
