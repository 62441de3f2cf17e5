//! Per-engine drivers.
//!
//! A driver contributes only what differs between engines: its names, a
//! [`Grammar`] value and the probe that reports the current database. Every
//! statement is generated by the shared
//! [`DefaultDialect`](crate::DefaultDialect) algorithm, which reads the
//! grammar instead of relying on per-engine method overrides.
//!
//! `grammar()` has no default body, so a new driver cannot compile without
//! stating its quoting and placeholder syntax.

pub mod mssql;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod sqlite;

use std::fmt;
use std::str::FromStr;

pub use mssql::{MsSql, MsSqlDialect};
pub use mysql::{MySql, MySqlDialect};
pub use oracle::{Oracle, OracleDialect};
pub use postgres::{Postgres, PostgresDialect};
pub use sqlite::{Sqlite, SqliteDialect};

use crate::command::Command;
use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// Engine-specific grammar tokens.
pub trait Driver: fmt::Debug + Send + Sync {
    /// Dialect name, e.g. `mysql`.
    fn name(&self) -> &'static str;

    /// Identifier of the low-level client driver, e.g. `sqlite3`.
    fn driver(&self) -> &'static str;

    /// Quoting, placeholder and keyword grammar.
    fn grammar(&self) -> Grammar;

    /// Query returning the name of the current database.
    fn database(&self) -> Command;
}

/// Positional bind-marker syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// The same `?` token at every position.
    Question,
    /// A prefix followed by the 1-based position, e.g. `$1`, `:1`, `@p1`.
    Numbered(&'static str),
}

impl Placeholder {
    /// Renders the marker for the 1-based `position`.
    #[must_use]
    pub fn render(self, position: usize) -> String {
        match self {
            Self::Question => String::from("?"),
            Self::Numbered(prefix) => format!("{prefix}{position}"),
        }
    }
}

/// Row-window syntax used by paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// `LIMIT offset, size`.
    LimitComma,
    /// `LIMIT size OFFSET offset`.
    LimitOffset,
    /// `OFFSET offset ROWS FETCH NEXT size ROWS ONLY`; `ordered` prepends the
    /// `ORDER BY (SELECT NULL)` the engine requires before `OFFSET`.
    OffsetFetch {
        /// Whether an ORDER BY must precede OFFSET.
        ordered: bool,
    },
}

/// The grammar a driver supplies to the shared generation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    /// Opening identifier delimiter.
    pub quote_open: char,
    /// Closing identifier delimiter.
    pub quote_close: char,
    /// Bind-marker syntax.
    pub placeholder: Placeholder,
    /// Column keyword for engine-generated keys.
    pub auto_increment: &'static str,
    /// Row-window syntax.
    pub pagination: Pagination,
    /// Whether derived tables take `AS` before their alias.
    pub alias_keyword: bool,
}

impl Grammar {
    /// Creates a grammar with the given delimiters and placeholder style.
    #[must_use]
    pub const fn new(quote_open: char, quote_close: char, placeholder: Placeholder) -> Self {
        Self {
            quote_open,
            quote_close,
            placeholder,
            auto_increment: "AUTO_INCREMENT",
            pagination: Pagination::LimitComma,
            alias_keyword: true,
        }
    }

    /// Sets the auto-increment keyword.
    #[must_use]
    pub const fn auto_increment(mut self, keyword: &'static str) -> Self {
        self.auto_increment = keyword;
        self
    }

    /// Sets the row-window syntax.
    #[must_use]
    pub const fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Drops `AS` before derived-table aliases.
    #[must_use]
    pub const fn without_alias_keyword(mut self) -> Self {
        self.alias_keyword = false;
        self
    }

    /// Wraps `identifier` in the delimiters, doubling embedded closing
    /// delimiters. Identifiers already delimited and escaped this way are
    /// returned unchanged.
    #[must_use]
    pub fn quote(&self, identifier: &str) -> String {
        if self.is_quoted(identifier) {
            return identifier.to_string();
        }
        let mut quoted = String::with_capacity(identifier.len() + 2);
        quoted.push(self.quote_open);
        for c in identifier.chars() {
            if c == self.quote_close {
                quoted.push(c);
            }
            quoted.push(c);
        }
        quoted.push(self.quote_close);
        quoted
    }

    /// Renders the bind marker for the 1-based `position`.
    #[must_use]
    pub fn placeholder(&self, position: usize) -> String {
        self.placeholder.render(position)
    }

    /// Renders a derived-table alias including its leading space.
    #[must_use]
    pub fn alias(&self, name: &str) -> String {
        if self.alias_keyword {
            format!(" AS {name}")
        } else {
            format!(" {name}")
        }
    }

    /// True when `identifier` is wrapped in the delimiters and every closing
    /// delimiter inside is doubled.
    fn is_quoted(&self, identifier: &str) -> bool {
        let mut chars = identifier.chars();
        if chars.next() != Some(self.quote_open) || chars.next_back() != Some(self.quote_close) {
            return false;
        }
        while let Some(c) = chars.next() {
            if c == self.quote_close && chars.next() != Some(self.quote_close) {
                return false;
            }
        }
        true
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new('"', '"', Placeholder::Question)
    }
}

/// The engines with a built-in driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Engine {
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    Postgres,
    /// SQLite.
    Sqlite,
    /// Microsoft SQL Server.
    MsSql,
    /// Oracle Database.
    Oracle,
}

impl Engine {
    /// Every built-in engine.
    pub const ALL: [Self; 5] = [
        Self::MySql,
        Self::Postgres,
        Self::Sqlite,
        Self::MsSql,
        Self::Oracle,
    ];

    /// Dialect name of the engine's driver.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Postgres => "postgres",
            Self::Sqlite => "sqlite",
            Self::MsSql => "mssql",
            Self::Oracle => "oracle",
        }
    }

    /// Builds the engine's dialect, bound to `database`.
    #[must_use]
    pub fn dialect(self, database: &str) -> Box<dyn Dialect> {
        match self {
            Self::MySql => Box::new(mysql::dialect().with_database(database)),
            Self::Postgres => Box::new(postgres::dialect().with_database(database)),
            Self::Sqlite => Box::new(sqlite::dialect().with_database(database)),
            Self::MsSql => Box::new(mssql::dialect().with_database(database)),
            Self::Oracle => Box::new(oracle::dialect().with_database(database)),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySql),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "mssql" | "sqlserver" => Ok(Self::MsSql),
            "oracle" | "oci8" => Ok(Self::Oracle),
            _ => Err(Error::UnknownEngine(s.to_string())),
        }
    }
}
