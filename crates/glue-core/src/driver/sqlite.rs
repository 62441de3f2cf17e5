//! SQLite driver.

use super::{Driver, Grammar, Placeholder};
use crate::command::Command;
use crate::dialect::DefaultDialect;

/// SQLite: double-quoted identifiers, `?` placeholders.
///
/// SQLite also accepts backticks, but double quotes are the standard form.
///
/// The shared column layout places `AUTOINCREMENT` after `NOT NULL`, while
/// SQLite only accepts it directly after `INTEGER PRIMARY KEY`. Tables for
/// SQLite should use [`Strategy::External`](crate::Strategy::External) and
/// rely on the implicit rowid key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

/// The shared generation algorithm over SQLite grammar.
pub type SqliteDialect = DefaultDialect<Sqlite>;

/// Creates a SQLite dialect.
#[must_use]
pub fn dialect() -> SqliteDialect {
    DefaultDialect::new(Sqlite)
}

impl Driver for Sqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn driver(&self) -> &'static str {
        "sqlite3"
    }

    fn grammar(&self) -> Grammar {
        Grammar::new('"', '"', Placeholder::Question).auto_increment("AUTOINCREMENT")
    }

    fn database(&self) -> Command {
        Command::new("SELECT name FROM pragma_database_list WHERE seq = 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_grammar() {
        let grammar = Sqlite.grammar();
        assert_eq!(grammar.quote("user"), "\"user\"");
        assert_eq!(grammar.placeholder(3), "?");
        assert_eq!(grammar.auto_increment, "AUTOINCREMENT");
        assert_eq!(Sqlite.driver(), "sqlite3");
    }
}
