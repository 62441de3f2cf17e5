//! PostgreSQL driver.

use super::{Driver, Grammar, Pagination, Placeholder};
use crate::command::Command;
use crate::dialect::DefaultDialect;

/// PostgreSQL: double-quoted identifiers, `$n` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

/// The shared generation algorithm over PostgreSQL grammar.
pub type PostgresDialect = DefaultDialect<Postgres>;

/// Creates a PostgreSQL dialect.
#[must_use]
pub fn dialect() -> PostgresDialect {
    DefaultDialect::new(Postgres)
}

impl Driver for Postgres {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn driver(&self) -> &'static str {
        "postgres"
    }

    fn grammar(&self) -> Grammar {
        Grammar::new('"', '"', Placeholder::Numbered("$"))
            .auto_increment("GENERATED BY DEFAULT AS IDENTITY")
            .pagination(Pagination::LimitOffset)
    }

    fn database(&self) -> Command {
        Command::new("SELECT CURRENT_DATABASE()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_grammar() {
        let grammar = Postgres.grammar();
        assert_eq!(grammar.quote("user"), "\"user\"");
        assert_eq!(grammar.placeholder(1), "$1");
        assert_eq!(grammar.placeholder(10), "$10");
        assert_eq!(grammar.pagination, Pagination::LimitOffset);
    }
}
