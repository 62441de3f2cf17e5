//! Oracle driver.

use super::{Driver, Grammar, Pagination, Placeholder};
use crate::command::Command;
use crate::dialect::DefaultDialect;

/// Oracle: double-quoted identifiers, `:n` placeholders, no `AS` before
/// table aliases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Oracle;

/// The shared generation algorithm over Oracle grammar.
pub type OracleDialect = DefaultDialect<Oracle>;

/// Creates an Oracle dialect.
#[must_use]
pub fn dialect() -> OracleDialect {
    DefaultDialect::new(Oracle)
}

impl Driver for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }

    fn driver(&self) -> &'static str {
        "oci8"
    }

    fn grammar(&self) -> Grammar {
        Grammar::new('"', '"', Placeholder::Numbered(":"))
            .auto_increment("GENERATED BY DEFAULT AS IDENTITY")
            .pagination(Pagination::OffsetFetch { ordered: false })
            .without_alias_keyword()
    }

    fn database(&self) -> Command {
        Command::new("SELECT SYS_CONTEXT('USERENV', 'DB_NAME') FROM DUAL")
    }
}
