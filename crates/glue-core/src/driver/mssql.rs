//! Microsoft SQL Server driver.

use super::{Driver, Grammar, Pagination, Placeholder};
use crate::command::Command;
use crate::dialect::DefaultDialect;

/// SQL Server: bracketed identifiers, `@pN` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsSql;

/// The shared generation algorithm over SQL Server grammar.
pub type MsSqlDialect = DefaultDialect<MsSql>;

/// Creates a SQL Server dialect.
#[must_use]
pub fn dialect() -> MsSqlDialect {
    DefaultDialect::new(MsSql)
}

impl Driver for MsSql {
    fn name(&self) -> &'static str {
        "mssql"
    }

    fn driver(&self) -> &'static str {
        "sqlserver"
    }

    fn grammar(&self) -> Grammar {
        Grammar::new('[', ']', Placeholder::Numbered("@p"))
            .auto_increment("IDENTITY(1,1)")
            .pagination(Pagination::OffsetFetch { ordered: true })
    }

    fn database(&self) -> Command {
        Command::new("SELECT DB_NAME()")
    }
}
