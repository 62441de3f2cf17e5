//! MySQL driver.

use super::{Driver, Grammar, Placeholder};
use crate::command::Command;
use crate::dialect::DefaultDialect;

/// MySQL and MariaDB: backtick identifiers, `?` placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

/// The shared generation algorithm over MySQL grammar.
pub type MySqlDialect = DefaultDialect<MySql>;

/// Creates a MySQL dialect with no database bound.
#[must_use]
pub fn dialect() -> MySqlDialect {
    DefaultDialect::new(MySql)
}

impl Driver for MySql {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn driver(&self) -> &'static str {
        "mysql"
    }

    fn grammar(&self) -> Grammar {
        Grammar::new('`', '`', Placeholder::Question)
    }

    fn database(&self) -> Command {
        Command::new("SELECT DATABASE()")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mysql_grammar() {
        let grammar = MySql.grammar();
        assert_eq!(grammar.quote("user"), "`user`");
        assert_eq!(grammar.placeholder(2), "?");
        assert_eq!(grammar.auto_increment, "AUTO_INCREMENT");
        assert_eq!(MySql.database().sql(), "SELECT DATABASE()");
    }
}
