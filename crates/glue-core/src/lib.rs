//! # glue-core
//!
//! SQL command generation for several database engines from one shared
//! algorithm.
//!
//! This crate provides:
//! - [`Command`], an accumulator of SQL text and ordered bind arguments
//! - [`Definition`], a database-agnostic description of a table
//! - [`Dialect`], the contract for generating DDL, DML and catalog probes
//! - Per-engine [`driver`]s that supply only quoting, placeholder and keyword
//!   grammar to the shared [`DefaultDialect`]
//! - A process-wide [`registry`] for the active dialect
//!
//! ## Generating DDL
//!
//! ```rust
//! use glue_core::{Definition, Dialect, Engine, Field, Index, IndexType};
//!
//! let dialect = Engine::Postgres.dialect("shop");
//! let definition = Definition::new("product")
//!     .field(Field::new("sku", "VARCHAR(32)").primary().not_null())
//!     .field(Field::new("title", "TEXT"))
//!     .primary_key("sku")
//!     .index(Index::new("uk_title", "title", IndexType::Unique));
//!
//! let cmd = dialect.create_table(&definition).unwrap();
//! assert!(cmd.sql().starts_with("CREATE TABLE \"product\" ("));
//! assert!(cmd.sql().contains("UNIQUE INDEX \"uk_title\" (\"title\")"));
//! ```
//!
//! ## Parameterised DML
//!
//! Values never appear in SQL text; they are bound in order with the
//! engine's placeholder syntax:
//!
//! ```rust
//! use glue_core::{Dialect, Engine, Record, SqlValue};
//!
//! let dialect = Engine::MsSql.dialect("");
//! let record = Record::new("user")
//!     .value("name", "'; DROP TABLE user; --")
//!     .filter("id", 7_i64);
//!
//! let cmd = dialect.update(&record).unwrap();
//! assert_eq!(cmd.sql(), "UPDATE [user] SET [name] = @p1 WHERE [id] = @p2");
//! assert_eq!(
//!     cmd.args(),
//!     &[SqlValue::Text("'; DROP TABLE user; --".into()), SqlValue::Int(7)]
//! );
//! ```

pub mod command;
pub mod definition;
pub mod dialect;
pub mod driver;
pub mod error;
pub mod record;
pub mod registry;
pub mod value;

pub use command::Command;
pub use definition::{Definition, Field, ForeignKey, Index, IndexType, Strategy};
pub use dialect::{DefaultDialect, Dialect};
pub use driver::{Driver, Engine, Grammar};
pub use error::{Error, Result};
pub use record::Record;
pub use value::{SqlValue, ToSqlValue};
