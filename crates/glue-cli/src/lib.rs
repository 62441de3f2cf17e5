//! Support code for the `glue` command-line tool.
//!
//! `glue` prints the SQL a dialect generates, so schema changes can be
//! reviewed before an executor runs them.
//!
//! # CLI Usage
//!
//! ```bash
//! # CREATE TABLE for a JSON definition, PostgreSQL grammar
//! glue --engine postgres create-table user.json
//!
//! # Existence probe bound to a database, as JSON
//! glue --database shop --json has-table user
//!
//! # Third page of 20 rows
//! glue --engine mssql page "SELECT * FROM [user]" --page 3 --size 20
//! ```

pub mod input;
pub mod output;

pub use input::load_definition;
pub use output::{render, Rendered};
