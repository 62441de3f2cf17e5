//! glue CLI
//!
//! Prints the SQL and bind arguments a dialect generates.

use std::path::PathBuf;

use anyhow::bail;
use clap::{Parser, Subcommand};
use glue_core::{registry, Command, Engine};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use glue_cli::{load_definition, render};

/// Dialect-aware SQL generation from table definitions.
#[derive(Parser)]
#[command(name = "glue")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target database engine (mysql, postgres, sqlite, mssql, oracle).
    #[arg(short, long, env = "GLUE_ENGINE", default_value = "mysql")]
    engine: Engine,

    /// Current database name bound into catalog probes.
    #[arg(short, long, env = "GLUE_DATABASE", default_value = "")]
    database: String,

    /// Print `{"sql": ..., "args": [...]}` instead of plain SQL.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// CREATE TABLE for a JSON table definition.
    CreateTable {
        /// Path to the definition file.
        definition: PathBuf,
    },

    /// DROP TABLE.
    DropTable {
        /// Table name.
        table: String,
    },

    /// Probe whether a table exists.
    HasTable {
        /// Table name.
        table: String,
    },

    /// Probe whether a column exists.
    HasColumn {
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// List the columns of a table.
    Columns {
        /// Table name.
        table: String,
    },

    /// Probe whether an index exists.
    HasIndex {
        /// Table name.
        table: String,
        /// Index name.
        name: String,
    },

    /// Probe whether a foreign-key constraint exists.
    HasForeignKey {
        /// Table name.
        table: String,
        /// Constraint name.
        name: String,
    },

    /// Query reporting the current database name.
    Database,

    /// Wrap a query in a row count.
    Count {
        /// Inner query.
        sql: String,
    },

    /// Wrap a query in a row window.
    Page {
        /// Inner query.
        sql: String,

        /// 1-based page number; values below 1 select the first page.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,

        /// Rows per page.
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(i64).range(0..))]
        size: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    registry::install(cli.engine.dialect(&cli.database))?;
    let dialect = registry::active()?;
    debug!(
        dialect = dialect.name(),
        driver = dialect.driver(),
        database = %cli.database,
        "Using dialect"
    );

    let cmd = match cli.command {
        Commands::CreateTable { definition } => {
            let definition = load_definition(&definition)?;
            let Some(cmd) = dialect.create_table(&definition) else {
                bail!("Definition for table '{}' has no fields", definition.table);
            };
            cmd
        }
        Commands::DropTable { table } => dialect.drop_table(&table),
        Commands::HasTable { table } => dialect.has_table(&table),
        Commands::HasColumn { table, column } => dialect.has_column(&table, &column),
        Commands::Columns { table } => dialect.columns(&table),
        Commands::HasIndex { table, name } => dialect.has_index(&table, &name),
        Commands::HasForeignKey { table, name } => dialect.has_foreign_key(&table, &name),
        Commands::Database => dialect.database(),
        Commands::Count { sql } => dialect.count(&Command::new(sql)),
        Commands::Page { sql, page, size } => dialect.page(&Command::new(sql), page, size),
    };

    println!("{}", render(&cmd, cli.json)?);

    Ok(())
}
