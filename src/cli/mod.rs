mod commands;
pub mod error;
mod utils;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use miette::IntoDiagnostic;

use crate::db::{Database, SqliteDatabase};
use crate::service::ProjectService;

#[derive(Parser)]
#[command(name = "workshop")]
#[command(author, version, about = "DIY project tracker", long_about = None)]
pub struct Cli {
    /// Database file (default: WORKSHOP_DB env or ./workshop.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a project
    Add {
        /// Project name
        name: String,
        /// Estimated hours, e.g. 12.5
        #[arg(long)]
        estimated_hours: Option<String>,
        /// Actual hours spent
        #[arg(long)]
        actual_hours: Option<String>,
        /// Difficulty rating, 1 (easy) to 5 (hard)
        #[arg(long)]
        difficulty: Option<i32>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// List projects
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show one project with its materials, steps, and categories
    Show {
        /// Project ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Resolve the database path: flag, then environment, then cwd default.
fn database_path(cli: &Cli) -> PathBuf {
    cli.db
        .clone()
        .or_else(|| std::env::var_os("WORKSHOP_DB").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("workshop.db"))
}

pub async fn run() -> miette::Result<()> {
    execute(Cli::parse()).await
}

async fn execute(cli: Cli) -> miette::Result<()> {
    let path = database_path(&cli);

    // No subcommand means help; don't create the database file for that.
    let Some(command) = cli.command else {
        Cli::command().print_help().into_diagnostic()?;
        return Ok(());
    };

    let db = SqliteDatabase::open(path).await?;
    db.migrate().await?;
    let service = ProjectService::new(Arc::new(db));

    match command {
        Commands::Add {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        } => {
            let output = commands::project::add(
                &service,
                name,
                estimated_hours,
                actual_hours,
                difficulty,
                notes,
            )
            .await?;
            println!("{}", output);
        }
        Commands::List { format } => {
            let output = commands::project::list(&service, &format).await?;
            println!("{}", output);
        }
        Commands::Show { id, format } => {
            let output = commands::project::show(&service, id, &format).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
