use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("{input} is not a valid decimal number")]
    #[diagnostic(
        code(workshop::cli::invalid_decimal),
        help("Enter hours as a plain decimal, like 12.5 or 0.75.")
    )]
    InvalidDecimal { input: String },

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(workshop::cli::render))]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Db(#[from] DbError),
}

pub type CliResult<T> = Result<T, CliError>;
