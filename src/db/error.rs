//! Database error types.
//!
//! One enum covers the whole data-access layer: binder, extractor,
//! transaction controller, and the service-level "absence is an error"
//! case. Uses miette for diagnostic output and thiserror for derives.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    /// A parameter value did not match the semantic type tag it was bound
    /// under.
    #[error("Cannot bind {value} as {kind}")]
    #[diagnostic(code(workshop::db::bind))]
    Bind { kind: String, value: String },

    /// A result column could not be converted into a record field.
    #[error("Failed to extract {entity}.{column}: {message}")]
    #[diagnostic(code(workshop::db::extraction))]
    Extraction {
        entity: String,
        column: String,
        message: String,
    },

    #[error("Connection error: {message}")]
    #[diagnostic(
        code(workshop::db::connection),
        help("Check the database path (--db or WORKSHOP_DB) and its permissions.")
    )]
    Connection { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(workshop::db::migration))]
    Migration { message: String },

    /// A statement failed to prepare or execute.
    #[error("Database error: {message}")]
    #[diagnostic(code(workshop::db::database))]
    Database { message: String },

    /// Any failure inside a transactional region, reported after the
    /// transaction has been rolled back.
    #[error("Transaction rolled back: {source}")]
    #[diagnostic(code(workshop::db::data_access))]
    DataAccess {
        #[source]
        source: Box<DbError>,
    },

    /// A transactional region failed and the rollback failed too. The
    /// original cause is preserved as the source.
    #[error("Transaction failed: {source}; rollback also failed: {rollback}")]
    #[diagnostic(code(workshop::db::rollback))]
    Rollback {
        #[source]
        source: Box<DbError>,
        rollback: String,
    },

    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(workshop::db::not_found))]
    NotFound { entity_type: String, id: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
