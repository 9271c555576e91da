//! Data-access layer.
//!
//! The interesting machinery lives in `sqlite`: a typed parameter binder,
//! a generic row-to-record extractor, and an explicit transaction
//! controller. Everything above it (service, CLI) only sees the
//! `Database`/`ProjectRepository` traits and the plain record types.

mod error;
mod models;
mod repository;
pub mod sqlite;

#[cfg(test)]
mod error_test;

pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
