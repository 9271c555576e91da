//! SQLite implementation of the database traits.
//!
//! Split the same way the operations compose: `params` binds typed values
//! into statements, `row` maps result rows back into records, `tx` owns
//! the begin/commit/rollback discipline, and `project` stitches them into
//! the repository operations.

mod connection;
mod params;
mod project;
mod row;
mod tx;

#[cfg(test)]
mod tx_test;

pub use connection::SqliteDatabase;
pub use params::{ParamKind, SqlValue, bind, bind_all};
pub use project::SqliteProjectRepository;
pub use row::{FromSqlRow, extract_all};
pub use tx::{begin, commit, last_insert_id, rollback, with_transaction};
