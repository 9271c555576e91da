//! SQLite database connection and migration management.

use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, SqliteConnection};
use tokio::sync::Mutex;

use super::project::SqliteProjectRepository;
use crate::db::{Database, DbError, DbResult};

// Embed migrations from migrations/ at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// SQLite database implementation.
///
/// Holds the single live connection behind a mutex; each repository
/// operation takes exclusive use of it for the operation's duration, which
/// is what the explicit begin/commit/rollback protocol assumes.
pub struct SqliteDatabase {
    conn: Mutex<SqliteConnection>,
}

impl SqliteDatabase {
    /// Open (creating if missing) a database at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        Self::connect(options).await
    }

    /// Create an in-memory database (useful for testing).
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::new().in_memory(true).foreign_keys(true);
        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> DbResult<Self> {
        let conn = options.connect().await.map_err(|e| DbError::Connection {
            message: e.to_string(),
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a function with direct access to the underlying connection.
    ///
    /// This is useful for testing and advanced operations that need raw
    /// database access.
    pub async fn with_connection<F, T>(&self, f: F) -> DbResult<T>
    where
        F: AsyncFnOnce(&mut SqliteConnection) -> sqlx::Result<T>,
    {
        let mut conn = self.conn.lock().await;
        f(&mut *conn).await.map_err(|e| DbError::Database {
            message: e.to_string(),
        })
    }
}

impl Database for SqliteDatabase {
    type Projects<'a> = SqliteProjectRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        let mut conn = self.conn.lock().await;
        MIGRATOR
            .run(&mut *conn)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn projects(&self) -> Self::Projects<'_> {
        SqliteProjectRepository { conn: &self.conn }
    }
}
