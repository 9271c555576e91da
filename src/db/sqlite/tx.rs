//! Explicit transaction control over one open connection.
//!
//! [`with_transaction`] is the single transactional-region helper: begin,
//! run the operation, commit on success, roll back on any failure. The
//! original failure is what propagates (wrapped as `DataAccess`); only
//! when the rollback itself fails does the error report both. Nesting is
//! not supported — SQLite rejects a second BEGIN on the same connection.

use sqlx::SqliteConnection;

use crate::db::{DbError, DbResult};

/// Start a transactional region (disables implicit per-statement commit).
pub async fn begin(conn: &mut SqliteConnection) -> DbResult<()> {
    execute(conn, "BEGIN").await
}

/// Finalize all statements issued since `begin`.
pub async fn commit(conn: &mut SqliteConnection) -> DbResult<()> {
    execute(conn, "COMMIT").await
}

/// Discard all statements issued since `begin`.
pub async fn rollback(conn: &mut SqliteConnection) -> DbResult<()> {
    execute(conn, "ROLLBACK").await
}

/// Generated identity of the most recent insert on this connection. Only
/// meaningful inside the same transaction as the insert; the repository
/// never exposes it past the transactional boundary.
pub async fn last_insert_id(conn: &mut SqliteConnection) -> DbResult<i64> {
    sqlx::query_scalar("SELECT last_insert_rowid()")
        .fetch_one(conn)
        .await
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })
}

/// Run `op` as one transactional region with commit-or-rollback on every
/// exit path.
pub async fn with_transaction<T, F>(conn: &mut SqliteConnection, op: F) -> DbResult<T>
where
    F: AsyncFnOnce(&mut SqliteConnection) -> DbResult<T>,
{
    begin(conn).await?;
    tracing::trace!("transaction started");

    match op(&mut *conn).await {
        Ok(value) => match commit(conn).await {
            Ok(()) => {
                tracing::trace!("transaction committed");
                Ok(value)
            }
            Err(commit_err) => roll_back_after(conn, commit_err).await,
        },
        Err(cause) => roll_back_after(conn, cause).await,
    }
}

async fn roll_back_after<T>(conn: &mut SqliteConnection, cause: DbError) -> DbResult<T> {
    match rollback(conn).await {
        Ok(()) => {
            tracing::debug!(%cause, "transaction rolled back");
            Err(DbError::DataAccess {
                source: Box::new(cause),
            })
        }
        Err(rollback_err) => Err(DbError::Rollback {
            source: Box::new(cause),
            rollback: rollback_err.to_string(),
        }),
    }
}

async fn execute(conn: &mut SqliteConnection, sql: &str) -> DbResult<()> {
    sqlx::query(sql)
        .execute(conn)
        .await
        .map(|_| ())
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })
}
