//! Tests for the transaction controller.

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{ConnectOptions, SqliteConnection};

use crate::db::DbError;
use crate::db::sqlite::{begin, last_insert_id, with_transaction};

/// A scratch connection with one table; tx semantics don't care about the
/// real schema.
async fn setup_conn() -> SqliteConnection {
    let mut conn = SqliteConnectOptions::new()
        .in_memory(true)
        .connect()
        .await
        .expect("in-memory connection");
    sqlx::raw_sql("CREATE TABLE scratch (id INTEGER PRIMARY KEY AUTOINCREMENT, label TEXT)")
        .execute(&mut conn)
        .await
        .expect("create scratch table");
    conn
}

async fn count_rows(conn: &mut SqliteConnection) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM scratch")
        .fetch_one(conn)
        .await
        .expect("count")
}

async fn insert_row(conn: &mut SqliteConnection, label: &str) -> Result<(), DbError> {
    sqlx::query("INSERT INTO scratch (label) VALUES (?)")
        .bind(label)
        .execute(conn)
        .await
        .map(|_| ())
        .map_err(|e| DbError::Database {
            message: e.to_string(),
        })
}

#[tokio::test(flavor = "multi_thread")]
async fn commits_on_success() {
    let mut conn = setup_conn().await;

    with_transaction(&mut conn, async |conn| insert_row(conn, "kept").await)
        .await
        .expect("transaction should commit");

    assert_eq!(count_rows(&mut conn).await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn rolls_back_and_wraps_the_original_cause() {
    let mut conn = setup_conn().await;

    let result: Result<(), DbError> = with_transaction(&mut conn, async |conn| {
        insert_row(conn, "doomed").await?;
        Err(DbError::Database {
            message: "boom".to_string(),
        })
    })
    .await;

    match result {
        Err(DbError::DataAccess { source }) => {
            assert!(source.to_string().contains("boom"));
        }
        other => panic!("expected DataAccess, got {other:?}"),
    }
    assert_eq!(count_rows(&mut conn).await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn failure_after_a_successful_statement_leaves_store_unchanged() {
    let mut conn = setup_conn().await;

    let result: Result<(), DbError> = with_transaction(&mut conn, async |conn| {
        insert_row(conn, "first statement succeeds").await?;
        // Second statement fails: no such table.
        sqlx::query("INSERT INTO missing_table (label) VALUES ('x')")
            .execute(&mut *conn)
            .await
            .map(|_| ())
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })
    })
    .await;

    assert!(matches!(result, Err(DbError::DataAccess { .. })));
    assert_eq!(count_rows(&mut conn).await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn nested_begin_is_rejected() {
    let mut conn = setup_conn().await;

    let result: Result<(), DbError> =
        with_transaction(&mut conn, async |conn| begin(conn).await).await;

    assert!(matches!(result, Err(DbError::DataAccess { .. })));
    // The connection is back to IDLE and still usable.
    insert_row(&mut conn, "after").await.expect("plain insert");
    assert_eq!(count_rows(&mut conn).await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn last_insert_id_reads_back_inside_the_transaction() {
    let mut conn = setup_conn().await;

    let id = with_transaction(&mut conn, async |conn| {
        insert_row(conn, "first").await?;
        last_insert_id(conn).await
    })
    .await
    .expect("transaction should commit");
    assert_eq!(id, 1);

    let id = with_transaction(&mut conn, async |conn| {
        insert_row(conn, "second").await?;
        last_insert_id(conn).await
    })
    .await
    .expect("transaction should commit");
    assert_eq!(id, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn rolled_back_identity_is_not_reused_as_committed_state() {
    let mut conn = setup_conn().await;

    let result: Result<i64, DbError> = with_transaction(&mut conn, async |conn| {
        insert_row(conn, "never committed").await?;
        let id = last_insert_id(conn).await?;
        assert_eq!(id, 1);
        Err(DbError::Database {
            message: "force rollback".to_string(),
        })
    })
    .await;

    assert!(matches!(result, Err(DbError::DataAccess { .. })));
    assert_eq!(count_rows(&mut conn).await, 0);
}
