//! SQLite ProjectRepository implementation.
//!
//! Each operation is one transactional region over the single connection:
//! IDLE → begin → statements → commit, or rollback on the first failure.
//! Child collections are hydrated only by `fetch_by_id`; `fetch_all` is a
//! deliberate lazy path that leaves them empty.

use sqlx::SqliteConnection;
use tokio::sync::Mutex;

use super::params::{ParamKind, SqlValue, bind, bind_all};
use super::row::{FromSqlRow, extract_all};
use super::tx::{last_insert_id, with_transaction};
use crate::db::{Category, DbError, DbResult, Id, Material, Project, ProjectRepository, Step};

/// SQLx-backed project repository.
pub struct SqliteProjectRepository<'a> {
    pub(crate) conn: &'a Mutex<SqliteConnection>,
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    async fn insert(&self, project: &Project) -> DbResult<Project> {
        let mut conn = self.conn.lock().await;

        let id = with_transaction(&mut *conn, async |conn| {
            let query = bind_all(
                sqlx::query(
                    "INSERT INTO project \
                     (project_name, estimated_hours, actual_hours, difficulty, notes) \
                     VALUES (?, ?, ?, ?, ?)",
                ),
                [
                    (ParamKind::Text, SqlValue::text(Some(project.name.clone()))),
                    (ParamKind::Decimal, SqlValue::decimal(project.estimated_hours)),
                    (ParamKind::Decimal, SqlValue::decimal(project.actual_hours)),
                    (
                        ParamKind::Integer,
                        SqlValue::integer(project.difficulty.map(i64::from)),
                    ),
                    (ParamKind::Text, SqlValue::text(project.notes.clone())),
                ],
            )?;

            query.execute(&mut *conn).await.map_err(statement_error)?;

            // Read the generated identity back inside the same transaction.
            last_insert_id(conn).await
        })
        .await?;

        tracing::debug!(project_id = id, name = %project.name, "inserted project");

        let mut created = project.clone();
        created.id = Some(id);
        Ok(created)
    }

    async fn fetch_all(&self) -> DbResult<Vec<Project>> {
        let mut conn = self.conn.lock().await;

        with_transaction(&mut *conn, async |conn| {
            let rows = sqlx::query(
                "SELECT project_id, project_name, estimated_hours, actual_hours, \
                 difficulty, notes FROM project ORDER BY project_name",
            )
            .fetch_all(&mut *conn)
            .await
            .map_err(statement_error)?;

            extract_all(&rows)
        })
        .await
    }

    async fn fetch_by_id(&self, id: Id) -> DbResult<Option<Project>> {
        let mut conn = self.conn.lock().await;

        with_transaction(&mut *conn, async |conn| {
            let row = bind(
                sqlx::query(
                    "SELECT project_id, project_name, estimated_hours, actual_hours, \
                     difficulty, notes FROM project WHERE project_id = ?",
                ),
                ParamKind::Integer,
                SqlValue::Integer(id),
            )?
            .fetch_optional(&mut *conn)
            .await
            .map_err(statement_error)?;

            let Some(row) = row else {
                return Ok(None);
            };

            let mut project = Project::from_row(&row)?;
            project.materials.extend(materials_for_project(conn, id).await?);
            project.steps.extend(steps_for_project(conn, id).await?);
            project
                .categories
                .extend(categories_for_project(conn, id).await?);

            Ok(Some(project))
        })
        .await
    }
}

async fn materials_for_project(conn: &mut SqliteConnection, id: Id) -> DbResult<Vec<Material>> {
    let rows = bind(
        sqlx::query(
            "SELECT material_id, project_id, material_name, num_required, cost \
             FROM material WHERE project_id = ?",
        ),
        ParamKind::Integer,
        SqlValue::Integer(id),
    )?
    .fetch_all(&mut *conn)
    .await
    .map_err(statement_error)?;

    extract_all(&rows)
}

async fn steps_for_project(conn: &mut SqliteConnection, id: Id) -> DbResult<Vec<Step>> {
    let rows = bind(
        sqlx::query(
            "SELECT s.step_id, s.project_id, s.step_text, s.step_order \
             FROM step s JOIN project p ON s.project_id = p.project_id \
             WHERE p.project_id = ? ORDER BY s.step_order",
        ),
        ParamKind::Integer,
        SqlValue::Integer(id),
    )?
    .fetch_all(&mut *conn)
    .await
    .map_err(statement_error)?;

    extract_all(&rows)
}

async fn categories_for_project(conn: &mut SqliteConnection, id: Id) -> DbResult<Vec<Category>> {
    let rows = bind(
        sqlx::query(
            "SELECT c.category_id, c.category_name \
             FROM category c JOIN project_category pc ON pc.category_id = c.category_id \
             WHERE pc.project_id = ?",
        ),
        ParamKind::Integer,
        SqlValue::Integer(id),
    )?
    .fetch_all(&mut *conn)
    .await
    .map_err(statement_error)?;

    extract_all(&rows)
}

fn statement_error(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}
