//! Project service: a pass-through over the repository.
//!
//! The one contract difference from the data-access layer is absence
//! handling: the repository is absence-tolerant (`Ok(None)`), the service
//! fails loudly with `NotFound`.

use std::sync::Arc;

use tracing::instrument;

use crate::db::{Database, DbError, DbResult, Id, Project, ProjectRepository};

/// Orchestration layer exposing project operations to the CLI.
///
/// Generic over `D: Database` so tests and alternative backends inject
/// their own implementation.
pub struct ProjectService<D: Database> {
    db: Arc<D>,
}

impl<D: Database> ProjectService<D> {
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Persist a new project and return it with its generated id.
    #[instrument(skip(self, project), fields(name = %project.name))]
    pub async fn add_project(&self, project: &Project) -> DbResult<Project> {
        self.db.projects().insert(project).await
    }

    /// All projects, ordered by name, without child collections.
    #[instrument(skip(self))]
    pub async fn fetch_all_projects(&self) -> DbResult<Vec<Project>> {
        self.db.projects().fetch_all().await
    }

    /// One project with children hydrated; absence is an error here.
    #[instrument(skip(self))]
    pub async fn fetch_project_by_id(&self, id: Id) -> DbResult<Project> {
        self.db
            .projects()
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                entity_type: "Project".to_string(),
                id: id.to_string(),
            })
    }
}
