//! Repository traits for data access abstraction.
//!
//! These define the contract the service layer programs against, so the
//! SQLite backend could be swapped without touching business logic.

use crate::db::{
    DbResult,
    models::{Id, Project},
};

/// Repository for Project operations.
///
/// Every method runs as one transactional region: it either commits
/// entirely or rolls back entirely, and never returns with the connection
/// still inside a transaction.
pub trait ProjectRepository {
    /// Insert a new project row and return the record with its generated
    /// id set. Performs no validation of the caller-populated fields.
    fn insert(&self, project: &Project) -> impl Future<Output = DbResult<Project>>;

    /// All projects ordered by name ascending, child collections empty.
    fn fetch_all(&self) -> impl Future<Output = DbResult<Vec<Project>>>;

    /// One project with its materials, steps, and categories hydrated.
    /// Absence is `Ok(None)`, never an error.
    fn fetch_by_id(&self, id: Id) -> impl Future<Output = DbResult<Option<Project>>>;
}

/// Combined database interface.
pub trait Database {
    type Projects<'a>: ProjectRepository
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>>;

    /// Get the project repository.
    fn projects(&self) -> Self::Projects<'_>;
}
