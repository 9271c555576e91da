//! Tests for ProjectService.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::ProjectService;
use crate::db::{Database, DbError, Project, ProjectRepository, SqliteDatabase};

async fn setup_service() -> (Arc<SqliteDatabase>, ProjectService<SqliteDatabase>) {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("in-memory database");
    db.migrate().await.expect("migration should succeed");
    let db = Arc::new(db);
    (db.clone(), ProjectService::new(db))
}

fn deck_project() -> Project {
    let mut project = Project::new("Deck");
    project.estimated_hours = Some(Decimal::from_str("12.00").expect("decimal"));
    project.actual_hours = Some(Decimal::from_str("10.00").expect("decimal"));
    project.difficulty = Some(3);
    project.notes = Some("outdoor".to_string());
    project
}

#[tokio::test(flavor = "multi_thread")]
async fn add_project_returns_the_generated_id() {
    let (_db, service) = setup_service().await;

    let created = service.add_project(&deck_project()).await.expect("add");
    assert!(created.id.expect("generated id") > 0);
    assert_eq!(created.name, "Deck");
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_project_by_id_missing_raises_not_found() {
    let (_db, service) = setup_service().await;

    let result = service.fetch_project_by_id(99999).await;
    match result {
        Err(DbError::NotFound { entity_type, id }) => {
            assert_eq!(entity_type, "Project");
            assert_eq!(id, "99999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_project_by_id_matches_the_repository_result() {
    let (db, service) = setup_service().await;

    let created = service.add_project(&deck_project()).await.expect("add");
    let id = created.id.expect("generated id");

    let from_service = service.fetch_project_by_id(id).await.expect("service fetch");
    let from_repo = db
        .projects()
        .fetch_by_id(id)
        .await
        .expect("repository fetch")
        .expect("project should exist");
    assert_eq!(from_service, from_repo);
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_all_projects_delegates_in_name_order() {
    let (_db, service) = setup_service().await;

    for name in ["Workbench", "Arbor"] {
        service
            .add_project(&Project::new(name))
            .await
            .expect("add");
    }

    let projects = service.fetch_all_projects().await.expect("fetch all");
    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Arbor", "Workbench"]);
}
