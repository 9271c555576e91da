//! Tests for database error display.

use crate::db::DbError;

#[test]
fn not_found_names_entity_and_id() {
    let err = DbError::NotFound {
        entity_type: "Project".to_string(),
        id: "42".to_string(),
    };
    assert_eq!(err.to_string(), "Entity not found: Project with id '42'");
}

#[test]
fn bind_error_names_kind_and_value() {
    let err = DbError::Bind {
        kind: "integer".to_string(),
        value: "Text(\"deck\")".to_string(),
    };
    assert!(err.to_string().contains("integer"));
    assert!(err.to_string().contains("deck"));
}

#[test]
fn data_access_reports_the_original_cause() {
    let err = DbError::DataAccess {
        source: Box::new(DbError::Database {
            message: "no such table: missing".to_string(),
        }),
    };
    assert!(err.to_string().contains("no such table: missing"));
}

#[test]
fn rollback_failure_reports_both_errors() {
    let err = DbError::Rollback {
        source: Box::new(DbError::Database {
            message: "constraint failed".to_string(),
        }),
        rollback: "connection lost".to_string(),
    };
    let text = err.to_string();
    assert!(text.contains("constraint failed"));
    assert!(text.contains("connection lost"));
}

#[test]
fn extraction_error_names_entity_and_column() {
    let err = DbError::Extraction {
        entity: "Project".to_string(),
        column: "estimated_hours".to_string(),
        message: "bad decimal".to_string(),
    };
    assert!(err.to_string().contains("Project.estimated_hours"));
}
