//! Row-to-record extraction.
//!
//! One generic routine ([`extract_all`]) parameterized by the target
//! shape. Each shape supplies its column→field mapping as a [`FromSqlRow`]
//! impl, which is the compile-time-checked equivalent of matching columns
//! to attributes by name. Rows are materialized before extraction, so
//! nothing here touches a cursor.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite};

use crate::db::{Category, DbError, DbResult, Material, Project, Step};

/// A record shape that can be rebuilt from one result row.
pub trait FromSqlRow: Sized {
    /// Entity name used in extraction error messages.
    const ENTITY: &'static str;

    fn from_row(row: &SqliteRow) -> DbResult<Self>;
}

/// Extract every row into a `T`, in row order.
pub fn extract_all<T: FromSqlRow>(rows: &[SqliteRow]) -> DbResult<Vec<T>> {
    rows.iter().map(T::from_row).collect()
}

/// Read one column, converting driver failures (missing column, type
/// mismatch) into an extraction error that names entity and column.
fn column<'r, T>(row: &'r SqliteRow, name: &str, entity: &str) -> DbResult<T>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get(name).map_err(|e| DbError::Extraction {
        entity: entity.to_string(),
        column: name.to_string(),
        message: e.to_string(),
    })
}

/// Decimal columns are stored as two-digit-scale text; parse failures are
/// extraction errors, not panics.
fn decimal_column(row: &SqliteRow, name: &str, entity: &str) -> DbResult<Option<Decimal>> {
    let raw: Option<String> = column(row, name, entity)?;
    raw.map(|text| {
        Decimal::from_str(&text).map_err(|e| DbError::Extraction {
            entity: entity.to_string(),
            column: name.to_string(),
            message: format!("'{text}' is not a valid decimal: {e}"),
        })
    })
    .transpose()
}

impl FromSqlRow for Project {
    const ENTITY: &'static str = "Project";

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Project {
            id: Some(column(row, "project_id", Self::ENTITY)?),
            name: column(row, "project_name", Self::ENTITY)?,
            estimated_hours: decimal_column(row, "estimated_hours", Self::ENTITY)?,
            actual_hours: decimal_column(row, "actual_hours", Self::ENTITY)?,
            difficulty: column(row, "difficulty", Self::ENTITY)?,
            notes: column(row, "notes", Self::ENTITY)?,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        })
    }
}

impl FromSqlRow for Material {
    const ENTITY: &'static str = "Material";

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Material {
            id: column(row, "material_id", Self::ENTITY)?,
            project_id: column(row, "project_id", Self::ENTITY)?,
            name: column(row, "material_name", Self::ENTITY)?,
            num_required: column(row, "num_required", Self::ENTITY)?,
            cost: decimal_column(row, "cost", Self::ENTITY)?,
        })
    }
}

impl FromSqlRow for Step {
    const ENTITY: &'static str = "Step";

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Step {
            id: column(row, "step_id", Self::ENTITY)?,
            project_id: column(row, "project_id", Self::ENTITY)?,
            text: column(row, "step_text", Self::ENTITY)?,
            order: column(row, "step_order", Self::ENTITY)?,
        })
    }
}

impl FromSqlRow for Category {
    const ENTITY: &'static str = "Category";

    fn from_row(row: &SqliteRow) -> DbResult<Self> {
        Ok(Category {
            id: column(row, "category_id", Self::ENTITY)?,
            name: column(row, "category_name", Self::ENTITY)?,
        })
    }
}
