//! Domain records for the project tracker.
//!
//! These are plain attribute bags with no behavior. A `Project` is built
//! empty by the caller, populated, and handed to the repository; the child
//! records only ever come back out of the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Generated identity type for all tables.
pub type Id = i64;

/// A tracked DIY project.
///
/// `id` is absent until the record has been persisted. The child
/// collections are populated only by `fetch_by_id`; a project coming out
/// of `fetch_all` carries them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<Id>,
    pub name: String,
    /// Estimated effort in hours, two-digit scale.
    pub estimated_hours: Option<Decimal>,
    /// Actual effort in hours, two-digit scale.
    pub actual_hours: Option<Decimal>,
    /// Difficulty rating, 1 (easy) to 5 (hard).
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Project {
    /// A not-yet-persisted project with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            estimated_hours: None,
            actual_hours: None,
            difficulty: None,
            notes: None,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
        }
    }
}

/// A material needed by a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: Id,
    pub project_id: Id,
    pub name: String,
    pub num_required: Option<i32>,
    pub cost: Option<Decimal>,
}

/// One instruction in a project's build sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: Id,
    pub project_id: Id,
    pub text: String,
    pub order: i32,
}

/// A category a project belongs to (many-to-many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
}
