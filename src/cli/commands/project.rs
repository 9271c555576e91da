//! Project subcommand implementations.
//!
//! Thin presentation: parse flag input into a `Project`, call the service,
//! format the result. All persistence rules live below the service.

use std::str::FromStr;

use rust_decimal::Decimal;
use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, dash, truncate_with_ellipsis};
use crate::db::{Database, Id, Project};
use crate::service::ProjectService;

#[derive(Tabled)]
pub(crate) struct ProjectDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Name")]
    pub(crate) name: String,
    #[tabled(rename = "Est. hours")]
    pub(crate) estimated_hours: String,
    #[tabled(rename = "Act. hours")]
    pub(crate) actual_hours: String,
    #[tabled(rename = "Difficulty")]
    pub(crate) difficulty: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            id: dash(project.id.as_ref()),
            name: truncate_with_ellipsis(&project.name, 40),
            estimated_hours: dash(project.estimated_hours.as_ref()),
            actual_hours: dash(project.actual_hours.as_ref()),
            difficulty: dash(project.difficulty.as_ref()),
        }
    }
}

pub async fn add<D: Database>(
    service: &ProjectService<D>,
    name: String,
    estimated_hours: Option<String>,
    actual_hours: Option<String>,
    difficulty: Option<i32>,
    notes: Option<String>,
) -> CliResult<String> {
    let mut project = Project::new(name);
    project.estimated_hours = parse_hours(estimated_hours)?;
    project.actual_hours = parse_hours(actual_hours)?;
    project.difficulty = difficulty;
    project.notes = notes;

    let created = service.add_project(&project).await?;

    Ok(format!(
        "You have successfully created project {}: {}",
        dash(created.id.as_ref()),
        created.name
    ))
}

pub async fn list<D: Database>(service: &ProjectService<D>, format: &str) -> CliResult<String> {
    let projects = service.fetch_all_projects().await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&projects)?);
    }

    if projects.is_empty() {
        return Ok("No projects yet. Add one with: workshop add <name>".to_string());
    }

    let rows: Vec<ProjectDisplay> = projects.iter().map(ProjectDisplay::from).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    Ok(table.to_string())
}

pub async fn show<D: Database>(
    service: &ProjectService<D>,
    id: Id,
    format: &str,
) -> CliResult<String> {
    let project = service.fetch_project_by_id(id).await?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&project)?);
    }

    Ok(render_detail(&project))
}

fn render_detail(project: &Project) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Project {}: {}\n",
        dash(project.id.as_ref()),
        project.name
    ));
    out.push_str(&format!(
        "  Estimated hours: {}\n",
        dash(project.estimated_hours.as_ref())
    ));
    out.push_str(&format!(
        "  Actual hours:    {}\n",
        dash(project.actual_hours.as_ref())
    ));
    out.push_str(&format!(
        "  Difficulty:      {}\n",
        dash(project.difficulty.as_ref())
    ));
    out.push_str(&format!("  Notes:           {}\n", dash(project.notes.as_ref())));

    out.push_str("\nMaterials:\n");
    if project.materials.is_empty() {
        out.push_str("  (none)\n");
    }
    for material in &project.materials {
        out.push_str(&format!(
            "  - {} (need {}, cost {})\n",
            material.name,
            dash(material.num_required.as_ref()),
            dash(material.cost.as_ref())
        ));
    }

    out.push_str("\nSteps:\n");
    if project.steps.is_empty() {
        out.push_str("  (none)\n");
    }
    for step in &project.steps {
        out.push_str(&format!("  {}. {}\n", step.order, step.text));
    }

    out.push_str("\nCategories:\n");
    if project.categories.is_empty() {
        out.push_str("  (none)\n");
    }
    for category in &project.categories {
        out.push_str(&format!("  - {}\n", category.name));
    }

    out
}

fn parse_hours(input: Option<String>) -> Result<Option<Decimal>, CliError> {
    input
        .map(|s| {
            Decimal::from_str(s.trim()).map_err(|_| CliError::InvalidDecimal { input: s.clone() })
        })
        .transpose()
}
