//! Project loading, saving, validation, and introspection.

use aw_project::schema::{CaseDef, Project};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub id: String,
    pub name: String,
    pub models: Vec<String>,
    pub ratio_count: usize,
    pub loading_ppa: f64,
}

/// Load a YAML or JSON project, migrated and validated.
pub fn load_project(path: &Path) -> AppResult<Project> {
    Ok(aw_project::load(path)?)
}

pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    Ok(aw_project::save(path, project)?)
}

pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.cases.is_empty() {
        return Err(AppError::Project(
            "Project must have at least one case".to_string(),
        ));
    }
    aw_project::validate_project(project).map_err(|e| AppError::Project(e.to_string()))
}

pub fn list_cases(project: &Project) -> Vec<CaseSummary> {
    project
        .cases
        .iter()
        .map(|case| CaseSummary {
            id: case.id.clone(),
            name: case.name.clone(),
            models: case.models.clone(),
            ratio_count: case.dune_height_ratios.len(),
            loading_ppa: case.well.solids.loading_ppa,
        })
        .collect()
}

pub fn get_case<'a>(project: &'a Project, case_id: &str) -> AppResult<&'a CaseDef> {
    project
        .case(case_id)
        .ok_or_else(|| AppError::CaseNotFound(case_id.to_string()))
}
