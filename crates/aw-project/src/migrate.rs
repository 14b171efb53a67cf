//! Schema migration framework.
//!
//! Version 1 files spelled transport models however the author liked
//! ("SGS alt", "oroskar_mod", ...). Version 2 stores canonical names.

use crate::ProjectError;
use crate::schema::Project;
use aw_hydraulics::TransportModel;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut project: Project) -> Result<Project, ProjectError> {
    while project.version < LATEST_VERSION {
        project = migrate_one_version(project)?;
    }
    Ok(project)
}

fn migrate_one_version(project: Project) -> Result<Project, ProjectError> {
    match project.version {
        0 => migrate_v0_to_v1(project),
        1 => migrate_v1_to_v2(project),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v0_to_v1(mut project: Project) -> Result<Project, ProjectError> {
    project.version = 1;
    Ok(project)
}

fn migrate_v1_to_v2(mut project: Project) -> Result<Project, ProjectError> {
    for case in &mut project.cases {
        for model in &mut case.models {
            // unknown names are left for validation to report
            if let Ok(parsed) = model.parse::<TransportModel>() {
                *model = parsed.name().to_string();
            }
        }
    }
    project.version = 2;
    Ok(project)
}
