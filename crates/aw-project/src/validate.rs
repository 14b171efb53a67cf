//! Project validation logic.

use crate::schema::{CaseDef, Project, SolverConfigDef, WellDef};
use aw_hydraulics::TransportModel;
use aw_hydraulics::slurry::solids_density_ppg;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown transport model '{name}' in case '{case}'")]
    UnknownModel { name: String, case: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(case: &CaseDef, field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("{}.{}", case.id, field),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut case_ids = HashSet::new();
    for case in &project.cases {
        if case.id.trim().is_empty() {
            return Err(invalid(case, "id", "''", "case ID must not be empty"));
        }
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        validate_case(case)?;
    }

    Ok(())
}

fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.models.is_empty() {
        return Err(invalid(case, "models", "[]", "at least one transport model is required"));
    }
    let mut models = HashSet::new();
    for name in &case.models {
        let model = name
            .parse::<TransportModel>()
            .map_err(|_| ValidationError::UnknownModel {
                name: name.clone(),
                case: case.id.clone(),
            })?;
        if !models.insert(model) {
            return Err(ValidationError::DuplicateId {
                id: name.clone(),
                context: format!("case '{}' models", case.id),
            });
        }
    }

    if case.dune_height_ratios.is_empty() {
        return Err(invalid(
            case,
            "dune_height_ratios",
            "[]",
            "at least one dune height ratio is required",
        ));
    }
    let mut seen: Vec<f64> = Vec::with_capacity(case.dune_height_ratios.len());
    for &ratio in &case.dune_height_ratios {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(invalid(case, "dune_height_ratios", ratio, "must lie strictly between 0 and 1"));
        }
        if seen.iter().any(|&r| (r - ratio).abs() < 1e-9) {
            return Err(invalid(case, "dune_height_ratios", ratio, "duplicate ratio"));
        }
        seen.push(ratio);
    }

    validate_well(case, &case.well)?;
    validate_solver(case, &case.solver)
}

fn validate_well(case: &CaseDef, well: &WellDef) -> Result<(), ValidationError> {
    let positive = [
        ("well.openhole.id_in", well.openhole.id_in),
        ("well.screen.od_in", well.screen.od_in),
        ("well.screen.id_in", well.screen.id_in),
        ("well.screen.centralizer_od_in", well.screen.centralizer_od_in),
        ("well.washpipe.od_in", well.washpipe.od_in),
        ("well.washpipe.id_in", well.washpipe.id_in),
        ("well.solids.diameter_in", well.solids.diameter_in),
        ("well.solids.specific_gravity", well.solids.specific_gravity),
        ("well.fluid.density_ppg", well.fluid.density_ppg),
        ("well.fluid.viscosity_cp", well.fluid.viscosity_cp),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(case, field, value, "must be positive"));
        }
    }

    let non_negative = [
        ("well.openhole.roughness_in", well.openhole.roughness_in),
        ("well.screen.roughness_in", well.screen.roughness_in),
        ("well.washpipe.roughness_in", well.washpipe.roughness_in),
        ("well.solids.loading_ppa", well.solids.loading_ppa),
        (
            "well.solids.absolute_volume_gal_per_lb",
            well.solids.absolute_volume_gal_per_lb,
        ),
    ];
    for (field, value) in non_negative {
        if !(value.is_finite() && value >= 0.0) {
            return Err(invalid(case, field, value, "must be >= 0"));
        }
    }

    if solids_density_ppg(well.solids.specific_gravity) <= well.fluid.density_ppg {
        return Err(invalid(
            case,
            "well.solids.specific_gravity",
            well.solids.specific_gravity,
            "solids must be heavier than the carrier fluid",
        ));
    }

    if well.washpipe.id_in >= well.washpipe.od_in {
        return Err(invalid(case, "well.washpipe.id_in", well.washpipe.id_in, "must be below washpipe OD"));
    }
    if well.washpipe.od_in >= well.screen.id_in {
        return Err(invalid(case, "well.washpipe.od_in", well.washpipe.od_in, "must be below screen ID"));
    }
    if well.screen.id_in >= well.screen.od_in {
        return Err(invalid(case, "well.screen.id_in", well.screen.id_in, "must be below screen OD"));
    }
    if well.screen.centralizer_od_in < well.screen.od_in {
        return Err(invalid(
            case,
            "well.screen.centralizer_od_in",
            well.screen.centralizer_od_in,
            "must be at least the screen OD",
        ));
    }
    if well.screen.centralizer_od_in > well.openhole.id_in {
        return Err(invalid(
            case,
            "well.screen.centralizer_od_in",
            well.screen.centralizer_od_in,
            "must fit inside the open hole",
        ));
    }
    Ok(())
}

fn validate_solver(case: &CaseDef, solver: &SolverConfigDef) -> Result<(), ValidationError> {
    for (field, value) in [
        ("solver.max_outer_iterations", solver.max_outer_iterations),
        ("solver.max_inner_iterations", solver.max_inner_iterations),
    ] {
        if value == Some(0) {
            return Err(invalid(case, field, 0, "must be at least 1"));
        }
    }

    for (field, value) in [
        ("solver.rate_tolerance_bpm", solver.rate_tolerance_bpm),
        ("solver.concentration_tolerance", solver.concentration_tolerance),
        ("solver.leakoff_rate_bpm", solver.leakoff_rate_bpm),
        ("solver.washpipe_standoff_in", solver.washpipe_standoff_in),
    ] {
        if let Some(v) = value {
            if !(v.is_finite() && v >= 0.0) {
                return Err(invalid(case, field, v, "must be >= 0"));
            }
        }
    }

    for (field, value) in [
        ("solver.rate_perturbation_bpm", solver.rate_perturbation_bpm),
        ("solver.flow_behavior_index", solver.flow_behavior_index),
    ] {
        if let Some(v) = value {
            if !(v.is_finite() && v > 0.0) {
                return Err(invalid(case, field, v, "must be positive"));
            }
        }
    }
    Ok(())
}
