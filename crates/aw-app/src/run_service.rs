//! Run execution and caching service.

use aw_project::schema::CaseDef;
use aw_results::{CurvePointRecord, RunManifest, RunStore};
use aw_solver::solve_equilibrium;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::compile::{CompiledCase, compile_case};
use crate::error::{AppError, AppResult};
use crate::{project_service, query};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub case_id: &'a str,
    pub options: RunOptions,
}

#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub records: Vec<CurvePointRecord>,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Execute a case, or load it from the store when an identical run exists.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();

    let project = project_service::load_project(request.project_path)?;
    let case = project_service::get_case(&project, request.case_id)?;

    let run_id = aw_results::compute_run_id(case, &request.options.solver_version);
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        info!(case = request.case_id, %run_id, "loading cached run");
        let manifest = store.load_manifest(&run_id)?;
        let records = store.load_curve(&run_id)?;
        return Ok(RunResponse {
            run_id,
            manifest,
            records,
            loaded_from_cache: true,
            elapsed_s: started.elapsed().as_secs_f64(),
        });
    }

    let compiled = compile_case(case)?;
    info!(
        case = request.case_id,
        %run_id,
        models = compiled.wells.len(),
        ratios = compiled.ratios.len(),
        "solving case"
    );

    let records = solve_grid(&compiled)?;
    let manifest = build_manifest(case, &run_id, &request.options.solver_version, &records);
    store.save_run(&manifest, &records)?;

    let elapsed_s = started.elapsed().as_secs_f64();
    info!(
        %run_id,
        points = manifest.point_count,
        non_converged = manifest.non_converged,
        elapsed_s,
        "run complete"
    );

    Ok(RunResponse {
        run_id,
        manifest,
        records,
        loaded_from_cache: false,
        elapsed_s,
    })
}

/// Solve every (model, ratio) point in parallel; output keeps grid order.
pub fn solve_grid(compiled: &CompiledCase) -> AppResult<Vec<CurvePointRecord>> {
    let config = compiled.solver;
    compiled
        .grid()
        .into_par_iter()
        .map(|(well, ratio)| -> AppResult<CurvePointRecord> {
            let result = solve_equilibrium(well, ratio, &config).map_err(|e| {
                AppError::Solver(format!("{} at dune-height ratio {}: {}", well.model, ratio, e))
            })?;
            if !result.is_converged() {
                warn!(
                    model = %well.model,
                    ratio,
                    status = %result.status,
                    outer = result.outer_iterations,
                    inner = result.inner_iterations,
                    "point did not converge"
                );
            }
            Ok(CurvePointRecord {
                model: well.model.name().to_string(),
                dune_height_ratio: ratio,
                result,
            })
        })
        .collect()
}

fn build_manifest(
    case: &CaseDef,
    run_id: &str,
    solver_version: &str,
    records: &[CurvePointRecord],
) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        case_id: case.id.clone(),
        case_name: case.name.clone(),
        timestamp: aw_results::now_timestamp(),
        models: query::list_models(records),
        solver_version: solver_version.to_string(),
        point_count: records.len(),
        non_converged: records.iter().filter(|r| !r.result.is_converged()).count(),
    }
}

/// Runs of one case, newest first.
pub fn list_runs(project_path: &Path, case_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(case_id)?)
}

pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, Vec<CurvePointRecord>)> {
    let store = RunStore::for_project(project_path)?;

    let manifest = store.load_manifest(run_id)?;
    let records = store.load_curve(run_id)?;

    Ok((manifest, records))
}
