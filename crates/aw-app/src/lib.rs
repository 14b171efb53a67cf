//! Shared application service layer for abwave.
//!
//! Loads case files, turns cases into solver inputs, runs the
//! (model, dune-height ratio) grid and queries stored curves. The CLI is a
//! thin shell over this crate.

pub mod compile;
pub mod error;
pub mod project_service;
pub mod query;
pub mod run_service;

pub use compile::{CompiledCase, compile_case};
pub use error::{AppError, AppResult};
pub use project_service::{CaseSummary, get_case, list_cases, load_project, save_project, validate_project};
pub use query::{
    CurveVariable, RunSummary, curve_to_csv, extract_curve, get_run_summary, list_models,
};
pub use run_service::{RunOptions, RunRequest, RunResponse, ensure_run, list_runs, load_run, solve_grid};
