//! Result data types.

use aw_solver::EquilibriumResult;
use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub case_id: String,
    pub case_name: String,
    /// RFC 3339
    pub timestamp: String,
    pub models: Vec<String>,
    pub solver_version: String,
    pub point_count: usize,
    #[serde(default)]
    pub non_converged: usize,
}

/// One line of `curve.jsonl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePointRecord {
    pub model: String,
    pub dune_height_ratio: f64,
    pub result: EquilibriumResult,
}

pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}
