//! Iteration limits and model constants for one equilibrium solve.

use crate::error::{SolverError, SolverResult};
use crate::secant::SecantConfig;
use serde::{Deserialize, Serialize};

/// Solver configuration. Every field has a default, so partial YAML/JSON is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Concentration passes
    pub max_outer_iterations: usize,
    /// Secant steps per concentration pass
    pub max_inner_iterations: usize,
    /// Inner loop stops when the rate step is below this (bbl/min)
    pub rate_tolerance_bpm: f64,
    /// Outer loop stops when `c` changes by less than this
    pub concentration_tolerance: f64,
    /// Finite-difference step for the secant slope (bbl/min)
    pub rate_perturbation_bpm: f64,
    /// Fluid lost to the formation, added to the return rate to give pump rate
    pub leakoff_rate_bpm: f64,
    /// Power-law n' used by the eccentricity correction
    pub flow_behavior_index: f64,
    /// Minimum clearance between washpipe and screen ID (in)
    pub washpipe_standoff_in: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_outer_iterations: 100,
            max_inner_iterations: 100,
            rate_tolerance_bpm: 0.01,
            concentration_tolerance: 0.001,
            rate_perturbation_bpm: 0.001,
            leakoff_rate_bpm: 0.0,
            flow_behavior_index: 1.0,
            washpipe_standoff_in: 0.0,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_outer_iterations == 0 || self.max_inner_iterations == 0 {
            return Err(SolverError::config("iteration limits must be at least 1"));
        }
        non_negative(self.rate_tolerance_bpm, "rate tolerance")?;
        non_negative(self.concentration_tolerance, "concentration tolerance")?;
        non_negative(self.leakoff_rate_bpm, "leak-off rate")?;
        non_negative(self.washpipe_standoff_in, "washpipe standoff")?;
        if !(self.rate_perturbation_bpm.is_finite() && self.rate_perturbation_bpm > 0.0) {
            return Err(SolverError::config("rate perturbation must be positive"));
        }
        if !(self.flow_behavior_index.is_finite() && self.flow_behavior_index > 0.0) {
            return Err(SolverError::config("flow behavior index must be positive"));
        }
        Ok(())
    }

    pub(crate) fn secant(&self) -> SecantConfig {
        SecantConfig {
            max_iterations: self.max_inner_iterations,
            tolerance: self.rate_tolerance_bpm,
            perturbation: self.rate_perturbation_bpm,
        }
    }
}

fn non_negative(value: f64, what: &str) -> SolverResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(SolverError::config(format!("{what} must be finite and >= 0, got {value}")));
    }
    Ok(())
}
