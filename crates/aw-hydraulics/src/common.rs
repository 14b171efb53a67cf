//! Common utilities for correlation calculations.

use crate::error::{HydraulicsError, HydraulicsResult};
use aw_core::numeric::{ensure_finite, ensure_positive};

/// Reynolds number below which flow is treated as laminar.
pub const LAMINAR_REYNOLDS_LIMIT: f64 = 2100.0;

/// Rates below this (bbl/min) are treated as no flow.
pub const EPSILON_RATE: f64 = 1e-12;

/// Ensure a value is finite, returning HydraulicsError if not.
pub fn check_finite(value: f64, what: &'static str) -> HydraulicsResult<()> {
    ensure_finite(value, what).map_err(|_| HydraulicsError::NonPhysical { what })?;
    Ok(())
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> HydraulicsResult<()> {
    ensure_positive(value, what).map_err(|_| HydraulicsError::NonPhysical { what })?;
    Ok(())
}
