//! Error types for solver operations.

use aw_core::error::AwError;
use aw_hydraulics::HydraulicsError;
use thiserror::Error;

/// Errors that stop a solve before or during iteration.
///
/// Running out of iterations is not an error; it is reported through
/// [`crate::ConvergenceStatus`] on the result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Hydraulics error: {0}")]
    Hydraulics(#[from] HydraulicsError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl SolverError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        SolverError::Configuration { what: what.into() }
    }
}

impl From<SolverError> for AwError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::Configuration { .. } => AwError::InvalidArg {
                what: "solver configuration",
            },
            SolverError::Hydraulics(h) => h.into(),
        }
    }
}
