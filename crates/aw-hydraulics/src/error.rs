//! Error types for hydraulic correlations.

use aw_core::error::AwError;
use thiserror::Error;

/// Errors that can occur while evaluating a correlation or geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicsError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid geometry: {what}")]
    InvalidGeometry { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown transport model '{name}' (expected one of: {expected})")]
    UnknownModel { name: String, expected: String },
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

impl From<AwError> for HydraulicsError {
    fn from(e: AwError) -> Self {
        match e {
            AwError::NonFinite { what, .. } => HydraulicsError::NonPhysical { what },
            AwError::InvalidArg { what } => HydraulicsError::InvalidArg { what },
            AwError::OutOfRange { what, .. } => HydraulicsError::InvalidArg { what },
            AwError::NotConverged { what } => HydraulicsError::ConvergenceFailed { what },
        }
    }
}

impl From<HydraulicsError> for AwError {
    fn from(e: HydraulicsError) -> Self {
        match e {
            HydraulicsError::NonPhysical { what } => AwError::InvalidArg { what },
            HydraulicsError::InvalidGeometry { .. } => AwError::InvalidArg { what: "geometry" },
            HydraulicsError::ConvergenceFailed { what } => AwError::NotConverged { what },
            HydraulicsError::InvalidArg { what } => AwError::InvalidArg { what },
            HydraulicsError::UnknownModel { .. } => AwError::InvalidArg {
                what: "transport model",
            },
        }
    }
}
