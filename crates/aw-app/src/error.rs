//! Error types for the aw-app service layer.

use std::path::PathBuf;

/// Unified error for the CLI; backend errors are flattened to strings.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Invalid case '{case_id}': {message}")]
    Compile { case_id: String, message: String },

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<aw_project::ProjectError> for AppError {
    fn from(err: aw_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<aw_solver::SolverError> for AppError {
    fn from(err: aw_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<aw_results::ResultsError> for AppError {
    fn from(err: aw_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
