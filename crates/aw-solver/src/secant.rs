//! Scalar root-finding with a forward-difference slope.

use crate::error::SolverResult;
use crate::status::ConvergenceStatus;
use tracing::trace;

/// Slopes flatter than this are treated as degenerate.
const MIN_SLOPE: f64 = 1e-12;

/// Secant solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantConfig {
    pub max_iterations: usize,
    /// Stop when `|x_new - x| < tolerance`
    pub tolerance: f64,
    /// Forward-difference step used to estimate the slope
    pub perturbation: f64,
}

/// Secant iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecantResult {
    /// Last finite iterate
    pub x: f64,
    pub iterations: usize,
    pub status: ConvergenceStatus,
}

/// Find `x` with `residual(x) = 0`, starting at `x0`.
///
/// Each step evaluates the residual at `x` and `x + perturbation` and takes a
/// Newton step along the difference slope. A flat or non-finite slope, or a
/// non-finite iterate, stops with [`ConvergenceStatus::Diverged`] and returns
/// the last finite `x`. Errors from `residual` propagate unchanged.
pub fn secant_solve<F>(x0: f64, mut residual: F, config: &SecantConfig) -> SolverResult<SecantResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let mut x = x0;

    for iter in 1..=config.max_iterations {
        let r1 = residual(x)?;
        let r2 = residual(x + config.perturbation)?;
        let slope = (r2 - r1) / config.perturbation;

        if !slope.is_finite() || slope.abs() < MIN_SLOPE {
            trace!(iter, x, slope, "degenerate secant slope");
            return Ok(SecantResult {
                x,
                iterations: iter,
                status: ConvergenceStatus::Diverged,
            });
        }

        let x_new = x - r1 / slope;
        if !x_new.is_finite() {
            return Ok(SecantResult {
                x,
                iterations: iter,
                status: ConvergenceStatus::Diverged,
            });
        }

        trace!(iter, x, x_new, residual = r1, slope, "secant step");

        if (x_new - x).abs() < config.tolerance {
            return Ok(SecantResult {
                x: x_new,
                iterations: iter,
                status: ConvergenceStatus::Converged,
            });
        }
        x = x_new;
    }

    Ok(SecantResult {
        x,
        iterations: config.max_iterations,
        status: ConvergenceStatus::MaxIterationsReached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;

    fn cfg() -> SecantConfig {
        SecantConfig {
            max_iterations: 50,
            tolerance: 1e-10,
            perturbation: 1e-6,
        }
    }

    #[test]
    fn simple_quadratic() {
        // x^2 - 4 = 0, x > 0
        let result = secant_solve(3.0, |x| Ok(x * x - 4.0), &cfg()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Converged);
        assert!((result.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn flat_residual_diverges() {
        let result = secant_solve(1.0, |_| Ok(5.0), &cfg()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert_eq!(result.x, 1.0);
    }

    #[test]
    fn nan_residual_diverges_without_nan() {
        let result = secant_solve(1.0, |x| Ok(if x > 1.0 { f64::NAN } else { x }), &cfg()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert!(result.x.is_finite());
    }

    #[test]
    fn cap_is_reported() {
        let tight = SecantConfig {
            max_iterations: 2,
            tolerance: 0.0,
            perturbation: 1e-6,
        };
        let result = secant_solve(10.0, |x| Ok(x.powi(3) - 1.0), &tight).unwrap();
        assert_eq!(result.status, ConvergenceStatus::MaxIterationsReached);
        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn residual_errors_propagate() {
        let err = secant_solve(1.0, |_| Err(SolverError::config("boom")), &cfg()).unwrap_err();
        assert!(matches!(err, SolverError::Configuration { .. }));
    }
}
