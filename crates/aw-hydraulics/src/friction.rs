//! Reynolds number, Colebrook friction factor and friction pressure gradient.
//!
//! Friction factors are Fanning. The pressure gradient is the Fanning form of
//! Darcy-Weisbach, `dp/dL = 2 f rho v|v| / (g_c d)`, reported in psi.

use crate::common::{LAMINAR_REYNOLDS_LIMIT, check_finite, check_positive};
use crate::error::{HydraulicsError, HydraulicsResult};
use aw_core::units::{GC, SQ_IN_PER_SQ_FT, cp_to_lbm_per_ft_s, ft_per_in, ppg_to_lbm_per_ft3};
use serde::{Deserialize, Serialize};

const COLEBROOK_MAX_ITER: usize = 50;
const COLEBROOK_REL_TOL: f64 = 1e-12;

/// Density and viscosity of whatever is flowing through a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProps {
    pub density_ppg: f64,
    pub viscosity_cp: f64,
}

/// Intermediate values of one friction evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionReport {
    pub velocity_ft_s: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub pressure_gradient_psi_per_ft: f64,
}

/// Newtonian Reynolds number, `~928 rho v d / mu` in oilfield units.
pub fn reynolds_number(
    velocity_ft_s: f64,
    diameter_in: f64,
    density_ppg: f64,
    viscosity_cp: f64,
) -> HydraulicsResult<f64> {
    check_positive(diameter_in, "diameter")?;
    check_positive(density_ppg, "density")?;
    check_positive(viscosity_cp, "viscosity")?;
    check_finite(velocity_ft_s, "velocity")?;

    let rho = density_ppg * ppg_to_lbm_per_ft3();
    let mu = viscosity_cp * cp_to_lbm_per_ft_s();
    let re = rho * velocity_ft_s.abs() * diameter_in * ft_per_in() / mu;

    check_finite(re, "Reynolds number")?;
    Ok(re)
}

/// Fanning friction factor.
///
/// Laminar below `Re = 2100`, Colebrook-White above it. Colebrook is solved by
/// fixed-point iteration seeded with Swamee-Jain. Zero flow returns 0.
pub fn friction_factor(diameter_in: f64, reynolds: f64, roughness_in: f64) -> HydraulicsResult<f64> {
    check_positive(diameter_in, "diameter")?;
    check_finite(reynolds, "Reynolds number")?;
    check_finite(roughness_in, "roughness")?;
    if roughness_in < 0.0 {
        return Err(HydraulicsError::NonPhysical { what: "roughness" });
    }

    if reynolds <= 0.0 {
        return Ok(0.0);
    }
    if reynolds < LAMINAR_REYNOLDS_LIMIT {
        return Ok(16.0 / reynolds);
    }

    let rel = roughness_in / diameter_in / 3.7;

    // Swamee-Jain gives Darcy; divide by 4 for Fanning
    let seed = 0.25 / (rel + 5.74 / reynolds.powf(0.9)).log10().powi(2) / 4.0;
    let mut f = seed;
    for _ in 0..COLEBROOK_MAX_ITER {
        let inv_sqrt = -4.0 * (rel + 1.2613 / (reynolds * f.sqrt())).log10();
        let f_new = 1.0 / (inv_sqrt * inv_sqrt);
        check_finite(f_new, "friction factor")?;
        if ((f_new - f) / f).abs() < COLEBROOK_REL_TOL {
            return Ok(f_new);
        }
        f = f_new;
    }

    Err(HydraulicsError::ConvergenceFailed {
        what: "Colebrook friction factor",
    })
}

/// Friction pressure drop (psi) over `length_ft` for flow at `velocity_ft_s`.
///
/// The sign follows the velocity.
pub fn pressure_gradient(
    friction_factor: f64,
    density_ppg: f64,
    velocity_ft_s: f64,
    diameter_in: f64,
    length_ft: f64,
) -> HydraulicsResult<f64> {
    check_positive(diameter_in, "diameter")?;

    let rho = density_ppg * ppg_to_lbm_per_ft3();
    let d_ft = diameter_in * ft_per_in();
    let lbf_per_ft2 =
        2.0 * friction_factor * rho * velocity_ft_s * velocity_ft_s.abs() * length_ft / (GC * d_ft);
    let dp = lbf_per_ft2 / SQ_IN_PER_SQ_FT;

    check_finite(dp, "pressure drop")?;
    Ok(dp)
}

/// Reynolds number, friction factor and per-foot pressure drop in one go.
pub fn friction_gradient(
    velocity_ft_s: f64,
    diameter_in: f64,
    roughness_in: f64,
    fluid: FluidProps,
) -> HydraulicsResult<FrictionReport> {
    let reynolds = reynolds_number(velocity_ft_s, diameter_in, fluid.density_ppg, fluid.viscosity_cp)?;
    let f = friction_factor(diameter_in, reynolds, roughness_in)?;
    let dp = pressure_gradient(f, fluid.density_ppg, velocity_ft_s, diameter_in, 1.0)?;

    Ok(FrictionReport {
        velocity_ft_s,
        reynolds,
        friction_factor: f,
        pressure_gradient_psi_per_ft: dp,
    })
}
