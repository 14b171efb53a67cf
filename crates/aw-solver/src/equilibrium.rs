//! Nested flow-split / concentration equilibrium for one dune height.
//!
//! Outer loop: given the slurry above the dune, the transport correlation
//! fixes the open-hole velocity, rate and friction gradient (the target).
//! Inner loop: secant search for the washpipe-screen rate whose gradient
//! equals the target. The open-hole loading is then rescaled by the split,
//! which changes the slurry and hence the target, until the solids
//! concentration stops moving.

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::secant::secant_solve;
use crate::selector::{TransportContext, transport_slurry, transport_velocity};
use crate::state::SlurryState;
use crate::status::ConvergenceStatus;
use crate::well::WellConfiguration;
use aw_hydraulics::flow::rate_from_velocity;
use aw_hydraulics::{
    DuneGeometry, FlowPath, FluidProps, HydraulicsResult, annulus_area, dune_geometry, eccentricity,
    friction_gradient,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One point of an alpha-wave curve. Rates in bbl/min, gradients in psi/ft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    pub dune_height_ratio: f64,
    pub dune_height: f64,
    pub geometry: DuneGeometry,
    /// ft/s
    pub transport_velocity: f64,
    pub openhole_rate: f64,
    pub washpipe_screen_rate: f64,
    pub pump_rate: f64,
    pub return_rate: f64,
    pub leakoff_rate: f64,
    pub openhole_dp: f64,
    pub washpipe_screen_dp: f64,
    /// Washpipe-screen annulus carrying the full pump rate
    pub beta_dp: f64,
    /// Washpipe bore carrying the return rate
    pub washpipe_dp: f64,
    /// Solids volume fraction above the dune
    pub concentration: f64,
    pub status: ConvergenceStatus,
    pub outer_iterations: usize,
    /// Secant steps summed over all outer passes
    pub inner_iterations: usize,
}

impl EquilibriumResult {
    pub fn is_converged(&self) -> bool {
        self.status.is_converged()
    }
}

/// Open-hole flow that just keeps the dune surface moving.
#[derive(Debug, Clone, Copy, PartialEq)]
struct OpenHoleTarget {
    velocity: f64,
    rate: f64,
    dp: f64,
}

impl OpenHoleTarget {
    /// Stand-in when no target can be evaluated; never usable.
    const NONE: OpenHoleTarget = OpenHoleTarget {
        velocity: 0.0,
        rate: 0.0,
        dp: 0.0,
    };

    fn is_usable(&self) -> bool {
        self.velocity.is_finite() && self.rate.is_finite() && self.rate > 0.0 && self.dp.is_finite()
    }
}

/// Velocity from `transport`, friction from the slurry actually flowing (`carrier`).
fn openhole_target(
    well: &WellConfiguration,
    geometry: &DuneGeometry,
    transport: &SlurryState,
    carrier: &SlurryState,
) -> HydraulicsResult<OpenHoleTarget> {
    let ctx = TransportContext {
        well,
        geometry,
        slurry: transport,
    };
    let velocity = transport_velocity(well.model, &ctx)?;
    let rate = rate_from_velocity(velocity, geometry.flow_area());
    let friction = friction_gradient(
        velocity,
        geometry.hydraulic_diameter,
        well.openhole_roughness,
        carrier.fluid(),
    )?;
    Ok(OpenHoleTarget {
        velocity,
        rate,
        dp: friction.pressure_gradient_psi_per_ft,
    })
}

/// Solve the alpha-wave flow split at `dune_height_ratio`.
///
/// Configuration problems (invalid well, ratio outside (0,1), bad limits)
/// are returned as `Err` before any iteration. Everything else, including a
/// correlation that rejects the slurry, is reported through
/// [`EquilibriumResult::status`] together with the last finite estimate.
///
/// The reported target, concentration and washpipe-screen rate always belong
/// to the same pass, so a converged result balances its two gradients.
pub fn solve_equilibrium(
    well: &WellConfiguration,
    dune_height_ratio: f64,
    config: &SolverConfig,
) -> SolverResult<EquilibriumResult> {
    well.validate()?;
    config.validate()?;
    if !(dune_height_ratio > 0.0 && dune_height_ratio < 1.0) {
        return Err(SolverError::config(format!(
            "dune height ratio {dune_height_ratio} must lie strictly between 0 and 1"
        )));
    }

    let geometry = dune_geometry(well.openhole_id, well.screen_od, well.centralizer_od, dune_height_ratio)?;
    let fluid = well.fluid();

    let ecc = eccentricity(well.washpipe_od, well.screen_id, config.washpipe_standoff_in)?;
    let washpipe_screen = FlowPath::annulus("washpipe-screen", well.screen_id, well.washpipe_od, well.screen_roughness)
        .with_eccentricity(config.flow_behavior_index, ecc);
    let washpipe = FlowPath::pipe("washpipe", well.washpipe_id, well.washpipe_roughness);

    // First guess: solids split between channel and full annulus by area
    let full_annulus = annulus_area(well.openhole_id, well.screen_od);
    let initial_loading = well.solid_loading * full_annulus / geometry.flow_area();
    let mut slurry = SlurryState::at_loading(well, initial_loading);
    let mut target = match openhole_target(well, &geometry, &slurry, &slurry) {
        Ok(t) => t,
        Err(e) => {
            warn!(
                ratio = dune_height_ratio,
                model = %well.model,
                loading = initial_loading,
                error = %e,
                "no transport velocity for the initial slurry"
            );
            OpenHoleTarget::NONE
        }
    };

    let secant = config.secant();
    let mut status = ConvergenceStatus::Converged;
    let mut q = if target.is_usable() { target.rate } else { 0.0 };
    let mut inner_iterations = 0;
    let mut outer_iterations = 0;
    let mut concentration_settled = false;

    // `target` and `slurry` stay on the pass `q` was solved against
    for pass in 1..=config.max_outer_iterations {
        outer_iterations = pass;

        if !target.is_usable() {
            warn!(
                pass,
                ratio = dune_height_ratio,
                model = %well.model,
                openhole_rate = target.rate,
                "open-hole target unusable, stopping"
            );
            status = ConvergenceStatus::Diverged;
            break;
        }

        let dp_target = target.dp;
        let inner = match secant_solve(
            target.rate,
            |rate| Ok(dp_target - washpipe_screen.pressure_gradient(rate, fluid)?),
            &secant,
        ) {
            Ok(inner) => inner,
            Err(e) => {
                warn!(pass, ratio = dune_height_ratio, model = %well.model, error = %e, "flow-split search failed");
                status = ConvergenceStatus::Diverged;
                break;
            }
        };
        inner_iterations += inner.iterations;
        status = status.worst(inner.status);
        q = inner.x;
        if inner.status == ConvergenceStatus::Diverged {
            warn!(pass, ratio = dune_height_ratio, model = %well.model, "flow-split search diverged");
            break;
        }
        if inner.status == ConvergenceStatus::MaxIterationsReached {
            warn!(
                pass,
                ratio = dune_height_ratio,
                model = %well.model,
                iterations = inner.iterations,
                "flow-split search hit its iteration cap"
            );
        }

        // Solids entering the open-hole channel scale with the total split
        let loading = well.solid_loading * (target.rate + q) / target.rate;
        let next_slurry = SlurryState::at_loading(well, loading);
        let change = (next_slurry.concentration - slurry.concentration).abs();
        debug!(
            pass,
            concentration = next_slurry.concentration,
            change,
            target_dp = target.dp,
            openhole_rate = target.rate,
            washpipe_screen_rate = q,
            "concentration pass"
        );

        if change < config.concentration_tolerance {
            concentration_settled = true;
            break;
        }
        if pass == config.max_outer_iterations {
            break;
        }

        match next_slurry_target(well, &geometry, &slurry, &next_slurry) {
            Some(next_target) => {
                slurry = next_slurry;
                target = next_target;
            }
            None => {
                warn!(
                    pass,
                    ratio = dune_height_ratio,
                    model = %well.model,
                    loading,
                    "slurry update left the correlation range"
                );
                status = ConvergenceStatus::Diverged;
                break;
            }
        }
    }

    if !concentration_settled && status != ConvergenceStatus::Diverged {
        warn!(
            ratio = dune_height_ratio,
            model = %well.model,
            passes = outer_iterations,
            "concentration loop hit its iteration cap"
        );
        status = status.worst(ConvergenceStatus::MaxIterationsReached);
    }

    Ok(finalize(
        config,
        dune_height_ratio,
        geometry,
        Finalize {
            target,
            slurry,
            washpipe_screen_rate: q,
            status,
            outer_iterations,
            inner_iterations,
        },
        &washpipe_screen,
        &washpipe,
        fluid,
    ))
}

/// Target for the next pass; `None` when the updated slurry is unusable.
fn next_slurry_target(
    well: &WellConfiguration,
    geometry: &DuneGeometry,
    pass_start: &SlurryState,
    updated: &SlurryState,
) -> Option<OpenHoleTarget> {
    if !updated.is_finite() || updated.loading < 0.0 {
        return None;
    }
    let transport = transport_slurry(well.model, pass_start, updated);
    openhole_target(well, geometry, &transport, updated).ok()
}

struct Finalize {
    target: OpenHoleTarget,
    slurry: SlurryState,
    washpipe_screen_rate: f64,
    status: ConvergenceStatus,
    outer_iterations: usize,
    inner_iterations: usize,
}

/// Report drops at the solved rates. A drop that cannot be evaluated is
/// reported as 0 and marks the result `Diverged`.
fn finalize(
    config: &SolverConfig,
    dune_height_ratio: f64,
    geometry: DuneGeometry,
    state: Finalize,
    washpipe_screen: &FlowPath,
    washpipe: &FlowPath,
    fluid: FluidProps,
) -> EquilibriumResult {
    let finite_or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };

    let q = finite_or_zero(state.washpipe_screen_rate);
    let openhole_rate = finite_or_zero(state.target.rate);
    let return_rate = openhole_rate + q;
    let pump_rate = return_rate + config.leakoff_rate_bpm;

    let mut status = state.status;
    let mut gradient = |path: &FlowPath, rate: f64| match path.pressure_gradient(rate, fluid) {
        Ok(dp) if dp.is_finite() => dp,
        Ok(_) | Err(_) => {
            warn!(
                path = path.name(),
                rate,
                ratio = dune_height_ratio,
                "pressure drop not evaluable at the solved rate"
            );
            status = ConvergenceStatus::Diverged;
            0.0
        }
    };
    let washpipe_screen_dp = gradient(washpipe_screen, q);
    let beta_dp = gradient(washpipe_screen, pump_rate);
    let washpipe_dp = gradient(washpipe, return_rate);

    EquilibriumResult {
        dune_height_ratio,
        dune_height: geometry.dune_height,
        geometry,
        transport_velocity: finite_or_zero(state.target.velocity),
        openhole_rate,
        washpipe_screen_rate: q,
        pump_rate,
        return_rate,
        leakoff_rate: config.leakoff_rate_bpm,
        openhole_dp: finite_or_zero(state.target.dp),
        washpipe_screen_dp,
        beta_dp,
        washpipe_dp,
        concentration: finite_or_zero(state.slurry.concentration),
        status,
        outer_iterations: state.outer_iterations,
        inner_iterations: state.inner_iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_hydraulics::TransportModel;

    fn reference() -> WellConfiguration {
        WellConfiguration {
            openhole_id: 8.5,
            openhole_roughness: 0.05,
            screen_od: 6.25,
            screen_id: 5.0,
            screen_roughness: 0.007,
            centralizer_od: 7.25,
            washpipe_od: 4.0,
            washpipe_id: 3.5,
            washpipe_roughness: 0.007,
            solid_diameter: 0.0287,
            solid_specific_gravity: 1.6,
            solid_loading: 0.75,
            solid_absolute_volume: 0.0443,
            fluid_density: 8.8,
            fluid_viscosity: 1.2,
            model: TransportModel::Oroskar,
        }
    }

    #[test]
    fn initial_target_is_positive() {
        let well = reference();
        let geometry = dune_geometry(8.5, 6.25, 7.25, 0.7).unwrap();
        let slurry = SlurryState::at_loading(&well, 1.0);
        let target = openhole_target(&well, &geometry, &slurry, &slurry).unwrap();
        assert!(target.is_usable());
        assert!(target.rate > 1.0 && target.rate < 6.0, "rate {}", target.rate);
    }

    #[test]
    fn ratio_bounds_are_configuration_errors() {
        let cfg = SolverConfig::default();
        for ratio in [0.0, 1.0, -0.2, f64::NAN] {
            let err = solve_equilibrium(&reference(), ratio, &cfg).unwrap_err();
            assert!(matches!(err, SolverError::Configuration { .. }), "{ratio}: {err}");
        }
    }

    #[test]
    fn zero_loading_with_oroskar_diverges_cleanly() {
        let well = WellConfiguration {
            solid_loading: 0.0,
            ..reference()
        };
        let result = solve_equilibrium(&well, 0.7, &SolverConfig::default()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert_eq!(result.inner_iterations, 0);
        assert!(result.pump_rate.is_finite());
        assert_eq!(result.openhole_rate, 0.0);
    }

    #[test]
    fn leakoff_is_added_to_pump_rate() {
        let cfg = SolverConfig {
            leakoff_rate_bpm: 0.25,
            ..Default::default()
        };
        let result = solve_equilibrium(&reference(), 0.7, &cfg).unwrap();
        assert_eq!(result.leakoff_rate, 0.25);
        assert_eq!(result.pump_rate, result.return_rate + 0.25);
        assert!(result.beta_dp > result.washpipe_screen_dp);
    }

    #[test]
    fn oroskar_target_keeps_pass_start_concentration() {
        let geometry = dune_geometry(8.5, 6.25, 7.25, 0.7).unwrap();
        let well = reference();
        let start = SlurryState::at_loading(&well, 1.0);
        let updated = SlurryState::at_loading(&well, 1.5);
        let lagged = SlurryState {
            concentration: start.concentration,
            ..updated
        };

        let next = next_slurry_target(&well, &geometry, &start, &updated).unwrap();
        assert_eq!(next, openhole_target(&well, &geometry, &lagged, &updated).unwrap());

        let refit = WellConfiguration {
            model: TransportModel::OroskarModified,
            ..reference()
        };
        let next = next_slurry_target(&refit, &geometry, &start, &updated).unwrap();
        assert_eq!(next, openhole_target(&refit, &geometry, &updated, &updated).unwrap());
    }

    #[test]
    fn hang_rejecting_initial_slurry_diverges() {
        // Above ~11 ppa this slurry outweighs the proppant
        let well = WellConfiguration {
            solid_loading: 20.0,
            model: TransportModel::Hang,
            ..reference()
        };
        let result = solve_equilibrium(&well, 0.5, &SolverConfig::default()).unwrap();
        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert_eq!(result.outer_iterations, 1);
        assert_eq!(result.openhole_rate, 0.0);
        assert!(result.pump_rate.is_finite() && result.concentration.is_finite());
    }

    #[test]
    fn unevaluable_washpipe_drop_marks_result_diverged() {
        let well = reference();
        let config = SolverConfig::default();
        let geometry = dune_geometry(8.5, 6.25, 7.25, 0.7).unwrap();
        let slurry = SlurryState::at_loading(&well, 1.0);
        let target = openhole_target(&well, &geometry, &slurry, &slurry).unwrap();
        let washpipe_screen = FlowPath::annulus("washpipe-screen", 5.0, 4.0, 0.007);
        let broken = FlowPath::pipe("washpipe", 3.5, -1.0);

        let result = finalize(
            &config,
            0.7,
            geometry,
            Finalize {
                target,
                slurry,
                washpipe_screen_rate: 1.0,
                status: ConvergenceStatus::Converged,
                outer_iterations: 3,
                inner_iterations: 9,
            },
            &washpipe_screen,
            &broken,
            well.fluid(),
        );

        assert_eq!(result.status, ConvergenceStatus::Diverged);
        assert_eq!(result.washpipe_dp, 0.0);
        assert!(result.washpipe_screen_dp > 0.0 && result.beta_dp > result.washpipe_screen_dp);
        assert_eq!(result.pump_rate, target.rate + 1.0);
    }
}
