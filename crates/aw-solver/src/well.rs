//! Completion geometry, slurry recipe and transport model for one solve.

use crate::error::{SolverError, SolverResult};
use aw_hydraulics::slurry::solids_density_ppg;
use aw_hydraulics::{FluidProps, SolidsProps, TransportModel};
use serde::{Deserialize, Serialize};

/// Inputs that stay fixed across every dune-height ratio of a case.
///
/// Diameters and roughness in inches, densities in ppg (solids as SG),
/// loading in ppa, absolute volume in gal/lb, viscosity in cP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellConfiguration {
    pub openhole_id: f64,
    pub openhole_roughness: f64,
    pub screen_od: f64,
    pub screen_id: f64,
    pub screen_roughness: f64,
    pub centralizer_od: f64,
    pub washpipe_od: f64,
    pub washpipe_id: f64,
    pub washpipe_roughness: f64,
    pub solid_diameter: f64,
    pub solid_specific_gravity: f64,
    pub solid_loading: f64,
    pub solid_absolute_volume: f64,
    pub fluid_density: f64,
    pub fluid_viscosity: f64,
    pub model: TransportModel,
}

impl WellConfiguration {
    /// Check every invariant the solver relies on.
    pub fn validate(&self) -> SolverResult<()> {
        let diameters = [
            ("open-hole ID", self.openhole_id),
            ("screen OD", self.screen_od),
            ("screen ID", self.screen_id),
            ("centralizer OD", self.centralizer_od),
            ("washpipe OD", self.washpipe_od),
            ("washpipe ID", self.washpipe_id),
            ("solid diameter", self.solid_diameter),
        ];
        for (what, value) in diameters {
            positive(value, what)?;
        }

        let roughness = [
            ("open-hole roughness", self.openhole_roughness),
            ("screen roughness", self.screen_roughness),
            ("washpipe roughness", self.washpipe_roughness),
        ];
        for (what, value) in roughness {
            non_negative(value, what)?;
        }

        ordered(self.washpipe_id, self.washpipe_od, "washpipe ID", "washpipe OD", false)?;
        ordered(self.washpipe_od, self.screen_id, "washpipe OD", "screen ID", false)?;
        ordered(self.screen_id, self.screen_od, "screen ID", "screen OD", false)?;
        ordered(self.screen_od, self.centralizer_od, "screen OD", "centralizer OD", true)?;
        ordered(self.centralizer_od, self.openhole_id, "centralizer OD", "open-hole ID", true)?;

        non_negative(self.solid_loading, "solid loading")?;
        non_negative(self.solid_absolute_volume, "solid absolute volume")?;
        positive(self.fluid_density, "fluid density")?;
        positive(self.fluid_viscosity, "fluid viscosity")?;
        positive(self.solid_specific_gravity, "solid specific gravity")?;
        if self.solids_density_ppg() <= self.fluid_density {
            return Err(SolverError::config(format!(
                "solids ({:.3} ppg) must be heavier than the carrier fluid ({:.3} ppg)",
                self.solids_density_ppg(),
                self.fluid_density
            )));
        }
        Ok(())
    }

    pub fn solids_density_ppg(&self) -> f64 {
        solids_density_ppg(self.solid_specific_gravity)
    }

    /// Clean carrier fluid.
    pub fn fluid(&self) -> FluidProps {
        FluidProps {
            density_ppg: self.fluid_density,
            viscosity_cp: self.fluid_viscosity,
        }
    }

    pub fn solids(&self) -> SolidsProps {
        SolidsProps {
            diameter_in: self.solid_diameter,
            density_ppg: self.solids_density_ppg(),
        }
    }

    /// Same completion, different transport correlation.
    pub fn with_model(&self, model: TransportModel) -> Self {
        Self {
            model,
            ..self.clone()
        }
    }
}

fn positive(value: f64, what: &str) -> SolverResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(SolverError::config(format!("{what} must be positive, got {value}")));
    }
    Ok(())
}

fn non_negative(value: f64, what: &str) -> SolverResult<()> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(SolverError::config(format!("{what} must be >= 0, got {value}")));
    }
    Ok(())
}

fn ordered(small: f64, large: f64, small_name: &str, large_name: &str, allow_equal: bool) -> SolverResult<()> {
    let ok = if allow_equal { small <= large } else { small < large };
    if !ok {
        let op = if allow_equal { "<=" } else { "<" };
        return Err(SolverError::config(format!(
            "{small_name} ({small}) must be {op} {large_name} ({large})"
        )));
    }
    Ok(())
}
