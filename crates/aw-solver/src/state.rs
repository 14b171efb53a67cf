use crate::well::WellConfiguration;
use aw_hydraulics::FluidProps;
use aw_hydraulics::slurry::{slurry_density, slurry_viscosity, solids_volume_fraction};

/// Slurry flowing above the dune at one point of the iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlurryState {
    /// ppa
    pub loading: f64,
    /// Volumetric solids fraction
    pub concentration: f64,
    /// ppg
    pub density: f64,
    /// cP
    pub viscosity: f64,
}

impl SlurryState {
    /// Blend the well's carrier fluid and proppant at `loading` ppa.
    pub fn at_loading(well: &WellConfiguration, loading: f64) -> Self {
        let rho_s = well.solids_density_ppg();
        Self {
            loading,
            concentration: solids_volume_fraction(loading, rho_s),
            density: slurry_density(well.fluid_density, well.solid_absolute_volume, loading),
            viscosity: slurry_viscosity(well.fluid_viscosity, loading, rho_s),
        }
    }

    pub fn fluid(&self) -> FluidProps {
        FluidProps {
            density_ppg: self.density,
            viscosity_cp: self.viscosity,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.loading.is_finite()
            && self.concentration.is_finite()
            && self.density.is_finite()
            && self.viscosity.is_finite()
    }
}
