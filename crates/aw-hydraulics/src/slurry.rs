//! Proppant slurry blending.
//!
//! Loading is in ppa (lb of proppant added per gallon of clean fluid).

use aw_core::units::WATER_DENSITY_PPG;

/// Specific gravity -> lb/gal.
pub fn solids_density_ppg(specific_gravity: f64) -> f64 {
    specific_gravity * WATER_DENSITY_PPG
}

/// Volumetric solids fraction of a slurry carrying `loading_ppa`.
pub fn solids_volume_fraction(loading_ppa: f64, solids_density_ppg: f64) -> f64 {
    loading_ppa / (solids_density_ppg + loading_ppa)
}

/// Slurry density (ppg) from clean-fluid density and proppant absolute volume (gal/lb).
pub fn slurry_density(fluid_density_ppg: f64, absolute_volume_gal_per_lb: f64, loading_ppa: f64) -> f64 {
    (fluid_density_ppg + loading_ppa) / (1.0 + loading_ppa * absolute_volume_gal_per_lb)
}

/// Thomas relative viscosity for a suspension of volume fraction `c`.
pub fn relative_viscosity(c: f64) -> f64 {
    1.0 + 2.5 * c + 10.05 * c * c + 0.00273 * (16.6 * c).exp()
}

/// Apparent slurry viscosity (cP).
pub fn slurry_viscosity(fluid_viscosity_cp: f64, loading_ppa: f64, solids_density_ppg: f64) -> f64 {
    fluid_viscosity_cp * relative_viscosity(solids_volume_fraction(loading_ppa, solids_density_ppg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_fluid_is_unchanged() {
        assert_eq!(slurry_density(8.8, 0.0443, 0.0), 8.8);
        assert_eq!(solids_volume_fraction(0.0, 13.344), 0.0);
        // Thomas carries a small constant offset at c = 0
        assert!((relative_viscosity(0.0) - 1.00273).abs() < 1e-12);
    }

    #[test]
    fn loading_increases_density_and_viscosity() {
        let rho_s = solids_density_ppg(2.65);
        assert!(slurry_density(8.34, 0.0453, 4.0) > 8.34);
        assert!(slurry_viscosity(1.0, 4.0, rho_s) > slurry_viscosity(1.0, 1.0, rho_s));
    }

    #[test]
    fn volume_fraction_reference() {
        let c = solids_volume_fraction(1.0, solids_density_ppg(1.6));
        assert!((c - 1.0 / 14.344).abs() < 1e-12);
    }
}
