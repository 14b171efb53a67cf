//! Horizontal solids-transport velocity correlations.
//!
//! Each correlation returns the minimum mean fluid velocity (ft/s) that keeps
//! settled proppant moving along the dune surface. They differ in which
//! geometry and slurry quantities they read, so each has its own input struct.

use crate::common::{check_finite, check_positive};
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::friction::FluidProps;
use aw_core::units::{cp_to_lbm_per_ft_s, ft_per_in, gravity_ft_per_s2, ppg_to_lbm_per_ft3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hindered-settling factor in the original Oroskar-Turian fit.
const OROSKAR_HINDERED_SETTLING: f64 = 0.95;

/// Available transport correlations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportModel {
    Sgs,
    SgsAlternate,
    Oroskar,
    OroskarModified,
    Hang,
}

impl TransportModel {
    pub const ALL: [TransportModel; 5] = [
        TransportModel::Sgs,
        TransportModel::SgsAlternate,
        TransportModel::Oroskar,
        TransportModel::OroskarModified,
        TransportModel::Hang,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransportModel::Sgs => "SGS",
            TransportModel::SgsAlternate => "SGS-Alternate",
            TransportModel::Oroskar => "Oroskar",
            TransportModel::OroskarModified => "Oroskar-Modified",
            TransportModel::Hang => "Hang",
        }
    }
}

impl fmt::Display for TransportModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransportModel {
    type Err = HydraulicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match key.as_str() {
            "sgs" => Ok(TransportModel::Sgs),
            "sgs alt" | "sgs alternate" => Ok(TransportModel::SgsAlternate),
            "oroskar" => Ok(TransportModel::Oroskar),
            "oroskar mod" | "oroskar modified" => Ok(TransportModel::OroskarModified),
            "hang" => Ok(TransportModel::Hang),
            _ => Err(HydraulicsError::UnknownModel {
                name: s.to_string(),
                expected: TransportModel::ALL
                    .iter()
                    .map(|m| m.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Proppant grain properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidsProps {
    pub diameter_in: f64,
    pub density_ppg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OroskarInput {
    pub equivalent_diameter_in: f64,
    pub concentration: f64,
    pub solids: SolidsProps,
    pub fluid: FluidProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgsInput {
    pub equivalent_diameter_in: f64,
    pub concentration: f64,
    pub dune_height_in: f64,
    pub openhole_id_in: f64,
    pub solids: SolidsProps,
    pub fluid: FluidProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SgsAltInput {
    pub equivalent_diameter_in: f64,
    pub concentration: f64,
    pub bed_width_in: f64,
    pub wetted_perimeter_in: f64,
    pub solids: SolidsProps,
    pub fluid: FluidProps,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HangInput {
    pub hydraulic_diameter_in: f64,
    pub slurry_density_ppg: f64,
    pub solids: SolidsProps,
    pub fluid: FluidProps,
}

/// Relative density of solids to carrier fluid, required > 1.
fn relative_density(solids: SolidsProps, fluid: FluidProps) -> HydraulicsResult<f64> {
    check_positive(solids.density_ppg, "solids density")?;
    check_positive(fluid.density_ppg, "fluid density")?;
    let s = solids.density_ppg / fluid.density_ppg;
    if s <= 1.0 {
        return Err(HydraulicsError::NonPhysical {
            what: "solids must be denser than the carrier fluid",
        });
    }
    Ok(s)
}

fn check_concentration(c: f64) -> HydraulicsResult<()> {
    check_finite(c, "solids concentration")?;
    if !(0.0..1.0).contains(&c) {
        return Err(HydraulicsError::NonPhysical {
            what: "solids concentration",
        });
    }
    Ok(())
}

/// Shared Oroskar-Turian form; the variants differ in coefficients only.
fn oroskar_form(
    input: &OroskarInput,
    coefficient: f64,
    reynolds_exponent: f64,
    hindered_settling: f64,
) -> HydraulicsResult<f64> {
    check_positive(input.equivalent_diameter_in, "equivalent diameter")?;
    check_positive(input.solids.diameter_in, "solids diameter")?;
    check_positive(input.fluid.viscosity_cp, "fluid viscosity")?;
    check_concentration(input.concentration)?;
    let s = relative_density(input.solids, input.fluid)?;

    let g = gravity_ft_per_s2();
    let d_p = input.solids.diameter_in * ft_per_in();
    let d_e = input.equivalent_diameter_in * ft_per_in();
    let c = input.concentration;

    let u_star = (g * d_p * (s - 1.0)).sqrt();
    let modified_reynolds = d_e * input.fluid.density_ppg * ppg_to_lbm_per_ft3() * u_star
        / (input.fluid.viscosity_cp * cp_to_lbm_per_ft_s());

    let v = coefficient
        * u_star
        * c.powf(0.1536)
        * (1.0 - c).powf(0.3564)
        * (d_p / d_e).powf(-0.378)
        * modified_reynolds.powf(reynolds_exponent)
        * hindered_settling.powf(0.3);

    check_finite(v, "Oroskar transport velocity")?;
    Ok(v)
}

/// Oroskar-Turian critical deposition velocity.
pub fn oroskar(input: &OroskarInput) -> HydraulicsResult<f64> {
    oroskar_form(input, 1.85, 0.09, OROSKAR_HINDERED_SETTLING)
}

/// Oroskar form refitted for gravel-pack sized annuli.
pub fn oroskar_modified(input: &OroskarInput) -> HydraulicsResult<f64> {
    oroskar_form(input, 1.67, 0.11, 1.0)
}

fn sgs_base(
    equivalent_diameter_in: f64,
    concentration: f64,
    solids: SolidsProps,
    fluid: FluidProps,
) -> HydraulicsResult<f64> {
    check_positive(equivalent_diameter_in, "equivalent diameter")?;
    check_positive(solids.diameter_in, "solids diameter")?;
    check_concentration(concentration)?;
    let s = relative_density(solids, fluid)?;

    let d_e = equivalent_diameter_in * ft_per_in();
    let d_p = solids.diameter_in * ft_per_in();
    let durand = (2.0 * gravity_ft_per_s2() * d_e * (s - 1.0)).sqrt();

    Ok(1.08 * durand * concentration.powf(0.1) * (d_p / d_e).powf(1.0 / 6.0))
}

/// Durand-type velocity with a bed-height correction.
pub fn sgs(input: &SgsInput) -> HydraulicsResult<f64> {
    check_positive(input.openhole_id_in, "open-hole ID")?;
    check_finite(input.dune_height_in, "dune height")?;
    let open_fraction = 1.0 - input.dune_height_in / input.openhole_id_in;
    if open_fraction <= 0.0 {
        return Err(HydraulicsError::NonPhysical {
            what: "dune fills the open hole",
        });
    }

    let base = sgs_base(input.equivalent_diameter_in, input.concentration, input.solids, input.fluid)?;
    let v = base * open_fraction.powf(-0.25);
    check_finite(v, "SGS transport velocity")?;
    Ok(v)
}

/// SGS with the bed correction expressed through exposed bed width.
pub fn sgs_alt(input: &SgsAltInput) -> HydraulicsResult<f64> {
    check_positive(input.wetted_perimeter_in, "wetted perimeter")?;
    check_finite(input.bed_width_in, "bed width")?;
    if input.bed_width_in < 0.0 {
        return Err(HydraulicsError::NonPhysical { what: "bed width" });
    }

    let base = sgs_base(input.equivalent_diameter_in, input.concentration, input.solids, input.fluid)?;
    let v = base * (1.0 + input.bed_width_in / input.wetted_perimeter_in).sqrt();
    check_finite(v, "SGS-Alternate transport velocity")?;
    Ok(v)
}

/// Hang: buoyancy taken against the slurry, scaled by an Archimedes number.
pub fn hang(input: &HangInput) -> HydraulicsResult<f64> {
    check_positive(input.hydraulic_diameter_in, "hydraulic diameter")?;
    check_positive(input.solids.diameter_in, "solids diameter")?;
    check_positive(input.slurry_density_ppg, "slurry density")?;
    check_positive(input.fluid.viscosity_cp, "fluid viscosity")?;
    relative_density(input.solids, input.fluid)?;
    if input.solids.density_ppg <= input.slurry_density_ppg {
        return Err(HydraulicsError::NonPhysical {
            what: "solids must be denser than the slurry",
        });
    }

    let g = gravity_ft_per_s2();
    let d_p = input.solids.diameter_in * ft_per_in();
    let d_h = input.hydraulic_diameter_in * ft_per_in();
    let rho_f = input.fluid.density_ppg * ppg_to_lbm_per_ft3();
    let rho_s = input.solids.density_ppg * ppg_to_lbm_per_ft3();
    let mu = input.fluid.viscosity_cp * cp_to_lbm_per_ft_s();

    let archimedes = g * d_p.powi(3) * rho_f * (rho_s - rho_f) / (mu * mu);
    let buoyancy = (input.solids.density_ppg - input.slurry_density_ppg) / input.slurry_density_ppg;

    let v = 1.3
        * archimedes.powf(-0.05)
        * (2.0 * g * d_h * buoyancy).sqrt()
        * (d_p / d_h).powf(1.0 / 6.0);
    check_finite(v, "Hang transport velocity")?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sand() -> SolidsProps {
        SolidsProps {
            diameter_in: 0.0287,
            density_ppg: 1.6 * 8.34,
        }
    }

    fn brine() -> FluidProps {
        FluidProps {
            density_ppg: 8.8,
            viscosity_cp: 1.2,
        }
    }

    fn oroskar_input(c: f64) -> OroskarInput {
        OroskarInput {
            equivalent_diameter_in: 3.91,
            concentration: c,
            solids: sand(),
            fluid: brine(),
        }
    }

    #[test]
    fn parses_all_spellings() {
        assert_eq!("SGS".parse::<TransportModel>().unwrap(), TransportModel::Sgs);
        assert_eq!("SGS alt".parse::<TransportModel>().unwrap(), TransportModel::SgsAlternate);
        assert_eq!("sgs_alt".parse::<TransportModel>().unwrap(), TransportModel::SgsAlternate);
        assert_eq!(
            "Oroskar-Modified".parse::<TransportModel>().unwrap(),
            TransportModel::OroskarModified
        );
        assert_eq!("oroskar mod".parse::<TransportModel>().unwrap(), TransportModel::OroskarModified);
        assert_eq!(" hang ".parse::<TransportModel>().unwrap(), TransportModel::Hang);
    }

    #[test]
    fn display_round_trips() {
        for model in TransportModel::ALL {
            assert_eq!(model.to_string().parse::<TransportModel>().unwrap(), model);
        }
    }

    #[test]
    fn unknown_model_lists_choices() {
        let err = "Durand".parse::<TransportModel>().unwrap_err();
        match err {
            HydraulicsError::UnknownModel { name, expected } => {
                assert_eq!(name, "Durand");
                assert!(expected.contains("Oroskar-Modified"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn oroskar_reference_magnitude() {
        let v = oroskar(&oroskar_input(0.07)).unwrap();
        assert!(v > 3.0 && v < 4.0, "v = {v}");
    }

    #[test]
    fn clear_fluid_needs_no_transport_velocity() {
        assert_eq!(oroskar(&oroskar_input(0.0)).unwrap(), 0.0);
    }

    #[test]
    fn oroskar_grows_with_concentration_at_low_loading() {
        let lo = oroskar(&oroskar_input(0.05)).unwrap();
        let hi = oroskar(&oroskar_input(0.10)).unwrap();
        assert!(hi > lo);
    }

    #[test]
    fn buoyant_solids_rejected() {
        let mut input = oroskar_input(0.07);
        input.solids.density_ppg = 8.0;
        assert!(oroskar(&input).is_err());
    }

    #[test]
    fn sgs_rises_with_bed_height() {
        let at = |h: f64| {
            sgs(&SgsInput {
                equivalent_diameter_in: 3.91,
                concentration: 0.07,
                dune_height_in: h,
                openhole_id_in: 8.5,
                solids: sand(),
                fluid: brine(),
            })
            .unwrap()
        };
        assert!(at(7.0) > at(4.0));
    }

    #[test]
    fn sgs_alt_with_no_exposed_bed_equals_base() {
        let v = sgs_alt(&SgsAltInput {
            equivalent_diameter_in: 3.91,
            concentration: 0.07,
            bed_width_in: 0.0,
            wetted_perimeter_in: 14.4,
            solids: sand(),
            fluid: brine(),
        })
        .unwrap();
        let base = sgs_base(3.91, 0.07, sand(), brine()).unwrap();
        assert!((v - base).abs() < 1e-12);
    }

    #[test]
    fn hang_requires_solids_heavier_than_slurry() {
        let input = HangInput {
            hydraulic_diameter_in: 3.33,
            slurry_density_ppg: 9.3,
            solids: sand(),
            fluid: brine(),
        };
        let v = hang(&input).unwrap();
        assert!(v > 0.5 && v < 2.0, "v = {v}");

        let heavy = HangInput {
            slurry_density_ppg: 14.0,
            ..input
        };
        assert!(hang(&heavy).is_err());
    }
}
