//! Project schema definitions.
//!
//! Units follow the solver: inches, ppg (solids as SG), ppa, gal/lb, cP, bbl/min.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

impl Project {
    pub fn case(&self, id: &str) -> Option<&CaseDef> {
        self.cases.iter().find(|c| c.id == id)
    }
}

/// One completion evaluated with one or more transport models over a set of
/// dune-height ratios.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub well: WellDef,
    pub models: Vec<String>,
    pub dune_height_ratios: Vec<f64>,
    #[serde(default)]
    pub solver: SolverConfigDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellDef {
    pub openhole: OpenHoleDef,
    pub screen: ScreenDef,
    pub washpipe: WashpipeDef,
    pub solids: SolidsDef,
    pub fluid: FluidDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpenHoleDef {
    pub id_in: f64,
    pub roughness_in: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreenDef {
    pub od_in: f64,
    pub id_in: f64,
    pub roughness_in: f64,
    pub centralizer_od_in: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WashpipeDef {
    pub od_in: f64,
    pub id_in: f64,
    pub roughness_in: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolidsDef {
    pub diameter_in: f64,
    pub specific_gravity: f64,
    pub loading_ppa: f64,
    pub absolute_volume_gal_per_lb: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub density_ppg: f64,
    pub viscosity_cp: f64,
}

/// Solver overrides; unset fields take the solver defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverConfigDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_outer_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_inner_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_tolerance_bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_perturbation_bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leakoff_rate_bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_behavior_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub washpipe_standoff_in: Option<f64>,
}
