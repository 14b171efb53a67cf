//! Case definition to solver inputs.

use aw_hydraulics::TransportModel;
use aw_project::schema::{CaseDef, SolverConfigDef, WellDef};
use aw_solver::{SolverConfig, WellConfiguration};

use crate::error::{AppError, AppResult};

/// Everything needed to evaluate one case.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCase {
    pub case_id: String,
    /// One configuration per requested model, in file order.
    pub wells: Vec<WellConfiguration>,
    pub ratios: Vec<f64>,
    pub solver: SolverConfig,
}

impl CompiledCase {
    /// The (model, ratio) grid, model-major.
    pub fn grid(&self) -> Vec<(&WellConfiguration, f64)> {
        self.wells
            .iter()
            .flat_map(|well| self.ratios.iter().map(move |&ratio| (well, ratio)))
            .collect()
    }
}

pub fn compile_case(case: &CaseDef) -> AppResult<CompiledCase> {
    let compile_err = |message: String| AppError::Compile {
        case_id: case.id.clone(),
        message,
    };

    let solver = solver_config(&case.solver);
    solver.validate().map_err(|e| compile_err(e.to_string()))?;

    let mut wells = Vec::with_capacity(case.models.len());
    for name in &case.models {
        let model = name
            .parse::<TransportModel>()
            .map_err(|e| compile_err(e.to_string()))?;
        let well = well_configuration(&case.well, model);
        well.validate().map_err(|e| compile_err(e.to_string()))?;
        wells.push(well);
    }

    Ok(CompiledCase {
        case_id: case.id.clone(),
        wells,
        ratios: case.dune_height_ratios.clone(),
        solver,
    })
}

fn well_configuration(def: &WellDef, model: TransportModel) -> WellConfiguration {
    WellConfiguration {
        openhole_id: def.openhole.id_in,
        openhole_roughness: def.openhole.roughness_in,
        screen_od: def.screen.od_in,
        screen_id: def.screen.id_in,
        screen_roughness: def.screen.roughness_in,
        centralizer_od: def.screen.centralizer_od_in,
        washpipe_od: def.washpipe.od_in,
        washpipe_id: def.washpipe.id_in,
        washpipe_roughness: def.washpipe.roughness_in,
        solid_diameter: def.solids.diameter_in,
        solid_specific_gravity: def.solids.specific_gravity,
        solid_loading: def.solids.loading_ppa,
        solid_absolute_volume: def.solids.absolute_volume_gal_per_lb,
        fluid_density: def.fluid.density_ppg,
        fluid_viscosity: def.fluid.viscosity_cp,
        model,
    }
}

fn solver_config(def: &SolverConfigDef) -> SolverConfig {
    let d = SolverConfig::default();
    SolverConfig {
        max_outer_iterations: def.max_outer_iterations.unwrap_or(d.max_outer_iterations),
        max_inner_iterations: def.max_inner_iterations.unwrap_or(d.max_inner_iterations),
        rate_tolerance_bpm: def.rate_tolerance_bpm.unwrap_or(d.rate_tolerance_bpm),
        concentration_tolerance: def.concentration_tolerance.unwrap_or(d.concentration_tolerance),
        rate_perturbation_bpm: def.rate_perturbation_bpm.unwrap_or(d.rate_perturbation_bpm),
        leakoff_rate_bpm: def.leakoff_rate_bpm.unwrap_or(d.leakoff_rate_bpm),
        flow_behavior_index: def.flow_behavior_index.unwrap_or(d.flow_behavior_index),
        washpipe_standoff_in: def.washpipe_standoff_in.unwrap_or(d.washpipe_standoff_in),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE: &str = r#"
id: ref
name: Reference
well:
  openhole: { id_in: 8.5, roughness_in: 0.05 }
  screen: { od_in: 6.25, id_in: 5.0, roughness_in: 0.007, centralizer_od_in: 7.25 }
  washpipe: { od_in: 4.0, id_in: 3.5, roughness_in: 0.007 }
  solids: { diameter_in: 0.0287, specific_gravity: 1.6, loading_ppa: 0.75, absolute_volume_gal_per_lb: 0.0443 }
  fluid: { density_ppg: 8.8, viscosity_cp: 1.2 }
models: [Oroskar, "SGS alt"]
dune_height_ratios: [0.6, 0.7, 0.8]
solver:
  leakoff_rate_bpm: 0.5
"#;

    fn case() -> CaseDef {
        serde_yaml::from_str(CASE).unwrap()
    }

    #[test]
    fn one_well_per_model() {
        let compiled = compile_case(&case()).unwrap();
        let models: Vec<_> = compiled.wells.iter().map(|w| w.model).collect();
        assert_eq!(models, vec![TransportModel::Oroskar, TransportModel::SgsAlternate]);
        assert_eq!(compiled.wells[0].screen_od, 6.25);
        assert_eq!(compiled.wells[1].solid_loading, 0.75);
    }

    #[test]
    fn solver_overrides_fall_back_to_defaults() {
        let compiled = compile_case(&case()).unwrap();
        assert_eq!(compiled.solver.leakoff_rate_bpm, 0.5);
        assert_eq!(compiled.solver.max_inner_iterations, SolverConfig::default().max_inner_iterations);
    }

    #[test]
    fn grid_is_model_major() {
        let compiled = compile_case(&case()).unwrap();
        let grid = compiled.grid();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[2].0.model, TransportModel::Oroskar);
        assert_eq!(grid[2].1, 0.8);
        assert_eq!(grid[3].0.model, TransportModel::SgsAlternate);
        assert_eq!(grid[3].1, 0.6);
    }

    #[test]
    fn bad_geometry_is_a_compile_error() {
        let mut c = case();
        c.well.washpipe.od_in = 5.5;
        assert!(matches!(compile_case(&c), Err(AppError::Compile { .. })));

        let mut c = case();
        c.models.push("Durand".to_string());
        assert!(matches!(compile_case(&c), Err(AppError::Compile { .. })));
    }
}
