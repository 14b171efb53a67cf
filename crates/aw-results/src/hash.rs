//! Content-based hashing for run IDs.

use aw_project::schema::CaseDef;
use sha2::{Digest, Sha256};

/// SHA-256 of the case definition and solver version, hex encoded.
///
/// Any edit to the case (geometry, models, ratios, solver overrides) or a new
/// solver version yields a new run.
pub fn compute_run_id(case: &CaseDef, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let case_json = serde_json::to_string(case).unwrap_or_default();
    hasher.update(case_json.as_bytes());

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aw_project::schema::*;

    fn case(loading: f64) -> CaseDef {
        CaseDef {
            id: "c1".to_string(),
            name: "Test".to_string(),
            description: None,
            well: WellDef {
                openhole: OpenHoleDef {
                    id_in: 8.5,
                    roughness_in: 0.05,
                },
                screen: ScreenDef {
                    od_in: 6.25,
                    id_in: 5.0,
                    roughness_in: 0.007,
                    centralizer_od_in: 7.25,
                },
                washpipe: WashpipeDef {
                    od_in: 4.0,
                    id_in: 3.5,
                    roughness_in: 0.007,
                },
                solids: SolidsDef {
                    diameter_in: 0.0287,
                    specific_gravity: 1.6,
                    loading_ppa: loading,
                    absolute_volume_gal_per_lb: 0.0443,
                },
                fluid: FluidDef {
                    density_ppg: 8.8,
                    viscosity_cp: 1.2,
                },
            },
            models: vec!["Oroskar".to_string()],
            dune_height_ratios: vec![0.7],
            solver: SolverConfigDef::default(),
        }
    }

    #[test]
    fn hash_stability() {
        let hash1 = compute_run_id(&case(0.75), "v1");
        let hash2 = compute_run_id(&case(0.75), "v1");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        assert_ne!(compute_run_id(&case(0.75), "v1"), compute_run_id(&case(1.0), "v1"));
        assert_ne!(compute_run_id(&case(0.75), "v1"), compute_run_id(&case(0.75), "v2"));
    }
}
