//! Alpha-wave equilibrium solver for horizontal gravel packs.
//!
//! For one dune-height ratio the solver finds the washpipe-screen rate whose
//! friction gradient matches the gradient above the dune (inner secant loop),
//! then re-converges the open-hole solids concentration implied by that split
//! (outer fixed-point loop). The result reports the pump rate needed to keep
//! the alpha wave moving at that dune height.

pub mod config;
pub mod equilibrium;
pub mod error;
pub mod secant;
pub mod selector;
pub mod state;
pub mod status;
pub mod well;

pub use config::SolverConfig;
pub use equilibrium::{EquilibriumResult, solve_equilibrium};
pub use error::{SolverError, SolverResult};
pub use secant::{SecantConfig, SecantResult, secant_solve};
pub use selector::{TransportContext, transport_slurry, transport_velocity};
pub use state::SlurryState;
pub use status::ConvergenceStatus;
pub use well::WellConfiguration;

pub use aw_hydraulics::{DuneGeometry, TransportModel};
