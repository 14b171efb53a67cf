//! aw-hydraulics: closed-form correlations for gravel-pack hydraulics.
//!
//! Provides:
//! - Reynolds number, Colebrook friction factor and friction pressure gradient
//! - Flow paths (pipe bore, concentric/eccentric annulus)
//! - Slurry blending (concentration, density, viscosity)
//! - Power-law eccentricity correction
//! - Dune geometry of a partially packed open-hole annulus
//! - Horizontal solids-transport velocity correlations
//!
//! Everything here is a stateless function of its arguments. Units are
//! oilfield: inches, ft/s, bbl/min, lb/gal, cP, psi/ft.
//!
//! # Example
//!
//! ```
//! use aw_hydraulics::{FlowPath, FluidProps};
//!
//! let annulus = FlowPath::annulus("washpipe-screen", 5.0, 4.0, 0.007);
//! let water = FluidProps { density_ppg: 8.34, viscosity_cp: 1.0 };
//! let drop = annulus.friction(2.0, water).unwrap();
//! assert!(drop.pressure_gradient_psi_per_ft > 0.0);
//! ```

pub mod common;
pub mod eccentricity;
pub mod error;
pub mod flow;
pub mod friction;
pub mod geometry;
pub mod path;
pub mod slurry;
pub mod transport;

// Re-exports
pub use eccentricity::{eccentricity, eccentricity_factor};
pub use error::{HydraulicsError, HydraulicsResult};
pub use friction::{FluidProps, FrictionReport, friction_factor, friction_gradient, reynolds_number};
pub use geometry::{DuneGeometry, annulus_area, dune_geometry};
pub use path::{EccentricityCorrection, FlowPath};
pub use transport::{
    HangInput, OroskarInput, SgsAltInput, SgsInput, SolidsProps, TransportModel,
};
