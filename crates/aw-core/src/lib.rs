//! aw-core: stable foundation for abwave.
//!
//! Contains:
//! - units (oilfield unit factors derived from uom)
//! - numeric (finite/positive guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{AwError, AwResult};
pub use numeric::*;
