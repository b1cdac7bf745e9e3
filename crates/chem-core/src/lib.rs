//! chem-core: shared foundation for chemmix.
//!
//! Contains:
//! - units (uom temperature type + constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact reagent identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ChemError, ChemResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
