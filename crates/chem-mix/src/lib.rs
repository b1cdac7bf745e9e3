//! chem-mix: reagent mixtures and their algebra.
//!
//! Provides:
//! - `ReagentMix`: reagent → quantity mapping with a blended temperature
//! - Merge, split, scaling and capacity-clamped transfer between mixtures
//! - Deterministic (key-sorted) enumeration for reproducible processing
//!
//! # Architecture
//!
//! The mixture knows nothing about what a reagent *is*. Any key type that is
//! `Clone + Eq + Hash + Ord + Debug` can be used (see [`Reagent`]); hosts with a
//! registry typically use [`chem_core::ReagentId`]. Reaction resolution, catalogs
//! and persistence live outside this crate and operate on mixtures through the
//! public API.
//!
//! # Example
//!
//! ```
//! use chem_mix::ReagentMix;
//!
//! let mut beaker = ReagentMix::single_at("water", 10.0, 293.15);
//! let mut cup = ReagentMix::new();
//!
//! let moved = beaker.transfer_to(&mut cup, 4.0).unwrap();
//! assert_eq!(moved.amount_of(&"water"), Some(4.0));
//! assert_eq!(beaker.amount_of(&"water"), Some(6.0));
//! assert_eq!(cup.total(), 4.0);
//! ```

pub mod error;
pub mod iter;
pub mod mix;
pub mod reagent;

// Re-exports for ergonomics
pub use error::{MixError, MixResult};
pub use iter::{Iter, Reagents};
pub use mix::ReagentMix;
pub use reagent::Reagent;
