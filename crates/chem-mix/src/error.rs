//! Mixture operation errors.

use chem_core::ChemError;
use thiserror::Error;

/// Result type for mixture operations.
pub type MixResult<T> = Result<T, MixError>;

/// Errors that can occur while mutating a mixture.
///
/// A failed operation leaves the mixture exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MixError {
    /// The operation would leave a reagent with a negative quantity.
    #[error("Negative quantity for {what}")]
    NegativeQuantity { what: &'static str },

    /// A factor, amount or temperature was NaN or infinite.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl MixError {
    pub(crate) fn check_finite(value: f64, what: &'static str) -> MixResult<f64> {
        chem_core::ensure_finite(value, what).map_err(|_| MixError::NonFinite { what, value })
    }
}

impl From<MixError> for ChemError {
    fn from(err: MixError) -> Self {
        match err {
            MixError::NegativeQuantity { what } => ChemError::Invariant { what },
            MixError::NonFinite { what, value } => ChemError::NonFinite { what, value },
            MixError::InvalidArg { what } => ChemError::InvalidArg { what },
        }
    }
}
