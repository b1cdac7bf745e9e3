use crate::{ChemError, ChemResult};

/// Floating point type used for every quantity and temperature.
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> ChemResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ChemError::NonFinite { what, value: v })
    }
}

/// Weighted mean of two values, `None` when the weights do not sum to a positive number.
///
/// Used for temperature blending where the weights are mixture totals.
pub fn weighted_mean(a: Real, wa: Real, b: Real, wb: Real) -> Option<Real> {
    let w = wa + wb;
    if w > 0.0 {
        let mean = (a * wa + b * wb) / w;
        mean.is_finite().then_some(mean)
    } else {
        None
    }
}
