//! Reagent mixture: quantities keyed by reagent plus a blended temperature.

use std::collections::HashMap;
use std::fmt;

use chem_core::constants::ZERO_CELSIUS_K;
use chem_core::units::{Temperature, k, to_kelvin};
use chem_core::{Real, Tolerances, nearly_equal, weighted_mean};
use tracing::{debug, trace, warn};

use crate::error::{MixError, MixResult};
use crate::iter::{Iter, Reagents};
use crate::reagent::Reagent;

/// A mixture of reagents with a single aggregate temperature.
///
/// Quantities are kept non-negative by every fallible mutator: an operation that
/// would drive a reagent below zero is rejected and leaves the mixture untouched.
/// The temperature is only meaningful while [`total`](Self::total) is positive;
/// once the mixture is emptied it keeps its last value.
///
/// Entries with an amount of exactly zero can linger after [`subtract`](Self::subtract),
/// [`multiply`](Self::multiply) or [`remove_volume`](Self::remove_volume) until
/// [`clean`](Self::clean) is called.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "R: serde::Serialize",
        deserialize = "R: serde::Deserialize<'de>"
    ))
)]
pub struct ReagentMix<R: Reagent> {
    /// Temperature in Kelvin.
    #[cfg_attr(feature = "serde", serde(rename = "temperature"))]
    kelvin: Real,
    /// Amount per reagent.
    contents: HashMap<R, Real>,
}

impl<R: Reagent> Default for ReagentMix<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reagent> ReagentMix<R> {
    /// Empty mixture at 273.15 K.
    pub fn new() -> Self {
        Self::at_kelvin(ZERO_CELSIUS_K)
    }

    /// Empty mixture at the given temperature.
    pub fn at_kelvin(kelvin: Real) -> Self {
        Self {
            kelvin,
            contents: HashMap::new(),
        }
    }

    /// Mixture of a single reagent at 273.15 K.
    pub fn single(reagent: R, amount: Real) -> Self {
        Self::single_at(reagent, amount, ZERO_CELSIUS_K)
    }

    /// Mixture of a single reagent at the given temperature.
    pub fn single_at(reagent: R, amount: Real, kelvin: Real) -> Self {
        let mut contents = HashMap::with_capacity(1);
        contents.insert(reagent, amount);
        Self { kelvin, contents }
    }

    /// Build a mixture from an existing mapping.
    ///
    /// Amounts are taken as-is; use [`try_from_contents`](Self::try_from_contents)
    /// when the mapping comes from untrusted input.
    pub fn from_contents(kelvin: Real, contents: HashMap<R, Real>) -> Self {
        Self { kelvin, contents }
    }

    /// Build a mixture from a mapping, rejecting non-finite or negative values.
    pub fn try_from_contents(kelvin: Real, contents: HashMap<R, Real>) -> MixResult<Self> {
        MixError::check_finite(kelvin, "temperature")?;
        if kelvin < 0.0 {
            return Err(MixError::InvalidArg {
                what: "temperature below absolute zero",
            });
        }
        for amount in contents.values() {
            MixError::check_finite(*amount, "reagent amount")?;
            if *amount < 0.0 {
                return Err(MixError::NegativeQuantity {
                    what: "reagent amount",
                });
            }
        }
        Ok(Self { kelvin, contents })
    }

    /// Builder-style temperature override.
    pub fn with_kelvin(mut self, kelvin: Real) -> Self {
        self.kelvin = kelvin;
        self
    }

    /// Temperature in Kelvin.
    pub fn kelvin(&self) -> Real {
        self.kelvin
    }

    /// Overwrite the temperature in Kelvin.
    pub fn set_kelvin(&mut self, kelvin: Real) {
        self.kelvin = kelvin;
    }

    /// Temperature as a typed quantity.
    pub fn temperature(&self) -> Temperature {
        k(self.kelvin)
    }

    /// Overwrite the temperature from a typed quantity.
    pub fn set_temperature(&mut self, temperature: Temperature) {
        self.kelvin = to_kelvin(temperature);
    }

    /// Stored amount of `reagent`, `None` if the reagent has no entry.
    pub fn amount_of(&self, reagent: &R) -> Option<Real> {
        self.contents.get(reagent).copied()
    }

    /// True if the mixture holds at least `amount` of `reagent`.
    ///
    /// A reagent without an entry never satisfies the check, even for `amount <= 0`.
    pub fn contains(&self, reagent: &R, amount: Real) -> bool {
        self.amount_of(reagent).is_some_and(|have| have >= amount)
    }

    /// True if the mixture holds strictly more than `amount` of `reagent`.
    pub fn contains_more_than(&self, reagent: &R, amount: Real) -> bool {
        self.amount_of(reagent).is_some_and(|have| have > amount)
    }

    /// Sum of all amounts.
    pub fn total(&self) -> Real {
        self.contents.values().sum()
    }

    /// Number of entries, zero-amount entries included.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// True if the mixture has a positive total.
    pub fn has_volume(&self) -> bool {
        self.total() > 0.0
    }

    /// Fraction of the total made up by `reagent` (0 for an empty mixture).
    pub fn ratio_of(&self, reagent: &R) -> Real {
        let total = self.total();
        if total > 0.0 {
            self.amount_of(reagent).unwrap_or(0.0) / total
        } else {
            0.0
        }
    }

    /// Underlying mapping, for codecs and other read-only collaborators.
    pub fn contents(&self) -> &HashMap<R, Real> {
        &self.contents
    }

    /// Consume the mixture, keeping only its mapping.
    pub fn into_contents(self) -> HashMap<R, Real> {
        self.contents
    }

    /// Reagents with an entry, zero-amount entries included.
    pub fn reagents(&self) -> Reagents<'_, R> {
        Reagents::new(self.contents.keys())
    }

    /// Iterate over `(reagent, amount)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(self.contents.iter())
    }

    /// Entries ordered by reagent key.
    ///
    /// Use this wherever the result of processing depends on visiting order
    /// (floating-point accumulation, reaction priority).
    pub fn iter_sorted(&self) -> Vec<(&R, Real)> {
        let mut entries: Vec<(&R, Real)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Merge `other` into this mixture.
    ///
    /// Amounts are summed per reagent and the temperature becomes the
    /// total-weighted mean of both temperatures. If both totals are zero the
    /// temperature is left unchanged.
    pub fn add(&mut self, other: &Self) {
        let total = self.total();
        let other_total = other.total();
        match weighted_mean(self.kelvin, total, other.kelvin, other_total) {
            Some(kelvin) => self.kelvin = kelvin,
            None => trace!(total, other_total, "zero-total blend, keeping temperature"),
        }

        for (reagent, amount) in &other.contents {
            *self.contents.entry(reagent.clone()).or_insert(0.0) += amount;
        }
    }

    /// Remove `other`'s contents from this mixture.
    ///
    /// Uses [`Tolerances::default`] to snap near-zero residuals to exactly zero.
    pub fn subtract(&mut self, other: &Self) -> MixResult<()> {
        self.subtract_with(other, Tolerances::default())
    }

    /// Remove `other`'s contents from this mixture.
    ///
    /// Each residual that is `nearly_equal` to zero under `tol` is stored as
    /// exactly `0.0`. If any reagent would go negative (including reagents this
    /// mixture does not contain) the call fails with
    /// [`MixError::NegativeQuantity`] and nothing is changed.
    ///
    /// The temperature becomes `(T1*N1 - T2*N2) / (N1 - N2)`, the inverse of the
    /// [`add`](Self::add) blend. When the remainder is (nearly) empty, or the
    /// blend is not a valid absolute temperature, the prior temperature is kept.
    pub fn subtract_with(&mut self, other: &Self, tol: Tolerances) -> MixResult<()> {
        self.subtract_snapping(other, tol).map(|_| ())
    }

    /// Subtraction core. Returns every reagent whose residual was snapped to
    /// zero together with the amount held before the call.
    fn subtract_snapping(&mut self, other: &Self, tol: Tolerances) -> MixResult<Vec<(R, Real)>> {
        let mut snapped = Vec::new();
        let mut residuals = Vec::with_capacity(other.contents.len());
        for (reagent, &amount) in &other.contents {
            MixError::check_finite(amount, "subtracted amount")?;
            let have = self.amount_of(reagent);
            let have_amount = have.unwrap_or(0.0);
            let left = if nearly_equal(have_amount, amount, tol) {
                if have.is_some() && have_amount != amount {
                    snapped.push((reagent.clone(), have_amount));
                }
                0.0
            } else {
                have_amount - amount
            };
            if left < 0.0 {
                warn!(?reagent, have = have_amount, amount, "rejected subtraction below zero");
                return Err(MixError::NegativeQuantity {
                    what: "subtracted reagent",
                });
            }
            // Nothing to write for a reagent we never had and that stays at zero.
            if have.is_some() {
                residuals.push((reagent, left));
            }
        }

        let total = self.total();
        let other_total = other.total();
        let blended = if nearly_equal(total, other_total, tol) {
            None
        } else {
            weighted_mean(self.kelvin, total, other.kelvin, -other_total)
        };

        for (reagent, left) in residuals {
            if let Some(slot) = self.contents.get_mut(reagent) {
                *slot = left;
            }
        }

        match blended {
            Some(kelvin) if kelvin >= 0.0 => self.kelvin = kelvin,
            Some(kelvin) => warn!(
                kelvin,
                kept = self.kelvin,
                "subtraction blend below absolute zero, keeping temperature"
            ),
            None => trace!(total, other_total, "subtraction emptied mixture, keeping temperature"),
        }
        Ok(snapped)
    }

    /// Scale every amount by `factor`. Temperature is unaffected.
    ///
    /// A factor of zero keeps the entries at `0.0`; negative and non-finite
    /// factors are rejected.
    pub fn multiply(&mut self, factor: Real) -> MixResult<()> {
        MixError::check_finite(factor, "scale factor")?;
        if factor < 0.0 {
            warn!(factor, "rejected negative scale factor");
            return Err(MixError::NegativeQuantity {
                what: "scale factor",
            });
        }
        for amount in self.contents.values_mut() {
            *amount *= factor;
        }
        Ok(())
    }

    /// Shrink the total by `amount`, keeping composition ratios.
    ///
    /// Removing at least the whole total empties every entry (keys are kept).
    /// An empty mixture is left as-is.
    pub fn remove_volume(&mut self, amount: Real) -> MixResult<()> {
        MixError::check_finite(amount, "removed volume")?;
        if amount < 0.0 {
            return Err(MixError::InvalidArg {
                what: "removed volume must be non-negative",
            });
        }

        let total = self.total();
        if total <= 0.0 {
            trace!(amount, "remove_volume on empty mixture is a no-op");
            return Ok(());
        }
        if amount >= total {
            for value in self.contents.values_mut() {
                *value = 0.0;
            }
            return Ok(());
        }
        self.multiply((total - amount) / total)
    }

    /// Clamp the total to `cap`, returning how much was removed.
    ///
    /// Nothing changes when the mixture already fits.
    #[doc(alias = "clamp")]
    pub fn max(&mut self, cap: Real) -> MixResult<Real> {
        MixError::check_finite(cap, "capacity")?;
        if cap < 0.0 {
            return Err(MixError::InvalidArg {
                what: "capacity must be non-negative",
            });
        }

        let removed = (self.total() - cap).max(0.0);
        if removed > 0.0 {
            self.remove_volume(removed)?;
        }
        Ok(removed)
    }

    /// Move up to `amount` of volume into `destination`, proportionally across
    /// every reagent. Returns exactly what moved.
    ///
    /// `self.total() + destination.total()` is preserved up to rounding. A
    /// reagent left with a near-zero residual moves over in full, so nothing
    /// is dropped by zero snapping.
    pub fn transfer_to(&mut self, destination: &mut Self, amount: Real) -> MixResult<Self> {
        MixError::check_finite(amount, "transfer amount")?;
        if amount < 0.0 {
            return Err(MixError::InvalidArg {
                what: "transfer amount must be non-negative",
            });
        }

        let mut moved = self.clone();
        moved.max(amount)?;
        let snapped = self.subtract_snapping(&moved, Tolerances::default())?;
        for (reagent, had) in snapped {
            moved.contents.insert(reagent, had);
        }
        destination.add(&moved);

        debug!(requested = amount, moved = moved.total(), "transferred reagents");
        Ok(moved)
    }

    /// Split off up to `amount` of volume into a new mixture.
    pub fn take(&mut self, amount: Real) -> MixResult<Self> {
        let mut taken = Self::new();
        self.transfer_to(&mut taken, amount)?;
        Ok(taken)
    }

    /// Drop every entry whose amount is exactly zero.
    pub fn clean(&mut self) {
        self.contents.retain(|_, amount| *amount != 0.0);
    }

    /// Drop every entry whose amount is at most `epsilon`.
    pub fn clean_below(&mut self, epsilon: Real) {
        self.contents.retain(|_, amount| *amount > epsilon);
    }

    /// Remove all entries. The temperature is left stale.
    pub fn clear(&mut self) {
        self.contents.clear();
    }
}

impl<R: Reagent> Extend<(R, Real)> for ReagentMix<R> {
    /// Accumulates amounts per reagent without touching the temperature.
    fn extend<I: IntoIterator<Item = (R, Real)>>(&mut self, iter: I) {
        for (reagent, amount) in iter {
            *self.contents.entry(reagent).or_insert(0.0) += amount;
        }
    }
}

impl<R: Reagent> FromIterator<(R, Real)> for ReagentMix<R> {
    fn from_iter<I: IntoIterator<Item = (R, Real)>>(iter: I) -> Self {
        let mut mix = Self::new();
        mix.extend(iter);
        mix
    }
}

impl<'a, R: Reagent> IntoIterator for &'a ReagentMix<R> {
    type Item = (&'a R, Real);
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Reagent> fmt::Display for ReagentMix<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (reagent, amount)) in self.iter_sorted().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{reagent:?}: {amount}")?;
        }
        write!(f, "}} @ {} K", self.kelvin)
    }
}
