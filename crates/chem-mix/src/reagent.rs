//! Reagent identity bound.

use std::fmt::Debug;
use std::hash::Hash;

/// Key type identifying a reagent inside a mixture.
///
/// Only equality, hashing and ordering are used; ordering drives
/// [`ReagentMix::iter_sorted`](crate::ReagentMix::iter_sorted).
pub trait Reagent: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Reagent for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use chem_core::ReagentId;

    fn assert_reagent<R: Reagent>() {}

    #[test]
    fn common_key_types_are_reagents() {
        assert_reagent::<ReagentId>();
        assert_reagent::<&'static str>();
        assert_reagent::<String>();
        assert_reagent::<u16>();
    }
}
