//! Borrowing iterators over mixture contents.
//!
//! Both iterators hold a shared borrow of the mixture, so the mixture cannot be
//! mutated while one is alive. Call `iter()` again to restart.

use std::collections::hash_map;
use std::iter::FusedIterator;

use chem_core::Real;

/// Iterator over `(reagent, amount)` pairs in unspecified order.
pub struct Iter<'a, R> {
    inner: hash_map::Iter<'a, R, Real>,
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(inner: hash_map::Iter<'a, R, Real>) -> Self {
        Self { inner }
    }
}

impl<R> Clone for Iter<'_, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (&'a R, Real);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(reagent, amount)| (reagent, *amount))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}
impl<R> FusedIterator for Iter<'_, R> {}

/// Iterator over the reagents present in a mixture (including zero-amount entries).
pub struct Reagents<'a, R> {
    inner: hash_map::Keys<'a, R, Real>,
}

impl<'a, R> Reagents<'a, R> {
    pub(crate) fn new(inner: hash_map::Keys<'a, R, Real>) -> Self {
        Self { inner }
    }
}

impl<'a, R> Iterator for Reagents<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> ExactSizeIterator for Reagents<'_, R> {}
impl<R> FusedIterator for Reagents<'_, R> {}
