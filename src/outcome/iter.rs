//! Iterators over the success payload of an [`Outcome`].
//!
//! An outcome is a sequence of zero or one elements: a `Success` yields its
//! payload once, a `Failure` yields nothing.

use std::iter::FusedIterator;

use super::Outcome;

/// Borrowing iterator returned by [`Outcome::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(value: Option<&'a T>) -> Self {
        Self {
            inner: value.into_iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the success payload of an [`Outcome`].
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.without_failure().into_iter(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
