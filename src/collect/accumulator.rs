//! The mutable cell a single aggregation folds its input into.

use std::iter;

use super::container::Container;
use crate::outcome::Outcome;

/// The running state of one aggregation.
///
/// Starts as `Collecting` an empty container. The first `Failure` it sees
/// moves it to `Failed`, and from there it never changes again: later
/// elements are still consumed but ignored.
///
/// Each accumulator has exactly one owner. Under parallel reduction every
/// leaf gets its own accumulator and they only meet through [`combine`],
/// so no synchronization is needed.
///
/// [`combine`]: Accumulator::combine
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Accumulator<C, E> {
    Collecting(C),
    Failed(E),
}

impl<C, E> Accumulator<C, E> {
    #[inline]
    pub(crate) fn start() -> Self
    where
        C: Default,
    {
        Self::Collecting(C::default())
    }

    #[inline]
    pub(crate) const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Folds one element into the accumulator.
    pub(crate) fn accumulate<T>(&mut self, item: Outcome<T, E>)
    where
        C: Container<T>,
    {
        if let Self::Collecting(partial) = self {
            match item {
                Outcome::Success(value) => partial.extend(iter::once(value)),
                Outcome::Failure(error) => {
                    tracing::trace!("accumulator poisoned by a failure");
                    *self = Self::Failed(error);
                }
            }
        }
    }

    /// Merges two accumulators built from adjacent segments of the input,
    /// `self` being the earlier segment.
    ///
    /// A failed side absorbs the other. When both failed the left error wins.
    pub(crate) fn combine<T>(self, other: Self) -> Self
    where
        C: Container<T>,
    {
        match (self, other) {
            (Self::Collecting(mut left), Self::Collecting(right)) => {
                left.extend(right);
                Self::Collecting(left)
            }
            (Self::Failed(error), Self::Collecting(_)) | (Self::Collecting(_), Self::Failed(error)) => {
                tracing::trace!("failed partial accumulator absorbed its sibling");
                Self::Failed(error)
            }
            (Self::Failed(error), Self::Failed(_)) => {
                tracing::trace!("both partial accumulators failed, keeping the left error");
                Self::Failed(error)
            }
        }
    }

    #[inline]
    pub(crate) fn into_outcome(self) -> Outcome<C, E> {
        match self {
            Self::Collecting(partial) => Outcome::Success(partial),
            Self::Failed(error) => Outcome::Failure(error),
        }
    }
}
