//! The reduce pattern that folds a sequence of outcomes into one outcome.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use indexmap::IndexSet;

use super::accumulator::Accumulator;
use super::container::Container;
use super::frozen::Frozen;
use crate::outcome::Outcome;

// =============================================================================
// Finishers
// =============================================================================

/// Converts a finished container into the payload handed to the caller.
pub trait Finisher<C> {
    /// The success payload of the aggregate outcome.
    type Output;

    /// Converts the finished container.
    fn finish(collection: C) -> Self::Output;
}

/// Finisher exposing the collection read-only, as a [`Frozen`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Freeze;

impl<C> Finisher<C> for Freeze {
    type Output = Frozen<C>;

    #[inline]
    fn finish(collection: C) -> Self::Output {
        Frozen::new(collection)
    }
}

/// Finisher handing the collection over as-is, so callers can keep adding
/// to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepMutable;

impl<C> Finisher<C> for KeepMutable {
    type Output = C;

    #[inline]
    fn finish(collection: C) -> Self::Output {
        collection
    }
}

// =============================================================================
// Characteristics
// =============================================================================

/// Capabilities a collector advertises to the reduction that drives it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Characteristics {
    unordered: bool,
}

impl Characteristics {
    /// Returns `true` if the reduction may process elements in any order.
    #[inline]
    pub const fn is_unordered(self) -> bool {
        self.unordered
    }
}

// =============================================================================
// OutcomeCollector
// =============================================================================

/// Aggregates a sequence of outcomes into a single outcome of a collection.
///
/// The reduction has four steps:
///
/// 1. **supply** a fresh accumulator collecting into an empty `C`,
/// 2. **accumulate** each element: successes are added, the first failure
///    poisons the accumulator, and everything after it is consumed but
///    ignored,
/// 3. **combine** partial accumulators (parallel reduction only): a failed
///    side wins, and with two failed sides the left one wins,
/// 4. **finish**: `Success(F::finish(c))` or `Failure(e)`.
///
/// Unlike [`transpose_iter`](crate::transpose_iter), aggregation never stops
/// early; the whole source is always drained.
///
/// # Examples
///
/// ```rust
/// use twofold::Outcome;
/// use twofold::collect::to_list;
///
/// let collector = to_list();
///
/// let all = collector.collect(vec![
///     Outcome::<i32, i32>::success(2),
///     Outcome::success(4),
///     Outcome::success(8),
/// ]);
/// assert_eq!(*all.unwrap_success(), vec![2, 4, 8]);
///
/// let some = collector.collect(vec![
///     Outcome::<i32, i32>::success(2),
///     Outcome::failure(4),
///     Outcome::success(8),
/// ]);
/// assert_eq!(some.unwrap_failure(), 4);
/// ```
pub struct OutcomeCollector<C, F = Freeze> {
    characteristics: Characteristics,
    marker: PhantomData<fn() -> (C, F)>,
}

impl<C, F> OutcomeCollector<C, F> {
    #[inline]
    const fn with_order<T>() -> Self
    where
        C: Container<T>,
    {
        Self {
            characteristics: Characteristics {
                unordered: C::UNORDERED,
            },
            marker: PhantomData,
        }
    }

    /// Returns the capabilities this collector advertises.
    #[inline]
    pub const fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

impl<C, F: Finisher<C>> OutcomeCollector<C, F> {
    #[inline]
    pub(crate) fn supply<E>(&self) -> Accumulator<C, E>
    where
        C: Default,
    {
        Accumulator::start()
    }

    pub(crate) fn finish<E>(&self, accumulator: Accumulator<C, E>) -> Outcome<F::Output, E> {
        tracing::debug!(
            unordered = self.characteristics.is_unordered(),
            failed = accumulator.is_failed(),
            "outcome aggregation finished"
        );
        accumulator.into_outcome().map(F::finish)
    }

    /// Aggregates `source` sequentially.
    ///
    /// Every element is consumed, even after a failure has been recorded;
    /// with several failures the first one in source order is returned.
    pub fn collect<T, E, I>(&self, source: I) -> Outcome<F::Output, E>
    where
        C: Container<T>,
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let accumulator = source
            .into_iter()
            .fold(self.supply(), |mut accumulator, item| {
                accumulator.accumulate(item);
                accumulator
            });
        self.finish(accumulator)
    }
}

impl<C, F> Clone for OutcomeCollector<C, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, F> Copy for OutcomeCollector<C, F> {}

impl<C, F> fmt::Debug for OutcomeCollector<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("OutcomeCollector")
            .field("characteristics", &self.characteristics)
            .finish()
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Collects success payloads into a read-only list, in source order.
#[inline]
pub const fn to_list<T>() -> OutcomeCollector<Vec<T>, Freeze> {
    OutcomeCollector::with_order::<T>()
}

/// Collects success payloads into a list the caller may keep modifying.
#[inline]
pub const fn to_mutable_list<T>() -> OutcomeCollector<Vec<T>, KeepMutable> {
    OutcomeCollector::with_order::<T>()
}

/// Collects success payloads into a read-only hash set.
///
/// The reduction is unordered.
#[inline]
pub const fn to_set<T: Eq + Hash>() -> OutcomeCollector<HashSet<T>, Freeze> {
    OutcomeCollector::with_order::<T>()
}

/// Collects success payloads into a hash set the caller may keep modifying.
#[inline]
pub const fn to_mutable_set<T: Eq + Hash>() -> OutcomeCollector<HashSet<T>, KeepMutable> {
    OutcomeCollector::with_order::<T>()
}

/// Collects success payloads into a read-only set that remembers the order
/// in which payloads first appeared.
#[inline]
pub const fn to_ordered_set<T: Eq + Hash>() -> OutcomeCollector<IndexSet<T>, Freeze> {
    OutcomeCollector::with_order::<T>()
}

/// Insertion-ordered counterpart of [`to_mutable_set`].
#[inline]
pub const fn to_mutable_ordered_set<T: Eq + Hash>()
-> OutcomeCollector<IndexSet<T>, KeepMutable> {
    OutcomeCollector::with_order::<T>()
}

/// Collects success payloads into a read-only sorted set.
#[inline]
pub const fn to_sorted_set<T: Ord>() -> OutcomeCollector<BTreeSet<T>, Freeze> {
    OutcomeCollector::with_order::<T>()
}

/// Collects into any [`Container`], read-only.
#[inline]
pub const fn collecting<T, C: Container<T>>() -> OutcomeCollector<C, Freeze> {
    OutcomeCollector::with_order::<T>()
}

/// Collects into any [`Container`], left mutable.
#[inline]
pub const fn collecting_mutable<T, C: Container<T>>() -> OutcomeCollector<C, KeepMutable> {
    OutcomeCollector::with_order::<T>()
}

// =============================================================================
// Iterator Integration
// =============================================================================

/// Aggregates an iterator of outcomes with an [`OutcomeCollector`].
///
/// # Examples
///
/// ```rust
/// use twofold::Outcome;
/// use twofold::collect::{CollectOutcomes, to_mutable_list};
///
/// let mut outcome = (1..=3)
///     .map(Outcome::<i32, String>::success)
///     .collect_outcomes(to_mutable_list());
/// outcome.if_success_mut(|list| list.push(4));
/// assert_eq!(outcome, Outcome::success(vec![1, 2, 3, 4]));
/// ```
pub trait CollectOutcomes<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// Drains the iterator into `collector`.
    fn collect_outcomes<C, F>(self, collector: OutcomeCollector<C, F>) -> Outcome<F::Output, E>
    where
        C: Container<T>,
        F: Finisher<C>,
    {
        collector.collect(self)
    }
}

impl<I, T, E> CollectOutcomes<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: Container<T>,
{
    /// Aggregates with the mutable collector for `C`.
    ///
    /// Unlike `Result`'s implementation this drains the whole iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let outcome: Outcome<Vec<i32>, &str> =
    ///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
    /// assert_eq!(outcome, Outcome::success(vec![1, 2]));
    /// ```
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(source: I) -> Self {
        collecting_mutable::<T, C>().collect(source)
    }
}
