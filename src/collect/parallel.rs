//! Fork-join aggregation on top of rayon.
//!
//! Each rayon split folds its elements into its own accumulator; splits are
//! then merged pairwise through the combine step, left segment first. For
//! ordered containers this keeps the source order of successes. When
//! several failures are present, which one is reported depends on how rayon
//! split the input.

use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelIterator};

use super::accumulator::Accumulator;
use super::collector::{Finisher, OutcomeCollector, collecting_mutable};
use super::container::Container;
use crate::outcome::Outcome;

impl<C, F: Finisher<C>> OutcomeCollector<C, F> {
    /// Aggregates `source` with a parallel reduction.
    ///
    /// Like [`collect`](Self::collect), every element is consumed. The
    /// reported failure is one of the failures present in the input, not
    /// necessarily the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rayon::prelude::*;
    /// use twofold::Outcome;
    /// use twofold::collect::to_list;
    ///
    /// let outcome = to_list().par_collect((0..1000).into_par_iter().map(Outcome::<i32, i32>::success));
    /// assert_eq!(*outcome.unwrap_success(), (0..1000).collect::<Vec<_>>());
    /// ```
    pub fn par_collect<T, E, I>(&self, source: I) -> Outcome<F::Output, E>
    where
        C: Container<T> + Send,
        T: Send,
        E: Send,
        I: IntoParallelIterator<Item = Outcome<T, E>>,
    {
        let accumulator = source
            .into_par_iter()
            .fold(Accumulator::start, |mut accumulator, item| {
                accumulator.accumulate(item);
                accumulator
            })
            .reduce(Accumulator::start, |left, right| left.combine(right));
        self.finish(accumulator)
    }
}

/// Aggregates a parallel iterator of outcomes with an [`OutcomeCollector`].
///
/// # Examples
///
/// ```rust
/// use rayon::prelude::*;
/// use twofold::Outcome;
/// use twofold::collect::{ParCollectOutcomes, to_set};
///
/// let outcome = vec![1, 2, 2, 3]
///     .into_par_iter()
///     .map(Outcome::<i32, ()>::success)
///     .par_collect_outcomes(to_set());
/// assert_eq!(outcome.unwrap_success().len(), 3);
/// ```
pub trait ParCollectOutcomes<T, E>: ParallelIterator<Item = Outcome<T, E>> {
    /// Drains the parallel iterator into `collector`.
    fn par_collect_outcomes<C, F>(self, collector: OutcomeCollector<C, F>) -> Outcome<F::Output, E>
    where
        C: Container<T> + Send,
        F: Finisher<C>,
        T: Send,
        E: Send,
    {
        collector.par_collect(self)
    }
}

impl<I, T, E> ParCollectOutcomes<T, E> for I where I: ParallelIterator<Item = Outcome<T, E>> {}

impl<T, E, C> FromParallelIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: Container<T> + Send,
    T: Send,
    E: Send,
{
    /// Aggregates in parallel with the mutable collector for `C`.
    fn from_par_iter<I>(source: I) -> Self
    where
        I: IntoParallelIterator<Item = Outcome<T, E>>,
    {
        collecting_mutable::<T, C>().par_collect(source)
    }
}
