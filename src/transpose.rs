//! Structural isomorphisms between nested outcome shapes.
//!
//! This module turns containers of outcomes inside out:
//!
//! | Input                        | Output                        |
//! |------------------------------|-------------------------------|
//! | `Option<Outcome<T, E>>`      | `Outcome<Option<T>, E>`       |
//! | `Outcome<Option<T>, E>`      | `Option<Outcome<T, E>>`       |
//! | `Vec<Outcome<T, E>>`         | `Outcome<Vec<T>, E>`          |
//! | `HashSet<Outcome<T, E>>`     | `Outcome<HashSet<T>, E>`      |
//! | `IndexSet<Outcome<T, E>>`    | `Outcome<IndexSet<T>, E>`     |
//! | `Outcome<Outcome<T, E>, E>`  | `Outcome<T, E>` (flatten)     |
//!
//! All operations are pure and preserve the order of the input. The
//! collection transpositions stop at the first `Failure` they meet and
//! return it; elements after it are never inspected. For a `HashSet`,
//! "first" follows the set's own iteration order, so which error is returned
//! from a set holding several failures is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use twofold::{Outcome, Transpose};
//!
//! let all: Vec<Outcome<i32, &str>> = vec![Outcome::success(2), Outcome::success(4)];
//! assert_eq!(all.transpose(), Outcome::success(vec![2, 4]));
//!
//! let some: Vec<Outcome<i32, &str>> =
//!     vec![Outcome::success(2), Outcome::failure("four"), Outcome::failure("eight")];
//! assert_eq!(some.transpose(), Outcome::failure("four"));
//! ```

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

use crate::outcome::Outcome;

// =============================================================================
// Flatten
// =============================================================================

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses an outcome whose success payload is itself an outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(4));
    /// assert_eq!(nested.flatten(), Outcome::success(4));
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("e"));
    /// assert_eq!(nested.flatten(), Outcome::failure("e"));
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::failure("e");
    /// assert_eq!(nested.flatten(), Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

/// Collapses an outcome whose success payload is itself an outcome.
///
/// Free-function form of [`Outcome::flatten`].
#[inline]
pub fn flatten<T, E>(outcome: Outcome<Outcome<T, E>, E>) -> Outcome<T, E> {
    outcome.flatten()
}

// =============================================================================
// Transpose
// =============================================================================

/// Inverts the nesting of an outcome and a container.
///
/// Implementations exist for optional values in both directions and for the
/// standard collections of outcomes. Transposing an `Option` twice gives back
/// the original value.
pub trait Transpose {
    /// The shape after inversion.
    type Output;

    /// Inverts the nesting.
    fn transpose(self) -> Self::Output;
}

impl<T, E> Transpose for Option<Outcome<T, E>> {
    type Output = Outcome<Option<T>, E>;

    /// `None` becomes `Success(None)`, `Some(Success(x))` becomes
    /// `Success(Some(x))` and `Some(Failure(e))` becomes `Failure(e)`.
    #[inline]
    fn transpose(self) -> Self::Output {
        match self {
            None => Outcome::Success(None),
            Some(Outcome::Success(value)) => Outcome::Success(Some(value)),
            Some(Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }
}

impl<T, E> Transpose for Outcome<Option<T>, E> {
    type Output = Option<Outcome<T, E>>;

    /// `Success(None)` becomes `None`, `Success(Some(x))` becomes
    /// `Some(Success(x))` and `Failure(e)` becomes `Some(Failure(e))`.
    #[inline]
    fn transpose(self) -> Self::Output {
        match self {
            Self::Success(option) => option.map(Outcome::Success),
            Self::Failure(error) => Some(Outcome::Failure(error)),
        }
    }
}

impl<T, E> Transpose for Vec<Outcome<T, E>> {
    type Output = Outcome<Vec<T>, E>;

    #[inline]
    fn transpose(self) -> Self::Output {
        let capacity = self.len();
        transpose_iter_into(self, Vec::with_capacity(capacity))
    }
}

impl<T, E, S> Transpose for HashSet<Outcome<T, E>, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = Outcome<HashSet<T, S>, E>;

    #[inline]
    fn transpose(self) -> Self::Output {
        let capacity = self.len();
        transpose_iter_into(self, HashSet::with_capacity_and_hasher(capacity, S::default()))
    }
}

impl<T, E, S> Transpose for IndexSet<Outcome<T, E>, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = Outcome<IndexSet<T, S>, E>;

    #[inline]
    fn transpose(self) -> Self::Output {
        let capacity = self.len();
        transpose_iter_into(self, IndexSet::with_capacity_and_hasher(capacity, S::default()))
    }
}

/// Transposes any sequence of outcomes into an outcome of a collection.
///
/// The source is pulled lazily: the first `Failure` ends the scan and is
/// returned, and nothing after it is evaluated. Otherwise all success
/// payloads are collected in source order.
///
/// Contrast with [`crate::collect`], which always drains its source.
///
/// # Examples
///
/// ```rust
/// use twofold::{Outcome, transpose_iter};
///
/// let outcomes = (1..=5).map(|number| {
///     assert!(number <= 3, "evaluated past the first failure");
///     if number == 3 { Outcome::failure(number) } else { Outcome::success(number) }
/// });
/// let transposed: Outcome<Vec<i32>, i32> = transpose_iter(outcomes);
/// assert_eq!(transposed, Outcome::failure(3));
/// ```
pub fn transpose_iter<T, E, C, I>(source: I) -> Outcome<C, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    C: Default + Extend<T>,
{
    transpose_iter_into(source, C::default())
}

fn transpose_iter_into<T, E, C, I>(source: I, mut collection: C) -> Outcome<C, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    C: Extend<T>,
{
    for item in source {
        match item {
            Outcome::Success(value) => collection.extend(std::iter::once(value)),
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(collection)
}
