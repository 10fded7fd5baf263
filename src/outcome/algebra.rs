//! The `Outcome` type and its combinators.
//!
//! An [`Outcome<T, E>`] is exactly one of `Success(T)` or `Failure(E)`.
//! The failure payload is ordinary domain data, not an exception object,
//! although any error type can be used as `E`.
//!
//! Every combinator that accepts a closure for one variant only invokes it
//! for that variant, and at most once. Suppliers of alternative values
//! (`success_or_else`, `and_else`, `or_else`, `get_or_throw_with`, ...) are
//! never evaluated when the current variant already decides the answer.

use std::fmt;

use super::iter::Iter;
use crate::error::OutcomeError;

/// A value that is either a success carrying `T` or a failure carrying `E`.
///
/// Two outcomes are equal iff they are the same variant with equal payloads.
/// A `Success` and a `Failure` are never equal, and the variant takes part in
/// hashing, so `Success(x)` and `Failure(x)` hash differently.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use twofold::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success(21);
/// let doubled = parsed.map(|value| value * 2);
/// assert_eq!(doubled, Outcome::success(42));
///
/// let failed: Outcome<i32, String> = Outcome::failure("not a number".to_string());
/// assert_eq!(failed.success_or(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant, carrying the produced value.
    Success(T),
    /// The failure variant, carrying the error value.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let outcome: Outcome<&str, ()> = Outcome::success("hello");
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Failure` holding `error`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let outcome: Outcome<(), &str> = Outcome::failure("boom");
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    ///
    /// Always the exact complement of [`is_success`](Self::is_success).
    #[inline]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    #[inline]
    fn get_or_throw_from<X, F>(self, raise: F) -> Result<T, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(raise(error)),
        }
    }

    #[inline]
    fn get_err_or_throw_from<X, F>(self, raise: F) -> Result<E, X>
    where
        F: FnOnce(T) -> X,
    {
        match self {
            Self::Success(value) => Err(raise(value)),
            Self::Failure(error) => Ok(error),
        }
    }

    /// Returns the success payload, or a [`OutcomeError::WrongVariant`]
    /// describing the failure that was found instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(7);
    /// assert_eq!(success.get_or_throw(), Ok(7));
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert!(failure.get_or_throw().unwrap_err().is_wrong_variant());
    /// ```
    #[inline]
    pub fn get_or_throw(self) -> Result<T, OutcomeError>
    where
        E: fmt::Debug,
    {
        self.get_or_throw_from(|error| {
            OutcomeError::wrong_variant(format!(
                "Attempted to get the success value of Failure({error:?})"
            ))
        })
    }

    /// Returns the success payload, or a [`OutcomeError::WrongVariant`]
    /// carrying `message`.
    #[inline]
    pub fn get_or_throw_message(self, message: impl Into<String>) -> Result<T, OutcomeError> {
        self.get_or_throw_with(|| OutcomeError::wrong_variant(message))
    }

    /// Returns the success payload, or the error produced by `supplier`.
    ///
    /// The supplier runs at most once, and only for a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(failure.get_or_throw_with(|| "custom"), Err("custom"));
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(success.get_or_throw_with(|| -> &str { unreachable!() }), Ok(1));
    /// ```
    #[inline]
    pub fn get_or_throw_with<X, S>(self, supplier: S) -> Result<T, X>
    where
        S: FnOnce() -> X,
    {
        self.get_or_throw_from(|_| supplier())
    }

    /// Returns the failure payload, or a [`OutcomeError::WrongVariant`]
    /// describing the success that was found instead.
    #[inline]
    pub fn get_err_or_throw(self) -> Result<E, OutcomeError>
    where
        T: fmt::Debug,
    {
        self.get_err_or_throw_from(|value| {
            OutcomeError::wrong_variant(format!(
                "Attempted to get the failure value of Success({value:?})"
            ))
        })
    }

    /// Returns the failure payload, or a [`OutcomeError::WrongVariant`]
    /// carrying `message`.
    #[inline]
    pub fn get_err_or_throw_message(self, message: impl Into<String>) -> Result<E, OutcomeError> {
        self.get_err_or_throw_with(|| OutcomeError::wrong_variant(message))
    }

    /// Returns the failure payload, or the error produced by `supplier`.
    ///
    /// The supplier runs at most once, and only for a `Success`.
    #[inline]
    pub fn get_err_or_throw_with<X, S>(self, supplier: S) -> Result<E, X>
    where
        S: FnOnce() -> X,
    {
        self.get_err_or_throw_from(|_| supplier())
    }

    /// Returns the success payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Returns the failure payload, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Self::Failure(error) => error,
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn expect_success(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => panic!("{message}: {error:?}"),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `Success`.
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => panic!("{message}: {value:?}"),
            Self::Failure(error) => error,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success payload.
    ///
    /// A `Failure` is returned unchanged and `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::failure(2);
    /// assert_eq!(failure.map(|value| value * 2).get_err_or_throw(), Ok(2));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure payload.
    ///
    /// A `Success` is returned unchanged and `function` is not called.
    #[inline]
    pub fn map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<U, G, F, H>(self, success_function: F, failure_function: H) -> Outcome<U, G>
    where
        F: FnOnce(T) -> U,
        H: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(success_function(value)),
            Self::Failure(error) => Outcome::Failure(failure_function(error)),
        }
    }

    /// Applies an outcome-returning function to the success payload and
    /// flattens the nested outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// fn halve(value: i32) -> Outcome<i32, String> {
    ///     if value % 2 == 0 {
    ///         Outcome::success(value / 2)
    ///     } else {
    ///         Outcome::failure(format!("{value} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(halve), Outcome::success(4));
    /// assert_eq!(
    ///     Outcome::success(3).flat_map(halve),
    ///     Outcome::failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.map(function).flatten()
    }

    /// Applies an outcome-returning function to the failure payload.
    ///
    /// This is the failure-side mirror of [`flat_map`](Self::flat_map): a
    /// failure can be turned into a success, or into a different failure.
    #[inline]
    pub fn flat_map_err<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => function(error),
        }
    }

    /// Relabels the success type of a `Failure` without touching its error.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::WrongVariant`] for a `Success`, since there is
    /// no way to turn its payload into a `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// let adapted: Outcome<String, &str> = failure.adapt_success_type().unwrap();
    /// assert_eq!(adapted, Outcome::failure("bad"));
    /// ```
    #[inline]
    pub fn adapt_success_type<U>(self) -> Result<Outcome<U, E>, OutcomeError>
    where
        T: fmt::Debug,
    {
        match self {
            Self::Success(value) => Err(OutcomeError::wrong_variant(format!(
                "Attempted to call `adapt_success_type` on Success({value:?}); \
                 this only succeeds if the outcome is a Failure"
            ))),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Relabels the failure type of a `Success` without touching its value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::WrongVariant`] for a `Failure`.
    #[inline]
    pub fn adapt_failure_type<G>(self) -> Result<Outcome<T, G>, OutcomeError>
    where
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => Ok(Outcome::Success(value)),
            Self::Failure(error) => Err(OutcomeError::wrong_variant(format!(
                "Attempted to call `adapt_failure_type` on Failure({error:?}); \
                 this only succeeds if the outcome is a Success"
            ))),
        }
    }

    // =========================================================================
    // Branching and Inspection
    // =========================================================================

    /// Runs `action` on the success payload, if any.
    #[inline]
    pub fn if_success<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Runs `action` on a mutable borrow of the success payload, if any.
    #[inline]
    pub fn if_success_mut<F>(&mut self, action: F)
    where
        F: FnOnce(&mut T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Runs `action` on the failure payload, if any.
    #[inline]
    pub fn if_failure<F>(&self, action: F)
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = self {
            action(error);
        }
    }

    /// Runs exactly one of the two actions, depending on the variant.
    #[inline]
    pub fn if_either<F, G>(&self, success_action: F, failure_action: G)
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match self {
            Self::Success(value) => success_action(value),
            Self::Failure(error) => failure_action(error),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// Only the function for the actual variant is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// let text = failure.branch(|_| unreachable!(), |error| error.len());
    /// assert_eq!(text, 3);
    /// ```
    #[inline]
    pub fn branch<R, F, G>(self, success_function: F, failure_function: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(error) => failure_function(error),
        }
    }

    /// Returns the success payload, or computes one from the failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<usize, &str> = Outcome::failure("four");
    /// assert_eq!(failure.recover(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => function(error),
        }
    }

    // =========================================================================
    // Defaulting
    // =========================================================================

    /// Returns the success payload, or `alternative` for a `Failure`.
    #[inline]
    pub fn success_or(self, alternative: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the success payload, or the value produced by `supplier`.
    ///
    /// The supplier is never evaluated for a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(success.success_or_else(|| unreachable!()), 1);
    /// ```
    #[inline]
    pub fn success_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the failure payload, or `alternative` for a `Success`.
    #[inline]
    pub fn failure_or(self, alternative: E) -> E {
        match self {
            Self::Success(_) => alternative,
            Self::Failure(error) => error,
        }
    }

    /// Returns the failure payload, or the value produced by `supplier`.
    ///
    /// The supplier is never evaluated for a `Failure`.
    #[inline]
    pub fn failure_or_else<F>(self, supplier: F) -> E
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Success(_) => supplier(),
            Self::Failure(error) => error,
        }
    }

    /// Converts into an `Option` of the success payload, discarding any error.
    #[inline]
    pub fn without_failure(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the failure payload, discarding any value.
    #[inline]
    pub fn without_success(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Combining Two Outcomes
    // =========================================================================

    /// Returns `next` if this is a `Success`, otherwise propagates this failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let first: Outcome<i32, &str> = Outcome::success(1);
    /// assert_eq!(first.and(Outcome::<&str, &str>::success("two")), Outcome::success("two"));
    ///
    /// let first: Outcome<i32, &str> = Outcome::failure("early");
    /// assert_eq!(first.and(Outcome::<&str, &str>::success("two")), Outcome::failure("early"));
    /// ```
    #[inline]
    pub fn and<U>(self, next: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Success(_) => next,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`and`](Self::and), but only builds the next outcome when needed.
    #[inline]
    pub fn and_else<U, F>(self, supplier: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        match self {
            Self::Success(_) => supplier(),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns this outcome if it is a `Success`, otherwise `next`.
    #[inline]
    pub fn or<G>(self, next: Outcome<T, G>) -> Outcome<T, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => next,
        }
    }

    /// Like [`or`](Self::or), but only builds the next outcome when needed.
    ///
    /// Unlike `std::result::Result::or_else`, the supplier receives no
    /// argument; use [`flat_map_err`](Self::flat_map_err) to inspect the error.
    #[inline]
    pub fn or_else<G, F>(self, supplier: F) -> Outcome<T, G>
    where
        F: FnOnce() -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => supplier(),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a `Success` whose payload equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Success(payload) => payload == value,
            Self::Failure(_) => false,
        }
    }

    /// Returns `true` if this is a `Failure` whose payload equals `error`.
    #[inline]
    pub fn contains_failure(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(payload) => payload == error,
        }
    }

    /// Tests the success payload; a `Failure` yields `false` without calling
    /// `predicate`.
    #[inline]
    pub fn matches_success<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => predicate(value),
            Self::Failure(_) => false,
        }
    }

    /// Tests the failure payload; a `Success` yields `false` without calling
    /// `predicate`.
    #[inline]
    pub fn matches_failure<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Success(_) => false,
            Self::Failure(error) => predicate(error),
        }
    }

    // =========================================================================
    // Sequence View and Uniform Access
    // =========================================================================

    /// Returns an iterator over the success payload: one item for a
    /// `Success`, none for a `Failure`.
    ///
    /// Each call starts a fresh iteration over the same value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(3);
    /// assert_eq!(success.iter().collect::<Vec<_>>(), vec![&3]);
    /// assert_eq!(success.iter().count(), 1);
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(failure.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().without_failure())
    }

    /// Returns whichever payload is stored, for code that only wants to
    /// print it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(format!("{:?}", failure.unified_payload()), "\"bad\"");
    /// ```
    #[inline]
    pub fn unified_payload(&self) -> &dyn fmt::Debug
    where
        T: fmt::Debug,
        E: fmt::Debug,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => error,
        }
    }

    /// Converts into a standard library `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T> Outcome<T, T> {
    /// Returns the stored payload when both variants carry the same type.
    #[inline]
    pub fn into_unified(self) -> T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success({value})"),
            Self::Failure(error) => write!(formatter, "Failure({error})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// `Ok(v)` becomes `Success(v)`, and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// `Success(v)` becomes `Ok(v)`, and `Failure(e)` becomes `Err(e)`.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Outcome<i32, i32>: Copy);
