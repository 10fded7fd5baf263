//! Bridging between `Option` and [`Outcome`].
//!
//! Rust has no null, so a plain `T` can never be absent. Absence only
//! appears where an `Option` crosses into or out of the outcome algebra,
//! and this module collects those crossings:
//!
//! - lossless conversion from `Option<T>` (absent becomes `Failure(Nothing)`),
//! - checked operations that reject an absent value with
//!   [`OutcomeError::InvalidArgument`],
//! - relaxed `*_nullable` / `*_null` accessors that hand back an `Option`
//!   instead of raising.

use super::{Nothing, Outcome};
use crate::error::OutcomeError;

impl<T> Outcome<T, Nothing> {
    /// Builds an outcome from an optional value.
    ///
    /// `Some(v)` becomes `Success(v)` and `None` becomes `Failure(Nothing)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Nothing, Outcome};
    ///
    /// assert_eq!(Outcome::from_option(Some("hello")), Outcome::success("hello"));
    /// assert_eq!(Outcome::from_option(None::<&str>), Outcome::failure(Nothing));
    /// ```
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        option.map_or(Self::Failure(Nothing), Self::Success)
    }
}

impl<T> From<Option<T>> for Outcome<T, Nothing> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self::from_option(option)
    }
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Checked Construction
    // =========================================================================

    /// Creates a `Success` from a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, OutcomeError};
    ///
    /// let outcome: Result<Outcome<i32, ()>, _> = Outcome::try_success(Some(1));
    /// assert_eq!(outcome, Ok(Outcome::success(1)));
    ///
    /// let outcome: Result<Outcome<i32, ()>, _> = Outcome::try_success(None);
    /// assert_eq!(outcome, Err(OutcomeError::invalid_argument("value")));
    /// ```
    #[inline]
    pub fn try_success(value: Option<T>) -> Result<Self, OutcomeError> {
        value
            .map(Self::Success)
            .ok_or(OutcomeError::invalid_argument("value"))
    }

    /// Creates a `Failure` from an error that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if `error` is `None`.
    #[inline]
    pub fn try_failure(error: Option<E>) -> Result<Self, OutcomeError> {
        error
            .map(Self::Failure)
            .ok_or(OutcomeError::invalid_argument("error"))
    }

    // =========================================================================
    // Checked Combinators
    // =========================================================================

    /// Like [`map`](Self::map), for a function that may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if `function` is called and
    /// returns `None`. A `Failure` never calls it.
    #[inline]
    pub fn try_map<U, F>(self, function: F) -> Result<Outcome<U, E>, OutcomeError>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Success(value) => function(value)
                .map(Outcome::Success)
                .ok_or(OutcomeError::invalid_argument("mapped value")),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Like [`map_err`](Self::map_err), for a function that may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if `function` is called and
    /// returns `None`.
    #[inline]
    pub fn try_map_err<G, F>(self, function: F) -> Result<Outcome<T, G>, OutcomeError>
    where
        F: FnOnce(E) -> Option<G>,
    {
        match self {
            Self::Success(value) => Ok(Outcome::Success(value)),
            Self::Failure(error) => function(error)
                .map(Outcome::Failure)
                .ok_or(OutcomeError::invalid_argument("mapped error")),
        }
    }

    /// Like [`get_or_throw_with`](Self::get_or_throw_with), for a supplier
    /// that may produce no error.
    ///
    /// An absent supplied error is itself reported, converted into `X`.
    ///
    /// # Errors
    ///
    /// Returns the supplied error for a `Failure`, or
    /// `X::from(OutcomeError::InvalidArgument)` if the supplier returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::{Outcome, OutcomeError};
    ///
    /// let failure: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(
    ///     failure.try_get_or_throw_with(|| None::<OutcomeError>),
    ///     Err(OutcomeError::invalid_argument("supplied error"))
    /// );
    /// ```
    #[inline]
    pub fn try_get_or_throw_with<X, S>(self, supplier: S) -> Result<T, X>
    where
        S: FnOnce() -> Option<X>,
        X: From<OutcomeError>,
    {
        self.get_or_throw_with(|| {
            supplier().unwrap_or_else(|| OutcomeError::invalid_argument("supplied error").into())
        })
    }

    /// Failure-side mirror of [`try_get_or_throw_with`](Self::try_get_or_throw_with).
    ///
    /// # Errors
    ///
    /// Returns the supplied error for a `Success`, or
    /// `X::from(OutcomeError::InvalidArgument)` if the supplier returns `None`.
    #[inline]
    pub fn try_get_err_or_throw_with<X, S>(self, supplier: S) -> Result<E, X>
    where
        S: FnOnce() -> Option<X>,
        X: From<OutcomeError>,
    {
        self.get_err_or_throw_with(|| {
            supplier().unwrap_or_else(|| OutcomeError::invalid_argument("supplied error").into())
        })
    }

    /// Like [`recover`](Self::recover), for a recovery that may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if the recovery runs and
    /// returns `None`.
    #[inline]
    pub fn try_recover<F>(self, function: F) -> Result<T, OutcomeError>
    where
        F: FnOnce(E) -> Option<T>,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => {
                function(error).ok_or(OutcomeError::invalid_argument("recovered value"))
            }
        }
    }

    /// Like [`success_or_else`](Self::success_or_else), for a supplier that
    /// may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if the supplier runs and
    /// returns `None`.
    #[inline]
    pub fn try_success_or_else<F>(self, supplier: F) -> Result<T, OutcomeError>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => supplier().ok_or(OutcomeError::invalid_argument("alternative")),
        }
    }

    /// Like [`failure_or_else`](Self::failure_or_else), for a supplier that
    /// may produce no value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeError::InvalidArgument`] if the supplier runs and
    /// returns `None`.
    #[inline]
    pub fn try_failure_or_else<F>(self, supplier: F) -> Result<E, OutcomeError>
    where
        F: FnOnce() -> Option<E>,
    {
        match self {
            Self::Success(_) => supplier().ok_or(OutcomeError::invalid_argument("alternative")),
            Self::Failure(error) => Ok(error),
        }
    }

    // =========================================================================
    // Relaxed Accessors
    // =========================================================================

    /// Returns the success payload, or `alternative`, which may be absent.
    #[inline]
    pub fn success_or_nullable(self, alternative: Option<T>) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Returns the success payload, or the possibly absent value produced by
    /// `supplier`. The supplier is never evaluated for a `Success`.
    #[inline]
    pub fn success_or_nullable_else<F>(self, supplier: F) -> Option<T>
    where
        F: FnOnce() -> Option<T>,
    {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => supplier(),
        }
    }

    /// Returns the success payload, or `None` for a `Failure`.
    #[inline]
    pub fn success_or_null(self) -> Option<T> {
        self.without_failure()
    }

    /// Returns the failure payload, or `alternative`, which may be absent.
    #[inline]
    pub fn failure_or_nullable(self, alternative: Option<E>) -> Option<E> {
        match self {
            Self::Success(_) => alternative,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the failure payload, or the possibly absent value produced by
    /// `supplier`. The supplier is never evaluated for a `Failure`.
    #[inline]
    pub fn failure_or_nullable_else<F>(self, supplier: F) -> Option<E>
    where
        F: FnOnce() -> Option<E>,
    {
        match self {
            Self::Success(_) => supplier(),
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the failure payload, or `None` for a `Success`.
    #[inline]
    pub fn failure_or_null(self) -> Option<E> {
        self.without_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_from_option_present_is_success() {
        let outcome: Outcome<&str, Nothing> = Some("hello").into();
        assert_eq!(outcome.get_or_throw(), Ok("hello"));
    }

    #[rstest]
    fn test_from_option_absent_is_nothing() {
        let outcome = Outcome::from_option(None::<i32>);
        assert_eq!(outcome.get_err_or_throw(), Ok(Nothing));
    }

    #[rstest]
    fn test_try_failure_rejects_absent() {
        let outcome: Result<Outcome<(), &str>, _> = Outcome::try_failure(None);
        assert_eq!(outcome, Err(OutcomeError::invalid_argument("error")));
    }

    #[derive(Debug, PartialEq)]
    enum LookupError {
        Missing,
        Contract(OutcomeError),
    }

    impl From<OutcomeError> for LookupError {
        fn from(error: OutcomeError) -> Self {
            Self::Contract(error)
        }
    }

    #[rstest]
    fn test_try_get_or_throw_with_supplied_error() {
        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(
            failure.try_get_or_throw_with(|| Some(LookupError::Missing)),
            Err(LookupError::Missing)
        );
    }

    #[rstest]
    fn test_try_get_or_throw_with_absent_error_is_invalid_argument() {
        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(
            failure.try_get_or_throw_with(|| None::<LookupError>),
            Err(LookupError::Contract(OutcomeError::invalid_argument("supplied error")))
        );
    }

    #[rstest]
    fn test_try_get_or_throw_with_skips_supplier_on_success() {
        let success: Outcome<i32, &str> = Outcome::success(3);
        assert_eq!(
            success.try_get_or_throw_with(|| -> Option<OutcomeError> { unreachable!() }),
            Ok(3)
        );
    }

    #[rstest]
    fn test_try_get_err_or_throw_with_mirrors() {
        let success: Outcome<i32, &str> = Outcome::success(3);
        assert_eq!(
            success.try_get_err_or_throw_with(|| None::<OutcomeError>),
            Err(OutcomeError::invalid_argument("supplied error"))
        );
        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(failure.try_get_err_or_throw_with(|| None::<OutcomeError>), Ok("bad"));
    }

    #[rstest]
    fn test_try_map_rejects_absent_result() {
        let success: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(
            success.try_map(|_| None::<i32>),
            Err(OutcomeError::invalid_argument("mapped value"))
        );
    }

    #[rstest]
    fn test_try_map_skips_function_on_failure() {
        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(
            failure.try_map(|_| -> Option<i32> { unreachable!() }),
            Ok(Outcome::failure("bad"))
        );
    }

    #[rstest]
    fn test_try_recover_rejects_absent_replacement() {
        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(
            failure.try_recover(|_| None),
            Err(OutcomeError::invalid_argument("recovered value"))
        );
    }

    #[rstest]
    fn test_nullable_supplier_is_lazy() {
        let success: Outcome<i32, &str> = Outcome::success(1);
        assert_eq!(success.success_or_nullable_else(|| unreachable!()), Some(1));

        let failure: Outcome<i32, &str> = Outcome::failure("bad");
        assert_eq!(failure.success_or_nullable_else(|| None), None);
        assert_eq!(failure.failure_or_null(), Some("bad"));
    }
}
