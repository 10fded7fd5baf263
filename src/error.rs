//! Error conditions raised by the outcome algebra.
//!
//! Only two things can go wrong when working with an [`Outcome`](crate::Outcome):
//!
//! - a required value was absent where the caller promised one
//!   ([`OutcomeError::InvalidArgument`]), or
//! - an extraction or type adaptation was requested from the variant that
//!   cannot provide it ([`OutcomeError::WrongVariant`]).
//!
//! Both are contract violations on the caller's side, never data conditions,
//! so they are reported immediately and never retried.

use thiserror::Error;

/// Represents the conditions an [`Outcome`](crate::Outcome) operation can raise.
///
/// # Examples
///
/// ```rust
/// use twofold::{Outcome, OutcomeError};
///
/// let failure: Outcome<i32, &str> = Outcome::failure("boom");
/// let error = failure.get_or_throw().unwrap_err();
/// assert!(matches!(error, OutcomeError::WrongVariant { .. }));
/// assert_eq!(
///     error.to_string(),
///     "Attempted to get the success value of Failure(\"boom\")",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// A value that must be present was absent.
    #[error("`{argument}` must not be absent")]
    InvalidArgument {
        /// The name of the argument or produced value that was absent.
        argument: &'static str,
    },
    /// An extraction or adaptation was attempted on the unsupported variant.
    #[error("{message}")]
    WrongVariant {
        /// A human-readable description of the actual content.
        message: String,
    },
}

impl OutcomeError {
    /// Creates an [`OutcomeError::InvalidArgument`] for the named argument.
    #[inline]
    pub const fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Creates an [`OutcomeError::WrongVariant`] with the given message.
    #[inline]
    pub fn wrong_variant(message: impl Into<String>) -> Self {
        Self::WrongVariant {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an [`OutcomeError::InvalidArgument`].
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns `true` if this is an [`OutcomeError::WrongVariant`].
    #[inline]
    pub const fn is_wrong_variant(&self) -> bool {
        matches!(self, Self::WrongVariant { .. })
    }
}
