//! The zero-information failure payload.

use std::fmt;

/// A value that carries no information at all.
///
/// `Nothing` is the failure payload used when an [`Outcome`](crate::Outcome)
/// is built from an `Option`: an absent value has no richer explanation than
/// "there was nothing". It is a zero-sized unit struct, so every instance is
/// the same instance.
///
/// The name avoids shadowing `Option::None` in downstream code.
///
/// # Examples
///
/// ```rust
/// use twofold::{Nothing, Outcome};
///
/// let outcome = Outcome::from_option(None::<i32>);
/// assert_eq!(outcome, Outcome::failure(Nothing));
/// assert_eq!(Nothing::get(), Nothing);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nothing;

impl Nothing {
    /// Returns the one and only `Nothing`.
    #[inline]
    pub const fn get() -> Self {
        Self
    }
}

impl fmt::Display for Nothing {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Nothing")
    }
}

impl From<()> for Nothing {
    #[inline]
    fn from((): ()) -> Self {
        Self
    }
}

static_assertions::assert_eq_size!(Nothing, ());
static_assertions::assert_impl_all!(Nothing: Send, Sync, Copy);
