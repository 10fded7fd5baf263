//! Capturing a panicking computation as an [`Outcome`].

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::Outcome;

/// The failure payload produced by [`Outcome::attempt`] when the attempted
/// operation panicked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Panicked {
    message: Option<String>,
}

impl Panicked {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned());
        Self { message }
    }

    /// Returns the panic message, if the panic payload was a string.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Panicked {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(formatter, "operation panicked: {message}"),
            None => formatter.write_str("operation panicked"),
        }
    }
}

impl std::error::Error for Panicked {}

impl<T> Outcome<T, Panicked> {
    /// Runs `operation` and captures a panic as a `Failure`.
    ///
    /// A normal return becomes `Success(value)`. The default panic hook still
    /// runs, so the panic message is printed as usual. Operations that
    /// report errors through `Result` should use `Outcome::from` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twofold::Outcome;
    ///
    /// let success = Outcome::attempt(|| "hello".len());
    /// assert_eq!(success, Outcome::success(5));
    ///
    /// let failure = Outcome::attempt(|| -> usize { panic!("failed attempt") });
    /// assert_eq!(failure.unwrap_failure().message(), Some("failed attempt"));
    /// ```
    pub fn attempt<F>(operation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match catch_unwind(AssertUnwindSafe(operation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Panicked::from_payload(&*payload)),
        }
    }
}
