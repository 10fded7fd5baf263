//! The two-variant outcome type.
//!
//! This module provides [`Outcome<T, E>`], a value that is exactly one of
//! `Success(T)` or `Failure(E)`, together with:
//!
//! - [`Nothing`]: the failure payload for outcomes built from an `Option`
//! - [`Panicked`]: the failure payload for [`Outcome::attempt`]
//! - [`Iter`] / [`IntoIter`]: the zero-or-one element sequence view
//!
//! # Examples
//!
//! ```rust
//! use twofold::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     text.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! let total = parse("20")
//!     .flat_map(|left| parse("22").map(|right| left + right))
//!     .success_or(0);
//! assert_eq!(total, 42);
//!
//! let message = parse("x").branch(|value| value.to_string(), |error| error);
//! assert_eq!(message, "invalid digit found in string");
//! ```

mod algebra;
mod attempt;
mod iter;
mod nothing;
mod nullable;

pub use algebra::Outcome;
pub use attempt::Panicked;
pub use iter::{IntoIter, Iter};
pub use nothing::Nothing;
