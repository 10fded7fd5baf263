//! # twofold
//!
//! A two-variant outcome algebra for Rust: a value that is either a
//! `Success` or a `Failure`, with a rich set of combinators, lossless
//! conversion to and from [`Result`], and an aggregation engine that folds
//! many outcomes into one.
//!
//! ## Overview
//!
//! - **Outcome**: [`Outcome<T, E>`] with mapping, chaining, recovery,
//!   defaulting and branching combinators
//! - **Nothing**: the [`Nothing`] payload for outcomes built from an `Option`
//! - **Attempt**: [`Outcome::attempt`] turns a panicking computation into a
//!   [`Panicked`] failure
//! - **Transpose**: [`Transpose`] and [`flatten`] reshape nested outcomes
//! - **Collect**: [`collect::OutcomeCollector`] aggregates sequences of
//!   outcomes, sequentially or in parallel
//!
//! ## Feature Flags
//!
//! - `collect`: The aggregation engine (enabled by default)
//! - `rayon`: Parallel aggregation (enabled by default)
//! - `serde`: `Serialize` / `Deserialize` for the public value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use twofold::prelude::*;
//!
//! let halves: Vec<Outcome<i32, String>> = (1..=4)
//!     .map(|number| {
//!         if number % 2 == 0 {
//!             Outcome::success(number / 2)
//!         } else {
//!             Outcome::failure(format!("{number} is odd"))
//!         }
//!     })
//!     .collect();
//!
//! assert_eq!(halves.clone().transpose(), Outcome::failure("1 is odd".to_string()));
//! assert_eq!(
//!     halves.into_iter().filter(Outcome::is_success).collect_outcomes(to_list()).unwrap_success().len(),
//!     2
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use twofold::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OutcomeError;
    pub use crate::outcome::{Nothing, Outcome, Panicked};
    pub use crate::transpose::{Transpose, flatten, transpose_iter};

    #[cfg(feature = "collect")]
    pub use crate::collect::{
        CollectOutcomes, Frozen, OutcomeCollector, to_list, to_mutable_list,
        to_mutable_ordered_set, to_mutable_set, to_ordered_set, to_set, to_sorted_set,
    };

    #[cfg(feature = "rayon")]
    pub use crate::collect::ParCollectOutcomes;
}

pub mod error;
pub mod outcome;
pub mod transpose;

#[cfg(feature = "collect")]
pub mod collect;

pub use error::OutcomeError;
pub use outcome::{Nothing, Outcome, Panicked};
pub use transpose::{Transpose, flatten, transpose_iter};
