//! Aggregation of many outcomes into one.
//!
//! An [`OutcomeCollector`] reduces a sequence of `Outcome<T, E>` into an
//! `Outcome<C, E>`, where `C` is a list, a set, or any other [`Container`].
//! The first failure poisons the reduction but the input is still drained
//! to the end. Parallel reduction is available with the `rayon` feature.
//!
//! # Examples
//!
//! ```rust
//! use twofold::Outcome;
//! use twofold::collect::{CollectOutcomes, to_list, to_set};
//!
//! let numbers = vec![Outcome::<i32, String>::success(1), Outcome::success(1)];
//! let list = numbers.clone().into_iter().collect_outcomes(to_list());
//! let set = numbers.into_iter().collect_outcomes(to_set());
//! assert_eq!(list.unwrap_success().len(), 2);
//! assert_eq!(set.unwrap_success().len(), 1);
//! ```

mod accumulator;
mod collector;
mod container;
mod frozen;
#[cfg(feature = "rayon")]
mod parallel;

pub use collector::{
    Characteristics, CollectOutcomes, Finisher, Freeze, KeepMutable, OutcomeCollector, collecting,
    collecting_mutable, to_list, to_mutable_list, to_mutable_ordered_set, to_mutable_set,
    to_ordered_set, to_set, to_sorted_set,
};
pub use container::Container;
pub use frozen::Frozen;
#[cfg(feature = "rayon")]
pub use parallel::ParCollectOutcomes;
