//! Property-based tests for the `Outcome<T, E>` algebra.

use proptest::prelude::*;
use twofold::Outcome;

// =============================================================================
// Strategy Definitions
// =============================================================================

fn arb_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        "[a-z]{1,10}".prop_map(Outcome::failure),
    ]
}

// =============================================================================
// Variant Laws
// =============================================================================

proptest! {
    /// Every outcome is exactly one of the two variants.
    #[test]
    fn prop_exactly_one_variant(outcome in arb_outcome()) {
        prop_assert!(outcome.is_success() != outcome.is_failure());
    }

    /// get_or_throw succeeds exactly for a Success and returns its payload.
    #[test]
    fn prop_get_or_throw_matches_variant(outcome in arb_outcome()) {
        match outcome.clone() {
            Outcome::Success(value) => prop_assert_eq!(outcome.get_or_throw(), Ok(value)),
            Outcome::Failure(_) => prop_assert!(outcome.get_or_throw().is_err()),
        }
    }

    /// Converting to Result and back is lossless.
    #[test]
    fn prop_result_conversion_is_lossless(outcome in arb_outcome()) {
        let result: Result<i32, String> = outcome.clone().into();
        prop_assert_eq!(Outcome::from(result), outcome);
    }
}

// =============================================================================
// Functor and Monad Laws
// =============================================================================

proptest! {
    /// map(id) == id
    #[test]
    fn prop_map_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().map(|value| value), outcome);
    }

    /// map(f).map(g) == map(g . f)
    #[test]
    fn prop_map_composition(outcome in arb_outcome()) {
        let function = |value: i32| value.wrapping_mul(2);
        let other = |value: i32| value.wrapping_sub(7);
        prop_assert_eq!(
            outcome.clone().map(function).map(other),
            outcome.map(|value| other(function(value)))
        );
    }

    /// flat_map(success) == id
    #[test]
    fn prop_flat_map_right_identity(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.clone().flat_map(Outcome::success), outcome);
    }

    /// success(x).flat_map(f) == f(x)
    #[test]
    fn prop_flat_map_left_identity(value: i32) {
        let function = |value: i32| -> Outcome<i32, String> {
            if value % 3 == 0 { Outcome::failure(value.to_string()) } else { Outcome::success(value) }
        };
        prop_assert_eq!(Outcome::success(value).flat_map(function), function(value));
    }

    /// bimap(f, g) == map(f).map_err(g)
    #[test]
    fn prop_bimap_is_map_then_map_err(outcome in arb_outcome()) {
        prop_assert_eq!(
            outcome.clone().bimap(|value| value.wrapping_add(1), |error| error.len()),
            outcome.map(|value| value.wrapping_add(1)).map_err(|error| error.len())
        );
    }

    /// recover(f) == branch(id, f)
    #[test]
    fn prop_recover_is_branch(outcome in arb_outcome()) {
        let function = |error: String| error.len() as i32;
        prop_assert_eq!(outcome.clone().recover(function), outcome.branch(|value| value, function));
    }
}

// =============================================================================
// Iterator Laws
// =============================================================================

proptest! {
    /// size_hint is always exact: 1 for a Success, 0 for a Failure.
    #[test]
    fn prop_size_hint_matches_count(outcome in arb_outcome()) {
        let iterator = outcome.clone().into_iter();
        let (lower, upper) = iterator.size_hint();
        let count = outcome.into_iter().count();

        prop_assert_eq!(lower, count);
        prop_assert_eq!(upper, Some(count));
    }

    /// iter().count() == 1 exactly for a Success.
    #[test]
    fn prop_iter_count_matches_variant(outcome in arb_outcome()) {
        prop_assert_eq!(outcome.iter().count(), usize::from(outcome.is_success()));
        prop_assert_eq!(outcome.iter().len(), outcome.iter().count());
    }

    /// Collecting the sequence view equals without_failure as a Vec.
    #[test]
    fn prop_sequence_view_is_without_failure(outcome in arb_outcome()) {
        let collected: Vec<i32> = outcome.clone().into_iter().collect();
        prop_assert_eq!(collected, outcome.without_failure().into_iter().collect::<Vec<_>>());
    }
}
