//! Unit tests for sequential outcome aggregation.

#![cfg(feature = "collect")]

use std::cell::Cell;
use std::collections::{BTreeSet, HashSet, VecDeque};

use rstest::rstest;
use twofold::Outcome;
use twofold::collect::{
    CollectOutcomes, collecting, to_list, to_mutable_list, to_mutable_ordered_set, to_mutable_set,
    to_ordered_set, to_set, to_sorted_set,
};

type Numeric = Outcome<i32, i32>;

fn successes(values: &[i32]) -> Vec<Numeric> {
    values.iter().copied().map(Outcome::success).collect()
}

// =============================================================================
// Lists
// =============================================================================

#[rstest]
fn list_empty_source() {
    let outcome = Vec::<Outcome<i32, String>>::new()
        .into_iter()
        .collect_outcomes(to_list());
    assert!(outcome.is_success());
    assert!(outcome.unwrap_success().is_empty());
}

#[rstest]
fn list_single_success() {
    let list = vec![Numeric::success(2)].into_iter().collect_outcomes(to_list());
    assert_eq!(*list.unwrap_success(), vec![2]);
}

#[rstest]
fn list_single_failure() {
    let list = vec![Numeric::failure(2)].into_iter().collect_outcomes(to_list());
    assert_eq!(list.get_err_or_throw(), Ok(2));
}

#[rstest]
fn list_multiple_successes_keep_order() {
    let list = to_list().collect(successes(&[2, 4, 8]));
    assert_eq!(*list.unwrap_success(), vec![2, 4, 8]);
}

#[rstest]
#[case::failure_at_start(vec![Outcome::failure(2), Outcome::success(4), Outcome::success(8)], 2)]
#[case::failure_in_middle(vec![Outcome::success(2), Outcome::failure(4), Outcome::success(8)], 4)]
#[case::failure_at_end(vec![Outcome::success(2), Outcome::success(4), Outcome::failure(8)], 8)]
#[case::only_failures(vec![Outcome::failure(2), Outcome::failure(4), Outcome::failure(8)], 2)]
fn list_reports_first_failure(#[case] source: Vec<Numeric>, #[case] expected: i32) {
    let list = to_list().collect(source);
    assert_eq!(list.unwrap_failure(), expected);
}

#[rstest]
fn list_drains_source_after_failure() {
    let evaluated = Cell::new(0);
    let supply = |outcome: Outcome<i32, &'static str>| {
        evaluated.set(evaluated.get() + 1);
        outcome
    };
    let source = vec![
        Outcome::success(1),
        Outcome::success(1),
        Outcome::failure("warning sign"),
        Outcome::success(1),
    ];
    let list = source.into_iter().map(supply).collect_outcomes(to_list());
    assert_eq!(list.unwrap_failure(), "warning sign");
    assert_eq!(evaluated.get(), 4);
}

#[rstest]
fn list_mutable_can_grow() {
    let mut list = successes(&[2, 4]).into_iter().collect_outcomes(to_mutable_list());
    assert!(list.matches_success(|list| list.len() == 2));
    list.if_success_mut(|list| list.push(7));
    assert!(list.matches_success(|list| list.len() == 3));
}

#[rstest]
fn list_frozen_copies_on_request() {
    let list = successes(&[2, 4]).into_iter().collect_outcomes(to_list());
    let frozen = list.unwrap_success();
    let mut copy = frozen.to_mutable();
    copy.push(7);
    assert_eq!(frozen.len(), 2);
    assert_eq!(copy, vec![2, 4, 7]);
}

#[rstest]
fn list_from_iterator_is_mutable() {
    let collected: Outcome<Vec<i32>, i32> = successes(&[1, 2]).into_iter().collect();
    let mut list = collected.unwrap_success();
    list.push(3);
    assert_eq!(list, vec![1, 2, 3]);
}

#[rstest]
fn list_from_iterator_drains_source() {
    let evaluated = Cell::new(0);
    let collected: Outcome<VecDeque<i32>, i32> = (0..5)
        .map(|number| {
            evaluated.set(evaluated.get() + 1);
            if number == 0 { Outcome::failure(number) } else { Outcome::success(number) }
        })
        .collect();
    assert_eq!(collected, Outcome::failure(0));
    assert_eq!(evaluated.get(), 5);
}

// =============================================================================
// Sets
// =============================================================================

#[rstest]
fn set_empty_source() {
    let set = to_set().collect(Vec::<Outcome<i32, String>>::new());
    assert!(set.unwrap_success().is_empty());
}

#[rstest]
fn set_multiple_successes() {
    let set = to_set().collect(successes(&[2, 4, 8, 4]));
    let expected: HashSet<i32> = [2, 4, 8].into_iter().collect();
    assert_eq!(*set.unwrap_success(), expected);
}

#[rstest]
fn set_contains_failure() {
    let set = to_set().collect(vec![Numeric::success(2), Numeric::failure(4), Numeric::success(8)]);
    assert_eq!(set.unwrap_failure(), 4);
}

#[rstest]
fn set_multiple_failures_reports_one_of_them() {
    let set = to_set().collect(vec![Numeric::failure(2), Numeric::failure(4), Numeric::failure(8)]);
    assert!([2, 4, 8].contains(&set.unwrap_failure()));
}

#[rstest]
fn set_mutable_can_grow() {
    let mut set = to_mutable_set().collect(successes(&[2, 4]));
    set.if_success_mut(|set| {
        set.insert(7);
    });
    assert!(set.matches_success(|set| set.len() == 3));
}

#[rstest]
fn ordered_set_keeps_insertion_order() {
    let set = to_ordered_set().collect(successes(&[2, 4, 8, 16, 32]));
    let order: Vec<i32> = set.unwrap_success().into_iter().collect();
    assert_eq!(order, vec![2, 4, 8, 16, 32]);
}

#[rstest]
fn mutable_ordered_set_can_grow() {
    let mut set = to_mutable_ordered_set().collect(successes(&[8, 2]));
    set.if_success_mut(|set| {
        set.insert(5);
    });
    let order: Vec<i32> = set.unwrap_success().into_iter().collect();
    assert_eq!(order, vec![8, 2, 5]);
}

#[rstest]
fn sorted_set_orders_by_value() {
    let set = to_sorted_set().collect(successes(&[8, 2, 4]));
    assert_eq!(set.unwrap_success().iter().copied().collect::<Vec<_>>(), vec![2, 4, 8]);
}

#[rstest]
fn unordered_characteristic() {
    assert!(!to_ordered_set::<i32>().characteristics().is_unordered());
    assert!(to_set::<i32>().characteristics().is_unordered());
    assert!(!collecting::<i32, Vec<i32>>().characteristics().is_unordered());
    assert!(collecting::<i32, BTreeSet<i32>>().characteristics().is_unordered());
}

// =============================================================================
// Reuse
// =============================================================================

#[rstest]
fn collector_is_reusable() {
    let collector = to_list();
    let first = collector.collect(successes(&[1]));
    let second = collector.collect(successes(&[2, 3]));
    assert_eq!(*first.unwrap_success(), vec![1]);
    assert_eq!(*second.unwrap_success(), vec![2, 3]);
}
