//! Target collections for outcome aggregation.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexSet;

/// A collection the aggregation engine can fill and merge.
///
/// Merging appends the right partial container to the left one, so
/// containers that keep insertion order keep it across parallel segments.
///
/// `UNORDERED` marks containers whose contents do not depend on the order
/// elements arrive in; the reduction may then be scheduled in any order.
pub trait Container<T>: Default + Extend<T> + IntoIterator<Item = T> {
    /// `true` if processing order cannot affect the finished container.
    const UNORDERED: bool;
}

impl<T> Container<T> for Vec<T> {
    const UNORDERED: bool = false;
}

impl<T> Container<T> for VecDeque<T> {
    const UNORDERED: bool = false;
}

impl<T, S> Container<T> for IndexSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    const UNORDERED: bool = false;
}

impl<T, S> Container<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    const UNORDERED: bool = true;
}

impl<T: Ord> Container<T> for BTreeSet<T> {
    const UNORDERED: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_order_flags() {
        assert!(!<Vec<i32> as Container<i32>>::UNORDERED);
        assert!(!<VecDeque<i32> as Container<i32>>::UNORDERED);
        assert!(!<IndexSet<i32> as Container<i32>>::UNORDERED);
        assert!(<HashSet<i32> as Container<i32>>::UNORDERED);
        assert!(<BTreeSet<i32> as Container<i32>>::UNORDERED);
    }
}
