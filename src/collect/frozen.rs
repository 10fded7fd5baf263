//! Read-only view over a finished collection.

use std::fmt;
use std::ops::Deref;

/// A collection handed out read-only.
///
/// `Frozen<C>` dereferences to `&C`, so every query method of the inner
/// collection is available, but there is no mutable access. Use
/// [`to_mutable`](Frozen::to_mutable) to get an independent copy that can be
/// changed.
///
/// # Examples
///
/// ```rust
/// use twofold::Outcome;
/// use twofold::collect::{CollectOutcomes, to_list};
///
/// let outcomes = vec![Outcome::<i32, &str>::success(2), Outcome::success(4)];
/// let list = outcomes.into_iter().collect_outcomes(to_list()).unwrap_success();
/// assert_eq!(list.len(), 2);
/// assert_eq!(*list, vec![2, 4]);
///
/// let mut copy = list.to_mutable();
/// copy.push(7);
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Frozen<C>(C);

impl<C> Frozen<C> {
    #[inline]
    pub(crate) const fn new(collection: C) -> Self {
        Self(collection)
    }

    /// Returns a mutable copy of the frozen collection.
    #[inline]
    pub fn to_mutable(&self) -> C
    where
        C: Clone,
    {
        self.0.clone()
    }
}

impl<C> Deref for Frozen<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.0
    }
}

impl<C> AsRef<C> for Frozen<C> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.0
    }
}

impl<C: fmt::Debug> fmt::Debug for Frozen<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(formatter)
    }
}

impl<C: IntoIterator> IntoIterator for Frozen<C> {
    type Item = C::Item;
    type IntoIter = C::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Frozen<C>
where
    &'a C: IntoIterator,
{
    type Item = <&'a C as IntoIterator>::Item;
    type IntoIter = <&'a C as IntoIterator>::IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        (&self.0).into_iter()
    }
}

static_assertions::assert_not_impl_any!(Frozen<Vec<i32>>: std::ops::DerefMut, AsMut<Vec<i32>>);
static_assertions::assert_impl_all!(Frozen<Vec<i32>>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_read_access_through_deref() {
        let frozen = Frozen::new(vec![1, 2, 3]);
        assert_eq!(frozen.len(), 3);
        assert!(frozen.contains(&2));
        assert_eq!(frozen.iter().sum::<i32>(), 6);
    }

    #[rstest]
    fn test_to_mutable_is_independent() {
        let frozen = Frozen::new(vec![1]);
        let mut copy = frozen.to_mutable();
        copy.push(2);
        assert_eq!(*frozen, vec![1]);
        assert_eq!(copy, vec![1, 2]);
    }

    #[rstest]
    fn test_debug_is_transparent() {
        assert_eq!(format!("{:?}", Frozen::new(vec![1, 2])), "[1, 2]");
    }

    #[rstest]
    fn test_borrowed_iteration() {
        let frozen = Frozen::new(vec!["a", "b"]);
        let joined: Vec<&&str> = (&frozen).into_iter().collect();
        assert_eq!(joined, vec![&"a", &"b"]);
    }
}
