use std::cmp::Ordering;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cmp;

/// An immutable pair of a first (left) and a second (right) component.
///
/// Capabilities follow the component types: the pair is clonable,
/// orderable, hashable and serializable exactly when both components are.
/// Hashing feeds the first component into the hasher before the second.
/// Replacing a component goes through [`Pair::with_first`] and
/// [`Pair::with_second`], which build a new pair instead of mutating.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Hash)]
pub struct Pair<F, S> {
    first: F,
    second: S,
}

impl<F, S> Pair<F, S> {
    #[inline]
    pub fn new(first: F, second: S) -> Self {
        Self { first, second }
    }

    #[inline]
    pub fn first(&self) -> &F {
        &self.first
    }

    #[inline]
    pub fn second(&self) -> &S {
        &self.second
    }

    #[inline]
    pub fn into_first(self) -> F {
        self.first
    }

    #[inline]
    pub fn into_second(self) -> S {
        self.second
    }

    #[inline]
    pub fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }

    /// Returns a new pair with the first component replaced and the second
    /// carried over.
    #[inline]
    pub fn with_first<T>(self, first: T) -> Pair<T, S> {
        Pair::new(first, self.second)
    }

    /// Returns a new pair with the second component replaced and the first
    /// carried over.
    #[inline]
    pub fn with_second<T>(self, second: T) -> Pair<F, T> {
        Pair::new(self.first, second)
    }
}

impl<F, S> Pair<F, S>
where
    F: Ord,
    S: Ord,
{
    /// Like [`Pair::new`], but the bounds assert at the construction site
    /// that the pair carries a total order.
    #[inline]
    pub fn from_comparables(first: F, second: S) -> Self {
        Self::new(first, second)
    }
}

impl<F, S> Pair<F, S>
where
    F: Serialize + DeserializeOwned,
    S: Serialize + DeserializeOwned,
{
    /// Like [`Pair::new`], but the bounds assert at the construction site
    /// that the pair can be written and read back through [`crate::deser`].
    #[inline]
    pub fn from_serializables(first: F, second: S) -> Self {
        Self::new(first, second)
    }
}

impl<F, S> Pair<F, S>
where
    F: Ord + Serialize + DeserializeOwned,
    S: Ord + Serialize + DeserializeOwned,
{
    /// Both [`Pair::from_comparables`] and [`Pair::from_serializables`]
    /// in one factory.
    #[inline]
    pub fn from_comparable_serializables(first: F, second: S) -> Self {
        Self::new(first, second)
    }
}

/// Structural equality: component against component, regardless of where
/// either pair came from. The component types of the two sides may differ
/// as long as they compare, so a `Pair<String, _>` equals a `Pair<&str, _>`
/// with the same content. Anything that is not pair or tuple shaped does
/// not compare at all.
impl<F, S, F2, S2> PartialEq<Pair<F2, S2>> for Pair<F, S>
where
    F: PartialEq<F2>,
    S: PartialEq<S2>,
{
    #[inline]
    fn eq(&self, other: &Pair<F2, S2>) -> bool {
        cmp::equals(
            Some(&self.first),
            Some(&self.second),
            Some(&other.first),
            Some(&other.second),
        )
    }
}

impl<F, S, F2, S2> PartialEq<(F2, S2)> for Pair<F, S>
where
    F: PartialEq<F2>,
    S: PartialEq<S2>,
{
    #[inline]
    fn eq(&self, other: &(F2, S2)) -> bool {
        self.first == other.0 && self.second == other.1
    }
}

impl<F: Eq, S: Eq> Eq for Pair<F, S> {}

impl<F, S> PartialOrd for Pair<F, S>
where
    F: PartialOrd,
    S: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.first.partial_cmp(&other.first) {
            Some(Ordering::Equal) => self.second.partial_cmp(&other.second),
            unequal => unequal,
        }
    }
}

impl<F, S> Ord for Pair<F, S>
where
    F: Ord,
    S: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        cmp::compare_pairs(self, other)
    }
}

impl<F, S> From<(F, S)> for Pair<F, S> {
    #[inline]
    fn from((first, second): (F, S)) -> Self {
        Self::new(first, second)
    }
}

impl<F, S> From<Pair<F, S>> for (F, S) {
    #[inline]
    fn from(pair: Pair<F, S>) -> Self {
        pair.into_parts()
    }
}
