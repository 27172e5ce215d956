use crate::pair::Pair;

/// Turns a pair into a two element array, first component at index 0.
///
/// The target type plays the role of a common supertype: both components
/// must convert into it. An incompatible target is a compile error, not a
/// runtime failure.
pub fn to_array<C, F, S>(pair: Pair<F, S>) -> [C; 2]
where
    F: Into<C>,
    S: Into<C>,
{
    let (first, second) = pair.into_parts();
    [first.into(), second.into()]
}

/// Writes a pair into `target[offset]` and `target[offset + 1]`.
///
/// No bounds are checked here. A target shorter than `offset + 2` panics
/// through the slice indexing itself.
pub fn write_array<C, F, S>(pair: Pair<F, S>, target: &mut [C], offset: usize)
where
    F: Into<C>,
    S: Into<C>,
{
    let (first, second) = pair.into_parts();
    target[offset] = first.into();
    target[offset + 1] = second.into();
}

/// Collects pairs into a freshly constructed map, first components as keys
/// and second components as values. A later duplicate key overwrites the
/// earlier entry.
pub fn to_map<K, V, M, I>(pairs: I) -> M
where
    I: IntoIterator<Item = Pair<K, V>>,
    M: Default + Extend<(K, V)>,
{
    let mut map = M::default();
    extend_map(&mut map, pairs);
    map
}

/// Inserts pairs into an existing map, overwriting entries whose key is
/// already present.
pub fn extend_map<K, V, M, I>(map: &mut M, pairs: I)
where
    I: IntoIterator<Item = Pair<K, V>>,
    M: Extend<(K, V)>,
{
    map.extend(pairs.into_iter().map(Pair::into_parts));
}
