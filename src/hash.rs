use std::hash::{Hash, Hasher};

use crate::pair::Pair;

/// Multiplier of the hash code accumulation.
pub const MULTIPLIER: u64 = 31;

const FNV_OFFSET: u64 = 14695981039346656037;
const FNV_PRIME: u64 = 1099511628211;

/// FNV-1a over the bytes a [`Hash`] implementation feeds in.
///
/// Deterministic, so pair hash codes don't depend on the randomized state
/// of std's default hasher.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher(u64);

impl Default for FnvHasher {
    #[inline]
    fn default() -> Self {
        FnvHasher(FNV_OFFSET)
    }
}

impl Hasher for FnvHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes
            .iter()
            .fold(self.0, |h, b| (h ^ (*b as u64)).wrapping_mul(FNV_PRIME));
    }
}

/// Hash code of a single component. An absent component contributes 0.
#[inline]
pub fn component<T: Hash>(value: Option<&T>) -> u64 {
    match value {
        Some(value) => {
            let mut hasher = FnvHasher::default();
            value.hash(&mut hasher);
            hasher.finish()
        }
        None => 0,
    }
}

/// One accumulation step: `MULTIPLIER * code + component`, wrapping.
#[inline]
pub fn combine(code: u64, component: u64) -> u64 {
    code.wrapping_mul(MULTIPLIER).wrapping_add(component)
}

/// Hash code over loose components, accumulated first then second from
/// seed 1.
pub fn code<F: Hash, S: Hash>(first: Option<&F>, second: Option<&S>) -> u64 {
    combine(combine(1, component(first)), component(second))
}

/// Hash code of a pair. An absent pair hashes to 0.
pub fn pair_code<F: Hash, S: Hash>(pair: Option<&Pair<F, S>>) -> u64 {
    match pair {
        Some(pair) => code(Some(pair.first()), Some(pair.second())),
        None => 0,
    }
}
