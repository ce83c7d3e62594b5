//! Sorting `u64` keys, the unsigned order is what the word sort produces directly.

use crate::error::SortError;
use crate::word;

/// Sorts `v` in ascending order.
#[inline]
pub fn sort(v: &mut [u64]) {
    word::sort(v);
}

/// Sorts `v` in ascending order, reporting allocation failure instead of panicking.
#[inline]
pub fn try_sort(v: &mut [u64]) -> Result<(), SortError> {
    word::try_sort(v)
}
