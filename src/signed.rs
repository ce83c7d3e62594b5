//! Sorting `i64` keys.
//!
//! In unsigned order the non-negative values come first, followed by the negative ones. Two's
//! complement keeps the negatives ascending among themselves, so moving that block to the front
//! is all that is left to do.

use crate::error::SortError;
use crate::seq::{rotate_blocks, sign_boundary};

/// Sorts `v` in ascending order.
#[inline]
pub fn sort(v: &mut [i64]) {
    crate::sort(v);
}

/// Sorts `v` in ascending order, reporting allocation failure instead of panicking.
#[inline]
pub fn try_sort(v: &mut [i64]) -> Result<(), SortError> {
    crate::try_sort(v)
}

/// Turns bit patterns in ascending unsigned order into ascending signed order.
pub(crate) fn restore_order(bits: &mut [u64]) {
    let boundary = sign_boundary(bits);
    rotate_blocks(bits, 0, boundary, bits.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_negatives_to_front() {
        let mut bits = [0, 2, 3, (-5i64) as u64, (-1i64) as u64];
        restore_order(&mut bits);
        assert_eq!(bits.map(|b| b as i64), [-5, -1, 0, 2, 3]);
    }

    #[test]
    fn single_sign() {
        let mut bits = [1, 2, 3];
        restore_order(&mut bits);
        assert_eq!(bits, [1, 2, 3]);

        let mut bits = [(-3i64) as u64, (-2i64) as u64];
        restore_order(&mut bits);
        assert_eq!(bits.map(|b| b as i64), [-3, -2]);
    }
}
