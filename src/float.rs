//! Sorting `f64` keys.
//!
//! In unsigned order the positive sign bit patterns come first, ascending by magnitude and thus by
//! value, ending with the positive NaNs. Then follow the negative sign bit patterns, also ascending
//! by magnitude which makes them descending by value, ending with the negative NaNs. Moving that
//! second block to the front and reversing it yields: negative NaNs, negative values up to `-0.0`,
//! `+0.0` and positive values, positive NaNs.
//!
//! This coincides with [`f64::total_cmp`], `-0.0` always lands right before `+0.0`.

use crate::error::SortError;
use crate::seq::{reverse, rotate_blocks, sign_boundary};

/// Sorts `v` in ascending order, see the module docs for the placement of NaNs and zeros.
#[inline]
pub fn sort(v: &mut [f64]) {
    crate::sort(v);
}

/// Sorts `v` in ascending order, reporting allocation failure instead of panicking.
#[inline]
pub fn try_sort(v: &mut [f64]) -> Result<(), SortError> {
    crate::try_sort(v)
}

/// Turns bit patterns in ascending unsigned order into ascending float order.
pub(crate) fn restore_order(bits: &mut [u64]) {
    let len = bits.len();
    let boundary = sign_boundary(bits);
    let negative_len = len - boundary;

    rotate_blocks(bits, 0, boundary, len);
    reverse(bits, 0, negative_len);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of(v: &[f64]) -> Vec<u64> {
        v.iter().map(|x| x.to_bits()).collect()
    }

    #[test]
    fn negatives_reversed_to_front() {
        // Already in unsigned bit order.
        let mut bits = bits_of(&[0.0, 1.5, f64::INFINITY, -0.0, -1.5, f64::NEG_INFINITY]);
        restore_order(&mut bits);

        assert_eq!(
            bits,
            bits_of(&[f64::NEG_INFINITY, -1.5, -0.0, 0.0, 1.5, f64::INFINITY])
        );
    }

    #[test]
    fn only_negatives() {
        let mut bits = bits_of(&[-1.0, -2.0, -3.0]);
        restore_order(&mut bits);
        assert_eq!(bits, bits_of(&[-3.0, -2.0, -1.0]));
    }
}
