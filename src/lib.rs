//! Linear time LSD radix sort for 64-bit keys: `u64`, `i64` and `f64`.
//!
//! All keys are sorted by their raw bit pattern with eight stable byte-wise counting passes. For
//! signed integers and floats a cheap O(*n*) fix-up afterwards turns the unsigned bit order into
//! the order of the interpreted values.
//!
//! ```
//! let mut v = [3i64, -1, 0, -5, 2];
//! rsort64::sort_i64(&mut v);
//! assert_eq!(v, [-5, -1, 0, 2, 3]);
//!
//! let mut v = [1.5, -0.0, f64::NAN, -1.5];
//! rsort64::sort_f64(&mut v);
//! assert_eq!(&v[..3], &[-1.5, -0.0, 1.5]);
//! assert!(v[3].is_nan());
//! ```
//!
//! Floats end up in the order of [`f64::total_cmp`]: NaNs with the sign bit set come first, NaNs
//! without it last, and `-0.0` sorts right before `+0.0`.

pub mod bucket;
pub mod error;
pub mod float;
pub mod key;
pub mod seq;
pub mod signed;
pub mod unsigned;
pub mod word;

pub use error::SortError;
pub use key::{KeyKind, RadixKey};

/// Sorts `v` in ascending order.
///
/// This sort needs a scratch buffer as large as `v` and panics if it can't be allocated, see
/// [`try_sort`] for the fallible variant.
pub fn sort<K: RadixKey>(v: &mut [K]) {
    if let Err(err) = try_sort(v) {
        log::error!("radix sort of {} {} keys aborted: {err}", v.len(), K::KIND);
        panic!("{err}");
    }
}

/// Sorts `v` in ascending order, or returns why it could not.
///
/// On error `v` is left unmodified.
pub fn try_sort<K: RadixKey>(v: &mut [K]) -> Result<(), SortError> {
    log::trace!("radix sorting {} {} keys", v.len(), K::KIND);

    let bits: &mut [u64] = bytemuck::cast_slice_mut(v);
    word::try_sort(bits)?;
    K::KIND.restore_order(bits);

    Ok(())
}

/// Sorts the `n` keys of `v`, rejecting the call if `v` does not hold exactly `n` keys.
pub fn try_sort_len<K: RadixKey>(n: usize, v: &mut [K]) -> Result<(), SortError> {
    if n != v.len() {
        return Err(SortError::LengthMismatch {
            expected: n,
            actual: v.len(),
        });
    }

    try_sort(v)
}

/// Returns `true` if `v` is in the order the sort produces for its key type.
pub fn is_sorted<K: RadixKey>(v: &[K]) -> bool {
    v.windows(2).all(|w| w[0].order_key() <= w[1].order_key())
}

/// Sorts `v` by ascending unsigned value.
#[inline]
pub fn sort_u64(v: &mut [u64]) {
    unsigned::sort(v);
}

/// Sorts `v` by ascending signed value.
#[inline]
pub fn sort_i64(v: &mut [i64]) {
    signed::sort(v);
}

/// Sorts `v` by ascending value, negative NaNs first and positive NaNs last.
#[inline]
pub fn sort_f64(v: &mut [f64]) {
    float::sort(v);
}
