//! The key types the radix sort understands and how their bits map to their order.

use std::fmt;

use crate::{float, signed};

const SIGN_BIT: u64 = 1 << 63;

/// How a 64-bit pattern is interpreted, which decides the fix-up applied after the unsigned sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Unsigned,
    Signed,
    Float,
}

impl KeyKind {
    /// Turns bits in ascending unsigned order into ascending order under this interpretation.
    pub fn restore_order(self, bits: &mut [u64]) {
        match self {
            KeyKind::Unsigned => {}
            KeyKind::Signed => signed::restore_order(bits),
            KeyKind::Float => float::restore_order(bits),
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyKind::Unsigned => "u64",
            KeyKind::Signed => "i64",
            KeyKind::Float => "f64",
        };
        f.write_str(name)
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A 64-bit key that can be radix sorted.
///
/// Implemented for `u64`, `i64` and `f64`. The `Pod` bound is what allows a slice of keys to be
/// viewed as a slice of `u64` bit patterns without copying.
pub trait RadixKey: bytemuck::Pod + private::Sealed {
    const KIND: KeyKind;

    /// The raw bit pattern.
    fn to_bits(self) -> u64;

    /// A value whose unsigned order is the order the sort produces for `Self`.
    fn order_key(self) -> u64;
}

impl RadixKey for u64 {
    const KIND: KeyKind = KeyKind::Unsigned;

    #[inline]
    fn to_bits(self) -> u64 {
        self
    }

    #[inline]
    fn order_key(self) -> u64 {
        self
    }
}

impl RadixKey for i64 {
    const KIND: KeyKind = KeyKind::Signed;

    #[inline]
    fn to_bits(self) -> u64 {
        self as u64
    }

    #[inline]
    fn order_key(self) -> u64 {
        (self as u64) ^ SIGN_BIT
    }
}

impl RadixKey for f64 {
    const KIND: KeyKind = KeyKind::Float;

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    // Negative values order by descending magnitude, so all their bits get flipped. Positive
    // values only need to move above the negatives.
    #[inline]
    fn order_key(self) -> u64 {
        let bits = f64::to_bits(self);
        if bits & SIGN_BIT != 0 {
            !bits
        } else {
            bits | SIGN_BIT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_order_key_is_monotonic() {
        let vals = [i64::MIN, i64::MIN + 1, -2, -1, 0, 1, i64::MAX - 1, i64::MAX];
        assert!(vals.windows(2).all(|w| w[0].order_key() < w[1].order_key()));
    }

    #[test]
    fn float_order_key_is_monotonic() {
        let neg_nan = f64::from_bits(0xfff8_0000_0000_0000);
        let pos_nan = f64::from_bits(0x7ff8_0000_0000_0000);
        let vals = [
            neg_nan,
            f64::NEG_INFINITY,
            f64::MIN,
            -1.5,
            -f64::MIN_POSITIVE,
            -0.0,
            0.0,
            f64::MIN_POSITIVE,
            1.5,
            f64::MAX,
            f64::INFINITY,
            pos_nan,
        ];
        assert!(vals.windows(2).all(|w| w[0].order_key() < w[1].order_key()));
    }

    #[test]
    fn display() {
        assert_eq!(KeyKind::Unsigned.to_string(), "u64");
        assert_eq!(KeyKind::Signed.to_string(), "i64");
        assert_eq!(KeyKind::Float.to_string(), "f64");
    }
}
