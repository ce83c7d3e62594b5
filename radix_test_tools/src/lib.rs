use std::fmt::Debug;

pub mod patterns;

#[doc(hidden)]
pub use paste;

/// A key type the test battery can generate, compare and reference sort.
pub trait TestKey: Copy + Debug {
    fn from_bits(bits: u64) -> Self;

    fn to_bits(self) -> u64;

    /// Maps a pattern value into the key type, preserving order.
    fn from_i32(val: i32) -> Self;

    /// Values at the edges of the key domain.
    fn edge_values() -> Vec<Self>;

    /// Comparison based sort producing the order expected from the radix sort.
    fn reference_sort(v: &mut [Self]);
}

impl TestKey for u64 {
    fn from_bits(bits: u64) -> Self {
        bits
    }

    fn to_bits(self) -> u64 {
        self
    }

    fn from_i32(val: i32) -> Self {
        // Spreads the value over the full 64 bit range.
        let x = ((val as i64) + (i32::MAX as i64) + 1) as u64;
        x * (i32::MAX as u64)
    }

    fn edge_values() -> Vec<Self> {
        vec![
            u64::MIN,
            1,
            0xff,
            0x100,
            (1 << 63) - 1,
            1 << 63,
            u64::MAX - 1,
            u64::MAX,
        ]
    }

    fn reference_sort(v: &mut [Self]) {
        v.sort_unstable();
    }
}

impl TestKey for i64 {
    fn from_bits(bits: u64) -> Self {
        bits as i64
    }

    fn to_bits(self) -> u64 {
        self as u64
    }

    fn from_i32(val: i32) -> Self {
        (val as i64) * (i32::MAX as i64)
    }

    fn edge_values() -> Vec<Self> {
        vec![
            i64::MIN,
            i64::MIN + 1,
            -256,
            -1,
            0,
            1,
            255,
            i64::MAX - 1,
            i64::MAX,
        ]
    }

    fn reference_sort(v: &mut [Self]) {
        v.sort_unstable();
    }
}

impl TestKey for f64 {
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    fn from_i32(val: i32) -> Self {
        val as f64 / 7.0
    }

    fn edge_values() -> Vec<Self> {
        vec![
            f64::from_bits(0xfff8_0000_0000_0000), // negative quiet NaN
            f64::from_bits(0xfff0_0000_0000_0001), // negative NaN, smallest payload
            f64::from_bits(0xffff_ffff_ffff_ffff),
            f64::NEG_INFINITY,
            f64::MIN,
            -1.0,
            -f64::MIN_POSITIVE,
            -f64::from_bits(1), // smallest negative subnormal
            -0.0,
            0.0,
            f64::from_bits(1),
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
            f64::from_bits(0x7ff0_0000_0000_0001),
            f64::from_bits(0x7ff8_0000_0000_0000), // positive quiet NaN
            f64::from_bits(0x7fff_ffff_ffff_ffff),
        ]
    }

    fn reference_sort(v: &mut [Self]) {
        v.sort_by(f64::total_cmp);
    }
}

/// A sort entry point under test.
pub trait Sort {
    type Key: TestKey;

    fn name() -> String;

    fn sort(v: &mut [Self::Key]);
}
