//! In-place structural helpers used to turn unsigned order into signed and float order.

const SIGN_BIT: u64 = 1 << 63;

/// Reverses `v[from..to]` in place.
///
/// Panics if the range is out of bounds.
pub fn reverse<T>(v: &mut [T], from: usize, to: usize) {
    let range = &mut v[from..to];
    let len = range.len();

    for i in 0..len / 2 {
        range.swap(i, len - 1 - i);
    }
}

/// Swaps the adjacent blocks `A = v[from..mid]` and `B = v[mid..to]`, so that afterwards `B`
/// starts at `from` and is followed by `A`. Both blocks keep their internal order.
///
/// Panics unless `from <= mid <= to <= v.len()`.
pub fn rotate_blocks<T>(v: &mut [T], from: usize, mid: usize, to: usize) {
    assert!(from <= mid && mid <= to, "rotation pivot {mid} outside of {from}..{to}");

    let len_b = to - mid;
    reverse(v, from, to);
    reverse(v, from, from + len_b);
    reverse(v, from + len_b, to);
}

/// Returns the index of the first key with the top bit set, or `v.len()` if there is none.
///
/// `v` must be in ascending unsigned order. All keys without the top bit then precede all keys
/// with it, which makes the split point a binary search away.
pub fn sign_boundary(v: &[u64]) -> usize {
    v.partition_point(|&key| key & SIGN_BIT == 0)
}
