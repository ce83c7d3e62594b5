//! LSD radix sort of 64-bit words by their unsigned value.

use std::mem;

use crate::bucket::{bucket_pass, BucketTable, DIGITS};
use crate::error::SortError;

/// Number of bucket passes over a key.
pub const PASSES: u32 = DIGITS;

// Every pass moves the keys to the other buffer. With an even number of passes the last one
// writes into the caller's slice, anything else would need a final copy back.
const _: () = assert!(PASSES % 2 == 0);

/// Sorts `v` in ascending unsigned order.
///
/// Returns [`SortError::ScratchAlloc`] if the scratch buffer can't be allocated, in which case `v`
/// is left untouched.
pub fn try_sort(v: &mut [u64]) -> Result<(), SortError> {
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    let mut scratch = Vec::new();
    scratch
        .try_reserve_exact(len)
        .map_err(|source| SortError::ScratchAlloc { len, source })?;
    scratch.resize(len, 0);

    let mut table = BucketTable::new();

    let mut src = v;
    let mut dst = scratch.as_mut_slice();
    for index in 0..PASSES {
        bucket_pass(src, dst, index, &mut table);
        mem::swap(&mut src, &mut dst);
    }

    Ok(())
}

/// Sorts `v` in ascending unsigned order, panicking if the scratch buffer can't be allocated.
pub fn sort(v: &mut [u64]) {
    if let Err(err) = try_sort(v) {
        log::error!("radix sort aborted: {err}");
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::prelude::*;

    #[test]
    fn trivial_inputs() {
        let mut empty: [u64; 0] = [];
        sort(&mut empty);

        let mut single = [42];
        sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn byte_boundaries() {
        let mut v = [
            u64::MAX,
            1 << 56,
            0xff,
            0x100,
            0,
            1 << 63,
            (1 << 56) - 1,
            0x100,
        ];
        sort(&mut v);
        assert_eq!(
            v,
            [
                0,
                0xff,
                0x100,
                0x100,
                (1 << 56) - 1,
                1 << 56,
                1 << 63,
                u64::MAX
            ]
        );
    }

    #[test]
    fn matches_sort_unstable() {
        let mut rng = StdRng::seed_from_u64(0xdec0de);

        for len in [2, 3, 10, 255, 256, 257, 5_000] {
            let mut v: Vec<u64> = (0..len).map(|_| rng.gen()).collect();
            let mut expected = v.clone();
            expected.sort_unstable();

            try_sort(&mut v).unwrap();
            assert_eq!(v, expected);
        }
    }
}
