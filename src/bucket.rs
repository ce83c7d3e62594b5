//! One stable counting sort pass over a single byte of every key.

/// Width of a digit in bits.
pub const DIGIT_BITS: u32 = 8;

/// Number of distinct digit values, and thus entries in a [`BucketTable`].
pub const BUCKETS: usize = 1 << DIGIT_BITS;

/// Number of digits in a 64-bit key.
pub const DIGITS: u32 = u64::BITS / DIGIT_BITS;

const DIGIT_MASK: u64 = (BUCKETS - 1) as u64;

/// Extracts digit `index` of `key`, digit 0 being the least significant byte.
#[inline(always)]
pub fn digit(key: u64, index: u32) -> usize {
    ((key >> (index * DIGIT_BITS)) & DIGIT_MASK) as usize
}

/// Per digit value counts, turned into output offsets in place.
///
/// The table is reused across all passes of a sort. Every pass zeroes it before counting, after a
/// pass it holds the *end* offset of every bucket, not a count.
#[derive(Clone)]
pub struct BucketTable {
    slots: [usize; BUCKETS],
}

impl BucketTable {
    pub fn new() -> Self {
        Self {
            slots: [0; BUCKETS],
        }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    fn count(&mut self, src: &[u64], index: u32) {
        self.slots.fill(0);

        for &key in src {
            self.slots[digit(key, index)] += 1;
        }
    }

    // Exclusive prefix sum, afterwards slot `d` is where the first key with digit `d` goes.
    fn accumulate_offsets(&mut self) {
        let mut acc = 0;
        for slot in self.slots.iter_mut() {
            let count = *slot;
            *slot = acc;
            acc += count;
        }
    }
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the keys of `src` into `dst`, ordered by ascending digit `index`.
///
/// Keys with equal digit keep the relative order they had in `src`. The multi pass driver relies
/// on that, it is what lets independently sorted bytes add up to a fully sorted 64-bit key.
///
/// Panics if `src` and `dst` differ in length or `index` is not a valid digit index.
pub fn bucket_pass(src: &[u64], dst: &mut [u64], index: u32, table: &mut BucketTable) {
    assert_eq!(src.len(), dst.len(), "bucket pass buffers differ in length");
    assert!(index < DIGITS, "digit index {index} out of range");

    table.count(src, index);
    table.accumulate_offsets();

    for &key in src {
        let slot = &mut table.slots[digit(key, index)];
        dst[*slot] = key;
        *slot += 1;
    }
}
