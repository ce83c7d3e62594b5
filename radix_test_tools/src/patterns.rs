use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking radix sorts.
/// Order patterns are generated as i32 and mapped into the key type by the caller, bit patterns
/// are generated directly as u64.

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (-(len as i32 / 2)..).take(len).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    let mut vals = ascending(len);
    vals.reverse();
    vals
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (chunk, direction) in vals.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    vals[..len / 2].sort();
    vals[len / 2..].sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Uniformly random 64-bit patterns. Reinterpreted as floats roughly half of them are negative
/// and about one in two thousand is a NaN.
pub fn random_bits(len: usize) -> Vec<u64> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<u64>()).collect()
}

/// Keys that only differ in byte `digit`, every other byte is shared. Exercises a single bucket
/// pass doing all the work while the others see one bucket.
pub fn random_in_digit(len: usize, digit: u32) -> Vec<u64> {
    let mut rng = new_rng();
    let shift = digit * 8;
    let base = rng.gen::<u64>() & !(0xff << shift);

    (0..len)
        .map(|_| base | ((rng.gen::<u8>() as u64) << shift))
        .collect()
}

/// `base` with `extra` values scattered over random positions.
pub fn sprinkle<T: Copy>(mut base: Vec<T>, extra: &[T]) -> Vec<T> {
    let mut rng = new_rng();
    for &val in extra {
        let pos = rng.gen_range(0..=base.len());
        base.insert(pos, val);
    }
    base
}

/// The seed all patterns of this process are derived from.
///
/// Random once per process, unless fixed via the `OVERRIDE_SEED` env var to reproduce a failure.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        env::var("OVERRIDE_SEED")
            .ok()
            .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
            .unwrap_or_else(|| thread_rng().gen())
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
