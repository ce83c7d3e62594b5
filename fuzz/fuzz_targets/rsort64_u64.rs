#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    rsort64_fuzz::check_sort::<u64>(data, rsort64::sort_u64);
});
