#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    rsort64_fuzz::check_sort::<i64>(data, rsort64::sort_i64);
});
