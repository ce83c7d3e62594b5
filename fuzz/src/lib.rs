use radix_test_tools::TestKey;

/// Interprets every full 8 byte chunk of `data` as a little endian key, trailing bytes are
/// ignored.
pub fn u8_as_keys<K: TestKey>(data: &[u8]) -> Vec<K> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            K::from_bits(u64::from_le_bytes(bytes))
        })
        .collect()
}

/// Sorts the keys decoded from `data` with `sort` and checks the result against the reference
/// sort, bit for bit.
pub fn check_sort<K: TestKey>(data: &[u8], sort: fn(&mut [K])) {
    let mut v = u8_as_keys::<K>(data);
    let mut expected = v.clone();

    K::reference_sort(&mut expected);
    sort(&mut v);

    let got_bits = v.iter().map(|k| k.to_bits());
    let expected_bits = expected.iter().map(|k| k.to_bits());
    assert!(got_bits.eq(expected_bits), "expected {expected:?}, got {v:?}");
}
