#![no_main]

use libfuzzer_sys::fuzz_target;

use msgpack_classic::{decode_all_with_limits, encode_into, DecodeLimits};

fn fuzz_limits(input_len: usize) -> DecodeLimits {
    DecodeLimits {
        max_depth: 64,
        max_bytes_len: input_len.min(1 << 20),
        max_array_len: 1 << 12,
        max_map_len: 1 << 12,
    }
}

fuzz_target!(|data: &[u8]| {
    let limits = fuzz_limits(data.len());
    if let Ok(values) = decode_all_with_limits(data, limits) {
        // Re-encoding the split sequence and splitting again must be stable.
        let mut buf = Vec::new();
        for v in &values {
            encode_into(v, &mut buf).expect("re-encode of decoded value");
        }
        let again = decode_all_with_limits(&buf, limits).expect("re-split of re-encoded buffer");
        assert_eq!(again.len(), values.len());

        let mut buf2 = Vec::new();
        for v in &again {
            encode_into(v, &mut buf2).expect("re-encode of re-split value");
        }
        assert_eq!(buf, buf2);
    }
});
