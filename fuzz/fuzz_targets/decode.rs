#![no_main]

use libfuzzer_sys::fuzz_target;

use msgpack_classic::{decode_with_limits, encode, DecodeLimits, Decoded};

fn fuzz_limits(input_len: usize) -> DecodeLimits {
    // Keep limits tight enough to avoid pathological allocations while still exploring structure.
    DecodeLimits {
        max_depth: 64,
        max_bytes_len: input_len.min(1 << 20),
        max_array_len: 1 << 12,
        max_map_len: 1 << 12,
    }
}

fuzz_target!(|data: &[u8]| {
    let limits = fuzz_limits(data.len());
    if let Ok(Decoded::Complete(v, rest)) = decode_with_limits(data, limits) {
        assert!(rest.len() < data.len());

        // Second-generation byte stability: decode -> encode -> decode ->
        // encode must reach a fixpoint. Comparing bytes sidesteps NaN
        // equality.
        let bytes = encode(&v).expect("re-encode of decoded value");
        match decode_with_limits(&bytes, limits) {
            Ok(Decoded::Complete(v2, rest2)) => {
                assert!(rest2.is_empty());
                let bytes2 = encode(&v2).expect("re-encode of decoded value");
                assert_eq!(bytes, bytes2);
            }
            _ => panic!("re-encoded value failed to decode"),
        }
    }
});
