// Property-based tests for classic MessagePack roundtrips.
//
// These tests are intentionally conservative in size/depth to keep CI fast.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use proptest::prelude::*;

use msgpack_classic::{decode, decode_all, encode, Decoded, Value};

/// Negative integers drawn from the width-preserving bands only: values in
/// the truncation bands of the legacy signed forms change under encode and
/// are pinned by dedicated vector tests instead.
fn arb_negative() -> impl Strategy<Value = i64> {
    prop_oneof![
        -32_i64..=-1,
        -128_i64..=-33,
        -32_768_i64..=-257,
        -2_147_483_648_i64..=-65_537,
        i64::MIN..=-4_294_967_296,
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<u64>().prop_map(Value::UInt),
        arb_negative().prop_map(Value::Int),
        any::<f64>()
            .prop_filter("NaN never compares equal", |f| !f.is_nan())
            .prop_map(Value::Float),
        proptest::collection::vec(any::<u8>(), 0..48).prop_map(Value::Bytes),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            proptest::collection::vec((inner.clone(), inner), 0..8).prop_map(Value::Map),
        ]
    })
}

proptest! {
    #[test]
    fn roundtrip(v in arb_value()) {
        let bytes = encode(&v).unwrap();
        match decode(&bytes).unwrap() {
            Decoded::Complete(decoded, rest) => {
                prop_assert_eq!(decoded, v);
                prop_assert!(rest.is_empty());
            }
            Decoded::Incomplete => prop_assert!(false, "complete buffer reported incomplete"),
        }
    }

    #[test]
    fn strict_prefixes_are_incomplete(v in arb_value()) {
        let bytes = encode(&v).unwrap();
        for cut in 0..bytes.len() {
            prop_assert_eq!(decode(&bytes[..cut]).unwrap(), Decoded::Incomplete);
        }
    }

    #[test]
    fn reencode_of_decoded_value_is_stable(v in arb_value()) {
        let bytes = encode(&v).unwrap();
        let Decoded::Complete(decoded, _) = decode(&bytes).unwrap() else {
            return Err(TestCaseError::fail("complete buffer reported incomplete"));
        };
        prop_assert_eq!(encode(&decoded).unwrap(), bytes);
    }

    #[test]
    fn stream_concat_splits_back(values in proptest::collection::vec(arb_value(), 0..4)) {
        let mut buf = Vec::new();
        for v in &values {
            buf.extend_from_slice(&encode(v).unwrap());
        }
        prop_assert_eq!(decode_all(&buf).unwrap(), values);
    }
}
