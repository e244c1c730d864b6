//! Truncation safety: every strict prefix of an encoded value must report
//! `Incomplete`, and the full buffer must decode to the original value with
//! an empty remainder.

use msgpack_classic::{decode, encode, value, Decoded, Value};

fn assert_truncation_safe(value: &Value) {
    let bytes = encode(value).unwrap();
    for cut in 0..bytes.len() {
        match decode(&bytes[..cut]).unwrap() {
            Decoded::Incomplete => {}
            Decoded::Complete(v, _) => {
                panic!("prefix of {cut}/{} bytes decoded to {v:?}", bytes.len())
            }
        }
    }
    match decode(&bytes).unwrap() {
        Decoded::Complete(v, rest) => {
            assert_eq!(&v, value);
            assert!(rest.is_empty());
        }
        Decoded::Incomplete => panic!("full buffer reported incomplete"),
    }
}

#[test]
fn scalar_prefixes_are_incomplete() {
    assert_truncation_safe(&Value::UInt(65_536));
    assert_truncation_safe(&Value::UInt(u64::MAX));
    assert_truncation_safe(&Value::Int(-33));
    assert_truncation_safe(&Value::Int(i64::MIN));
    assert_truncation_safe(&Value::Float(6.022e23));
}

#[test]
fn raw_prefixes_are_incomplete() {
    assert_truncation_safe(&Value::Bytes(b"ham".to_vec()));
    assert_truncation_safe(&Value::Bytes(vec![0x11; 300]));
}

#[test]
fn int_sequence_array_prefixes_are_incomplete() {
    let items = (0..=45u64).map(Value::UInt).collect::<Vec<_>>();
    assert_truncation_safe(&Value::Array(items));
}

#[test]
fn map_vector_prefixes_are_incomplete() {
    assert_truncation_safe(&value!({
        1 => 2,
        2 => 4,
        "hage" => 324,
        43542 => [nil, true, false],
    }));
}

#[test]
fn nested_container_prefixes_are_incomplete() {
    assert_truncation_safe(&value!([
        [nil, [true, [false, ["deep"]]]],
        { "k" => { 7 => [1, 2, 3] } },
        (-65_537),
    ]));
}

#[test]
fn wide_container_prefixes_are_incomplete() {
    // array16 and map16 headers split across the truncation point.
    let items = vec![Value::UInt(7); 20];
    assert_truncation_safe(&Value::Array(items));

    let entries = (0..20u64)
        .map(|i| (Value::UInt(i), Value::Bytes(b"v".to_vec())))
        .collect::<Vec<_>>();
    assert_truncation_safe(&Value::Map(entries));
}

#[test]
fn raw32_header_prefixes_are_incomplete() {
    // Targeted prefixes of a raw32 value; the full sweep would be slow.
    let payload = vec![0x2au8; 70_000];
    let mut bytes = vec![0xdb];
    bytes.extend_from_slice(&70_000u32.to_be_bytes());
    bytes.extend_from_slice(&payload);

    for cut in [0, 1, 3, 5, 6, 35_000, 70_004] {
        assert_eq!(decode(&bytes[..cut]).unwrap(), Decoded::Incomplete);
    }
    match decode(&bytes).unwrap() {
        Decoded::Complete(v, rest) => {
            assert_eq!(v, Value::Bytes(payload));
            assert!(rest.is_empty());
        }
        Decoded::Incomplete => panic!("full buffer reported incomplete"),
    }
}

#[test]
fn appending_bytes_completes_the_value() {
    // The buffering loop a transport caller runs: feed one byte at a time
    // until the decoder reports a complete value.
    let target = value!({ "seq" => 1, "body" => [1, 2, 3] });
    let bytes = encode(&target).unwrap();

    let mut buffer = Vec::new();
    let mut decoded = None;
    for byte in &bytes {
        buffer.push(*byte);
        match decode(&buffer).unwrap() {
            Decoded::Incomplete => {}
            Decoded::Complete(v, rest) => {
                decoded = Some((v, rest.len()));
                break;
            }
        }
    }
    assert_eq!(decoded, Some((target, 0)));
}
