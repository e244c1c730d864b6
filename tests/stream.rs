use msgpack_classic::{
    decode_all, decode_all_with_limits, encode, value, DecodeLimits, ErrorCode, Value,
};

#[test]
fn splits_concatenated_values() {
    let a = value!({ "hello" => [1, 2, 3] });
    let b = Value::Bytes(vec![0x00; 300]);
    let c = Value::Int(-1);

    let mut buf = encode(&a).unwrap();
    buf.extend_from_slice(&encode(&b).unwrap());
    buf.extend_from_slice(&encode(&c).unwrap());

    assert_eq!(decode_all(&buf).unwrap(), vec![a, b, c]);
}

#[test]
fn empty_buffer_yields_empty_sequence() {
    assert_eq!(decode_all(&[]).unwrap(), Vec::<Value>::new());
}

#[test]
fn truncated_tail_is_a_contract_violation() {
    let a = value!([nil, true]);
    let b = Value::UInt(65_536);

    let prefix = encode(&a).unwrap();
    let mut buf = prefix.clone();
    buf.extend_from_slice(&encode(&b).unwrap());
    buf.pop();

    // The error points at the offset where the partial value began.
    let err = decode_all(&buf).unwrap_err();
    assert_eq!(err.code, ErrorCode::UnexpectedEof);
    assert_eq!(err.offset, prefix.len());
}

#[test]
fn malformed_tail_propagates_with_absolute_offset() {
    let a = Value::UInt(9);
    let mut buf = encode(&a).unwrap();
    buf.push(0x91);
    buf.push(0xc1);

    let err = decode_all(&buf).unwrap_err();
    assert_eq!(err.code, ErrorCode::ReservedTag(0xc1));
    assert_eq!(err.offset, 2);
}

#[test]
fn limits_apply_to_every_value() {
    let mut limits = DecodeLimits::default();
    limits.max_depth = 1;

    let mut buf = encode(&Value::UInt(1)).unwrap();
    buf.extend_from_slice(&encode(&value!([[2]])).unwrap());

    let err = decode_all_with_limits(&buf, limits).unwrap_err();
    assert_eq!(err.code, ErrorCode::DepthLimitExceeded);
    assert_eq!(err.offset, 2);
}

#[test]
fn single_value_buffer() {
    let v = value!({ 1 => 2 });
    assert_eq!(decode_all(&encode(&v).unwrap()).unwrap(), vec![v]);
}
