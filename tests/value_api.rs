use msgpack_classic::{value, Kind, Value};

#[test]
fn kinds() {
    assert_eq!(Value::Nil.kind(), Kind::Nil);
    assert_eq!(Value::Bool(true).kind(), Kind::Bool);
    assert_eq!(Value::Int(-1).kind(), Kind::Int);
    assert_eq!(Value::UInt(1).kind(), Kind::UInt);
    assert_eq!(Value::Float(0.5).kind(), Kind::Float);
    assert_eq!(Value::Bytes(Vec::new()).kind(), Kind::Bytes);
    assert_eq!(Value::Array(Vec::new()).kind(), Kind::Array);
    assert_eq!(Value::Map(Vec::new()).kind(), Kind::Map);
}

#[test]
fn accessors() {
    assert!(Value::Nil.is_nil());
    assert!(!Value::Bool(false).is_nil());

    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::UInt(1).as_bool(), None);

    assert_eq!(Value::UInt(42).as_u64(), Some(42));
    assert_eq!(Value::Int(-42).as_u64(), None);

    assert_eq!(Value::Int(-42).as_i64(), Some(-42));
    assert_eq!(Value::UInt(42).as_i64(), Some(42));
    assert_eq!(Value::UInt(u64::MAX).as_i64(), None);

    assert_eq!(Value::Float(0.25).as_f64(), Some(0.25));

    let v = Value::Bytes(b"abc".to_vec());
    assert_eq!(v.as_bytes(), Some(&b"abc"[..]));

    let v = value!([1, 2]);
    assert_eq!(v.as_array().map(<[Value]>::len), Some(2));

    let v = value!({ 1 => 2 });
    assert_eq!(v.as_map().map(<[(Value, Value)]>::len), Some(1));
    assert_eq!(v.as_array(), None);
}

#[test]
fn from_conversions_split_integers_at_zero() {
    assert_eq!(Value::from(5i64), Value::UInt(5));
    assert_eq!(Value::from(0i32), Value::UInt(0));
    assert_eq!(Value::from(-5i64), Value::Int(-5));
    assert_eq!(Value::from(-5i8), Value::Int(-5));
    assert_eq!(Value::from(5u8), Value::UInt(5));
    assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
}

#[test]
fn from_conversions_for_other_shapes() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(()), Value::Nil);
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("abc"), Value::Bytes(b"abc".to_vec()));
    assert_eq!(Value::from(String::from("abc")), Value::Bytes(b"abc".to_vec()));
    assert_eq!(Value::from(b"abc"), Value::Bytes(b"abc".to_vec()));
    assert_eq!(Value::from(&b"abc"[..]), Value::Bytes(b"abc".to_vec()));
    assert_eq!(Value::from(vec![1u8, 2, 3]), Value::Bytes(vec![1, 2, 3]));
    assert_eq!(Value::from(Some(7u8)), Value::UInt(7));
    assert_eq!(Value::from(None::<u8>), Value::Nil);
}

#[test]
fn macro_forms() {
    assert_eq!(value!(nil), Value::Nil);
    assert_eq!(value!(null), Value::Nil);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!("raw"), Value::Bytes(b"raw".to_vec()));
    assert_eq!(value!(b"raw"), Value::Bytes(b"raw".to_vec()));
    assert_eq!(value!([]), Value::Array(Vec::new()));
    assert_eq!(value!({}), Value::Map(Vec::new()));

    assert_eq!(
        value!([1, (-2), "x", [nil]]),
        Value::Array(vec![
            Value::UInt(1),
            Value::Int(-2),
            Value::Bytes(b"x".to_vec()),
            Value::Array(vec![Value::Nil]),
        ])
    );

    assert_eq!(
        value!({ "k" => 1, 2 => [true] }),
        Value::Map(vec![
            (Value::Bytes(b"k".to_vec()), Value::UInt(1)),
            (Value::UInt(2), Value::Array(vec![Value::Bool(true)])),
        ])
    );
}
