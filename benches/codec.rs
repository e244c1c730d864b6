#![allow(clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use msgpack_classic::{decode, decode_all, encode, value, Decoded, Value};

fn sample_small() -> Value {
    value!({ "id" => 7, "ok" => true })
}

fn sample_medium() -> Value {
    let entries = (0..64u64)
        .map(|i| {
            let key = Value::Bytes(format!("k{i:03}").into_bytes());
            let val = value!([i, (i * i), "payload bytes", nil]);
            (key, val)
        })
        .collect::<Vec<_>>();
    Value::Map(entries)
}

fn bench_codec(c: &mut Criterion) {
    let small = sample_small();
    let small_bytes = encode(&small).unwrap();

    c.bench_function("encode_small", |b| {
        b.iter(|| {
            let bytes = encode(black_box(&small)).unwrap();
            black_box(bytes);
        })
    });

    c.bench_function("decode_small", |b| {
        b.iter(|| {
            let outcome = decode(black_box(&small_bytes)).unwrap();
            black_box(outcome);
        })
    });

    let medium = sample_medium();
    let medium_bytes = encode(&medium).unwrap();

    c.bench_function("encode_medium", |b| {
        b.iter(|| {
            let bytes = encode(black_box(&medium)).unwrap();
            black_box(bytes);
        })
    });

    c.bench_function("decode_medium", |b| {
        b.iter(|| {
            match decode(black_box(&medium_bytes)).unwrap() {
                Decoded::Complete(v, _) => black_box(v),
                Decoded::Incomplete => unreachable!(),
            };
        })
    });

    let mut stream = Vec::new();
    for _ in 0..32 {
        stream.extend_from_slice(&small_bytes);
    }

    c.bench_function("decode_all_stream", |b| {
        b.iter(|| {
            let values = decode_all(black_box(&stream)).unwrap();
            black_box(values);
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
