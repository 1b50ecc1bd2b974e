use bos::value::{Object, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_tree() -> Value {
    let mut inner = Object::new();
    inner.insert("str", Value::String("str".into()));
    inner.insert("int", Value::Integer(1));
    inner.insert("float", Value::Real(2.3));
    inner.insert("bool", Value::Bool(true));

    let array = Value::Array(vec![
        Value::String("string".into()),
        Value::Integer(1),
        Value::Real(2.2),
        Value::Bool(false),
    ]);

    let mut root = Object::new();
    root.insert("bool", Value::Bool(true));
    root.insert("int8", Value::Integer(-1));
    root.insert("int16", Value::Integer(-300));
    root.insert("int32", Value::Integer(-2_147_483_640));
    root.insert("uint32", Value::Integer(4_294_967_290));
    root.insert("float", Value::Real(5.5));
    root.insert("string", Value::String("this is a string".into()));
    root.insert("bytes", Value::Bytes(vec![1; 64]));
    root.insert("array", array);
    root.insert("obj", Value::Object(inner));
    Value::Object(root)
}

fn encode_sample(c: &mut Criterion) {
    let value = sample_tree();
    c.bench_function("encode_sample_tree", |b| {
        b.iter(|| black_box(bos::encode(black_box(&value)).unwrap()))
    });
}

fn decode_sample(c: &mut Criterion) {
    let bytes = bos::encode(&sample_tree()).unwrap();
    c.bench_function("decode_sample_tree", |b| {
        b.iter(|| black_box(bos::decode(black_box(&bytes)).unwrap()))
    });
}

fn round_trip_sample(c: &mut Criterion) {
    let value = sample_tree();
    c.bench_function("round_trip_sample_tree", |b| {
        b.iter(|| {
            let bytes = bos::encode(black_box(&value)).unwrap();
            black_box(bos::decode(&bytes).unwrap())
        })
    });
}

criterion_group!(benches, encode_sample, decode_sample, round_trip_sample);
criterion_main!(benches);
