#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use syrup::prelude::*;

const N_ARR: usize = 10;
const N_MAP: usize = 10;

fn big_k() -> Syrup {
    let v0: Vec<Syrup> = (0..N_ARR).map(|i| Syrup::from(i as i64)).collect();
    let m: VecMap<Syrup, Syrup> = (0..N_MAP)
        .map(|i| {
            (
                Syrup::from(Symbol::from(format!("key{}", i))),
                Syrup::from(v0.clone()),
            )
        })
        .collect();
    let v: Vec<Syrup> = std::iter::repeat(Syrup::from(m)).take(N_ARR).collect();
    Syrup::from(v)
}

fn bench_text_enc(c: &mut Criterion) {
    let big_k = big_k();
    let enc_len = encode_text_full(&big_k).len();
    c.bench_function(
        &format!("Text-encoding a Syrup object, output size of {} bytes", enc_len),
        move |b| b.iter(|| encode_text_full(black_box(&big_k))),
    );
}

fn bench_binary_enc(c: &mut Criterion) {
    let big_k = big_k();
    let enc_len = encode_binary_full(&big_k).len();
    c.bench_function(
        &format!(
            "Binary-encoding a Syrup object, output size of {} bytes",
            enc_len
        ),
        move |b| b.iter(|| encode_binary_full(black_box(&big_k))),
    );
}

fn bench_binary_dec(c: &mut Criterion) {
    let enc = encode_binary_full(&big_k());
    c.bench_function(
        &format!("Binary-decoding a Syrup object of {} bytes", enc.len()),
        move |b| b.iter(|| decode_binary_full(black_box(&enc)).unwrap()),
    );
}

fn bench_text_parse(c: &mut Criterion) {
    let enc = encode_text_full(&big_k());
    c.bench_function(
        &format!("Parsing a Syrup text document of {} bytes", enc.len()),
        move |b| {
            b.iter(|| {
                let v: Syrup = parse(black_box(enc.as_slice())).unwrap();
                v
            })
        },
    );
}

criterion_group!(
    benches,
    bench_text_enc,
    bench_binary_enc,
    bench_binary_dec,
    bench_text_parse
);
criterion_main!(benches);
