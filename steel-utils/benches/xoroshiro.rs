#![allow(missing_docs)]
//! Benchmarks for the xoroshiro random source.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use steel_utils::Direction;
use steel_utils::random::{Random, Xoroshiro};

fn bench_next(c: &mut Criterion) {
    let mut random = Xoroshiro::from_seed(12345);

    c.bench_function("xoroshiro_next_i64", |b| {
        b.iter(|| black_box(random.next_i64()));
    });

    c.bench_function("xoroshiro_next_i32_bounded", |b| {
        b.iter(|| black_box(random.next_i32_bounded(black_box(6))));
    });

    c.bench_function("direction_all_shuffled", |b| {
        b.iter(|| black_box(Direction::all_shuffled(&mut random)));
    });
}

criterion_group!(benches, bench_next);
criterion_main!(benches);
