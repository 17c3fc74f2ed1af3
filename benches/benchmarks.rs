use criterion::{criterion_group, criterion_main};

mod tokenize_benchmark;

use crate::tokenize_benchmark::benchmark_tokenize;

criterion_group!(benches, benchmark_tokenize);
criterion_main!(benches);
