use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sudoku_classic::{solve_puzzle, validate_puzzle};

const PUZZLE: &str =
    "..839.7.575.....964..1.......16.29846.9.312.7..754.....62..5.78.8.\
    ..3.2...492...1";

fn validate_benchmark(c: &mut Criterion) {
    c.bench_function("validate", |b| {
        b.iter(|| validate_puzzle(black_box(PUZZLE)))
    });
}

fn solve_benchmark(c: &mut Criterion) {
    c.bench_function("solve", |b| {
        b.iter(|| solve_puzzle(black_box(PUZZLE)))
    });
}

criterion_group!(benches, validate_benchmark, solve_benchmark);
criterion_main!(benches);
