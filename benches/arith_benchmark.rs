// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiplication - Safe long multiplication vs Fast widening cast
// 2. Division - Safe shift-and-subtract vs Fast widening cast
// 3. Integer Operands - the direct raw path that skips the scaled machinery
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_point::{Fast, Fixed};

type SafeQ32 = Fixed<i32, 16>;
type FastQ32 = Fixed<i32, 16, Fast<i64>>;
type SafeQ64 = Fixed<i64, 32>;
type FastQ64 = Fixed<i64, 32, Fast<i128>>;

fn operands_32() -> Vec<(i32, i32)> {
    (0..256)
        .map(|i: i32| ((i * 37 + 11) << 8, (i * 101 + 7) << 4))
        .collect()
}

fn operands_64() -> Vec<(i64, i64)> {
    (0..256)
        .map(|i: i64| ((i * 37 + 11) << 20, (i * 101 + 7) << 12))
        .collect()
}

// ============================================================================
// Multiplication
// ============================================================================

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");

    let ops32 = operands_32();
    group.bench_with_input(BenchmarkId::new("Safe", 32), &ops32, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(SafeQ32::from_raw(x) * SafeQ32::from_raw(y));
            }
        });
    });
    group.bench_with_input(BenchmarkId::new("Fast", 32), &ops32, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(FastQ32::from_raw(x) * FastQ32::from_raw(y));
            }
        });
    });

    let ops64 = operands_64();
    group.bench_with_input(BenchmarkId::new("Safe", 64), &ops64, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(SafeQ64::from_raw(x) * SafeQ64::from_raw(y));
            }
        });
    });
    group.bench_with_input(BenchmarkId::new("Fast", 64), &ops64, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(FastQ64::from_raw(x) * FastQ64::from_raw(y));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Division
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    let ops32 = operands_32();
    group.bench_with_input(BenchmarkId::new("Safe", 32), &ops32, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(SafeQ32::from_raw(x) / SafeQ32::from_raw(y | 1));
            }
        });
    });
    group.bench_with_input(BenchmarkId::new("Fast", 32), &ops32, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(FastQ32::from_raw(x) / FastQ32::from_raw(y | 1));
            }
        });
    });

    let ops64 = operands_64();
    group.bench_with_input(BenchmarkId::new("Safe", 64), &ops64, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(SafeQ64::from_raw(x) / SafeQ64::from_raw(y | 1));
            }
        });
    });
    group.bench_with_input(BenchmarkId::new("Fast", 64), &ops64, |b, ops| {
        b.iter(|| {
            for &(x, y) in ops {
                black_box(FastQ64::from_raw(x) / FastQ64::from_raw(y | 1));
            }
        });
    });

    group.finish();
}

// ============================================================================
// Integer Operands
// ============================================================================

fn benchmark_integer_operands(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_operands");

    group.bench_function("mul_int", |b| {
        let x = SafeQ64::from_integer(12345);
        b.iter(|| black_box(black_box(x) * 31i64));
    });
    group.bench_function("div_int", |b| {
        let x = SafeQ64::from_integer(12345);
        b.iter(|| black_box(black_box(x) / 31i64));
    });
    group.bench_function("full_div_by_promoted_int", |b| {
        let x = SafeQ64::from_integer(12345);
        let d = SafeQ64::from_integer(31);
        b.iter(|| black_box(black_box(x) / black_box(d)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiplication,
    benchmark_division,
    benchmark_integer_operands
);
criterion_main!(benches);
