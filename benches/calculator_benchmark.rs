// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Iterative methods - Babylonian square root at different tolerances
// 2. Series - Taylor sine by number of terms
// 3. Search - Integer logarithm, found early, found late and not found
// 4. Full evaluation - Operations dispatched through the calculator
// ============================================================================

use advanced_calculator::numeric;
use advanced_calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn benchmark_square_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("square_root");

    for tolerance in [1e-3, 1e-6, 1e-12].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(tolerance),
            tolerance,
            |b, &tolerance| {
                b.iter(|| {
                    black_box(numeric::square_root_with(
                        black_box(123_456.789),
                        tolerance,
                        numeric::MAX_SQRT_ITERATIONS,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn benchmark_sine_taylor(c: &mut Criterion) {
    let mut group = c.benchmark_group("sine_taylor");

    for terms in [5u32, 10, 17].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(terms), terms, |b, &terms| {
            b.iter(|| black_box(numeric::sine_taylor(black_box(1.2345), terms)));
        });
    }

    group.finish();
}

fn benchmark_logarithm(c: &mut Criterion) {
    let mut group = c.benchmark_group("logarithm");

    // (value, base): early hit, late hit, overflow exit, full search
    let cases = [
        ("early", 8i64, 2i64),
        ("late", 1i64 << 62, 2),
        ("overflow", 7, 2),
        ("full_search", 2, -1),
    ];
    for (label, value, base) in cases.iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &(*value, *base),
            |b, &(value, base)| {
                b.iter(|| black_box(numeric::logarithm(black_box(value), base)));
            },
        );
    }

    group.finish();
}

fn benchmark_calculator_evaluate(c: &mut Criterion) {
    let mut calculator = Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler));
    let operations = [
        Operation::Divide { a: 10.0, b: 4.0 },
        Operation::Factorial { value: 20 },
        Operation::Emi {
            loan_amount: 100_000.0,
            annual_interest_rate: 10.0,
            duration_months: 12,
        },
    ];

    c.bench_function("calculator_evaluate", |b| {
        b.iter(|| {
            for operation in operations.iter() {
                black_box(calculator.evaluate(*operation)).ok();
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_square_root,
    benchmark_sine_taylor,
    benchmark_logarithm,
    benchmark_calculator_evaluate,
);
criterion_main!(benches);
