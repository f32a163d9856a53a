//! Wall-clock throughput benchmarks for every kernel.
//!
//! Inputs are chosen on the fast path unless the name says otherwise, so
//! the numbers reflect the branch-free SIMD code rather than the scalar
//! fallback.

use core::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use lumen_math::{math, scalar, DefaultSimdDouble, DefaultSimdVector, SimdVector};

fn bench_log(c: &mut Criterion) {
    let mut group = c.benchmark_group("log");

    let xf = DefaultSimdVector::splat(2.718_281_8);
    group.bench_function("logf", |b| b.iter(|| math::logf(black_box(xf))));
    group.bench_function("log10f", |b| b.iter(|| math::log10f(black_box(xf))));

    let xd = DefaultSimdDouble::splat(2.718_281_828_459_045);
    group.bench_function("log", |b| b.iter(|| math::log(black_box(xd))));
    group.bench_function("log10", |b| b.iter(|| math::log10(black_box(xd))));

    // One subnormal lane forces the dispatcher and a libm call.
    let slow = DefaultSimdDouble::splat(1.0e-310);
    group.bench_function("log_fallback_lane", |b| b.iter(|| math::log(black_box(slow))));

    group.finish();
}

fn bench_trig(c: &mut Criterion) {
    let mut group = c.benchmark_group("trig");

    let x = DefaultSimdVector::splat(50.265_48); // 16 pi, mid fast-path
    group.bench_function("sinf", |b| b.iter(|| math::sinf(black_box(x))));
    group.bench_function("cosf", |b| b.iter(|| math::cosf(black_box(x))));

    let huge = DefaultSimdVector::splat(1.0e8);
    group.bench_function("sinf_fallback_lane", |b| b.iter(|| math::sinf(black_box(huge))));

    group.bench_function("scalar_sinf_fast", |b| b.iter(|| scalar::sinf(black_box(50.265_48f32))));
    group.bench_function("scalar_sinf_large", |b| b.iter(|| scalar::sinf(black_box(1.0e8f32))));
    group.bench_function("scalar_cosf_fast", |b| b.iter(|| scalar::cosf(black_box(50.265_48f32))));

    group.finish();
}

criterion_group!(benches, bench_log, bench_trig);
criterion_main!(benches);
