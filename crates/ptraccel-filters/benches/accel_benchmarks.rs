//! Touchpad Accelerator Benchmarks
//!
//! Per-event cost of the accelerated and constant paths.

use criterion::{Criterion, criterion_group, criterion_main};
use ptraccel_filters::prelude::*;

fn bench_filter_instantaneous(c: &mut Criterion) {
    let Ok(mut accel) = TouchpadAccelerator::new(1000, 10_000, 15_000, false) else {
        return;
    };
    let delta = DeviceFloatCoords::new(3.0, 1.5);
    let mut time = 1_000_000u64;

    c.bench_function("touchpad_filter_instantaneous", |b| {
        b.iter(|| {
            time += 8_000;
            accel.filter(std::hint::black_box(&delta), &mut (), std::hint::black_box(time))
        })
    });
}

fn bench_filter_averaged(c: &mut Criterion) {
    let Ok(mut accel) = TouchpadAccelerator::new(1000, 10_000, 15_000, true) else {
        return;
    };
    let delta = DeviceFloatCoords::new(3.0, 1.5);
    let mut time = 1_000_000u64;

    c.bench_function("touchpad_filter_averaged", |b| {
        b.iter(|| {
            time += 8_000;
            accel.filter(std::hint::black_box(&delta), &mut (), std::hint::black_box(time))
        })
    });
}

fn bench_filter_constant(c: &mut Criterion) {
    let Ok(mut accel) = TouchpadAccelerator::new(1000, 10_000, 15_000, true) else {
        return;
    };
    let delta = DeviceFloatCoords::new(3.0, 1.5);

    c.bench_function("touchpad_filter_constant", |b| {
        b.iter(|| accel.filter_constant(std::hint::black_box(&delta), &mut (), 0))
    });
}

fn bench_profile(c: &mut Criterion) {
    let Ok(accel) = TouchpadAccelerator::new(1000, 0, 0, false) else {
        return;
    };

    c.bench_function("touchpad_accel_profile_linear", |b| {
        b.iter(|| accel.touchpad_accel_profile_linear(&(), std::hint::black_box(0.004), 0))
    });
}

fn bench_restart(c: &mut Criterion) {
    let Ok(mut accel) = TouchpadAccelerator::new(1000, 0, 0, true) else {
        return;
    };
    let mut time = 1_000_000u64;

    c.bench_function("touchpad_restart", |b| {
        b.iter(|| {
            time += 1;
            accel.restart(&mut (), std::hint::black_box(time));
        })
    });
}

criterion_group!(
    benches,
    bench_filter_instantaneous,
    bench_filter_averaged,
    bench_filter_constant,
    bench_profile,
    bench_restart
);
criterion_main!(benches);
