//! Tracker Benchmarks
//!
//! Run with: cargo bench --bench tracker_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use ptraccel_tracking::prelude::*;

fn bench_feed_and_velocity(c: &mut Criterion, name: &str, window: TrackerWindow) {
    let mut trackers = PointerTrackers::new(window);
    let delta = DeviceFloatCoords::new(3.0, 1.0);
    let mut time = 1_000_000u64;

    c.bench_function(name, |b| {
        b.iter(|| {
            time += 7_000;
            trackers.feed(std::hint::black_box(&delta), time);
            std::hint::black_box(trackers.velocity(std::hint::black_box(time)));
        })
    });
}

fn bench_instantaneous(c: &mut Criterion) {
    bench_feed_and_velocity(c, "trackers_instantaneous", TrackerWindow::Instantaneous);
}

fn bench_averaged(c: &mut Criterion) {
    bench_feed_and_velocity(c, "trackers_averaged", TrackerWindow::Averaged);
}

fn bench_direction(c: &mut Criterion) {
    c.bench_function("direction_from_delta", |b| {
        b.iter(|| {
            std::hint::black_box(Direction::from_delta(
                std::hint::black_box(12.0),
                std::hint::black_box(-7.0),
            ))
        })
    });
}

criterion_group!(benches, bench_instantaneous, bench_averaged, bench_direction);
criterion_main!(benches);
