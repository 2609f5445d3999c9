//! Shared test doubles for the filter integration tests.

use std::cell::Cell;

use ptraccel_filters::DeviceFloatCoords;
use ptraccel_tracking::VelocityTracker;

/// Tracker that replays a fixed list of velocities and records every call.
///
/// The n-th `velocity` query after the n-th `feed` returns the n-th scripted
/// value; once the script runs out the last value repeats.
#[derive(Debug, Default)]
pub struct ScriptedTracker {
    script: Vec<f64>,
    feeds: Vec<(DeviceFloatCoords, u64)>,
    resets: Vec<u64>,
    queries: Cell<usize>,
}

impl ScriptedTracker {
    pub fn new(script: &[f64]) -> Self {
        Self {
            script: script.to_vec(),
            ..Self::default()
        }
    }

    pub fn feeds(&self) -> &[(DeviceFloatCoords, u64)] {
        &self.feeds
    }

    pub fn resets(&self) -> &[u64] {
        &self.resets
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl VelocityTracker for ScriptedTracker {
    fn feed(&mut self, delta: &DeviceFloatCoords, time: u64) {
        self.feeds.push((*delta, time));
    }

    fn velocity(&self, _time: u64) -> f64 {
        self.queries.set(self.queries.get().saturating_add(1));
        let step = self.feeds.len().saturating_sub(1);
        self.script
            .get(step)
            .or_else(|| self.script.last())
            .copied()
            .unwrap_or(0.0)
    }

    fn reset(&mut self, time: u64) {
        self.resets.push(time);
    }

    fn capacity(&self) -> usize {
        self.script.len()
    }
}

/// Velocity in device units/µs for a finger speed in mm/s.
pub fn velocity_for_mm_s(mm_s: f64, dpi: u32) -> f64 {
    mm_s * f64::from(dpi) / 25.4 / 1_000_000.0
}
