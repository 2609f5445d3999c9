//! Velocity estimation over a ring of recent motion deltas.
//!
//! Each slot in the ring is opened by an event and then accumulates every
//! later delta, so slot `k` events back holds the total motion over the last
//! `k` events and the time it started. The velocity estimate walks back
//! through the slots for as long as the motion looks like one continuous
//! stroke: same direction, similar speed, no long pause.

use serde::{Deserialize, Serialize};

use crate::coords::DeviceFloatCoords;
use crate::direction::Direction;
use crate::smoothener::DeltaSmoothener;
use crate::v_ms2us;

/// Slots past this age end the velocity walk (µs).
pub const MOTION_TIMEOUT_US: u64 = 1_000_000;

/// Storage capacity of [`PointerTrackers`].
pub const MAX_TRACKERS: usize = 16;

/// Largest velocity difference (units/µs) still treated as the same stroke.
pub const MAX_VELOCITY_DIFF: f64 = v_ms2us(1.0);

/// Velocity estimation seam consumed by acceleration filters.
///
/// Implementations must not allocate, block or perform I/O in any of these
/// methods; they are called once per motion event.
pub trait VelocityTracker {
    /// Record a delta that occurred at `time` (µs).
    fn feed(&mut self, delta: &DeviceFloatCoords, time: u64);

    /// Current velocity estimate in device units per µs.
    ///
    /// The result is finite and non-negative.
    fn velocity(&self, time: u64) -> f64;

    /// Forget the sample history.
    ///
    /// The next `feed` followed by `velocity` reflects only that one sample.
    fn reset(&mut self, time: u64);

    /// Number of samples the estimate may span.
    fn capacity(&self) -> usize;
}

/// Size of the sample window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerWindow {
    /// Two slots: velocity of the most recent event only
    #[default]
    Instantaneous,
    /// Sixteen slots: velocity averaged over the current stroke
    Averaged,
}

impl TrackerWindow {
    /// Pick the window for a velocity-averaging preference.
    pub fn from_averaging(use_velocity_averaging: bool) -> Self {
        if use_velocity_averaging {
            Self::Averaged
        } else {
            Self::Instantaneous
        }
    }

    /// Number of ring slots.
    pub const fn slots(self) -> usize {
        match self {
            Self::Instantaneous => 2,
            Self::Averaged => MAX_TRACKERS,
        }
    }
}

/// One ring slot.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    /// Motion accumulated since this slot was opened
    pub delta: DeviceFloatCoords,
    /// Time the slot was opened (µs)
    pub time: u64,
    /// Direction of the delta that opened the slot
    pub dir: Direction,
}

impl PointerTracker {
    const CLEARED: Self = Self {
        delta: DeviceFloatCoords::new(0.0, 0.0),
        time: 0,
        dir: Direction::NONE,
    };
}

/// Fixed-capacity velocity tracker.
///
/// # RT Safety
///
/// - Slot storage is an inline array; construction is the only place
///   memory is set up
/// - `feed`, `velocity` and `reset` visit at most [`MAX_TRACKERS`] slots
///
/// # Example
///
/// ```
/// use ptraccel_tracking::prelude::*;
///
/// let mut trackers = PointerTrackers::new(TrackerWindow::Instantaneous);
/// trackers.feed(&DeviceFloatCoords::new(0.0, 4.0), 1_000);
/// trackers.feed(&DeviceFloatCoords::new(0.0, 4.0), 9_000);
///
/// // 4 units over 8000µs (+1µs guard)
/// let velocity = trackers.velocity(9_000);
/// assert!((velocity - 4.0 / 8001.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PointerTrackers {
    trackers: [PointerTracker; MAX_TRACKERS],
    ntrackers: usize,
    cur_tracker: usize,
    smoothener: Option<DeltaSmoothener>,
}

impl PointerTrackers {
    /// Create a tracker with the given window and no smoothing.
    pub fn new(window: TrackerWindow) -> Self {
        Self {
            trackers: [PointerTracker::CLEARED; MAX_TRACKERS],
            ntrackers: window.slots(),
            cur_tracker: 0,
            smoothener: None,
        }
    }

    /// Attach an interval smoothener.
    #[must_use]
    pub fn with_smoothener(mut self, smoothener: Option<DeltaSmoothener>) -> Self {
        self.smoothener = smoothener;
        self
    }

    /// The attached smoothener, if any.
    pub fn smoothener(&self) -> Option<&DeltaSmoothener> {
        self.smoothener.as_ref()
    }

    /// The slot `offset` events back from the current one.
    pub fn by_offset(&self, offset: usize) -> Option<&PointerTracker> {
        self.trackers.get(self.index_for(offset))
    }

    fn by_offset_mut(&mut self, offset: usize) -> Option<&mut PointerTracker> {
        let index = self.index_for(offset);
        self.trackers.get_mut(index)
    }

    #[inline]
    fn index_for(&self, offset: usize) -> usize {
        let n = self.ntrackers;
        (self.cur_tracker + n - offset % n) % n
    }

    #[inline]
    fn tracker_velocity(&self, tracker: &PointerTracker, time: u64) -> f64 {
        let mut interval = time.saturating_sub(tracker.time).saturating_add(1);
        if let Some(smoothener) = &self.smoothener {
            interval = smoothener.adjust(interval);
        }
        tracker.delta.length() / interval as f64
    }

    /// Velocity of the first movement after a pause.
    ///
    /// The previous event is too old to measure against, so the timeout
    /// itself is used as the interval. This errs on the fast side for very
    /// slow movements but gives a usable initial speed for the common
    /// pause-move-pause pattern.
    #[inline]
    fn velocity_after_timeout(&self, tracker: &PointerTracker) -> f64 {
        self.tracker_velocity(tracker, tracker.time.saturating_add(MOTION_TIMEOUT_US))
    }
}

impl VelocityTracker for PointerTrackers {
    fn feed(&mut self, delta: &DeviceFloatCoords, time: u64) {
        let n = self.ntrackers;
        for tracker in self.trackers.iter_mut().take(n) {
            tracker.delta.x += delta.x;
            tracker.delta.y += delta.y;
        }

        self.cur_tracker = (self.cur_tracker + 1) % n;
        if let Some(current) = self.by_offset_mut(0) {
            *current = PointerTracker {
                delta: DeviceFloatCoords::default(),
                time,
                dir: Direction::from_delta(delta.x, delta.y),
            };
        }
    }

    fn velocity(&self, time: u64) -> f64 {
        let mut dir = self.by_offset(0).map_or(Direction::UNDEFINED, |t| t.dir);
        let mut result = 0.0;
        let mut initial_velocity = 0.0;

        for offset in 1..self.ntrackers {
            let Some(tracker) = self.by_offset(offset) else {
                break;
            };

            // Clock went backwards
            if tracker.time > time {
                break;
            }

            if time - tracker.time > MOTION_TIMEOUT_US {
                if offset == 1 {
                    result = self.velocity_after_timeout(tracker);
                }
                break;
            }

            let velocity = self.tracker_velocity(tracker, time);

            dir &= tracker.dir;
            if dir.is_empty() {
                // First movement after a direction change
                if offset == 1 {
                    result = velocity;
                }
                break;
            }

            if initial_velocity <= 0.0 {
                initial_velocity = velocity;
                result = velocity;
            } else {
                if (initial_velocity - velocity).abs() > MAX_VELOCITY_DIFF {
                    break;
                }
                result = velocity;
            }
        }

        if result.is_finite() { result } else { 0.0 }
    }

    fn reset(&mut self, time: u64) {
        for offset in 1..self.ntrackers {
            if let Some(tracker) = self.by_offset_mut(offset) {
                *tracker = PointerTracker::CLEARED;
            }
        }

        if let Some(current) = self.by_offset_mut(0) {
            *current = PointerTracker {
                delta: DeviceFloatCoords::default(),
                time,
                dir: Direction::UNDEFINED,
            };
        }
    }

    fn capacity(&self) -> usize {
        self.ntrackers
    }
}
