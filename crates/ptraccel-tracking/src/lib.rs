//! RT-Safe Motion Tracking for Pointer Acceleration
//!
//! This crate provides the building blocks that pointer acceleration filters
//! consume on every motion event:
//!
//! - **Coordinates**: distinct device-native and DPI-normalized delta types
//! - **Direction**: octant classification of a motion delta
//! - **Trackers**: ring-buffer velocity estimation over recent deltas
//! - **Smoothener**: event-interval substitution for jittery hardware
//! - **Integration**: Simpson's rule averaging of an acceleration profile
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations; tracker storage is a fixed-size array
//! - Bounded execution time (at most [`MAX_TRACKERS`] slots are visited)
//! - No syscalls or I/O
//!
//! # Example
//!
//! ```
//! use ptraccel_tracking::prelude::*;
//!
//! let mut trackers = PointerTrackers::new(TrackerWindow::Averaged);
//!
//! // One event every 10ms moving 5 device units to the right
//! for i in 1..=4u64 {
//!     trackers.feed(&DeviceFloatCoords::new(5.0, 0.0), i * 10_000);
//! }
//!
//! let velocity = trackers.velocity(40_000); // units/µs
//! assert!(velocity > 0.0 && velocity < 0.001);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod coords;
pub mod direction;
pub mod integration;
pub mod prelude;
pub mod smoothener;
pub mod trackers;

pub use coords::{DEFAULT_MOUSE_DPI, DeviceFloatCoords, NormalizedCoords, normalize_for_dpi};
pub use direction::Direction;
pub use integration::calculate_acceleration_simpsons;
pub use smoothener::DeltaSmoothener;
pub use trackers::{
    MAX_TRACKERS, MAX_VELOCITY_DIFF, MOTION_TIMEOUT_US, PointerTracker, PointerTrackers,
    TrackerWindow, VelocityTracker,
};

/// Convert a velocity in units/µs to units/s.
#[inline]
pub const fn v_us2s(velocity: f64) -> f64 {
    velocity * 1_000_000.0
}

/// Convert a velocity in units/ms to units/µs.
#[inline]
pub const fn v_ms2us(velocity: f64) -> f64 {
    velocity / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_unit_conversions() {
        assert!((v_us2s(0.001) - 1000.0).abs() < 1e-9);
        assert!((v_ms2us(1.0) - 0.001).abs() < 1e-12);
        assert!((v_us2s(v_ms2us(3.0)) - 3000.0).abs() < 1e-9);
    }
}
