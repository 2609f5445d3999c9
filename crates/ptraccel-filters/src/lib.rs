//! RT-Safe Pointer Acceleration Filters
//!
//! This crate turns raw touchpad motion deltas into accelerated,
//! resolution-independent pointer motion.
//!
//! # Overview
//!
//! - **Filter contract**: [`MotionFilter`], the capability set a pointer
//!   pipeline drives per device
//! - **Touchpad accelerator**: velocity-adaptive filter with the linear
//!   touchpad curve
//! - **Profile**: the piecewise curve in mm/s and the fixed touchpad slowdown
//! - **Speed**: mapping of the user speed setting onto a multiplier
//! - **Config**: serde-loadable construction parameters
//!
//! # RT Safety Guarantees
//!
//! - No heap allocations after construction
//! - Bounded execution time per event
//! - No syscalls or I/O in the event path (logging only on configuration)
//!
//! # Example
//!
//! ```
//! use ptraccel_filters::prelude::*;
//!
//! // Create at device setup time
//! let mut filter: FilterHandle = create_touchpad_accelerator(1000, 10_000, 15_000, false)?;
//! filter.set_speed(0.25)?;
//!
//! // Per motion event (time in µs)
//! let out = filter.filter(&DeviceFloatCoords::new(3.0, -1.0), &mut (), 1_000_000);
//! assert!(out.x > 0.0 && out.y < 0.0);
//!
//! // Finger lifted
//! filter.restart(&mut (), 1_500_000);
//! filter.destroy();
//! # Ok::<(), ptraccel_filters::AccelError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod filter;
pub mod prelude;
pub mod profile;
pub mod speed;
pub mod touchpad;

pub use config::{DEFAULT_SMOOTHING_THRESHOLD_US, DEFAULT_SMOOTHING_VALUE_US, TouchpadAccelConfig};
pub use error::{AccelError, Result};
pub use filter::{AccelProfile, FilterHandle, FilterPhase, MotionFilter, MotionFilterState};
pub use profile::{
    ACCEL_THRESHOLD_MM_S, BASELINE, MAX_ACCEL, RAMP_END_MM_S, TP_MAGIC_SLOWDOWN,
    UPPER_THRESHOLD_MM_S, sensible_acceleration_factor, touchpad_accel_profile_linear,
    velocity_to_mm_s,
};
pub use speed::{SPEED_ADJUSTMENT_MAX, SPEED_ADJUSTMENT_MIN, is_valid_speed_adjustment, speed_factor};
pub use touchpad::{TouchpadAccelerator, create_touchpad_accelerator};

pub use ptraccel_tracking::{DeviceFloatCoords, NormalizedCoords};
