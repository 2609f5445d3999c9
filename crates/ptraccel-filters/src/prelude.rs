//! Prelude for the filters crate.
//!
//! Re-exports the filter contract, the touchpad accelerator and the
//! coordinate types it consumes.
//!
//! # Example
//!
//! ```
//! use ptraccel_filters::prelude::*;
//!
//! let mut accel = TouchpadAccelerator::new(400, 0, 0, true)?;
//! let out = accel.filter_constant(&DeviceFloatCoords::new(4.0, 0.0), &mut (), 0);
//! assert!(out.x > 0.0);
//! # Ok::<(), AccelError>(())
//! ```

pub use crate::config::TouchpadAccelConfig;
pub use crate::error::AccelError;
pub use crate::filter::{AccelProfile, FilterHandle, FilterPhase, MotionFilter};
pub use crate::profile::{sensible_acceleration_factor, touchpad_accel_profile_linear};
pub use crate::speed::speed_factor;
pub use crate::touchpad::{TouchpadAccelerator, create_touchpad_accelerator};
pub use ptraccel_tracking::prelude::{DeviceFloatCoords, NormalizedCoords, PointerTrackers, TrackerWindow, VelocityTracker};
