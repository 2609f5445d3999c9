//! Prelude for the tracking crate.
//!
//! ```
//! use ptraccel_tracking::prelude::*;
//!
//! let mut trackers = PointerTrackers::new(TrackerWindow::Averaged);
//! trackers.feed(&DeviceFloatCoords::new(1.0, 0.0), 1_000);
//! assert!(trackers.velocity(1_000).is_finite());
//! ```

pub use crate::coords::{DEFAULT_MOUSE_DPI, DeviceFloatCoords, NormalizedCoords, normalize_for_dpi};
pub use crate::direction::Direction;
pub use crate::integration::calculate_acceleration_simpsons;
pub use crate::smoothener::DeltaSmoothener;
pub use crate::trackers::{PointerTrackers, TrackerWindow, VelocityTracker};
