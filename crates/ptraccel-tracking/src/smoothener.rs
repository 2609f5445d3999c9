//! Event-interval smoothing.
//!
//! Some devices deliver events in irregular bursts: two events a few hundred
//! microseconds apart, then a long gap. Dividing a delta by such a tiny
//! interval yields a velocity spike. The smoothener substitutes a fixed
//! interval whenever the measured one is below a threshold.

use serde::{Deserialize, Serialize};

/// Minimum-interval substitution for velocity calculation.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - `Copy`, no heap allocations
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSmoothener {
    /// Intervals shorter than this are replaced (µs)
    pub threshold_us: u64,
    /// Replacement interval (µs)
    pub value_us: u64,
}

impl DeltaSmoothener {
    /// Create a smoothener.
    ///
    /// Returns `None` for a zero threshold, which would never trigger.
    ///
    /// # Example
    ///
    /// ```
    /// use ptraccel_tracking::DeltaSmoothener;
    ///
    /// assert!(DeltaSmoothener::new(0, 5_000).is_none());
    ///
    /// let smoothener = DeltaSmoothener::new(10_000, 15_000);
    /// assert_eq!(smoothener.map(|s| s.adjust(2_000)), Some(15_000));
    /// assert_eq!(smoothener.map(|s| s.adjust(12_000)), Some(12_000));
    /// ```
    pub fn new(threshold_us: u64, value_us: u64) -> Option<Self> {
        (threshold_us > 0).then_some(Self {
            threshold_us,
            value_us,
        })
    }

    /// Apply the substitution to an interval in µs.
    ///
    /// The result is never zero.
    #[inline]
    pub fn adjust(&self, interval_us: u64) -> u64 {
        if interval_us < self.threshold_us {
            self.value_us.max(1)
        } else {
            interval_us
        }
    }
}
