//! The motion filter contract shared by every device class.
//!
//! A pointer pipeline holds one filter per device and only talks to it
//! through [`MotionFilter`], so touchpad and mouse variants are
//! interchangeable from the caller's side.

use std::fmt;

use ptraccel_tracking::{DeviceFloatCoords, NormalizedCoords};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Acceleration profile implemented by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccelProfile {
    /// No acceleration at all
    None,
    /// Constant factor derived from the speed setting
    Flat,
    /// Velocity-dependent acceleration curve
    #[default]
    Adaptive,
}

impl fmt::Display for AccelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccelProfile::None => write!(f, "none"),
            AccelProfile::Flat => write!(f, "flat"),
            AccelProfile::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// Tracking phase of a filter.
///
/// There is no terminal phase value: [`MotionFilter::destroy`] consumes the
/// filter, so nothing can be called on it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterPhase {
    /// Tracker history is empty; the next velocity reflects one sample.
    #[default]
    JustReset,
    /// Tracker has history and the velocity state is meaningful.
    Active,
}

/// State common to every filter variant.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFilterState {
    /// User speed adjustment, always within `[-1, 1]`
    pub speed_adjustment: f64,
    /// Which profile the filter implements
    pub profile: AccelProfile,
}

impl MotionFilterState {
    /// State for a filter of the given profile at neutral speed.
    pub const fn new(profile: AccelProfile) -> Self {
        Self {
            speed_adjustment: 0.0,
            profile,
        }
    }
}

/// Pointer motion filter.
///
/// `C` is caller-supplied context handed through every per-event call
/// unchanged. Filters never store it.
///
/// # RT Safety
///
/// `filter`, `filter_constant`, `filter_scroll` and `restart` must not
/// allocate, block or perform I/O. Timestamps are µs and must be
/// non-decreasing across calls.
pub trait MotionFilter<C: ?Sized = ()>: fmt::Debug {
    /// Profile implemented by this filter.
    fn profile(&self) -> AccelProfile;

    /// Accelerate a device delta and normalize it.
    fn filter(&mut self, unaccelerated: &DeviceFloatCoords, ctx: &mut C, time: u64)
    -> NormalizedCoords;

    /// Normalize a device delta without acceleration.
    fn filter_constant(
        &mut self,
        unaccelerated: &DeviceFloatCoords,
        ctx: &mut C,
        time: u64,
    ) -> NormalizedCoords;

    /// Normalize a scroll delta; the same as [`MotionFilter::filter_constant`]
    /// unless a filter overrides it.
    fn filter_scroll(
        &mut self,
        unaccelerated: &DeviceFloatCoords,
        ctx: &mut C,
        time: u64,
    ) -> NormalizedCoords {
        self.filter_constant(unaccelerated, ctx, time)
    }

    /// Forget motion history, e.g. when a finger is lifted and put down.
    fn restart(&mut self, ctx: &mut C, time: u64);

    /// Release the filter and everything it owns.
    fn destroy(self: Box<Self>);

    /// Set the user speed adjustment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AccelError::SpeedOutOfRange`] if `speed_adjustment`
    /// is outside `[-1, 1]` or NaN. The previous setting stays in effect.
    fn set_speed(&mut self, speed_adjustment: f64) -> Result<()>;

    /// Current user speed adjustment.
    fn speed(&self) -> f64;
}

/// Owned, type-erased filter as handed to the pointer pipeline.
pub type FilterHandle<C = ()> = Box<dyn MotionFilter<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_display() {
        assert_eq!(AccelProfile::None.to_string(), "none");
        assert_eq!(AccelProfile::Flat.to_string(), "flat");
        assert_eq!(AccelProfile::Adaptive.to_string(), "adaptive");
    }

    #[test]
    fn test_profile_serde_names() -> std::result::Result<(), serde_json::Error> {
        let json = serde_json::to_string(&AccelProfile::Adaptive)?;
        assert_eq!(json, "\"adaptive\"");

        let parsed: AccelProfile = serde_json::from_str("\"flat\"")?;
        assert_eq!(parsed, AccelProfile::Flat);
        Ok(())
    }

    #[test]
    fn test_state_defaults_to_neutral_speed() {
        let state = MotionFilterState::new(AccelProfile::Adaptive);
        assert!(state.speed_adjustment.abs() < f64::EPSILON);
        assert_eq!(state.profile, AccelProfile::Adaptive);
        assert_eq!(FilterPhase::default(), FilterPhase::JustReset);
    }
}
