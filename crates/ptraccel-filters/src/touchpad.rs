//! Adaptive Touchpad Accelerator
//!
//! Touchpads report far finer motion than mice. Normalizing for resolution
//! alone makes them feel much too fast, so this filter combines a velocity
//! estimate, the linear touchpad curve, the user speed factor and a fixed
//! touchpad slowdown.
//!
//! Per motion event:
//!
//! ```text
//! delta ─► tracker.feed ─► tracker.velocity ─► simpsons(profile, v, last_v)
//!                                                        │
//!        normalized ◄── normalize_for_dpi ◄── delta × factor
//! ```

use std::num::NonZeroU32;

use ptraccel_tracking::{
    DeltaSmoothener, DeviceFloatCoords, NormalizedCoords, PointerTrackers, TrackerWindow,
    VelocityTracker, calculate_acceleration_simpsons, normalize_for_dpi,
};
use tracing::{debug, trace, warn};

use crate::config::TouchpadAccelConfig;
use crate::error::{AccelError, Result};
use crate::filter::{AccelProfile, FilterHandle, FilterPhase, MotionFilter, MotionFilterState};
use crate::profile::{BASELINE, TP_MAGIC_SLOWDOWN, touchpad_accel_profile_linear};
use crate::speed::{is_valid_speed_adjustment, speed_factor};

/// Initial value of the unused `threshold` field (mm/s).
const DEFAULT_THRESHOLD_MM_S: f64 = 130.0;

/// Adaptive acceleration filter for touchpads.
///
/// The tracker is a type parameter so any [`VelocityTracker`] can be
/// plugged in; [`PointerTrackers`] is the default.
///
/// # RT Safety
///
/// - Construction sets up all state; nothing is allocated afterwards
/// - `filter`, `filter_constant`, `filter_scroll` and `restart` are O(1)
///   in the tracker capacity, with no syscalls or I/O
///
/// # Example
///
/// ```
/// use ptraccel_filters::prelude::*;
///
/// let mut accel = TouchpadAccelerator::new(400, 0, 0, false)?;
/// accel.set_speed(0.0)?;
///
/// let mut time = 1_000_000;
/// let mut out = NormalizedCoords::default();
/// for _ in 0..5 {
///     time += 10_000;
///     out = accel.filter(&DeviceFloatCoords::new(8.0, 0.0), &mut (), time);
/// }
///
/// // 50 mm/s sits on the plateau: 0.9 * 0.2968, then 1000/400 dpi scaling
/// assert!((out.x - 8.0 * 0.26712 * 2.5).abs() < 1e-2);
/// # Ok::<(), ptraccel_filters::AccelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TouchpadAccelerator<T = PointerTrackers> {
    base: MotionFilterState,
    /// units/µs
    velocity: f64,
    /// units/µs
    last_velocity: f64,
    trackers: T,
    /// mm/s; carried but not read by the linear profile
    threshold: f64,
    /// unitless; carried but not read by the linear profile
    accel: f64,
    dpi: NonZeroU32,
    speed_factor: f64,
    phase: FilterPhase,
}

impl TouchpadAccelerator<PointerTrackers> {
    /// Create a touchpad accelerator.
    ///
    /// # Arguments
    ///
    /// * `dpi` - Native device resolution (must be positive)
    /// * `smoothing_threshold` - Event intervals below this are smoothed (µs);
    ///   zero disables smoothing
    /// * `smoothing_value` - Interval substituted for smoothed events (µs)
    /// * `use_velocity_averaging` - Estimate velocity over 16 samples instead of 2
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::InvalidDpi`] if `dpi` is zero.
    pub fn new(
        dpi: u32,
        smoothing_threshold: u64,
        smoothing_value: u64,
        use_velocity_averaging: bool,
    ) -> Result<Self> {
        let dpi = NonZeroU32::new(dpi).ok_or(AccelError::InvalidDpi { dpi })?;
        let window = TrackerWindow::from_averaging(use_velocity_averaging);
        let smoothener = DeltaSmoothener::new(smoothing_threshold, smoothing_value);

        debug!(
            dpi = dpi.get(),
            window = window.slots(),
            smoothing_threshold,
            smoothing_value,
            "Creating touchpad accelerator"
        );

        let trackers = PointerTrackers::new(window).with_smoothener(smoothener);
        Ok(Self::with_tracker(dpi, trackers))
    }

    /// Create a touchpad accelerator from a configuration and apply its speed.
    ///
    /// # Errors
    ///
    /// Returns the first validation error of `config`.
    pub fn from_config(config: &TouchpadAccelConfig) -> Result<Self> {
        config.validate()?;
        let mut accel = Self::new(
            config.dpi,
            config.smoothing_threshold_us,
            config.smoothing_value_us,
            config.use_velocity_averaging,
        )?;
        accel.set_speed(config.speed)?;
        Ok(accel)
    }
}

impl<T: VelocityTracker> TouchpadAccelerator<T> {
    /// Create a touchpad accelerator around an existing tracker.
    ///
    /// The speed adjustment starts at `0` (speed factor `1.0`).
    pub fn with_tracker(dpi: NonZeroU32, trackers: T) -> Self {
        Self {
            base: MotionFilterState::new(AccelProfile::Adaptive),
            velocity: 0.0,
            last_velocity: 0.0,
            trackers,
            threshold: DEFAULT_THRESHOLD_MM_S,
            accel: 0.0,
            dpi,
            speed_factor: speed_factor(0.0),
            phase: FilterPhase::JustReset,
        }
    }

    /// Acceleration profile evaluated for a velocity in device units/µs.
    ///
    /// This is the function integrated between velocity samples; it is
    /// public so tools can plot the effective curve.
    #[inline]
    pub fn touchpad_accel_profile_linear<C: ?Sized>(
        &self,
        _ctx: &C,
        velocity: f64,
        _time: u64,
    ) -> f64 {
        touchpad_accel_profile_linear(velocity, self.dpi, self.speed_factor)
    }

    /// Set the user speed adjustment and recompute the speed factor.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::SpeedOutOfRange`] if `speed_adjustment` is
    /// outside `[-1, 1]` or NaN; the previous setting stays in effect.
    pub fn set_speed(&mut self, speed_adjustment: f64) -> Result<()> {
        if !is_valid_speed_adjustment(speed_adjustment) {
            warn!(speed_adjustment, "Rejecting out-of-range speed adjustment");
            return Err(AccelError::SpeedOutOfRange {
                value: speed_adjustment,
            });
        }

        self.base.speed_adjustment = speed_adjustment;
        self.speed_factor = speed_factor(speed_adjustment);
        debug!(
            speed_adjustment,
            speed_factor = self.speed_factor,
            "Touchpad speed updated"
        );
        Ok(())
    }

    /// Current user speed adjustment.
    pub fn speed(&self) -> f64 {
        self.base.speed_adjustment
    }

    /// Always [`AccelProfile::Adaptive`].
    pub fn profile(&self) -> AccelProfile {
        self.base.profile
    }

    /// Feed the tracker and integrate the profile over the velocity change.
    #[inline]
    fn calculate_acceleration_factor<C: ?Sized>(
        &mut self,
        unaccelerated: &DeviceFloatCoords,
        ctx: &C,
        time: u64,
    ) -> f64 {
        self.trackers.feed(unaccelerated, time);
        let velocity = self.trackers.velocity(time);
        // A tracker that cannot produce an estimate keeps the previous one
        let velocity = if velocity.is_finite() && velocity >= 0.0 {
            velocity
        } else {
            self.last_velocity
        };
        self.velocity = velocity;

        let last_velocity = self.last_velocity;
        let factor = calculate_acceleration_simpsons(
            |v, t| self.touchpad_accel_profile_linear(ctx, v, t),
            velocity,
            last_velocity,
            time,
        );
        self.last_velocity = velocity;
        self.phase = FilterPhase::Active;

        factor
    }

    /// Most recent velocity estimate (units/µs).
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Velocity estimate of the previous event (units/µs).
    pub fn last_velocity(&self) -> f64 {
        self.last_velocity
    }

    /// Native device resolution.
    pub fn dpi(&self) -> NonZeroU32 {
        self.dpi
    }

    /// Cached speed factor for the current speed adjustment.
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Reserved threshold (mm/s); the linear profile does not use it.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Reserved acceleration factor; the linear profile does not use it.
    pub fn accel(&self) -> f64 {
        self.accel
    }

    /// Current tracking phase.
    pub fn state(&self) -> FilterPhase {
        self.phase
    }

    /// The velocity tracker.
    pub fn tracker(&self) -> &T {
        &self.trackers
    }

    /// Speed adjustment and profile shared with other filter variants.
    pub fn filter_state(&self) -> &MotionFilterState {
        &self.base
    }
}

impl<T, C> MotionFilter<C> for TouchpadAccelerator<T>
where
    T: VelocityTracker + std::fmt::Debug,
    C: ?Sized,
{
    fn profile(&self) -> AccelProfile {
        TouchpadAccelerator::profile(self)
    }

    /// Accelerate in device units, normalize afterwards.
    #[inline]
    fn filter(
        &mut self,
        unaccelerated: &DeviceFloatCoords,
        ctx: &mut C,
        time: u64,
    ) -> NormalizedCoords {
        let accel_factor = self.calculate_acceleration_factor(unaccelerated, ctx, time);
        let accelerated = unaccelerated.scale(accel_factor);

        normalize_for_dpi(&accelerated, self.dpi)
    }

    /// Normalize and apply the plateau baseline with the touchpad slowdown,
    /// so unaccelerated motion matches accelerated motion at moderate speed.
    #[inline]
    fn filter_constant(
        &mut self,
        unaccelerated: &DeviceFloatCoords,
        _ctx: &mut C,
        _time: u64,
    ) -> NormalizedCoords {
        let normalized = normalize_for_dpi(unaccelerated, self.dpi);

        NormalizedCoords {
            x: BASELINE * TP_MAGIC_SLOWDOWN * normalized.x,
            y: BASELINE * TP_MAGIC_SLOWDOWN * normalized.y,
        }
    }

    /// Clears the tracker history only; `last_velocity` and the speed
    /// factor are kept, so the first integration after a restart spans the
    /// pre-restart velocity.
    fn restart(&mut self, _ctx: &mut C, time: u64) {
        trace!(time, "Restarting touchpad accelerator");
        self.trackers.reset(time);
        self.phase = FilterPhase::JustReset;
    }

    fn destroy(self: Box<Self>) {
        trace!(dpi = self.dpi.get(), "Destroying touchpad accelerator");
    }

    fn set_speed(&mut self, speed_adjustment: f64) -> Result<()> {
        TouchpadAccelerator::set_speed(self, speed_adjustment)
    }

    fn speed(&self) -> f64 {
        TouchpadAccelerator::speed(self)
    }
}

/// Create a boxed touchpad accelerator for a pointer pipeline.
///
/// # Errors
///
/// Returns [`AccelError::InvalidDpi`] if `dpi` is zero.
///
/// # Example
///
/// ```
/// use ptraccel_filters::prelude::*;
///
/// let mut handle: FilterHandle = create_touchpad_accelerator(1000, 0, 0, true)?;
/// assert_eq!(handle.profile(), AccelProfile::Adaptive);
///
/// handle.set_speed(0.5)?;
/// let out = handle.filter_scroll(&DeviceFloatCoords::new(0.0, 10.0), &mut (), 0);
/// assert!((out.y - 10.0 * 0.9 * 0.2968).abs() < 1e-9);
/// handle.destroy();
/// # Ok::<(), ptraccel_filters::AccelError>(())
/// ```
pub fn create_touchpad_accelerator<C: ?Sized>(
    dpi: u32,
    smoothing_threshold: u64,
    smoothing_value: u64,
    use_velocity_averaging: bool,
) -> Result<FilterHandle<C>> {
    let accel = TouchpadAccelerator::new(
        dpi,
        smoothing_threshold,
        smoothing_value,
        use_velocity_averaging,
    )?;
    Ok(Box::new(accel))
}
