//! Linear touchpad acceleration profile.
//!
//! The curve is calibrated in mm/s so that its breakpoints mean the same
//! physical finger speed on every touchpad regardless of resolution.
//!
//! ```text
//! factor
//!   4.0 |                         ___________
//!       |                       /
//!       |                     /
//!       |                   /
//!   0.9 |     ____________/
//!       |   /
//!   0.3 | /
//!       +----+-----------+----------+-------- mm/s
//!       0    6  7        90        400
//! ```

use std::num::NonZeroU32;

use ptraccel_tracking::v_us2s;

/// Slowdown applied to every touchpad factor.
///
/// Once normalized, touchpads would see the same acceleration as mice. That
/// is technically correct but feels far too fast on a touchpad.
pub const TP_MAGIC_SLOWDOWN: f64 = 0.2968;

/// Plateau value of the curve; also the constant factor of unaccelerated
/// motion so both paths agree at moderate speed.
pub const BASELINE: f64 = 0.9;

/// End of the low-speed ramp (mm/s).
pub const RAMP_END_MM_S: f64 = 7.0;

/// End of the plateau and start of acceleration (mm/s).
pub const ACCEL_THRESHOLD_MM_S: f64 = 90.0;

/// Speed at which acceleration stops increasing (mm/s).
pub const UPPER_THRESHOLD_MM_S: f64 = 400.0;

/// Largest curve value.
pub const MAX_ACCEL: f64 = 4.0;

const MM_PER_INCH: f64 = 25.4;

/// Curve value for a finger speed in mm/s.
///
/// - below 7 mm/s: `min(0.9, 0.1 * speed + 0.3)`; the ramp reaches the
///   plateau at 6 mm/s so the curve is continuous at 7
/// - 7 to 90 mm/s: `0.9`
/// - 90 to 400 mm/s: linear from `0.9` to `4.0`
/// - above 400 mm/s: `4.0`
///
/// # Example
///
/// ```
/// use ptraccel_filters::sensible_acceleration_factor;
///
/// assert!((sensible_acceleration_factor(3.5) - 0.65).abs() < 1e-12);
/// assert!((sensible_acceleration_factor(50.0) - 0.9).abs() < 1e-12);
/// assert!((sensible_acceleration_factor(1000.0) - 4.0).abs() < 1e-12);
/// ```
#[inline]
pub fn sensible_acceleration_factor(speed_in_mm_s: f64) -> f64 {
    if speed_in_mm_s < RAMP_END_MM_S {
        BASELINE.min(0.1 * speed_in_mm_s + 0.3)
    } else if speed_in_mm_s <= ACCEL_THRESHOLD_MM_S {
        BASELINE
    } else if speed_in_mm_s <= UPPER_THRESHOLD_MM_S {
        BASELINE
            + (MAX_ACCEL - BASELINE) * (speed_in_mm_s - ACCEL_THRESHOLD_MM_S)
                / (UPPER_THRESHOLD_MM_S - ACCEL_THRESHOLD_MM_S)
    } else {
        MAX_ACCEL
    }
}

/// Convert a velocity in device units/µs to mm/s.
#[inline]
pub fn velocity_to_mm_s(velocity_us: f64, dpi: NonZeroU32) -> f64 {
    v_us2s(velocity_us) * MM_PER_INCH / f64::from(dpi.get())
}

/// Acceleration factor for a velocity in device units/µs.
///
/// The curve value is scaled by the user speed factor and by
/// [`TP_MAGIC_SLOWDOWN`]. Negative or non-finite velocities are treated as
/// zero so the factor is always finite and non-negative.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use ptraccel_filters::touchpad_accel_profile_linear;
///
/// let dpi = NonZeroU32::new(400).ok_or("zero dpi")?;
/// // 50 mm/s on a 400 dpi touchpad
/// let velocity = 50.0 * 400.0 / 25.4 / 1_000_000.0;
/// let factor = touchpad_accel_profile_linear(velocity, dpi, 1.0);
/// assert!((factor - 0.26712).abs() < 1e-4);
/// # Ok::<(), &'static str>(())
/// ```
#[inline]
pub fn touchpad_accel_profile_linear(velocity_us: f64, dpi: NonZeroU32, speed_factor: f64) -> f64 {
    let velocity_us = if velocity_us.is_finite() {
        velocity_us.max(0.0)
    } else {
        0.0
    };
    let speed_in_mm_s = velocity_to_mm_s(velocity_us, dpi);

    let factor = sensible_acceleration_factor(speed_in_mm_s) * speed_factor;
    factor * TP_MAGIC_SLOWDOWN
}
