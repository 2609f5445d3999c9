//! Curve integration between velocity samples.
//!
//! Events do not arrive at a fixed rate, and some carry several hardware
//! samples. Evaluating an acceleration profile at the latest velocity alone
//! makes the factor jump between events. Averaging the profile over the
//! interval between the previous and the current velocity follows the
//! curve instead.

/// Average `profile` between `last_velocity` and `velocity` using Simpson's
/// rule.
///
/// The profile is evaluated at both endpoints and at the midpoint, each call
/// receiving `time` unchanged. Non-finite results collapse to `0.0`.
///
/// # RT Safety
///
/// - No heap allocations
/// - Exactly three profile evaluations
///
/// # Example
///
/// ```
/// use ptraccel_tracking::calculate_acceleration_simpsons;
///
/// // A linear profile integrates to its value at the midpoint
/// let factor = calculate_acceleration_simpsons(|v, _| 2.0 * v, 3.0, 1.0, 0);
/// assert!((factor - 4.0).abs() < 1e-12);
/// ```
#[inline]
pub fn calculate_acceleration_simpsons<F>(
    mut profile: F,
    velocity: f64,
    last_velocity: f64,
    time: u64,
) -> f64
where
    F: FnMut(f64, u64) -> f64,
{
    let mut factor = profile(velocity, time);
    factor += profile(last_velocity, time);
    factor += 4.0 * profile((last_velocity + velocity) / 2.0, time);

    let factor = factor / 6.0;
    if factor.is_finite() { factor } else { 0.0 }
}
