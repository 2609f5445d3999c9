//! Speed preference mapping.

/// Lowest accepted speed adjustment.
pub const SPEED_ADJUSTMENT_MIN: f64 = -1.0;

/// Highest accepted speed adjustment.
pub const SPEED_ADJUSTMENT_MAX: f64 = 1.0;

/// Map a speed adjustment in `[-1, 1]` onto a multiplicative speed factor.
///
/// The scale is not linear. `0` is the tuned mid-point with a factor of
/// `1.0`; `-1` maps to `0.05` and `1` to just under `5`. Resolution is finest
/// at the low end where a small change can make slow movements get lost,
/// and coarse at the high end where it hardly matters.
///
/// Inputs are expected to be in range; callers validate before mapping.
///
/// # Example
///
/// ```
/// use ptraccel_filters::speed_factor;
///
/// assert!((speed_factor(0.0) - 1.0).abs() < 1e-12);
/// assert!((speed_factor(-1.0) - 0.05).abs() < 1e-12);
/// assert!((speed_factor(1.0) - 4.99).abs() < 0.01);
/// ```
#[inline]
pub fn speed_factor(speed_adjustment: f64) -> f64 {
    (speed_adjustment + 1.0).max(0.0).powf(2.38) * 0.95 + 0.05
}

/// Whether `speed_adjustment` is an accepted value (NaN is not).
#[inline]
pub fn is_valid_speed_adjustment(speed_adjustment: f64) -> bool {
    (SPEED_ADJUSTMENT_MIN..=SPEED_ADJUSTMENT_MAX).contains(&speed_adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_factor_endpoints() {
        assert!((speed_factor(-1.0) - 0.05).abs() < 1e-12);
        assert!((speed_factor(0.0) - 1.0).abs() < 1e-12);
        assert!((speed_factor(1.0) - 4.995_099).abs() < 1e-6);
    }

    #[test]
    fn test_speed_factor_is_increasing() {
        let mut previous = speed_factor(-1.0);
        for i in 1..=200 {
            let s = -1.0 + f64::from(i) * 0.01;
            let current = speed_factor(s);
            assert!(current > previous, "not increasing at {s}");
            previous = current;
        }
    }

    #[test]
    fn test_low_end_has_finer_resolution() {
        let low_step = speed_factor(-0.9) - speed_factor(-1.0);
        let high_step = speed_factor(1.0) - speed_factor(0.9);
        assert!(low_step < high_step);
    }

    #[test]
    fn test_valid_range() {
        assert!(is_valid_speed_adjustment(-1.0));
        assert!(is_valid_speed_adjustment(0.0));
        assert!(is_valid_speed_adjustment(1.0));
        assert!(!is_valid_speed_adjustment(1.000_001));
        assert!(!is_valid_speed_adjustment(-1.5));
        assert!(!is_valid_speed_adjustment(f64::NAN));
        assert!(!is_valid_speed_adjustment(f64::INFINITY));
    }
}
