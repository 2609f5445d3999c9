//! Touchpad accelerator configuration.
//!
//! Configuration is built outside the event path (device setup, settings
//! changes) and turned into a filter with
//! [`TouchpadAccelerator::from_config`](crate::TouchpadAccelerator::from_config).

use serde::{Deserialize, Serialize};

use crate::error::{AccelError, Result};
use crate::speed::is_valid_speed_adjustment;

/// Default smoothing threshold: intervals below 10ms are replaced.
pub const DEFAULT_SMOOTHING_THRESHOLD_US: u64 = 10_000;

/// Default smoothing value: replaced intervals count as 15ms.
pub const DEFAULT_SMOOTHING_VALUE_US: u64 = 15_000;

/// Configuration for [`TouchpadAccelerator`](crate::TouchpadAccelerator).
///
/// # Example
///
/// ```
/// use ptraccel_filters::TouchpadAccelConfig;
///
/// let config = TouchpadAccelConfig {
///     dpi: 400,
///     speed: -0.25,
///     ..TouchpadAccelConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TouchpadAccelConfig {
    /// Native device resolution in dots per inch
    pub dpi: u32,
    /// Event intervals below this are smoothed (µs); zero disables smoothing
    pub smoothing_threshold_us: u64,
    /// Interval substituted for smoothed events (µs)
    pub smoothing_value_us: u64,
    /// Average velocity over 16 samples instead of 2
    pub use_velocity_averaging: bool,
    /// Speed adjustment in `[-1, 1]`
    pub speed: f64,
}

impl Default for TouchpadAccelConfig {
    fn default() -> Self {
        Self {
            dpi: ptraccel_tracking::DEFAULT_MOUSE_DPI,
            smoothing_threshold_us: DEFAULT_SMOOTHING_THRESHOLD_US,
            smoothing_value_us: DEFAULT_SMOOTHING_VALUE_US,
            use_velocity_averaging: false,
            speed: 0.0,
        }
    }
}

impl TouchpadAccelConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// - [`AccelError::InvalidDpi`] if `dpi` is zero
    /// - [`AccelError::SpeedOutOfRange`] if `speed` is outside `[-1, 1]`
    /// - [`AccelError::InvalidConfig`] if smoothing is enabled with a zero
    ///   substitute interval
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(AccelError::InvalidDpi { dpi: self.dpi });
        }
        if !is_valid_speed_adjustment(self.speed) {
            return Err(AccelError::SpeedOutOfRange { value: self.speed });
        }
        if self.smoothing_threshold_us > 0 && self.smoothing_value_us == 0 {
            return Err(AccelError::InvalidConfig(
                "smoothing_value_us must be positive when smoothing is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() -> Result<()> {
        TouchpadAccelConfig::default().validate()
    }

    #[test]
    fn test_zero_dpi_rejected() {
        let config = TouchpadAccelConfig {
            dpi: 0,
            ..TouchpadAccelConfig::default()
        };
        assert_eq!(config.validate(), Err(AccelError::InvalidDpi { dpi: 0 }));
    }

    #[test]
    fn test_out_of_range_speed_rejected() {
        let config = TouchpadAccelConfig {
            speed: 1.5,
            ..TouchpadAccelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AccelError::SpeedOutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_smoothing_value_rejected_only_when_enabled() -> Result<()> {
        let enabled = TouchpadAccelConfig {
            smoothing_value_us: 0,
            ..TouchpadAccelConfig::default()
        };
        assert!(matches!(
            enabled.validate(),
            Err(AccelError::InvalidConfig(_))
        ));

        let disabled = TouchpadAccelConfig {
            smoothing_threshold_us: 0,
            smoothing_value_us: 0,
            ..TouchpadAccelConfig::default()
        };
        disabled.validate()
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() -> std::result::Result<(), serde_json::Error> {
        let config: TouchpadAccelConfig =
            serde_json::from_str(r#"{ "dpi": 400, "use_velocity_averaging": true }"#)?;
        assert_eq!(config.dpi, 400);
        assert!(config.use_velocity_averaging);
        assert_eq!(config.smoothing_threshold_us, DEFAULT_SMOOTHING_THRESHOLD_US);
        assert!(config.speed.abs() < f64::EPSILON);
        Ok(())
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: std::result::Result<TouchpadAccelConfig, _> =
            serde_json::from_str(r#"{ "dpi": 400, "accel_profile": "flat" }"#);
        assert!(result.err().is_some());
    }
}
