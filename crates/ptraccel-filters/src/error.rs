//! Error types for acceleration filter configuration.
//!
//! Only configuration can fail. The per-event calls (`filter`,
//! `filter_constant`, `filter_scroll`, `restart`) are infallible.

use thiserror::Error;

/// Error type for filter construction and configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccelError {
    /// Speed adjustment outside `[-1, 1]`, or NaN.
    ///
    /// Out-of-range values are rejected rather than clamped.
    #[error("Speed adjustment {value} is outside valid range [-1,1]")]
    SpeedOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// Device resolution of zero.
    #[error("Device resolution must be positive, got {dpi}")]
    InvalidDpi {
        /// The rejected resolution.
        dpi: u32,
    },

    /// Invalid configuration value.
    #[error("Invalid accelerator configuration: {0}")]
    InvalidConfig(String),
}

/// A specialized `Result` type for filter configuration.
pub type Result<T> = std::result::Result<T, AccelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_speed() {
        let err = AccelError::SpeedOutOfRange { value: 1.5 };
        let msg = err.to_string();
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[-1,1]"));
    }

    #[test]
    fn test_error_display_dpi() {
        let msg = AccelError::InvalidDpi { dpi: 0 }.to_string();
        assert!(msg.contains("must be positive"));
    }

    #[test]
    fn test_error_display_config() {
        let msg = AccelError::InvalidConfig("smoothing value is zero".to_string()).to_string();
        assert!(msg.contains("Invalid accelerator configuration"));
        assert!(msg.contains("smoothing value is zero"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = AccelError::InvalidDpi { dpi: 0 };
        let _: &dyn std::error::Error = &err;
    }
}
