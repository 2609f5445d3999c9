//! Coordinate types for device-native and normalized motion deltas.
//!
//! Device deltas and normalized deltas are separate types so that a value
//! in device units can never be handed to something expecting DPI-independent
//! units. The only conversion is [`normalize_for_dpi`].

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Reference resolution that normalized coordinates are expressed in.
pub const DEFAULT_MOUSE_DPI: u32 = 1000;

/// A relative motion delta in the device's native resolution.
///
/// # RT Safety
///
/// - `#[repr(C)]` for stable ABI
/// - `Copy`, no heap allocations
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceFloatCoords {
    /// Horizontal delta in device units
    pub x: f64,
    /// Vertical delta in device units (positive is down)
    pub y: f64,
}

impl DeviceFloatCoords {
    /// Create a new device delta.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both axes by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Euclidean length of the delta.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Whether both axes are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A relative motion delta in DPI-independent units.
///
/// One normalized unit corresponds to one device unit of a
/// [`DEFAULT_MOUSE_DPI`] device.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoords {
    /// Horizontal delta
    pub x: f64,
    /// Vertical delta (positive is down)
    pub y: f64,
}

impl NormalizedCoords {
    /// Create a new normalized delta.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both axes by `factor`.
    #[inline]
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Whether both axes are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Rescale a device delta to the [`DEFAULT_MOUSE_DPI`] reference space.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use ptraccel_tracking::{DeviceFloatCoords, normalize_for_dpi};
///
/// let dpi = NonZeroU32::new(500).ok_or("zero dpi")?;
/// let norm = normalize_for_dpi(&DeviceFloatCoords::new(1.0, -2.0), dpi);
/// assert!((norm.x - 2.0).abs() < 1e-12);
/// assert!((norm.y + 4.0).abs() < 1e-12);
/// # Ok::<(), &'static str>(())
/// ```
#[inline]
pub fn normalize_for_dpi(coords: &DeviceFloatCoords, dpi: NonZeroU32) -> NormalizedCoords {
    let dpi = f64::from(dpi.get());
    let reference = f64::from(DEFAULT_MOUSE_DPI);
    NormalizedCoords {
        x: coords.x * reference / dpi,
        y: coords.y * reference / dpi,
    }
}
