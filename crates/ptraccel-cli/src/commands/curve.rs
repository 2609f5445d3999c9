//! Effective acceleration curve sampling

use anyhow::Result;
use ptraccel_filters::{TouchpadAccelerator, sensible_acceleration_factor};
use serde::Serialize;
use tracing::debug;

use crate::commands::CurveArgs;
use crate::error::CliError;
use crate::output;

const MM_PER_INCH: f64 = 25.4;

/// Upper bound on rows per table.
const MAX_SAMPLES: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurveRow {
    pub speed_mm_s: f64,
    /// Device units/µs at this finger speed
    pub velocity: f64,
    /// Curve value before speed factor and slowdown
    pub curve: f64,
    /// Factor the accelerator applies to a raw delta
    pub factor: f64,
}

/// Sample the curve of a touchpad at `dpi` and `speed` from 0 to `max` mm/s.
///
/// # Errors
///
/// Returns an error for a zero dpi, an out-of-range speed, or a step that
/// is non-positive or too small for `max`.
pub fn sample_curve(dpi: u32, speed: f64, max: f64, step: f64) -> Result<Vec<CurveRow>, CliError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidArgument(format!("step must be positive, got {step}")));
    }
    if !(max.is_finite() && max >= 0.0) {
        return Err(CliError::InvalidArgument(format!("max must be non-negative, got {max}")));
    }
    if max / step > MAX_SAMPLES {
        return Err(CliError::InvalidArgument(format!(
            "step {step} is too small for max {max}"
        )));
    }

    let mut accel = TouchpadAccelerator::new(dpi, 0, 0, false)?;
    accel.set_speed(speed)?;
    debug!(dpi, speed, max, step, "Sampling touchpad curve");

    let units_per_mm = f64::from(accel.dpi().get()) / MM_PER_INCH;
    let rows = (0u32..)
        .map(|i| f64::from(i) * step)
        .take_while(|speed_mm_s| *speed_mm_s <= max)
        .map(|speed_mm_s| {
            let velocity = speed_mm_s * units_per_mm / 1_000_000.0;
            CurveRow {
                speed_mm_s,
                velocity,
                curve: sensible_acceleration_factor(speed_mm_s),
                factor: accel.touchpad_accel_profile_linear(&(), velocity, 0),
            }
        })
        .collect();
    Ok(rows)
}

/// Execute curve command
pub fn execute(args: &CurveArgs, json: bool) -> Result<()> {
    let rows = sample_curve(args.dpi, args.speed, args.max, args.step)?;

    if json {
        output::print_json(&rows)?;
    } else {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    format!("{:.1}", row.speed_mm_s),
                    format!("{:.3e}", row.velocity),
                    format!("{:.4}", row.curve),
                    format!("{:.5}", row.factor),
                ]
            })
            .collect();
        output::print_table(&["mm/s", "units/us", "curve", "factor"], &cells);
    }
    Ok(())
}
