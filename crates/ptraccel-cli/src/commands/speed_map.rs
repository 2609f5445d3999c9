//! Speed adjustment to speed factor table

use anyhow::Result;
use ptraccel_filters::speed_factor;
use serde::Serialize;

use crate::commands::SpeedMapArgs;
use crate::output;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpeedMapRow {
    pub adjustment: f64,
    pub speed_factor: f64,
}

/// Evenly spaced adjustments from -1 to 1 with their speed factors.
pub fn speed_map(steps: u32) -> Vec<SpeedMapRow> {
    let steps = steps.max(1);
    (0..=steps)
        .map(|i| {
            let adjustment = -1.0 + 2.0 * f64::from(i) / f64::from(steps);
            SpeedMapRow {
                adjustment,
                speed_factor: speed_factor(adjustment),
            }
        })
        .collect()
}

/// Execute speed-map command
pub fn execute(args: &SpeedMapArgs, json: bool) -> Result<()> {
    let rows = speed_map(args.steps);

    if json {
        output::print_json(&rows)?;
    } else {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    format!("{:+.3}", row.adjustment),
                    format!("{:.4}", row.speed_factor),
                ]
            })
            .collect();
        output::print_table(&["adjustment", "speed_factor"], &cells);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_map_endpoints() -> Result<(), Box<dyn std::error::Error>> {
        let rows = speed_map(4);
        assert_eq!(rows.len(), 5);

        let first = rows.first().ok_or("empty map")?;
        let middle = rows.get(2).ok_or("short map")?;
        let last = rows.last().ok_or("empty map")?;
        assert!((first.adjustment + 1.0).abs() < 1e-12);
        assert!((first.speed_factor - 0.05).abs() < 1e-12);
        assert!((middle.speed_factor - 1.0).abs() < 1e-12);
        assert!((last.adjustment - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_speed_map_zero_steps_is_clamped() {
        assert_eq!(speed_map(0).len(), 2);
    }
}
