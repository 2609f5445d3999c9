//! Replay of recorded motion through a touchpad accelerator

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Result;
use ptraccel_filters::{DeviceFloatCoords, MotionFilter, TouchpadAccelConfig, TouchpadAccelerator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::output;

/// Which filter entry point an event goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    #[default]
    Motion,
    Constant,
    Restart,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Motion => write!(f, "motion"),
            EventKind::Constant => write!(f, "constant"),
            EventKind::Restart => write!(f, "restart"),
        }
    }
}

/// One recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceEvent {
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
    pub time_us: u64,
    #[serde(default)]
    pub kind: EventKind,
}

/// Filter output for one event. Restarts produce no coordinates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReplayRow {
    pub time_us: u64,
    pub kind: EventKind,
    pub dx: f64,
    pub dy: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Accelerator velocity estimate after the event (units/µs)
    pub velocity: f64,
}

/// Load an accelerator configuration, or the defaults without a file.
pub fn load_config(path: Option<&Path>) -> Result<TouchpadAccelConfig, CliError> {
    let Some(path) = path else {
        return Ok(TouchpadAccelConfig::default());
    };
    let content = fs::read_to_string(path)?;
    let config: TouchpadAccelConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a JSON trace.
pub fn parse_trace(content: &str) -> Result<Vec<TraceEvent>, CliError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a JSON trace file.
pub fn load_trace(path: &Path) -> Result<Vec<TraceEvent>, CliError> {
    parse_trace(&fs::read_to_string(path)?)
}

/// Feed `events` through `accel` in order.
///
/// # Errors
///
/// Returns [`CliError::InvalidTrace`] for timestamps that go backwards or
/// non-finite deltas; nothing after the offending event is processed.
pub fn replay(accel: &mut TouchpadAccelerator, events: &[TraceEvent]) -> Result<Vec<ReplayRow>, CliError> {
    let mut rows = Vec::with_capacity(events.len());
    let mut previous_time = None;

    for (index, event) in events.iter().enumerate() {
        if let Some(previous) = previous_time
            && event.time_us < previous
        {
            return Err(CliError::InvalidTrace(format!(
                "event {index} at {}us precedes previous event at {previous}us",
                event.time_us
            )));
        }
        previous_time = Some(event.time_us);

        let delta = DeviceFloatCoords::new(event.dx, event.dy);
        if !delta.is_finite() {
            return Err(CliError::InvalidTrace(format!(
                "event {index} has a non-finite delta"
            )));
        }

        let output = match event.kind {
            EventKind::Motion => Some(accel.filter(&delta, &mut (), event.time_us)),
            EventKind::Constant => Some(accel.filter_constant(&delta, &mut (), event.time_us)),
            EventKind::Restart => {
                accel.restart(&mut (), event.time_us);
                None
            }
        };

        rows.push(ReplayRow {
            time_us: event.time_us,
            kind: event.kind,
            dx: event.dx,
            dy: event.dy,
            x: output.map(|o| o.x),
            y: output.map(|o| o.y),
            velocity: accel.velocity(),
        });
    }

    Ok(rows)
}

/// Execute replay command
pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    debug!(?config, "Loaded accelerator configuration");
    let mut accel = TouchpadAccelerator::from_config(&config)?;

    let events = load_trace(&args.trace)?;
    info!(events = events.len(), trace = %args.trace.display(), "Replaying trace");
    let rows = replay(&mut accel, &events)?;

    if json {
        output::print_json(&rows)?;
    } else {
        let format_axis = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.time_us.to_string(),
                    row.kind.to_string(),
                    format!("{:.2}", row.dx),
                    format!("{:.2}", row.dy),
                    format_axis(row.x),
                    format_axis(row.y),
                    format!("{:.3e}", row.velocity),
                ]
            })
            .collect();
        output::print_table(&["time_us", "kind", "dx", "dy", "x", "y", "velocity"], &cells);
    }
    Ok(())
}
