//! Command implementations for the ptraccel CLI

pub mod curve;
pub mod replay;
pub mod speed_map;

use std::path::PathBuf;

use clap::Args;

#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Native device resolution in dots per inch
    #[arg(long, default_value_t = 1000)]
    pub dpi: u32,

    /// Speed adjustment in [-1, 1]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub speed: f64,

    /// Highest finger speed to sample (mm/s)
    #[arg(long, default_value_t = 500.0)]
    pub max: f64,

    /// Sampling step (mm/s)
    #[arg(long, default_value_t = 25.0)]
    pub step: f64,
}

#[derive(Args, Debug)]
pub struct SpeedMapArgs {
    /// Number of intervals between -1 and 1
    #[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub steps: u32,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Accelerator configuration (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Recorded motion events (JSON list)
    #[arg(long)]
    pub trace: PathBuf,
}
