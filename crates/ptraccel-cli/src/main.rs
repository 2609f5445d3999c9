//! ptraccel - Touchpad Pointer Acceleration CLI
//!
//! Inspect the adaptive touchpad acceleration curve, the speed setting
//! mapping, and replay recorded motion through an accelerator.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{CurveArgs, ReplayArgs, SpeedMapArgs};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "ptraccel")]
#[command(about = "Touchpad pointer acceleration - curve inspection and trace replay")]
#[command(version)]
#[command(long_about = "
ptraccel drives the adaptive touchpad accelerator outside of an input stack.
It prints the effective acceleration curve for a device resolution and speed
setting, the speed setting mapping, and replays recorded motion events.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sample the effective acceleration curve
    Curve(CurveArgs),

    /// Show how speed adjustments map to speed factors
    SpeedMap(SpeedMapArgs),

    /// Feed a recorded trace through an accelerator
    Replay(ReplayArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("ptraccel={log_level},ptraccel_filters={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }

            let exit_code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(exit_code)
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Curve(args) => commands::curve::execute(args, cli.json),
        Commands::SpeedMap(args) => commands::speed_map::execute(args, cli.json),
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parse_curve_defaults() -> TestResult {
        let cli = Cli::try_parse_from(["ptraccel", "curve"])?;
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        match &cli.command {
            Commands::Curve(args) => {
                assert_eq!(args.dpi, 1000);
                assert!(args.speed.abs() < f64::EPSILON);
                assert!((args.max - 500.0).abs() < f64::EPSILON);
                assert!((args.step - 25.0).abs() < f64::EPSILON);
            }
            _ => return Err("expected Curve command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_curve_negative_speed() -> TestResult {
        let cli = Cli::try_parse_from(["ptraccel", "curve", "--dpi", "400", "--speed", "-0.5"])?;
        match &cli.command {
            Commands::Curve(args) => {
                assert_eq!(args.dpi, 400);
                assert!((args.speed + 0.5).abs() < f64::EPSILON);
            }
            _ => return Err("expected Curve command".into()),
        }
        Ok(())
    }

    #[test]
    fn parse_global_flags_after_subcommand() -> TestResult {
        let cli = Cli::try_parse_from(["ptraccel", "speed-map", "--json", "-vv"])?;
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::SpeedMap(SpeedMapArgs { steps: 8 })
        ));
        Ok(())
    }

    #[test]
    fn parse_speed_map_rejects_zero_steps() {
        let result = Cli::try_parse_from(["ptraccel", "speed-map", "--steps", "0"]);
        assert!(result.err().is_some());
    }

    #[test]
    fn parse_replay_requires_trace() -> TestResult {
        assert!(Cli::try_parse_from(["ptraccel", "replay"]).err().is_some());

        let cli = Cli::try_parse_from([
            "ptraccel",
            "replay",
            "--config",
            "touchpad.json",
            "--trace",
            "motion.json",
        ])?;
        match &cli.command {
            Commands::Replay(args) => {
                assert_eq!(
                    args.config.as_deref(),
                    Some(std::path::Path::new("touchpad.json"))
                );
                assert_eq!(args.trace, std::path::Path::new("motion.json"));
            }
            _ => return Err("expected Replay command".into()),
        }
        Ok(())
    }

    #[test]
    fn cli_error_exit_codes() {
        assert_eq!(CliError::InvalidTrace("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::IoError(std::io::Error::other("missing")).exit_code(),
            2
        );
    }
}
