//! # Bearing CLI
//!
//! Command-line front end for bearing_core. This is the request layer: it
//! takes the raw angle and method name from the user, hands them to the core
//! unchanged, and renders the factors or the error.

mod render;

use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bearing_core::calculator::{compute, compute_all, factor_table};
use bearing_core::methods::{generate_methods_markdown, registry::all_metadata, BearingMethod};
use bearing_core::{CalcError, FrictionAngle};

/// Largest table the `table` command will print
const MAX_TABLE_ROWS: usize = 10_000;

#[derive(Parser, Debug)]
#[command(name = "bearing", version, about = "Bearing capacity factors Nc, Nq, Nγ from a friction angle")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the factors for one method
    Compute {
        /// Method name (Terzaghi, Meyerhof, Vesic, Hansen, EC7)
        #[arg(short, long)]
        method: String,
        /// Friction angle φ in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        angle: f64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute the factors for every method at one angle
    Compare {
        /// Friction angle φ in degrees
        #[arg(short, long, allow_negative_numbers = true)]
        angle: f64,
        #[arg(long)]
        json: bool,
    },
    /// Tabulate one method over a range of angles
    Table {
        #[arg(short, long)]
        method: String,
        /// First angle (degrees)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,
        /// Last angle (degrees, inclusive)
        #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
        to: f64,
        /// Angle increment (degrees)
        #[arg(long, default_value_t = 1.0)]
        step: f64,
        #[arg(long)]
        json: bool,
    },
    /// List the supported methods
    Methods {
        /// Print the full markdown reference
        #[arg(long)]
        markdown: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Evenly spaced angles from `from` to `to` inclusive.
fn angle_range(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        bail!("--step must be a positive number, got {}", step);
    }
    if !(from.is_finite() && to.is_finite()) || to < from {
        bail!("--to ({}) must not be less than --from ({})", to, from);
    }

    // Small slack so that e.g. 0..=50 step 0.1 still ends on 50
    let count = ((to - from) / step + 1e-9).floor() + 1.0;
    if !count.is_finite() || count > MAX_TABLE_ROWS as f64 {
        bail!("range produces {} rows, the limit is {}", count, MAX_TABLE_ROWS);
    }
    let count = count as usize;
    Ok((0..count).map(|i| from + i as f64 * step).collect())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compute { method, angle, json } => {
            info!(%method, angle, "compute");
            let factors = compute(&method, angle)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&factors)?);
            } else {
                print!("{}", render::factors(&method, FrictionAngle::new(angle), &factors));
            }
        }
        Command::Compare { angle, json } => {
            info!(angle, "compare");
            let all = compute_all(angle);
            if json {
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                print!("{}", render::comparison(FrictionAngle::new(angle), &all));
            }
        }
        Command::Table { method, from, to, step, json } => {
            let parsed: BearingMethod = method.parse()?;
            let angles = angle_range(from, to, step)?;
            debug!(method = %parsed, rows = angles.len(), "table");
            let rows = factor_table(parsed, angles);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", render::table(parsed, &rows));
            }
        }
        Command::Methods { markdown } => {
            if markdown {
                print!("{}", generate_methods_markdown());
            } else {
                print!("{}", render::method_list(&all_metadata()));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(calc_err) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_range_inclusive() {
        let angles = angle_range(0.0, 50.0, 5.0).unwrap();
        assert_eq!(angles.len(), 11);
        assert_eq!(angles[0], 0.0);
        assert_eq!(angles[10], 50.0);
    }

    #[test]
    fn test_angle_range_fractional_step_reaches_end() {
        let angles = angle_range(0.0, 1.0, 0.1).unwrap();
        assert_eq!(angles.len(), 11);
        assert!((angles[10] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_range_single_point() {
        assert_eq!(angle_range(30.0, 30.0, 1.0).unwrap(), vec![30.0]);
    }

    #[test]
    fn test_angle_range_rejects_bad_input() {
        assert!(angle_range(0.0, 10.0, 0.0).is_err());
        assert!(angle_range(0.0, 10.0, -1.0).is_err());
        assert!(angle_range(10.0, 0.0, 1.0).is_err());
        assert!(angle_range(0.0, 1e9, 0.001).is_err());
    }

    #[test]
    fn test_angle_range_huge_row_count_is_error() {
        assert!(angle_range(0.0, 1e300, 1e-300).is_err());
        assert!(angle_range(-1e308, 1e308, 1.0).is_err());
        assert_eq!(angle_range(0.0, 9_999.0, 1.0).unwrap().len(), MAX_TABLE_ROWS);
    }

    #[test]
    fn test_cli_parses_negative_angle() {
        let cli = Cli::try_parse_from(["bearing", "compute", "-m", "Vesic", "-a", "-30"]).unwrap();
        match cli.command {
            Command::Compute { method, angle, json } => {
                assert_eq!(method, "Vesic");
                assert_eq!(angle, -30.0);
                assert!(!json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_method_is_calc_error() {
        let cli = Cli::try_parse_from(["bearing", "compute", "-m", "Prandtl", "-a", "30"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(err.downcast_ref::<CalcError>().is_some());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
