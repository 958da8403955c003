//! Litemath CLI
//!
//! Reads 3-D samples from a file or stdin and prints their centroid,
//! covariance, characteristic polynomial, eigenvalues, best-fit normal and
//! principal axis.
//!
//! Usage: `litemath [--format text|tex|json] [--config PATH] [--verbose] [FILE]`
//!
//! Environment:
//! - `LITEMATH_LOG`: log level for stderr (`error`, `warn`, `info`, `debug`, `trace`)

mod error;
mod input;
mod render;

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use clap::{Parser, ValueHint};
use tracing::{debug, error, Level};
use litemath_axis::{analyze, AxisConfig};
use crate::error::CliError;
use crate::render::{render, Format};

#[derive(Debug, Default, Parser)]
#[command(
    name = "litemath",
    version,
    about = "Centroid, covariance eigenvectors and best-fit normal of 3-D samples",
    long_about = "Reads one 3-D sample per line (comma or whitespace separated) or a JSON \
                  array of points from FILE, or stdin when FILE is omitted or `-`."
)]
struct Options {
    /// Samples file
    #[arg(value_hint = ValueHint::FilePath)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// JSON analysis config
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Debug logging (overrides LITEMATH_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Log level from `--verbose`, then `LITEMATH_LOG`, then `info`
fn log_level(verbose: bool) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    env::var("LITEMATH_LOG")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(Level::INFO)
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AxisConfig, CliError> {
    match path {
        None => Ok(AxisConfig::default()),
        Some(p) => {
            let text = fs::read_to_string(p).map_err(|e| CliError::io(p.display().to_string(), e))?;
            let config = serde_json::from_str(&text)?;
            debug!(path = %p.display(), ?config, "config loaded");
            Ok(config)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read_to_string(p).map_err(|e| CliError::io(p.display().to_string(), e))
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::io("<stdin>", e))?;
            Ok(text)
        }
    }
}

fn run(opts: &Options) -> Result<String, CliError> {
    let config = load_config(opts.config.as_deref())?;
    let text = read_input(opts.input.as_deref())?;
    let points = input::parse_points(&text);
    debug!(points = points.len(), "samples parsed");

    let analysis = analyze(&points, &config)?;
    render(&analysis, opts.format)
}

fn main() -> ExitCode {
    let opts = Options::parse();
    init_logging(log_level(opts.verbose));

    match run(&opts) {
        Ok(out) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout.write_all(out.as_bytes()).and_then(|_| stdout.flush()) {
                error!("failed to write output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
