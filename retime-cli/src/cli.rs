// retime-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use retime_core::config::{DEFAULT_DURATION_TOLERANCE_SECS, DEFAULT_TARGET_FPS};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "retime: change a video's frame rate",
    long_about = "Changes a video's frame rate with ffmpeg, either by dropping/duplicating \
                  frames or by motion-compensated interpolation, and checks that the \
                  running time is preserved."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts a video to a new frame rate
    Convert(ConvertArgs),
    /// Prints duration, resolution and frame rate of a video
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Input video file
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Output frame rate
    #[arg(
        short = 'r',
        long = "fps",
        value_name = "FPS",
        default_value_t = DEFAULT_TARGET_FPS,
        value_parser = parse_positive_f64
    )]
    pub fps: f64,

    /// Use motion-compensated frame interpolation (minterpolate)
    #[arg(long)]
    pub interpolate: bool,

    /// Directory for the converted file (defaults to <temp>/retime_output).
    /// Can also be set via the RETIME_OUTPUT_DIR environment variable.
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", env = "RETIME_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the converted file, overwritten on every run (default: output.mp4)
    #[arg(long, value_name = "NAME", conflicts_with = "unique_name")]
    pub output_name: Option<String>,

    /// Write to a randomly named file instead of a fixed one
    #[arg(long)]
    pub unique_name: bool,

    /// Allowed input/output duration difference in seconds before warning
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = DEFAULT_DURATION_TOLERANCE_SECS,
        value_parser = parse_non_negative_f64
    )]
    pub duration_tolerance: f64,

    /// Print the result as JSON instead of the output path
    #[arg(long)]
    pub json: bool,

    /// Do not show a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Video file to inspect
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the media info as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_positive_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("{s} must be a positive number"))
    }
}

fn parse_non_negative_f64(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("{s} must be a non-negative number"))
    }
}
