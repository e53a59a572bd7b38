//! Command-line argument definitions for the Archboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, template selection,
//! configuration file selection and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Archboard dashboard tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input data bundle (TOML)
    #[arg(help = "Path to the input bundle")]
    pub input: String,

    /// Path to the output draw.io file
    #[arg(short, long, default_value = "out.drawio")]
    pub output: String,

    /// Layout template; overrides the bundle and the configured default
    #[arg(short, long)]
    pub template: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
