//! Command-line argument definitions for the dotloom CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control input/output paths,
//! configuration file selection, sample scaffolding, and the optional
//! Graphviz invocation.

use clap::Parser;

/// Command-line arguments for the dotloom converter
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Convert JSON data models to DOT (Graphviz) diagrams",
    long_about = None
)]
pub struct Args {
    /// Path to the input JSON model
    #[arg(required_unless_present = "create_sample")]
    pub input: Option<String>,

    /// Path to the output DOT file
    #[arg(required_unless_present = "create_sample")]
    pub output: Option<String>,

    /// Path to a custom configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Create sample JSON and configuration files with this prefix
    #[arg(long, value_name = "PREFIX")]
    pub create_sample: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output image format (png, svg, pdf)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Automatically render the diagram using Graphviz
    #[arg(long)]
    pub render: bool,
}
