//! CLI argument definitions using clap.
//!
//! Positional paths are order-significant:
//!
//! ```text
//! validate-methods <implementation1.cpp> [implementation2.cpp] <interface.cpp> <interface.h>
//! ```
//!
//! With `--skip-availability` the trailing header is omitted and only the
//! dispatch check runs.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::sources::Mode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "validate-methods", author, version, about, long_about = None)]
pub struct Arguments {
    /// Implementation sources, then the interface source, then the interface header
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Only check dispatch completeness (no interface header is given)
    #[arg(long)]
    pub skip_availability: bool,

    /// Configuration file (default: search for .validate-methods.json upwards)
    #[arg(long, env = "VALIDATE_METHODS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Require each method to be dispatched exactly as often as it is declared
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the default configuration and exit
    #[arg(long)]
    pub print_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn mode(&self) -> Mode {
        if self.skip_availability {
            Mode::SkipAvailability
        } else {
            Mode::Full
        }
    }
}
