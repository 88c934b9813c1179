//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can generate the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::partition::{PartitionOptions, SliceOrder};

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "timeline.json";

#[derive(Debug, Parser)]
#[command(
    name = "timeline-days",
    version,
    about = "Parse timeline.json and group semantic segments by day.",
    long_about = "Parse a location-history export and group its semantic segments by day.\n\n\
        Segments that cross midnight are split into one slice per calendar day, \
        using the offset each timestamp was recorded with."
)]
pub struct Cli {
    /// Path to input JSON file
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Path to output JSON file [default: timeline_by_day.json]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Include full timelinePath point arrays in output
    #[arg(long)]
    pub include_timeline_points: bool,

    /// Print result to stdout instead of writing to a file
    #[arg(long)]
    pub stdout: bool,

    /// Ordering of slices within a day
    #[arg(long, value_enum, value_name = "ORDER")]
    pub order: Option<SliceOrder>,

    /// Write JSON without indentation
    #[arg(long)]
    pub compact: bool,

    /// Read settings from this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", hide = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Partition options after applying flags on top of `config`.
    pub fn partition_options(&self, config: &Config) -> PartitionOptions {
        let mut options = config.partition_options();
        options.include_timeline_points |= self.include_timeline_points;
        if let Some(order) = self.order {
            options.slice_order = order;
        }
        options
    }

    /// Where the document is written when not printing to stdout.
    pub fn output_path(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| config.output.default_output.clone())
    }

    pub fn pretty(&self, config: &Config) -> bool {
        config.output.pretty && !self.compact
    }

    /// Default tracing filter for the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
