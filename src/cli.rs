//! Command line interface definition using clap

use crate::version::Normalization;
use clap::Parser;
use std::path::PathBuf;

/// Checks project dependencies against their upstream latest versions
#[derive(Parser, Debug)]
#[command(name = "depfresh", version, about)]
pub struct CliArgs {
    /// Project directory to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file with tracked repositories (default: <path>/.depfresh.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Manifest file to parse, skipping auto-detection
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Compare versions verbatim instead of dropping pre-release suffixes
    #[arg(long)]
    pub strict: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Print every classification, not just the verdict
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Normalization strategy selected by the flags
    pub fn normalization(&self) -> Normalization {
        if self.strict {
            Normalization::StrictStrip
        } else {
            Normalization::PrefixCanonical
        }
    }
}
