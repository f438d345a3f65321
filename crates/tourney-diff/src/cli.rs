use std::path::{Path, PathBuf};

use clap::Parser;
use td_compare::CompareOptions;
use td_compare::compare::DEFAULT_MAX_SHOWN;
use td_compare::request::DEFAULT_COUNTS;

/// Compare tournament results of the mutex and atomic builds,
/// ignoring lines that carry thread ids.
#[derive(Parser, Debug)]
#[command(name = "tourney-diff")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding version_4_8/ and version_9_10/ (defaults to the workspace root)
    #[arg(long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Fighter counts to compare
    #[arg(long = "counts", num_args = 1.., default_values_t = DEFAULT_COUNTS)]
    pub counts: Vec<u32>,

    /// Lines containing this text are ignored
    #[arg(long = "marker", default_value = td_compare::NOISE_MARKER)]
    pub marker: String,

    /// Differences listed per comparison
    #[arg(long = "max-shown", default_value_t = DEFAULT_MAX_SHOWN)]
    pub max_shown: usize,

    /// Write a JSON summary of all comparisons to this file
    #[arg(long = "json")]
    pub json: Option<PathBuf>,

    /// Exit with status 1 if any comparison is not identical
    #[arg(long = "strict")]
    pub strict: bool,

    /// Log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(default_base_dir)
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            marker: self.marker.clone(),
            max_shown: self.max_shown,
        }
    }
}

/// Workspace root: two levels above this crate's manifest.
pub fn default_base_dir() -> PathBuf {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .ancestors()
        .nth(2)
        .unwrap_or(manifest)
        .to_path_buf()
}
