//! The file comparator: existence checks, reading, filtering, diffing and
//! printing for one pair of result files.

use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::diff::{Outcome, diff_sequences};
use crate::error::CompareError;
use crate::lines::{LineSequence, NOISE_MARKER};
use crate::report::ComparisonReport;
use crate::request::ComparisonRequest;

/// Number of differences printed per comparison by default.
pub const DEFAULT_MAX_SHOWN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Lines containing this substring are ignored.
    pub marker: String,
    /// How many differences are listed before the "... и еще" line.
    pub max_shown: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            marker: NOISE_MARKER.to_string(),
            max_shown: DEFAULT_MAX_SHOWN,
        }
    }
}

/// Compare two result files and write the report block to `out`.
///
/// The header is written first, so it appears even when a file is missing.
/// A missing file yields [`Outcome::Missing`]; unreadable or non-UTF-8 files
/// are errors.
pub fn compare_files(
    left: &Path,
    right: &Path,
    description: &str,
    options: &CompareOptions,
    out: &mut impl Write,
) -> Result<ComparisonReport, CompareError> {
    ComparisonReport::render_header(description, out)?;

    let outcome = match missing_input(left, right) {
        Some(path) => {
            warn!(path = %path.display(), "result file not found");
            Outcome::Missing {
                path: path.to_path_buf(),
            }
        }
        None => {
            let a = LineSequence::read(left, &options.marker)?;
            let b = LineSequence::read(right, &options.marker)?;
            diff_sequences(&a, &b)
        }
    };

    info!(
        description,
        outcome = outcome.kind(),
        diffs = outcome.diff_count(),
        "comparison finished"
    );

    let report = ComparisonReport::new(description, outcome);
    report.render_body(options.max_shown, out)?;
    Ok(report)
}

/// [`compare_files`] for a prepared request.
pub fn compare_request(
    request: &ComparisonRequest,
    options: &CompareOptions,
    out: &mut impl Write,
) -> Result<ComparisonReport, CompareError> {
    compare_files(
        &request.left,
        &request.right,
        &request.description,
        options,
        out,
    )
}

/// First input that does not exist, checked left then right.
fn missing_input<'a>(left: &'a Path, right: &'a Path) -> Option<&'a Path> {
    [left, right].into_iter().find(|p| !p.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = CompareOptions::default();
        assert_eq!(opts.marker, "Поток");
        assert_eq!(opts.max_shown, 5);
    }

    #[test]
    fn test_missing_left_reported_before_right() {
        let dir = tempfile::tempdir().unwrap();
        let left = dir.path().join("left.txt");
        let right = dir.path().join("right.txt");

        let mut out = Vec::new();
        let report =
            compare_files(&left, &right, "desc", &CompareOptions::default(), &mut out).unwrap();

        assert_eq!(report.outcome, Outcome::Missing { path: left.clone() });
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\ndesc:\n"));
        assert!(text.contains(&format!("Файл {} не найден", left.display())));
        assert!(!text.contains("right.txt"));
    }
}
