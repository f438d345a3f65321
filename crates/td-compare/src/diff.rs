//! Line-by-line diffing of two filtered sequences.
//!
//! Lines are paired by position and compared after trimming surrounding
//! whitespace. Sequences of different lengths are never paired: the length
//! mismatch is the whole result.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::lines::LineSequence;

/// A single line that differs between the two builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// 1-based position within the filtered sequences.
    pub index: usize,
    pub left: String,
    pub right: String,
}

impl core::fmt::Display for LineDiff {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}: left={:?}, right={:?}", self.index, self.left, self.right)
    }
}

/// Result of comparing one pair of files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// Same lines after filtering and trimming.
    Identical,
    /// One of the inputs does not exist; the other was not read.
    Missing { path: PathBuf },
    /// Filtered line counts differ; no per-line diff was attempted.
    LengthMismatch { left: usize, right: usize },
    /// Same length, but these lines differ (in encounter order).
    Differs { diffs: Vec<LineDiff> },
}

impl Outcome {
    /// True only for [`Outcome::Identical`].
    pub fn is_equivalent(&self) -> bool {
        matches!(self, Outcome::Identical)
    }

    /// Number of differing lines (zero unless [`Outcome::Differs`]).
    pub fn diff_count(&self) -> usize {
        match self {
            Outcome::Differs { diffs } => diffs.len(),
            _ => 0,
        }
    }

    /// Short machine-friendly label.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Identical => "identical",
            Outcome::Missing { .. } => "missing",
            Outcome::LengthMismatch { .. } => "length_mismatch",
            Outcome::Differs { .. } => "differs",
        }
    }
}

/// Compare two filtered sequences.
pub fn diff_sequences(left: &LineSequence, right: &LineSequence) -> Outcome {
    if left.len() != right.len() {
        return Outcome::LengthMismatch {
            left: left.len(),
            right: right.len(),
        };
    }

    let diffs: Vec<LineDiff> = left
        .iter()
        .zip(right.iter())
        .enumerate()
        .filter_map(|(i, (l, r))| {
            let (l, r) = (l.trim(), r.trim());
            (l != r).then(|| LineDiff {
                index: i + 1,
                left: l.to_string(),
                right: r.to_string(),
            })
        })
        .collect();

    if diffs.is_empty() {
        Outcome::Identical
    } else {
        Outcome::Differs { diffs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::NOISE_MARKER;

    fn seq(text: &str) -> LineSequence {
        LineSequence::from_text(text, NOISE_MARKER)
    }

    #[test]
    fn test_identical_sequences() {
        let a = seq("Раунд 1\nПобедитель: Боец 3\n");
        assert_eq!(diff_sequences(&a, &a), Outcome::Identical);
    }

    #[test]
    fn test_thread_lines_ignored() {
        let a = seq("Line1\nПоток-5 running\nLine3\n");
        let b = seq("Line1\nПоток-9 running\nLine3\n");
        assert!(diff_sequences(&a, &b).is_equivalent());
    }

    #[test]
    fn test_length_mismatch_short_circuits() {
        let a = seq("a\nb\nc\n");
        let b = seq("x\ny\nz\nw\n");
        assert_eq!(
            diff_sequences(&a, &b),
            Outcome::LengthMismatch { left: 3, right: 4 }
        );
    }

    #[test]
    fn test_whitespace_only_difference() {
        let a = seq("  Раунд 1\t\nend\n");
        let b = seq("Раунд 1   \nend\n");
        assert_eq!(diff_sequences(&a, &b), Outcome::Identical);
    }

    #[test]
    fn test_diffs_are_one_based_and_trimmed() {
        let a = seq("same\n  old \nsame\n");
        let b = seq("same\nnew\nsame\n");
        let outcome = diff_sequences(&a, &b);
        assert_eq!(outcome.diff_count(), 1);
        assert_eq!(
            outcome,
            Outcome::Differs {
                diffs: vec![LineDiff {
                    index: 2,
                    left: "old".into(),
                    right: "new".into(),
                }]
            }
        );
    }

    #[test]
    fn test_outcome_kind_labels() {
        assert_eq!(Outcome::Identical.kind(), "identical");
        assert_eq!(
            Outcome::Missing { path: PathBuf::from("x") }.kind(),
            "missing"
        );
        assert!(!Outcome::LengthMismatch { left: 1, right: 2 }.is_equivalent());
    }
}
