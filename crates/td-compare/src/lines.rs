//! Noise-filtered line sequences.
//!
//! The tournament programs log every fighter's thread id, which differs on
//! every run. A `LineSequence` is the normalized view of a result file with
//! those lines removed, so both builds can be compared line by line.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CompareError;

/// Substring that marks a line as carrying a thread id ("Поток" = thread).
pub const NOISE_MARKER: &str = "Поток";

/// Ordered lines of one result file, minus every line containing the marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSequence {
    lines: Vec<String>,
    /// Number of lines dropped because they contained the marker.
    dropped: usize,
}

impl LineSequence {
    /// Build a sequence from in-memory text.
    pub fn from_text(text: &str, marker: &str) -> Self {
        let mut lines = Vec::new();
        let mut dropped = 0;

        for line in split_lines(text) {
            if line.contains(marker) {
                dropped += 1;
            } else {
                lines.push(line.to_string());
            }
        }

        Self { lines, dropped }
    }

    /// Read a whole file as UTF-8 and filter it.
    pub fn read(path: &Path, marker: &str) -> Result<Self, CompareError> {
        let bytes = fs::read(path).map_err(|source| CompareError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| CompareError::InvalidUtf8 {
            path: path.to_path_buf(),
        })?;

        let seq = Self::from_text(&text, marker);
        debug!(
            path = %path.display(),
            kept = seq.len(),
            dropped = seq.dropped,
            "filtered result file"
        );
        Ok(seq)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Split on `\n`, `\r\n` and lone `\r`.
///
/// A trailing terminator does not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}
