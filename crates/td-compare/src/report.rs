//! Report rendering: the human-readable block printed for each comparison,
//! plus a run-level summary that can be saved as JSON.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diff::Outcome;
use crate::error::CompareError;

/// Outcome of one comparison, labelled with its description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub description: String,
    pub outcome: Outcome,
}

impl ComparisonReport {
    pub fn new(description: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            description: description.into(),
            outcome,
        }
    }

    pub fn is_equivalent(&self) -> bool {
        self.outcome.is_equivalent()
    }

    /// Header line, written before any file is touched.
    pub fn render_header(description: &str, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "\n{}:", description)
    }

    /// Everything after the header. At most `max_shown` diffs are listed.
    pub fn render_body(&self, max_shown: usize, out: &mut impl Write) -> std::io::Result<()> {
        match &self.outcome {
            Outcome::Missing { path } => {
                writeln!(out, "  Файл {} не найден", path.display())?;
            }
            Outcome::LengthMismatch { left, right } => {
                writeln!(out, "  Разное количество строк: {} vs {}", left, right)?;
            }
            Outcome::Differs { diffs } => {
                writeln!(out, "  Найдено {} различий:", diffs.len())?;
                for d in diffs.iter().take(max_shown) {
                    writeln!(out, "    Строка {}:", d.index)?;
                    writeln!(out, "      Версия 1: {}", d.left)?;
                    writeln!(out, "      Версия 2: {}", d.right)?;
                }
                if diffs.len() > max_shown {
                    writeln!(out, "    ... и еще {} различий", diffs.len() - max_shown)?;
                }
            }
            Outcome::Identical => {
                writeln!(out, "  Файлы идентичны (игнорируя ID потоков)")?;
            }
        }
        Ok(())
    }

    /// Header and body together.
    pub fn render(&self, max_shown: usize, out: &mut impl Write) -> std::io::Result<()> {
        Self::render_header(&self.description, out)?;
        self.render_body(max_shown, out)
    }
}

/// One line of the run summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub description: String,
    pub kind: String,
    pub equivalent: bool,
    pub diff_count: usize,
}

/// Aggregate of every comparison made in one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSummary {
    pub entries: Vec<SummaryEntry>,
    pub equivalent_count: usize,
    pub mismatch_count: usize,
}

impl SessionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished comparison.
    pub fn add(&mut self, report: &ComparisonReport) {
        let equivalent = report.is_equivalent();
        if equivalent {
            self.equivalent_count += 1;
        } else {
            self.mismatch_count += 1;
        }
        self.entries.push(SummaryEntry {
            description: report.description.clone(),
            kind: report.outcome.kind().to_string(),
            equivalent,
            diff_count: report.outcome.diff_count(),
        });
    }

    /// True if every recorded comparison was equivalent.
    pub fn passed(&self) -> bool {
        self.mismatch_count == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the pretty JSON form to `path`.
    pub fn write_json(&self, path: &Path) -> Result<(), CompareError> {
        let summary_err = |reason: String| CompareError::Summary {
            path: path.to_path_buf(),
            reason,
        };
        let json = self.to_json().map_err(|e| summary_err(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| summary_err(e.to_string()))
    }
}
