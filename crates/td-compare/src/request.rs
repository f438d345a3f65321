//! Comparison requests and the fixed plan that produces them.
//!
//! Each build writes `<base>/<variant dir>/build/results_<tag>_<count>.txt`,
//! one file per fighter count.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fighter counts compared when none are given.
pub const DEFAULT_COUNTS: [u32; 2] = [8, 16];

/// One build of the tournament program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildVariant {
    /// Directory under the base directory, e.g. `version_4_8`.
    pub dir: String,
    /// Synchronization tag used in the file name, e.g. `mutex`.
    pub tag: String,
}

impl BuildVariant {
    pub fn new(dir: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            tag: tag.into(),
        }
    }

    /// Mutex-based build.
    pub fn mutex() -> Self {
        Self::new("version_4_8", "mutex")
    }

    /// Atomics/spinlock build.
    pub fn atomic() -> Self {
        Self::new("version_9_10", "atomic")
    }

    pub fn results_path(&self, base: &Path, count: u32) -> PathBuf {
        base.join(&self.dir)
            .join("build")
            .join(format!("results_{}_{}.txt", self.tag, count))
    }
}

/// Two paths to compare and the header shown above the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRequest {
    pub description: String,
    pub left: PathBuf,
    pub right: PathBuf,
}

impl ComparisonRequest {
    pub fn new(
        description: impl Into<String>,
        left: impl Into<PathBuf>,
        right: impl Into<PathBuf>,
    ) -> Self {
        Self {
            description: description.into(),
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Which files a run compares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPlan {
    pub base_dir: PathBuf,
    pub left: BuildVariant,
    pub right: BuildVariant,
    pub counts: Vec<u32>,
}

impl ComparisonPlan {
    /// Mutex build vs atomic build for 8 and 16 fighters.
    pub fn standard(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            left: BuildVariant::mutex(),
            right: BuildVariant::atomic(),
            counts: DEFAULT_COUNTS.to_vec(),
        }
    }

    pub fn with_counts(mut self, counts: Vec<u32>) -> Self {
        self.counts = counts;
        self
    }

    /// One request per fighter count, in the given order.
    pub fn requests(&self) -> Vec<ComparisonRequest> {
        self.counts
            .iter()
            .map(|&n| {
                ComparisonRequest::new(
                    format!("Сравнение для {} бойцов", n),
                    self.left.results_path(&self.base_dir, n),
                    self.right.results_path(&self.base_dir, n),
                )
            })
            .collect()
    }
}
