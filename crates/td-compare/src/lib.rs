//! Comparison framework for tournament result files produced by the mutex
//! and atomic builds.
//!
//! Provides noise-filtered line sequences, per-line diffing, report
//! rendering and a run-level summary.

pub mod compare;
pub mod diff;
pub mod error;
pub mod lines;
pub mod report;
pub mod request;

pub use compare::{CompareOptions, compare_files, compare_request};
pub use diff::{LineDiff, Outcome};
pub use error::CompareError;
pub use lines::{LineSequence, NOISE_MARKER};
pub use report::{ComparisonReport, SessionSummary};
pub use request::{BuildVariant, ComparisonPlan, ComparisonRequest};
