//! # Domain
//!
//! Pure readability logic: text metrics extraction, the four scoring
//! formulas, and the reader-age lookup. Nothing in this crate performs I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod age;
pub mod metrics;
pub mod model;
pub mod scoring;

pub use age::{AgeEstimate, SentinelPolicy, average_age, estimate_age};
pub use metrics::extract;
pub use model::{FormulaId, ScoreRequest, ScoreResult, TextCounts};
pub use scoring::{score, score_all, score_each};
