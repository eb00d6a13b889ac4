//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates the domain and the collaborator ports:
//!
//! - [`orchestrator`]: load, measure, select, score, estimate ages
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{FormulaFailure, FormulaScore, MeasuredText, ReadabilityReport};
pub use orchestrator::AssessReadability;
