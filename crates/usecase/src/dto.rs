use readability_domain::{AgeEstimate, FormulaId, SentinelPolicy, TextCounts};
use readability_shared_kernel::DomainError;
use serde::Serialize;

/// A loaded document together with its counts.
#[derive(Debug, Clone, Serialize)]
pub struct MeasuredText {
    pub text: String,
    pub counts: TextCounts,
}

/// One computed formula with its age estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaScore {
    pub formula: FormulaId,
    pub name: &'static str,
    pub score: f64,
    pub age: AgeEstimate,
}

/// A requested formula that could not be computed for this text.
#[derive(Debug, Clone, Serialize)]
pub struct FormulaFailure {
    pub formula: FormulaId,
    pub name: &'static str,
    pub reason: String,
    #[serde(skip)]
    pub error: DomainError,
}

impl FormulaFailure {
    pub fn new(formula: FormulaId, error: DomainError) -> Self {
        Self { formula, name: formula.full_name(), reason: error.to_string(), error }
    }
}

/// Everything the presentation layer reports for one document.
#[derive(Debug, Clone, Serialize)]
pub struct ReadabilityReport {
    pub counts: TextCounts,
    pub scores: Vec<FormulaScore>,
    /// Requested formulas whose denominator was zero, in reporting order.
    pub failures: Vec<FormulaFailure>,
    pub average_policy: SentinelPolicy,
    /// `None` when no score was selected or none could be computed.
    pub average_age: Option<f64>,
}
