use readability_domain::{
    ScoreRequest, SentinelPolicy, TextCounts, average_age, estimate_age, extract, score_each,
};
use readability_ports::{
    selection::FormulaSelector,
    text_source::{TextSource, TextSourcePlan},
};
use readability_shared_kernel::{DomainError, ErrorContext, Result};

use crate::dto::{FormulaFailure, FormulaScore, MeasuredText, ReadabilityReport};

pub struct AssessReadability<'a> {
    source: &'a dyn TextSource,
    selector: &'a dyn FormulaSelector,
    policy: SentinelPolicy,
}

impl<'a> AssessReadability<'a> {
    pub fn new(source: &'a dyn TextSource, selector: &'a dyn FormulaSelector) -> Self {
        Self { source, selector, policy: SentinelPolicy::default() }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SentinelPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the document and extracts its counts.
    pub fn measure(&self, plan: &TextSourcePlan) -> Result<MeasuredText> {
        let text = self.source.read_text(plan)?;
        let counts = extract(&text).with_context(|| format!("measuring '{}'", plan.path.display()))?;
        Ok(MeasuredText { text, counts })
    }

    /// Asks for a selection and scores the measured text.
    pub fn assess(&self, measured: &MeasuredText) -> Result<ReadabilityReport> {
        let selection = self.selector.read_selection()?;
        let request = ScoreRequest::parse(&selection);
        log::debug!("requested scores: {request:?}");
        self.evaluate(&request, measured.counts)
    }

    /// Scores `counts` for an already parsed request.
    ///
    /// Formulas that cannot be computed are reported as failures next to the
    /// scores that can; only the computed scores enter the average.
    pub fn evaluate(&self, request: &ScoreRequest, counts: TextCounts) -> Result<ReadabilityReport> {
        let mut scores = Vec::new();
        let mut failures = Vec::new();
        for (formula, outcome) in score_each(request, &counts) {
            match outcome {
                Ok(score) => scores.push(FormulaScore {
                    formula,
                    name: formula.full_name(),
                    score,
                    age: estimate_age(score),
                }),
                Err(err) => {
                    log::warn!("{err}");
                    failures.push(FormulaFailure::new(formula, err));
                }
            }
        }

        let ages: Vec<_> = scores.iter().map(|s| s.age).collect();
        let average_age = match average_age(&ages, self.policy) {
            Ok(mean) => Some(mean),
            Err(DomainError::AverageUndefined) => {
                log::debug!("average age undefined for {} score(s)", scores.len());
                None
            }
            Err(err) => return Err(err.into()),
        };

        Ok(ReadabilityReport { counts, scores, failures, average_policy: self.policy, average_age })
    }

    pub fn run(&self, plan: &TextSourcePlan) -> Result<ReadabilityReport> {
        let measured = self.measure(plan)?;
        self.assess(&measured)
    }
}
