// crates/domain/src/scoring.rs
use readability_shared_kernel::{DomainError, DomainResult};

use crate::model::{FormulaId, ScoreRequest, ScoreResult, TextCounts};

/// Divides two tallies, refusing a zero denominator.
fn ratio(formula: FormulaId, numerator: f64, denominator: f64, name: &'static str) -> DomainResult<f64> {
    if denominator == 0.0 {
        return Err(DomainError::ZeroDenominator { formula: formula.code(), count: name });
    }
    Ok(numerator / denominator)
}

/// Computes a single formula over `counts`.
pub fn score(formula: FormulaId, counts: &TextCounts) -> DomainResult<f64> {
    let words = counts.words.as_f64();
    let sentences = counts.sentences.as_f64();
    let characters = counts.characters.as_f64();
    let syllables = counts.syllables.as_f64();
    let polysyllables = counts.polysyllables.as_f64();

    let value = match formula {
        FormulaId::Ari => {
            let chars_per_word = ratio(formula, characters, words, "words")?;
            let words_per_sentence = ratio(formula, words, sentences, "sentences")?;
            4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43
        }
        FormulaId::Fk => {
            let words_per_sentence = ratio(formula, words, sentences, "sentences")?;
            let syllables_per_word = ratio(formula, syllables, words, "words")?;
            0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59
        }
        FormulaId::Smog => {
            let radicand = polysyllables * ratio(formula, 30.0, sentences, "sentences")?;
            if radicand.is_nan() || radicand < 0.0 {
                return Err(DomainError::NumericDomain { formula: formula.code(), radicand });
            }
            1.043 * radicand.sqrt() + 3.1291
        }
        FormulaId::Cl => {
            let letters = ratio(formula, characters, words, "words")? * 100.0;
            let sentences_per_hundred = ratio(formula, sentences, words, "words")? * 100.0;
            0.0588 * letters - 0.296 * sentences_per_hundred - 15.8
        }
    };
    log::trace!("{formula} = {value}");
    Ok(value)
}

/// Computes every requested formula independently, in reporting order.
///
/// A formula whose denominator is zero yields its own error without
/// stopping the others.
pub fn score_each(request: &ScoreRequest, counts: &TextCounts) -> Vec<(FormulaId, DomainResult<f64>)> {
    request.iter().map(|formula| (formula, score(formula, counts))).collect()
}

/// Computes every requested formula; the first failing formula aborts the batch.
pub fn score_all(request: &ScoreRequest, counts: &TextCounts) -> DomainResult<ScoreResult> {
    score_each(request, counts).into_iter().map(|(formula, outcome)| outcome.map(|value| (formula, value))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: TextCounts = TextCounts::new(100, 5, 500, 150, 20);

    fn approx(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn automated_readability_index() {
        approx(score(FormulaId::Ari, &SAMPLE).unwrap(), 12.12);
    }

    #[test]
    fn flesch_kincaid() {
        approx(score(FormulaId::Fk, &SAMPLE).unwrap(), 9.91);
    }

    #[test]
    fn smog() {
        approx(score(FormulaId::Smog, &SAMPLE).unwrap(), 1.043 * 120f64.sqrt() + 3.1291);
        let rounded = (score(FormulaId::Smog, &SAMPLE).unwrap() * 100.0).round() / 100.0;
        approx(rounded, 14.55);
    }

    #[test]
    fn coleman_liau() {
        approx(score(FormulaId::Cl, &SAMPLE).unwrap(), 12.12);
    }

    #[test]
    fn zero_words_fails_for_word_denominators() {
        let counts = TextCounts::new(0, 1, 3, 0, 0);
        for formula in [FormulaId::Ari, FormulaId::Fk, FormulaId::Cl] {
            let err = score(formula, &counts).expect_err("zero words must fail");
            assert!(matches!(err, DomainError::ZeroDenominator { count: "words", .. }));
        }
        // SMOG only divides by sentences.
        approx(score(FormulaId::Smog, &counts).unwrap(), 3.1291);
    }

    #[test]
    fn zero_sentences_fails_for_sentence_denominators() {
        let counts = TextCounts::new(4, 0, 20, 5, 1);
        for formula in [FormulaId::Ari, FormulaId::Fk, FormulaId::Smog] {
            let err = score(formula, &counts).expect_err("zero sentences must fail");
            assert!(matches!(err, DomainError::ZeroDenominator { count: "sentences", .. }));
        }
        assert!(score(FormulaId::Cl, &counts).is_ok());
    }

    #[test]
    fn score_all_only_contains_requested_formulas() {
        let request = ScoreRequest::parse("FK CL");
        let result = score_all(&request, &SAMPLE).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.get(FormulaId::Ari).is_none());
        approx(result.get(FormulaId::Cl).unwrap(), 12.12);
    }

    #[test]
    fn score_all_with_empty_request_is_empty() {
        assert!(score_all(&ScoreRequest::empty(), &SAMPLE).unwrap().is_empty());
    }

    #[test]
    fn score_all_propagates_failures() {
        let counts = TextCounts::new(0, 1, 0, 0, 0);
        assert!(score_all(&ScoreRequest::all(), &counts).is_err());
    }

    #[test]
    fn score_each_keeps_computable_formulas_next_to_failures() {
        let counts = TextCounts::new(0, 1, 3, 0, 0);
        let outcomes = score_each(&ScoreRequest::all(), &counts);
        let formulas: Vec<_> = outcomes.iter().map(|(formula, _)| *formula).collect();
        assert_eq!(formulas, FormulaId::ALL);
        for (formula, outcome) in &outcomes {
            match formula {
                FormulaId::Smog => approx(*outcome.as_ref().unwrap(), 3.1291),
                _ => assert!(matches!(outcome, Err(DomainError::ZeroDenominator { count: "words", .. }))),
            }
        }
    }
}
