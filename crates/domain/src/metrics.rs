// crates/domain/src/metrics.rs
use std::sync::OnceLock;

use readability_shared_kernel::{
    CharCount, InputError, PolysyllableCount, Result, SentenceCount, SyllableCount, WordCount,
};
use regex::Regex;

use crate::model::TextCounts;

/// Words whose heuristic count is far off; they always score six syllables.
const IRREGULAR_WORDS: [&str; 2] = ["encyclopedia", "encyclopedias"];
const IRREGULAR_SYLLABLES: usize = 6;

/// A word with more syllable units than this is polysyllabic.
const POLYSYLLABLE_THRESHOLD: usize = 2;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

fn word_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]*[.,]?[0-9]+|\b\w+\b").expect("word pattern is valid"))
}

fn syllable_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"[aeiouyAEIOUY]+[^e.\s]",
            r"|[aiouy]+\b",
            r"|\b[^aeiouy0-9.']+e\b",
            r"|\b[^\s]+e{2,}\b",
            r"|[0-9]*[.,]?[0-9]+",
        ))
        .expect("syllable pattern is valid")
    })
}

/// Syllable tally for a single word token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSyllables {
    pub units: usize,
    pub polysyllabic: bool,
}

/// Counts the syllable units of one word token.
pub fn word_syllables(word: &str) -> WordSyllables {
    if IRREGULAR_WORDS.contains(&word) {
        return WordSyllables { units: IRREGULAR_SYLLABLES, polysyllabic: true };
    }
    let units = syllable_pattern().find_iter(word).count();
    WordSyllables { units, polysyllabic: units > POLYSYLLABLE_THRESHOLD }
}

/// Scans `text` once per tally and returns the five counts.
///
/// Text that is empty or whitespace-only is rejected with
/// [`InputError::EmptyText`].
pub fn extract(text: &str) -> Result<TextCounts> {
    let Some(last) = text.chars().next_back() else {
        return Err(InputError::EmptyText.into());
    };
    if text.trim().is_empty() {
        return Err(InputError::EmptyText.into());
    }

    let tallies: Vec<WordSyllables> = word_pattern().find_iter(text).map(|m| word_syllables(m.as_str())).collect();
    let words = WordCount::new(tallies.len());
    let syllables: SyllableCount = tallies.iter().map(|word| SyllableCount::new(word.units)).sum();
    let polysyllables: PolysyllableCount =
        tallies.iter().filter(|word| word.polysyllabic).map(|_| PolysyllableCount::new(1)).sum();

    let terminators = SentenceCount::new(text.chars().filter(|c| SENTENCE_TERMINATORS.contains(c)).count());
    let sentences = terminators + usize::from(!SENTENCE_TERMINATORS.contains(&last));

    let characters = CharCount::new(text.chars().filter(|c| !c.is_whitespace()).count());

    let counts = TextCounts { words, sentences, characters, syllables, polysyllables };
    log::debug!("extracted {counts:?}");
    Ok(counts)
}
