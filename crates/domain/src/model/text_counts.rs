use readability_shared_kernel::{CharCount, PolysyllableCount, SentenceCount, SyllableCount, WordCount};
use serde::{Deserialize, Serialize};

/// The five tallies every formula is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub words: WordCount,
    pub sentences: SentenceCount,
    pub characters: CharCount,
    pub syllables: SyllableCount,
    pub polysyllables: PolysyllableCount,
}

impl TextCounts {
    pub const fn new(
        words: usize,
        sentences: usize,
        characters: usize,
        syllables: usize,
        polysyllables: usize,
    ) -> Self {
        Self {
            words: WordCount::new(words),
            sentences: SentenceCount::new(sentences),
            characters: CharCount::new(characters),
            syllables: SyllableCount::new(syllables),
            polysyllables: PolysyllableCount::new(polysyllables),
        }
    }
}
