// crates/ports/src/text_source.rs
use std::path::PathBuf;

use readability_shared_kernel::Result;

/// How the lines of a document are assembled into the scored text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Lines joined by a single space, trailing whitespace trimmed.
    #[default]
    Space,
    /// Lines appended with no separator.
    Concatenate,
    /// Line breaks kept; only the trailing ones are dropped.
    Keep,
}

/// Input parameters controlling how a document is loaded.
#[derive(Debug, Clone)]
pub struct TextSourcePlan {
    pub path: PathBuf,
    pub line_join: LineJoin,
}

impl TextSourcePlan {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), line_join: LineJoin::default() }
    }

    #[must_use]
    pub fn with_line_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }
}

/// Port for loading the text to score.
pub trait TextSource: Send + Sync {
    fn read_text(&self, plan: &TextSourcePlan) -> Result<String>;
}
