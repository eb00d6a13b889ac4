// crates/infra/src/prompt.rs
use std::{
    cell::RefCell,
    io::{BufRead, Write},
};

use readability_ports::selection::FormulaSelector;
use readability_shared_kernel::{InfrastructureError, Result};

pub const PROMPT: &str = "Enter the score you want to calculate (ARI, FK, SMOG, CL, all): ";

struct PromptIo<R, W> {
    reader: R,
    writer: W,
}

/// Asks for a selection on `writer` and reads one line from `reader`.
pub struct PromptSelector<R, W> {
    io: RefCell<PromptIo<R, W>>,
}

impl<R: BufRead, W: Write> PromptSelector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { io: RefCell::new(PromptIo { reader, writer }) }
    }
}

impl<R: BufRead, W: Write> FormulaSelector for PromptSelector<R, W> {
    fn read_selection(&self) -> Result<String> {
        let mut io = self.io.borrow_mut();
        let prompt_error = |source| InfrastructureError::Prompt { source };

        io.writer.write_all(PROMPT.as_bytes()).map_err(prompt_error)?;
        io.writer.flush().map_err(prompt_error)?;

        let mut line = String::new();
        // EOF leaves `line` empty, which selects nothing.
        io.reader.read_line(&mut line).map_err(prompt_error)?;
        log::debug!("score selection: {:?}", line.trim_end());
        Ok(line.trim_end().to_string())
    }
}

/// Selection supplied up front, e.g. from a command-line flag.
#[derive(Debug, Clone)]
pub struct FixedSelector(String);

impl FixedSelector {
    pub fn new(selection: impl Into<String>) -> Self {
        Self(selection.into())
    }
}

impl FormulaSelector for FixedSelector {
    fn read_selection(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn writes_prompt_and_reads_line() {
        let mut written = Vec::new();
        let selector = PromptSelector::new(Cursor::new("ari, fk\nignored\n"), &mut written);
        assert_eq!(selector.read_selection().unwrap(), "ari, fk");
        drop(selector);

        assert_eq!(String::from_utf8(written).unwrap(), PROMPT);
    }

    #[test]
    fn eof_yields_empty_selection() {
        let selector = PromptSelector::new(Cursor::new(""), std::io::sink());
        assert_eq!(selector.read_selection().unwrap(), "");
    }

    #[test]
    fn fixed_selector_returns_preset() {
        assert_eq!(FixedSelector::new("all").read_selection().unwrap(), "all");
    }
}
