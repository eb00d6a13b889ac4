// crates/infra/src/text_source.rs
use std::path::Path;

use readability_ports::text_source::{LineJoin, TextSource, TextSourcePlan};
use readability_shared_kernel::{InfrastructureError, InputError, Result};

use crate::persistence::FileReader;

const TEXT_EXTENSION: &str = "txt";

/// Loads `.txt` documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTextSource;

impl FileTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for FileTextSource {
    fn read_text(&self, plan: &TextSourcePlan) -> Result<String> {
        let path = plan.path.as_path();
        validate(path)?;
        let contents = FileReader::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        log::debug!("read {} bytes from {}", contents.len(), path.display());
        Ok(assemble(&contents, plan.line_join))
    }
}

/// The extension is checked first, so a missing `notes.md` is a wrong type.
fn validate(path: &Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(TEXT_EXTENSION) {
        return Err(InputError::WrongFileType { path: path.to_path_buf() }.into());
    }
    if !path.is_file() {
        return Err(InputError::FileNotFound { path: path.to_path_buf() }.into());
    }
    Ok(())
}

/// Builds the scored text from raw file contents.
pub fn assemble(contents: &str, line_join: LineJoin) -> String {
    match line_join {
        LineJoin::Space => contents.lines().collect::<Vec<_>>().join(" ").trim_end().to_string(),
        LineJoin::Concatenate => contents.lines().collect(),
        // A final line break is not a line of its own.
        LineJoin::Keep => contents.trim_end_matches(['\r', '\n']).to_string(),
    }
}
