use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file as UTF-8 text through a buffered reader.
    pub fn read_to_string(path: &Path) -> std::io::Result<String> {
        let mut reader = File::open(path).map(BufReader::new)?;
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Ok(buf)
    }
}
