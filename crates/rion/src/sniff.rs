//! Detect the format of an input file from its first byte

use std::{fs::File, io::Read, path::Path};

use crate::error::Result;

/// Format of an input file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// A JSON document, starts with `{`
    Json,
    /// A RST string table, starts with `R`
    Rst,
    /// Anything else, including empty files
    Unknown,
}

impl FileKind {
    /// Classify a file by the first byte it contains
    pub fn from_first_byte(byte: Option<u8>) -> FileKind {
        match byte {
            Some(b'{') => FileKind::Json,
            Some(b'R') => FileKind::Rst,
            _ => FileKind::Unknown,
        }
    }
}

/// Read a single byte of `path` and classify it
pub fn classify(path: impl AsRef<Path>) -> Result<FileKind> {
    let mut file = File::open(path)?;

    let mut first = [0u8; 1];
    let read = file.read(&mut first)?;

    Ok(FileKind::from_first_byte((read == 1).then_some(first[0])))
}
