//! Error types that can be emitted while converting string tables
//!

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for a successful run
pub const EX_OK: u8 = 0;
/// Exit code for a failed conversion or comparison
pub const EX_ERROR: u8 = 1;
/// Exit code for a command line usage error
pub const EX_USAGE: u8 = 2;

/// Error type for the converter
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`rion_rst::error::Error`]
    #[error(transparent)]
    #[diagnostic(transparent)]
    RstError(#[from] rion_rst::error::Error),

    /// The command line does not describe a valid operation
    #[error("{0}")]
    #[diagnostic(code(rion::usage), help("run with --help to see the available options"))]
    Usage(String),

    /// A referenced file does not exist
    #[error("file not found: {}", .0.display())]
    #[diagnostic(code(rion::not_found))]
    InputNotFound(PathBuf),

    /// The first byte of the input matches no known format
    #[error("invalid file type: {}", .0.display())]
    #[diagnostic(
        code(rion::invalid_file_type),
        help("inputs must be JSON documents starting with '{{' or RST files starting with 'R'")
    )]
    UnknownFileType(PathBuf),

    /// The JSON document could not be parsed
    #[error("malformed document {}", .path.display())]
    #[diagnostic(code(rion::malformed_document))]
    MalformedDocument {
        /// document that failed to parse
        path: PathBuf,
        /// reason reported by the parser
        #[source]
        source: serde_json::Error,
    },

    /// A line of the hash table is not a valid record
    #[error("invalid hash {token:?} on line {line} of {}", .path.display())]
    #[diagnostic(code(rion::hash_table))]
    HashTable {
        /// hash table being loaded
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// the token that failed to parse
        token: String,
    },
}

impl Error {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Usage(_) => EX_USAGE,
            _ => EX_ERROR,
        }
    }
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
