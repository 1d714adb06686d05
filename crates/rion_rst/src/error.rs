//! Error types that can be emitted from this library
//!

use miette::Diagnostic;
use thiserror::Error;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent warpper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent warpper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent warpper for [`std::string::FromUtf8Error`]
    #[error(transparent)]
    UTF8Error(#[from] std::string::FromUtf8Error),

    /// file is an invalid string table
    #[error("file is an invalid string table")]
    #[diagnostic(code(rst::invalid_file))]
    InvalidFile,

    /// unsupported string table version {0}
    #[error("unsupported string table version {0}")]
    #[diagnostic(code(rst::unsupported_version), help("supported versions are 2, 3, 4 and 5"))]
    UnsupportedVersion(u8),

    /// text for entry {0:x} contains a NUL character
    #[error("text for entry {0:x} contains a NUL character")]
    #[diagnostic(code(rst::invalid_text))]
    InvalidText(u64),

    /// {field} of {size} does not fit in a string table
    #[error("{field} of {size} does not fit in a string table")]
    #[diagnostic(code(rst::data_too_large))]
    DataTooLarge {
        /// which part of the file overflowed
        field: &'static str,
        /// the value that did not fit
        size: u64,
    },
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
