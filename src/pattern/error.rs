//! Error types for pattern-file operations

use crate::error::BchError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing pattern files
#[derive(Debug, Error)]
pub enum PatternError {
    /// Failed to read a pattern file
    #[error("Failed to read {file}: {source}")]
    Read {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write an answer file
    #[error("Failed to write {file}: {source}")]
    Write {
        file: PathBuf,
        source: std::io::Error,
    },

    /// Row contains something other than binary digits
    #[error("Line {line}: invalid digit {found:?} at column {column}")]
    InvalidDigit {
        line: usize,
        column: usize,
        found: char,
    },

    /// Stream ended in the middle of a codeword block
    #[error("Codeword {codeword} needs {expected} rows but only {available} remain")]
    TruncatedBlock {
        codeword: usize,
        expected: usize,
        available: usize,
    },

    /// Unrecognised mode tag
    #[error("Line {line}: invalid mode tag {tag:?} (expected 0 or 1)")]
    InvalidModeTag { line: usize, tag: String },

    /// Unrecognised code tag
    #[error("Line {line}: invalid code tag {tag:?} (expected 01, 10 or 11)")]
    InvalidCodeTag { line: usize, tag: String },

    /// Mode and code lists describe different numbers of codewords
    #[error("Mode list has {modes} entries but code list has {codes}")]
    TagCountMismatch { modes: usize, codes: usize },

    /// Answer line is not a binary position
    #[error("Line {line}: invalid answer {text:?}")]
    InvalidAnswer { line: usize, text: String },

    /// Decoder configuration error
    #[error(transparent)]
    Decode(#[from] BchError),
}

/// Type alias for Result with PatternError
pub type Result<T> = std::result::Result<T, PatternError>;
