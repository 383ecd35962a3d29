//! Error types for BCH decoding operations
//!
//! Only configuration mistakes and arithmetic defects are errors. An
//! uncorrectable word is a routine outcome and is reported through
//! [`DecodeResult`](crate::decoder::DecodeResult) instead.

use thiserror::Error;

/// Errors that abort a decode call without producing a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BchError {
    /// Field size outside the supported set
    #[error("Unsupported field size m={0} (supported: 6, 8, 10)")]
    UnsupportedFieldSize(u32),

    /// Code id outside the supported table
    #[error("Unsupported code id {0} (supported: 1, 2, 3)")]
    UnsupportedCode(u8),

    /// Polynomial does not generate every nonzero element of the field
    #[error(
        "Polynomial {polynomial:#b} is not primitive for GF(2^{m}): reached {reached} of {expected} nonzero elements"
    )]
    NonPrimitivePolynomial {
        m: u32,
        polynomial: u32,
        reached: usize,
        expected: usize,
    },

    /// Soft-decision requested without reliability data
    #[error("Soft-decision decoding requires a reliability vector")]
    MissingReliability,

    /// Mode tag is neither hard nor soft
    #[error("Unknown decode mode {0:?}; use 'hard' or 'soft'")]
    UnknownMode(String),

    /// Received word length differs from the code length
    #[error("Received word has {actual} bits, expected {expected}")]
    WordLength { expected: usize, actual: usize },

    /// Received word contains something other than 0 or 1
    #[error("Received word has non-binary value {value} at position {position}")]
    NonBinarySymbol { position: usize, value: u8 },

    /// Reliability vector too short to cover every coefficient
    #[error("Reliability vector has {actual} entries, expected at least {expected}")]
    ReliabilityLength { expected: usize, actual: usize },

    /// Chase perturbation count out of range
    #[error("Chase flip count {flips} out of range (maximum {max})")]
    InvalidFlipCount { flips: usize, max: usize },

    /// Correction capability unusable for the code length
    #[error("Correction capability t={t} is invalid for code length n={n}")]
    InvalidCorrectionCapability { t: usize, n: usize },

    /// Code length does not match the field order
    #[error("Code length n={n} does not match GF(2^{m}) order {order}")]
    CodeLengthMismatch { n: usize, m: u32, order: usize },

    /// Syndrome vector length is not 2t
    #[error("Expected {expected} syndromes, got {actual}")]
    SyndromeCount { expected: usize, actual: usize },

    /// Inverse of the zero element requested
    #[error("Cannot invert zero in GF(2^m)")]
    ZeroInverse,
}

impl BchError {
    /// Returns true for errors caused by calling logic rather than configuration
    pub fn is_domain_error(&self) -> bool {
        matches!(self, BchError::ZeroInverse)
    }

    /// Returns true for fatal configuration errors
    pub fn is_configuration_error(&self) -> bool {
        !self.is_domain_error()
    }
}

/// Type alias for Result with BchError
pub type Result<T> = std::result::Result<T, BchError>;
