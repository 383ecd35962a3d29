//! Result types for decode operations

use std::fmt;

/// Why a word was declared uncorrectable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeFailure {
    /// Chien search found a different number of roots than the locator degree
    RootCountMismatch { roots: usize, degree: usize },
    /// Locator degree exceeds the correction capability
    TooManyErrors { errors: usize, t: usize },
    /// No Chase trial pattern decoded successfully
    NoTrialDecoded { trials: usize },
}

impl fmt::Display for DecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeFailure::RootCountMismatch { roots, degree } => {
                write!(f, "found {} roots but locator degree is {}", roots, degree)
            }
            DecodeFailure::TooManyErrors { errors, t } => {
                write!(f, "too many errors ({} > t={})", errors, t)
            }
            DecodeFailure::NoTrialDecoded { trials } => {
                write!(f, "none of {} test patterns decoded", trials)
            }
        }
    }
}

/// Outcome of one decode call
///
/// `error_locations` is ascending and duplicate-free. On failure it is not
/// authoritative (hard decoding keeps the roots it found, Chase decoding
/// leaves it empty) and `corrected` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    pub success: bool,
    pub error_locations: Vec<usize>,
    pub corrected: Option<Vec<u8>>,
    pub failure: Option<DecodeFailure>,
}

impl DecodeResult {
    /// Word accepted as-is
    pub fn no_errors(received: &[u8]) -> Self {
        Self {
            success: true,
            error_locations: Vec::new(),
            corrected: Some(received.to_vec()),
            failure: None,
        }
    }

    pub fn corrected(error_locations: Vec<usize>, corrected: Vec<u8>) -> Self {
        Self {
            success: true,
            error_locations,
            corrected: Some(corrected),
            failure: None,
        }
    }

    pub fn failed(failure: DecodeFailure, error_locations: Vec<usize>) -> Self {
        Self {
            success: false,
            error_locations,
            corrected: None,
            failure: Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Number of corrected positions (zero on failure)
    pub fn corrected_count(&self) -> usize {
        if self.success {
            self.error_locations.len()
        } else {
            0
        }
    }
}

impl fmt::Display for DecodeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.failure, self.error_locations.is_empty()) {
            (Some(failure), _) => write!(f, "decoding failed: {}", failure),
            (None, true) => write!(f, "no errors"),
            (None, false) => write!(
                f,
                "corrected {} error(s) at {:?}",
                self.error_locations.len(),
                self.error_locations
            ),
        }
    }
}

/// One Chase test pattern and its hard-decision outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaseTrial {
    /// Subset index s; bit j set means the j-th least reliable position was flipped
    pub index: usize,
    /// Positions flipped to build this pattern
    pub flipped: Vec<usize>,
    /// Hard-decision result in the pattern's own frame
    pub result: DecodeResult,
    /// Correlation of the corrected word, for successful trials
    pub correlation: Option<i64>,
}
