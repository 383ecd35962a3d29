//! Hard-decision BCH decoding
//!
//! syndromes → (all zero: done) → Berlekamp–Massey → Chien search →
//! success iff the root count equals the locator degree and the degree is
//! within t.

use super::types::{DecodeFailure, DecodeResult};
use crate::chien::chien_search;
use crate::code::BchCode;
use crate::error::{BchError, Result};
use crate::galois::GaloisField;
use crate::locator::berlekamp_massey;
use crate::reporters::{DecodeReporter, SilentReporter};
use crate::syndrome::{compute_syndromes, is_zero};
use log::debug;

/// Single-attempt decoder bound to one field and code geometry
#[derive(Debug, Clone, Copy)]
pub struct HardDecoder<'a> {
    field: &'a GaloisField,
    n: usize,
    t: usize,
}

impl<'a> HardDecoder<'a> {
    /// Create a decoder for code length n and correction capability t
    pub fn new(field: &'a GaloisField, n: usize, t: usize) -> Result<Self> {
        if n != field.order() {
            return Err(BchError::CodeLengthMismatch {
                n,
                m: field.m(),
                order: field.order(),
            });
        }
        if t == 0 || 2 * t >= n {
            return Err(BchError::InvalidCorrectionCapability { t, n });
        }
        Ok(Self { field, n, t })
    }

    pub fn for_code(field: &'a GaloisField, code: &BchCode) -> Result<Self> {
        Self::new(field, code.n, code.t)
    }

    pub fn field(&self) -> &'a GaloisField {
        self.field
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn t(&self) -> usize {
        self.t
    }

    /// Check word length and binary content
    pub fn validate(&self, received: &[u8]) -> Result<()> {
        if received.len() != self.n {
            return Err(BchError::WordLength {
                expected: self.n,
                actual: received.len(),
            });
        }
        if let Some((position, &value)) = received.iter().enumerate().find(|(_, &b)| b > 1) {
            return Err(BchError::NonBinarySymbol { position, value });
        }
        Ok(())
    }

    pub fn decode(&self, received: &[u8]) -> Result<DecodeResult> {
        self.decode_with_reporter(received, &SilentReporter)
    }

    pub fn decode_with_reporter<R: DecodeReporter + ?Sized>(
        &self,
        received: &[u8],
        reporter: &R,
    ) -> Result<DecodeResult> {
        self.validate(received)?;
        self.decode_unchecked(received, reporter)
    }

    /// Decode a word already known to be valid
    pub(crate) fn decode_unchecked<R: DecodeReporter + ?Sized>(
        &self,
        received: &[u8],
        reporter: &R,
    ) -> Result<DecodeResult> {
        let syndromes = compute_syndromes(self.field, received, self.t);
        reporter.report_syndromes(self.field, &syndromes);

        if is_zero(&syndromes) {
            debug!("All syndromes zero; accepting word");
            reporter.report_no_errors();
            return Ok(DecodeResult::no_errors(received));
        }

        let locator = berlekamp_massey(self.field, &syndromes, self.t)?;
        reporter.report_locator(self.field, &locator);

        let roots = chien_search(self.field, &locator, self.n);
        reporter.report_roots(&roots);
        debug!(
            "Locator degree {}, {} roots found: {:?}",
            locator.degree(),
            roots.len(),
            roots
        );

        let failure = if roots.len() != locator.degree() {
            Some(DecodeFailure::RootCountMismatch {
                roots: roots.len(),
                degree: locator.degree(),
            })
        } else if locator.degree() > self.t {
            Some(DecodeFailure::TooManyErrors {
                errors: locator.degree(),
                t: self.t,
            })
        } else {
            None
        };

        if let Some(failure) = failure {
            debug!("Decoding failed: {}", failure);
            reporter.report_failure(&failure);
            return Ok(DecodeResult::failed(failure, roots));
        }

        let mut corrected = received.to_vec();
        for &position in &roots {
            corrected[position] ^= 1;
        }
        reporter.report_correction(&roots);

        Ok(DecodeResult::corrected(roots, corrected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::BCH_63_51;

    #[test]
    fn test_single_error_at_position_five() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let decoder = HardDecoder::for_code(&gf, &BCH_63_51).unwrap();
        let mut r = vec![0u8; 63];
        r[5] = 1;
        let result = decoder.decode(&r).unwrap();
        assert!(result.success);
        assert_eq!(result.error_locations, vec![5]);
        assert_eq!(result.corrected, Some(vec![0u8; 63]));
    }

    #[test]
    fn test_three_errors_fail_for_t2() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let decoder = HardDecoder::for_code(&gf, &BCH_63_51).unwrap();
        let mut r = vec![0u8; 63];
        for p in [10, 20, 30] {
            r[p] = 1;
        }
        let result = decoder.decode(&r).unwrap();
        assert!(!result.success);
        assert!(result.corrected.is_none());
        assert!(result.failure.is_some());
    }

    #[test]
    fn test_validation() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let decoder = HardDecoder::for_code(&gf, &BCH_63_51).unwrap();
        assert_eq!(
            decoder.decode(&[0u8; 62]),
            Err(BchError::WordLength {
                expected: 63,
                actual: 62
            })
        );
        let mut r = vec![0u8; 63];
        r[9] = 2;
        assert_eq!(
            decoder.decode(&r),
            Err(BchError::NonBinarySymbol {
                position: 9,
                value: 2
            })
        );
    }

    #[test]
    fn test_geometry_checks() {
        let gf = GaloisField::new(6).unwrap();
        assert!(matches!(
            HardDecoder::new(&gf, 255, 2),
            Err(BchError::CodeLengthMismatch { .. })
        ));
        assert!(matches!(
            HardDecoder::new(&gf, 63, 0),
            Err(BchError::InvalidCorrectionCapability { .. })
        ));
    }
}
