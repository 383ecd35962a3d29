//! Integration tests for hard-decision decoding
//!
//! Covers every supported code: clean words, correctable patterns up to t,
//! patterns beyond t, and nonzero codewords.

use bchdec::code::{BCH_1023_983, BCH_255_239, BCH_63_51};
use bchdec::syndrome::{compute_syndromes, verify_codeword};
use bchdec::{BchCode, BchError, DecodeFailure, FieldRegistry, HardDecoder, SUPPORTED_CODES};

fn word_with_errors(n: usize, positions: &[usize]) -> Vec<u8> {
    let mut r = vec![0u8; n];
    for &p in positions {
        r[p] ^= 1;
    }
    r
}

/// Weight-5 codeword of the (63, 51) code
const CODEWORD_63: [usize; 5] = [1, 7, 20, 31, 41];

// =============================================================================
// Concrete cases
// =============================================================================

#[test]
fn test_no_errors_all_codes() {
    let registry = FieldRegistry::new();
    for code in SUPPORTED_CODES {
        let field = registry.field(&code).unwrap();
        let decoder = HardDecoder::for_code(field, &code).unwrap();
        let result = decoder.decode(&vec![0u8; code.n]).unwrap();
        assert!(result.success, "code {}", code);
        assert!(result.error_locations.is_empty());
        assert_eq!(result.corrected, Some(vec![0u8; code.n]));
    }
}

#[test]
fn test_single_error_63() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_63_51).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_63_51).unwrap();

    let result = decoder.decode(&word_with_errors(63, &[5])).unwrap();
    assert!(result.success);
    assert_eq!(result.error_locations, vec![5]);
    assert_eq!(result.corrected, Some(vec![0u8; 63]));
}

#[test]
fn test_two_errors_255() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_255_239).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_255_239).unwrap();

    let result = decoder.decode(&word_with_errors(255, &[3, 10])).unwrap();
    assert!(result.success);
    assert_eq!(result.error_locations, vec![3, 10]);
    assert_eq!(result.corrected_count(), 2);
}

#[test]
fn test_four_errors_1023_at_edges() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_1023_983).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_1023_983).unwrap();

    let errors = [0, 511, 1000, 1022];
    let result = decoder.decode(&word_with_errors(1023, &errors)).unwrap();
    assert!(result.success);
    assert_eq!(result.error_locations, errors.to_vec());
    assert_eq!(result.corrected, Some(vec![0u8; 1023]));
}

#[test]
fn test_three_errors_beyond_capability_63() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_63_51).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_63_51).unwrap();

    for errors in [[0, 1, 2], [1, 2, 3], [10, 20, 30]] {
        let result = decoder.decode(&word_with_errors(63, &errors)).unwrap();
        assert!(!result.success, "errors {:?}", errors);
        assert!(result.corrected.is_none());
        assert_eq!(result.corrected_count(), 0);
        assert!(matches!(
            result.failure,
            Some(DecodeFailure::RootCountMismatch { .. }) | Some(DecodeFailure::TooManyErrors { .. })
        ));
    }
}

#[test]
fn test_beyond_capability_may_miscorrect_to_codeword() {
    // Three errors landing within distance 2 of another codeword decode
    // "successfully" to that codeword
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_63_51).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_63_51).unwrap();

    let result = decoder.decode(&word_with_errors(63, &[1, 20, 41])).unwrap();
    assert!(result.success);
    assert_eq!(result.error_locations, vec![7, 31]);
    let corrected = result.corrected.unwrap();
    assert_eq!(corrected, word_with_errors(63, &CODEWORD_63));
    assert!(verify_codeword(field, &corrected, 2));
}

#[test]
fn test_nonzero_codeword_with_errors() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_63_51).unwrap();
    let decoder = HardDecoder::for_code(field, &BCH_63_51).unwrap();

    let codeword = word_with_errors(63, &CODEWORD_63);
    assert!(compute_syndromes(field, &codeword, 2).iter().all(|&s| s == 0));

    let mut received = codeword.clone();
    received[5] ^= 1;
    received[50] ^= 1;
    let result = decoder.decode(&received).unwrap();
    assert!(result.success);
    assert_eq!(result.error_locations, vec![5, 50]);
    assert_eq!(result.corrected, Some(codeword.clone()));

    // A codeword on its own decodes with no corrections
    let result = decoder.decode(&codeword).unwrap();
    assert!(result.error_locations.is_empty());
    assert_eq!(result.corrected, Some(codeword));
}

// =============================================================================
// Properties checked over every code
// =============================================================================

#[test]
fn test_decode_is_idempotent() {
    let registry = FieldRegistry::new();
    for code in SUPPORTED_CODES {
        let field = registry.field(&code).unwrap();
        let decoder = HardDecoder::for_code(field, &code).unwrap();
        let errors: Vec<usize> = (0..code.t).map(|i| 7 + i * (code.n / (code.t + 1))).collect();

        let first = decoder.decode(&word_with_errors(code.n, &errors)).unwrap();
        let corrected = first.corrected.unwrap();
        let second = decoder.decode(&corrected).unwrap();
        assert!(second.success);
        assert!(second.error_locations.is_empty(), "code {}", code);
        assert_eq!(second.corrected, Some(corrected));
    }
}

#[test]
fn test_locations_are_sorted_and_unique() {
    let registry = FieldRegistry::new();
    let code = BCH_1023_983;
    let field = registry.field(&code).unwrap();
    let decoder = HardDecoder::for_code(field, &code).unwrap();

    let result = decoder
        .decode(&word_with_errors(1023, &[900, 4, 333]))
        .unwrap();
    assert_eq!(result.error_locations, vec![4, 333, 900]);
}

#[test]
fn test_corrected_word_differs_exactly_at_locations() {
    let registry = FieldRegistry::new();
    let code = BCH_255_239;
    let field = registry.field(&code).unwrap();
    let decoder = HardDecoder::for_code(field, &code).unwrap();

    let received = word_with_errors(255, &[0, 254]);
    let result = decoder.decode(&received).unwrap();
    let corrected = result.corrected.unwrap();
    let differing: Vec<usize> = (0..255).filter(|&j| corrected[j] != received[j]).collect();
    assert_eq!(differing, result.error_locations);
}

// =============================================================================
// Input validation
// =============================================================================

#[test]
fn test_wrong_length_rejected() {
    let registry = FieldRegistry::new();
    let code = BchCode::from_id(2).unwrap();
    let field = registry.field(&code).unwrap();
    let decoder = HardDecoder::for_code(field, &code).unwrap();

    let err = decoder.decode(&[0u8; 63]).unwrap_err();
    assert_eq!(
        err,
        BchError::WordLength {
            expected: 255,
            actual: 63
        }
    );
    assert!(err.is_configuration_error());
}

#[test]
fn test_mismatched_field_rejected() {
    let registry = FieldRegistry::new();
    let field = registry.field(&BCH_63_51).unwrap();
    let err = HardDecoder::for_code(field, &BCH_1023_983).unwrap_err();
    assert_eq!(
        err,
        BchError::CodeLengthMismatch {
            n: 1023,
            m: 6,
            order: 63
        }
    );
}
