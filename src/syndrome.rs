//! Syndrome evaluation
//!
//! Sᵢ = r(αⁱ) for i = 1..2t. An all-zero syndrome vector is the only signal
//! that a word is accepted as-is.

use crate::galois::GaloisField;

/// Evaluate the received polynomial at α¹ … α^(2t)
///
/// `received` holds one bit per coefficient; any nonzero entry counts as a
/// set bit. Returns 2t field elements, `S₁` first.
pub fn compute_syndromes(field: &GaloisField, received: &[u8], t: usize) -> Vec<u16> {
    let n = field.order();
    let set_bits: Vec<usize> = received
        .iter()
        .enumerate()
        .filter(|(_, &bit)| bit != 0)
        .map(|(j, _)| j)
        .collect();

    (1..=2 * t)
        .map(|i| {
            set_bits
                .iter()
                .fold(0u16, |acc, &j| field.add(acc, field.alpha_power((i * j) % n)))
        })
        .collect()
}

/// True when every syndrome is zero
#[inline]
pub fn is_zero(syndromes: &[u16]) -> bool {
    syndromes.iter().all(|&s| s == 0)
}

/// True when `word` is a codeword of the t-error-correcting code
pub fn verify_codeword(field: &GaloisField, word: &[u8], t: usize) -> bool {
    is_zero(&compute_syndromes(field, word, t))
}
