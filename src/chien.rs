//! Chien root search
//!
//! Exhaustively evaluates σ(α^-j) for every position j in [0, n). Each root
//! marks an error at coefficient position j.

use crate::galois::GaloisField;
use crate::locator::ErrorLocator;

/// Find every position j with σ(α^-j) = 0, in ascending order
pub fn chien_search(field: &GaloisField, locator: &ErrorLocator, n: usize) -> Vec<usize> {
    let order = field.order();
    (0..n)
        .filter(|&j| {
            let alpha_inv_j = field.alpha_power((order - j % order) % order);
            locator.evaluate(field, alpha_inv_j) == 0
        })
        .collect()
}
