//! Reliability (LLR) vectors
//!
//! A reliability vector holds one signed byte per coefficient position using
//! the hardware ordering: index 0 is an unused sentinel and index i (1-based)
//! belongs to coefficient position n - i. The sign gives the likely bit
//! (negative means 1) and the magnitude gives the confidence.

use crate::error::{BchError, Result};

/// Signed reliability values in hardware index order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reliability {
    values: Vec<i8>,
}

impl Reliability {
    /// Wrap raw values; `values[0]` is the sentinel
    pub fn new(values: Vec<i8>) -> Self {
        Self { values }
    }

    /// Build from per-position values, `by_position[j]` belonging to r[j]
    pub fn from_positions(by_position: &[i8]) -> Self {
        let n = by_position.len();
        let mut values = vec![0i8; n + 1];
        for (position, &value) in by_position.iter().enumerate() {
            values[n - position] = value;
        }
        Self { values }
    }

    pub fn values(&self) -> &[i8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail unless every position of a length-n word has a value
    pub fn ensure_covers(&self, n: usize) -> Result<()> {
        if self.values.len() < n + 1 {
            return Err(BchError::ReliabilityLength {
                expected: n + 1,
                actual: self.values.len(),
            });
        }
        Ok(())
    }

    /// Value belonging to coefficient position `position` of a length-n word
    #[inline]
    pub fn at_position(&self, n: usize, position: usize) -> i8 {
        self.values[n - position]
    }

    #[inline]
    pub fn magnitude_at(&self, n: usize, position: usize) -> u8 {
        self.at_position(n, position).unsigned_abs()
    }

    /// Hard-decision slice: r[n - i] = 1 iff value i is negative
    pub fn hard_decision(&self, n: usize) -> Vec<u8> {
        let mut received = vec![0u8; n];
        for i in 1..=n.min(self.values.len().saturating_sub(1)) {
            received[n - i] = u8::from(self.values[i] < 0);
        }
        received
    }

    /// The `count` positions of smallest magnitude, least reliable first
    ///
    /// Ties keep ascending position order.
    pub fn least_reliable(&self, n: usize, count: usize) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..n).collect();
        positions.sort_by_key(|&position| self.magnitude_at(n, position));
        positions.truncate(count);
        positions
    }

    /// Σ reliabilityᵢ · (1 - 2cᵢ) over every position; higher is better
    pub fn correlation(&self, word: &[u8]) -> i64 {
        let n = word.len();
        word.iter()
            .enumerate()
            .map(|(position, &bit)| {
                let value = self.at_position(n, position) as i64;
                if bit == 0 {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

impl From<Vec<i8>> for Reliability {
    fn from(values: Vec<i8>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_mapping() {
        let rel = Reliability::from_positions(&[10, -20, 30]);
        assert_eq!(rel.values(), &[0, 30, -20, 10]);
        assert_eq!(rel.at_position(3, 0), 10);
        assert_eq!(rel.at_position(3, 1), -20);
        assert_eq!(rel.magnitude_at(3, 1), 20);
    }

    #[test]
    fn test_hard_decision_ignores_sentinel() {
        let rel = Reliability::new(vec![-128, 5, -3, 0]);
        assert_eq!(rel.hard_decision(3), vec![0, 1, 0]);
    }

    #[test]
    fn test_least_reliable_stable_ties() {
        let rel = Reliability::from_positions(&[50, 7, -7, 3, 100, 7]);
        assert_eq!(rel.least_reliable(6, 3), vec![3, 1, 2]);
        assert_eq!(rel.least_reliable(6, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_least_reliable_handles_min_value() {
        let rel = Reliability::from_positions(&[-128, 127, 1]);
        assert_eq!(rel.least_reliable(3, 3), vec![2, 1, 0]);
    }

    #[test]
    fn test_correlation() {
        let rel = Reliability::from_positions(&[10, -20, 30]);
        assert_eq!(rel.correlation(&[0, 1, 0]), 10 + 20 + 30);
        assert_eq!(rel.correlation(&[0, 0, 0]), 10 - 20 + 30);
    }

    #[test]
    fn test_ensure_covers() {
        let rel = Reliability::new(vec![0; 63]);
        assert_eq!(
            rel.ensure_covers(63),
            Err(BchError::ReliabilityLength {
                expected: 64,
                actual: 63
            })
        );
        assert!(Reliability::new(vec![0; 64]).ensure_covers(63).is_ok());
    }
}
