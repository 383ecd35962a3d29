//! Error-locator synthesis (Berlekamp–Massey)
//!
//! Produces σ(X) = 1 + σ₁X + … + σ_lX^l from the 2t syndromes. The locator
//! is kept in a buffer of exactly t + 1 coefficients: a correction term whose
//! shifted exponent would exceed t is dropped, while the tracked degree `l`
//! still grows. Such a locator can never have `l` roots, so the decoder
//! reports it as uncorrectable during the root-count check.
//!
//! Iterations are indexed μ = -1, 0, …, 2t. Internally slot `μ + 1` stores
//! iteration μ so the μ = -1 seed has storage of its own.

use crate::error::{BchError, Result};
use crate::galois::GaloisField;
use log::trace;
use smallvec::{smallvec, SmallVec};

/// Inline coefficient capacity; covers t ≤ 4 without spilling
const INLINE_COEFFICIENTS: usize = 5;

/// Coefficient buffer for σ(X), lowest degree first
pub type Coefficients = SmallVec<[u16; INLINE_COEFFICIENTS]>;

/// Error-locator polynomial with its tracked degree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocator {
    coefficients: Coefficients,
    degree: usize,
}

impl ErrorLocator {
    /// Coefficients σ₀ … σ_t (always t + 1 entries)
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    /// Degree l as tracked by the synthesis; may exceed the buffer capacity
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Capacity t of the coefficient buffer
    pub fn capacity(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluate σ(x)
    pub fn evaluate(&self, field: &GaloisField, x: u16) -> u16 {
        let terms = self.degree.min(self.capacity());
        let mut result = self.coefficients[0];
        let mut x_power = x;
        for &coefficient in &self.coefficients[1..=terms] {
            if coefficient != 0 {
                result = field.add(result, field.multiply(coefficient, x_power));
            }
            x_power = field.multiply(x_power, x);
        }
        result
    }

    /// Render as `1 + α^3·X + X^2` style text
    pub fn format(&self, field: &GaloisField) -> String {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .take(self.degree.min(self.capacity()) + 1)
            .filter(|(_, &c)| c != 0)
            .map(|(i, &c)| {
                let coefficient = field.power_notation(c);
                match (i, c) {
                    (0, _) => coefficient,
                    (1, 1) => "X".to_string(),
                    (1, _) => format!("{}·X", coefficient),
                    (_, 1) => format!("X^{}", i),
                    _ => format!("{}·X^{}", coefficient, i),
                }
            })
            .collect();

        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }
}

/// State of one Berlekamp–Massey iteration
#[derive(Debug, Clone)]
struct Iteration {
    sigma: Coefficients,
    degree: usize,
    discrepancy: u16,
}

impl Iteration {
    fn unit(t: usize, discrepancy: u16) -> Self {
        let mut sigma: Coefficients = smallvec![0; t + 1];
        sigma[0] = 1;
        Self {
            sigma,
            degree: 0,
            discrepancy,
        }
    }
}

/// Pick the reference iteration for step μ
///
/// Scans slots for μ' = -1 … μ-1 in ascending order and keeps the first one
/// with a nonzero discrepancy that maximises μ' - l_μ'. For μ = 0 only the
/// seed iteration is eligible.
fn reference_slot(states: &[Iteration], mu: usize) -> usize {
    let mut best_slot = 0;
    let mut best_score = i64::MIN;
    for (slot, state) in states.iter().enumerate().take(mu + 1) {
        if state.discrepancy == 0 {
            continue;
        }
        let score = slot as i64 - 1 - state.degree as i64;
        if score > best_score {
            best_score = score;
            best_slot = slot;
        }
    }
    best_slot
}

/// Synthesize the minimal error-locator polynomial from 2t syndromes
pub fn berlekamp_massey(field: &GaloisField, syndromes: &[u16], t: usize) -> Result<ErrorLocator> {
    let two_t = 2 * t;
    if t == 0 || syndromes.len() != two_t {
        return Err(BchError::SyndromeCount {
            expected: two_t,
            actual: syndromes.len(),
        });
    }

    let mut states: Vec<Iteration> = Vec::with_capacity(two_t + 2);
    states.push(Iteration::unit(t, 1)); // μ = -1
    states.push(Iteration::unit(t, syndromes[0])); // μ = 0

    for mu in 0..two_t {
        let current = &states[mu + 1];
        let mut next = if current.discrepancy == 0 {
            current.clone()
        } else {
            let rho_slot = reference_slot(&states, mu);
            let reference = &states[rho_slot];
            // μ - ρ with ρ = rho_slot - 1
            let shift = mu + 1 - rho_slot;
            let correction =
                field.multiply(current.discrepancy, field.inverse(reference.discrepancy)?);

            let mut sigma = current.sigma.clone();
            for (i, &coefficient) in reference.sigma.iter().enumerate() {
                let target = i + shift;
                if target > t {
                    break;
                }
                if coefficient != 0 {
                    sigma[target] = field.add(sigma[target], field.multiply(correction, coefficient));
                }
            }

            trace!(
                "BM μ={}: d={} ρ={} shift={}",
                mu,
                current.discrepancy,
                rho_slot as i64 - 1,
                shift
            );

            Iteration {
                sigma,
                degree: current.degree.max(reference.degree + shift),
                discrepancy: 0,
            }
        };

        // d_{μ+1} = S_{μ+2} + Σ σᵢ S_{μ+2-i}
        next.discrepancy = if mu + 1 < two_t {
            let terms = next.degree.min(t).min(mu + 1);
            (1..=terms).fold(syndromes[mu + 1], |acc, i| {
                field.add(acc, field.multiply(next.sigma[i], syndromes[mu + 1 - i]))
            })
        } else {
            0
        };

        states.push(next);
    }

    let last = states.pop().ok_or(BchError::SyndromeCount {
        expected: two_t,
        actual: 0,
    })?;
    Ok(ErrorLocator {
        coefficients: last.sigma,
        degree: last.degree,
    })
}
