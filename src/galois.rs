//! Galois Field GF(2^m) arithmetic for binary BCH decoding
//!
//! Elements are `u16` bitmasks in the polynomial basis (1, α, α², …). The
//! field is represented by a pair of lookup tables built once from a
//! primitive polynomial: `exp[i] = αⁱ` and `log[v] = i` such that `αⁱ = v`.
//! The exponent table is extended to `2n + 1` entries so that adding two
//! logarithms never needs an explicit modulo.
//!
//! Tables are immutable after construction. A [`GaloisField`] is meant to be
//! built once per field size and shared by reference across every decode
//! call; [`FieldRegistry`] does this lazily for the supported sizes.

use crate::code::{primitive_polynomial, BchCode};
use crate::error::{BchError, Result};
use std::sync::OnceLock;

/// Precomputed exponent and logarithm tables for GF(2^m)
#[derive(Debug, Clone)]
pub struct GaloisField {
    m: u32,
    n: usize,
    primitive: u32,
    log_table: Vec<u16>,
    exp_table: Vec<u16>, // 2n + 1 entries to avoid modulo in calculations
}

impl GaloisField {
    /// Build the field for a supported size using its predefined polynomial
    pub fn new(m: u32) -> Result<Self> {
        Self::with_polynomial(m, primitive_polynomial(m)?)
    }

    /// Build the field for the given code
    pub fn for_code(code: &BchCode) -> Result<Self> {
        Self::with_polynomial(code.m, code.primitive)
    }

    /// Build the field from an explicit polynomial of degree m
    ///
    /// Fails with [`BchError::NonPrimitivePolynomial`] unless the register
    /// sequence visits every nonzero element exactly once.
    pub fn with_polynomial(m: u32, polynomial: u32) -> Result<Self> {
        primitive_polynomial(m)?;

        let n = (1usize << m) - 1;
        let mut gf = GaloisField {
            m,
            n,
            primitive: polynomial,
            log_table: vec![0; n + 1],
            exp_table: vec![0; 2 * n + 1],
        };
        let reached = gf.build_tables();
        if reached != n {
            return Err(BchError::NonPrimitivePolynomial {
                m,
                polynomial,
                reached,
                expected: n,
            });
        }
        Ok(gf)
    }

    /// Build logarithm and exponential tables, returning how many distinct
    /// nonzero elements the register reached
    fn build_tables(&mut self) -> usize {
        let high_bit = 1u32 << self.m;
        let mut filled = vec![false; self.n + 1];
        let mut reached = 0;
        let mut value = 1u32;

        for i in 0..self.n {
            let slot = (value as usize) & self.n;
            self.exp_table[i] = slot as u16;
            if slot != 0 && !filled[slot] {
                filled[slot] = true;
                self.log_table[slot] = i as u16;
                reached += 1;
            }

            value <<= 1;
            if value & high_bit != 0 {
                value ^= self.primitive;
            }
        }

        // Duplicate the table for easier calculation
        for i in self.n..self.exp_table.len() {
            self.exp_table[i] = self.exp_table[i - self.n];
        }

        reached
    }

    /// Field size parameter m
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Multiplicative order n = 2^m - 1
    pub fn order(&self) -> usize {
        self.n
    }

    pub fn primitive_polynomial(&self) -> u32 {
        self.primitive
    }

    pub fn exp_table(&self) -> &[u16] {
        &self.exp_table
    }

    /// Logarithm table; slot 0 is unused
    pub fn log_table(&self) -> &[u16] {
        &self.log_table
    }

    /// Discrete logarithm of a nonzero element
    #[inline]
    pub fn log(&self, a: u16) -> Option<usize> {
        if a == 0 {
            None
        } else {
            Some(self.log_table[a as usize] as usize)
        }
    }

    /// Add two elements in GF(2^m) - this is just XOR
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Multiply two elements in GF(2^m)
    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        let log_b = self.log_table[b as usize] as usize;
        self.exp_table[log_a + log_b]
    }

    /// Raise an element to a power; zero stays zero for every exponent
    #[inline]
    pub fn power(&self, a: u16, exponent: usize) -> u16 {
        if a == 0 {
            return 0;
        }

        let log_a = self.log_table[a as usize] as usize;
        self.exp_table[(log_a * exponent) % self.n]
    }

    /// α raised to an arbitrary non-negative exponent
    #[inline]
    pub fn alpha_power(&self, exponent: usize) -> u16 {
        self.exp_table[exponent % self.n]
    }

    /// Multiplicative inverse; zero has none
    #[inline]
    pub fn inverse(&self, a: u16) -> Result<u16> {
        if a == 0 {
            return Err(BchError::ZeroInverse);
        }

        let log_a = self.log_table[a as usize] as usize;
        Ok(self.exp_table[self.n - log_a])
    }

    /// Render a nonzero element as an α power, e.g. `α^12`
    pub fn power_notation(&self, a: u16) -> String {
        match self.log(a) {
            None => "0".to_string(),
            Some(0) => "1".to_string(),
            Some(exponent) => format!("α^{}", exponent),
        }
    }
}

/// Lazily-built, shared fields for every supported size
///
/// The registry is an explicit handle owned by the caller. Each field is
/// constructed on first use and read-only afterwards, so a registry can be
/// shared across threads once created.
#[derive(Debug, Default)]
pub struct FieldRegistry {
    fields: [OnceLock<GaloisField>; 3],
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get (building if necessary) the field for a code
    pub fn field(&self, code: &BchCode) -> Result<&GaloisField> {
        let slot = match code.m {
            6 => 0,
            8 => 1,
            10 => 2,
            other => return Err(BchError::UnsupportedFieldSize(other)),
        };
        let cell = &self.fields[slot];
        if let Some(field) = cell.get() {
            return Ok(field);
        }

        let field = GaloisField::for_code(code)?;
        // A concurrent initializer may have won; either table is identical
        let _ = cell.set(field);
        cell.get().ok_or(BchError::UnsupportedFieldSize(code.m))
    }
}
