//! Supported binary BCH code table
//!
//! The decoder models exactly three hardware configurations. Parameters and
//! primitive polynomials are fixed; nothing here is extensible at runtime.
//!
//! | id | n    | k   | m  | t |
//! |----|------|-----|----|---|
//! | 1  | 63   | 51  | 6  | 2 |
//! | 2  | 255  | 239 | 8  | 2 |
//! | 3  | 1023 | 983 | 10 | 4 |

use crate::error::{BchError, Result};
use std::fmt;

/// GF(2^6) primitive polynomial: x⁶ + x + 1
pub const PRIMITIVE_POLY_M6: u32 = 0b1000011;

/// GF(2^8) primitive polynomial: x⁸ + x⁴ + x³ + x² + 1
pub const PRIMITIVE_POLY_M8: u32 = 0b100011101;

/// GF(2^10) primitive polynomial: x¹⁰ + x³ + 1
pub const PRIMITIVE_POLY_M10: u32 = 0b10000001001;

/// Reliability bytes carried per row of a pattern file
pub const BYTES_PER_ROW: usize = 8;

/// Parameters of one supported BCH code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BchCode {
    pub id: u8,
    pub n: usize,
    pub k: usize,
    pub m: u32,
    pub t: usize,
    /// Primitive polynomial bit pattern, constant term at bit 0
    pub primitive: u32,
}

/// (63, 51) code over GF(2^6), t = 2
pub const BCH_63_51: BchCode = BchCode {
    id: 1,
    n: 63,
    k: 51,
    m: 6,
    t: 2,
    primitive: PRIMITIVE_POLY_M6,
};

/// (255, 239) code over GF(2^8), t = 2
pub const BCH_255_239: BchCode = BchCode {
    id: 2,
    n: 255,
    k: 239,
    m: 8,
    t: 2,
    primitive: PRIMITIVE_POLY_M8,
};

/// (1023, 983) code over GF(2^10), t = 4
pub const BCH_1023_983: BchCode = BchCode {
    id: 3,
    n: 1023,
    k: 983,
    m: 10,
    t: 4,
    primitive: PRIMITIVE_POLY_M10,
};

/// All supported codes in id order
pub const SUPPORTED_CODES: [BchCode; 3] = [BCH_63_51, BCH_255_239, BCH_1023_983];

/// Look up the predefined primitive polynomial for a field size
pub fn primitive_polynomial(m: u32) -> Result<u32> {
    match m {
        6 => Ok(PRIMITIVE_POLY_M6),
        8 => Ok(PRIMITIVE_POLY_M8),
        10 => Ok(PRIMITIVE_POLY_M10),
        other => Err(BchError::UnsupportedFieldSize(other)),
    }
}

impl BchCode {
    /// Look up a code by its table id (1, 2 or 3)
    pub fn from_id(id: u8) -> Result<Self> {
        SUPPORTED_CODES
            .iter()
            .find(|code| code.id == id)
            .copied()
            .ok_or(BchError::UnsupportedCode(id))
    }

    /// Look up a code by its field size
    pub fn from_field_size(m: u32) -> Result<Self> {
        SUPPORTED_CODES
            .iter()
            .find(|code| code.m == m)
            .copied()
            .ok_or(BchError::UnsupportedFieldSize(m))
    }

    /// Look up a code by the two-bit hardware code tag ("01", "10", "11")
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "01" => Some(BCH_63_51),
            "10" => Some(BCH_255_239),
            "11" => Some(BCH_1023_983),
            _ => None,
        }
    }

    /// Two-bit hardware code tag
    pub fn tag(&self) -> &'static str {
        match self.m {
            6 => "01",
            8 => "10",
            _ => "11",
        }
    }

    /// Reliability values per codeword block: n coefficients plus the sentinel
    pub fn block_len(&self) -> usize {
        1 << self.m
    }

    /// Pattern-file rows per codeword block
    pub fn rows_per_block(&self) -> usize {
        self.block_len() / BYTES_PER_ROW
    }

    /// Number of syndromes evaluated per word
    pub fn syndrome_count(&self) -> usize {
        2 * self.t
    }
}

impl fmt::Display for BchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) m={} t={}", self.n, self.k, self.m, self.t)
    }
}
