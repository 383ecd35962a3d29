//! Pattern-file codec for reliability streams
//!
//! Reliability values arrive as text rows of 64 binary digits, each row
//! carrying eight signed bytes (MSB = sign, two's complement). One codeword
//! occupies 2^m values, i.e. `2^m / 8` rows, ordered from the sentinel
//! (index 0) down to coefficient position 0.
//!
//! A mixed stream pairs the rows with a mode list (`0` hard, `1` soft) and a
//! code-tag list (`01`, `10`, `11`), one entry per codeword.

mod error;

pub use error::{PatternError, Result};

use crate::code::{BchCode, BYTES_PER_ROW};
use crate::decoder::DecodeMode;
use crate::reliability::Reliability;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Binary digits per pattern row
pub const ROW_DIGITS: usize = BYTES_PER_ROW * 8;

/// One row of eight signed reliability bytes
pub type Row = [i8; BYTES_PER_ROW];

/// Parse one line; `Ok(None)` for lines that are not 64 digits long
///
/// `line_number` is 1-based and only used for error messages.
pub fn parse_row(line_number: usize, line: &str) -> Result<Option<Row>> {
    let line = line.trim();
    if line.len() != ROW_DIGITS {
        if !line.is_empty() {
            warn!(
                "Line {}: skipping row of {} characters (expected {})",
                line_number,
                line.len(),
                ROW_DIGITS
            );
        }
        return Ok(None);
    }

    let mut row = [0i8; BYTES_PER_ROW];
    for (column, ch) in line.chars().enumerate() {
        let bit = match ch {
            '0' => 0u8,
            '1' => 1u8,
            found => {
                return Err(PatternError::InvalidDigit {
                    line: line_number,
                    column: column + 1,
                    found,
                })
            }
        };
        let byte = &mut row[column / 8];
        *byte = ((*byte as u8) << 1 | bit) as i8;
    }
    Ok(Some(row))
}

/// Parse every well-formed row of a text stream
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(row) = parse_row(i + 1, line)? {
            rows.push(row);
        }
    }
    Ok(rows)
}

/// Parse a text stream into one flat reliability vector
pub fn parse_reliability(text: &str) -> Result<Reliability> {
    let rows = parse_rows(text)?;
    Ok(Reliability::new(rows.into_iter().flatten().collect()))
}

/// Render one row as 64 binary digits
pub fn format_row(row: &Row) -> String {
    row.iter().map(|&value| format!("{:08b}", value as u8)).collect()
}

/// Cut rows into consecutive codeword blocks, one per entry of `codes`
pub fn split_blocks(rows: &[Row], codes: &[BchCode]) -> Result<Vec<Reliability>> {
    let mut offset = 0;
    let mut blocks = Vec::with_capacity(codes.len());
    for (codeword, code) in codes.iter().enumerate() {
        let expected = code.rows_per_block();
        let available = rows.len() - offset;
        if available < expected {
            return Err(PatternError::TruncatedBlock {
                codeword,
                expected,
                available,
            });
        }
        let values: Vec<i8> = rows[offset..offset + expected]
            .iter()
            .flatten()
            .copied()
            .collect();
        blocks.push(Reliability::new(values));
        offset += expected;
    }
    if offset < rows.len() {
        warn!("Ignoring {} trailing rows", rows.len() - offset);
    }
    Ok(blocks)
}

fn tag_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parse a mode list, one `0`/`1` per line
pub fn parse_mode_tags(text: &str) -> Result<Vec<DecodeMode>> {
    tag_lines(text)
        .map(|(line, tag)| {
            DecodeMode::from_tag(tag).ok_or_else(|| PatternError::InvalidModeTag {
                line,
                tag: tag.to_string(),
            })
        })
        .collect()
}

/// Parse a code-tag list, one `01`/`10`/`11` per line
pub fn parse_code_tags(text: &str) -> Result<Vec<BchCode>> {
    tag_lines(text)
        .map(|(line, tag)| {
            BchCode::from_tag(tag).ok_or_else(|| PatternError::InvalidCodeTag {
                line,
                tag: tag.to_string(),
            })
        })
        .collect()
}

/// One codeword's worth of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBlock {
    pub code: BchCode,
    pub mode: DecodeMode,
    pub reliability: Reliability,
}

impl PatternBlock {
    /// Hard-decision received word sliced from the reliabilities
    pub fn received(&self) -> Vec<u8> {
        self.reliability.hard_decision(self.code.n)
    }
}

/// Sequence of codewords read from a pattern stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    pub blocks: Vec<PatternBlock>,
}

impl PatternSet {
    /// Every codeword shares one code and mode
    pub fn from_text(text: &str, code: BchCode, mode: DecodeMode) -> Result<Self> {
        let rows = parse_rows(text)?;
        let per_block = code.rows_per_block();
        let count = rows.len() / per_block;
        if rows.len() % per_block != 0 {
            return Err(PatternError::TruncatedBlock {
                codeword: count,
                expected: per_block,
                available: rows.len() % per_block,
            });
        }
        let codes = vec![code; count];
        let modes = vec![mode; count];
        Self::assemble(&rows, &codes, &modes)
    }

    /// Per-codeword mode and code lists
    pub fn from_mixed_text(text: &str, mode_text: &str, code_text: &str) -> Result<Self> {
        let rows = parse_rows(text)?;
        let modes = parse_mode_tags(mode_text)?;
        let codes = parse_code_tags(code_text)?;
        if modes.len() != codes.len() {
            return Err(PatternError::TagCountMismatch {
                modes: modes.len(),
                codes: codes.len(),
            });
        }
        Self::assemble(&rows, &codes, &modes)
    }

    pub fn load(path: &Path, code: BchCode, mode: DecodeMode) -> Result<Self> {
        Self::from_text(&read_file(path)?, code, mode)
    }

    pub fn load_mixed(path: &Path, mode_path: &Path, code_path: &Path) -> Result<Self> {
        Self::from_mixed_text(
            &read_file(path)?,
            &read_file(mode_path)?,
            &read_file(code_path)?,
        )
    }

    fn assemble(rows: &[Row], codes: &[BchCode], modes: &[DecodeMode]) -> Result<Self> {
        let blocks = split_blocks(rows, codes)?
            .into_iter()
            .zip(codes.iter().zip(modes))
            .map(|(reliability, (&code, &mode))| PatternBlock {
                code,
                mode,
                reliability,
            })
            .collect::<Vec<_>>();
        debug!("Loaded {} codeword blocks", blocks.len());
        Ok(Self { blocks })
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Read a whole text file with path context
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PatternError::Read {
        file: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{BCH_255_239, BCH_63_51};

    fn row_text(values: [i8; 8]) -> String {
        format_row(&values)
    }

    #[test]
    fn test_parse_row_signed_bytes() {
        let line = format!("{}_{}", "01".repeat(28), "1".repeat(7));
        assert!(matches!(
            parse_row(3, &line),
            Err(PatternError::InvalidDigit {
                line: 3,
                column: 57,
                found: '_'
            })
        ));

        let line = row_text([1, -1, -128, 127, 0, 2, -2, 64]);
        let row = parse_row(1, &line).unwrap().unwrap();
        assert_eq!(row, [1, -1, -128, 127, 0, 2, -2, 64]);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        assert_eq!(parse_row(1, "0101").unwrap(), None);
        assert_eq!(parse_row(1, "   ").unwrap(), None);
        let text = format!("garbage\n{}\n\n", row_text([5; 8]));
        assert_eq!(parse_rows(&text).unwrap().len(), 1);
    }

    #[test]
    fn test_split_blocks_truncated() {
        let rows = vec![[0i8; 8]; 10];
        let err = split_blocks(&rows, &[BCH_63_51, BCH_63_51]).unwrap_err();
        assert!(matches!(
            err,
            PatternError::TruncatedBlock {
                codeword: 1,
                expected: 8,
                available: 2
            }
        ));
    }

    #[test]
    fn test_mixed_set() {
        let mut text = String::new();
        for _ in 0..BCH_63_51.rows_per_block() + BCH_255_239.rows_per_block() {
            text.push_str(&row_text([10; 8]));
            text.push('\n');
        }
        let set = PatternSet::from_mixed_text(&text, "1\n0\n", "01\n10\n").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.blocks[0].mode, DecodeMode::Soft);
        assert_eq!(set.blocks[0].code, BCH_63_51);
        assert_eq!(set.blocks[1].reliability.len(), 256);
        assert_eq!(set.blocks[1].received(), vec![0u8; 255]);
    }

    #[test]
    fn test_tag_errors() {
        assert!(matches!(
            parse_mode_tags("0\n2\n"),
            Err(PatternError::InvalidModeTag { line: 2, .. })
        ));
        assert!(matches!(
            parse_code_tags("01\n00\n"),
            Err(PatternError::InvalidCodeTag { line: 2, .. })
        ));
        assert!(matches!(
            PatternSet::from_mixed_text("", "0\n", ""),
            Err(PatternError::TagCountMismatch { modes: 1, codes: 0 })
        ));
    }
}
