//! Golden-reference batch runs
//!
//! Decodes every codeword of a [`PatternSet`] and renders the results in the
//! answer format the hardware testbench compares against: one 10-bit binary
//! line per corrected position, ascending, or the sentinel `1111111111`
//! (1023, never a valid position) when nothing was corrected.

use crate::config::DecoderConfig;
use crate::decoder::{BchDecoder, DecodeResult};
use crate::galois::FieldRegistry;
use crate::pattern::{PatternBlock, PatternError, PatternSet, Result};
use crate::reporters::DecodeReporter;
use crate::syndrome::verify_codeword;
use log::{debug, warn};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::Path;

/// Width of one answer line in binary digits
pub const ANSWER_WIDTH: usize = 10;

/// Answer emitted for a codeword with no corrected positions
pub const ANSWER_SENTINEL: usize = (1 << ANSWER_WIDTH) - 1;

/// Maximum mismatches recorded by [`compare_answers`]
const MAX_RECORDED_MISMATCHES: usize = 16;

/// Answer lines for one decode result
///
/// Failed decodes emit the sentinel, like a word left uncorrected.
pub fn answer_lines(result: &DecodeResult) -> Vec<String> {
    if !result.success || result.error_locations.is_empty() {
        return vec![format_answer(ANSWER_SENTINEL)];
    }
    result
        .error_locations
        .iter()
        .map(|&position| format_answer(position))
        .collect()
}

pub fn format_answer(position: usize) -> String {
    format!("{:0width$b}", position, width = ANSWER_WIDTH)
}

/// Parse an answer file into positions (the sentinel included)
pub fn parse_answers(text: &str) -> Result<Vec<usize>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            if text.len() != ANSWER_WIDTH {
                return Err(PatternError::InvalidAnswer {
                    line,
                    text: text.to_string(),
                });
            }
            usize::from_str_radix(text, 2).map_err(|_| PatternError::InvalidAnswer {
                line,
                text: text.to_string(),
            })
        })
        .collect()
}

/// Outcome of decoding one pattern block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordOutcome {
    pub index: usize,
    pub result: DecodeResult,
    /// Whether the corrected word re-syndromes to zero (false on failure)
    pub verified: bool,
}

/// Results of a batch run
#[derive(Debug, Clone, Default)]
pub struct GoldenRun {
    pub outcomes: Vec<CodewordOutcome>,
}

impl GoldenRun {
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    pub fn corrected_error_count(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| o.result.corrected_count())
            .sum()
    }

    /// Successful decodes whose corrected word still has nonzero syndromes
    pub fn unverified_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.result.success && !o.verified)
            .count()
    }

    /// Answer lines for every codeword, in stream order
    pub fn answer_lines(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .flat_map(|o| answer_lines(&o.result))
            .collect()
    }

    pub fn write_answers(&self, path: &Path) -> Result<()> {
        let mut text = self.answer_lines().join("\n");
        text.push('\n');
        fs::write(path, text).map_err(|source| PatternError::Write {
            file: path.to_path_buf(),
            source,
        })
    }
}

impl fmt::Display for GoldenRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Codewords decoded: {}", self.outcomes.len())?;
        writeln!(f, "  Successful: {}", self.success_count())?;
        writeln!(f, "  Failed: {}", self.failure_count())?;
        writeln!(f, "  Errors corrected: {}", self.corrected_error_count())?;
        if self.unverified_count() > 0 {
            writeln!(
                f,
                "  Corrections with nonzero syndromes: {}",
                self.unverified_count()
            )?;
        }
        Ok(())
    }
}

fn decode_block<R: DecodeReporter + ?Sized>(
    index: usize,
    block: &PatternBlock,
    registry: &FieldRegistry,
    config: &DecoderConfig,
    reporter: &R,
) -> Result<CodewordOutcome> {
    let field = registry.field(&block.code)?;
    let decoder = BchDecoder::new(field, &block.code)?.with_config(config.clone());
    let received = block.received();
    let result = decoder.decode_with_reporter(
        &received,
        block.mode,
        Some(&block.reliability),
        reporter,
    )?;

    let verified = match &result.corrected {
        Some(word) if result.success => verify_codeword(field, word, block.code.t),
        _ => false,
    };
    if result.success && !verified {
        warn!("Codeword {}: corrected word has nonzero syndromes", index);
    }
    debug!("Codeword {} ({} {}): {}", index, block.code, block.mode, result);

    Ok(CodewordOutcome {
        index,
        result,
        verified,
    })
}

/// Decode every block of a pattern set
///
/// Codewords run in parallel when `config.parallel` is set; the reporter is
/// then called from worker threads and events of different codewords may
/// interleave.
pub fn run_golden<R: DecodeReporter + ?Sized>(
    set: &PatternSet,
    registry: &FieldRegistry,
    config: &DecoderConfig,
    reporter: &R,
) -> Result<GoldenRun> {
    // Chase trials stay sequential inside a parallel batch
    let block_config = DecoderConfig {
        parallel: false,
        ..config.clone()
    };

    let outcomes = if config.parallel {
        set.blocks
            .par_iter()
            .enumerate()
            .map(|(i, block)| decode_block(i, block, registry, &block_config, reporter))
            .collect::<Result<Vec<_>>>()?
    } else {
        set.blocks
            .iter()
            .enumerate()
            .map(|(i, block)| decode_block(i, block, registry, &block_config, reporter))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(GoldenRun { outcomes })
}

/// One differing answer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerMismatch {
    /// 1-based line number
    pub line: usize,
    pub expected: Option<usize>,
    pub actual: Option<usize>,
}

/// Line-by-line comparison of produced and expected answers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerComparison {
    pub matched: usize,
    pub mismatch_count: usize,
    /// First few mismatches, in line order
    pub mismatches: Vec<AnswerMismatch>,
    pub expected_len: usize,
    pub actual_len: usize,
}

impl AnswerComparison {
    pub fn is_match(&self) -> bool {
        self.mismatch_count == 0
    }
}

impl fmt::Display for AnswerComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_match() {
            return writeln!(f, "All {} answer lines match.", self.matched);
        }
        writeln!(
            f,
            "{} of {} answer lines differ ({} expected, {} produced).",
            self.mismatch_count,
            self.expected_len.max(self.actual_len),
            self.expected_len,
            self.actual_len
        )?;
        let show = |v: Option<usize>| v.map_or("-".to_string(), format_answer);
        for m in &self.mismatches {
            writeln!(
                f,
                "  Line {}: expected {}, got {}",
                m.line,
                show(m.expected),
                show(m.actual)
            )?;
        }
        Ok(())
    }
}

/// Compare produced answers against expected ones, position by position
pub fn compare_answers(actual: &[usize], expected: &[usize]) -> AnswerComparison {
    let mut comparison = AnswerComparison {
        expected_len: expected.len(),
        actual_len: actual.len(),
        ..AnswerComparison::default()
    };

    for i in 0..actual.len().max(expected.len()) {
        let a = actual.get(i).copied();
        let e = expected.get(i).copied();
        if a == e {
            comparison.matched += 1;
            continue;
        }
        comparison.mismatch_count += 1;
        if comparison.mismatches.len() < MAX_RECORDED_MISMATCHES {
            comparison.mismatches.push(AnswerMismatch {
                line: i + 1,
                expected: e,
                actual: a,
            });
        }
    }
    comparison
}
