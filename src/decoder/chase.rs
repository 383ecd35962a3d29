//! Soft-decision decoding with the Chase algorithm
//!
//! The p least reliable positions are perturbed in all 2^p combinations and
//! every resulting test pattern is hard-decoded independently. Among the
//! successful trials the corrected word with the highest correlation against
//! the reliability vector wins; ties go to the lowest subset index.
//!
//! This recovers some error patterns of weight up to t + p at the cost of
//! 2^p hard decodes. Trials share nothing but the read-only field tables,
//! so they can run on the rayon pool.

use super::hard::HardDecoder;
use super::types::{ChaseTrial, DecodeFailure, DecodeResult};
use crate::error::{BchError, Result};
use crate::reliability::Reliability;
use crate::reporters::{DecodeReporter, SilentReporter};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Default number of least reliable positions to perturb
pub const DEFAULT_CHASE_FLIPS: usize = 2;

/// Upper bound on perturbed positions (65536 trials)
pub const MAX_CHASE_FLIPS: usize = 16;

/// Chase soft-decision decoder built on a hard decoder
#[derive(Debug, Clone, Copy)]
pub struct ChaseDecoder<'a> {
    hard: HardDecoder<'a>,
    flips: usize,
    parallel: bool,
}

impl<'a> ChaseDecoder<'a> {
    /// Create a sequential decoder perturbing [`DEFAULT_CHASE_FLIPS`] positions
    pub fn new(hard: HardDecoder<'a>) -> Self {
        Self {
            hard,
            flips: DEFAULT_CHASE_FLIPS,
            parallel: false,
        }
    }

    /// Set the number of perturbed positions p
    pub fn with_flips(mut self, flips: usize) -> Result<Self> {
        let max = MAX_CHASE_FLIPS.min(self.hard.n());
        if flips > max {
            return Err(BchError::InvalidFlipCount { flips, max });
        }
        self.flips = flips;
        Ok(self)
    }

    /// Run trials on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn flips(&self) -> usize {
        self.flips
    }

    pub fn trial_count(&self) -> usize {
        1 << self.flips
    }

    pub fn decode(&self, received: &[u8], reliability: &Reliability) -> Result<DecodeResult> {
        self.decode_with_reporter(received, reliability, &SilentReporter)
    }

    pub fn decode_with_reporter<R: DecodeReporter + ?Sized>(
        &self,
        received: &[u8],
        reliability: &Reliability,
        reporter: &R,
    ) -> Result<DecodeResult> {
        let n = self.hard.n();
        self.hard.validate(received)?;
        reliability.ensure_covers(n)?;

        let least_reliable = reliability.least_reliable(n, self.flips);
        reporter.report_least_reliable(&least_reliable, reliability, n);

        let trials = self.run_trials(received, reliability, &least_reliable)?;
        for trial in &trials {
            reporter.report_trial(trial);
        }

        let best = select_best(&trials);
        reporter.report_selection(&trials, best);

        let Some(best) = best else {
            let failure = DecodeFailure::NoTrialDecoded {
                trials: trials.len(),
            };
            debug!("Chase decoding failed: {}", failure);
            reporter.report_failure(&failure);
            return Ok(DecodeResult::failed(failure, Vec::new()));
        };

        let winner = &trials[best];
        let flipped: BTreeSet<usize> = winner.flipped.iter().copied().collect();
        let found: BTreeSet<usize> = winner.result.error_locations.iter().copied().collect();
        let error_locations: Vec<usize> = flipped.symmetric_difference(&found).copied().collect();
        debug!(
            "Chase selected pattern {} (correlation {:?}); errors {:?}",
            winner.index, winner.correlation, error_locations
        );

        let corrected = match &winner.result.corrected {
            Some(word) => word.clone(),
            None => apply_flips(received, &error_locations),
        };
        reporter.report_correction(&error_locations);

        Ok(DecodeResult::corrected(error_locations, corrected))
    }

    /// Decode every test pattern, returned in subset-index order
    fn run_trials(
        &self,
        received: &[u8],
        reliability: &Reliability,
        least_reliable: &[usize],
    ) -> Result<Vec<ChaseTrial>> {
        let run = |index: usize| self.run_trial(index, received, reliability, least_reliable);
        let count = 1usize << least_reliable.len();

        if self.parallel {
            (0..count).into_par_iter().map(run).collect()
        } else {
            (0..count).map(run).collect()
        }
    }

    fn run_trial(
        &self,
        index: usize,
        received: &[u8],
        reliability: &Reliability,
        least_reliable: &[usize],
    ) -> Result<ChaseTrial> {
        let flipped: Vec<usize> = least_reliable
            .iter()
            .enumerate()
            .filter(|(bit, _)| (index >> bit) & 1 == 1)
            .map(|(_, &position)| position)
            .collect();

        let pattern = apply_flips(received, &flipped);
        let result = self.hard.decode_unchecked(&pattern, &SilentReporter)?;
        let correlation = result
            .corrected
            .as_deref()
            .map(|word| reliability.correlation(word));

        Ok(ChaseTrial {
            index,
            flipped,
            result,
            correlation,
        })
    }
}

/// Index of the successful trial with maximum correlation; first wins ties
fn select_best(trials: &[ChaseTrial]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (i, trial) in trials.iter().enumerate() {
        if !trial.result.success {
            continue;
        }
        let Some(correlation) = trial.correlation else {
            continue;
        };
        match best {
            Some((_, current)) if correlation <= current => {}
            _ => best = Some((i, correlation)),
        }
    }
    best.map(|(i, _)| i)
}

fn apply_flips(word: &[u8], positions: &[usize]) -> Vec<u8> {
    let mut pattern = word.to_vec();
    for &position in positions {
        pattern[position] ^= 1;
    }
    pattern
}
