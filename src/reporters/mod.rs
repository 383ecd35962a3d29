//! Decode event reporting
//!
//! Decoders emit a structured stream of events (syndromes computed, locator
//! found, roots found, correction applied, Chase trial outcomes) to an
//! injected reporter. Reporters observe only; they never influence control
//! flow, so decoding with the silent reporter is identical to decoding with
//! the console one.

mod console;
mod silent;

pub use console::{format_element, ConsoleReporter};
pub use silent::SilentReporter;

use crate::decoder::{ChaseTrial, DecodeFailure};
use crate::galois::GaloisField;
use crate::locator::ErrorLocator;
use crate::reliability::Reliability;

/// Observer for decode progress
///
/// Chase trials are reported after all of them have run, in subset-index
/// order, even when the trials themselves ran in parallel.
pub trait DecodeReporter: Send + Sync {
    /// Report S₁ … S₂ₜ of the word being decoded
    fn report_syndromes(&self, field: &GaloisField, syndromes: &[u16]);

    /// Report that every syndrome was zero
    fn report_no_errors(&self);

    /// Report the synthesized error-locator polynomial
    fn report_locator(&self, field: &GaloisField, locator: &ErrorLocator);

    /// Report the roots found by the Chien search
    fn report_roots(&self, roots: &[usize]);

    /// Report the positions flipped in the final correction
    fn report_correction(&self, error_locations: &[usize]);

    /// Report a declared decode failure
    fn report_failure(&self, failure: &DecodeFailure);

    /// Report the positions chosen for Chase perturbation
    fn report_least_reliable(&self, positions: &[usize], reliability: &Reliability, n: usize);

    /// Report the outcome of one Chase test pattern
    fn report_trial(&self, trial: &ChaseTrial);

    /// Report the correlation table and the selected trial, if any
    fn report_selection(&self, trials: &[ChaseTrial], best: Option<usize>);
}
