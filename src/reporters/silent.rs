//! Silent reporter
//!
//! No-output implementation for library use and testing.

use super::DecodeReporter;
use crate::decoder::{ChaseTrial, DecodeFailure};
use crate::galois::GaloisField;
use crate::locator::ErrorLocator;
use crate::reliability::Reliability;

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl DecodeReporter for SilentReporter {
    fn report_syndromes(&self, _field: &GaloisField, _syndromes: &[u16]) {}
    fn report_no_errors(&self) {}
    fn report_locator(&self, _field: &GaloisField, _locator: &ErrorLocator) {}
    fn report_roots(&self, _roots: &[usize]) {}
    fn report_correction(&self, _error_locations: &[usize]) {}
    fn report_failure(&self, _failure: &DecodeFailure) {}
    fn report_least_reliable(&self, _positions: &[usize], _reliability: &Reliability, _n: usize) {}
    fn report_trial(&self, _trial: &ChaseTrial) {}
    fn report_selection(&self, _trials: &[ChaseTrial], _best: Option<usize>) {}
}
