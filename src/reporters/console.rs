//! Console reporter
//!
//! Step-by-step narration of a decode: syndromes in value/hex/binary/α-power
//! form, the locator polynomial, Chien roots, and the Chase trial table.

use super::DecodeReporter;
use crate::decoder::{ChaseTrial, DecodeFailure};
use crate::galois::GaloisField;
use crate::locator::ErrorLocator;
use crate::reliability::Reliability;

const RULE_WIDTH: usize = 70;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

/// Format a field element as `value (0x.., 0b..) = α^k`
pub fn format_element(field: &GaloisField, value: u16) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let m = field.m() as usize;
    format!(
        "{} (0x{:0hex$x}, 0b{:0m$b}) = {}",
        value,
        value,
        value,
        field.power_notation(value),
        hex = m.div_ceil(4),
        m = m
    )
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        "none".to_string()
    } else {
        positions
            .iter()
            .map(|p| format!("r{}", p))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl DecodeReporter for ConsoleReporter {
    fn report_syndromes(&self, field: &GaloisField, syndromes: &[u16]) {
        if self.quiet {
            return;
        }
        println!("Syndromes:");
        for (i, &s) in syndromes.iter().enumerate() {
            println!("  S_{} = {}", i + 1, format_element(field, s));
        }
    }

    fn report_no_errors(&self) {
        if self.quiet {
            return;
        }
        println!("  => All syndromes are 0: no errors detected");
    }

    fn report_locator(&self, field: &GaloisField, locator: &ErrorLocator) {
        if self.quiet {
            return;
        }
        println!("Error locator polynomial (degree l = {}):", locator.degree());
        let shown = locator.degree().min(locator.capacity());
        for (i, &c) in locator.coefficients().iter().take(shown + 1).enumerate() {
            println!("  σ_{} = {}", i, format_element(field, c));
        }
        println!("  σ(X) = {}", locator.format(field));
    }

    fn report_roots(&self, roots: &[usize]) {
        if self.quiet {
            return;
        }
        println!("Chien search: {} root(s) at {:?}", roots.len(), roots);
    }

    fn report_correction(&self, error_locations: &[usize]) {
        if self.quiet {
            return;
        }
        println!(
            "  => Corrected {} error(s) at {:?}",
            error_locations.len(),
            error_locations
        );
    }

    fn report_failure(&self, failure: &DecodeFailure) {
        if self.quiet {
            return;
        }
        println!("  => DECODING FAILED: {}", failure);
    }

    fn report_least_reliable(&self, positions: &[usize], reliability: &Reliability, n: usize) {
        if self.quiet {
            return;
        }
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Chase: {} least reliable position(s) -> {} test patterns",
            positions.len(),
            1usize << positions.len()
        );
        let values: Vec<String> = positions
            .iter()
            .map(|&p| format!("r{}={}", p, reliability.at_position(n, p)))
            .collect();
        println!("  Reliabilities: {}", values.join(", "));
    }

    fn report_trial(&self, trial: &ChaseTrial) {
        if self.quiet {
            return;
        }
        let outcome = match &trial.result.failure {
            Some(failure) => format!("failed ({})", failure),
            None => format!("errors in pattern {:?}", trial.result.error_locations),
        };
        println!(
            "  Pattern {}: flip [{}] -> {}",
            trial.index,
            format_positions(&trial.flipped),
            outcome
        );
    }

    fn report_selection(&self, trials: &[ChaseTrial], best: Option<usize>) {
        if self.quiet {
            return;
        }
        let decoded = trials.iter().filter(|t| t.result.success).count();
        println!("Decoded {}/{} patterns", decoded, trials.len());
        for (i, trial) in trials.iter().enumerate() {
            if let Some(correlation) = trial.correlation {
                let marker = if best == Some(i) { " <-- BEST" } else { "" };
                println!(
                    "  Pattern {}: correlation = {}{}",
                    trial.index, correlation, marker
                );
            }
        }
        println!("{}", "-".repeat(RULE_WIDTH));
    }
}
