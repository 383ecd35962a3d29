//! Configuration for decode operations

use crate::decoder::DEFAULT_CHASE_FLIPS;

/// Configuration shared by single-word and batch decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Least reliable positions perturbed by the Chase decoder
    pub chase_flips: usize,
    /// Whether Chase trials and batch codewords run on the rayon pool
    pub parallel: bool,
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            chase_flips: DEFAULT_CHASE_FLIPS,
            parallel: true,
            threads: 0, // Auto-detect CPU cores
        }
    }
}

impl DecoderConfig {
    pub fn new(chase_flips: usize, parallel: bool, threads: usize) -> Self {
        Self {
            chase_flips,
            parallel,
            threads,
        }
    }

    /// Sequential configuration with default flips
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Build from parsed arguments; absent arguments keep their defaults
    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let parse = |id: &str, default: usize| {
            matches
                .try_get_one::<String>(id)
                .ok()
                .flatten()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        let chase_flips = parse("flips", DEFAULT_CHASE_FLIPS);
        let threads = parse("threads", 0);
        let parallel = !matches
            .try_get_one::<bool>("no-parallel")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);

        Self::new(chase_flips, parallel, threads)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}

/// Configure the global rayon pool; only the first call in a process wins
pub fn configure_thread_pool(config: &DecoderConfig) {
    let threads = config.effective_threads();
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
    {
        log::warn!("Could not set thread count to {}: {}", threads, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction, Command};

    fn command() -> Command {
        Command::new("test")
            .arg(Arg::new("flips").long("flips"))
            .arg(Arg::new("threads").long("threads"))
            .arg(
                Arg::new("no-parallel")
                    .long("no-parallel")
                    .action(ArgAction::SetTrue),
            )
    }

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.chase_flips, 2);
        assert!(config.parallel);
        assert_eq!(config.threads, 0);
        assert_eq!(DecoderConfig::sequential().effective_threads(), 1);
    }

    #[test]
    fn test_from_args() {
        let matches = command().get_matches_from(["test", "--flips", "3", "--threads", "6"]);
        let config = DecoderConfig::from_args(&matches);
        assert_eq!(config, DecoderConfig::new(3, true, 6));
        assert_eq!(config.effective_threads(), 6);

        let matches = command().get_matches_from(["test", "--no-parallel"]);
        let config = DecoderConfig::from_args(&matches);
        assert!(!config.parallel);
        assert_eq!(config.chase_flips, 2);
    }

    #[test]
    fn test_from_args_missing_definitions() {
        let matches = Command::new("bare").get_matches_from(["bare"]);
        assert_eq!(DecoderConfig::from_args(&matches), DecoderConfig::default());
    }
}
