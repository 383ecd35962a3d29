//! Mode dispatch between hard and soft decoding

use super::chase::ChaseDecoder;
use super::hard::HardDecoder;
use super::types::DecodeResult;
use crate::code::BchCode;
use crate::config::DecoderConfig;
use crate::error::{BchError, Result};
use crate::galois::GaloisField;
use crate::reliability::Reliability;
use crate::reporters::{DecodeReporter, SilentReporter};
use std::fmt;
use std::str::FromStr;

/// Decoding strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeMode {
    Hard,
    Soft,
}

impl DecodeMode {
    /// Parse the one-character hardware mode tag ("0" hard, "1" soft)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "0" => Some(DecodeMode::Hard),
            "1" => Some(DecodeMode::Soft),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DecodeMode::Hard => "0",
            DecodeMode::Soft => "1",
        }
    }
}

impl FromStr for DecodeMode {
    type Err = BchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hard" => Ok(DecodeMode::Hard),
            "soft" => Ok(DecodeMode::Soft),
            _ => Err(BchError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeMode::Hard => write!(f, "hard"),
            DecodeMode::Soft => write!(f, "soft"),
        }
    }
}

/// Decoder facade bound to one field and code
#[derive(Debug, Clone)]
pub struct BchDecoder<'a> {
    hard: HardDecoder<'a>,
    config: DecoderConfig,
}

impl<'a> BchDecoder<'a> {
    pub fn new(field: &'a GaloisField, code: &BchCode) -> Result<Self> {
        Ok(Self {
            hard: HardDecoder::for_code(field, code)?,
            config: DecoderConfig::default(),
        })
    }

    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn hard_decoder(&self) -> HardDecoder<'a> {
        self.hard
    }

    /// Chase decoder configured from this facade's settings
    pub fn chase_decoder(&self) -> Result<ChaseDecoder<'a>> {
        Ok(ChaseDecoder::new(self.hard)
            .with_flips(self.config.chase_flips)?
            .with_parallel(self.config.parallel))
    }

    pub fn decode(
        &self,
        received: &[u8],
        mode: DecodeMode,
        reliability: Option<&Reliability>,
    ) -> Result<DecodeResult> {
        self.decode_with_reporter(received, mode, reliability, &SilentReporter)
    }

    pub fn decode_with_reporter<R: DecodeReporter + ?Sized>(
        &self,
        received: &[u8],
        mode: DecodeMode,
        reliability: Option<&Reliability>,
        reporter: &R,
    ) -> Result<DecodeResult> {
        match mode {
            DecodeMode::Hard => self.hard.decode_with_reporter(received, reporter),
            DecodeMode::Soft => {
                let reliability = reliability.ok_or(BchError::MissingReliability)?;
                self.chase_decoder()?
                    .decode_with_reporter(received, reliability, reporter)
            }
        }
    }
}

/// Decode one word
///
/// `flips` defaults to 2 and is only used in soft mode, which also requires
/// `reliability`.
pub fn decode(
    received: &[u8],
    field: &GaloisField,
    t: usize,
    n: usize,
    mode: DecodeMode,
    reliability: Option<&Reliability>,
    flips: Option<usize>,
) -> Result<DecodeResult> {
    let hard = HardDecoder::new(field, n, t)?;
    match mode {
        DecodeMode::Hard => hard.decode(received),
        DecodeMode::Soft => {
            let reliability = reliability.ok_or(BchError::MissingReliability)?;
            ChaseDecoder::new(hard)
                .with_flips(flips.unwrap_or(super::chase::DEFAULT_CHASE_FLIPS))?
                .decode(received, reliability)
        }
    }
}

/// Decode one word with the mode given as text ("hard" or "soft")
pub fn decode_with_mode_name(
    received: &[u8],
    field: &GaloisField,
    t: usize,
    n: usize,
    mode: &str,
    reliability: Option<&Reliability>,
    flips: Option<usize>,
) -> Result<DecodeResult> {
    decode(received, field, t, n, mode.parse()?, reliability, flips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::BCH_63_51;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("hard".parse::<DecodeMode>().unwrap(), DecodeMode::Hard);
        assert_eq!(" Soft ".parse::<DecodeMode>().unwrap(), DecodeMode::Soft);
        assert_eq!(
            "medium".parse::<DecodeMode>(),
            Err(BchError::UnknownMode("medium".to_string()))
        );
        assert_eq!(DecodeMode::from_tag("1"), Some(DecodeMode::Soft));
        assert_eq!(DecodeMode::from_tag("2"), None);
    }

    #[test]
    fn test_soft_without_reliability_is_configuration_error() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let err = decode(&[0u8; 63], &gf, 2, 63, DecodeMode::Soft, None, None).unwrap_err();
        assert_eq!(err, BchError::MissingReliability);
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_unknown_mode_name() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let err = decode_with_mode_name(&[0u8; 63], &gf, 2, 63, "fast", None, None).unwrap_err();
        assert_eq!(err, BchError::UnknownMode("fast".to_string()));
    }

    #[test]
    fn test_facade_dispatch() {
        let gf = GaloisField::for_code(&BCH_63_51).unwrap();
        let decoder = BchDecoder::new(&gf, &BCH_63_51).unwrap();
        let mut r = vec![0u8; 63];
        r[5] = 1;
        let hard = decoder.decode(&r, DecodeMode::Hard, None).unwrap();
        assert_eq!(hard.error_locations, vec![5]);

        let rel = Reliability::from_positions(&[40i8; 63]);
        let soft = decoder.decode(&r, DecodeMode::Soft, Some(&rel)).unwrap();
        assert!(soft.success);
        assert_eq!(soft.corrected, Some(vec![0u8; 63]));
    }
}
