//! Binary BCH decoder reference model
//!
//! Hard-decision (syndromes, Berlekamp–Massey, Chien search) and Chase
//! soft-decision decoding for the three supported codes:
//! (63, 51) over GF(2^6), (255, 239) over GF(2^8) and (1023, 983) over
//! GF(2^10).
//!
//! ```no_run
//! use bchdec::{BchCode, DecodeMode, GaloisField};
//!
//! let code = BchCode::from_id(1)?;
//! let field = GaloisField::for_code(&code)?;
//! let mut received = vec![0u8; code.n];
//! received[5] = 1;
//! let result = bchdec::decode(&received, &field, code.t, code.n, DecodeMode::Hard, None, None)?;
//! assert_eq!(result.error_locations, vec![5]);
//! # Ok::<(), bchdec::BchError>(())
//! ```

pub mod chien;
pub mod code;
pub mod config;
pub mod decoder;
pub mod error;
pub mod galois;
pub mod golden;
pub mod locator;
pub mod pattern;
pub mod reliability;
pub mod reporters;
pub mod syndrome;

pub use code::{BchCode, SUPPORTED_CODES};
pub use config::DecoderConfig;
pub use decoder::{
    decode, BchDecoder, ChaseDecoder, DecodeFailure, DecodeMode, DecodeResult, HardDecoder,
};
pub use error::{BchError, Result};
pub use galois::{FieldRegistry, GaloisField};
pub use reliability::Reliability;
