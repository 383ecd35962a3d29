//! BCH decoding: hard-decision, Chase soft-decision, and mode dispatch
//!
//! All decoders borrow a [`GaloisField`](crate::galois::GaloisField) built
//! once by the caller. Decoding an uncorrectable word is not an error: it
//! returns a [`DecodeResult`] with `success == false`.

mod chase;
mod hard;
mod types;
mod unified;

pub use chase::{ChaseDecoder, DEFAULT_CHASE_FLIPS, MAX_CHASE_FLIPS};
pub use hard::HardDecoder;
pub use types::{ChaseTrial, DecodeFailure, DecodeResult};
pub use unified::{decode, decode_with_mode_name, BchDecoder, DecodeMode};
