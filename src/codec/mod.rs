//! Reed-Solomon block codec
//!
//! Systematic encoding and full error decoding (syndromes, Berlekamp-
//! Massey, Chien search, Forney) for short block codes over GF(2^m).

pub mod engine;
pub mod error;

mod decoder;
mod generator;

pub use engine::ReedSolomon;
pub use error::{DecodeError, DecodeResult};

/// RS(15, 9) over GF(2^4): the canonical configuration, correcting up to
/// 3 symbol errors per 15-symbol block.
pub type Rs15_9 = ReedSolomon<4, 3>;

/// RS(255, 239) over GF(2^8), correcting up to 8 symbol errors.
pub type Rs255_239 = ReedSolomon<8, 8>;

/// RS(255, 223) over GF(2^8), the CCSDS-shaped code correcting up to 16
/// symbol errors.
pub type Rs255_223 = ReedSolomon<8, 16>;
