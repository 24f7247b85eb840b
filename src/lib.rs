//! Reed-Solomon forward error correction over GF(2^m)
//!
//! A block codec that appends parity symbols to a fixed-length message so
//! that a bounded number of symbol errors in the received block can be
//! detected and corrected. Code parameters are compile-time constants: the
//! symbol width `M` selects the field GF(2^M) (with a fixed primitive
//! polynomial per width) and `T` is the per-block correction capacity,
//! giving RS(n, k) with n = 2^M - 1 and k = n - 2T.
//!
//! ```
//! use rsfec::Rs15_9;
//!
//! let rs = Rs15_9::new();
//! let message = [6, 15, 8, 9, 8, 3, 0, 0, 5];
//!
//! let mut codeword = rs.encode(&message);
//! codeword[2] ^= 0xC; // channel noise
//!
//! assert!(rs.correct_in_place(&mut codeword));
//! assert_eq!(&codeword[..rs.message_len()], &message);
//! ```
//!
//! The engine is stateless across calls and immutable after construction;
//! one instance can serve concurrent encode/decode callers.

pub mod codec;
pub mod galois;

pub use codec::{DecodeError, DecodeResult, ReedSolomon, Rs15_9, Rs255_223, Rs255_239};
pub use galois::{primitive_poly, GaloisTable};
