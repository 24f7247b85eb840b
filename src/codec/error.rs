//! Error types for Reed-Solomon decoding

use thiserror::Error;

/// Reasons a received word can fall outside the decodable sphere.
///
/// Every variant means more than `t` symbol errors occurred (or the word is
/// otherwise structurally undecodable); callers typically retransmit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The error locator polynomial came out with degree above the
    /// correction capacity of the code.
    #[error("error locator degree {degree} exceeds correction capacity {capacity}")]
    LocatorDegreeTooHigh { degree: usize, capacity: usize },

    /// Chien search found a different number of distinct roots than the
    /// locator degree, so the locator does not split over the field.
    #[error("locator of degree {degree} has {roots} distinct roots")]
    RootCountMismatch { degree: usize, roots: usize },

    /// The locator derivative vanished at a claimed error location.
    #[error("locator derivative vanishes at codeword position {position}")]
    DegenerateLocator { position: usize },

    /// Forney's formula produced a zero magnitude, which no actual error
    /// can have.
    #[error("zero error magnitude at codeword position {position}")]
    ZeroMagnitude { position: usize },

    /// Applying the computed corrections did not produce a valid codeword.
    #[error("syndromes remain nonzero after correction")]
    ResidualSyndrome,
}

/// Type alias for Result with DecodeError
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
