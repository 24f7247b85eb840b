//! The Reed-Solomon engine
//!
//! [`ReedSolomon`] is parameterized at compile time by the symbol width `M`
//! and the correction capacity `T`, giving the code RS(n, k) with
//! n = 2^M - 1 and k = n - 2T. The engine owns its field tables and
//! generator polynomial; both are built in `new` and never mutated, so a
//! single engine can serve any number of concurrent encode/decode callers.
//!
//! Symbols are `u16` values in `[0, 2^M - 1]`. Mis-sized buffers and
//! out-of-range symbols are caller errors, checked by assertions rather
//! than surfaced as `Err` values.

use log::debug;

use super::decoder::{
    apply_corrections, berlekamp_massey, chien_search, compute_syndromes, error_evaluator,
    error_magnitudes,
};
use super::error::{DecodeError, DecodeResult};
use super::generator::generator_poly;
use crate::galois::GaloisTable;

/// Reed-Solomon encoder/decoder over GF(2^M) correcting up to T symbol
/// errors per block.
pub struct ReedSolomon<const M: usize, const T: usize> {
    table: GaloisTable<M>,
    generator: Vec<u16>,
}

impl<const M: usize, const T: usize> Default for ReedSolomon<M, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: usize, const T: usize> ReedSolomon<M, T> {
    /// Codeword length n = 2^M - 1.
    pub const BLOCK_LEN: usize = (1 << M) - 1;
    /// Parity length r = 2T.
    pub const PARITY_LEN: usize = 2 * T;
    /// Message length k = n - 2T.
    pub const MESSAGE_LEN: usize = Self::BLOCK_LEN - Self::PARITY_LEN;

    // Rejects invalid parameter combinations when the engine is
    // monomorphized: the code needs 2 <= M <= 16, T >= 1 and k >= 1.
    const PARAMS_OK: () = assert!(M >= 2 && M <= 16 && T >= 1 && 2 * T < (1 << M) - 1);

    /// Build the engine: field tables, then the generator polynomial.
    /// Infallible for valid parameters; invalid `(M, T)` fail to compile.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::PARAMS_OK;

        let table = GaloisTable::new();
        let generator = generator_poly(&table, Self::PARITY_LEN);
        Self { table, generator }
    }

    /// Symbol width in bits.
    pub fn symbol_bits(&self) -> usize {
        M
    }

    /// Codeword length n in symbols.
    pub fn codeword_len(&self) -> usize {
        Self::BLOCK_LEN
    }

    /// Message length k in symbols.
    pub fn message_len(&self) -> usize {
        Self::MESSAGE_LEN
    }

    /// Parity length r = 2t in symbols.
    pub fn parity_len(&self) -> usize {
        Self::PARITY_LEN
    }

    /// Generator polynomial coefficients, lowest degree first. The leading
    /// coefficient is 1.
    pub fn generator(&self) -> &[u16] {
        &self.generator
    }

    /// Systematically encode a k-symbol message into an n-symbol codeword.
    ///
    /// The message appears verbatim at indices `[0, k)`; the parity
    /// remainder of dividing the shifted message polynomial by g(x) fills
    /// `[k, n)`, lowest degree first.
    pub fn encode(&self, message: &[u16]) -> Vec<u16> {
        assert_eq!(
            message.len(),
            Self::MESSAGE_LEN,
            "message must be exactly k symbols"
        );
        debug_assert!(
            message.iter().all(|&s| (s as usize) < Self::BLOCK_LEN + 1),
            "symbols must fit the field"
        );

        let r = Self::PARITY_LEN;
        let mut parity = vec![0u16; r];

        // LFSR division by g(x), feeding the highest-degree message symbol
        // first; message[i] carries the coefficient of x^(r + i)
        for &symbol in message.iter().rev() {
            let gate = symbol ^ parity[r - 1];
            for i in (1..r).rev() {
                parity[i] = parity[i - 1] ^ self.table.mul(gate, self.generator[i]);
            }
            parity[0] = self.table.mul(gate, self.generator[0]);
        }

        let mut codeword = Vec::with_capacity(Self::BLOCK_LEN);
        codeword.extend_from_slice(message);
        codeword.extend_from_slice(&parity);
        codeword
    }

    /// True when every syndrome of `word` is zero.
    pub fn is_codeword(&self, word: &[u16]) -> bool {
        assert_eq!(word.len(), Self::BLOCK_LEN, "word must be exactly n symbols");
        compute_syndromes(&self.table, word, Self::PARITY_LEN)
            .iter()
            .all(|&s| s == 0)
    }

    /// Correct up to T symbol errors in place and report how many symbols
    /// were corrected.
    ///
    /// On any failure the buffer is left unchanged: corrections are
    /// verified against the recomputed syndromes on a scratch copy before
    /// being written back.
    pub fn try_correct_in_place(&self, codeword: &mut [u16]) -> DecodeResult<usize> {
        assert_eq!(
            codeword.len(),
            Self::BLOCK_LEN,
            "codeword must be exactly n symbols"
        );

        let syndromes = compute_syndromes(&self.table, codeword, Self::PARITY_LEN);
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(0);
        }

        let (lambda, degree) = berlekamp_massey(&self.table, &syndromes);
        if degree > T {
            return Err(DecodeError::LocatorDegreeTooHigh {
                degree,
                capacity: T,
            });
        }

        let error_degrees = chien_search(&self.table, &lambda, degree, Self::BLOCK_LEN)?;
        let omega = error_evaluator(&self.table, &syndromes, &lambda, degree);
        let corrections = error_magnitudes(
            &self.table,
            &omega,
            &lambda,
            degree,
            &error_degrees,
            Self::MESSAGE_LEN,
            Self::PARITY_LEN,
        )?;

        let candidate = apply_corrections(&self.table, codeword, &corrections, Self::PARITY_LEN)?;
        codeword.copy_from_slice(&candidate);
        debug!("corrected {} symbol(s)", corrections.len());
        Ok(corrections.len())
    }

    /// In-place decode surface: returns whether correction succeeded.
    pub fn correct_in_place(&self, codeword: &mut [u16]) -> bool {
        match self.try_correct_in_place(codeword) {
            Ok(_) => true,
            Err(err) => {
                debug!("decode failed: {err}");
                false
            }
        }
    }

    /// Value decode surface: recover the k-symbol message from a received
    /// word, or `None` when the word lies outside the decodable sphere.
    pub fn decode(&self, received: &[u16]) -> Option<Vec<u16>> {
        let mut word = received.to_vec();
        self.try_correct_in_place(&mut word).ok()?;
        word.truncate(Self::MESSAGE_LEN);
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Rs15_9;

    #[test]
    fn derived_parameters() {
        let rs = Rs15_9::new();
        assert_eq!(rs.symbol_bits(), 4);
        assert_eq!(rs.codeword_len(), 15);
        assert_eq!(rs.message_len(), 9);
        assert_eq!(rs.parity_len(), 6);
    }

    #[test]
    fn encode_appends_parity_after_message() {
        let rs = Rs15_9::new();
        let message = [6, 15, 8, 9, 8, 3, 0, 0, 5];
        let codeword = rs.encode(&message);
        assert_eq!(&codeword[..9], &message);
        assert!(rs.is_codeword(&codeword));
    }

    #[test]
    fn four_errors_trip_the_locator_degree_guard() {
        let rs = Rs15_9::new();
        // four corruptions of a known codeword whose locator comes out
        // with degree above T
        let mut word = [6, 10, 8, 9, 8, 3, 7, 0, 5, 2, 12, 11, 12, 0, 9];
        let err = rs.try_correct_in_place(&mut word).unwrap_err();
        assert!(matches!(err, DecodeError::LocatorDegreeTooHigh { .. }));
    }

    #[test]
    fn four_errors_trip_the_root_count_guard() {
        let rs = Rs15_9::new();
        // four corruptions whose degree-<=T locator fails to split
        let mut word = [6, 15, 3, 1, 8, 3, 0, 0, 8, 0, 12, 11, 8, 0, 9];
        let err = rs.try_correct_in_place(&mut word).unwrap_err();
        assert!(matches!(err, DecodeError::RootCountMismatch { .. }));
    }

    #[test]
    fn failed_decode_leaves_buffer_unchanged() {
        let rs = Rs15_9::new();
        let mut word = [6, 10, 8, 9, 8, 3, 7, 0, 5, 2, 12, 11, 12, 0, 9];
        let before = word;
        assert!(!rs.correct_in_place(&mut word));
        assert_eq!(word, before);
    }

    #[test]
    #[should_panic(expected = "message must be exactly k symbols")]
    fn short_message_is_a_caller_error() {
        let rs = Rs15_9::new();
        rs.encode(&[1, 2, 3]);
    }
}
