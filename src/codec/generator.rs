//! Generator polynomial construction
//!
//! The code generator is g(x) = (x - alpha)(x - alpha^2)...(x - alpha^2t),
//! built incrementally by multiplying in one root at a time. A systematic
//! codeword is exactly a polynomial divisible by g(x).

use crate::galois::GaloisTable;

/// Build the generator polynomial for `parity_len = 2t` parity symbols.
///
/// Returns `parity_len + 1` coefficients, lowest degree first; the leading
/// coefficient is always 1.
pub(crate) fn generator_poly<const M: usize>(
    table: &GaloisTable<M>,
    parity_len: usize,
) -> Vec<u16> {
    let mut g = vec![0u16; parity_len + 1];
    g[0] = 1;
    let mut len = 1;

    for i in 1..=parity_len {
        let root = table.alpha_pow(i as isize);
        // g <- g * (x + root), walking down so the shifted term reads the
        // not-yet-scaled coefficient
        for j in (0..len).rev() {
            let coeff = g[j];
            g[j + 1] ^= coeff;
            g[j] = table.mul(coeff, root);
        }
        len += 1;
    }

    g
}
