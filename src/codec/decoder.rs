//! Decoding kernels: syndromes, Berlekamp-Massey, Chien search, Forney
//!
//! The received word is an array of `n` symbols whose array layout follows
//! the systematic encoder: index `j < k` carries the coefficient of
//! `x^(r + j)`, index `j >= k` the parity coefficient of `x^(j - k)`. The
//! kernels below work in degree space and translate back to array indices
//! only when reporting error positions.
//!
//! All polynomial buffers are lowest degree first.

use super::error::{DecodeError, DecodeResult};
use crate::galois::GaloisTable;

/// Polynomial degree carried by array index `j`.
#[inline]
pub(crate) fn degree_of(index: usize, msg_len: usize, parity_len: usize) -> usize {
    if index < msg_len {
        parity_len + index
    } else {
        index - msg_len
    }
}

/// Array index carrying polynomial degree `d`.
#[inline]
pub(crate) fn index_of_degree(degree: usize, msg_len: usize, parity_len: usize) -> usize {
    if degree >= parity_len {
        degree - parity_len
    } else {
        msg_len + degree
    }
}

/// Evaluate a lowest-degree-first polynomial at `x` by Horner's rule.
pub(crate) fn poly_eval<const M: usize>(table: &GaloisTable<M>, poly: &[u16], x: u16) -> u16 {
    let mut acc = 0u16;
    for &coeff in poly.iter().rev() {
        acc = table.mul(acc, x) ^ coeff;
    }
    acc
}

/// Compute the `parity_len` syndromes S_i = R(alpha^i), i in [1, 2t].
///
/// All zero exactly when the received word is a valid codeword.
pub(crate) fn compute_syndromes<const M: usize>(
    table: &GaloisTable<M>,
    word: &[u16],
    parity_len: usize,
) -> Vec<u16> {
    let msg_len = word.len() - parity_len;
    (1..=parity_len)
        .map(|i| {
            let mut s = 0u16;
            for (j, &symbol) in word.iter().enumerate() {
                if symbol != 0 {
                    let degree = degree_of(j, msg_len, parity_len);
                    s ^= table.mul(symbol, table.alpha_pow((i * degree) as isize));
                }
            }
            s
        })
        .collect()
}

/// Find the minimal-degree error locator for a syndrome sequence.
///
/// Classic Berlekamp-Massey: at each step the discrepancy between the
/// predicted and observed syndrome drives a correction drawn from the last
/// saved locator, and the saved locator is refreshed whenever the register
/// length grows (`2L <= step`). Returns the locator (lowest degree first,
/// constant term 1) and its degree L, which is the number of errors the
/// locator claims.
pub(crate) fn berlekamp_massey<const M: usize>(
    table: &GaloisTable<M>,
    syndromes: &[u16],
) -> (Vec<u16>, usize) {
    let r = syndromes.len();

    let mut lambda = vec![0u16; r + 1];
    lambda[0] = 1;

    // B(x), the locator saved at the last length change.
    let mut saved = vec![0u16; r + 1];
    saved[0] = 1;

    let mut length = 0usize;
    let mut shift = 1usize;
    let mut saved_disc = 1u16;

    for step in 0..r {
        let mut disc = syndromes[step];
        for i in 1..=length {
            if lambda[i] != 0 && syndromes[step - i] != 0 {
                disc ^= table.mul(lambda[i], syndromes[step - i]);
            }
        }

        if disc == 0 {
            shift += 1;
            continue;
        }

        let snapshot = lambda.clone();
        let scale = table.div(disc, saved_disc);
        // lambda <- lambda - (disc / saved_disc) * x^shift * B(x)
        for i in 0..=(r - shift) {
            if saved[i] != 0 {
                lambda[i + shift] ^= table.mul(scale, saved[i]);
            }
        }

        if 2 * length <= step {
            length = step + 1 - length;
            saved_disc = disc;
            saved = snapshot;
            shift = 1;
        } else {
            shift += 1;
        }
    }

    (lambda, length)
}

/// Chien search: collect every degree position d in [0, n) with
/// Lambda(alpha^-d) = 0.
///
/// Fails when the number of distinct roots disagrees with the locator
/// degree, which means the locator does not split over the field and more
/// than `t` errors occurred.
pub(crate) fn chien_search<const M: usize>(
    table: &GaloisTable<M>,
    lambda: &[u16],
    locator_degree: usize,
    block_len: usize,
) -> DecodeResult<Vec<usize>> {
    let lambda = &lambda[..=locator_degree];
    let mut degrees = Vec::with_capacity(locator_degree);

    for d in 0..block_len {
        if poly_eval(table, lambda, table.alpha_pow(-(d as isize))) == 0 {
            degrees.push(d);
        }
    }

    if degrees.len() != locator_degree {
        return Err(DecodeError::RootCountMismatch {
            degree: locator_degree,
            roots: degrees.len(),
        });
    }

    Ok(degrees)
}

/// Error evaluator Omega(x) = S(x) * Lambda(x) mod x^2t, where
/// S(x) = S_1 + S_2 x + ... + S_2t x^(2t-1).
pub(crate) fn error_evaluator<const M: usize>(
    table: &GaloisTable<M>,
    syndromes: &[u16],
    lambda: &[u16],
    locator_degree: usize,
) -> Vec<u16> {
    let r = syndromes.len();
    let mut omega = vec![0u16; r];

    for (i, &s) in syndromes.iter().enumerate() {
        if s == 0 {
            continue;
        }
        for (j, &l) in lambda.iter().enumerate().take(locator_degree + 1) {
            if i + j < r {
                omega[i + j] ^= table.mul(s, l);
            }
        }
    }

    omega
}

/// Forney's formula: magnitude Y = Omega(X^-1) / Lambda'(X^-1) at each
/// error locator X = alpha^d.
///
/// Returns `(array_index, magnitude)` pairs ready to XOR into the received
/// word. In characteristic 2 the formal derivative keeps only the
/// odd-degree terms of the locator.
pub(crate) fn error_magnitudes<const M: usize>(
    table: &GaloisTable<M>,
    omega: &[u16],
    lambda: &[u16],
    locator_degree: usize,
    error_degrees: &[usize],
    msg_len: usize,
    parity_len: usize,
) -> DecodeResult<Vec<(usize, u16)>> {
    let mut derivative = vec![0u16; locator_degree.max(1)];
    for (i, coeff) in derivative.iter_mut().enumerate() {
        if (i + 1) % 2 == 1 {
            *coeff = lambda[i + 1];
        }
    }

    let mut corrections = Vec::with_capacity(error_degrees.len());
    for &degree in error_degrees {
        let x_inv = table.alpha_pow(-(degree as isize));
        let position = index_of_degree(degree, msg_len, parity_len);

        let denominator = poly_eval(table, &derivative, x_inv);
        if denominator == 0 {
            return Err(DecodeError::DegenerateLocator { position });
        }

        let magnitude = table.div(poly_eval(table, omega, x_inv), denominator);
        if magnitude == 0 {
            return Err(DecodeError::ZeroMagnitude { position });
        }

        corrections.push((position, magnitude));
    }

    Ok(corrections)
}

/// Apply corrections to a scratch copy of the word and verify the result
/// is a valid codeword.
///
/// The caller's buffer is untouched; it commits the returned word only on
/// success, so a failed decode never leaves a half-corrected buffer
/// behind.
pub(crate) fn apply_corrections<const M: usize>(
    table: &GaloisTable<M>,
    word: &[u16],
    corrections: &[(usize, u16)],
    parity_len: usize,
) -> DecodeResult<Vec<u16>> {
    let mut candidate = word.to_vec();
    for &(position, magnitude) in corrections {
        candidate[position] ^= magnitude;
    }

    let residual = compute_syndromes(table, &candidate, parity_len);
    if residual.iter().any(|&s| s != 0) {
        return Err(DecodeError::ResidualSyndrome);
    }

    Ok(candidate)
}
