//! Property-based tests for the Reed-Solomon codec
//!
//! These tests use proptest to validate the field arithmetic laws and the
//! encode/decode contract with randomly generated inputs.

use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use rsfec::{GaloisTable, Rs15_9, Rs255_239};

proptest! {
    /// Property: GF(16) addition is commutative and self-inverse
    #[test]
    fn prop_gf16_addition_laws(a in 0u16..16, b in 0u16..16) {
        prop_assert_eq!(GaloisTable::<4>::add(a, b), GaloisTable::<4>::add(b, a));
        prop_assert_eq!(GaloisTable::<4>::add(a, a), 0);
        prop_assert_eq!(GaloisTable::<4>::add(a, 0), a);
    }

    /// Property: GF(16) multiplication is commutative
    #[test]
    fn prop_gf16_multiplication_commutative(a in 0u16..16, b in 0u16..16) {
        let gf = GaloisTable::<4>::new();
        prop_assert_eq!(gf.mul(a, b), gf.mul(b, a));
    }

    /// Property: GF(16) multiplication is associative
    #[test]
    fn prop_gf16_multiplication_associative(a in 0u16..16, b in 0u16..16, c in 0u16..16) {
        let gf = GaloisTable::<4>::new();
        prop_assert_eq!(gf.mul(gf.mul(a, b), c), gf.mul(a, gf.mul(b, c)));
    }

    /// Property: distributive law a * (b + c) = a * b + a * c
    #[test]
    fn prop_gf16_distributive(a in 0u16..16, b in 0u16..16, c in 0u16..16) {
        let gf = GaloisTable::<4>::new();
        let left = gf.mul(a, b ^ c);
        let right = gf.mul(a, b) ^ gf.mul(a, c);
        prop_assert_eq!(left, right);
    }

    /// Property: multiplicative inverse a * a^-1 = 1 for nonzero a
    #[test]
    fn prop_gf256_multiplicative_inverse(a in 1u16..256) {
        let gf = GaloisTable::<8>::new();
        prop_assert_eq!(gf.mul(a, gf.inv(a)), 1);
        prop_assert_eq!(gf.inv(gf.inv(a)), a);
    }

    /// Property: division undoes multiplication for nonzero divisors
    #[test]
    fn prop_gf256_division_consistency(a in 0u16..256, b in 1u16..256) {
        let gf = GaloisTable::<8>::new();
        prop_assert_eq!(gf.mul(gf.div(a, b), b), a);
    }

    /// Property: pow agrees with repeated multiplication
    #[test]
    fn prop_gf16_power_consistency(a in 0u16..16, e in 0usize..40) {
        let gf = GaloisTable::<4>::new();
        let mut manual = 1u16;
        for _ in 0..e {
            manual = gf.mul(manual, a);
        }
        prop_assert_eq!(gf.pow(a, e), manual);
    }

    /// Property: noise-free round trip recovers every message
    #[test]
    fn prop_roundtrip_rs_15_9(message in vec(0u16..16, 9)) {
        let rs = Rs15_9::new();
        let codeword = rs.encode(&message);
        prop_assert_eq!(rs.decode(&codeword), Some(message));
    }

    /// Property: every encoded word has all-zero syndromes
    #[test]
    fn prop_parity_zero_syndromes(message in vec(0u16..16, 9)) {
        let rs = Rs15_9::new();
        prop_assert!(rs.is_codeword(&rs.encode(&message)));
    }

    /// Property: any pattern of up to t errors is corrected exactly
    #[test]
    fn prop_corrects_within_capacity(
        message in vec(0u16..16, 9),
        positions in hash_set(0usize..15, 0..=3),
        magnitudes in vec(1u16..16, 3),
    ) {
        let rs = Rs15_9::new();
        let codeword = rs.encode(&message);

        let mut received = codeword.clone();
        for (&p, &m) in positions.iter().zip(magnitudes.iter()) {
            received[p] ^= m;
        }

        let mut corrected = received.clone();
        prop_assert_eq!(rs.try_correct_in_place(&mut corrected), Ok(positions.len()));
        prop_assert_eq!(corrected, codeword);
        prop_assert_eq!(rs.decode(&received), Some(message));
    }

    /// Property: decoding an already-valid codeword is the identity
    #[test]
    fn prop_idempotent_decode(message in vec(0u16..256, 239)) {
        let rs = Rs255_239::new();
        let codeword = rs.encode(&message);
        let mut word = codeword.clone();
        prop_assert_eq!(rs.try_correct_in_place(&mut word), Ok(0));
        prop_assert_eq!(word, codeword);
    }
}
